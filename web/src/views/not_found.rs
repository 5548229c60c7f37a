use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Shown for unknown routes and for listings that no longer exist.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-container">
            <div class="not-found-card">
                <div class="not-found-code">"404"</div>
                <h1 class="not-found-title">"Listing not found"</h1>
                <p class="not-found-text">
                    "This stay may have been removed by its host, or the link is mistyped."
                </p>

                <div class="not-found-actions">
                    <button
                        class="not-found-btn-primary"
                        on:click=move |_| navigate("/", Default::default())
                    >
                        "🏠 Go Home"
                    </button>
                    <button
                        class="not-found-btn-secondary"
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Ok(history) = window.history() {
                                    let _ = history.back();
                                }
                            }
                        }
                    >
                        "⬅️ Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
