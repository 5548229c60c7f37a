use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::login_modal::use_login_modal;
use crate::utils::auth::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let login_modal = use_login_modal();

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Haven"
                    </A>
                </div>

                <div class="navbar__links">
                    {move || match session.user.get() {
                        None if !session.resolved.get() => view! {}.into_any(),
                        Some(user) => view! {
                            <span class="navbar__greeting">
                                {format!("Hi, {}", user.name.unwrap_or_else(|| "guest".to_string()))}
                            </span>
                            <button
                                class="navbar__link"
                                on:click=move |_| session.sign_out()
                            >
                                "Log out"
                            </button>
                        }.into_any(),
                        None => view! {
                            <button
                                class="navbar__link navbar__link--cta"
                                on:click=move |_| login_modal.on_open()
                            >
                                "Log in"
                            </button>
                        }.into_any(),
                    }}
                </div>
            </div>
        </nav>
    }
}
