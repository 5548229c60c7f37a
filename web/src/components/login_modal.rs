use leptos::{prelude::*, task::spawn_local};
use thaw::*;

use crate::server::login_user;
use crate::utils::auth::use_session;

/// Open/close handle for the login modal, shared through context.
#[derive(Clone, Copy)]
pub struct LoginModalHandle {
    is_open: RwSignal<bool>,
}

impl LoginModalHandle {
    pub fn on_open(&self) {
        self.is_open.set(true);
    }

    pub fn on_close(&self) {
        self.is_open.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }
}

pub fn provide_login_modal() -> LoginModalHandle {
    let handle = LoginModalHandle {
        is_open: RwSignal::new(false),
    };
    provide_context(handle);
    handle
}

pub fn use_login_modal() -> LoginModalHandle {
    expect_context::<LoginModalHandle>()
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let modal = use_login_modal();
    let session = use_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled = Memo::new(move |_| {
        email.get().trim().is_empty() || password.get().is_empty() || loading.get()
    });

    let close_modal = move || {
        password.set(String::new());
        error_message.set(None);
        modal.on_close();
    };

    let submit_login = move || {
        loading.set(true);
        error_message.set(None);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        spawn_local(async move {
            match login_user(email_value, password_value).await {
                Ok(response) => match (response.success, response.token, response.user) {
                    (true, Some(token), Some(user)) => {
                        session.sign_in(&token, user);
                        password.set(String::new());
                        modal.on_close();
                    }
                    _ => {
                        error_message.set(
                            response
                                .error
                                .or_else(|| Some("Login failed".to_string())),
                        );
                    }
                },
                Err(e) => {
                    error_message.set(Some(format!("Login failed: {}", e)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class=move || if modal.is_open() { "login-modal-overlay show" } else { "login-modal-overlay" }>
            <div class="login-modal">
                <div class="modal-header">
                    <h2>"Welcome back"</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| close_modal()
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>

                <form class="modal-content" on:submit=move |ev| {
                    ev.prevent_default();
                    if !is_button_disabled.get_untracked() {
                        submit_login();
                    }
                }>
                    <p class="login-modal-subtitle">"Log in to your account to book this stay"</p>

                    {move || error_message.get().map(|msg| view! {
                        <MessageBar intent=MessageBarIntent::Error>{msg}</MessageBar>
                    })}

                    <div class="form-group">
                        <label for="login-email">"Email"</label>
                        <Input
                            id="login-email"
                            input_type=InputType::Email
                            placeholder="you@example.com"
                            value=email
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">"Password"</label>
                        <Input
                            id="login-password"
                            input_type=InputType::Password
                            placeholder="Password"
                            value=password
                        />
                    </div>

                    <button
                        type="submit"
                        class="login-submit"
                        disabled=move || is_button_disabled.get()
                    >
                        {move || if loading.get() { "Logging in..." } else { "Continue" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
