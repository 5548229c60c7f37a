use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <MessageBar intent=MessageBarIntent::Error>
                <strong class="error-title">
                    {title.unwrap_or_else(|| "Something went wrong".to_string())}
                </strong>
                " "
                {message.unwrap_or_else(|| "Please refresh the page and try again.".to_string())}
            </MessageBar>
        </div>
    }
}
