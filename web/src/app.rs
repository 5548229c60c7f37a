use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::{login_modal::provide_login_modal, LoginModal, Navbar};
use crate::utils::auth::provide_session;
use crate::views::{listing::ListingPage, not_found::NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session();
    provide_login_modal();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/haven-web.css"/>

        <Title text="Haven"/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <LoginModal/>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route
                            path=(StaticSegment("listings"), ParamSegment("listing_id"))
                            view=ListingPage
                        />
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

/// Landing page; listings are reached through shared links.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="home-container">
            <h1 class="home-title">"Find your next stay"</h1>
            <p class="home-subtitle">
                "Open a listing link to check availability and head to checkout."
            </p>
        </div>
    }
}
