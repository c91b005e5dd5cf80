//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpGradingApi;
use crate::pages::dashboard::DashboardPage;
use crate::state::auth::AuthState;
use crate::util::task::spawn_ui;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the API client, and auth state, then loads the current
/// user once on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = HttpGradingApi::new(&config);
    let auth = RwSignal::new(AuthState::pending());

    provide_context(config);
    provide_context(api.clone());
    provide_context(auth);

    Effect::new(move || {
        let api = api.clone();
        spawn_ui(async move {
            let user = api.fetch_current_user().await;
            if user.is_none() {
                log::info!("no authenticated user");
            }
            auth.set(AuthState { user, loading: false });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/docgrade.css"/>
        <Title text="Compliance Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
