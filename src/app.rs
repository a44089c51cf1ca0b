//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::access_guard::AccessGuard;
use crate::net::types::Role;
use crate::pages::{admin::AdminPage, login::LoginPage, overview::OverviewPage, people::PeoplePage};
use crate::state::session::SessionStore;

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
/// Owns the session store: restores any persisted session synchronously,
/// before the router mounts, so guards only ever see a settled state, then
/// provides the store to the whole tree through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: RwSignal<SessionStore> = RwSignal::new(SessionStore::default());
    session.update(|store| store.hydrate());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/peopledesk.css"/>
        <Title text="PeopleDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <AccessGuard>
                                <OverviewPage/>
                            </AccessGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("people")
                    view=|| {
                        view! {
                            <AccessGuard allowed_roles=vec![Role::Hr, Role::Admin]>
                                <PeoplePage/>
                            </AccessGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <AccessGuard allowed_roles=vec![Role::Admin]>
                                <AdminPage/>
                            </AccessGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
