//! Landing page for any signed-in user.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;
use crate::state::session::SessionStore;

/// Workspace overview, the default route behind the session guard.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let greeting = move || {
        session.with(|store| {
            store.current_identity().map_or_else(String::new, |identity| {
                format!("Welcome back, {}", identity.display_name())
            })
        })
    };

    view! {
        <div class="overview-page">
            <TopBar/>
            <main class="overview-page__body">
                <h1>{greeting}</h1>
                <p>"Pick a section above to get started."</p>
            </main>
        </div>
    }
}
