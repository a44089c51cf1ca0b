//! Admin section, reachable only by the admin role.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Administration shell for account and workspace settings.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <TopBar/>
            <main class="admin-page__body">
                <h1>"Administration"</h1>
                <p>"Workspace configuration and account management."</p>
            </main>
        </div>
    }
}
