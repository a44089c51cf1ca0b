//! People section, reachable by HR and admin roles.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Employee directory and records shell. The record views themselves are
/// served by separate feature modules; this page is their mount point.
#[component]
pub fn PeoplePage() -> impl IntoView {
    view! {
        <div class="people-page">
            <TopBar/>
            <main class="people-page__body">
                <h1>"People"</h1>
                <p>"Employee records and directory tools."</p>
            </main>
        </div>
    }
}
