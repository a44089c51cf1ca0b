//! Top bar showing the signed-in user, section links, and logout.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Header bar for signed-in pages.
///
/// The logout button tells the backend first (using the current bearer
/// token), then drops the local session; the guard on the current route
/// reacts to the state change, but navigation goes through
/// `window.location` for a clean slate.
#[component]
pub fn TopBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let user_name = move || {
        session.with(|store| {
            store
                .current_identity()
                .map_or_else(String::new, |identity| identity.display_name().to_owned())
        })
    };
    let role_label = move || {
        session.with(|store| {
            store
                .current_identity()
                .map_or("", |identity| identity.role.label())
        })
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let credential =
                    session.with_untracked(|store| store.current_credential().map(str::to_owned));
                if let Some(token) = credential {
                    crate::net::api::logout(&token).await;
                }
                session.update(|store| store.logout());
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <div class="top-bar">
            <a href="/" class="top-bar__brand">
                "PeopleDesk"
            </a>
            <nav class="top-bar__nav">
                <a href="/" class="top-bar__link">
                    "Overview"
                </a>
                <a href="/people" class="top-bar__link">
                    "People"
                </a>
                <a href="/admin" class="top-bar__link">
                    "Admin"
                </a>
            </nav>
            <span class="top-bar__spacer"></span>
            <span class="top-bar__user">{user_name}</span>
            <span class="top-bar__role">{role_label}</span>
            <button class="btn top-bar__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
