//! Role gate for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in `AccessGuard` so unauthenticated
//! and unauthorized visitors get identical redirect behavior. This is a UX
//! guard: the backend still validates the bearer token on every request.

#[cfg(test)]
#[path = "access_guard_test.rs"]
mod access_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::{SessionState, SessionStore};

/// What a protected view boundary should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore has not finished; show a neutral placeholder so a
    /// signed-in user reloading the page never sees a redirect flash.
    Wait,
    /// Send the visitor to the login page.
    RedirectLogin,
    /// Render the protected content.
    Render,
}

/// Decide the boundary behavior for `state` against `allowed_roles`.
///
/// An empty `allowed_roles` admits any authenticated user. A signed-in user
/// whose role is outside the set is redirected exactly like an anonymous
/// visitor, so restricted routes do not reveal which roles exist.
pub fn evaluate(state: &SessionState, allowed_roles: &[Role]) -> GuardDecision {
    match state {
        SessionState::Unresolved => GuardDecision::Wait,
        SessionState::Anonymous => GuardDecision::RedirectLogin,
        SessionState::Authenticated { identity, .. } => {
            if allowed_roles.is_empty() || allowed_roles.contains(&identity.role) {
                GuardDecision::Render
            } else {
                GuardDecision::RedirectLogin
            }
        }
    }
}

/// Gate wrapping a protected view.
///
/// Re-evaluates [`evaluate`] whenever the session changes and redirects to
/// `/login` from an effect, so the decision reacts to login and logout
/// without any page-level wiring.
#[component]
pub fn AccessGuard(
    /// Roles admitted to the wrapped content; empty admits any signed-in user.
    #[prop(optional)]
    allowed_roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let allowed = StoredValue::new(allowed_roles);

    let decision = Memo::new(move |_| {
        session.with(|store| allowed.with_value(|roles| evaluate(store.state(), roles)))
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if decision.get() == GuardDecision::RedirectLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Wait => {
                view! { <div class="access-guard__loading">"Loading..."</div> }.into_any()
            }
            GuardDecision::RedirectLogin => ().into_any(),
            GuardDecision::Render => children().into_any(),
        }}
    }
}
