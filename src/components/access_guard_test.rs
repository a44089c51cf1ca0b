use super::*;
use crate::net::types::Identity;
use crate::util::storage::{MemoryStorage, SessionStorage};

fn authenticated(role: Role) -> SessionState {
    SessionState::Authenticated {
        identity: Identity {
            id: "E1".to_owned(),
            role,
            name: None,
            email: None,
        },
        credential: "abc123".to_owned(),
    }
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn unresolved_session_waits() {
    assert_eq!(evaluate(&SessionState::Unresolved, &[]), GuardDecision::Wait);
    assert_eq!(
        evaluate(&SessionState::Unresolved, &[Role::Admin]),
        GuardDecision::Wait
    );
}

#[test]
fn anonymous_session_redirects() {
    assert_eq!(
        evaluate(&SessionState::Anonymous, &[]),
        GuardDecision::RedirectLogin
    );
    assert_eq!(
        evaluate(&SessionState::Anonymous, &[Role::Employee]),
        GuardDecision::RedirectLogin
    );
}

#[test]
fn empty_allowed_roles_admits_any_authenticated_user() {
    assert_eq!(evaluate(&authenticated(Role::Employee), &[]), GuardDecision::Render);
    assert_eq!(evaluate(&authenticated(Role::Admin), &[]), GuardDecision::Render);
}

#[test]
fn employee_is_redirected_from_hr_route() {
    let allowed = [Role::Admin, Role::Hr];
    assert_eq!(
        evaluate(&authenticated(Role::Employee), &allowed),
        GuardDecision::RedirectLogin
    );
}

#[test]
fn hr_is_admitted_to_hr_route() {
    let allowed = [Role::Admin, Role::Hr];
    assert_eq!(evaluate(&authenticated(Role::Hr), &allowed), GuardDecision::Render);
}

#[test]
fn only_admin_passes_admin_route() {
    let allowed = [Role::Admin];
    assert_eq!(evaluate(&authenticated(Role::Admin), &allowed), GuardDecision::Render);
    assert_eq!(
        evaluate(&authenticated(Role::Hr), &allowed),
        GuardDecision::RedirectLogin
    );
}

// =============================================================
// Against a restored session
// =============================================================

#[test]
fn restored_session_feeds_the_decision() {
    let storage = MemoryStorage::new();
    storage.set("token", "abc123");
    storage.set("user", r#"{"id":"E1","role":"hr"}"#);

    let mut store = SessionStore::new(storage);
    store.hydrate();

    assert_eq!(evaluate(store.state(), &[]), GuardDecision::Render);
    assert_eq!(
        evaluate(store.state(), &[Role::Admin]),
        GuardDecision::RedirectLogin
    );
}

#[test]
fn logout_flips_decision_to_redirect() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.hydrate();
    store.login(
        Identity {
            id: "E1".to_owned(),
            role: Role::Employee,
            name: None,
            email: None,
        },
        "abc123".to_owned(),
    );
    assert_eq!(evaluate(store.state(), &[]), GuardDecision::Render);

    store.logout();
    assert_eq!(evaluate(store.state(), &[]), GuardDecision::RedirectLogin);
}
