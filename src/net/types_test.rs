use super::*;

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"employee\"");
    assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"hr\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_parses_lowercase() {
    assert_eq!(serde_json::from_str::<Role>("\"hr\"").unwrap(), Role::Hr);
}

#[test]
fn unknown_role_is_a_parse_failure() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn capitalized_role_is_a_parse_failure() {
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
}

// =============================================================
// Identity serde
// =============================================================

#[test]
fn identity_parses_without_profile_fields() {
    let identity: Identity = serde_json::from_str(r#"{"id":"E1","role":"hr"}"#).unwrap();
    assert_eq!(identity.id, "E1");
    assert_eq!(identity.role, Role::Hr);
    assert!(identity.name.is_none());
    assert!(identity.email.is_none());
}

#[test]
fn identity_round_trips_with_profile_fields() {
    let identity = Identity {
        id: "E7".to_owned(),
        role: Role::Admin,
        name: Some("Dana".to_owned()),
        email: Some("dana@example.com".to_owned()),
    };
    let raw = serde_json::to_string(&identity).unwrap();
    let parsed: Identity = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, identity);
}

#[test]
fn identity_without_role_is_a_parse_failure() {
    assert!(serde_json::from_str::<Identity>(r#"{"id":"E1"}"#).is_err());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn display_name_prefers_name_over_id() {
    let identity = Identity {
        id: "E7".to_owned(),
        role: Role::Employee,
        name: Some("Dana".to_owned()),
        email: None,
    };
    assert_eq!(identity.display_name(), "Dana");
}

#[test]
fn display_name_falls_back_to_id() {
    let identity: Identity = serde_json::from_str(r#"{"id":"E1","role":"hr"}"#).unwrap();
    assert_eq!(identity.display_name(), "E1");
}

#[test]
fn role_labels_are_distinct() {
    assert_ne!(Role::Employee.label(), Role::Hr.label());
    assert_ne!(Role::Hr.label(), Role::Admin.label());
}
