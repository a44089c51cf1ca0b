//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `Role` is a closed enum rather than a free-form string: a stored identity
//! carrying a role this build does not know is a parse failure, and the
//! session layer treats it exactly like any other corrupted record instead
//! of letting an unknown role slip through the route guards.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authorization tier of a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Hr,
    Admin,
}

impl Role {
    /// Human-readable label for headers and chips.
    pub fn label(self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Hr => "HR",
            Role::Admin => "Admin",
        }
    }
}

/// The authenticated principal as issued by the backend at login.
///
/// `name` and `email` are pass-through profile data; only `id` and `role`
/// are interpreted by the session layer, so both stay optional and a
/// minimal `{id, role}` record parses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque unique identifier, stable for the lifetime of the account.
    pub id: String,
    /// Authorization tier; drives route gating.
    pub role: Role,
    /// Display name, if the backend provided one.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email, if the backend provided one.
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    /// Best display string: the name when present, the id otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
