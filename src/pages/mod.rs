//! Page components, one per route.

pub mod admin;
pub mod login;
pub mod overview;
pub mod people;
