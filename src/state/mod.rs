//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each state value lives in an `RwSignal` provided through context by the
//! root component, so pages and components subscribe by reading the signal
//! inside reactive scopes instead of poking module-level globals.

pub mod session;
