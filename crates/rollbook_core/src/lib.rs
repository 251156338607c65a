//! Core domain logic for rollbook.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{InvalidFieldError, RequiredField, Student};
pub use service::roster_service::{Roster, RosterError, RosterResult, StudentId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
