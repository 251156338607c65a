//! Domain model for the rollbook.
//!
//! # Responsibility
//! - Define the canonical validated student record.
//! - Keep field invariants co-located with the record definition.
//!
//! # Invariants
//! - Required fields are enforced at construction and on every mutation;
//!   there is no write path around the validation.

pub mod student;
