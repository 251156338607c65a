//! Use-case services over the domain model.
//!
//! # Responsibility
//! - Provide stable entry points for callers managing student records.
//! - Keep record identity and collection concerns out of the model layer.

pub mod roster_service;
