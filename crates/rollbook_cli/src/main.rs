//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rollbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use rollbook_core::Student;

fn main() {
    println!("rollbook_core version={}", rollbook_core::core_version());

    // A fixed sample record keeps the probe output stable across runs.
    let dob = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    match Student::new("Pippo", "VanWoof", "5", "A", dob) {
        Ok(student) => println!("sample student: {student}"),
        Err(err) => eprintln!("sample student rejected: {err}"),
    }
}
