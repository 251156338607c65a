//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical student record and its display format.
//! - Enforce the required-field invariant on every write path.
//!
//! # Invariants
//! - `name` and `surname` are never empty at any observable point.
//! - Construction and mutation share one validation path; neither can
//!   bypass it.
//! - Validation rejects exactly the empty string. Whitespace-only values
//!   pass, matching the narrow "not empty" rule this model was specified
//!   against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required text field of a [`Student`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Surname,
}

impl RequiredField {
    /// Field name as it appears in error messages and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
        }
    }
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a required text field would become empty.
///
/// Carries the offending field and the rejected value so callers can report
/// the failure without re-deriving context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFieldError {
    pub field: RequiredField,
    pub value: String,
}

impl Display for InvalidFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: `{}`", self.field, self.value)
    }
}

impl Error for InvalidFieldError {}

/// Validated student record.
///
/// `name` and `surname` are private and only reachable through getters and
/// validating setters; `group`, `track` and `date_of_birth` are free-form
/// and carry no validation. Equality is structural; identity (when needed)
/// is assigned by the roster, not embedded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStudent")]
pub struct Student {
    name: String,
    surname: String,
    /// Class group, e.g. `"5"`. Stored verbatim.
    pub group: String,
    /// Class track/section, e.g. `"A"`. Stored verbatim.
    pub track: String,
    pub date_of_birth: NaiveDate,
}

/// Wire shape for [`Student`] deserialization.
///
/// Deserializing through this raw struct and `TryFrom` keeps the
/// required-field invariant intact for payloads as well: an empty `name` or
/// `surname` on the wire fails to decode instead of producing an invalid
/// record.
#[derive(Debug, Deserialize)]
struct RawStudent {
    name: String,
    surname: String,
    group: String,
    track: String,
    date_of_birth: NaiveDate,
}

impl TryFrom<RawStudent> for Student {
    type Error = InvalidFieldError;

    fn try_from(raw: RawStudent) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.surname,
            raw.group,
            raw.track,
            raw.date_of_birth,
        )
    }
}

impl Student {
    /// Creates a new student record.
    ///
    /// The single canonical constructor: `name` and `surname` pass through
    /// the same check the setters use, so a record violating the
    /// required-field invariant never exists.
    ///
    /// # Errors
    /// Returns [`InvalidFieldError`] when `name` or `surname` is empty; no
    /// record is produced.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        group: impl Into<String>,
        track: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Result<Self, InvalidFieldError> {
        let name = name.into();
        let surname = surname.into();
        validate_required(RequiredField::Name, &name)?;
        validate_required(RequiredField::Surname, &surname)?;

        Ok(Self {
            name,
            surname,
            group: group.into(),
            track: track.into(),
            date_of_birth,
        })
    }

    /// Creates a student not yet assigned to any class.
    ///
    /// Supplies empty `group`/`track` defaults and delegates to
    /// [`Student::new`], so the invariant is still enforced on one path.
    pub fn unassigned(
        name: impl Into<String>,
        surname: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Result<Self, InvalidFieldError> {
        Self::new(name, surname, "", "", date_of_birth)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Replaces `name` after validation.
    ///
    /// # Errors
    /// Returns [`InvalidFieldError`] when `value` is empty; the stored name
    /// is left unchanged.
    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), InvalidFieldError> {
        let value = value.into();
        validate_required(RequiredField::Name, &value)?;
        self.name = value;
        Ok(())
    }

    /// Replaces `surname` after validation.
    ///
    /// # Errors
    /// Returns [`InvalidFieldError`] when `value` is empty; the stored
    /// surname is left unchanged.
    pub fn set_surname(&mut self, value: impl Into<String>) -> Result<(), InvalidFieldError> {
        let value = value.into();
        validate_required(RequiredField::Surname, &value)?;
        self.surname = value;
        Ok(())
    }
}

/// Canonical display format:
/// `<name> <surname> (<date_of_birth>), classe <group><track>`.
///
/// The date renders in ISO 8601 (`YYYY-MM-DD`). Pure projection of state;
/// repeated calls without mutation yield identical output.
impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}), classe {}{}",
            self.name, self.surname, self.date_of_birth, self.group, self.track
        )
    }
}

fn validate_required(field: RequiredField, value: &str) -> Result<(), InvalidFieldError> {
    if value.is_empty() {
        return Err(InvalidFieldError {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
