//! Roster use-case service.
//!
//! # Responsibility
//! - Hold enrolled students in memory and hand out stable ids.
//! - Route every mutation of validated fields through the model's setters.
//!
//! # Invariants
//! - A `StudentId` is never reused for another student within one roster.
//! - Failed mutations leave the stored record unchanged.
//! - Log events carry ids and counts only, never student names.

use crate::model::student::{InvalidFieldError, Student};
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to a student at enrollment.
///
/// Identity lives in the roster; the record itself keeps structural
/// equality.
pub type StudentId = Uuid;

pub type RosterResult<T> = Result<T, RosterError>;

/// Error for roster operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No student is enrolled under the given id.
    NotFound(StudentId),
    /// A validated field rejected the new value.
    Invalid(InvalidFieldError),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<InvalidFieldError> for RosterError {
    fn from(value: InvalidFieldError) -> Self {
        Self::Invalid(value)
    }
}

/// In-memory collection of enrolled students keyed by [`StudentId`].
///
/// A `BTreeMap` keeps iteration order deterministic (ascending id), so
/// listings are stable across runs with the same ids.
#[derive(Debug, Default)]
pub struct Roster {
    students: BTreeMap<StudentId, Student>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrolls a student and returns the id assigned to them.
    pub fn enroll(&mut self, student: Student) -> StudentId {
        let id = Uuid::new_v4();
        self.students.insert(id, student);
        info!(
            "event=student_enrolled module=roster status=ok id={id} total={}",
            self.students.len()
        );
        id
    }

    /// Gets an enrolled student by id.
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Gets a mutable reference to an enrolled student.
    ///
    /// Validated fields stay protected: the only mutation path for
    /// `name`/`surname` on the returned record is the validating setters.
    pub fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.get_mut(&id)
    }

    /// Replaces the name of an enrolled student.
    ///
    /// # Errors
    /// - [`RosterError::NotFound`] when `id` is not enrolled.
    /// - [`RosterError::Invalid`] when `value` is empty; the stored name is
    ///   left unchanged.
    pub fn rename(&mut self, id: StudentId, value: &str) -> RosterResult<()> {
        let student = self.students.get_mut(&id).ok_or(RosterError::NotFound(id))?;
        student.set_name(value)?;
        info!("event=student_renamed module=roster status=ok id={id}");
        Ok(())
    }

    /// Replaces the surname of an enrolled student.
    ///
    /// Same contract as [`Roster::rename`].
    pub fn change_surname(&mut self, id: StudentId, value: &str) -> RosterResult<()> {
        let student = self.students.get_mut(&id).ok_or(RosterError::NotFound(id))?;
        student.set_surname(value)?;
        info!("event=student_surname_changed module=roster status=ok id={id}");
        Ok(())
    }

    /// Withdraws a student from the roster, returning the record.
    ///
    /// # Errors
    /// Returns [`RosterError::NotFound`] when `id` is not enrolled.
    pub fn withdraw(&mut self, id: StudentId) -> RosterResult<Student> {
        let student = self
            .students
            .remove(&id)
            .ok_or(RosterError::NotFound(id))?;
        info!(
            "event=student_withdrawn module=roster status=ok id={id} total={}",
            self.students.len()
        );
        Ok(student)
    }

    /// Iterates enrolled students in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentId, &Student)> {
        self.students.iter().map(|(id, student)| (*id, student))
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Canonically formatted line per student, sorted by surname then name.
    pub fn roll_call(&self) -> Vec<String> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by(|a, b| {
            a.surname()
                .cmp(b.surname())
                .then_with(|| a.name().cmp(b.name()))
        });
        students.iter().map(|student| student.to_string()).collect()
    }
}
