//! # Tuition Classes
//!
//! A tuition class groups the students enrolled in it and the tutors assigned
//! to teach it. Membership is value-based: a class holds copies of the people
//! in it, and the membership checks [`TuitionClass::has_student`] and
//! [`TuitionClass::has_tutor`] compare with full structural equality. Those
//! checks are the sole arbiters of "already joined"; the mutators
//! [`TuitionClass::add_student`] and [`TuitionClass::add_tutor`] do not
//! re-check, so callers must check first to preserve the no-duplicates
//! invariant.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::person::{Student, Tutor};

///////////////////////////////////////////// ClassName //////////////////////////////////////////////

/// Error returned when parsing an invalid class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNameParseError {
    invalid_name: String,
}

impl ClassNameParseError {
    /// Creates a new ClassNameParseError.
    pub fn new(name: String) -> Self {
        ClassNameParseError { invalid_name: name }
    }

    /// Returns the invalid name that caused the error.
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

impl Display for ClassNameParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Invalid class name {:?}. Class names must be a single alphanumeric code such as CS2103T",
            self.invalid_name
        )
    }
}

impl std::error::Error for ClassNameParseError {}

/// A class identifier such as `CS2103T`.
///
/// Class names are non-empty and strictly alphanumeric. Lookups compare
/// class names with exact, case-sensitive string equality.
///
/// # Examples
///
/// ```rust
/// use rosterbook::ClassName;
///
/// let name = ClassName::new("CS2103T").unwrap();
/// assert_eq!(name.as_str(), "CS2103T");
///
/// assert!(ClassName::new("").is_none());
/// assert!(ClassName::new("CS 2103").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassName(String);

impl ClassName {
    /// Creates a new ClassName if the string is a single alphanumeric code.
    pub fn new(name: impl Into<String>) -> Option<ClassName> {
        let s = name.into();
        if !s.is_empty() && s.chars().all(char::is_alphanumeric) {
            Some(ClassName(s))
        } else {
            None
        }
    }

    /// Returns the class name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ClassName and returns the inner String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ClassName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClassName {
    type Err = ClassNameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassName::new(s).ok_or_else(|| ClassNameParseError::new(s.to_string()))
    }
}

//////////////////////////////////////////// TuitionClass ////////////////////////////////////////////

/// A tuition class with its enrolled students and assigned tutors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuitionClass {
    name: ClassName,
    students: Vec<Student>,
    tutors: Vec<Tutor>,
}

impl TuitionClass {
    /// Creates a new, empty TuitionClass.
    pub fn new(name: ClassName) -> Self {
        TuitionClass {
            name,
            students: Vec::new(),
            tutors: Vec::new(),
        }
    }

    /// Returns the class name.
    pub fn name(&self) -> &ClassName {
        &self.name
    }

    /// Returns the enrolled students.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Returns the assigned tutors.
    pub fn tutors(&self) -> &[Tutor] {
        &self.tutors
    }

    /// Reports whether the given student is already enrolled in this class.
    pub fn has_student(&self, student: &Student) -> bool {
        self.students.contains(student)
    }

    /// Reports whether the given tutor is already assigned to this class.
    pub fn has_tutor(&self, tutor: &Tutor) -> bool {
        self.tutors.contains(tutor)
    }

    /// Enrolls a student in this class.
    ///
    /// Callers must check [`TuitionClass::has_student`] first; this method
    /// does not guard against duplicates.
    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Assigns a tutor to this class.
    ///
    /// Callers must check [`TuitionClass::has_tutor`] first; this method
    /// does not guard against duplicates.
    pub fn add_tutor(&mut self, tutor: Tutor) {
        self.tutors.push(tutor);
    }

    /// Removes any member with the given name from both membership sets.
    ///
    /// Returns true when at least one member was removed.
    pub fn remove_member(&mut self, name: &str) -> bool {
        let before = self.students.len() + self.tutors.len();
        self.students.retain(|s| s.name().as_str() != name);
        self.tutors.retain(|t| t.name().as_str() != name);
        before != self.students.len() + self.tutors.len()
    }
}

impl Display for TuitionClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let students: Vec<&str> = self.students.iter().map(|s| s.name().as_str()).collect();
        let tutors: Vec<&str> = self.tutors.iter().map(|t| t.name().as_str()).collect();
        write!(
            f,
            "{} (students: {}; tutors: {})",
            self.name,
            if students.is_empty() { "none".to_string() } else { students.join(", ") },
            if tutors.is_empty() { "none".to_string() } else { tutors.join(", ") },
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::person::{Address, Email, Name, Phone};

    fn sample_student(name: &str) -> Student {
        Student::new(
            Name::new(name).unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("10 Kent Ridge Road").unwrap(),
            BTreeSet::new(),
        )
    }

    fn sample_tutor(name: &str) -> Tutor {
        Tutor::new(
            Name::new(name).unwrap(),
            Phone::new("91234567").unwrap(),
            Email::new("smith@example.com").unwrap(),
            Address::new("1 Tutor Lane").unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn class_name_is_alphanumeric_only() {
        assert!(ClassName::new("CS2103T").is_some());
        assert!(ClassName::new("Sec4Physics").is_some());
        assert!(ClassName::new("").is_none());
        assert!(ClassName::new("CS 2103").is_none());
        assert!(ClassName::new("CS-2103").is_none());
    }

    #[test]
    fn class_name_from_str_round_trips() {
        let name: ClassName = "CS2103T".parse().unwrap();
        assert_eq!(name.to_string(), "CS2103T");
        assert!("CS 2103".parse::<ClassName>().is_err());
    }

    #[test]
    fn new_class_has_no_members() {
        let class = TuitionClass::new(ClassName::new("CS2103T").unwrap());
        assert!(class.students().is_empty());
        assert!(class.tutors().is_empty());
    }

    #[test]
    fn membership_checks_track_additions() {
        let mut class = TuitionClass::new(ClassName::new("CS2103T").unwrap());
        let alice = sample_student("Alice Tan");
        let smith = sample_tutor("Mr Smith");

        assert!(!class.has_student(&alice));
        assert!(!class.has_tutor(&smith));

        class.add_student(alice.clone());
        class.add_tutor(smith.clone());

        assert!(class.has_student(&alice));
        assert!(class.has_tutor(&smith));
        assert_eq!(class.students().len(), 1);
        assert_eq!(class.tutors().len(), 1);
    }

    #[test]
    fn membership_is_value_based() {
        let mut class = TuitionClass::new(ClassName::new("CS2103T").unwrap());
        class.add_student(sample_student("Alice Tan"));

        // An equal value is a member; a different value is not.
        assert!(class.has_student(&sample_student("Alice Tan")));
        assert!(!class.has_student(&sample_student("Bob Lim")));
    }

    #[test]
    fn remove_member_clears_both_sets() {
        let mut class = TuitionClass::new(ClassName::new("CS2103T").unwrap());
        class.add_student(sample_student("Alice Tan"));
        class.add_tutor(sample_tutor("Mr Smith"));

        assert!(class.remove_member("Alice Tan"));
        assert!(!class.remove_member("Alice Tan"));
        assert!(class.students().is_empty());

        assert!(class.remove_member("Mr Smith"));
        assert!(class.tutors().is_empty());
    }

    #[test]
    fn display_lists_member_names() {
        let mut class = TuitionClass::new(ClassName::new("CS2103T").unwrap());
        assert_eq!(class.to_string(), "CS2103T (students: none; tutors: none)");

        class.add_student(sample_student("Alice Tan"));
        class.add_tutor(sample_tutor("Mr Smith"));
        assert_eq!(
            class.to_string(),
            "CS2103T (students: Alice Tan; tutors: Mr Smith)"
        );
    }
}
