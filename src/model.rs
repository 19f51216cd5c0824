//! # The Roster Model
//!
//! This module provides the authoritative in-memory registry of persons and
//! tuition classes. It defines the [`Model`] trait, the uniform interface
//! commands execute against, and [`InMemoryModel`], the standard
//! implementation backed by mutex-guarded maps.
//!
//! ## Ownership and Resolution
//!
//! The model owns every person and class. Commands never hold references
//! into the model; they carry name strings and resolve them at execution
//! time through [`Model::find_person`] and [`Model::find_class`], which
//! return an explicit found/not-found `Option` rather than sentinel values.
//! Lookups are exact, case-sensitive matches on the full name.
//!
//! ## Mutation Discipline
//!
//! Membership mutators ([`Model::add_student_to_class`],
//! [`Model::assign_tutor_to_class`]) append without checking for duplicates;
//! commands check membership first and only then mutate, so a command either
//! fully succeeds or leaves the model untouched. Only one command executes
//! at a time in this system, which keeps that check-then-mutate sequence
//! safe; a multi-session adaptation would need a write lock around command
//! execution as a whole.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::classroom::{ClassName, TuitionClass};
use crate::person::{Person, Student, Tutor};

///////////////////////////////////////////// ModelError /////////////////////////////////////////////

/// Errors that can occur during model operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The requested person or class was not found in the model.
    NotFound,
    /// A person or class with the same name already exists.
    AlreadyExists,
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Item not found in the roster"),
            Self::AlreadyExists => write!(f, "Item already exists in the roster"),
        }
    }
}

impl std::error::Error for ModelError {}

/////////////////////////////////////////////// Model ////////////////////////////////////////////////

/// Trait defining the roster storage interface that commands execute against.
///
/// The trait covers person and class registration, exact-match lookup, and
/// the two membership mutators. Implementors must be `Send + Sync` so a
/// model can be shared wherever the embedding application needs it; the
/// command pipeline itself is single-threaded.
///
/// # Examples
///
/// ```rust
/// use rosterbook::{ClassName, InMemoryModel, Model, TuitionClass};
///
/// let model = InMemoryModel::new();
/// let class = TuitionClass::new(ClassName::new("CS2103T").unwrap());
/// model.add_class(class).unwrap();
/// assert!(model.find_class("CS2103T").unwrap().is_some());
/// assert!(model.find_class("CS2101").unwrap().is_none());
/// ```
pub trait Model: Send + Sync {
    /// Registers a person in the model.
    ///
    /// # Returns
    /// * `Ok(())` - Person registered successfully
    /// * `Err(ModelError::AlreadyExists)` - A person with this name exists
    fn add_person(&self, person: Person) -> Result<(), ModelError>;

    /// Looks up a person by exact, case-sensitive name match.
    ///
    /// # Returns
    /// * `Ok(Some(Person))` - Person found and returned
    /// * `Ok(None)` - No person has this name
    fn find_person(&self, name: &str) -> Result<Option<Person>, ModelError>;

    /// Removes a person by exact name match, cascading the removal through
    /// every class membership set.
    ///
    /// # Returns
    /// * `Ok(true)` - Person existed and was removed
    /// * `Ok(false)` - No person has this name
    fn delete_person(&self, name: &str) -> Result<bool, ModelError>;

    /// Lists all persons, sorted by name.
    fn list_persons(&self) -> Result<Vec<Person>, ModelError>;

    /// Registers a tuition class in the model.
    ///
    /// # Returns
    /// * `Ok(())` - Class registered successfully
    /// * `Err(ModelError::AlreadyExists)` - A class with this name exists
    fn add_class(&self, class: TuitionClass) -> Result<(), ModelError>;

    /// Looks up a class by exact, case-sensitive name match.
    ///
    /// # Returns
    /// * `Ok(Some(TuitionClass))` - Class found and returned
    /// * `Ok(None)` - No class has this name
    fn find_class(&self, name: &str) -> Result<Option<TuitionClass>, ModelError>;

    /// Lists all classes, sorted by name.
    fn list_classes(&self) -> Result<Vec<TuitionClass>, ModelError>;

    /// Enrolls a student in the named class.
    ///
    /// The mutator appends without a duplicate check; callers must consult
    /// [`TuitionClass::has_student`] first.
    ///
    /// # Returns
    /// * `Ok(())` - Student enrolled
    /// * `Err(ModelError::NotFound)` - The class does not exist
    fn add_student_to_class(
        &self,
        student: &Student,
        class_name: &ClassName,
    ) -> Result<(), ModelError>;

    /// Assigns a tutor to the named class.
    ///
    /// The mutator appends without a duplicate check; callers must consult
    /// [`TuitionClass::has_tutor`] first.
    ///
    /// # Returns
    /// * `Ok(())` - Tutor assigned
    /// * `Err(ModelError::NotFound)` - The class does not exist
    fn assign_tutor_to_class(
        &self,
        tutor: &Tutor,
        class_name: &ClassName,
    ) -> Result<(), ModelError>;
}

//////////////////////////////////////////// InMemoryModel ///////////////////////////////////////////

/// In-memory implementation of the [`Model`] trait.
///
/// Persons and classes live in `HashMap`s keyed by their name string and
/// guarded by `Mutex`es. Lookups are O(1); list operations clone and sort,
/// so their output is deterministic regardless of insertion order.
pub struct InMemoryModel {
    persons: Mutex<HashMap<String, Person>>,
    classes: Mutex<HashMap<String, TuitionClass>>,
}

impl InMemoryModel {
    /// Creates a new, empty model.
    pub fn new() -> Self {
        Self {
            persons: Mutex::new(HashMap::new()),
            classes: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for InMemoryModel {
    fn add_person(&self, person: Person) -> Result<(), ModelError> {
        let mut persons = self.persons.lock().unwrap();
        let key = person.name().as_str().to_string();

        if persons.contains_key(&key) {
            return Err(ModelError::AlreadyExists);
        }

        persons.insert(key, person);
        Ok(())
    }

    fn find_person(&self, name: &str) -> Result<Option<Person>, ModelError> {
        let persons = self.persons.lock().unwrap();
        Ok(persons.get(name).cloned())
    }

    fn delete_person(&self, name: &str) -> Result<bool, ModelError> {
        let mut persons = self.persons.lock().unwrap();

        if persons.remove(name).is_some() {
            // Cascade: scrub the person from every class membership set.
            drop(persons);
            let mut classes = self.classes.lock().unwrap();
            for class in classes.values_mut() {
                class.remove_member(name);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn list_persons(&self) -> Result<Vec<Person>, ModelError> {
        let persons = self.persons.lock().unwrap();
        let mut all: Vec<Person> = persons.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(all)
    }

    fn add_class(&self, class: TuitionClass) -> Result<(), ModelError> {
        let mut classes = self.classes.lock().unwrap();
        let key = class.name().as_str().to_string();

        if classes.contains_key(&key) {
            return Err(ModelError::AlreadyExists);
        }

        classes.insert(key, class);
        Ok(())
    }

    fn find_class(&self, name: &str) -> Result<Option<TuitionClass>, ModelError> {
        let classes = self.classes.lock().unwrap();
        Ok(classes.get(name).cloned())
    }

    fn list_classes(&self) -> Result<Vec<TuitionClass>, ModelError> {
        let classes = self.classes.lock().unwrap();
        let mut all: Vec<TuitionClass> = classes.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(all)
    }

    fn add_student_to_class(
        &self,
        student: &Student,
        class_name: &ClassName,
    ) -> Result<(), ModelError> {
        let mut classes = self.classes.lock().unwrap();
        match classes.get_mut(class_name.as_str()) {
            Some(class) => {
                class.add_student(student.clone());
                Ok(())
            }
            None => Err(ModelError::NotFound),
        }
    }

    fn assign_tutor_to_class(
        &self,
        tutor: &Tutor,
        class_name: &ClassName,
    ) -> Result<(), ModelError> {
        let mut classes = self.classes.lock().unwrap();
        match classes.get_mut(class_name.as_str()) {
            Some(class) => {
                class.add_tutor(tutor.clone());
                Ok(())
            }
            None => Err(ModelError::NotFound),
        }
    }
}
