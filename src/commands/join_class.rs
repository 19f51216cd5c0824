//! # Join Class Command
//!
//! `join n/PERSON_NAME c/CLASS_NAME` puts an existing person into an
//! existing tuition class: students are enrolled, tutors are assigned.
//!
//! Execution checks run in a fixed order: the person must resolve by exact
//! name, then the class must resolve, then the person must not already be a
//! member of the class in their role. Only after all three checks pass does
//! the command invoke exactly one model mutator, so any failure leaves the
//! model untouched.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::commands::errors::{CommandError, ParseError};
use crate::commands::shared::{require_empty_preamble, require_value};
use crate::commands::{Command, CommandResult, PREFIX_CLASS, PREFIX_NAME};
use crate::model::Model;
use crate::person::Person;
use crate::tokenizer::tokenize;

/////////////////////////////////////////// JoinClassCommand /////////////////////////////////////////

/// Joins a person into a tuition class.
///
/// An immutable pair of name strings with structural equality. The command
/// holds no entity references; both names resolve against the model only
/// when [`Command::execute`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinClassCommand {
    person_name: String,
    class_name: String,
}

impl JoinClassCommand {
    /// The command word that selects this family.
    pub const COMMAND_WORD: &'static str = "join";

    /// One-line usage for this command.
    pub const USAGE: &'static str = "Usage: join n/PERSON_NAME c/CLASS_NAME";

    /// Creates a new JoinClassCommand from the two resolved argument values.
    pub fn new(person_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        JoinClassCommand {
            person_name: person_name.into(),
            class_name: class_name.into(),
        }
    }

    /// Returns the name of the person to join.
    pub fn person_name(&self) -> &str {
        &self.person_name
    }

    /// Returns the name of the class to join into.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl Command for JoinClassCommand {
    fn execute(&self, model: &dyn Model) -> Result<CommandResult, CommandError> {
        let person = model
            .find_person(&self.person_name)?
            .ok_or_else(|| CommandError::PersonNotFound(self.person_name.clone()))?;
        let class = model
            .find_class(&self.class_name)?
            .ok_or_else(|| CommandError::ClassNotFound(self.class_name.clone()))?;

        match person {
            Person::Student(student) => {
                if class.has_student(&student) {
                    return Err(CommandError::StudentAlreadyInClass {
                        student: student.name().as_str().to_string(),
                        class: class.name().as_str().to_string(),
                    });
                }
                model.add_student_to_class(&student, class.name())?;
                Ok(CommandResult::new(format!(
                    "Student {} has joined class {}",
                    student.name(),
                    class.name()
                )))
            }
            Person::Tutor(tutor) => {
                if class.has_tutor(&tutor) {
                    return Err(CommandError::TutorAlreadyAssigned {
                        tutor: tutor.name().as_str().to_string(),
                        class: class.name().as_str().to_string(),
                    });
                }
                model.assign_tutor_to_class(&tutor, class.name())?;
                Ok(CommandResult::new(format!(
                    "Tutor {} has joined class {}",
                    tutor.name(),
                    class.name()
                )))
            }
        }
    }
}

impl Display for JoinClassCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {}{} {}{}",
            Self::COMMAND_WORD,
            PREFIX_NAME,
            self.person_name,
            PREFIX_CLASS,
            self.class_name
        )
    }
}

//////////////////////////////////////// JoinClassCommandParser //////////////////////////////////////

/// Parser for the join command's argument string.
///
/// Purely syntactic: it checks that the preamble is empty and that both
/// prefixes are present with non-empty values, then hands the trimmed
/// values to [`JoinClassCommand`]. It never consults the model.
pub struct JoinClassCommandParser;

impl JoinClassCommandParser {
    /// Parses the argument string of a join command.
    ///
    /// # Arguments
    /// * `args` - Everything after the `join` command word
    ///
    /// # Returns
    /// * `Ok(JoinClassCommand)` - Both names extracted and trimmed
    /// * `Err(ParseError)` - Non-empty preamble, missing prefix, or empty value
    pub fn parse(&self, args: &str) -> Result<JoinClassCommand, ParseError> {
        let tokens = tokenize(args, &[PREFIX_NAME, PREFIX_CLASS]);
        require_empty_preamble(&tokens, JoinClassCommand::USAGE)?;
        let person_name = require_value(&tokens, PREFIX_NAME, JoinClassCommand::USAGE)?;
        let class_name = require_value(&tokens, PREFIX_CLASS, JoinClassCommand::USAGE)?;
        Ok(JoinClassCommand::new(person_name, class_name))
    }
}
