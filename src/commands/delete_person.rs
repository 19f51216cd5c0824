//! # Delete Person Command
//!
//! `delete n/NAME` removes a person from the roster by exact name. The
//! model cascades the removal through every class membership set, so a
//! deleted person never lingers as a class member.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::commands::errors::{CommandError, ParseError};
use crate::commands::shared::{require_empty_preamble, require_value};
use crate::commands::{Command, CommandResult, PREFIX_NAME};
use crate::model::Model;
use crate::tokenizer::tokenize;

/// Removes a person from the roster by exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePersonCommand {
    person_name: String,
}

impl DeletePersonCommand {
    /// The command word that selects this family.
    pub const COMMAND_WORD: &'static str = "delete";

    /// One-line usage for this command.
    pub const USAGE: &'static str = "Usage: delete n/PERSON_NAME";

    /// Creates a new DeletePersonCommand for the given name.
    pub fn new(person_name: impl Into<String>) -> Self {
        DeletePersonCommand {
            person_name: person_name.into(),
        }
    }

    /// Returns the name of the person to delete.
    pub fn person_name(&self) -> &str {
        &self.person_name
    }
}

impl Command for DeletePersonCommand {
    fn execute(&self, model: &dyn Model) -> Result<CommandResult, CommandError> {
        if !model.delete_person(&self.person_name)? {
            return Err(CommandError::PersonNotFound(self.person_name.clone()));
        }
        Ok(CommandResult::new(format!(
            "Deleted person: {}",
            self.person_name
        )))
    }
}

impl Display for DeletePersonCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {}{}",
            Self::COMMAND_WORD,
            PREFIX_NAME,
            self.person_name
        )
    }
}

/// Parser for the delete command's argument string.
pub struct DeletePersonCommandParser;

impl DeletePersonCommandParser {
    /// Parses the argument string of a delete command.
    pub fn parse(&self, args: &str) -> Result<DeletePersonCommand, ParseError> {
        let tokens = tokenize(args, &[PREFIX_NAME]);
        require_empty_preamble(&tokens, DeletePersonCommand::USAGE)?;
        let person_name = require_value(&tokens, PREFIX_NAME, DeletePersonCommand::USAGE)?;
        Ok(DeletePersonCommand::new(person_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::seeded_model;

    #[test]
    fn parse_extracts_the_name() {
        let command = DeletePersonCommandParser.parse("n/Alice Tan").unwrap();
        assert_eq!(command, DeletePersonCommand::new("Alice Tan"));
    }

    #[test]
    fn parse_requires_the_name_prefix() {
        assert_eq!(
            DeletePersonCommandParser.parse("Alice Tan"),
            Err(ParseError::UnexpectedPreamble {
                preamble: "Alice Tan".to_string(),
                usage: DeletePersonCommand::USAGE,
            })
        );
    }

    #[test]
    fn execute_removes_the_person_and_their_memberships() {
        let model = seeded_model();
        crate::commands::JoinClassCommand::new("Alice Tan", "CS2103T")
            .execute(&model)
            .unwrap();

        let result = DeletePersonCommand::new("Alice Tan")
            .execute(&model)
            .unwrap();
        assert_eq!(result.feedback(), "Deleted person: Alice Tan");

        assert!(model.find_person("Alice Tan").unwrap().is_none());
        let class = model.find_class("CS2103T").unwrap().unwrap();
        assert!(class.students().is_empty());
    }

    #[test]
    fn execute_unknown_person_fails() {
        let model = seeded_model();
        assert_eq!(
            DeletePersonCommand::new("Nobody").execute(&model),
            Err(CommandError::PersonNotFound("Nobody".to_string()))
        );
    }
}
