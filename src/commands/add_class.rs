//! # Add Class Command
//!
//! `addclass c/CLASS_NAME` registers a new, empty tuition class. The parser
//! validates the class name's shape; execution only has to reject a
//! collision with an existing class.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::classroom::{ClassName, TuitionClass};
use crate::commands::errors::{CommandError, ParseError};
use crate::commands::shared::{require_empty_preamble, require_value};
use crate::commands::{Command, CommandResult, PREFIX_CLASS};
use crate::model::Model;
use crate::tokenizer::tokenize;

/// Registers a new, empty tuition class in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClassCommand {
    class_name: ClassName,
}

impl AddClassCommand {
    /// The command word that selects this family.
    pub const COMMAND_WORD: &'static str = "addclass";

    /// One-line usage for this command.
    pub const USAGE: &'static str = "Usage: addclass c/CLASS_NAME";

    /// Creates a new AddClassCommand for an already-validated class name.
    pub fn new(class_name: ClassName) -> Self {
        AddClassCommand { class_name }
    }

    /// Returns the name of the class to create.
    pub fn class_name(&self) -> &ClassName {
        &self.class_name
    }
}

impl Command for AddClassCommand {
    fn execute(&self, model: &dyn Model) -> Result<CommandResult, CommandError> {
        if model.find_class(self.class_name.as_str())?.is_some() {
            return Err(CommandError::DuplicateClass(
                self.class_name.as_str().to_string(),
            ));
        }
        model.add_class(TuitionClass::new(self.class_name.clone()))?;
        Ok(CommandResult::new(format!(
            "New class added: {}",
            self.class_name
        )))
    }
}

impl Display for AddClassCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {}{}",
            Self::COMMAND_WORD,
            PREFIX_CLASS,
            self.class_name
        )
    }
}

/// Parser for the addclass command's argument string.
pub struct AddClassCommandParser;

impl AddClassCommandParser {
    /// Parses the argument string of an addclass command.
    pub fn parse(&self, args: &str) -> Result<AddClassCommand, ParseError> {
        let tokens = tokenize(args, &[PREFIX_CLASS]);
        require_empty_preamble(&tokens, AddClassCommand::USAGE)?;
        let raw = require_value(&tokens, PREFIX_CLASS, AddClassCommand::USAGE)?;
        let class_name = raw.parse().map_err(
            |e: crate::classroom::ClassNameParseError| ParseError::InvalidValue {
                message: e.to_string(),
                usage: AddClassCommand::USAGE,
            },
        )?;
        Ok(AddClassCommand::new(class_name))
    }
}
