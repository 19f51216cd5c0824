//! # Command Dispatcher
//!
//! [`RosterParser`] is the single entry point from raw user input into the
//! command pipeline. It splits off the leading command word and routes the
//! remaining argument string to the matching family parser through one
//! static `match` table, so the whole command surface is auditable in one
//! place. Unknown and empty command words are parse errors; everything
//! after the word is the family parser's problem.

use crate::commands::add_class::{AddClassCommand, AddClassCommandParser};
use crate::commands::add_person::{
    AddStudentCommand, AddStudentCommandParser, AddTutorCommand, AddTutorCommandParser,
};
use crate::commands::delete_person::{DeletePersonCommand, DeletePersonCommandParser};
use crate::commands::errors::ParseError;
use crate::commands::join_class::{JoinClassCommand, JoinClassCommandParser};
use crate::commands::list::ListCommand;
use crate::commands::Command;

/// Every command word the dispatcher recognizes, for help and error output.
pub const COMMAND_WORDS: &[&str] = &[
    AddStudentCommand::COMMAND_WORD,
    AddTutorCommand::COMMAND_WORD,
    AddClassCommand::COMMAND_WORD,
    JoinClassCommand::COMMAND_WORD,
    DeletePersonCommand::COMMAND_WORD,
    ListCommand::COMMAND_WORD,
];

/// Routes raw command text to the matching command family parser.
pub struct RosterParser;

impl RosterParser {
    /// Parses one full line of user input into an executable command.
    ///
    /// # Arguments
    /// * `input` - The raw line, command word first
    ///
    /// # Returns
    /// * `Ok(Box<dyn Command>)` - A validated, executable command
    /// * `Err(ParseError)` - Empty input, unknown word, or malformed arguments
    pub fn parse(&self, input: &str) -> Result<Box<dyn Command>, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::EmptyCommand);
        }

        let (word, args) = input
            .split_once(char::is_whitespace)
            .unwrap_or((input, ""));

        match word {
            AddStudentCommand::COMMAND_WORD => {
                Ok(Box::new(AddStudentCommandParser.parse(args)?))
            }
            AddTutorCommand::COMMAND_WORD => Ok(Box::new(AddTutorCommandParser.parse(args)?)),
            AddClassCommand::COMMAND_WORD => Ok(Box::new(AddClassCommandParser.parse(args)?)),
            JoinClassCommand::COMMAND_WORD => Ok(Box::new(JoinClassCommandParser.parse(args)?)),
            DeletePersonCommand::COMMAND_WORD => {
                Ok(Box::new(DeletePersonCommandParser.parse(args)?))
            }
            ListCommand::COMMAND_WORD => Ok(Box::new(ListCommand::new())),
            _ => Err(ParseError::UnknownCommand(word.to_string())),
        }
    }
}
