//! # List Command
//!
//! `list` renders every person and every class in the roster, sorted by
//! name. It takes no prefixed arguments; any trailing text is ignored, so
//! `list` never fails to parse.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::commands::errors::CommandError;
use crate::commands::{Command, CommandResult};
use crate::model::Model;

/// Renders the whole roster, persons first, classes after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    /// The command word that selects this family.
    pub const COMMAND_WORD: &'static str = "list";

    /// Creates a new ListCommand.
    pub fn new() -> Self {
        ListCommand
    }
}

impl Command for ListCommand {
    fn execute(&self, model: &dyn Model) -> Result<CommandResult, CommandError> {
        let persons = model.list_persons()?;
        let classes = model.list_classes()?;

        let mut out = String::new();
        if persons.is_empty() {
            out.push_str("No persons in the roster");
        } else {
            out.push_str("Persons:");
            for person in &persons {
                out.push_str(&format!("\n  [{}] {}", person.role(), person));
            }
        }
        out.push('\n');
        if classes.is_empty() {
            out.push_str("No classes in the roster");
        } else {
            out.push_str("Classes:");
            for class in &classes {
                out.push_str(&format!("\n  {}", class));
            }
        }

        Ok(CommandResult::new(out))
    }
}

impl Display for ListCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", Self::COMMAND_WORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InMemoryModel;
    use crate::test_utils::test_helpers::seeded_model;

    #[test]
    fn empty_roster_says_so() {
        let model = InMemoryModel::new();
        let result = ListCommand::new().execute(&model).unwrap();
        assert_eq!(
            result.feedback(),
            "No persons in the roster\nNo classes in the roster"
        );
    }

    #[test]
    fn lists_every_person_with_their_role() {
        let model = seeded_model();
        let result = ListCommand::new().execute(&model).unwrap();
        let feedback = result.feedback();

        assert!(feedback.contains("[Student] Alice Tan"));
        assert!(feedback.contains("[Tutor] Mr Smith"));
        assert!(feedback.contains("CS2103T"));
    }

    #[test]
    fn persons_appear_sorted_by_name() {
        let model = seeded_model();
        let result = ListCommand::new().execute(&model).unwrap();
        let feedback = result.feedback();

        let alice = feedback.find("Alice Tan").unwrap();
        let smith = feedback.find("Mr Smith").unwrap();
        assert!(alice < smith);
    }
}
