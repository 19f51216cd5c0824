//! # Add Student / Add Tutor Commands
//!
//! `addstudent n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...` and the
//! `addtutor` twin register a new person. Unlike the join command, the
//! parser here validates every field into its value type, so an add
//! command that parsed at all carries a fully well-formed person. The only
//! execution-time failure is a name collision with an existing person.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::commands::errors::{CommandError, ParseError};
use crate::commands::shared::{require_empty_preamble, require_value};
use crate::commands::{
    Command, CommandResult, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use crate::model::Model;
use crate::person::{Address, Email, Name, Person, Phone, Student, Tag, Tutor};
use crate::tokenizer::tokenize;

////////////////////////////////////////// AddStudentCommand /////////////////////////////////////////

/// Registers a new student in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudentCommand {
    student: Student,
}

impl AddStudentCommand {
    /// The command word that selects this family.
    pub const COMMAND_WORD: &'static str = "addstudent";

    /// One-line usage for this command.
    pub const USAGE: &'static str =
        "Usage: addstudent n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...";

    /// Creates a new AddStudentCommand for an already-validated student.
    pub fn new(student: Student) -> Self {
        AddStudentCommand { student }
    }

    /// Returns the student to add.
    pub fn student(&self) -> &Student {
        &self.student
    }
}

impl Command for AddStudentCommand {
    fn execute(&self, model: &dyn Model) -> Result<CommandResult, CommandError> {
        let name = self.student.name().as_str();
        if model.find_person(name)?.is_some() {
            return Err(CommandError::DuplicatePerson(name.to_string()));
        }
        model.add_person(Person::Student(self.student.clone()))?;
        Ok(CommandResult::new(format!(
            "New student added: {}",
            self.student
        )))
    }
}

impl Display for AddStudentCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", Self::COMMAND_WORD, self.student)
    }
}

/////////////////////////////////////////// AddTutorCommand //////////////////////////////////////////

/// Registers a new tutor in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTutorCommand {
    tutor: Tutor,
}

impl AddTutorCommand {
    /// The command word that selects this family.
    pub const COMMAND_WORD: &'static str = "addtutor";

    /// One-line usage for this command.
    pub const USAGE: &'static str = "Usage: addtutor n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...";

    /// Creates a new AddTutorCommand for an already-validated tutor.
    pub fn new(tutor: Tutor) -> Self {
        AddTutorCommand { tutor }
    }

    /// Returns the tutor to add.
    pub fn tutor(&self) -> &Tutor {
        &self.tutor
    }
}

impl Command for AddTutorCommand {
    fn execute(&self, model: &dyn Model) -> Result<CommandResult, CommandError> {
        let name = self.tutor.name().as_str();
        if model.find_person(name)?.is_some() {
            return Err(CommandError::DuplicatePerson(name.to_string()));
        }
        model.add_person(Person::Tutor(self.tutor.clone()))?;
        Ok(CommandResult::new(format!(
            "New tutor added: {}",
            self.tutor
        )))
    }
}

impl Display for AddTutorCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", Self::COMMAND_WORD, self.tutor)
    }
}

//////////////////////////////////////////// Field Parsing ///////////////////////////////////////////

/// The validated person fields shared by both add commands.
struct PersonFields {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

/// Parses and validates the person fields of an add command.
fn parse_person_fields(args: &str, usage: &'static str) -> Result<PersonFields, ParseError> {
    let tokens = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );
    require_empty_preamble(&tokens, usage)?;

    let name: Name = parse_field(&require_value(&tokens, PREFIX_NAME, usage)?, usage)?;
    let phone: Phone = parse_field(&require_value(&tokens, PREFIX_PHONE, usage)?, usage)?;
    let email: Email = parse_field(&require_value(&tokens, PREFIX_EMAIL, usage)?, usage)?;
    let address: Address = parse_field(&require_value(&tokens, PREFIX_ADDRESS, usage)?, usage)?;

    let mut tags = BTreeSet::new();
    for raw in tokens.all_values(PREFIX_TAG) {
        tags.insert(parse_field::<Tag>(raw, usage)?);
    }

    Ok(PersonFields {
        name,
        phone,
        email,
        address,
        tags,
    })
}

/// Runs one value through its value-type validation.
fn parse_field<T>(raw: &str, usage: &'static str) -> Result<T, ParseError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ParseError::InvalidValue {
        message: e.to_string(),
        usage,
    })
}

////////////////////////////////////////////// Parsers ///////////////////////////////////////////////

/// Parser for the addstudent command's argument string.
pub struct AddStudentCommandParser;

impl AddStudentCommandParser {
    /// Parses the argument string of an addstudent command.
    pub fn parse(&self, args: &str) -> Result<AddStudentCommand, ParseError> {
        let fields = parse_person_fields(args, AddStudentCommand::USAGE)?;
        Ok(AddStudentCommand::new(Student::new(
            fields.name,
            fields.phone,
            fields.email,
            fields.address,
            fields.tags,
        )))
    }
}

/// Parser for the addtutor command's argument string.
pub struct AddTutorCommandParser;

impl AddTutorCommandParser {
    /// Parses the argument string of an addtutor command.
    pub fn parse(&self, args: &str) -> Result<AddTutorCommand, ParseError> {
        let fields = parse_person_fields(args, AddTutorCommand::USAGE)?;
        Ok(AddTutorCommand::new(Tutor::new(
            fields.name,
            fields.phone,
            fields.email,
            fields.address,
            fields.tags,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InMemoryModel;
    use crate::test_utils::test_helpers::{alice_student, smith_tutor};

    const VALID_STUDENT: &str = "n/Alice Tan p/98765432 e/alice@example.com a/10 Kent Ridge Road";

    #[test]
    fn parse_valid_student_builds_the_full_person() {
        let command = AddStudentCommandParser.parse(VALID_STUDENT).unwrap();
        assert_eq!(command, AddStudentCommand::new(alice_student()));
    }

    #[test]
    fn parse_collects_repeated_tags_into_a_set() {
        let command = AddStudentCommandParser
            .parse("n/Alice Tan p/98765432 e/alice@example.com a/10 Kent Ridge Road t/sec4 t/exam t/sec4")
            .unwrap();
        let tags: Vec<&str> = command.student().tags().iter().map(Tag::as_str).collect();
        assert_eq!(tags, vec!["exam", "sec4"]);
    }

    #[test]
    fn parse_missing_field_fails_with_its_prefix() {
        assert_eq!(
            AddStudentCommandParser.parse("n/Alice Tan p/98765432 e/alice@example.com"),
            Err(ParseError::MissingPrefix {
                prefix: PREFIX_ADDRESS,
                usage: AddStudentCommand::USAGE,
            })
        );
    }

    #[test]
    fn parse_rejects_a_preamble() {
        assert!(matches!(
            AddStudentCommandParser.parse(format!("oops {}", VALID_STUDENT).as_str()),
            Err(ParseError::UnexpectedPreamble { .. })
        ));
    }

    #[test]
    fn parse_invalid_phone_reports_the_validation_message() {
        let err = AddStudentCommandParser
            .parse("n/Alice Tan p/12 e/alice@example.com a/10 Kent Ridge Road")
            .unwrap_err();
        match err {
            ParseError::InvalidValue { message, usage } => {
                assert!(message.contains("phone"));
                assert_eq!(usage, AddStudentCommand::USAGE);
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn parse_invalid_tag_fails() {
        assert!(matches!(
            AddStudentCommandParser.parse(
                "n/Alice Tan p/98765432 e/alice@example.com a/10 Kent Ridge Road t/two words"
            ),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn execute_adds_the_student_once() {
        let model = InMemoryModel::new();
        let command = AddStudentCommand::new(alice_student());

        let result = command.execute(&model).unwrap();
        assert!(result.feedback().starts_with("New student added: Alice Tan"));
        assert!(model.find_person("Alice Tan").unwrap().is_some());

        assert_eq!(
            command.execute(&model),
            Err(CommandError::DuplicatePerson("Alice Tan".to_string()))
        );
    }

    #[test]
    fn execute_add_tutor_reports_the_tutor_role() {
        let model = InMemoryModel::new();
        let command = AddTutorCommand::new(smith_tutor());

        let result = command.execute(&model).unwrap();
        assert!(result.feedback().starts_with("New tutor added: Mr Smith"));

        let person = model.find_person("Mr Smith").unwrap().unwrap();
        assert_eq!(person.role(), "Tutor");
    }

    #[test]
    fn duplicate_names_collide_across_roles() {
        let model = InMemoryModel::new();
        AddStudentCommand::new(alice_student())
            .execute(&model)
            .unwrap();

        // A tutor with the same name is still a duplicate person.
        let tutor = Tutor::new(
            alice_student().name().clone(),
            Phone::new("91234567").unwrap(),
            Email::new("other@example.com").unwrap(),
            Address::new("1 Tutor Lane").unwrap(),
            BTreeSet::new(),
        );
        assert_eq!(
            AddTutorCommand::new(tutor).execute(&model),
            Err(CommandError::DuplicatePerson("Alice Tan".to_string()))
        );
    }
}
