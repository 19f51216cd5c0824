use std::collections::BTreeSet;

use proptest::prelude::*;

use rosterbook::commands::errors::{CommandError, ParseError};
use rosterbook::commands::{Command, JoinClassCommand, JoinClassCommandParser, RosterParser};
use rosterbook::{
    Address, ClassName, Email, InMemoryModel, Model, Name, Person, Phone, Prefix, Student,
    TuitionClass, tokenize,
};

const NAME: Prefix = Prefix::new("n/");
const CLASS: Prefix = Prefix::new("c/");

/// Property test strategies for generating well-formed roster data
mod strategies {
    use super::*;

    /// Person names: alphanumeric words separated by single spaces
    pub fn person_name() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,7}( [A-Za-z0-9]{1,8}){0,2}")
            .expect("name regex is valid")
    }

    /// Class names: one alphanumeric code
    pub fn class_name() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9]{1,10}").expect("class regex is valid")
    }

    /// Horizontal padding inserted around tokens
    pub fn padding() -> impl Strategy<Value = String> {
        proptest::string::string_regex(" {0,3}").expect("padding regex is valid")
    }
}

/// Builds a student fixture around a generated name.
fn student_named(name: &str) -> Student {
    Student::new(
        Name::new(name).expect("generated names are valid"),
        Phone::new("98765432").unwrap(),
        Email::new("alice@example.com").unwrap(),
        Address::new("10 Kent Ridge Road").unwrap(),
        BTreeSet::new(),
    )
}

proptest! {
    #[test]
    fn join_parser_round_trips_well_formed_input(
        name in strategies::person_name(),
        class in strategies::class_name(),
    ) {
        let input = format!("n/{} c/{}", name, class);
        let parsed = JoinClassCommandParser.parse(&input).unwrap();
        prop_assert_eq!(parsed, JoinClassCommand::new(name, class));
    }

    #[test]
    fn join_parser_ignores_surrounding_whitespace(
        name in strategies::person_name(),
        class in strategies::class_name(),
        lead in strategies::padding(),
        mid in strategies::padding(),
        trail in strategies::padding(),
    ) {
        let input = format!("{}n/{} {}c/{}{}", lead, name, mid, class, trail);
        let parsed = JoinClassCommandParser.parse(&input).unwrap();
        prop_assert_eq!(parsed, JoinClassCommand::new(name, class));
    }

    #[test]
    fn join_parser_rejects_any_preamble(
        preamble in "[A-Za-z]{1,8}",
        name in strategies::person_name(),
        class in strategies::class_name(),
    ) {
        let input = format!("{} n/{} c/{}", preamble, name, class);
        let is_unexpected_preamble = matches!(
            JoinClassCommandParser.parse(&input),
            Err(ParseError::UnexpectedPreamble { .. })
        );
        prop_assert!(is_unexpected_preamble);
    }

    #[test]
    fn join_parser_rejects_missing_prefixes(
        name in strategies::person_name(),
        class in strategies::class_name(),
    ) {
        let missing_class = matches!(
            JoinClassCommandParser.parse(&format!("n/{}", name)),
            Err(ParseError::MissingPrefix { prefix, .. }) if prefix == CLASS
        );
        prop_assert!(missing_class);
        let missing_name = matches!(
            JoinClassCommandParser.parse(&format!("c/{}", class)),
            Err(ParseError::MissingPrefix { prefix, .. }) if prefix == NAME
        );
        prop_assert!(missing_name);
    }

    #[test]
    fn tokenizer_keeps_the_first_duplicate_and_all_occurrences(
        first in strategies::class_name(),
        second in strategies::class_name(),
    ) {
        let input = format!("c/{} c/{}", first, second);
        let tokens = tokenize(&input, &[NAME, CLASS]);
        prop_assert_eq!(tokens.value(CLASS), Some(first.as_str()));
        prop_assert_eq!(tokens.all_values(CLASS), vec![first.as_str(), second.as_str()]);
    }

    #[test]
    fn joining_twice_fails_and_never_double_enrolls(
        name in strategies::person_name(),
        class in strategies::class_name(),
    ) {
        let model = InMemoryModel::new();
        model
            .add_person(Person::Student(student_named(&name)))
            .unwrap();
        model
            .add_class(TuitionClass::new(
                ClassName::new(class.as_str()).expect("generated class names are valid"),
            ))
            .unwrap();

        let command = JoinClassCommand::new(name.as_str(), class.as_str());
        let result = command.execute(&model).unwrap();
        prop_assert!(result.feedback().contains(name.as_str()));
        prop_assert!(result.feedback().contains(class.as_str()));

        let already_in_class = matches!(
            command.execute(&model),
            Err(CommandError::StudentAlreadyInClass { .. })
        );
        prop_assert!(already_in_class);
        let stored = model.find_class(class.as_str()).unwrap().unwrap();
        prop_assert_eq!(stored.students().len(), 1);
    }

    #[test]
    fn unresolved_names_leave_the_model_unchanged(
        name in strategies::person_name(),
        class in strategies::class_name(),
    ) {
        let model = InMemoryModel::new();
        model
            .add_class(TuitionClass::new(
                ClassName::new(class.as_str()).expect("generated class names are valid"),
            ))
            .unwrap();

        let command = RosterParser
            .parse(&format!("join n/{} c/{}", name, class))
            .unwrap();
        prop_assert!(matches!(
            command.execute(&model),
            Err(CommandError::PersonNotFound(_))
        ));

        let stored = model.find_class(class.as_str()).unwrap().unwrap();
        prop_assert!(stored.students().is_empty());
        prop_assert!(stored.tutors().is_empty());
        prop_assert_eq!(model.list_persons().unwrap().len(), 0);
    }
}
