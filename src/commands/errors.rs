//! # Command Error Handling
//!
//! The command pipeline distinguishes two failure tiers. [`ParseError`]
//! covers malformed user input: the command text never reached the model
//! and the message describes the expected syntax. [`CommandError`] covers
//! input that parsed cleanly but failed at execution time: an entity did
//! not resolve or a relationship invariant would be violated, and the model
//! is guaranteed unchanged. Neither tier is retried; every failure ends
//! that one command invocation.
//!
//! For CLI output both tiers extract into [`UserError`] through the
//! `handled` crate, carrying a message plus an optional usage hint.

use handled::Handle;

use crate::model::ModelError;
use crate::tokenizer::Prefix;

/// User-friendly error information that can be extracted from various error types
#[derive(Debug, Clone)]
pub struct UserError {
    /// The main error message to display to the user
    pub message: String,
    /// Optional usage hint to help the user correct the error
    pub usage_hint: Option<String>,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Implements Handle<UserError> for itself to allow extraction
impl Handle<UserError> for UserError {
    fn handle(&self) -> Option<UserError> {
        Some(self.clone())
    }
}

////////////////////////////////////////////// ParseError ////////////////////////////////////////////

/// Errors produced while turning raw command text into a command object.
///
/// Parse errors are purely syntactic; the model is never consulted. Each
/// variant that belongs to a specific command carries that command's usage
/// line so the surfaced message can describe the expected syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no command word at all.
    EmptyCommand,
    /// The leading command word matched nothing in the command surface.
    UnknownCommand(String),
    /// Text appeared before the first prefix of a command that accepts no
    /// positional arguments.
    UnexpectedPreamble {
        /// The offending text.
        preamble: String,
        /// The usage line of the command being parsed.
        usage: &'static str,
    },
    /// A required prefix did not appear in the input.
    MissingPrefix {
        /// The absent prefix.
        prefix: Prefix,
        /// The usage line of the command being parsed.
        usage: &'static str,
    },
    /// A prefix appeared but carried no value after trimming.
    EmptyValue {
        /// The prefix whose value was empty.
        prefix: Prefix,
        /// The usage line of the command being parsed.
        usage: &'static str,
    },
    /// A value was present but failed its field validation.
    InvalidValue {
        /// Why the value was rejected.
        message: String,
        /// The usage line of the command being parsed.
        usage: &'static str,
    },
}

impl ParseError {
    /// Returns the usage line of the command being parsed, when one applies.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyCommand | ParseError::UnknownCommand(_) => None,
            ParseError::UnexpectedPreamble { usage, .. }
            | ParseError::MissingPrefix { usage, .. }
            | ParseError::EmptyValue { usage, .. }
            | ParseError::InvalidValue { usage, .. } => Some(usage),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyCommand => write!(f, "No command given"),
            ParseError::UnknownCommand(word) => write!(f, "Unknown command {:?}", word),
            ParseError::UnexpectedPreamble { preamble, .. } => {
                write!(f, "Unexpected text {:?} before the first prefix", preamble)
            }
            ParseError::MissingPrefix { prefix, .. } => {
                write!(f, "Missing required {} prefix", prefix)
            }
            ParseError::EmptyValue { prefix, .. } => {
                write!(f, "The {} prefix requires a non-empty value", prefix)
            }
            ParseError::InvalidValue { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ParseError {}

///////////////////////////////////////////// CommandError ///////////////////////////////////////////

/// Errors produced while executing a well-formed command against the model.
///
/// Every variant leaves the model exactly as it was before execution began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No person in the model has the given name.
    PersonNotFound(String),
    /// No class in the model has the given name.
    ClassNotFound(String),
    /// The student is already enrolled in the class.
    StudentAlreadyInClass {
        /// The student's name.
        student: String,
        /// The class name.
        class: String,
    },
    /// The tutor is already assigned to the class.
    TutorAlreadyAssigned {
        /// The tutor's name.
        tutor: String,
        /// The class name.
        class: String,
    },
    /// A person with the same name already exists in the roster.
    DuplicatePerson(String),
    /// A class with the same name already exists in the roster.
    DuplicateClass(String),
    /// The model reported an error the command did not anticipate.
    Model(ModelError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::PersonNotFound(name) => {
                write!(f, "Person {:?} does not exist in the roster", name)
            }
            CommandError::ClassNotFound(name) => {
                write!(f, "Class {:?} does not exist in the roster", name)
            }
            CommandError::StudentAlreadyInClass { student, class } => {
                write!(
                    f,
                    "Student {:?} is already enrolled in class {:?}",
                    student, class
                )
            }
            CommandError::TutorAlreadyAssigned { tutor, class } => {
                write!(
                    f,
                    "Tutor {:?} is already assigned to class {:?}",
                    tutor, class
                )
            }
            CommandError::DuplicatePerson(name) => {
                write!(f, "A person named {:?} already exists in the roster", name)
            }
            CommandError::DuplicateClass(name) => {
                write!(f, "Class {:?} already exists in the roster", name)
            }
            CommandError::Model(err) => write!(f, "Roster error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ModelError> for CommandError {
    fn from(err: ModelError) -> Self {
        CommandError::Model(err)
    }
}

/// Helper function to extract user-friendly error messages
pub fn extract_user_error<E>(error: &E) -> Option<UserError>
where
    E: Handle<UserError>,
{
    error.handle()
}

/// Enhanced error formatting for CLI output
pub fn format_cli_error<E>(error: &E) -> String
where
    E: Handle<UserError> + std::fmt::Display,
{
    if let Some(user_error) = error.handle() {
        let mut output = format!("Error: {}", user_error.message);
        if let Some(hint) = user_error.usage_hint {
            output.push_str(&format!("\n{}", hint));
        }
        output
    } else {
        format!("Error: {}", error)
    }
}
