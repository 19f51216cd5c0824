//! # Rosterbook: Command-Driven Roster Management
//!
//! Rosterbook tracks the people of a tuition center - students and tutors -
//! and the tuition classes they belong to. All interaction happens through
//! short textual commands: one line of input becomes one validated command
//! object, which executes against the in-memory model and either reports
//! feedback or fails with a specific, user-facing error.
//!
//! ## Core Concepts
//!
//! ### Persons and Classes
//! A person is a student or a tutor - the [`Person`] enum closes that set.
//! Every field (name, phone, email, address, tags) is a validated value
//! type, and equality is structural. A [`TuitionClass`] groups enrolled
//! students and assigned tutors; membership sets never contain duplicates.
//!
//! ### The Command Pipeline
//! Raw input flows through a fixed pipeline: the dispatcher
//! ([`commands::RosterParser`]) picks the command family by its leading
//! word; the family parser tokenizes the argument string into prefixed
//! values (`n/` for names, `c/` for classes, ...) and shape-checks them;
//! the resulting command object resolves entity names against the
//! [`Model`] only when it executes. Malformed input fails parsing without
//! touching the model; a failed execution leaves the model unchanged.
//!
//! ### Persistence
//! A [`SavefileManager`] snapshots the whole roster to a JSON or YAML file
//! and restores it at startup. The savefile embeds class memberships, so
//! one file round-trips the complete state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ CLI (rosterctl: one-shot or REPL)       │
//! ├─────────────────────────────────────────┤
//! │ Dispatcher (RosterParser)               │
//! ├─────────────────────────────────────────┤
//! │ Command parsers (tokenize + validate)   │
//! ├─────────────────────────────────────────┤
//! │ Commands (execute against the model)    │
//! ├─────────────────────────────────────────┤
//! │ Model (trait-based, in-memory)          │
//! ├─────────────────────────────────────────┤
//! │ Persistence (JSON/YAML snapshots)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage Examples
//!
//! ### Driving the Pipeline
//!
//! ```rust
//! use rosterbook::commands::{Command, RosterParser};
//! use rosterbook::{InMemoryModel, Model};
//!
//! let model = InMemoryModel::new();
//! for line in [
//!     "addclass c/CS2103T",
//!     "addstudent n/Alice Tan p/98765432 e/alice@example.com a/10 Kent Ridge Road",
//!     "join n/Alice Tan c/CS2103T",
//! ] {
//!     let command = RosterParser.parse(line).unwrap();
//!     command.execute(&model).unwrap();
//! }
//!
//! let class = model.find_class("CS2103T").unwrap().unwrap();
//! assert_eq!(class.students().len(), 1);
//! ```
//!
//! ### Tokenizing Arguments Directly
//!
//! ```rust
//! use rosterbook::{Prefix, tokenize};
//!
//! const NAME: Prefix = Prefix::new("n/");
//! const CLASS: Prefix = Prefix::new("c/");
//!
//! let tokens = tokenize("n/Alice Tan c/CS2103T", &[NAME, CLASS]);
//! assert_eq!(tokens.value(NAME), Some("Alice Tan"));
//! assert_eq!(tokens.value(CLASS), Some("CS2103T"));
//! ```
//!
//! ### Errors Stay in Their Tier
//!
//! ```rust
//! use rosterbook::commands::{Command, RosterParser};
//! use rosterbook::commands::errors::{CommandError, ParseError};
//! use rosterbook::InMemoryModel;
//!
//! // Malformed input fails at parse time.
//! assert!(matches!(
//!     RosterParser.parse("join n/Alice Tan"),
//!     Err(ParseError::MissingPrefix { .. })
//! ));
//!
//! // Well-formed input against an empty roster fails at execution time.
//! let model = InMemoryModel::new();
//! let command = RosterParser.parse("join n/Alice Tan c/CS2103T").unwrap();
//! assert!(matches!(
//!     command.execute(&model),
//!     Err(CommandError::PersonNotFound(_))
//! ));
//! ```

#![deny(missing_docs)]

mod classroom;
mod model;
mod person;
mod savefile;
mod tokenizer;

/// Command-line interface utilities for program termination and output.
///
/// This module provides the common CLI helpers used by the rosterctl
/// binary: error exits with optional usage text and feedback printing.
pub mod cli_utils;

/// The textual command surface.
///
/// This module contains one submodule per command family, the dispatcher
/// that routes raw input to them, and the parse/execute error taxonomy.
pub mod commands;

pub use classroom::{ClassName, ClassNameParseError, TuitionClass};
pub use model::{InMemoryModel, Model, ModelError};
pub use person::{
    Address, AddressParseError, Email, EmailParseError, Name, NameParseError, Person, Phone,
    PhoneParseError, Student, Tag, TagParseError, Tutor,
};
pub use savefile::{Savefile, SavefileError, SavefileManager};
pub use tokenizer::{Prefix, TokenizedArguments, tokenize};
