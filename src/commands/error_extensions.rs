//! # Error Extensions for Handled
//!
//! This module extends the crate's error types to implement
//! `Handle<UserError>` so the CLI can extract a message and usage hint
//! from any failure in the pipeline with one code path.

use handled::Handle;

use super::errors::{CommandError, ParseError, UserError};
use crate::model::ModelError;
use crate::savefile::SavefileError;

/// Implement Handle<UserError> for ParseError
impl Handle<UserError> for ParseError {
    fn handle(&self) -> Option<UserError> {
        Some(UserError {
            message: self.to_string(),
            usage_hint: self.usage().map(str::to_string),
        })
    }
}

/// Implement Handle<UserError> for CommandError
impl Handle<UserError> for CommandError {
    fn handle(&self) -> Option<UserError> {
        Some(UserError {
            message: self.to_string(),
            usage_hint: None,
        })
    }
}

/// Implement Handle<UserError> for ModelError
impl Handle<UserError> for ModelError {
    fn handle(&self) -> Option<UserError> {
        Some(UserError {
            message: self.to_string(),
            usage_hint: None,
        })
    }
}

/// Implement Handle<UserError> for SavefileError
impl Handle<UserError> for SavefileError {
    fn handle(&self) -> Option<UserError> {
        let hint = match self {
            SavefileError::UnsupportedExtension(_) => {
                Some("Savefiles must end in .json, .yaml, or .yml".to_string())
            }
            SavefileError::Malformed(_) => {
                Some("Ensure the savefile is valid JSON or YAML produced by rosterctl".to_string())
            }
            SavefileError::Io(_) | SavefileError::Model(_) => None,
        };

        Some(UserError {
            message: self.to_string(),
            usage_hint: hint,
        })
    }
}
