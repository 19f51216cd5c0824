//! # Roster Persistence
//!
//! This module saves and restores the roster as a single snapshot file.
//! A savefile holds every person and every class (memberships included,
//! since classes embed their members) plus the UTC timestamp of the save.
//! The format follows the file extension: `.json` for JSON, `.yaml`/`.yml`
//! for YAML; on load an unrecognized extension is tried as JSON first and
//! YAML second.
//!
//! Loading an absent file is not an error; it simply means an empty roster.
//! A file that exists but cannot be parsed is reported as
//! [`SavefileError::Malformed`] rather than silently discarded.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classroom::TuitionClass;
use crate::model::{Model, ModelError};
use crate::person::Person;

//////////////////////////////////////////// SavefileError ///////////////////////////////////////////

/// Errors that can occur while saving or loading a roster snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavefileError {
    /// Reading or writing the file failed.
    Io(String),
    /// The file extension maps to no supported format.
    UnsupportedExtension(String),
    /// The file content did not parse as a roster snapshot.
    Malformed(String),
    /// Applying the snapshot to a model failed.
    Model(String),
}

impl std::fmt::Display for SavefileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "Savefile IO error: {}", msg),
            Self::UnsupportedExtension(ext) => {
                write!(f, "Unsupported savefile extension {:?}", ext)
            }
            Self::Malformed(msg) => write!(f, "Malformed savefile: {}", msg),
            Self::Model(msg) => write!(f, "Failed to apply savefile: {}", msg),
        }
    }
}

impl std::error::Error for SavefileError {}

impl From<ModelError> for SavefileError {
    fn from(err: ModelError) -> Self {
        SavefileError::Model(err.to_string())
    }
}

////////////////////////////////////////////// Savefile //////////////////////////////////////////////

/// A point-in-time snapshot of the whole roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Savefile {
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// Every person in the roster at save time.
    pub persons: Vec<Person>,
    /// Every class, members embedded, at save time.
    pub classes: Vec<TuitionClass>,
}

impl Savefile {
    /// Takes a snapshot of the given model.
    pub fn snapshot(model: &dyn Model) -> Result<Self, ModelError> {
        Ok(Savefile {
            saved_at: Utc::now(),
            persons: model.list_persons()?,
            classes: model.list_classes()?,
        })
    }

    /// Applies this snapshot to an (expected-empty) model.
    ///
    /// Persons are registered first, then classes with their memberships.
    /// A snapshot with duplicate names surfaces as a model error.
    pub fn restore(&self, model: &dyn Model) -> Result<(), ModelError> {
        for person in &self.persons {
            model.add_person(person.clone())?;
        }
        for class in &self.classes {
            model.add_class(class.clone())?;
        }
        Ok(())
    }
}

/////////////////////////////////////////// SavefileManager //////////////////////////////////////////

/// Saves and loads roster snapshots at a fixed path.
pub struct SavefileManager {
    path: PathBuf,
}

impl SavefileManager {
    /// Creates a manager for the given savefile path.
    pub fn new(path: PathBuf) -> Self {
        SavefileManager { path }
    }

    /// Returns the savefile path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshots the model and writes it to the savefile path.
    ///
    /// The serialization format follows the extension; an extension that is
    /// neither JSON nor YAML is rejected before anything is written.
    pub fn save(&self, model: &dyn Model) -> Result<(), SavefileError> {
        let savefile = Savefile::snapshot(model)?;
        let rendered = match extension_of(&self.path) {
            Ext::Json => serde_json::to_string_pretty(&savefile)
                .map_err(|e| SavefileError::Malformed(e.to_string()))?,
            Ext::Yaml => serde_yml::to_string(&savefile)
                .map_err(|e| SavefileError::Malformed(e.to_string()))?,
            Ext::Other(ext) => return Err(SavefileError::UnsupportedExtension(ext)),
        };
        fs::write(&self.path, rendered).map_err(|e| SavefileError::Io(e.to_string()))
    }

    /// Loads the savefile, or returns `None` when the file does not exist.
    pub fn load(&self) -> Result<Option<Savefile>, SavefileError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| SavefileError::Io(e.to_string()))?;

        let savefile = match extension_of(&self.path) {
            Ext::Json => serde_json::from_str(&content)
                .map_err(|e| SavefileError::Malformed(e.to_string()))?,
            Ext::Yaml => serde_yml::from_str(&content)
                .map_err(|e| SavefileError::Malformed(e.to_string()))?,
            Ext::Other(_) => {
                // Unknown extension: accept either format.
                if let Ok(savefile) = serde_json::from_str::<Savefile>(&content) {
                    savefile
                } else if let Ok(savefile) = serde_yml::from_str::<Savefile>(&content) {
                    savefile
                } else {
                    return Err(SavefileError::Malformed(
                        "content is neither valid JSON nor valid YAML".to_string(),
                    ));
                }
            }
        };
        Ok(Some(savefile))
    }
}

/// The savefile formats selected by a path's extension.
enum Ext {
    Json,
    Yaml,
    Other(String),
}

fn extension_of(path: &Path) -> Ext {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ext::Json,
        Some("yaml") | Some("yml") => Ext::Yaml,
        Some(other) => Ext::Other(other.to_string()),
        None => Ext::Other(String::new()),
    }
}
