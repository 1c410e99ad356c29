//! Error types for labform.
//!
//! Uses thiserror for structured errors with context. Validation failure is
//! never an error: it is a boolean inside a [`crate::core::types::Verdict`].
//! The types here cover everything else - color parsing at the subsystem
//! boundary, and auxiliary-action failures surfaced to the host as blocking
//! notifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a field control.
///
/// Assigned at construction, used for logging and panel bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlId(pub Uuid);

impl ControlId {
    /// Create a new random control ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a control ID from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ControlId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A value-type tag that names no known value type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value type '{0}'")]
pub struct UnknownValueType(pub String);

/// Errors from parsing a color token.
///
/// The validator maps every variant to a plain invalid verdict; the variants
/// exist so the color subsystem never has to suppress failures silently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    #[error("expected 3 or 4 color components, got {0}")]
    ComponentCount(usize),

    #[error("color component '{0}' is not a number")]
    BadComponent(String),

    #[error("color component {0} is out of range")]
    OutOfRange(f64),
}

/// Errors from the external-program launcher service.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("no handler registered for this file type")]
    NoHandler,

    #[error("platform error: {0}")]
    Platform(String),
}

/// Failures from a control's auxiliary actions.
///
/// These never affect a control's stored validity; the host surfaces them
/// as user-facing notifications.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("no table file at '{path}' and no template for component type '{component}'")]
    NoTemplate { path: String, component: String },

    #[error("failed to create '{path}' from template '{template}'")]
    TemplateCopy {
        path: String,
        template: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open '{path}' in the default application")]
    Launch {
        path: String,
        #[source]
        source: LaunchError,
    },
}

/// Result type alias for auxiliary actions.
pub type ActionResult<T> = Result<T, ActionError>;
