//! Value types and validation outcomes for form controls.
//!
//! The type system uses an enum-based approach for several reasons:
//! - Closed set of types: the experiment builder has a fixed value-type taxonomy
//! - Zero-cost pattern matching: the validator dispatches through a jump table
//! - Serialization: serde handles enums natively
//! - Type safety: exhaustive matching catches a missing kind at compile time

use crate::core::color::Color;
use crate::core::error::UnknownValueType;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Closed set of value types a field control can declare.
///
/// The declared type selects the validation rule applied to the control's
/// raw text and the auxiliary affordances its binding offers. The set is
/// fixed; it is not a user-extensible registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Plain text, later interpolated into generated source
    String,
    /// Free-form expression, never rejected client-side
    Code,
    /// Floating-point literal
    Number,
    /// Base-10 integer literal
    Integer,
    /// Loose list shorthand (bracketed, comma-separated, or single token)
    List,
    /// Named color, hex triplet, or numeric tuple
    Color,
    /// Path to an existing regular file
    File,
    /// Path to an existing spreadsheet/table file
    Table,
}

impl ValueType {
    /// All value types, in declaration order.
    pub const ALL: [ValueType; 8] = [
        ValueType::String,
        ValueType::Code,
        ValueType::Number,
        ValueType::Integer,
        ValueType::List,
        ValueType::Color,
        ValueType::File,
        ValueType::Table,
    ];

    /// Get a human-readable name for this type.
    pub fn display_name(&self) -> &'static str {
        match self {
            ValueType::String => "String",
            ValueType::Code => "Code",
            ValueType::Number => "Number",
            ValueType::Integer => "Integer",
            ValueType::List => "List",
            ValueType::Color => "Color",
            ValueType::File => "File",
            ValueType::Table => "Table",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "str" | "string" => Ok(ValueType::String),
            "code" => Ok(ValueType::Code),
            "num" | "number" => Ok(ValueType::Number),
            "int" | "integer" => Ok(ValueType::Integer),
            "list" => Ok(ValueType::List),
            "color" => Ok(ValueType::Color),
            "file" => Ok(ValueType::File),
            "table" => Ok(ValueType::Table),
            other => Err(UnknownValueType(other.to_string())),
        }
    }
}

/// Outcome of validating a raw value.
///
/// Returned by [`crate::validation::validate`] as a plain result; the caller
/// applies it to its own state explicitly. Validation failures are carried
/// here as a boolean, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    /// Whether the raw value is acceptable for its declared type.
    pub is_valid: bool,
    /// Value derived during validation, where the rule produces one.
    pub derived: Option<Derived>,
}

impl Verdict {
    /// An accepting verdict with no derived value.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            derived: None,
        }
    }

    /// A rejecting verdict.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            derived: None,
        }
    }

    /// A verdict from a bare pass/fail decision.
    pub fn of(is_valid: bool) -> Self {
        Self {
            is_valid,
            derived: None,
        }
    }

    /// An accepting verdict carrying a derived value.
    pub fn valid_with(derived: Derived) -> Self {
        Self {
            is_valid: true,
            derived: Some(derived),
        }
    }

    /// The derived color, if this verdict carries one.
    pub fn color(&self) -> Option<Color> {
        match self.derived {
            Some(Derived::Color(c)) => Some(c),
            None => None,
        }
    }
}

/// Value derived as a side product of validation.
///
/// Currently only color validation derives anything: the parsed color is
/// cached on the control for reuse by a preview affordance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value")]
pub enum Derived {
    /// Color parsed from the raw value
    Color(Color),
}

/// Per-control auxiliary validation data.
///
/// Most controls carry none. File and table controls declare an
/// allowed-extension set and the directory relative paths resolve against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuxConstraints {
    /// Allowed file extensions including the leading dot (e.g. `.csv`).
    /// Order is preserved for building dialog filter strings.
    pub allowed_extensions: Option<IndexSet<String>>,
    /// Base directory for resolving relative file paths. The process
    /// working directory is used when absent.
    pub working_dir: Option<PathBuf>,
}

impl AuxConstraints {
    /// Constraints with nothing declared.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the allowed-extension set.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Set the directory relative paths resolve against.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Check a raw value against the allowed-extension set.
    ///
    /// Case-sensitive suffix match on the raw string, not the resolved
    /// path. No declared set accepts everything.
    pub fn extension_allowed(&self, raw: &str) -> bool {
        match &self.allowed_extensions {
            Some(extensions) => extensions.iter().any(|ext| raw.ends_with(ext.as_str())),
            None => true,
        }
    }

    /// The working directory, if declared.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}
