//! # Labform - Self-validating Form Controls
//!
//! Labform provides the typed input controls behind a visual
//! experiment-design tool's property panels. Each control binds a field to
//! a declared value type (string, code, number, integer, list, color, file,
//! table) and re-validates its raw text on every edit, so the UI can give
//! immediate valid/invalid feedback.
//!
//! ## Features
//!
//! - **Closed value-type taxonomy**: one enum, one validation rule per kind,
//!   exhaustively matched
//! - **Code escape**: any value starting with `$` is treated as a free-form
//!   expression and always accepted
//! - **Pure validation**: a single `validate` routine returns a verdict; the
//!   control applies it to its own state, never the other way around
//! - **Opaque collaborators**: file dialogs, color pickers, and the platform
//!   launcher sit behind traits, so the core is UI-toolkit agnostic
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use labform::prelude::*;
//!
//! // A pure validation pass
//! let verdict = validate("[1, 2, 3]", ValueType::List, &AuxConstraints::none());
//! assert!(verdict.is_valid);
//!
//! // A bound control: validates at construction and on every edit
//! let mut reps = IntField::new("n_reps", "5");
//! reps.step_up();
//! assert_eq!(reps.raw_value(), "6");
//!
//! // Any field doubles as an expression field via the $ sentinel
//! let mut label = TextField::new("text", "$expInfo['participant']");
//! assert!(label.is_valid());
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: value types, verdicts, the color subsystem, and errors
//! - [`validation`]: the per-type validation rules
//! - [`controls`]: one binding per widget kind, composed over shared state
//! - [`services`]: traits for host-provided dialogs, launcher, and styling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controls;
pub mod core;
pub mod services;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use labform::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::color::Color;
    pub use crate::core::types::{AuxConstraints, Derived, ValueType, Verdict};

    // Errors
    pub use crate::core::error::{
        ActionError, ActionResult, ColorParseError, ControlId, LaunchError, UnknownValueType,
    };

    // Validation
    pub use crate::validation::{validate, TABLE_EXTENSIONS};

    // Controls
    pub use crate::controls::{
        list_from_string, BoolField, ChoiceField, CodeField, ColorField, FieldState, FileField,
        FileListField, IntField, TableField, TextField, Validatable,
    };

    // Services
    pub use crate::services::{
        ColorPickerService, FileDialogService, LauncherService, ValidityPresenter,
    };
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "labform");
    }

    #[test]
    fn test_control_kinds_share_the_validator() {
        // The same $ escape works through every binding kind
        let mut number = IntField::new("n", "nonsense");
        assert!(!number.is_valid());
        assert!(number.set_raw_value("$trialClock.getTime()".to_string()));

        let mut color = ColorField::new("fill", "nonsense");
        assert!(!color.is_valid());
        assert!(color.set_raw_value("$win.color".to_string()));
    }

    #[test]
    fn test_validatable_as_trait_object() {
        let mut fields: Vec<Box<dyn Validatable>> = vec![
            Box::new(TextField::new("text", "hello")),
            Box::new(IntField::new("n_reps", "5")),
            Box::new(ColorField::new("fill", "red")),
        ];
        assert!(fields.iter().all(|f| f.is_valid()));

        for field in fields.iter_mut() {
            field.set_raw_value("$code".to_string());
            assert!(field.is_valid());
        }
    }
}
