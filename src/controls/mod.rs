//! Control bindings pairing widget kinds with value types.
//!
//! Every binding composes a shared [`FieldState`] instead of inheriting
//! widget-library base classes: the state owns the raw text, the declared
//! value type, the auxiliary constraints, and the last computed validity,
//! and delegates every decision to [`crate::validation::validate`].
//!
//! Lifecycle: a binding validates once at construction, then re-validates
//! on every edit or auxiliary-action completion, and pushes the boolean to
//! an attached presenter. Validity is never stale.

pub mod choice;
pub mod color;
pub mod file;
pub mod numeric;
pub mod text;

pub use choice::{BoolField, ChoiceField};
pub use color::ColorField;
pub use file::{list_from_string, FileField, FileListField, TableField};
pub use numeric::IntField;
pub use text::{CodeField, TextField};

use crate::core::color::Color;
use crate::core::error::ControlId;
use crate::core::types::{AuxConstraints, Derived, ValueType};
use crate::services::ValidityPresenter;
use crate::validation::validate;
use log::debug;
use std::fmt;

/// Shared capability of every validating control.
pub trait Validatable {
    /// The declared value type. Immutable after construction.
    fn value_type(&self) -> ValueType;

    /// The current raw text value.
    fn raw_value(&self) -> &str;

    /// Replace the raw value and re-validate. Returns the new validity.
    fn set_raw_value(&mut self, raw: String) -> bool;

    /// The validity computed for the current raw value.
    fn is_valid(&self) -> bool;
}

/// State shared by every control binding.
///
/// Owns the raw value, its declared type, auxiliary constraints, the last
/// computed validity, and the derived color cache. All mutation goes through
/// [`FieldState::set_raw`] or [`FieldState::revalidate`], so validity always
/// reflects the most recently validated raw value.
pub struct FieldState {
    id: ControlId,
    field_name: String,
    value_type: ValueType,
    constraints: AuxConstraints,
    raw: String,
    valid: bool,
    color: Option<Color>,
    presenter: Option<Box<dyn ValidityPresenter>>,
}

impl FieldState {
    /// Create state for a field and run the initial validation pass.
    pub fn new(
        field_name: impl Into<String>,
        value_type: ValueType,
        initial: impl Into<String>,
        constraints: AuxConstraints,
    ) -> Self {
        let mut state = Self {
            id: ControlId::new(),
            field_name: field_name.into(),
            value_type,
            constraints,
            raw: initial.into(),
            valid: false,
            color: None,
            presenter: None,
        };
        state.revalidate();
        state
    }

    /// Re-run validation against the current raw value and push the result
    /// to the attached presenter. Returns the new validity.
    pub fn revalidate(&mut self) -> bool {
        let verdict = validate(&self.raw, self.value_type, &self.constraints);
        if verdict.is_valid != self.valid {
            debug!(
                "field '{}' [{}] is now {}",
                self.field_name,
                self.id,
                if verdict.is_valid { "valid" } else { "invalid" }
            );
        }
        self.valid = verdict.is_valid;
        if let Some(Derived::Color(color)) = verdict.derived {
            self.color = Some(color);
        }
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.show_valid(self.valid);
        }
        self.valid
    }

    /// Replace the raw value and re-validate. Returns the new validity.
    pub fn set_raw(&mut self, raw: impl Into<String>) -> bool {
        self.raw = raw.into();
        self.revalidate()
    }

    /// Replace the auxiliary constraints and re-validate. The control id and
    /// any attached presenter carry over. Returns the new validity.
    pub fn set_constraints(&mut self, constraints: AuxConstraints) -> bool {
        self.constraints = constraints;
        self.revalidate()
    }

    /// Attach the widget's validity presenter and push the current state
    /// to it immediately.
    pub fn attach_presenter(&mut self, mut presenter: Box<dyn ValidityPresenter>) {
        presenter.show_valid(self.valid);
        self.presenter = Some(presenter);
    }

    /// The control's identifier.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// The field name this control is bound to.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The declared value type.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The current raw text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The validity of the current raw text.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The color derived by the most recent color validation, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// The auxiliary constraints.
    pub fn constraints(&self) -> &AuxConstraints {
        &self.constraints
    }
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("id", &self.id)
            .field("field_name", &self.field_name)
            .field("value_type", &self.value_type)
            .field("raw", &self.raw)
            .field("valid", &self.valid)
            .field("color", &self.color)
            .field("presenter", &self.presenter.as_ref().map(|_| "<dyn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingPresenter {
        shown: Rc<RefCell<Vec<bool>>>,
    }

    impl ValidityPresenter for RecordingPresenter {
        fn show_valid(&mut self, valid: bool) {
            self.shown.borrow_mut().push(valid);
        }
    }

    #[test]
    fn test_initial_validation_at_construction() {
        let state = FieldState::new("n_reps", ValueType::Integer, "5", AuxConstraints::none());
        assert!(state.is_valid());

        let state = FieldState::new("n_reps", ValueType::Integer, "five", AuxConstraints::none());
        assert!(!state.is_valid());
    }

    #[test]
    fn test_set_raw_revalidates() {
        let mut state = FieldState::new("n_reps", ValueType::Integer, "5", AuxConstraints::none());
        assert!(!state.set_raw("5.5"));
        assert!(!state.is_valid());
        assert!(state.set_raw("6"));
        assert!(state.is_valid());
    }

    #[test]
    fn test_presenter_sees_every_transition() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut state = FieldState::new("text", ValueType::String, "fine", AuxConstraints::none());
        state.attach_presenter(Box::new(RecordingPresenter { shown: shown.clone() }));

        state.set_raw("broken \" quote");
        state.set_raw("mended \\\" quote");

        // Initial push on attach, then one per edit
        assert_eq!(*shown.borrow(), vec![true, false, true]);
    }

    #[test]
    fn test_set_constraints_revalidates_through_presenter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("clip.mp4"), "x").unwrap();

        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut state = FieldState::new(
            "movie",
            ValueType::File,
            "clip.mp4",
            AuxConstraints::none().with_working_dir(dir.path()),
        );
        state.attach_presenter(Box::new(RecordingPresenter { shown: shown.clone() }));

        let narrowed = state.constraints().clone().with_extensions([".avi"]);
        assert!(!state.set_constraints(narrowed));

        // Push on attach, then one for the constraint change
        assert_eq!(*shown.borrow(), vec![true, false]);
    }

    #[test]
    fn test_color_cache_survives_invalid_edits() {
        let mut state = FieldState::new("fill", ValueType::Color, "red", AuxConstraints::none());
        assert_eq!(state.color(), Some(Color::RED));

        // An invalid edit keeps the last good color for the preview swatch
        state.set_raw("notacolor");
        assert!(!state.is_valid());
        assert_eq!(state.color(), Some(Color::RED));
    }
}
