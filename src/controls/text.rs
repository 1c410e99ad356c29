//! Plain-text and code-expression bindings.

use crate::controls::{FieldState, Validatable};
use crate::core::types::{AuxConstraints, ValueType};

/// Single- or multi-line plain text input.
///
/// Declared as `String`, but a value starting with `$` escalates to code
/// for validation and for the widget's expression styling.
#[derive(Debug)]
pub struct TextField {
    state: FieldState,
    multiline: bool,
}

impl TextField {
    /// Create a single-line text field.
    pub fn new(field_name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(field_name, ValueType::String, initial, AuxConstraints::none()),
            multiline: false,
        }
    }

    /// Create a multi-line text field.
    pub fn extended(field_name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(field_name, ValueType::String, initial, AuxConstraints::none()),
            multiline: true,
        }
    }

    /// Whether this field renders as a multi-line widget.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// The type the current value is effectively validated as: `Code` when
    /// the value carries the `$` sentinel, otherwise the declared `String`.
    /// The widget uses this to switch to expression styling.
    pub fn effective_type(&self) -> ValueType {
        if self.state.raw().starts_with('$') {
            ValueType::Code
        } else {
            ValueType::String
        }
    }

    /// Shared field state.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Shared field state, mutable (presenter attachment).
    pub fn state_mut(&mut self) -> &mut FieldState {
        &mut self.state
    }
}

impl Validatable for TextField {
    fn value_type(&self) -> ValueType {
        self.state.value_type()
    }

    fn raw_value(&self) -> &str {
        self.state.raw()
    }

    fn set_raw_value(&mut self, raw: String) -> bool {
        self.state.set_raw(raw)
    }

    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }
}

/// Expression input; always validated as code.
///
/// The widget renders the `$` sentinel itself, so the stored raw value
/// never carries one.
#[derive(Debug)]
pub struct CodeField {
    state: FieldState,
    multiline: bool,
}

impl CodeField {
    /// Create a single-line code field.
    pub fn new(field_name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(field_name, ValueType::Code, initial, AuxConstraints::none()),
            multiline: false,
        }
    }

    /// Create a multi-line code field.
    pub fn extended(field_name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(field_name, ValueType::Code, initial, AuxConstraints::none()),
            multiline: true,
        }
    }

    /// Whether this field renders as a multi-line widget.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Shared field state.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Shared field state, mutable.
    pub fn state_mut(&mut self) -> &mut FieldState {
        &mut self.state
    }
}

impl Validatable for CodeField {
    fn value_type(&self) -> ValueType {
        self.state.value_type()
    }

    fn raw_value(&self) -> &str {
        self.state.raw()
    }

    fn set_raw_value(&mut self, raw: String) -> bool {
        self.state.set_raw(raw)
    }

    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }
}
