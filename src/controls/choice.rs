//! Checkbox and enumerated-choice bindings.

use crate::controls::{FieldState, Validatable};
use crate::core::types::{AuxConstraints, ValueType};

/// Checkbox binding. No text to validate; the value is always acceptable.
#[derive(Debug, Clone)]
pub struct BoolField {
    field_name: String,
    checked: bool,
}

impl BoolField {
    /// Create a checkbox bound to `field_name`.
    pub fn new(field_name: impl Into<String>, initial: bool) -> Self {
        Self {
            field_name: field_name.into(),
            checked: initial,
        }
    }

    /// The field name this control is bound to.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Current checked state.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// Selection among a fixed option set; value type `String`.
///
/// Selecting a value outside the option set keeps the prior selection.
#[derive(Debug)]
pub struct ChoiceField {
    state: FieldState,
    options: Vec<String>,
    selected: Option<usize>,
}

impl ChoiceField {
    /// Create a choice field. The initial value is selected only when it
    /// appears in `options`; otherwise the field starts unselected.
    pub fn new(
        field_name: impl Into<String>,
        options: Vec<String>,
        initial: impl AsRef<str>,
    ) -> Self {
        let selected = options.iter().position(|o| o == initial.as_ref());
        let raw = selected.map(|i| options[i].clone()).unwrap_or_default();
        Self {
            state: FieldState::new(field_name, ValueType::String, raw, AuxConstraints::none()),
            options,
            selected,
        }
    }

    /// The option set.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The currently selected option.
    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    /// Select `value` if it is one of the options. Returns whether the
    /// selection changed; an unknown value keeps the prior selection.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(index) => {
                self.selected = Some(index);
                self.state.set_raw(self.options[index].clone());
                true
            }
            None => false,
        }
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

impl Validatable for ChoiceField {
    fn value_type(&self) -> ValueType {
        self.state.value_type()
    }

    fn raw_value(&self) -> &str {
        self.state.raw()
    }

    /// Constrained: the raw value only changes when it names an option.
    fn set_raw_value(&mut self, raw: String) -> bool {
        self.select(&raw);
        self.state.is_valid()
    }

    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }
}
