//! Integer spinner binding.

use crate::controls::{FieldState, Validatable};
use crate::core::types::{AuxConstraints, ValueType};

/// Integer input with increment/decrement stepper affordances.
///
/// The stepper edits the raw text by one and re-validates. When the current
/// text does not parse as an integer the stepper is a no-op; typing stays
/// the only way to recover from a malformed value.
#[derive(Debug)]
pub struct IntField {
    state: FieldState,
}

impl IntField {
    /// Create an integer field.
    pub fn new(field_name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(field_name, ValueType::Integer, initial, AuxConstraints::none()),
        }
    }

    /// Increment the value by one and re-validate.
    pub fn step_up(&mut self) -> bool {
        self.step(1)
    }

    /// Decrement the value by one and re-validate.
    pub fn step_down(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> bool {
        match self.state.raw().trim().parse::<i64>() {
            Ok(value) => self.state.set_raw(value.saturating_add(delta).to_string()),
            Err(_) => self.state.is_valid(),
        }
    }

    /// The current value as an integer, when the raw text parses.
    pub fn value(&self) -> Option<i64> {
        self.state.raw().trim().parse().ok()
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

impl Validatable for IntField {
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
