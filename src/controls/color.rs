//! Color input binding.

use crate::controls::{FieldState, Validatable};
use crate::core::color::Color;
use crate::core::types::{AuxConstraints, ValueType};
use crate::services::ColorPickerService;

/// Color input with a picker affordance and a preview swatch.
///
/// The color derived by validation is cached on the field so the swatch can
/// render without reparsing the text.
#[derive(Debug)]
pub struct ColorField {
    state: FieldState,
}

impl ColorField {
    /// Create a color field.
    pub fn new(field_name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(field_name, ValueType::Color, initial, AuxConstraints::none()),
        }
    }

    /// Open the color picker. A chosen color replaces the raw value with its
    /// hex form and re-validates; a dismissed picker changes nothing.
    pub fn pick_color(&mut self, picker: &dyn ColorPickerService) -> bool {
        match picker.pick_color() {
            Some(color) => self.state.set_raw(color.to_hex()),
            None => self.state.is_valid(),
        }
    }

    /// The color for the preview swatch: the most recent successfully
    /// parsed value.
    pub fn color(&self) -> Option<Color> {
        self.state.color()
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

impl Validatable for ColorField {
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
