//! Core types for the labform control system.
//!
//! This module contains the foundational types the rest of the crate builds
//! on:
//! - Value types (the closed 8-kind taxonomy) and validation verdicts
//! - The color subsystem
//! - Error types and control identifiers

pub mod color;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use color::Color;
pub use error::{ActionError, ActionResult, ColorParseError, ControlId, LaunchError};
pub use types::{AuxConstraints, Derived, ValueType, Verdict};
