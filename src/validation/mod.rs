//! Validation dispatch for form control values.
//!
//! A single pure routine decides pass/fail for every value type. Bindings
//! call it on every edit and apply the verdict to their own state.

pub mod rules;

pub use rules::{validate, TABLE_EXTENSIONS};
