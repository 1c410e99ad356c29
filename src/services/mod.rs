//! Host-provided collaborator services.
//!
//! The windowing toolkit, its dialogs, and the platform launcher are opaque
//! to this crate. Controls reach them only through the traits here, so the
//! core stays independent of any particular UI stack and tests can stub the
//! collaborators.

pub mod paths;

use crate::core::color::Color;
use crate::core::error::LaunchError;
use std::path::{Path, PathBuf};

/// File-picker dialog.
pub trait FileDialogService {
    /// Show an open-file dialog.
    ///
    /// `filter_extensions` carries allowed extensions (with leading dot) for
    /// the dialog's filter; empty means all files. Returns the selected
    /// absolute paths, or `None` when the user dismissed the dialog.
    fn show_open_dialog(
        &self,
        filter_extensions: &[String],
        allow_multiple: bool,
    ) -> Option<Vec<PathBuf>>;
}

/// Color-picker dialog.
pub trait ColorPickerService {
    /// Show the picker. Returns the chosen color, or `None` when dismissed.
    fn pick_color(&self) -> Option<Color>;
}

/// Launcher for opening a file in the platform's default application.
pub trait LauncherService {
    /// Open `path` with its registered handler.
    fn open_with_default_app(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Visual valid/invalid presentation for a bound widget.
///
/// A control pushes every computed validity here so the widget can restyle
/// itself (e.g. red foreground on invalid input).
pub trait ValidityPresenter {
    /// Style the widget according to `valid`.
    fn show_valid(&mut self, valid: bool);
}
