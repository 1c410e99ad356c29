//! File, table, and file-list bindings.
//!
//! File values are stored relative to the project root where possible, so
//! experiments stay portable. Resolution back to absolute paths happens at
//! validation and launch time.

use crate::controls::{FieldState, Validatable};
use crate::core::error::{ActionError, ActionResult};
use crate::core::types::{AuxConstraints, ValueType};
use crate::services::paths;
use crate::services::{FileDialogService, LauncherService};
use crate::validation::TABLE_EXTENSIONS;
use indexmap::IndexMap;
use log::warn;
use std::path::{Path, PathBuf};

/// Single file input with a browse affordance.
#[derive(Debug)]
pub struct FileField {
    state: FieldState,
    project_root: PathBuf,
}

impl FileField {
    /// Create a file field resolving relative paths against `project_root`.
    pub fn new(
        field_name: impl Into<String>,
        initial: impl Into<String>,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        let project_root = project_root.into();
        let constraints = AuxConstraints::none().with_working_dir(project_root.clone());
        Self {
            state: FieldState::new(field_name, ValueType::File, initial, constraints),
            project_root,
        }
    }

    /// Restrict the field to the given extensions and re-validate.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let constraints = self.state.constraints().clone().with_extensions(extensions);
        self.state.set_constraints(constraints);
        self
    }

    /// Open the file picker. A selection replaces the raw value with the
    /// picked path relative to the project root and re-validates; a
    /// dismissed dialog changes nothing.
    pub fn browse(&mut self, dialog: &dyn FileDialogService) -> bool {
        match dialog.show_open_dialog(&self.filter_extensions(), false) {
            Some(picked) if !picked.is_empty() => {
                let relative = paths::relative_to(&picked[0], &self.project_root);
                self.state.set_raw(relative.to_string_lossy().into_owned())
            }
            _ => self.state.is_valid(),
        }
    }

    /// The project root relative paths resolve against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The raw value resolved to an absolute path.
    pub fn resolved_path(&self) -> PathBuf {
        paths::resolve_absolute(self.state.raw(), Some(&self.project_root))
    }

    fn filter_extensions(&self) -> Vec<String> {
        self.state
            .constraints()
            .allowed_extensions
            .as_ref()
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
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

impl Validatable for FileField {
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

/// Spreadsheet/table file input with browse and open-in-editor affordances.
///
/// Restricted to the fixed [`TABLE_EXTENSIONS`] set. Components may register
/// a template for their table files; the open affordance stays enabled for
/// those even while the value is invalid, and a missing file is created from
/// the template before launching.
#[derive(Debug)]
pub struct TableField {
    state: FieldState,
    project_root: PathBuf,
    templates: IndexMap<String, PathBuf>,
    component_type: Option<String>,
}

impl TableField {
    /// Create a table field resolving relative paths against `project_root`.
    pub fn new(
        field_name: impl Into<String>,
        initial: impl Into<String>,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        let project_root = project_root.into();
        let constraints = AuxConstraints::none()
            .with_working_dir(project_root.clone())
            .with_extensions(TABLE_EXTENSIONS.iter().copied());
        Self {
            state: FieldState::new(field_name, ValueType::Table, initial, constraints),
            project_root,
            templates: IndexMap::new(),
            component_type: None,
        }
    }

    /// Register a table template for a component type.
    pub fn with_template(
        mut self,
        component_type: impl Into<String>,
        template: impl Into<PathBuf>,
    ) -> Self {
        self.templates.insert(component_type.into(), template.into());
        self
    }

    /// Set the owning component's type, used for template lookup.
    pub fn set_component_type(&mut self, component_type: impl Into<String>) {
        self.component_type = Some(component_type.into());
    }

    /// Whether the open-in-editor affordance is enabled: the current value
    /// is valid, or the owning component type has a known template.
    pub fn can_open_editor(&self) -> bool {
        self.state.is_valid() || self.template().is_some()
    }

    /// Open the file picker with the table filter. Same semantics as
    /// [`FileField::browse`].
    pub fn browse(&mut self, dialog: &dyn FileDialogService) -> bool {
        let filters: Vec<String> = TABLE_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        match dialog.show_open_dialog(&filters, false) {
            Some(picked) if !picked.is_empty() => {
                let relative = paths::relative_to(&picked[0], &self.project_root);
                self.state.set_raw(relative.to_string_lossy().into_owned())
            }
            _ => self.state.is_valid(),
        }
    }

    /// Open the table in the platform's default table editor.
    ///
    /// An existing file with an allowed extension opens directly. Otherwise
    /// the component's template is used: when the field names a path, the
    /// template is copied there first (then the copy opens and the field
    /// re-validates); with no path set, the template itself opens. No file
    /// and no template is an error for the host to surface as a blocking
    /// notification. Stored validity is never touched by failures here.
    pub fn open_in_editor(&mut self, launcher: &dyn LauncherService) -> ActionResult<()> {
        let raw = self.state.raw().to_string();
        let resolved = paths::resolve_absolute(&raw, Some(&self.project_root));

        if resolved.is_file() && self.state.constraints().extension_allowed(&raw) {
            return launcher
                .open_with_default_app(&resolved)
                .map_err(|source| ActionError::Launch {
                    path: raw,
                    source,
                });
        }

        let Some(template) = self.template().cloned() else {
            return Err(ActionError::NoTemplate {
                path: raw,
                component: self.component_type.clone().unwrap_or_default(),
            });
        };

        if !raw.is_empty() && !resolved.exists() {
            // Create the table from the component's template, then open it.
            std::fs::copy(&template, &resolved).map_err(|source| {
                warn!("template copy to '{}' failed: {}", resolved.display(), source);
                ActionError::TemplateCopy {
                    path: resolved.display().to_string(),
                    template: template.display().to_string(),
                    source,
                }
            })?;
            self.state.revalidate();
            launcher
                .open_with_default_app(&resolved)
                .map_err(|source| ActionError::Launch {
                    path: resolved.display().to_string(),
                    source,
                })
        } else {
            launcher
                .open_with_default_app(&template)
                .map_err(|source| ActionError::Launch {
                    path: template.display().to_string(),
                    source,
                })
        }
    }

    fn template(&self) -> Option<&PathBuf> {
        self.component_type
            .as_ref()
            .and_then(|component| self.templates.get(component))
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

impl Validatable for TableField {
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

/// Ordered, append-only list of file paths.
///
/// Items arrive through the file picker (relativized to the project root)
/// or drag-and-drop (kept as dropped, regular files only), and leave through
/// remove-selected. The value is the ordered sequence of path strings.
#[derive(Debug, Clone)]
pub struct FileListField {
    field_name: String,
    project_root: PathBuf,
    items: Vec<String>,
}

impl FileListField {
    /// Create an empty file list.
    pub fn new(field_name: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            field_name: field_name.into(),
            project_root: project_root.into(),
            items: Vec::new(),
        }
    }

    /// Create a file list from a stored raw value: either already a list of
    /// items, or a single string in the loose list shorthand.
    pub fn from_string(
        field_name: impl Into<String>,
        project_root: impl Into<PathBuf>,
        raw: &str,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            project_root: project_root.into(),
            items: list_from_string(raw),
        }
    }

    /// The field name this control is bound to.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The ordered path strings.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of paths in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add files through the picker (multi-select). Picked paths append in
    /// order, relativized to the project root. Returns the number added;
    /// a dismissed dialog adds nothing.
    pub fn add_via_dialog(&mut self, dialog: &dyn FileDialogService) -> usize {
        match dialog.show_open_dialog(&[], true) {
            Some(picked) => {
                let added = picked.len();
                for path in picked {
                    let relative = paths::relative_to(&path, &self.project_root);
                    self.items.push(relative.to_string_lossy().into_owned());
                }
                added
            }
            None => 0,
        }
    }

    /// Add dropped paths. Only existing regular files append; everything
    /// else in the drop is ignored. Returns the number added.
    pub fn add_dropped(&mut self, dropped: &[PathBuf]) -> usize {
        let mut added = 0;
        for path in dropped {
            if path.is_file() {
                self.items.push(path.to_string_lossy().into_owned());
                added += 1;
            }
        }
        added
    }

    /// Remove the items at the selected indices.
    pub fn remove_selected(&mut self, selected: &[usize]) {
        let mut index = 0;
        self.items.retain(|_| {
            let keep = !selected.contains(&index);
            index += 1;
            keep
        });
    }
}

/// Parse the loose list shorthand into items: strip one bracket layer,
/// split on commas, trim whitespace and quotes, drop empties.
pub fn list_from_string(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = if (trimmed.starts_with('[') && trimmed.ends_with(']'))
        || (trimmed.starts_with('(') && trimmed.ends_with(')'))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LaunchError;
    use std::cell::RefCell;
    use std::fs;

    struct FixedDialog(Option<Vec<PathBuf>>);

    impl FileDialogService for FixedDialog {
        fn show_open_dialog(&self, _filters: &[String], _multi: bool) -> Option<Vec<PathBuf>> {
            self.0.clone()
        }
    }

    struct RecordingLauncher {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl RecordingLauncher {
        fn new() -> Self {
            Self {
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl LauncherService for RecordingLauncher {
        fn open_with_default_app(&self, path: &Path) -> Result<(), LaunchError> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_browse_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("stim")).unwrap();
        fs::write(dir.path().join("stim/faces.png"), b"png").unwrap();

        let mut field = FileField::new("image", "", dir.path());
        assert!(!field.is_valid());

        let picked = dir.path().join("stim/faces.png");
        assert!(field.browse(&FixedDialog(Some(vec![picked]))));

        // The stored value is the relativized path, and reading it back
        // returns that same string
        assert_eq!(field.raw_value(), "stim/faces.png");
        assert!(field.is_valid());
    }

    #[test]
    fn test_browse_dismissed_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), "x").unwrap();

        let mut field = FileField::new("image", "a.csv", dir.path());
        assert!(field.is_valid());
        assert!(field.browse(&FixedDialog(None)));
        assert_eq!(field.raw_value(), "a.csv");
    }

    #[test]
    fn test_file_extension_restriction() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clip.mp4"), "x").unwrap();

        let field = FileField::new("movie", "clip.mp4", dir.path()).with_extensions([".avi"]);
        assert!(!field.is_valid());

        let field = FileField::new("movie", "clip.mp4", dir.path()).with_extensions([".mp4"]);
        assert!(field.is_valid());
    }

    #[test]
    fn test_with_extensions_keeps_control_identity() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clip.mp4"), "x").unwrap();

        let field = FileField::new("movie", "clip.mp4", dir.path());
        let id = field.state().id();

        // Narrowing the extensions re-validates in place; the field stays
        // the same logical control
        let field = field.with_extensions([".avi"]);
        assert_eq!(field.state().id(), id);
        assert!(!field.is_valid());
        assert_eq!(
            field.state().constraints().working_dir(),
            Some(dir.path())
        );
    }

    #[test]
    fn test_table_accepts_spreadsheet_extensions_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("conditions.xlsx"), "x").unwrap();
        fs::write(dir.path().join("conditions.mp4"), "x").unwrap();

        let table = TableField::new("conditions", "conditions.xlsx", dir.path());
        assert!(table.is_valid());

        let table = TableField::new("conditions", "conditions.mp4", dir.path());
        assert!(!table.is_valid());
    }

    #[test]
    fn test_open_editor_enablement() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = TableField::new("items", "missing.csv", dir.path())
            .with_template("Form", dir.path().join("formItems.xltx"));
        assert!(!table.is_valid());
        assert!(!table.can_open_editor());

        table.set_component_type("Form");
        assert!(table.can_open_editor());
    }

    #[test]
    fn test_open_editor_valid_file_opens_directly() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("trials.csv"), "a,b\n").unwrap();

        let mut table = TableField::new("conditions", "trials.csv", dir.path());
        let launcher = RecordingLauncher::new();
        table.open_in_editor(&launcher).unwrap();
        assert_eq!(*launcher.opened.borrow(), vec![dir.path().join("trials.csv")]);
    }

    #[test]
    fn test_open_editor_creates_from_template() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("formItems.csv"), "index,itemText\n").unwrap();

        let mut table = TableField::new("items", "survey.csv", dir.path())
            .with_template("Form", dir.path().join("formItems.csv"));
        table.set_component_type("Form");
        assert!(!table.is_valid());

        let launcher = RecordingLauncher::new();
        table.open_in_editor(&launcher).unwrap();

        // The missing table was created from the template, opened, and the
        // field re-validated against the now-existing file
        let created = dir.path().join("survey.csv");
        assert!(created.is_file());
        assert_eq!(*launcher.opened.borrow(), vec![created]);
        assert!(table.is_valid());
    }

    #[test]
    fn test_open_editor_without_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = TableField::new("conditions", "missing.csv", dir.path());
        table.set_component_type("TrialHandler");

        let launcher = RecordingLauncher::new();
        let error = table.open_in_editor(&launcher).unwrap_err();
        assert!(matches!(error, ActionError::NoTemplate { .. }));
        assert!(launcher.opened.borrow().is_empty());
        // Stored validity is untouched by the failure
        assert!(!table.is_valid());
    }

    #[test]
    fn test_file_list_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), "x").unwrap();
        fs::write(dir.path().join("b.png"), "x").unwrap();

        let mut list = FileListField::new("resources", dir.path());
        let added = list.add_via_dialog(&FixedDialog(Some(vec![
            dir.path().join("a.png"),
            dir.path().join("b.png"),
        ])));
        assert_eq!(added, 2);
        assert_eq!(list.items(), ["a.png", "b.png"]);

        assert_eq!(list.add_via_dialog(&FixedDialog(None)), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_file_list_drop_filters_non_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("real.png"), "x").unwrap();

        let mut list = FileListField::new("resources", dir.path());
        let added = list.add_dropped(&[
            dir.path().join("real.png"),
            dir.path().join("ghost.png"),
            dir.path().to_path_buf(),
        ]);
        assert_eq!(added, 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_file_list_remove_selected() {
        let mut list = FileListField::from_string("resources", "/project", "a.png, b.png, c.png");
        list.remove_selected(&[0, 2]);
        assert_eq!(list.items(), ["b.png"]);
    }

    #[test]
    fn test_list_from_string_shorthand() {
        assert_eq!(list_from_string("[a.png, b.png]"), ["a.png", "b.png"]);
        assert_eq!(list_from_string("'a.png', \"b.png\""), ["a.png", "b.png"]);
        assert_eq!(list_from_string("solo.png"), ["solo.png"]);
        assert!(list_from_string("").is_empty());
        assert!(list_from_string("[]").is_empty());
    }
}
