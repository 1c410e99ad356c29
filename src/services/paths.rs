//! Path utilities for file controls.
//!
//! File values are stored as the user typed them (usually relative to the
//! project root) and resolved to absolute paths only when checked or opened.

use std::path::{Component, Path, PathBuf};

/// Resolve a raw value to an absolute path.
///
/// Relative values resolve against `base`, or against the process working
/// directory when no base is given.
pub fn resolve_absolute(raw: &str, base: Option<&Path>) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match base {
        Some(base) => base.join(path),
        None => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf()),
    }
}

/// Compute `path` relative to `base`.
///
/// Walks the shared prefix and climbs with `..` for the rest. Falls back to
/// the path unchanged when the two share no components (different roots).
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix(base) {
        return stripped.to_path_buf();
    }

    let path_components: Vec<Component> = path.components().collect();
    let base_components: Vec<Component> = base.components().collect();

    let mut shared = 0;
    while shared < path_components.len()
        && shared < base_components.len()
        && path_components[shared] == base_components[shared]
    {
        shared += 1;
    }
    if shared == 0 {
        return path.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for _ in shared..base_components.len() {
        relative.push("..");
    }
    for component in &path_components[shared..] {
        relative.push(component);
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_passthrough() {
        let resolved = resolve_absolute("/data/trials.csv", Some(Path::new("/project")));
        assert_eq!(resolved, PathBuf::from("/data/trials.csv"));
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let resolved = resolve_absolute("stim/faces.csv", Some(Path::new("/project")));
        assert_eq!(resolved, PathBuf::from("/project/stim/faces.csv"));
    }

    #[test]
    fn test_relative_to_child() {
        let relative = relative_to(
            Path::new("/project/stim/faces.csv"),
            Path::new("/project"),
        );
        assert_eq!(relative, PathBuf::from("stim/faces.csv"));
    }

    #[test]
    fn test_relative_to_sibling() {
        let relative = relative_to(
            Path::new("/home/user/data/trials.csv"),
            Path::new("/home/user/project"),
        );
        assert_eq!(relative, PathBuf::from("../data/trials.csv"));
    }

    #[test]
    fn test_relative_to_disjoint() {
        // No shared components: keep the path unchanged
        let relative = relative_to(Path::new("data/trials.csv"), Path::new("/project"));
        assert_eq!(relative, PathBuf::from("data/trials.csv"));
    }
}
