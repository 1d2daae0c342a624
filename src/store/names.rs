//! Name and path hygiene for the virtual folder tree.

/// Splits a folder path into its non-empty segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Joins a folder path and a child name.
pub fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}

/// Cleans a user-supplied file or folder name.
///
/// Separator and otherwise illegal characters are removed; names that
/// reduce to nothing (blank, dots-only) are rejected.
pub fn clean(raw: &str) -> Option<String> {
    let cleaned = sanitize_filename::sanitize(raw.trim());
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
