use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Ensure the parent directory of `path` exists, creating it and any parents if needed.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}

/// Turn `path` into an absolute, lexically clean path, joining it onto `base`
/// when it is relative.
///
/// Purely lexical: `.` and `..` are folded without touching the filesystem,
/// so symlinks are never followed and missing paths clean the same way as
/// existing ones.
pub fn normalize_from(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    joined.clean()
}

/// Like [`normalize_from`], relative to the current working directory.
pub fn normalize(path: &Path) -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(normalize_from(&cwd, path))
}
