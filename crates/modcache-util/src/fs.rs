use std::fs;
use std::path::{Path, PathBuf};

/// Check whether `path` names an existing regular file.
///
/// Broken symlinks, directories and unreadable entries all report `false`.
#[must_use]
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Anchor a possibly relative path at `cwd`.
///
/// Absolute paths are returned unchanged. No `.`/`..` folding is done.
#[must_use]
pub fn anchor(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Candidate locations for a file named `file_name`, nearest first.
///
/// Starts at the directory containing `file` and walks up to the filesystem
/// root, yielding `<dir>/<file_name>` for every ancestor.
pub fn candidates_upward<'a>(
    file: &'a Path,
    file_name: &'a str,
) -> impl Iterator<Item = PathBuf> + 'a {
    file.parent()
        .into_iter()
        .flat_map(Path::ancestors)
        .map(move |dir| dir.join(file_name))
}
