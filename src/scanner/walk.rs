use super::FileFilter;
use crate::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Recursively collects the files under `root` whose file name passes `filter`.
/// Paths are absolute, sorted by their string form and unique. Directories, and links to them, are
/// never returned.
pub fn discover_files(root: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>, Error> {
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    let root = fs::canonicalize(root)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry = entry?;
        if entry.path().is_dir() {
            continue;
        }

        let included = filter.matches(&entry.file_name().to_string_lossy());
        if included {
            trace!("Including {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    // Plain string order, not component order: "d-x.txt" sorts before "d/z.txt".
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files.dedup();

    debug!("Discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Widest absolute path, in characters. Sizes the two path columns of the report.
pub fn max_path_width(files: &[PathBuf]) -> usize {
    files
        .iter()
        .map(|p| p.to_string_lossy().chars().count())
        .max()
        .unwrap_or(0)
}
