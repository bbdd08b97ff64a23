//! Static asset copying

use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::trace;
use walkdir::WalkDir;

/// Placeholder kept in otherwise empty directories, never published
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// Recursively copy `src` into `dst`, returning the number of files copied.
///
/// Directories are recreated, `.gitkeep` placeholders are skipped and
/// existing files in `dst` are overwritten. `dst` must not lie inside `src`,
/// otherwise the walk would copy its own output.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(Error::NotFound(format!(
            "Static directory not found: {}",
            src.display()
        )));
    }

    fs::create_dir_all(dst).map_err(|e| Error::io_at(dst, e))?;
    let src_root = src.canonicalize().map_err(|e| Error::io_at(src, e))?;
    let dst_root = dst.canonicalize().map_err(|e| Error::io_at(dst, e))?;
    if dst_root.starts_with(&src_root) {
        return Err(Error::Validation(format!(
            "Static destination {} is inside static source {}",
            dst.display(),
            src.display()
        )));
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::Config(format!("{}: {e}", entry.path().display())))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io_at(&target, e))?;
            continue;
        }

        if entry.file_name() == PLACEHOLDER_FILE {
            continue;
        }

        trace!("Copying {} -> {}", entry.path().display(), target.display());
        fs::copy(entry.path(), &target).map_err(|e| Error::io_at(&target, e))?;
        copied += 1;
    }

    Ok(copied)
}
