//! Filesystem helpers
//!
//! Generic create/copy/write operations driven by the manifests in
//! [`crate::manifest`]. Missing sources are reported, not raised: the
//! restructure must survive partially-present legacy trees.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::RestageResult;

/// Create a directory and its parents; pre-existing directories are success
pub fn ensure_dir(path: &Path) -> RestageResult<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Copy `src` to `dest` if `src` is a regular file
///
/// Returns `true` when a copy happened, `false` when the source is absent.
/// `std::fs::copy` carries permission bits along with the bytes.
pub fn copy_if_exists(src: &Path, dest: &Path) -> RestageResult<bool> {
    if !src.is_file() {
        return Ok(false);
    }
    fs::copy(src, dest)?;
    Ok(true)
}

/// Recursively copy every regular file under `src_root` into `dest_root`,
/// preserving relative sub-paths and creating intermediate directories.
///
/// Returns the relative paths copied, in walk order. An absent `src_root`
/// yields an empty list.
pub fn copy_tree(src_root: &Path, dest_root: &Path) -> RestageResult<Vec<PathBuf>> {
    let mut copied = Vec::new();
    if !src_root.is_dir() {
        return Ok(copied);
    }
    copy_tree_inner(src_root, src_root, dest_root, &mut copied)?;
    Ok(copied)
}

fn copy_tree_inner(
    src_root: &Path,
    current: &Path,
    dest_root: &Path,
    copied: &mut Vec<PathBuf>,
) -> RestageResult<()> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            copy_tree_inner(src_root, &path, dest_root, copied)?;
        } else if path.is_file() {
            // src_root is a prefix of every walked path
            if let Ok(relative) = path.strip_prefix(src_root) {
                let dest = dest_root.join(relative);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(&path, &dest)?;
                copied.push(relative.to_path_buf());
            }
        }
    }
    Ok(())
}

/// Write content to a file atomically
///
/// Tempfile-in-parent + rename, so a crash never leaves a half-written
/// descriptor. Parent directories are created first.
pub fn write_text(path: &Path, content: &str) -> RestageResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
