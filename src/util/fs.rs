//! Filesystem utilities.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::errors::GosmithError;

/// Permission bits for generated regular files.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Permission bits for generated scripts.
#[cfg(unix)]
const SCRIPT_MODE: u32 = 0o700;

/// Permission bits for created directories.
#[cfg(unix)]
const DIR_MODE: u32 = 0o750;

/// Ensure a directory exists, creating it and its parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new()
            .recursive(true)
            .mode(DIR_MODE)
            .create(path)
            .map_err(|e| GosmithError::filesystem(path, e))?;
    }

    #[cfg(not(unix))]
    fs::create_dir_all(path).map_err(|e| GosmithError::filesystem(path, e))?;

    Ok(())
}

/// Write a file, marking it executable when it is a script.
///
/// Existing files are overwritten and get their permissions reset.
pub fn write_file(path: &Path, contents: &[u8], executable: bool) -> Result<()> {
    fs::write(path, contents).map_err(|e| GosmithError::filesystem(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = if executable { SCRIPT_MODE } else { FILE_MODE };
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .map_err(|e| GosmithError::filesystem(path, e))?;
    }

    #[cfg(not(unix))]
    let _ = executable;

    Ok(())
}

/// Remove a file if it exists. Returns whether a file was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => {
            fs::remove_file(path).map_err(|e| GosmithError::filesystem(path, e))?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(GosmithError::filesystem(path, e).into()),
    }
}

/// Get the relative path from `base` to `path`.
///
/// `path` equal to `base` yields an empty path.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Render a relative path with `/` separators, as `go` and `git` expect in
/// arguments. Component bytes are kept as they are.
pub fn slash_path(path: &Path) -> OsString {
    let mut out = OsString::new();
    for (i, component) in path.components().enumerate() {
        if i > 0 {
            out.push("/");
        }
        out.push(component.as_os_str());
    }
    out
}

/// Resolve `path` against the current directory without touching the
/// filesystem.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| GosmithError::filesystem(path, e).into())
}
