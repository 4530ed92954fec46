//! Reading gcode and rewriting it atomically with file locking

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Temp file next to `path`, so the final rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

/// The file a write to `path` should land in: symlinks are followed so the
/// link itself survives the rename.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|e| Error::io(path, e))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Remove the temp file if anything after its creation failed.
fn discard_temp_on_error<T>(temp_path: &Path, result: Result<T>) -> Result<T> {
    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}

/// Fill the temp file under an exclusive lock and give it the target's permissions.
fn write_temp(
    temp_path: &Path,
    target: &Path,
    content: &[u8],
    permissions: Option<fs::Permissions>,
) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: target.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file
        .sync_all()
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}

/// Write content atomically to a file with locking.
///
/// Writes to a temp file under an exclusive advisory lock, syncs it, then
/// renames it over `path`. Readers see either the old file or the new one.
/// An existing file keeps its permissions, and a symlinked `path` stays a
/// symlink with its target rewritten. The temp file never outlives a failure.
pub fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let target = resolve_target(path.as_ref())?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());
    let temp_path = temp_path_for(&target);

    let written = write_temp(&temp_path, &target, content, permissions).and_then(|()| {
        fs::rename(&temp_path, &target).map_err(|e| Error::io(&target, e))
    });
    discard_temp_on_error(&temp_path, written)?;

    tracing::info!(path = %target.display(), bytes = content.len(), "Wrote file");
    Ok(())
}

/// Read a whole file as UTF-8 text.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => Error::Encoding {
            path: path.to_path_buf(),
        },
        _ => Error::io(path, e),
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Read file");
    Ok(content)
}

/// Write text content to a file atomically.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
