//! Write-permission inspection.

use std::fs::Metadata;
use std::path::Path;

use analize_core::WriteAccess;

/// Classify write access from already-fetched metadata.
#[cfg(unix)]
pub fn write_access(metadata: &Metadata) -> WriteAccess {
    use std::os::unix::fs::PermissionsExt;
    WriteAccess::from_mode(metadata.permissions().mode())
}

#[cfg(not(unix))]
pub fn write_access(_metadata: &Metadata) -> WriteAccess {
    WriteAccess::Unsupported
}

/// Inspect the file at `path` without following a final symlink.
pub fn inspect(path: &Path) -> std::io::Result<WriteAccess> {
    let metadata = std::fs::symlink_metadata(path)?;
    Ok(write_access(&metadata))
}

/// Check whether group or other may write to the file at `path`.
pub fn is_world_writable(path: &Path) -> std::io::Result<bool> {
    inspect(path).map(WriteAccess::is_world_writable)
}
