//! Per-file scan records.

use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Bytes in one megabyte as reported by analize.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Convert a byte count to megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

/// Format a byte count as megabytes with two decimals, e.g. `1.50 MB`.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes_to_mb(bytes))
}

/// Whether parties other than the owner may write to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteAccess {
    /// No group or other write bit is set.
    OwnerOnly,
    /// Group-write or other-write is set.
    WorldWritable,
    /// The platform has no POSIX permission bits to inspect.
    Unsupported,
}

impl WriteAccess {
    /// Build from a POSIX mode.
    pub fn from_mode(mode: u32) -> Self {
        if mode & 0o022 != 0 {
            Self::WorldWritable
        } else {
            Self::OwnerOnly
        }
    }

    /// Check if the file grants write access beyond its owner.
    pub fn is_world_writable(self) -> bool {
        matches!(self, Self::WorldWritable)
    }
}

/// A single classified file, reported as soon as it is visited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Full path of the file.
    pub path: PathBuf,

    /// File name (not full path).
    pub name: CompactString,

    /// Size in bytes at time of visit.
    pub size: u64,

    /// Detected content category.
    pub category: Category,

    /// Write access beyond the owner.
    pub write_access: WriteAccess,

    /// Size strictly exceeds the configured threshold.
    pub exceeds_threshold: bool,
}

impl FileRecord {
    /// Create a new record; `exceeds_threshold` is derived from `threshold`.
    pub fn new(
        path: impl Into<PathBuf>,
        size: u64,
        category: Category,
        write_access: WriteAccess,
        threshold: u64,
    ) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_else(|| CompactString::new(path.to_string_lossy()));

        Self {
            path,
            name,
            size,
            category,
            write_access,
            exceeds_threshold: size > threshold,
        }
    }

    /// Check if the file is world-writable.
    pub fn is_world_writable(&self) -> bool {
        self.write_access.is_world_writable()
    }

    /// Check if the record should appear in the flagged list.
    pub fn is_flagged(&self) -> bool {
        self.exceeds_threshold || self.is_world_writable()
    }
}
