//! Scan results.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::error::ScanWarning;
use crate::record::FileRecord;
use crate::totals::CategoryTotals;

/// Entry counts for a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Regular files classified.
    pub files: u64,
    /// Directories visited (excluding the root).
    pub directories: u64,
    /// Entries that were neither file nor directory, or could not be read.
    pub skipped: u64,
    /// Maximum depth reached below the root.
    pub max_depth: u32,
}

impl ScanStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified file.
    pub fn record_file(&mut self, depth: u32) {
        self.files += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a directory.
    pub fn record_dir(&mut self, depth: u32) {
        self.directories += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a skipped entry.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}

/// Final result of a scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    /// Absolute root that was scanned.
    pub root: PathBuf,

    /// Large-file threshold in bytes.
    pub threshold_bytes: u64,

    /// Per-category totals.
    pub totals: CategoryTotals,

    /// Entry counts.
    pub stats: ScanStats,

    /// Files that were large or world-writable.
    pub flagged: Vec<FileRecord>,

    /// Non-fatal problems encountered during the walk.
    pub warnings: Vec<ScanWarning>,

    /// Duration of the scan.
    pub scan_duration: Duration,
}

impl ScanSummary {
    /// Total bytes across every category.
    pub fn total_size(&self) -> u64 {
        self.totals.grand_total()
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Files larger than the threshold.
    pub fn large_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.flagged.iter().filter(|r| r.exceeds_threshold)
    }

    /// Files writable by group or other.
    pub fn world_writable_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.flagged.iter().filter(|r| r.is_world_writable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = ScanStats::default();
        assert_eq!(stats.files, 0);
        assert_eq!(stats.directories, 0);
        assert_eq!(stats.skipped, 0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = ScanStats::new();
        stats.record_file(3);
        stats.record_dir(1);
        stats.record_skipped();

        assert_eq!(stats.files, 1);
        assert_eq!(stats.directories, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.max_depth, 3);
    }
}
