//! JWalk-based classifying directory walker.

use std::fs::FileType;
use std::path::Path;
use std::time::Instant;

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, info, warn};

use analize_core::{
    FileRecord, ScanConfig, ScanError, ScanStats, ScanSummary, ScanWarning, WarningKind,
    WriteAccess,
};

use crate::aggregate::SizeAggregator;
use crate::classify::{Classifier, MimeClassifier};
use crate::permissions::write_access;
use crate::report::Reporter;

/// Walks a directory tree, classifying and reporting every entry.
#[derive(Debug, Clone, Default)]
pub struct TreeScanner<C = MimeClassifier> {
    classifier: C,
}

impl TreeScanner<MimeClassifier> {
    /// Create a scanner using extension-based media type classification.
    pub fn new() -> Self {
        Self::with_classifier(MimeClassifier::new())
    }
}

impl<C: Classifier> TreeScanner<C> {
    /// Create a scanner with a custom classification strategy.
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Scan `config.root`, streaming each entry to `reporter`.
    ///
    /// Per-entry failures become warnings in the summary; only an invalid
    /// root or a failing reporter aborts the scan.
    pub fn run<R>(&self, config: &ScanConfig, reporter: &mut R) -> Result<ScanSummary, ScanError>
    where
        R: Reporter + ?Sized,
    {
        let start = Instant::now();
        let config = config.resolve()?;
        let root = config.root.as_path();

        // An unreadable root is fatal rather than an empty scan.
        std::fs::read_dir(root).map_err(|e| ScanError::io(root, e))?;

        info!(root = %root.display(), threshold = config.threshold_bytes, "starting scan");
        reporter.start(root).map_err(ScanError::Output)?;

        let mut aggregator = SizeAggregator::new();
        let mut stats = ScanStats::new();
        let mut flagged = Vec::new();
        let mut warnings = Vec::new();
        let mut permissions_unsupported = false;

        // Symlinks are never followed, so cycles cannot be entered.
        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    warn!(path = %path.display(), error = %err, "failed to read entry");
                    warnings.push(ScanWarning::read_error(path, &err));
                    stats.record_skipped();
                    continue;
                }
            };

            let path = entry.path();
            let depth = entry.depth() as u32;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                // jwalk keeps read_dir failures on the entry instead of yielding them.
                if let Some(err) = entry.read_children_error.as_ref() {
                    warn!(path = %path.display(), error = %err, "failed to read directory");
                    warnings.push(ScanWarning::read_error(&path, err));
                }
                if depth == 0 {
                    continue;
                }

                debug!(path = %path.display(), "directory");
                stats.record_dir(depth);
                let name = entry.file_name().to_string_lossy();
                reporter.directory(&name).map_err(ScanError::Output)?;
                continue;
            }

            if !file_type.is_file() {
                let what = describe(&file_type);
                warn!(path = %path.display(), kind = what, "skipping entry");
                warnings.push(ScanWarning::skipped(&path, what));
                stats.record_skipped();
                continue;
            }

            let metadata = match std::fs::symlink_metadata(&path) {
                Ok(m) => m,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to read metadata");
                    warnings.push(ScanWarning::metadata(&path, &err));
                    stats.record_skipped();
                    continue;
                }
            };

            let access = write_access(&metadata);
            if access == WriteAccess::Unsupported && !permissions_unsupported {
                permissions_unsupported = true;
                warn!("permission bits are not available on this platform");
                warnings.push(ScanWarning::new(
                    root,
                    "World-writable check unsupported on this platform",
                    WarningKind::PermissionsUnsupported,
                ));
            }

            let category = self.classifier.classify(&path);
            let record = FileRecord::new(
                &path,
                metadata.len(),
                category,
                access,
                config.threshold_bytes,
            );
            debug!(path = %path.display(), %category, size = record.size, "file");

            aggregator.add(record.category, record.size);
            stats.record_file(depth);
            reporter.file(&record).map_err(ScanError::Output)?;

            if record.is_flagged() {
                flagged.push(record);
            }
        }

        let summary = ScanSummary {
            root: config.root.clone(),
            threshold_bytes: config.threshold_bytes,
            totals: aggregator.into_totals(),
            stats,
            flagged,
            warnings,
            scan_duration: start.elapsed(),
        };

        info!(
            files = summary.stats.files,
            directories = summary.stats.directories,
            skipped = summary.stats.skipped,
            bytes = summary.total_size(),
            "scan complete"
        );
        reporter.finish(&summary).map_err(ScanError::Output)?;

        Ok(summary)
    }
}

/// Name an entry type that is neither a regular file nor a directory.
#[cfg(unix)]
fn describe(file_type: &FileType) -> &'static str {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_symlink() {
        "symlink"
    } else if file_type.is_socket() {
        "socket"
    } else if file_type.is_fifo() {
        "fifo"
    } else if file_type.is_block_device() || file_type.is_char_device() {
        "device"
    } else {
        "special file"
    }
}

#[cfg(not(unix))]
fn describe(file_type: &FileType) -> &'static str {
    if file_type.is_symlink() {
        "symlink"
    } else {
        "special file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TextReporter;
    use analize_core::Category;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir2")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/photo.png"), "not really a png").unwrap();
        fs::write(root.join("dir1/subdir/song.mp3"), "la la").unwrap();
        fs::write(root.join("dir2/data.xyz123"), "??").unwrap();

        temp
    }

    fn scan(path: &Path) -> (ScanSummary, String) {
        let mut reporter = TextReporter::new(Vec::new());
        let summary = TreeScanner::new()
            .run(&ScanConfig::new(path), &mut reporter)
            .unwrap();
        (summary, String::from_utf8(reporter.into_inner()).unwrap())
    }

    #[test]
    fn test_basic_scan() {
        let temp = create_test_tree();
        let (summary, _) = scan(temp.path());

        assert_eq!(summary.stats.files, 4);
        assert_eq!(summary.stats.directories, 3);
        assert_eq!(summary.stats.max_depth, 3);
        assert_eq!(summary.totals.size_of(Category::Text), 5);
        assert_eq!(summary.totals.size_of(Category::Image), 16);
        assert_eq!(summary.totals.size_of(Category::Audio), 5);
        assert_eq!(summary.totals.size_of(Category::Unknown), 2);
        assert_eq!(summary.total_size(), 28);
        assert!(!summary.has_warnings());
    }

    #[test]
    fn test_root_not_reported_as_directory() {
        let temp = create_test_tree();
        let (summary, out) = scan(temp.path());

        let root_name = temp.path().file_name().unwrap().to_string_lossy();
        assert!(!out.contains(&format!("{root_name} - Directory")));
        assert!(out.starts_with(&format!(
            "Listing and classifying items in directory: {}\n",
            summary.root.display()
        )));
        assert!(out.contains("subdir - Directory\n\n"));
    }

    #[test]
    fn test_custom_classifier() {
        let temp = create_test_tree();
        let scanner = TreeScanner::with_classifier(|_: &Path| Category::Archive);
        let mut reporter = TextReporter::new(Vec::new());
        let summary = scanner
            .run(&ScanConfig::new(temp.path()), &mut reporter)
            .unwrap();

        assert_eq!(summary.totals.size_of(Category::Archive), 28);
        assert_eq!(summary.totals.get(Category::Archive).file_count, 4);
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let mut reporter = TextReporter::new(Vec::new());
        let err = TreeScanner::new()
            .run(&ScanConfig::new(&missing), &mut reporter)
            .unwrap_err();

        assert!(matches!(err, ScanError::NotFound { .. }));
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn test_root_is_file() {
        let temp = create_test_tree();
        let mut reporter = TextReporter::new(Vec::new());
        let err = TreeScanner::new()
            .run(&ScanConfig::new(temp.path().join("file1.txt")), &mut reporter)
            .unwrap_err();

        assert!(matches!(err, ScanError::NotADirectory { .. }));
    }
}
