//! Classification and aggregation engine for analize.
//!
//! A single sequential pass over a directory tree that:
//!
//! - **Classifies** every regular file into a [`Category`] via a pluggable
//!   [`Classifier`] (media type guessed from the extension by default)
//! - **Inspects** permission bits for group/other write access
//! - **Aggregates** byte totals per category
//! - **Reports** each entry as soon as it is visited through a [`Reporter`]
//!
//! Symbolic links are never followed, so the walk terminates on trees that
//! contain link cycles.
//!
//! # Example
//!
//! ```rust,no_run
//! use analize_scan::{ScanConfig, TextReporter, TreeScanner};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let mut reporter = TextReporter::new(std::io::stdout().lock());
//! let summary = TreeScanner::new().run(&config, &mut reporter).unwrap();
//!
//! println!("Total size: {} bytes", summary.total_size());
//! ```

mod aggregate;
mod classify;
pub mod permissions;
mod report;
mod scanner;

pub use aggregate::SizeAggregator;
pub use classify::{Classifier, MagicClassifier, MimeClassifier, category_for_mime, sniff_bytes};
pub use report::{JsonReporter, Reporter, TextReporter};
pub use scanner::TreeScanner;

// Re-export core types for convenience
pub use analize_core::{
    Category, CategoryStats, CategoryTotals, FileRecord, ScanConfig, ScanError, ScanStats,
    ScanSummary, ScanWarning, WarningKind, WriteAccess,
};
