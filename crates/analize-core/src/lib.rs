//! Core types for analize.
//!
//! This crate holds the data model shared by the scan engine and the CLI:
//! content categories, per-file records, per-category totals, the scan
//! configuration and the final summary.

mod category;
mod config;
mod error;
mod record;
mod summary;
mod totals;

pub use category::Category;
pub use config::{DEFAULT_THRESHOLD_MB, ScanConfig, ScanConfigBuilder, threshold_mb_to_bytes};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use record::{BYTES_PER_MB, FileRecord, WriteAccess, bytes_to_mb, format_mb};
pub use summary::{ScanStats, ScanSummary};
pub use totals::{CategoryStats, CategoryTotals};
