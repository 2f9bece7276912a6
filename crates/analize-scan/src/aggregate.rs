//! Per-scan size aggregation.

use analize_core::{Category, CategoryTotals};

/// Accumulates per-category byte totals for one scan.
///
/// Owned by the scanner for the duration of a single run, so repeated runs
/// never share state.
#[derive(Debug, Default)]
pub struct SizeAggregator {
    totals: CategoryTotals,
}

impl SizeAggregator {
    /// Create an aggregator with every category at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `size` bytes to `category`.
    pub fn add(&mut self, category: Category, size: u64) {
        self.totals.add(category, size);
    }

    /// Snapshot of the current totals.
    pub fn totals(&self) -> CategoryTotals {
        self.totals.clone()
    }

    /// Consume the aggregator, returning the final totals.
    pub fn into_totals(self) -> CategoryTotals {
        self.totals
    }
}
