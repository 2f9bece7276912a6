//! Per-category size totals.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::EnumCount;

use crate::category::Category;

/// Accumulated byte and file counts for one category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    /// Total size in bytes.
    pub total_size: u64,
    /// Number of files.
    pub file_count: u64,
}

/// Running totals for every category.
///
/// Every category starts at zero so empty categories still show up in the
/// summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryTotals {
    stats: [CategoryStats; Category::COUNT],
}

impl CategoryTotals {
    /// Create totals with every category at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file of `size` bytes to `category`.
    pub fn add(&mut self, category: Category, size: u64) {
        let entry = &mut self.stats[category.index()];
        entry.total_size += size;
        entry.file_count += 1;
    }

    /// Stats for one category.
    pub fn get(&self, category: Category) -> CategoryStats {
        self.stats[category.index()]
    }

    /// Total bytes for one category.
    pub fn size_of(&self, category: Category) -> u64 {
        self.get(category).total_size
    }

    /// Sum of bytes across all categories.
    pub fn grand_total(&self) -> u64 {
        self.stats.iter().map(|s| s.total_size).sum()
    }

    /// Number of files across all categories.
    pub fn file_count(&self) -> u64 {
        self.stats.iter().map(|s| s.file_count).sum()
    }

    /// Fold another set of partial totals into this one.
    pub fn merge(&mut self, other: &CategoryTotals) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            mine.total_size += theirs.total_size;
            mine.file_count += theirs.file_count;
        }
    }

    /// Iterate categories in display order with their stats.
    pub fn iter(&self) -> impl Iterator<Item = (Category, CategoryStats)> + '_ {
        Category::all().map(|c| (c, self.get(c)))
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, stats) in self.iter() {
            map.serialize_entry(&category, &stats)?;
        }
        map.end()
    }
}
