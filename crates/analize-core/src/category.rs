//! Content categories.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// Broad content category a file is sorted into.
///
/// Declaration order is the fixed display order of the summary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum Category {
    #[strum(to_string = "Text file")]
    Text,
    #[strum(to_string = "Image file")]
    Image,
    #[strum(to_string = "Audio file")]
    Audio,
    #[strum(to_string = "Video file")]
    Video,
    #[strum(to_string = "Executable file")]
    Executable,
    #[strum(to_string = "Archive file")]
    Archive,
    #[strum(to_string = "Application file")]
    Application,
    #[default]
    #[strum(to_string = "Unknown file type")]
    Unknown,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> impl Iterator<Item = Category> {
        Self::iter()
    }

    /// Position of this category in display order.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(Category::Text.to_string(), "Text file");
        assert_eq!(Category::Image.to_string(), "Image file");
        assert_eq!(Category::Unknown.to_string(), "Unknown file type");
    }

    #[test]
    fn test_display_order() {
        let order: Vec<Category> = Category::all().collect();
        assert_eq!(order.len(), Category::COUNT);
        assert_eq!(order.first(), Some(&Category::Text));
        assert_eq!(order.last(), Some(&Category::Unknown));

        for (i, category) in order.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
