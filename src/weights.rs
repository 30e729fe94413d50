//! Category weights and one-level tree flattening.
//!
//! Deep category trees are never stored. They are built by composing
//! [`WeightEntry::add_children`] calls, each of which folds the parent's
//! path and ratio into its children:
//!
//! ```rust
//! use feed_mix::weights::WeightEntry;
//!
//! let following = WeightEntry::new("following", 0.5).add_children(&[
//!     WeightEntry::new("immediate-follow", 0.6),
//!     WeightEntry::new("follow-of-follow", 0.4),
//! ]);
//!
//! assert_eq!(following[0].category, "following/immediate-follow");
//! assert!((following[0].ratio - 0.3).abs() < 1e-12);
//! assert_eq!(following[1].category, "following/follow-of-follow");
//! assert!((following[1].ratio - 0.2).abs() < 1e-12);
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Separator between the segments of a category path.
pub const CATEGORY_SEPARATOR: char = '/';

/// A `(category path, ratio)` pair.
///
/// The ratio is conceptually in `[0.0, 1.0]` but is never clamped or
/// validated. Callers own the sanity of their configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightEntry {
    /// Category path, e.g. `"trending/city"`.
    pub category: String,
    /// Share of the relevant feed this category should receive.
    pub ratio: f64,
}

impl WeightEntry {
    /// Create a weight entry.
    pub fn new(category: impl Into<String>, ratio: f64) -> Self {
        Self {
            category: category.into(),
            ratio,
        }
    }

    /// Expand this entry against `children`, one level deep.
    ///
    /// Each child yields `self.category/child.category` with ratio
    /// `self.ratio * child.ratio`, in the order the children were given.
    /// No entry is emitted for `self`.
    pub fn add_children(&self, children: &[WeightEntry]) -> Vec<WeightEntry> {
        children
            .iter()
            .map(|child| WeightEntry {
                category: format!("{}{}{}", self.category, CATEGORY_SEPARATOR, child.category),
                ratio: self.ratio * child.ratio,
            })
            .collect()
    }
}

/// Sum of all ratios in `entries`.
///
/// Nothing requires a configuration to sum to `1.0`; this exists for callers
/// that want to check their own weights.
pub fn ratio_sum(entries: &[WeightEntry]) -> f64 {
    entries.iter().map(|e| e.ratio).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_add_children_paths_and_ratios() {
        let parent = WeightEntry::new("following", 0.5);
        let flat = parent.add_children(&[
            WeightEntry::new("immediate-follow", 0.6),
            WeightEntry::new("follow-of-follow", 0.4),
        ]);

        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].category, "following/immediate-follow");
        assert!((flat[0].ratio - 0.3).abs() < 1e-12);
        assert_eq!(flat[1].category, "following/follow-of-follow");
        assert!((flat[1].ratio - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_add_children_preserves_child_order() {
        let parent = WeightEntry::new("top", 1.0);
        let flat = parent.add_children(&[
            WeightEntry::new("monthly", 0.2),
            WeightEntry::new("daily", 0.5),
            WeightEntry::new("weekly", 0.3),
        ]);
        let names: Vec<&str> = flat.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(names, vec!["top/monthly", "top/daily", "top/weekly"]);
    }

    #[test]
    fn test_add_children_empty_emits_nothing() {
        let parent = WeightEntry::new("promoted", 0.1);
        assert!(parent.add_children(&[]).is_empty());
    }

    #[test]
    fn test_add_children_composes_deeper() {
        let inner = WeightEntry::new("city", 0.5).add_children(&[
            WeightEntry::new("north", 0.5),
            WeightEntry::new("south", 0.5),
        ]);
        let outer = WeightEntry::new("trending", 0.4).add_children(&inner);

        assert_eq!(outer[0].category, "trending/city/north");
        assert!((outer[0].ratio - 0.1).abs() < 1e-12);
        assert_eq!(outer[1].category, "trending/city/south");
    }

    #[test]
    fn test_ratios_not_clamped() {
        let flat = WeightEntry::new("a", 2.0).add_children(&[WeightEntry::new("b", -0.5)]);
        assert!((flat[0].ratio + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_sum() {
        let entries = vec![WeightEntry::new("a", 0.25), WeightEntry::new("b", 0.75)];
        assert!((ratio_sum(&entries) - 1.0).abs() < 1e-12);
        assert_eq!(ratio_sum(&[]), 0.0);
    }
}
