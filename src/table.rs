//! Category → ratio lookup table.
//!
//! Built once from a flat weight list and read by every mix call. Duplicate
//! category paths are resolved last-wins; that is a table policy, not an error.

use alloc::string::String;
use hashbrown::HashMap;

use crate::error::{MixerError, Result};
use crate::weights::WeightEntry;

/// Immutable mapping from category path to ratio.
///
/// Never empty: construction rejects an empty weight list.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRatioTable {
    ratios: HashMap<String, f64>,
}

impl CategoryRatioTable {
    /// Build the table from `entries`, in order.
    ///
    /// A later entry overwrites an earlier one with the same category path.
    /// Returns [`MixerError::EmptyConfiguration`] if `entries` is empty.
    pub fn from_entries(entries: &[WeightEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(MixerError::EmptyConfiguration);
        }

        let mut ratios = HashMap::with_capacity(entries.len());
        for entry in entries {
            if let Some(previous) = ratios.insert(entry.category.clone(), entry.ratio) {
                tracing::debug!(
                    category = %entry.category,
                    previous,
                    ratio = entry.ratio,
                    "duplicate category weight overwritten"
                );
            }
        }

        Ok(Self { ratios })
    }

    /// Ratio configured for `category`, if any.
    pub fn ratio(&self, category: &str) -> Option<f64> {
        self.ratios.get(category).copied()
    }

    /// Whether `category` is configured.
    pub fn contains(&self, category: &str) -> bool {
        self.ratios.contains_key(category)
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Always `false` for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Iterate over `(category, ratio)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ratios.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
