//! Serialisable mixer configuration.
//!
//! Weights are written as a tree and flattened once, at build time. The tree
//! does not survive past [`MixerConfig::build`]; only the flat entries and
//! their ratio table do.
//!
//! ```json
//! {
//!   "weights": [
//!     { "category": "promoted", "ratio": 0.1 },
//!     { "category": "following", "ratio": 0.9, "children": [
//!         { "category": "immediate-follow", "ratio": 0.6 },
//!         { "category": "follow-of-follow", "ratio": 0.4 }
//!     ] }
//!   ],
//!   "rounding": "floor",
//!   "policy": "counter_exhaustion"
//! }
//! ```
//!
//! `rounding` and `policy` are optional and default to `floor` and
//! `counter_exhaustion`.
//!
//! # no_std
//!
//! This module requires the `serde` feature and only needs `alloc`. Reading
//! the bytes and picking a format is left to the caller.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Result;
use crate::mixer::{FeedMixer, MixOptions, SelectionPolicy};
use crate::quota::RoundingMode;
use crate::weights::WeightEntry;

/// One node of a configured weight tree.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct WeightSpec {
    /// Path segment for this node (may itself contain `/`).
    pub category: String,
    /// Ratio relative to the parent node.
    pub ratio: f64,
    /// Sub-categories. A node with children is not a category of its own.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WeightSpec>,
}

impl WeightSpec {
    /// A leaf node.
    pub fn leaf(category: impl Into<String>, ratio: f64) -> Self {
        Self {
            category: category.into(),
            ratio,
            children: Vec::new(),
        }
    }

    /// An inner node.
    pub fn node(category: impl Into<String>, ratio: f64, children: Vec<WeightSpec>) -> Self {
        Self {
            category: category.into(),
            ratio,
            children,
        }
    }

    /// Flatten this subtree into leaf entries, depth-first in child order.
    pub fn flatten(&self) -> Vec<WeightEntry> {
        let own = WeightEntry::new(self.category.clone(), self.ratio);
        if self.children.is_empty() {
            return alloc::vec![own];
        }
        let below: Vec<WeightEntry> = self.children.iter().flat_map(WeightSpec::flatten).collect();
        own.add_children(&below)
    }
}

impl From<WeightEntry> for WeightSpec {
    fn from(entry: WeightEntry) -> Self {
        Self::leaf(entry.category, entry.ratio)
    }
}

/// Complete configuration for a [`FeedMixer`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MixerConfig {
    /// Top-level weight nodes, in order.
    pub weights: Vec<WeightSpec>,
    /// Quota rounding. Default: floor.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Keep/skip rule. Default: counter exhaustion.
    #[serde(default)]
    pub policy: SelectionPolicy,
}

impl MixerConfig {
    /// Flat weight entries for every configured leaf, in tree order.
    pub fn entries(&self) -> Vec<WeightEntry> {
        self.weights.iter().flat_map(WeightSpec::flatten).collect()
    }

    /// Options section of the configuration.
    pub fn options(&self) -> MixOptions {
        MixOptions {
            rounding: self.rounding,
            policy: self.policy,
        }
    }

    /// Build the mixer.
    ///
    /// Fails with [`crate::MixerError::EmptyConfiguration`] when the tree has
    /// no nodes.
    pub fn build(&self) -> Result<FeedMixer> {
        FeedMixer::with_options(self.entries(), self.options())
    }
}
