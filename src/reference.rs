//! Reference weight tree for a social feed.
//!
//! Four top-level sources split the feed: `top` (0.2), `trending` (0.2),
//! `promoted` (0.1) and `following` (0.5). Three of them are subdivided
//! further. The tree is flattened with [`WeightEntry::add_children`] exactly
//! the way a hand-written configuration would be:
//!
//! | Category | Ratio |
//! |----------|-------|
//! | `top/daily` | 0.10 |
//! | `top/weekly` | 0.06 |
//! | `top/monthly` | 0.04 |
//! | `trending/city` | 0.08 |
//! | `trending/area` | 0.06 |
//! | `trending/country` | 0.06 |
//! | `promoted` | 0.10 |
//! | `following/immediate-follow` | 0.30 |
//! | `following/follow-of-follow` | 0.20 |
//!
//! Use it as a starting point or as a fixture; your own feed builds its
//! weights the same way.

use alloc::vec::Vec;

use crate::error::Result;
use crate::mixer::FeedMixer;
use crate::weights::WeightEntry;

/// The flattened reference weights, in declaration order.
pub fn reference_weights() -> Vec<WeightEntry> {
    let mut weights = Vec::new();

    weights.extend(WeightEntry::new("top", 0.2).add_children(&[
        WeightEntry::new("daily", 0.5),
        WeightEntry::new("weekly", 0.3),
        WeightEntry::new("monthly", 0.2),
    ]));
    weights.extend(WeightEntry::new("trending", 0.2).add_children(&[
        WeightEntry::new("city", 0.4),
        WeightEntry::new("area", 0.3),
        WeightEntry::new("country", 0.3),
    ]));
    weights.push(WeightEntry::new("promoted", 0.1));
    weights.extend(WeightEntry::new("following", 0.5).add_children(&[
        WeightEntry::new("immediate-follow", 0.6),
        WeightEntry::new("follow-of-follow", 0.4),
    ]));

    weights
}

/// A [`FeedMixer`] over [`reference_weights`] with default options.
pub fn reference_mixer() -> Result<FeedMixer> {
    FeedMixer::new(reference_weights())
}
