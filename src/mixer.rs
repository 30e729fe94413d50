//! Quota-respecting, order-preserving feed mixing.
//!
//! # The pipeline
//!
//! ```text
//! posts ──► relevance filter ──► quotas(len(relevant)) ──► interleave over *original* posts
//!                 ▲                      ▲
//!        CategoryRatioTable       QuotaCalculator
//! ```
//!
//! Output is always a subsequence of the input: nothing is reordered, nothing
//! is randomised, and posts whose category is not configured never appear.
//!
//! # The counter rule
//!
//! Under the default [`SelectionPolicy::CounterExhaustion`], every category
//! starts a per-call counter at its quota and walks the input once:
//!
//! - counter `== 1` → skip, counter stays at `1` for the rest of the call;
//! - otherwise → keep the post and decrement the counter.
//!
//! A quota of `Q ≥ 1` therefore keeps at most `Q − 1` posts, while a quota of
//! `0` (or below) never reaches `1` and keeps *every* post of that category.
//! This reproduces the established behaviour of the feed and is kept exactly;
//! [`SelectionPolicy::Positional`] is the "keep exactly `Q`" alternative.
//!
//! # Invariants
//!
//! - The mixer is immutable after construction; each call allocates its own
//!   counters, so a shared `&FeedMixer` needs no locking.
//! - With exactly one configured category the filtered input is returned
//!   unchanged, whatever the policy.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::Result;
use crate::post::Categorized;
use crate::quota::{QuotaCalculator, RoundingMode};
use crate::table::CategoryRatioTable;
use crate::weights::WeightEntry;

/// How quotas turn into keep/skip decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SelectionPolicy {
    /// Running counter per category; the value `1` is a terminal skip state.
    #[default]
    CounterExhaustion,
    /// Keep the n-th relevant post of a category (zero-based) iff `n < quota`.
    Positional,
    /// Relevance filtering only; quotas are not computed.
    MembershipOnly,
}

/// Tuning for a [`FeedMixer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixOptions {
    /// Quota rounding.
    pub rounding: RoundingMode,
    /// Keep/skip rule.
    pub policy: SelectionPolicy,
}

/// Mixes ordered posts from several categories according to fixed ratios.
///
/// ```rust
/// use feed_mix::mixer::FeedMixer;
/// use feed_mix::post::Post;
/// use feed_mix::weights::WeightEntry;
///
/// let mixer = FeedMixer::new(vec![
///     WeightEntry::new("following", 0.5),
///     WeightEntry::new("trending", 0.5),
/// ])
/// .unwrap();
///
/// let posts = vec![
///     Post::new("a", "following"),
///     Post::new("b", "ads"),
///     Post::new("c", "trending"),
/// ];
/// let mixed = mixer.mix(&posts);
/// assert!(mixed.iter().all(|p| p.category != "ads"));
/// ```
#[derive(Clone, Debug)]
pub struct FeedMixer {
    weights: Vec<WeightEntry>,
    table: CategoryRatioTable,
    options: MixOptions,
}

impl FeedMixer {
    /// Build a mixer with default options (floor rounding, counter rule).
    ///
    /// Fails with [`crate::MixerError::EmptyConfiguration`] if `weights` is empty.
    pub fn new(weights: Vec<WeightEntry>) -> Result<Self> {
        Self::with_options(weights, MixOptions::default())
    }

    /// Build a mixer with explicit options.
    pub fn with_options(weights: Vec<WeightEntry>, options: MixOptions) -> Result<Self> {
        let table = CategoryRatioTable::from_entries(&weights)?;
        Ok(Self {
            weights,
            table,
            options,
        })
    }

    /// The weight entries this mixer was configured with, as supplied.
    pub fn weights(&self) -> &[WeightEntry] {
        &self.weights
    }

    /// The derived category → ratio table.
    pub fn table(&self) -> &CategoryRatioTable {
        &self.table
    }

    /// Rounding and policy in effect.
    pub fn options(&self) -> MixOptions {
        self.options
    }

    /// Indices of posts whose category is configured, in input order.
    pub fn filter_relevant<P: Categorized>(&self, posts: &[P]) -> Vec<usize> {
        posts
            .iter()
            .enumerate()
            .filter(|(_, p)| self.table.contains(p.category()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Quotas for `candidate_count` relevant posts under this mixer's rounding.
    pub fn quotas(&self, candidate_count: usize) -> HashMap<&str, i64> {
        QuotaCalculator::new(self.options.rounding).compute(&self.table, candidate_count)
    }

    /// Indices of the posts that make it into the mixed feed, in input order.
    pub fn select<P: Categorized>(&self, posts: &[P]) -> Vec<usize> {
        let relevant = self.filter_relevant(posts);

        if self.table.len() == 1 {
            tracing::trace!(kept = relevant.len(), "single category, returning filtered posts");
            return relevant;
        }

        match self.options.policy {
            SelectionPolicy::MembershipOnly => relevant,
            SelectionPolicy::CounterExhaustion => {
                self.select_by_counter(posts, self.quotas(relevant.len()))
            }
            SelectionPolicy::Positional => {
                self.select_by_position(posts, self.quotas(relevant.len()))
            }
        }
    }

    /// Mix `posts` into a feed. Never fails; may return an empty feed.
    pub fn mix<P: Categorized + Clone>(&self, posts: &[P]) -> Vec<P> {
        let selected = self.select(posts);
        tracing::debug!(
            input = posts.len(),
            kept = selected.len(),
            categories = self.table.len(),
            policy = ?self.options.policy,
            "mixed feed"
        );
        selected.into_iter().map(|i| posts[i].clone()).collect()
    }

    // Scans the unfiltered input; the quota lookup re-applies relevance.
    fn select_by_counter<P: Categorized>(
        &self,
        posts: &[P],
        mut remaining: HashMap<&str, i64>,
    ) -> Vec<usize> {
        let mut kept = Vec::new();
        for (i, post) in posts.iter().enumerate() {
            let Some(counter) = remaining.get_mut(post.category()) else {
                continue;
            };
            if *counter == 1 {
                continue;
            }
            kept.push(i);
            *counter = counter.saturating_sub(1);
        }
        kept
    }

    fn select_by_position<P: Categorized>(
        &self,
        posts: &[P],
        quotas: HashMap<&str, i64>,
    ) -> Vec<usize> {
        let mut seen: HashMap<&str, i64> = HashMap::with_capacity(quotas.len());
        let mut kept = Vec::new();
        for (i, post) in posts.iter().enumerate() {
            let Some((&category, &quota)) = quotas.get_key_value(post.category()) else {
                continue;
            };
            let rank = seen.entry(category).or_insert(0);
            if *rank < quota {
                kept.push(i);
            }
            *rank += 1;
        }
        kept
    }
}
