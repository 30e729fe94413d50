//! # feed-mix
//!
//! Quota-respecting, order-preserving feed mixing over hierarchical category
//! weights.
//!
//! ---
//!
//! A feed is assembled from several content sources (top posts, trending,
//! promoted, people you follow, ...). Each source gets a configured share of
//! the feed. This crate turns those shares into a feed **without reordering
//! anything**: the output is always a subsequence of the input.
//!
//! **Weights are a tree, the table is flat.** Category weights are written as
//! a tree (`following` → `immediate-follow`, `follow-of-follow`) and
//! flattened once into `parent/child` paths whose ratio is the product along
//! the path.
//!
//! **Quotas are shares of relevant content.** Posts whose category is not
//! configured are dropped first; quotas are computed against what is left.
//!
//! **One pass, no lookahead.** Each category's quota becomes a per-call
//! counter that decides keep or skip as the input streams by.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! WeightEntry tree ─add_children─► flat weights ─► CategoryRatioTable
//!                                                          │
//! posts ─► relevance filter ─► QuotaCalculator(len) ─► interleave ─► feed
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`post`] | [`Post`], [`Categorized`] | Feed items and the category seam |
//! | [`weights`] | [`WeightEntry`] | Category weights and one-level flattening |
//! | [`table`] | [`CategoryRatioTable`] | Category → ratio lookup, last-wins |
//! | [`quota`] | [`QuotaCalculator`], [`RoundingMode`] | Integer quotas from a candidate count |
//! | [`mixer`] | [`FeedMixer`], [`SelectionPolicy`] | Filter, quota and interleave |
//! | [`reference`] | [`reference::reference_weights`] | Ready-made social feed weight tree |
//! | [`config`] | [`config::MixerConfig`] | Serialisable weight tree (requires `serde` feature) |
//! | [`error`] | [`MixerError`] | Construction errors |
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and needs `alloc`. Enable the `std`
//! feature to get `std::error::Error` and `std`-backed `tracing`. Enable the
//! `serde` feature for serialisation and the [`config`] module.
//!
//! ## Logging
//!
//! Events are emitted through `tracing` at `debug`/`trace` level. The crate
//! never installs a subscriber.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod error;
pub mod mixer;
pub mod post;
pub mod quota;
pub mod reference;
pub mod table;
pub mod weights;

#[cfg(feature = "serde")]
pub mod config;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use error::{MixerError, Result};
pub use mixer::{FeedMixer, MixOptions, SelectionPolicy};
pub use post::{Categorized, Post};
pub use quota::{QuotaCalculator, RoundingMode};
pub use table::CategoryRatioTable;
pub use weights::WeightEntry;
