//! Error type for mixer construction.
//!
//! Mixing itself is total. The only failure is a configuration with no
//! weight entries, which is rejected when the table is built.

use thiserror::Error;

/// Errors raised while building a [`crate::table::CategoryRatioTable`] or
/// a [`crate::mixer::FeedMixer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixerError {
    /// No weight entries were supplied, so no category could ever be relevant.
    #[error("mixer requires at least one weight entry")]
    EmptyConfiguration,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, MixerError>;
