//! Error types for tree construction.
//!
//! Runtime operations never fail: `insert` signals rejection with `false`
//! and `query` returns an empty vector for disjoint windows. Errors only
//! arise when [`crate::QuadTreeBuilder`] validates its inputs up front.

use thiserror::Error;

/// Errors reported while building a tree.
#[derive(Debug, Error)]
pub enum QuadError {
    /// Configuration limits are unusable (e.g. a zero point capacity).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The root rectangle is degenerate or non-finite.
    #[error("invalid area: {0}")]
    InvalidArea(String),
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, QuadError>;
