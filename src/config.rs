//! Tree limits as a serializable configuration value.
//!
//! The limits are deliberately minimal: a depth cap and a per-node point
//! capacity. Both are fixed at construction and shared unchanged by every
//! node of one tree.

use serde::{Deserialize, Serialize};

use crate::error::{QuadError, Result};

/// Configuration limits for a quadtree.
///
/// Loadable from JSON, TOML or any other Serde format.
///
/// # Example
///
/// ```rust
/// use quadpoint::TreeConfig;
///
/// let config = TreeConfig::default();
/// assert_eq!(config.max_depth, 6);
///
/// let json = r#"{ "max_depth": 3, "max_points": 8 }"#;
/// let config: TreeConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.max_points, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth of the tree; a node at this depth never splits and
    /// holds any number of points.
    #[serde(default = "TreeConfig::default_max_depth")]
    pub max_depth: u32,

    /// Points a node may hold directly before it splits into quadrants.
    #[serde(default = "TreeConfig::default_max_points")]
    pub max_points: usize,
}

impl TreeConfig {
    const fn default_max_depth() -> u32 {
        6
    }

    const fn default_max_points() -> usize {
        4
    }

    /// Create a configuration with explicit limits.
    pub fn new(max_depth: u32, max_points: usize) -> Self {
        Self {
            max_depth,
            max_points,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Check the limits are usable.
    ///
    /// A zero point capacity would split on the very first insert at every
    /// level down to `max_depth`, so the builder rejects it eagerly.
    pub fn validate(&self) -> Result<()> {
        if self.max_points == 0 {
            return Err(QuadError::InvalidConfig(
                "max_points must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
            max_points: Self::default_max_points(),
        }
    }
}
