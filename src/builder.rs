//! Validated tree construction.
//!
//! [`crate::QuadTree::new`] performs no input checking, matching the
//! no-errors contract of the runtime operations. The builder is the
//! fail-fast path: it rejects degenerate limits and malformed root
//! rectangles before a tree exists.

use quadpoint_geom::Rect;

use crate::config::TreeConfig;
use crate::error::{QuadError, Result};
use crate::tree::QuadTree;

/// Builder for a validated [`QuadTree`].
///
/// # Example
///
/// ```rust
/// use quadpoint::{Point, QuadTreeBuilder, Rect};
///
/// let area = Rect::new(640.0, 480.0, Point::new(320.0, 240.0));
/// let tree = QuadTreeBuilder::new(area)
///     .max_depth(3)
///     .max_points(3)
///     .build()?;
/// assert_eq!(tree.max_depth(), 3);
/// # Ok::<(), quadpoint::QuadError>(())
/// ```
#[derive(Debug)]
pub struct QuadTreeBuilder {
    area: Rect,
    config: TreeConfig,
}

impl QuadTreeBuilder {
    /// Start building a tree over `area` with default limits.
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            config: TreeConfig::default(),
        }
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the depth limit.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Set the per-node point capacity.
    pub fn max_points(mut self, max_points: usize) -> Self {
        self.config.max_points = max_points;
        self
    }

    /// Validate the inputs and build the root node.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::InvalidConfig`] for unusable limits and
    /// [`QuadError::InvalidArea`] when the root rectangle is non-finite or
    /// has a non-positive dimension.
    pub fn build(self) -> Result<QuadTree> {
        self.config.validate()?;

        if !self.area.is_finite() {
            return Err(QuadError::InvalidArea(
                "area dimensions and center must be finite".to_string(),
            ));
        }
        if self.area.width <= 0.0 || self.area.height <= 0.0 {
            return Err(QuadError::InvalidArea(format!(
                "area must have positive dimensions, got {}x{}",
                self.area.width, self.area.height
            )));
        }

        Ok(QuadTree::with_config(self.area, self.config))
    }
}
