//! Region quadtree for 2D point data with axis-aligned range queries.
//!
//! ```rust
//! use quadpoint::{Point, QuadTree, Rect};
//!
//! let area = Rect::new(640.0, 480.0, Point::new(320.0, 240.0));
//! let mut tree = QuadTree::new(area, 6, 4);
//!
//! tree.insert(Point::new(100.0, 100.0));
//! tree.insert(Point::with_id(300.0, 220.0, 7));
//!
//! let window = Rect::new(120.0, 120.0, Point::new(320.0, 240.0));
//! let hits = tree.query(&window);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, Some(7));
//! ```
//!
//! The tree partitions a fixed rectangular area into four quadrants on
//! demand, so range queries only visit subregions that can intersect the
//! query window. Points that fall outside the root area are rejected with
//! a `false` return, never an error.
//!
//! # Concurrency
//!
//! A [`QuadTree`] is a plain exclusively-owned value: mutation goes through
//! `&mut self` and there is no interior mutability. Wrap it in a lock if
//! multiple threads need to insert into or query the same tree.

pub mod builder;
pub mod config;
pub mod error;
pub mod stats;
pub mod tree;

pub use builder::QuadTreeBuilder;
pub use config::TreeConfig;
pub use error::{QuadError, Result};
pub use stats::TreeStats;
pub use tree::{QuadTree, Quadrant};

pub use quadpoint_geom::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{QuadError, QuadTree, QuadTreeBuilder, Quadrant, Result};

    pub use crate::{TreeConfig, TreeStats};

    pub use quadpoint_geom::{Point, Rect};
}
