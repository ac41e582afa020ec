//! # quadpoint-geom
//!
//! Screen-space geometry primitives for the quadpoint spatial index.
//!
//! This crate provides the two types the index is built on:
//!
//! - **[`Point`]**: a 2D coordinate pair with an optional opaque id
//! - **[`Rect`]**: an axis-aligned rectangle described by its center,
//!   width and height
//!
//! Coordinates follow screen conventions: x grows to the right, y grows
//! downward. All containment and intersection predicates treat boundaries
//! as inclusive. Both types are serializable with Serde.
//!
//! ## Examples
//!
//! ```rust
//! use quadpoint_geom::{Point, Rect};
//!
//! let area = Rect::new(640.0, 480.0, Point::new(320.0, 240.0));
//! assert!(area.contains_point(&Point::new(0.0, 0.0), 0.0));
//! assert_eq!(area.area(), 640.0 * 480.0);
//! ```

pub mod point;
pub mod rect;

pub use point::Point;
pub use rect::Rect;
