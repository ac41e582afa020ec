//! Region quadtree over a fixed rectangular area.
//!
//! Each node owns a rectangle and either holds points directly (a leaf) or
//! has split into up to four child quadrants. Children are materialized
//! lazily: a quadrant that never receives a point is never allocated, so
//! memory stays proportional to the occupied regions rather than to
//! `4^depth`.

use smallvec::SmallVec;

use quadpoint_geom::{Point, Rect};

use crate::config::TreeConfig;
use crate::stats::TreeStats;

/// One of the four quarter-regions a node's area splits into.
///
/// The declaration order is also the scan order used during
/// redistribution and query traversal. A point lying exactly on a shared
/// boundary is claimed by the first quadrant in this order that contains
/// it, so boundary points land in exactly one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in fixed scan order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// The quarter of `parent` this quadrant covers: half the width and
    /// height, centered a quarter-extent away from the parent's center.
    pub fn child_rect(&self, parent: &Rect) -> Rect {
        let (sx, sy) = match self {
            Quadrant::TopLeft => (-1.0, -1.0),
            Quadrant::TopRight => (1.0, -1.0),
            Quadrant::BottomLeft => (-1.0, 1.0),
            Quadrant::BottomRight => (1.0, 1.0),
        };
        Rect::new(
            parent.width / 2.0,
            parent.height / 2.0,
            Point::new(
                parent.center.x + sx * parent.width / 4.0,
                parent.center.y + sy * parent.height / 4.0,
            ),
        )
    }
}

/// A quadtree node and, transitively, the subtree below it.
///
/// The root is created by the caller with [`QuadTree::new`] (or through
/// [`crate::QuadTreeBuilder`] for validated construction); interior nodes
/// are created on demand as points are redistributed downward.
///
/// # Examples
///
/// ```
/// use quadpoint::{Point, QuadTree, Rect};
///
/// let area = Rect::new(640.0, 480.0, Point::new(320.0, 240.0));
/// let mut tree = QuadTree::new(area, 3, 3);
///
/// assert!(tree.insert(Point::new(100.0, 50.0)));
/// assert!(!tree.insert(Point::new(1000.0, 1000.0)));
/// ```
#[derive(Debug)]
pub struct QuadTree {
    area: Rect,
    depth: u32,
    config: TreeConfig,
    points: SmallVec<[Point; 8]>,
    quadrants: [Option<Box<QuadTree>>; 4],
    has_quadrants: bool,
}

impl QuadTree {
    /// Create a root node covering `area`.
    ///
    /// `max_depth` bounds how deep the tree may split; `max_points` is the
    /// per-node capacity before a split. No validation is performed here;
    /// use [`crate::QuadTreeBuilder`] to fail fast on degenerate inputs.
    pub fn new(area: Rect, max_depth: u32, max_points: usize) -> Self {
        Self::with_config(area, TreeConfig::new(max_depth, max_points))
    }

    /// Create a root node covering `area` with the given limits.
    pub fn with_config(area: Rect, config: TreeConfig) -> Self {
        Self::node(area, config, 0)
    }

    fn node(area: Rect, config: TreeConfig, depth: u32) -> Self {
        Self {
            area,
            depth,
            config,
            points: SmallVec::new(),
            quadrants: Default::default(),
            has_quadrants: false,
        }
    }

    /// The rectangular region this node is responsible for.
    #[inline]
    pub fn area(&self) -> &Rect {
        &self.area
    }

    /// Distance from the root; the root is at depth 0.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Depth limit shared by every node of this tree.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// Per-node point capacity shared by every node of this tree.
    #[inline]
    pub fn max_points(&self) -> usize {
        self.config.max_points
    }

    /// The limits this tree was built with.
    #[inline]
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Points held directly by this node.
    ///
    /// Non-empty only on leaves; a node that has split pushes every point
    /// down to its descendants.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether this node has split into child quadrants.
    #[inline]
    pub fn has_quadrants(&self) -> bool {
        self.has_quadrants
    }

    /// The child occupying `quadrant`, if it has been materialized.
    #[inline]
    pub fn quadrant(&self, quadrant: Quadrant) -> Option<&QuadTree> {
        self.quadrants[quadrant as usize].as_deref()
    }

    /// Iterate over the materialized children in fixed quadrant order.
    pub fn children(&self) -> impl Iterator<Item = &QuadTree> {
        self.quadrants.iter().filter_map(|child| child.as_deref())
    }

    /// Total number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.points.len() + self.children().map(QuadTree::len).sum::<usize>()
    }

    /// Whether this subtree stores no points at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a point into this subtree.
    ///
    /// Returns `false` and stores nothing if the point lies outside this
    /// node's area or has a non-finite coordinate. Returns `true` once the
    /// point has been placed, possibly several levels below this node.
    pub fn insert(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            log::warn!(
                "rejecting point with non-finite coordinates ({}, {})",
                point.x,
                point.y
            );
            return false;
        }

        if !self.area.contains_point(&point, 0.0) {
            return false;
        }

        self.points.push(point);

        // Split once over capacity, unless the depth cap makes this an
        // unbounded leaf. A node that already split funnels each new point
        // through the same redistribution path to keep points out of
        // interior nodes.
        if self.has_quadrants
            || (self.points.len() > self.config.max_points && self.depth < self.config.max_depth)
        {
            self.redistribute_points();
        }

        true
    }

    /// Drain the direct points into child quadrants, materializing children
    /// on first use.
    ///
    /// Each point goes to the first quadrant in scan order that contains
    /// it, then recurses through [`QuadTree::insert`] on the child so deeper
    /// splits happen naturally.
    fn redistribute_points(&mut self) {
        log::trace!(
            "redistributing {} point(s) at depth {}",
            self.points.len(),
            self.depth
        );

        let child_depth = self.depth + 1;
        let config = self.config;

        for point in std::mem::take(&mut self.points) {
            for quadrant in Quadrant::ALL {
                let rect = quadrant.child_rect(&self.area);
                if !rect.contains_point(&point, 0.0) {
                    continue;
                }
                let child = self.quadrants[quadrant as usize]
                    .get_or_insert_with(|| Box::new(Self::node(rect, config, child_depth)));
                // Guaranteed to land: the child covers `rect`.
                let _ = child.insert(point);
                break;
            }
        }

        if self.quadrants.iter().any(Option::is_some) {
            self.has_quadrants = true;
        }
    }

    /// Collect every point in this subtree that lies inside `window`
    /// (boundaries inclusive).
    ///
    /// Subtrees whose area is disjoint from the window are pruned without
    /// being visited. Results follow insertion order within a leaf and
    /// fixed quadrant order across children; no further sorting is applied.
    pub fn query(&self, window: &Rect) -> Vec<Point> {
        let mut found = Vec::new();
        self.query_into(window, &mut found);
        found
    }

    /// Like [`QuadTree::query`], appending matches to a caller-provided
    /// buffer so repeated queries can reuse the allocation.
    pub fn query_into(&self, window: &Rect, found: &mut Vec<Point>) {
        if !self.area.intersects(window) {
            return;
        }

        if self.points.is_empty() {
            for child in self.children() {
                child.query_into(window, found);
            }
            return;
        }

        found.extend(
            self.points
                .iter()
                .filter(|point| window.contains_point(point, 0.0)),
        );
    }

    /// Walk this subtree in pre-order, visiting every node.
    ///
    /// Intended for traversal consumers such as debug renderers that draw
    /// each node's boundary and points.
    pub fn visit<F>(&self, f: &mut F)
    where
        F: FnMut(&QuadTree),
    {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// Aggregate counters over this subtree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.visit(&mut |node| {
            stats.node_count += 1;
            stats.total_points += node.points.len();
            if !node.has_quadrants {
                stats.leaf_count += 1;
            }
            if node.depth > stats.max_occupied_depth {
                stats.max_occupied_depth = node.depth;
            }
        });
        stats
    }

    /// Drop the points held directly by this node, leaving children alone.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    fn clear_quadrants(&mut self) {
        self.quadrants = Default::default();
        self.has_quadrants = false;
    }

    /// Reset this node to an empty leaf, dropping its points and its whole
    /// subtree. The area, depth and limits are unchanged, so the node
    /// behaves as freshly constructed afterwards.
    pub fn clear(&mut self) {
        self.clear_points();
        self.clear_quadrants();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_area() -> Rect {
        Rect::new(640.0, 480.0, Point::new(320.0, 240.0))
    }

    #[test]
    fn test_insert_outside_area_is_rejected() {
        let mut tree = QuadTree::new(screen_area(), 3, 3);

        assert!(!tree.insert(Point::new(1000.0, 1000.0)));
        assert!(tree.is_empty());
        assert!(tree.query(&screen_area()).is_empty());
    }

    #[test]
    fn test_insert_non_finite_is_rejected() {
        let mut tree = QuadTree::new(screen_area(), 3, 3);

        assert!(!tree.insert(Point::new(f64::NAN, 10.0)));
        assert!(!tree.insert(Point::new(10.0, f64::INFINITY)));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_leaf_holds_up_to_capacity() {
        let mut tree = QuadTree::new(screen_area(), 3, 3);

        tree.insert(Point::new(10.0, 50.0));
        tree.insert(Point::new(10.0, 70.0));
        tree.insert(Point::new(10.0, 80.0));

        assert!(!tree.has_quadrants());
        assert_eq!(tree.points().len(), 3);
        assert_eq!(tree.children().count(), 0);
    }

    #[test]
    fn test_four_way_split_over_capacity() {
        let mut tree = QuadTree::new(screen_area(), 3, 3);

        // Three points per quadrant of the root.
        tree.insert(Point::new(10.0, 50.0));
        tree.insert(Point::new(10.0, 70.0));
        tree.insert(Point::new(10.0, 80.0));

        tree.insert(Point::new(400.0, 50.0));
        tree.insert(Point::new(400.0, 70.0));
        tree.insert(Point::new(400.0, 80.0));

        tree.insert(Point::new(100.0, 450.0));
        tree.insert(Point::new(100.0, 470.0));
        tree.insert(Point::new(100.0, 480.0));

        tree.insert(Point::new(400.0, 450.0));
        tree.insert(Point::new(400.0, 470.0));
        tree.insert(Point::new(400.0, 480.0));

        assert!(tree.has_quadrants());
        assert!(tree.points().is_empty());

        for quadrant in Quadrant::ALL {
            let child = tree.quadrant(quadrant).unwrap();
            assert_eq!(child.points().len(), 3, "{quadrant:?}");
            assert!(!child.has_quadrants());
        }
    }

    #[test]
    fn test_nested_split_keeps_points_in_lowest_quadrants() {
        let mut tree = QuadTree::new(screen_area(), 3, 3);

        tree.insert(Point::new(100.0, 50.0));
        tree.insert(Point::new(100.0, 70.0));
        tree.insert(Point::new(100.0, 80.0));
        tree.insert(Point::new(200.0, 80.0));

        assert!(tree.has_quadrants());
        assert!(tree.points().is_empty());
        assert!(tree.quadrant(Quadrant::TopLeft).is_some());
        assert!(tree.quadrant(Quadrant::TopRight).is_none());
        assert!(tree.quadrant(Quadrant::BottomLeft).is_none());
        assert!(tree.quadrant(Quadrant::BottomRight).is_none());

        let top_left = tree.quadrant(Quadrant::TopLeft).unwrap();
        assert!(top_left.has_quadrants());
        assert!(top_left.points().is_empty());

        let inner_tl = top_left.quadrant(Quadrant::TopLeft).unwrap();
        let inner_tr = top_left.quadrant(Quadrant::TopRight).unwrap();
        assert_eq!(inner_tl.points().len(), 3);
        assert_eq!(inner_tr.points().len(), 1);
        assert!(top_left.quadrant(Quadrant::BottomLeft).is_none());
        assert!(top_left.quadrant(Quadrant::BottomRight).is_none());
    }

    #[test]
    fn test_depth_cap_produces_unbounded_leaf() {
        let mut tree = QuadTree::new(screen_area(), 3, 1);

        for y in [10.0, 20.0, 30.0, 40.0, 50.0] {
            assert!(tree.insert(Point::new(10.0, y)));
        }

        // Single-child chain of top-left splits down to the depth cap.
        let mut node = &tree;
        for expected_depth in 0..3 {
            assert_eq!(node.depth(), expected_depth);
            assert!(node.has_quadrants());
            assert!(node.points().is_empty());
            assert!(node.quadrant(Quadrant::TopLeft).is_some());
            assert!(node.quadrant(Quadrant::TopRight).is_none());
            assert!(node.quadrant(Quadrant::BottomLeft).is_none());
            assert!(node.quadrant(Quadrant::BottomRight).is_none());
            node = node.quadrant(Quadrant::TopLeft).unwrap();
        }

        assert_eq!(node.depth(), 3);
        assert!(!node.has_quadrants());
        assert_eq!(node.points().len(), 5);
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn test_child_rects_quarter_the_parent() {
        let parent = screen_area();

        let tl = Quadrant::TopLeft.child_rect(&parent);
        assert_eq!(tl.width, 320.0);
        assert_eq!(tl.height, 240.0);
        assert_eq!(tl.center, Point::new(160.0, 120.0));

        let br = Quadrant::BottomRight.child_rect(&parent);
        assert_eq!(br.center, Point::new(480.0, 360.0));

        // The four quarters tile the parent exactly.
        let total: f64 = Quadrant::ALL
            .iter()
            .map(|q| q.child_rect(&parent).area())
            .sum();
        assert_eq!(total, parent.area());
    }

    #[test]
    fn test_query_single_point_no_split() {
        let mut tree = QuadTree::new(screen_area(), 5, 10);
        tree.insert(Point::new(270.0, 230.0));

        let found = tree.query(&Rect::new(120.0, 120.0, Point::new(320.0, 240.0)));

        assert!(!tree.has_quadrants());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_query_finds_only_points_in_window() {
        let mut tree = QuadTree::new(screen_area(), 5, 3);

        // Cluster outside the query window.
        for y in [100.0, 110.0, 120.0, 130.0, 140.0] {
            tree.insert(Point::new(100.0, y));
        }
        // Cluster inside it.
        for y in [230.0, 240.0, 250.0, 260.0, 270.0] {
            tree.insert(Point::new(270.0, y));
        }

        let found = tree.query(&Rect::new(120.0, 120.0, Point::new(320.0, 240.0)));

        assert!(tree.has_quadrants());
        assert!(tree.quadrant(Quadrant::TopLeft).is_some());
        assert!(tree.quadrant(Quadrant::TopRight).is_none());
        assert!(tree.quadrant(Quadrant::BottomLeft).is_some());
        assert!(tree.quadrant(Quadrant::BottomRight).is_none());
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|p| p.x == 270.0));
    }

    #[test]
    fn test_query_disjoint_window_is_empty() {
        let mut tree = QuadTree::new(screen_area(), 3, 3);
        tree.insert(Point::new(100.0, 100.0));

        let far = Rect::new(50.0, 50.0, Point::new(2000.0, 2000.0));
        assert!(tree.query(&far).is_empty());
    }

    #[test]
    fn test_query_into_reuses_buffer() {
        let mut tree = QuadTree::new(screen_area(), 3, 3);
        tree.insert(Point::new(100.0, 100.0));
        tree.insert(Point::new(500.0, 400.0));

        let mut found = Vec::new();
        tree.query_into(&Rect::new(640.0, 480.0, Point::new(320.0, 240.0)), &mut found);
        assert_eq!(found.len(), 2);

        found.clear();
        tree.query_into(&Rect::new(40.0, 40.0, Point::new(100.0, 100.0)), &mut found);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_clear_points_keeps_children() {
        let mut tree = QuadTree::new(screen_area(), 3, 1);
        tree.insert(Point::new(10.0, 10.0));
        tree.insert(Point::new(500.0, 400.0));
        assert!(tree.has_quadrants());

        tree.clear_points();
        assert!(tree.has_quadrants());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_clear_resets_to_fresh_leaf() {
        let mut tree = QuadTree::new(screen_area(), 3, 1);
        for y in [10.0, 20.0, 30.0, 40.0, 50.0] {
            tree.insert(Point::new(10.0, y));
        }
        assert!(tree.has_quadrants());

        tree.clear();
        assert!(!tree.has_quadrants());
        assert!(tree.points().is_empty());
        assert_eq!(tree.children().count(), 0);
        assert!(tree.is_empty());

        // Behaves like a freshly constructed tree.
        assert!(tree.insert(Point::new(10.0, 10.0)));
        assert_eq!(tree.points().len(), 1);
        assert!(!tree.has_quadrants());
    }

    #[test]
    fn test_len_counts_whole_subtree() {
        let mut tree = QuadTree::new(screen_area(), 4, 2);
        assert!(tree.is_empty());

        let points = [
            Point::new(10.0, 10.0),
            Point::new(600.0, 10.0),
            Point::new(10.0, 400.0),
            Point::new(600.0, 400.0),
            Point::new(320.0, 240.0),
        ];
        for p in points {
            tree.insert(p);
        }
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_stats() {
        let mut tree = QuadTree::new(screen_area(), 3, 1);
        for y in [10.0, 20.0, 30.0, 40.0, 50.0] {
            tree.insert(Point::new(10.0, y));
        }

        let stats = tree.stats();
        assert_eq!(stats.total_points, 5);
        assert_eq!(stats.max_occupied_depth, 3);
        // Chain of four nodes: root plus one top-left child per level.
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.leaf_count, 1);
    }
}
