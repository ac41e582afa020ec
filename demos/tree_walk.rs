//! Walk a populated tree and print every node's boundary and point count,
//! the text-mode equivalent of drawing the partition on a canvas.
//!
//! Run with: `cargo run --example tree_walk`

use quadpoint::{Point, QuadTree, QuadTreeBuilder, Rect, Result};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    env_logger::init();

    let area = Rect::new(640.0, 480.0, Point::new(320.0, 240.0));
    let mut tree = QuadTreeBuilder::new(area).max_depth(4).max_points(3).build()?;

    let mut rng = StdRng::seed_from_u64(1);
    for i in 0..40 {
        // Bias toward the top-left so the partition depth is uneven.
        let x = rng.random_range(0.0..=640.0) * rng.random_range(0.3..=1.0);
        let y = rng.random_range(0.0..=480.0) * rng.random_range(0.3..=1.0);
        tree.insert(Point::with_id(x, y, i));
    }

    print_node(&tree);

    let stats = tree.stats();
    println!(
        "\n{} nodes, {} leaves, {} points, deepest level {}",
        stats.node_count, stats.leaf_count, stats.total_points, stats.max_occupied_depth
    );

    Ok(())
}

fn print_node(node: &QuadTree) {
    let indent = "  ".repeat(node.depth() as usize);
    let rect = node.area();
    println!(
        "{indent}[{:.0},{:.0} {}x{}] depth={} points={} split={}",
        rect.top_left_x(),
        rect.top_left_y(),
        rect.width,
        rect.height,
        node.depth(),
        node.points().len(),
        node.has_quadrants(),
    );
    for child in node.children() {
        print_node(child);
    }
}
