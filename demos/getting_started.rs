//! Minimal end-to-end tour: build a tree, insert points, run range queries.
//!
//! Run with: `cargo run --example getting_started`

use quadpoint::{Point, QuadTreeBuilder, Rect, Result};

fn main() -> Result<()> {
    env_logger::init();

    // A 640x480 canvas-like area, same conventions as screen coordinates.
    let area = Rect::new(640.0, 480.0, Point::new(320.0, 240.0));
    let mut tree = QuadTreeBuilder::new(area)
        .max_depth(6)
        .max_points(4)
        .build()?;

    // A tight cluster near the center plus a few strays.
    for (i, (x, y)) in [
        (270.0, 230.0),
        (280.0, 245.0),
        (300.0, 260.0),
        (330.0, 250.0),
        (350.0, 235.0),
        (100.0, 100.0),
        (600.0, 50.0),
        (50.0, 430.0),
    ]
    .into_iter()
    .enumerate()
    {
        tree.insert(Point::with_id(x, y, i as u64));
    }

    // A point outside the area is rejected, not an error.
    let rejected = tree.insert(Point::new(1000.0, 1000.0));
    println!("outside point accepted: {rejected}");

    let window = Rect::new(120.0, 120.0, Point::new(320.0, 240.0));
    let found = tree.query(&window);
    println!("points inside 120x120 center window: {}", found.len());
    for point in &found {
        println!("  ({}, {}) id={:?}", point.x, point.y, point.id);
    }

    let stats = tree.stats();
    println!(
        "tree: {} points in {} nodes ({} leaves), deepest level {}",
        stats.total_points, stats.node_count, stats.leaf_count, stats.max_occupied_depth
    );

    Ok(())
}
