//! Find the value stored nearest to a query point.
use quadpoint::prelude::*;

fn main() -> Result<(), QuadTreeError> {
    let mut tree = QuadTree::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0))?;
    tree.add(Point::new(10.0, 10.0), "corner store")?;
    tree.add(Point::new(90.0, 90.0), "far depot")?;
    tree.add(Point::new(50.0, 50.0), "city center")?;

    let (point, value) = tree.nearest(Point::new(48.0, 55.0))?;
    println!("Nearest: {} at ({}, {})", value, point.x, point.y);
    Ok(())
}
