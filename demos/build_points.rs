//! Build a tree from many random points and run a few queries.
use quadpoint::prelude::*;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), QuadTreeError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut tree = QuadTree::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0))?;

    for i in 0..10_000 {
        let point = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
        tree.add(point, i)?;
    }
    println!("indexed {} points", tree.len());

    for _ in 0..5 {
        let query = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
        let (point, id) = tree.nearest(query)?;
        println!(
            "query ({:.2}, {:.2}) -> point {} at ({:.2}, {:.2})",
            query.x, query.y, id, point.x, point.y
        );
    }
    Ok(())
}
