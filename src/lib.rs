//! # quadpoint - Point Quadtree Spatial Index
//!
//! A Rust library providing a simple point quadtree for fast
//! nearest-neighbor lookup over dynamically growing 2D point sets.
//!
//! ## Features
//!
//! - **Incremental Insertion**: Points are indexed as they arrive, no build step
//! - **Nearest-Neighbor Queries**: Branch-and-bound search with quadrant pruning
//! - **Generic Payloads**: Each point carries an opaque caller-defined value
//! - **Fixed Domain**: The bounding rectangle is set once at construction
//!
//! ## Quick Start
//!
//! ```rust
//! use quadpoint::prelude::*;
//!
//! // Create a tree over a 100x100 domain (corners in any order)
//! let mut tree = QuadTree::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0))?;
//!
//! // Add some points with values
//! tree.add(Point::new(10.0, 10.0), "corner store")?;
//! tree.add(Point::new(90.0, 90.0), "far depot")?;
//! tree.add(Point::new(50.0, 50.0), "city center")?;
//!
//! // Query for the nearest point
//! let value = tree.get(Point::new(48.0, 52.0))?;
//! assert_eq!(value, &"city center");
//!
//! // Points outside the domain are rejected, not silently absorbed
//! assert!(tree.add(Point::new(150.0, 50.0), "nope").is_err());
//! # Ok::<(), quadpoint::QuadTreeError>(())
//! ```
//!
//! ## How It Works
//!
//! Each node covers an axis-aligned rectangle. A leaf holds up to a small
//! fixed number of (point, value) entries; when a leaf overflows it splits
//! into four children partitioning its rectangle at the midpoint, and the
//! entries are re-routed by containment. Internal nodes hold no entries.
//!
//! Nearest queries descend closest-quadrant-first, carrying the best
//! squared distance found so far and skipping any quadrant whose rectangle
//! cannot possibly contain a closer point. Because that bound is a true
//! lower bound, the search never prunes away the actual nearest point.

pub mod error;
pub mod geom;
pub mod prelude;
pub mod quadtree;

pub use error::QuadTreeError;
pub use geom::{Point, Rect};
pub use quadtree::QuadTree;
