//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadpoint::prelude::*;
//! ```

pub use crate::error::QuadTreeError;
pub use crate::geom::{Point, Rect};
pub use crate::quadtree::QuadTree;
