//! Error taxonomy for quadtree operations.
//!
//! All errors are reported synchronously through `Result`; none are
//! retried internally and the tree remains usable after any of them.

use thiserror::Error;

/// Errors returned by [`QuadTree`](crate::QuadTree) operations.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum QuadTreeError {
    /// The insertion point lies outside the tree's domain rectangle.
    #[error("point ({x}, {y}) is out of bounds of the tree domain")]
    OutOfBounds {
        /// x coordinate of the rejected point.
        x: f64,
        /// y coordinate of the rejected point.
        y: f64,
    },

    /// A nearest-point query was made against a tree with no entries.
    #[error("cannot query an empty tree")]
    EmptyTree,

    /// The domain corners contain non-finite coordinates and cannot be
    /// normalized into a rectangle.
    #[error("domain corners do not form a valid rectangle")]
    InvalidDomain,
}
