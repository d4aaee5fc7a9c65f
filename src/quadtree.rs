//! Point quadtree implementation: subdivision, insertion and the
//! branch-and-bound nearest-neighbor search.
//!
//! Nodes are tagged variants: a leaf holds up to `leaf_capacity` entries,
//! an internal node owns exactly four children partitioning its rectangle
//! at the midpoint. Once split, a node never reverts to a leaf.
//!
//! Quadrants are always scanned in NW, NE, SW, SE order, and points on a
//! dividing line are routed to the larger-coordinate quadrant (east/south).
//! Equidistant query results resolve to the first entry seen in that order.

use std::mem;

use crate::error::QuadTreeError;
use crate::geom::{Point, Rect};

/// Default number of entries a leaf holds before it splits.
pub const DEFAULT_LEAF_CAPACITY: usize = 4;

/// Maximum subdivision depth. Nodes at this depth accept entries past
/// nominal capacity instead of splitting, so duplicate or near-duplicate
/// points cannot recurse unboundedly.
pub const MAX_DEPTH: usize = 16;

const NW: usize = 0;
const NE: usize = 1;
const SW: usize = 2;
const SE: usize = 3;

/// Storage state of a node: entries or children, never both.
#[derive(Clone, Debug)]
enum NodeState<V> {
    Leaf(Vec<(Point, V)>),
    Internal(Box<[QuadNode<V>; 4]>),
}

/// One node of the tree, covering an axis-aligned rectangular region.
#[derive(Clone, Debug)]
struct QuadNode<V> {
    rect: Rect,
    state: NodeState<V>,
}

/// Running best for the nearest search: smallest squared distance seen so
/// far and the entry that produced it.
struct Best<'a, V> {
    dist_sq: f64,
    hit: Option<(Point, &'a V)>,
}

/// Index of the quadrant of `rect` containing `p`.
///
/// The dividing lines belong to the larger-coordinate quadrant, so every
/// point maps to exactly one of NW, NE, SW, SE.
#[inline]
fn quadrant_of(rect: &Rect, p: Point) -> usize {
    let mid = rect.center();
    let east = usize::from(p.x >= mid.x);
    let south = usize::from(p.y >= mid.y);
    (south << 1) | east
}

impl<V> QuadNode<V> {
    fn leaf(rect: Rect) -> Self {
        QuadNode {
            rect,
            state: NodeState::Leaf(Vec::new()),
        }
    }

    /// Inserts an entry whose point is known to lie within `self.rect`.
    ///
    /// `depth` is the node's depth from the root; leaves past [`MAX_DEPTH`]
    /// absorb the entry instead of splitting.
    fn insert(&mut self, point: Point, value: V, depth: usize, capacity: usize) {
        match &mut self.state {
            NodeState::Leaf(entries) if entries.len() < capacity || depth >= MAX_DEPTH => {
                entries.push((point, value));
            }
            NodeState::Leaf(_) => {
                self.split(depth, capacity);
                self.insert(point, value, depth, capacity);
            }
            NodeState::Internal(children) => {
                let quadrant = quadrant_of(&self.rect, point);
                children[quadrant].insert(point, value, depth + 1, capacity);
            }
        }
    }

    /// Splits a leaf into four child leaves partitioning the rectangle at
    /// its midpoint, then re-routes the stored entries into them.
    ///
    /// The old entries number at most `capacity`, so even if all of them
    /// land in one child the re-insertion cannot trigger a further split.
    fn split(&mut self, depth: usize, capacity: usize) {
        let Rect {
            min_x,
            min_y,
            max_x,
            max_y,
        } = self.rect;
        let mid = self.rect.center();

        let children = Box::new([
            QuadNode::leaf(Rect::new(Point::new(min_x, min_y), mid)), // NW
            QuadNode::leaf(Rect::new(Point::new(mid.x, min_y), Point::new(max_x, mid.y))), // NE
            QuadNode::leaf(Rect::new(Point::new(min_x, mid.y), Point::new(mid.x, max_y))), // SW
            QuadNode::leaf(Rect::new(mid, Point::new(max_x, max_y))), // SE
        ]);

        let old = mem::replace(&mut self.state, NodeState::Internal(children));
        if let NodeState::Leaf(entries) = old {
            for (point, value) in entries {
                self.insert(point, value, depth, capacity);
            }
        }
    }

    /// Branch-and-bound nearest search.
    ///
    /// Leaves scan their entries with a strict `<` update, so the first
    /// entry seen wins ties. Internal nodes visit children in ascending
    /// order of the minimum possible squared distance from the query to
    /// each child rectangle, and skip any child whose bound cannot beat
    /// the running best. The bound is a true lower bound on the distance
    /// to any point stored in the child, so the true nearest entry is
    /// never pruned.
    fn nearest<'a>(&'a self, query: Point, best: &mut Best<'a, V>) {
        match &self.state {
            NodeState::Leaf(entries) => {
                for (point, value) in entries {
                    let dist_sq = query.dist_sq(*point);
                    if dist_sq < best.dist_sq {
                        best.dist_sq = dist_sq;
                        best.hit = Some((*point, value));
                    }
                }
            }
            NodeState::Internal(children) => {
                let bounds = [
                    children[NW].rect.dist_sq_to_point(query),
                    children[NE].rect.dist_sq_to_point(query),
                    children[SW].rect.dist_sq_to_point(query),
                    children[SE].rect.dist_sq_to_point(query),
                ];
                let mut order = [NW, NE, SW, SE];
                // Stable sort keeps NW, NE, SW, SE order among equal bounds.
                order.sort_by(|&a, &b| bounds[a].total_cmp(&bounds[b]));

                for quadrant in order {
                    // Bounds are visited in ascending order and the best
                    // only shrinks, so the remaining children are pruned
                    // along with this one.
                    if bounds[quadrant] >= best.dist_sq {
                        break;
                    }
                    children[quadrant].nearest(query, best);
                }
            }
        }
    }
}

/// Point quadtree over a fixed rectangular domain.
///
/// Supports incremental insertion and 1-nearest-neighbor queries. The
/// domain is fixed at construction; inserting outside it is an error,
/// not a silent resize.
///
/// # Examples
/// ```
/// use quadpoint::prelude::*;
///
/// let mut tree = QuadTree::new(Point::new(0.0, 100.0), Point::new(100.0, 0.0))?;
/// tree.add(Point::new(50.0, 49.0), "find me")?;
/// tree.add(Point::new(59.0, 39.0), "bogus")?;
/// assert_eq!(tree.get(Point::new(50.0, 50.0))?, &"find me");
/// # Ok::<(), quadpoint::QuadTreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree<V> {
    root: QuadNode<V>,
    bounds: Rect,
    leaf_capacity: usize,
    len: usize,
}

impl<V> QuadTree<V> {
    /// Creates a tree covering the rectangle spanned by two opposite
    /// corners. The corners are normalized, so any opposite pair works.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::InvalidDomain`] if either corner has a
    /// non-finite coordinate.
    pub fn new(a: Point, b: Point) -> Result<Self, QuadTreeError> {
        Self::with_leaf_capacity(a, b, DEFAULT_LEAF_CAPACITY)
    }

    /// Creates a tree with a custom leaf capacity (clamped to at least 1).
    ///
    /// Larger capacities mean fewer, fatter leaves: cheaper inserts,
    /// more entries scanned per visited leaf.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::InvalidDomain`] if either corner has a
    /// non-finite coordinate.
    pub fn with_leaf_capacity(
        a: Point,
        b: Point,
        leaf_capacity: usize,
    ) -> Result<Self, QuadTreeError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(QuadTreeError::InvalidDomain);
        }
        let bounds = Rect::new(a, b);
        Ok(QuadTree {
            root: QuadNode::leaf(bounds),
            bounds,
            leaf_capacity: leaf_capacity.max(1),
            len: 0,
        })
    }

    /// Adds a point with an associated value.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::OutOfBounds`] if the point lies outside
    /// the domain rectangle. The tree is unchanged in that case.
    pub fn add(&mut self, point: Point, value: V) -> Result<(), QuadTreeError> {
        if !self.bounds.contains(point) {
            return Err(QuadTreeError::OutOfBounds {
                x: point.x,
                y: point.y,
            });
        }
        self.root.insert(point, value, 0, self.leaf_capacity);
        self.len += 1;
        Ok(())
    }

    /// Returns the stored point nearest to `query` together with its
    /// value, under Euclidean distance.
    ///
    /// Ties resolve to the entry encountered first in NW, NE, SW, SE
    /// scan order. The query point itself need not lie in the domain.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::EmptyTree`] if no points were added.
    pub fn nearest(&self, query: Point) -> Result<(Point, &V), QuadTreeError> {
        if self.len == 0 {
            return Err(QuadTreeError::EmptyTree);
        }
        let mut best = Best {
            dist_sq: f64::INFINITY,
            hit: None,
        };
        self.root.nearest(query, &mut best);
        best.hit.ok_or(QuadTreeError::EmptyTree)
    }

    /// Returns the value stored at the point nearest to `query`.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::EmptyTree`] if no points were added.
    pub fn get(&self, query: Point) -> Result<&V, QuadTreeError> {
        self.nearest(query).map(|(_, value)| value)
    }

    /// Returns the number of stored entries
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The domain rectangle, unchanged since construction
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The leaf capacity this tree splits at
    #[inline]
    pub fn leaf_capacity(&self) -> usize {
        self.leaf_capacity
    }
}
