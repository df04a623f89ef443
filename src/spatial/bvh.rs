//! Bounding Volume Hierarchy over axis-aligned boxes.
//!
//! Each node stores an [`Aabb2`] enclosing every primitive in its subtree, so a
//! box query only descends into subtrees whose bounds overlap the query.

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// A trait for objects that can be bounded and stored in a BVH.
pub trait Bounded<F: Float> {
    /// Returns the axis-aligned bounding box of this object.
    fn bounds(&self) -> Aabb2<F>;

    /// Returns the centroid of this object (used for partitioning).
    fn centroid(&self) -> Point2<F> {
        self.bounds().center()
    }
}

impl<F: Float> Bounded<F> for Aabb2<F> {
    fn bounds(&self) -> Aabb2<F> {
        *self
    }
}

/// A node in the BVH tree.
#[derive(Debug, Clone)]
pub enum BvhNode<F> {
    /// A leaf node covering a contiguous run of the reordered index array.
    Leaf {
        bounds: Aabb2<F>,
        first: usize,
        count: usize,
    },
    /// An internal node with two children.
    Internal {
        bounds: Aabb2<F>,
        left: usize,
        right: usize,
    },
}

impl<F: Float> BvhNode<F> {
    /// Returns the bounding box of this node.
    pub fn bounds(&self) -> Aabb2<F> {
        match self {
            BvhNode::Leaf { bounds, .. } | BvhNode::Internal { bounds, .. } => *bounds,
        }
    }
}

/// A Bounding Volume Hierarchy for box-overlap queries.
///
/// The BVH stores references to primitives by index, so the original data
/// stays in place and query results are positions into the slice passed to
/// [`Bvh::build`].
///
/// # Example
///
/// ```
/// use clusterdiff::bounds::Aabb2;
/// use clusterdiff::primitives::Point2;
/// use clusterdiff::spatial::Bvh;
///
/// let boxes: Vec<Aabb2<f64>> = vec![
///     Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)),
///     Aabb2::new(Point2::new(5.0, 5.0), Point2::new(6.0, 6.0)),
/// ];
///
/// let bvh = Bvh::build(&boxes, 1);
/// let query = Aabb2::new(Point2::new(-1.0, -1.0), Point2::new(2.0, 2.0));
/// assert_eq!(bvh.query_aabb(&boxes, query), vec![0]);
/// ```
#[derive(Debug, Clone)]
pub struct Bvh<F> {
    nodes: Vec<BvhNode<F>>,
    /// Primitive positions, reordered so every leaf covers a contiguous run.
    indices: Vec<usize>,
    root: usize,
}

impl<F: Float> Bvh<F> {
    /// Builds a BVH from a slice of bounded primitives.
    ///
    /// `max_leaf_size` is clamped to at least 1. An empty slice yields an
    /// empty BVH that answers every query with no candidates.
    pub fn build<T: Bounded<F>>(primitives: &[T], max_leaf_size: usize) -> Self {
        let n = primitives.len();
        if n == 0 {
            return Self {
                nodes: Vec::new(),
                indices: Vec::new(),
                root: 0,
            };
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut nodes = Vec::with_capacity(2 * n);
        let root = build_recursive(
            primitives,
            &mut indices,
            0,
            n,
            max_leaf_size.max(1),
            &mut nodes,
        );

        Self {
            nodes,
            indices,
            root,
        }
    }

    /// Returns true if the BVH is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of primitives in the BVH.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns the bounding box of the entire BVH.
    pub fn bounds(&self) -> Option<Aabb2<F>> {
        self.nodes.get(self.root).map(BvhNode::bounds)
    }

    /// Queries for all primitives whose bounds intersect the given AABB.
    ///
    /// Returns positions into `primitives` in traversal order, which is not
    /// the slice order.
    pub fn query_aabb<T: Bounded<F>>(&self, primitives: &[T], query: Aabb2<F>) -> Vec<usize> {
        let mut results = Vec::new();
        if self.nodes.is_empty() {
            return results;
        }

        let mut stack = vec![self.root];
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx];
            if !node.bounds().intersects(query) {
                continue;
            }

            match *node {
                BvhNode::Leaf { first, count, .. } => {
                    results.extend(
                        self.indices[first..first + count]
                            .iter()
                            .copied()
                            .filter(|&i| primitives[i].bounds().intersects(query)),
                    );
                }
                BvhNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        results
    }
}

fn build_recursive<F: Float, T: Bounded<F>>(
    primitives: &[T],
    indices: &mut [usize],
    start: usize,
    end: usize,
    max_leaf_size: usize,
    nodes: &mut Vec<BvhNode<F>>,
) -> usize {
    let count = end - start;
    let bounds = compute_bounds(primitives, &indices[start..end]);

    if count <= max_leaf_size {
        nodes.push(BvhNode::Leaf {
            bounds,
            first: start,
            count,
        });
        return nodes.len() - 1;
    }

    let axis = if bounds.width() > bounds.height() {
        Axis::X
    } else {
        Axis::Y
    };

    // Median split: both halves are non-empty even when centroids coincide.
    let mid = count / 2;
    indices[start..end].select_nth_unstable_by(mid, |&a, &b| {
        let ca = axis.of(primitives[a].centroid());
        let cb = axis.of(primitives[b].centroid());
        ca.partial_cmp(&cb).unwrap_or(Ordering::Equal)
    });
    let mid = start + mid;

    let node_idx = nodes.len();
    nodes.push(BvhNode::Internal {
        bounds,
        left: 0,
        right: 0,
    });

    let left = build_recursive(primitives, indices, start, mid, max_leaf_size, nodes);
    let right = build_recursive(primitives, indices, mid, end, max_leaf_size, nodes);
    nodes[node_idx] = BvhNode::Internal {
        bounds,
        left,
        right,
    };

    node_idx
}

fn compute_bounds<F: Float, T: Bounded<F>>(primitives: &[T], indices: &[usize]) -> Aabb2<F> {
    let first = primitives[indices[0]].bounds();
    indices[1..]
        .iter()
        .fold(first, |acc, &idx| acc.union(primitives[idx].bounds()))
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn of<F: Float>(self, p: Point2<F>) -> F {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(x: f64, y: f64) -> Aabb2<f64> {
        Aabb2::new(Point2::new(x, y), Point2::new(x + 1.0, y + 1.0))
    }

    #[test]
    fn test_bvh_empty() {
        let boxes: Vec<Aabb2<f64>> = vec![];
        let bvh = Bvh::build(&boxes, 1);
        assert!(bvh.is_empty());
        assert_eq!(bvh.len(), 0);
        assert!(bvh.bounds().is_none());
        assert!(bvh.query_aabb(&boxes, unit_box(0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_bvh_build() {
        let boxes = vec![
            unit_box(0.0, 0.0),
            unit_box(1.0, 1.0),
            unit_box(5.0, 5.0),
            unit_box(6.0, 6.0),
        ];

        let bvh = Bvh::build(&boxes, 1);
        assert_eq!(bvh.len(), 4);

        let bounds = bvh.bounds().unwrap();
        assert_eq!(bounds.min, Point2::new(0.0, 0.0));
        assert_eq!(bounds.max, Point2::new(7.0, 7.0));
    }

    #[test]
    fn test_bvh_query_aabb() {
        let boxes = vec![
            unit_box(0.0, 0.0),
            unit_box(1.5, 1.5),
            unit_box(5.0, 5.0),
            unit_box(6.0, 6.0),
        ];

        let bvh = Bvh::build(&boxes, 1);
        let query = Aabb2::new(Point2::new(-1.0, -1.0), Point2::new(2.0, 2.0));
        let mut results = bvh.query_aabb(&boxes, query);
        results.sort_unstable();

        assert_eq!(results, vec![0, 1]);
    }

    #[test]
    fn test_bvh_query_touching_is_candidate() {
        let boxes = vec![unit_box(0.0, 0.0), unit_box(3.0, 0.0)];
        let bvh = Bvh::build(&boxes, 1);

        let results = bvh.query_aabb(&boxes, unit_box(1.0, 0.0));
        assert_eq!(results, vec![0]);
    }

    #[test]
    fn test_bvh_identical_centroids() {
        let boxes = vec![unit_box(2.0, 2.0); 9];
        let bvh = Bvh::build(&boxes, 2);
        assert_eq!(bvh.len(), 9);

        let results = bvh.query_aabb(&boxes, unit_box(2.5, 2.5));
        assert_eq!(results.len(), 9);
    }

    #[test]
    fn test_bvh_zero_leaf_size_is_clamped() {
        let boxes = vec![unit_box(0.0, 0.0), unit_box(4.0, 4.0)];
        let bvh = Bvh::build(&boxes, 0);
        assert_eq!(bvh.query_aabb(&boxes, unit_box(4.0, 4.0)), vec![1]);
    }

    #[test]
    fn test_bvh_larger_dataset() {
        let mut boxes = Vec::new();
        for x in 0..10 {
            for y in 0..10 {
                boxes.push(Aabb2::new(
                    Point2::new(x as f64, y as f64),
                    Point2::new(x as f64 + 0.5, y as f64 + 0.5),
                ));
            }
        }

        let bvh = Bvh::build(&boxes, 4);
        assert_eq!(bvh.len(), 100);

        // Query covers cells 2..=5 on both axes.
        let query = Aabb2::new(Point2::new(2.0, 2.0), Point2::new(5.0, 5.0));
        let results = bvh.query_aabb(&boxes, query);
        assert_eq!(results.len(), 16);
    }

    #[test]
    fn test_bvh_f32() {
        let boxes: Vec<Aabb2<f32>> = vec![
            Aabb2::new(Point2::new(0.0, 0.0), Point2::new(0.5, 0.5)),
            Aabb2::new(Point2::new(1.0, 1.0), Point2::new(1.2, 1.2)),
            Aabb2::new(Point2::new(2.0, 2.0), Point2::new(2.5, 2.5)),
        ];

        let bvh = Bvh::build(&boxes, 1);
        let query = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.5, 1.5));
        assert_eq!(bvh.query_aabb(&boxes, query).len(), 2);
    }
}
