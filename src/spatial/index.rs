//! Box-query capability over a cluster snapshot.

use super::Bvh;
use crate::bounds::Aabb2;
use crate::cluster::ClusterSet;
use crate::geometry;

/// Answers "which clusters have a bounding box overlapping this box".
///
/// Results are a superset of the clusters whose polygons actually overlap the
/// query region; callers refine them with exact geometry. Positions are
/// returned in ascending order so that scans over the candidates follow the
/// snapshot order.
pub trait SpatialIndex {
    /// Builds an index over `set`. The index must be rebuilt if the set changes.
    fn build(set: &ClusterSet, max_leaf_size: usize) -> Self
    where
        Self: Sized;

    /// Returns the sorted positions of clusters whose bounds intersect `query`.
    fn query(&self, query: Aabb2<f64>) -> Vec<usize>;
}

/// A [`Bvh`]-backed [`SpatialIndex`].
///
/// Clusters without vertices have no bounding box and are left out of the
/// tree, so they are never returned as candidates.
#[derive(Debug, Clone)]
pub struct ClusterIndex {
    bvh: Bvh<f64>,
    boxes: Vec<Aabb2<f64>>,
    /// `positions[i]` is the snapshot position of the cluster bounded by `boxes[i]`.
    positions: Vec<usize>,
}

impl ClusterIndex {
    /// Number of clusters stored in the tree.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl SpatialIndex for ClusterIndex {
    fn build(set: &ClusterSet, max_leaf_size: usize) -> Self {
        let (boxes, positions): (Vec<_>, Vec<_>) = set
            .iter()
            .enumerate()
            .filter_map(|(pos, cluster)| geometry::bounds(cluster.geometry()).map(|b| (b, pos)))
            .unzip();
        let bvh = Bvh::build(&boxes, max_leaf_size);

        Self {
            bvh,
            boxes,
            positions,
        }
    }

    fn query(&self, query: Aabb2<f64>) -> Vec<usize> {
        let mut hits: Vec<usize> = self
            .bvh
            .query_aabb(&self.boxes, query)
            .into_iter()
            .map(|i| self.positions[i])
            .collect();
        hits.sort_unstable();
        hits
    }
}
