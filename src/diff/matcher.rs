//! Greedy maximum-overlap matching.
//!
//! Every source cluster is matched independently: the candidate with the
//! largest intersection area wins, with no global assignment across sources.
//! Two sources may therefore pick the same target.

use crate::cluster::{Cluster, ClusterSet};
use crate::geometry;
use crate::spatial::SpatialIndex;
use geo::MultiPolygon;

/// The best-overlapping target for one source cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub target: &'a Cluster,
    pub area: f64,
    /// Intersection of source and target, reused downstream instead of being
    /// recomputed.
    pub intersection: MultiPolygon<f64>,
}

/// Finds best matches for source clusters within one target snapshot.
#[derive(Debug)]
pub struct Matcher<'a, I> {
    targets: &'a ClusterSet,
    index: &'a I,
    min_area: f64,
}

impl<'a, I: SpatialIndex> Matcher<'a, I> {
    /// `index` must have been built over `targets`. An overlap only counts
    /// when its area is strictly greater than `min_area`.
    pub fn new(targets: &'a ClusterSet, index: &'a I, min_area: f64) -> Self {
        Self {
            targets,
            index,
            min_area,
        }
    }

    /// Returns the target with the largest overlap, or `None` if no
    /// candidate overlaps by more than `min_area`.
    ///
    /// Ties keep the candidate that comes first in the target snapshot.
    pub fn best_match(&self, source: &Cluster) -> Option<Match<'a>> {
        let mut best: Option<Match<'a>> = None;
        let mut max_area = self.min_area;

        for target in self.candidates(source) {
            let intersection = geometry::intersection(source.geometry(), target.geometry());
            let area = geometry::area(&intersection);
            if area > max_area {
                max_area = area;
                best = Some(Match {
                    target,
                    area,
                    intersection,
                });
            }
        }
        best
    }

    /// Returns the largest overlap area with any target, or 0.0 when there
    /// are no candidates.
    pub fn max_overlap(&self, source: &Cluster) -> f64 {
        self.candidates(source)
            .map(|target| {
                geometry::area(&geometry::intersection(
                    source.geometry(),
                    target.geometry(),
                ))
            })
            .fold(0.0, f64::max)
    }

    /// Returns `true` if some target overlaps `source` by more than `min_area`.
    pub fn has_overlap(&self, source: &Cluster) -> bool {
        self.max_overlap(source) > self.min_area
    }

    fn candidates(&self, source: &Cluster) -> impl Iterator<Item = &'a Cluster> + 'a {
        let hits = geometry::bounds(source.geometry())
            .map(|query| self.index.query(query))
            .unwrap_or_default();
        let clusters = self.targets.clusters();
        hits.into_iter().map(move |pos| &clusters[pos])
    }
}
