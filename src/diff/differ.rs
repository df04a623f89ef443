//! The two classification passes and their geometry streams.

use super::matcher::{Match, Matcher};
use super::record::MatchSummary;
use crate::cluster::{Cluster, ClusterSet};
use crate::geometry;
use crate::spatial::SpatialIndex;
use geo::MultiPolygon;

/// A labeled geometry waiting for the assembler.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Fragment {
    pub geometry: MultiPolygon<f64>,
    pub label: String,
}

impl Fragment {
    fn whole(cluster: &Cluster, label: String) -> Self {
        Self {
            geometry: MultiPolygon::new(vec![cluster.geometry().clone()]),
            label,
        }
    }
}

/// How one A-cluster was classified by the matching pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    Matched {
        source: &'a Cluster,
        best: Match<'a>,
    },
    Unmatched {
        source: &'a Cluster,
    },
}

impl Classification<'_> {
    pub fn source(&self) -> &Cluster {
        match self {
            Classification::Matched { source, .. } | Classification::Unmatched { source } => {
                *source
            }
        }
    }

    pub fn summary(&self) -> MatchSummary {
        let source = self.source();
        match self {
            Classification::Matched { best, .. } => MatchSummary {
                a_id: source.id(),
                a_size: source.size(),
                b_id: Some(best.target.id()),
                b_size: Some(best.target.size()),
                overlap_ratio: best.area / source.area(),
            },
            Classification::Unmatched { .. } => MatchSummary {
                a_id: source.id(),
                a_size: source.size(),
                b_id: None,
                b_size: None,
                overlap_ratio: 0.0,
            },
        }
    }
}

/// Finds the best B-match for every A-cluster, in A's order.
pub fn match_pass<'a, I>(
    a: &'a ClusterSet,
    b: &'a ClusterSet,
    index_b: &'a I,
    min_area: f64,
) -> Vec<Classification<'a>>
where
    I: SpatialIndex + Sync,
{
    let matcher = Matcher::new(b, index_b, min_area);
    let classified = par_map(a.clusters(), |source| match matcher.best_match(source) {
        Some(best) => {
            tracing::trace!(
                a_id = source.id(),
                b_id = best.target.id(),
                area = best.area,
                "matched cluster"
            );
            Classification::Matched { source, best }
        }
        None => {
            tracing::trace!(a_id = source.id(), "no overlapping cluster");
            Classification::Unmatched { source }
        }
    });

    tracing::debug!(
        clusters = a.len(),
        matched = classified
            .iter()
            .filter(|c| matches!(c, Classification::Matched { .. }))
            .count(),
        "matching pass complete"
    );
    classified
}

/// Returns the B-clusters that overlap no A-cluster at all, in B's order.
///
/// A B-cluster that overlaps some A-cluster without being its best match is
/// not an orphan and is not reported here.
pub fn orphan_pass<'a, I>(
    b: &'a ClusterSet,
    a: &'a ClusterSet,
    index_a: &'a I,
    min_area: f64,
) -> Vec<&'a Cluster>
where
    I: SpatialIndex + Sync,
{
    let matcher = Matcher::new(a, index_a, min_area);
    let orphans: Vec<&Cluster> = par_map(b.clusters(), |cluster| {
        (!matcher.has_overlap(cluster)).then_some(cluster)
    })
    .into_iter()
    .flatten()
    .collect();

    tracing::debug!(
        clusters = b.len(),
        orphaned = orphans.len(),
        "orphan pass complete"
    );
    orphans
}

/// Unfiltered geometry streams, one per output category.
#[derive(Debug, Default)]
pub(crate) struct DiffParts {
    pub a_minus_b: Vec<Fragment>,
    pub b_minus_a: Vec<Fragment>,
    pub intersection: Vec<Fragment>,
}

enum Contribution {
    Pair {
        intersection: Fragment,
        a_minus_b: Fragment,
        b_minus_a: Fragment,
    },
    Whole(Fragment),
}

impl DiffParts {
    /// Differences every matched pair and lays out the streams.
    ///
    /// Within A-minus-B, pair differences precede unmatched A-clusters;
    /// within B-minus-A, pair differences precede orphaned B-clusters.
    pub fn build(classified: &[Classification<'_>], orphans: &[&Cluster]) -> Self {
        let contributions = par_map(classified, contribution);

        let mut parts = DiffParts::default();
        let mut unmatched = Vec::new();
        for c in contributions {
            match c {
                Contribution::Pair {
                    intersection,
                    a_minus_b,
                    b_minus_a,
                } => {
                    parts.intersection.push(intersection);
                    parts.a_minus_b.push(a_minus_b);
                    parts.b_minus_a.push(b_minus_a);
                }
                Contribution::Whole(fragment) => unmatched.push(fragment),
            }
        }

        parts.a_minus_b.extend(unmatched);
        parts.b_minus_a.extend(
            orphans
                .iter()
                .map(|cluster| Fragment::whole(cluster, format!("B ({})", cluster.id()))),
        );
        parts
    }
}

fn contribution(classification: &Classification<'_>) -> Contribution {
    match classification {
        Classification::Matched { source, best } => {
            let (a, b) = (source.geometry(), best.target.geometry());
            let (a_id, b_id) = (source.id(), best.target.id());
            Contribution::Pair {
                intersection: Fragment {
                    geometry: best.intersection.clone(),
                    label: format!("A({a_id}) & B({b_id})"),
                },
                a_minus_b: Fragment {
                    geometry: geometry::difference(a, b),
                    label: format!("A({a_id}) - B({b_id})"),
                },
                b_minus_a: Fragment {
                    geometry: geometry::difference(b, a),
                    label: format!("B({b_id}) - A({a_id})"),
                },
            }
        }
        Classification::Unmatched { source } => {
            Contribution::Whole(Fragment::whole(source, format!("A ({})", source.id())))
        }
    }
}

#[cfg(feature = "parallel")]
fn par_map<'a, T, U, F>(items: &'a [T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&'a T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn par_map<'a, T, U, F>(items: &'a [T], f: F) -> Vec<U>
where
    F: Fn(&'a T) -> U,
{
    items.iter().map(f).collect()
}
