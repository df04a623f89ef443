//! Differencing of two cluster snapshots.
//!
//! Every A-cluster is matched to the B-cluster it overlaps most. Matched
//! pairs contribute their intersection and both one-sided differences;
//! unmatched A-clusters and B-clusters that overlap nothing in A contribute
//! their whole polygon.
//!
//! # Example
//!
//! ```
//! use clusterdiff::{diff_clusters, Cluster, ClusterSet, DiffCategory, DiffConfig};
//! use geo::{coord, Rect};
//!
//! let square = |x0: f64, y0: f64| {
//!     Rect::new(coord! { x: x0, y: y0 }, coord! { x: x0 + 10.0, y: y0 + 10.0 }).to_polygon()
//! };
//! let a = ClusterSet::new(vec![Cluster::new(1, 5.0, square(0.0, 0.0)).unwrap()]);
//! let b = ClusterSet::new(vec![Cluster::new(2, 7.0, square(5.0, 5.0)).unwrap()]);
//!
//! let diff = diff_clusters(&a, &b, &DiffConfig::default()).unwrap();
//! assert_eq!(diff.len(), 3);
//! assert!((diff.total_area(DiffCategory::Intersection) - 25.0).abs() < 1e-6);
//! ```

mod assembler;
mod differ;
mod matcher;
mod record;

pub use differ::{match_pass, orphan_pass, Classification};
pub use matcher::{Match, Matcher};
pub use record::{DiffCategory, DiffCollection, DiffRecord, MatchSummary};

use crate::cluster::ClusterSet;
use crate::config::DiffConfig;
use crate::error::Result;
use crate::spatial::{ClusterIndex, SpatialIndex};
use differ::DiffParts;

/// Diffs snapshot `a` against snapshot `b` using a [`ClusterIndex`].
///
/// Both snapshots must already share one planar coordinate system; areas
/// are meaningless otherwise and no check is made.
pub fn diff_clusters(
    a: &ClusterSet,
    b: &ClusterSet,
    config: &DiffConfig,
) -> Result<DiffCollection> {
    diff_clusters_with::<ClusterIndex>(a, b, config)
}

/// Diffs snapshot `a` against snapshot `b` using the index type `I`.
pub fn diff_clusters_with<I>(
    a: &ClusterSet,
    b: &ClusterSet,
    config: &DiffConfig,
) -> Result<DiffCollection>
where
    I: SpatialIndex + Sync,
{
    config.validate()?;

    let index_a = I::build(a, config.max_leaf_size);
    let index_b = I::build(b, config.max_leaf_size);

    let classified = match_pass(a, b, &index_b, config.min_area);
    let orphans = orphan_pass(b, a, &index_a, config.min_area);

    let matches = classified.iter().map(Classification::summary).collect();
    let parts = DiffParts::build(&classified, &orphans);
    Ok(assembler::assemble(parts, matches, config, a.crs()))
}
