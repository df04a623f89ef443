//! clusterdiff - Spatial differencing of polygonal cluster snapshots
//!
//! Given two snapshots of cluster boundaries (for example two runs of a
//! density-based clustering over the same region), this library reports
//! which regions persisted, which shrank or vanished, and which grew or
//! appeared.
//!
//! Each cluster of snapshot A is paired with the cluster of snapshot B it
//! overlaps most. A bounding volume hierarchy prunes the candidates before
//! exact polygon intersections are computed with [`geo`].

pub mod bounds;
pub mod cluster;
pub mod config;
pub mod diff;
pub mod error;
pub mod geometry;
pub mod primitives;
pub mod spatial;

pub use cluster::{Cluster, ClusterSet};
pub use config::{CategoryStyles, DiffConfig, Style};
pub use diff::{
    diff_clusters, diff_clusters_with, DiffCategory, DiffCollection, DiffRecord, MatchSummary,
};
pub use error::{DiffError, Result};
