//! Input clusters and cluster snapshots.

use crate::error::{DiffError, Result};
use crate::geometry;
use geo::Polygon;

/// One labeled polygon from a clustering snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    id: i64,
    size: f64,
    geometry: Polygon<f64>,
}

impl Cluster {
    /// Creates a cluster.
    ///
    /// Fails if any vertex of `geometry` is NaN or infinite. Topology is not
    /// checked: self-intersecting rings are passed through as given.
    pub fn new(id: i64, size: f64, geometry: Polygon<f64>) -> Result<Self> {
        if !geometry::is_finite(&geometry) {
            return Err(DiffError::NonFiniteCoordinate { id });
        }
        Ok(Self { id, size, geometry })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// The size attribute reported by the clustering run (e.g. member count).
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn geometry(&self) -> &Polygon<f64> {
        &self.geometry
    }

    /// Planar area of the cluster polygon.
    pub fn area(&self) -> f64 {
        geometry::area(&self.geometry)
    }
}

/// An ordered snapshot of clusters sharing one coordinate system.
///
/// The optional `crs` tag is opaque: it is carried into the diff output but
/// never compared or used for reprojection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
    crs: Option<String>,
}

impl ClusterSet {
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self {
            clusters,
            crs: None,
        }
    }

    /// Tags the set with a coordinate reference identifier, e.g. `"EPSG:3857"`.
    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = Some(crs.into());
        self
    }

    pub fn crs(&self) -> Option<&str> {
        self.crs.as_deref()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl FromIterator<Cluster> for ClusterSet {
    fn from_iter<I: IntoIterator<Item = Cluster>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ClusterSet {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
