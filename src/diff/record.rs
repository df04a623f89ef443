//! Output records of a cluster diff.

use crate::config::Style;
use crate::geometry;
use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the comparison a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffCategory {
    /// Region covered by both an A-cluster and its best B-match.
    Intersection,
    /// Region only in A: shrinkage of a matched cluster or an unmatched cluster.
    AMinusB,
    /// Region only in B: growth of a matched cluster or an orphaned cluster.
    BMinusA,
}

impl fmt::Display for DiffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiffCategory::Intersection => "A & B",
            DiffCategory::AMinusB => "A - B",
            DiffCategory::BMinusA => "B - A",
        })
    }
}

/// One attributed output geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub geometry: MultiPolygon<f64>,
    pub category: DiffCategory,
    /// Provenance such as `A(3) - B(7)`; not used by the diff itself.
    pub label: String,
    pub style: Style,
}

impl DiffRecord {
    pub fn area(&self) -> f64 {
        geometry::area(&self.geometry)
    }
}

/// How one A-cluster fared in the matching pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub a_id: i64,
    pub a_size: f64,
    /// Best-overlapping B-cluster, if any overlap was positive.
    pub b_id: Option<i64>,
    pub b_size: Option<f64>,
    /// Intersection area divided by the A-cluster's area; 0.0 when unmatched.
    pub overlap_ratio: f64,
}

impl MatchSummary {
    pub fn is_matched(&self) -> bool {
        self.b_id.is_some()
    }
}

/// The assembled diff: records ordered A-minus-B, then B-minus-A, then
/// intersections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffCollection {
    records: Vec<DiffRecord>,
    matches: Vec<MatchSummary>,
    crs: Option<String>,
}

impl DiffCollection {
    pub(crate) fn new(
        records: Vec<DiffRecord>,
        matches: Vec<MatchSummary>,
        crs: Option<String>,
    ) -> Self {
        Self {
            records,
            matches,
            crs,
        }
    }

    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    /// One summary per A-cluster, in A's order.
    pub fn matches(&self) -> &[MatchSummary] {
        &self.matches
    }

    /// Coordinate reference tag inherited from the A snapshot.
    pub fn crs(&self) -> Option<&str> {
        self.crs.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_category(&self, category: DiffCategory) -> impl Iterator<Item = &DiffRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Sum of record areas in one category.
    pub fn total_area(&self, category: DiffCategory) -> f64 {
        self.by_category(category).map(DiffRecord::area).sum()
    }

    pub fn into_records(self) -> Vec<DiffRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a DiffCollection {
    type Item = &'a DiffRecord;
    type IntoIter = std::slice::Iter<'a, DiffRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
