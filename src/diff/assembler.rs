//! Filters the geometry streams and lays out the final collection.

use super::differ::DiffParts;
use super::record::{DiffCategory, DiffCollection, DiffRecord, MatchSummary};
use crate::config::DiffConfig;
use crate::geometry;

/// Builds the output collection in the order A-minus-B, B-minus-A,
/// intersection, dropping fragments whose area is not above
/// `config.min_area`.
pub(crate) fn assemble(
    parts: DiffParts,
    matches: Vec<MatchSummary>,
    config: &DiffConfig,
    crs: Option<&str>,
) -> DiffCollection {
    let DiffParts {
        a_minus_b,
        b_minus_a,
        intersection,
    } = parts;
    let streams = [
        (DiffCategory::AMinusB, a_minus_b, &config.styles.a_minus_b),
        (DiffCategory::BMinusA, b_minus_a, &config.styles.b_minus_a),
        (
            DiffCategory::Intersection,
            intersection,
            &config.styles.intersection,
        ),
    ];
    let total: usize = streams.iter().map(|(_, fragments, _)| fragments.len()).sum();
    let min_area = config.min_area;

    let records: Vec<DiffRecord> = streams
        .into_iter()
        .flat_map(move |(category, fragments, style)| {
            fragments
                .into_iter()
                .filter(move |f| geometry::area(&f.geometry) > min_area)
                .map(move |f| DiffRecord {
                    geometry: f.geometry,
                    category,
                    label: f.label,
                    style: style.clone(),
                })
        })
        .collect();

    tracing::debug!(
        kept = records.len(),
        dropped = total - records.len(),
        "assembled cluster diff"
    );
    DiffCollection::new(records, matches, crs.map(str::to_owned))
}
