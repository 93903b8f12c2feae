//! Entity selection and ranking.
//!
//! Three independent query modes over a snapshot. An empty result is the
//! steady state for all of them, never an error; only malformed parameters
//! (a blank type or keyword) are rejected with
//! [`GraphError::InvalidQuery`](graphlens_core::GraphError).

use graphlens_core::{Entity, GraphError, GraphSnapshot, Result};

/// Selects entities of one type, descending by importance score.
///
/// `kind` matches either the canonical type code or the localized label,
/// so callers can query in either language. Ties keep snapshot order
/// (stable sort). An unknown type yields an empty vec.
pub fn by_type<'a>(snapshot: &'a GraphSnapshot, kind: &str) -> Result<Vec<&'a Entity>> {
    if kind.trim().is_empty() {
        return Err(GraphError::InvalidQuery("entity type must not be blank".into()));
    }

    let mut matches: Vec<&Entity> = snapshot
        .entities()
        .filter(|e| e.type_code == kind || e.type_label == kind)
        .collect();

    // Stable sort; equal scores preserve snapshot order.
    matches.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(matches)
}

/// Selects entities whose name or description contains the keyword.
///
/// Matching is case-sensitive substring on either field; result order is
/// snapshot order, not relevance. An unmatched keyword yields an empty vec.
pub fn by_keyword<'a>(snapshot: &'a GraphSnapshot, keyword: &str) -> Result<Vec<&'a Entity>> {
    if keyword.trim().is_empty() {
        return Err(GraphError::InvalidQuery("keyword must not be blank".into()));
    }

    Ok(snapshot
        .entities()
        .filter(|e| e.name.contains(keyword) || e.description.contains(keyword))
        .collect())
}

/// Returns the `k` entities with the most source-document references.
///
/// Entities with zero references are excluded from consideration entirely,
/// not ranked last. Ties keep snapshot order (stable sort).
pub fn top_by_source_count(snapshot: &GraphSnapshot, k: usize) -> Vec<&Entity> {
    let mut sourced: Vec<&Entity> = snapshot.entities().filter(|e| e.has_sources()).collect();

    sourced.sort_by(|a, b| b.source_refs.len().cmp(&a.source_refs.len()));
    sourced.truncate(k);
    sourced
}
