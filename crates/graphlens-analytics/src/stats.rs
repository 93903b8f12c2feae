//! Graph-level summary statistics.
//!
//! Aggregation is order-independent: identical snapshots produce identical
//! summaries regardless of entity or relation iteration order. Maps are
//! keyed with `BTreeMap` so serialized output is deterministic too; any
//! display ordering beyond that is the caller's concern.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use graphlens_core::GraphSnapshot;

/// Default description-prefix length for relation grouping.
pub const RELATION_PREFIX_LEN: usize = 20;

/// Bucket key for relations with an empty description.
const UNSPECIFIED_RELATION: &str = "unspecified";

/// Count and share of one entity type within a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TypeShare {
    /// Number of entities with this type.
    pub count: usize,
    /// Share of the total entity population, in percent. 0 when the
    /// snapshot is empty.
    pub percent: f64,
}

/// Summary metrics for one snapshot.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    /// Total entity count.
    pub entity_count: usize,
    /// Total relation count.
    pub relation_count: usize,
    /// Entities with at least one source-document reference.
    pub sourced_count: usize,
    /// sourced_count / entity_count. Defined as 0 for an empty snapshot.
    pub coverage_rate: f64,
    /// Localized type label → count and percentage.
    pub type_distribution: BTreeMap<String, TypeShare>,
}

/// Computes summary statistics for a snapshot.
pub fn summarize(snapshot: &GraphSnapshot) -> GraphSummary {
    let entity_count = snapshot.entity_count();
    let relation_count = snapshot.relation_count();
    let sourced_count = snapshot.entities().filter(|e| e.has_sources()).count();

    let coverage_rate = if entity_count == 0 {
        0.0
    } else {
        sourced_count as f64 / entity_count as f64
    };

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for entity in snapshot.entities() {
        *counts.entry(entity.type_label.clone()).or_default() += 1;
    }

    let type_distribution = counts
        .into_iter()
        .map(|(label, count)| {
            let percent = if entity_count == 0 {
                0.0
            } else {
                count as f64 / entity_count as f64 * 100.0
            };
            (label, TypeShare { count, percent })
        })
        .collect();

    debug!(entity_count, relation_count, sourced_count, "summarized snapshot");

    GraphSummary {
        entity_count,
        relation_count,
        sourced_count,
        coverage_rate,
        type_distribution,
    }
}

/// Groups relations by a prefix of their free-text description.
///
/// The description is the only relation-type signal the source provides;
/// this grouping is a derived, non-authoritative proxy, not a taxonomy.
/// The prefix is cut on a character boundary so multi-byte (CJK)
/// descriptions never split mid-character. Empty descriptions are grouped
/// under `"unspecified"`.
pub fn relation_frequency(
    snapshot: &GraphSnapshot,
    prefix_len: usize,
) -> BTreeMap<String, usize> {
    let mut frequency: BTreeMap<String, usize> = BTreeMap::new();

    for relation in snapshot.relations() {
        let key = if relation.description.is_empty() {
            UNSPECIFIED_RELATION.to_string()
        } else {
            relation.description.chars().take(prefix_len).collect()
        };
        *frequency.entry(key).or_default() += 1;
    }

    frequency
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphlens_core::{Entity, Relation, SnapshotBuilder, TypeLexicon};

    fn snapshot_with(entities: Vec<Entity>, relations: Vec<Relation>) -> GraphSnapshot {
        let mut builder = SnapshotBuilder::new();
        for e in entities {
            builder.add_entity(e);
        }
        for r in relations {
            builder.add_relation(r);
        }
        builder.build(&TypeLexicon::new())
    }

    #[test]
    fn test_empty_snapshot_is_all_zeroes() {
        let summary = summarize(&snapshot_with(vec![], vec![]));
        assert_eq!(summary.entity_count, 0);
        assert_eq!(summary.relation_count, 0);
        assert_eq!(summary.sourced_count, 0);
        assert_eq!(summary.coverage_rate, 0.0);
        assert!(summary.type_distribution.is_empty());
    }

    #[test]
    fn test_distribution_counts_sum_to_entity_count() {
        let snapshot = snapshot_with(
            vec![
                Entity::new("a", "A", "organization"),
                Entity::new("b", "B", "person"),
                Entity::new("c", "C", "organization"),
                Entity::new("d", "D", "starship"),
            ],
            vec![],
        );
        let summary = summarize(&snapshot);

        let total: usize = summary.type_distribution.values().map(|s| s.count).sum();
        assert_eq!(total, summary.entity_count);

        let org = &summary.type_distribution["组织"];
        assert_eq!(org.count, 2);
        assert!((org.percent - 50.0).abs() < 1e-9);

        // Untranslated type keyed by its code.
        assert_eq!(summary.type_distribution["starship"].count, 1);
    }

    #[test]
    fn test_coverage_rate() {
        let snapshot = snapshot_with(
            vec![
                Entity::new("a", "A", "person").with_source_refs(vec!["doc-1".into()]),
                Entity::new("b", "B", "person"),
            ],
            vec![],
        );
        let summary = summarize(&snapshot);
        assert_eq!(summary.sourced_count, 1);
        assert!((summary.coverage_rate - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_relation_frequency_groups_by_prefix() {
        let snapshot = snapshot_with(
            vec![],
            vec![
                Relation::new("a", "b").with_description("reports to the board"),
                Relation::new("c", "d").with_description("reports to the board of directors"),
                Relation::new("e", "f"),
            ],
        );
        let frequency = relation_frequency(&snapshot, RELATION_PREFIX_LEN);

        assert_eq!(frequency["reports to the board"], 2);
        assert_eq!(frequency["unspecified"], 1);
    }

    #[test]
    fn test_relation_frequency_cjk_boundary() {
        // 25 CJK characters; a byte-indexed cut at 20 would panic.
        let long = "负责审批财务部门的全部预算和日常支出流程管理工作事项";
        let snapshot = snapshot_with(
            vec![],
            vec![Relation::new("a", "b").with_description(long)],
        );
        let frequency = relation_frequency(&snapshot, RELATION_PREFIX_LEN);

        let key = frequency.keys().next().unwrap();
        assert_eq!(key.chars().count(), RELATION_PREFIX_LEN);
        assert!(long.starts_with(key.as_str()));
    }
}
