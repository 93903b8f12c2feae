//! First-degree connectivity analysis.
//!
//! Degree counts edge endpoints: a relation contributes +1 to its source
//! and +1 to its target, so a self-loop contributes +2 to one entity and
//! the degree total is always exactly twice the relation count.

use std::collections::HashMap;

use serde::Serialize;

use graphlens_core::GraphSnapshot;

/// Degree measurement for a single entity, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct DegreeRank {
    /// Entity identity.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Localized type label.
    pub type_label: String,
    /// Number of incident relation endpoints.
    pub degree: usize,
}

/// Computes the degree of every identity in the snapshot.
///
/// Every snapshot entity appears in the map, with degree 0 when no
/// relation touches it, so downstream ranking sees the full population.
/// Endpoints naming identities outside the entity set still accumulate,
/// which keeps `sum(degrees) == 2 * relation_count` even over a partially
/// inconsistent snapshot.
pub fn degree_map(snapshot: &GraphSnapshot) -> HashMap<String, usize> {
    let mut degrees: HashMap<String, usize> =
        snapshot.entities().map(|e| (e.id.clone(), 0)).collect();

    for relation in snapshot.relations() {
        *degrees.entry(relation.source.clone()).or_default() += 1;
        *degrees.entry(relation.target.clone()).or_default() += 1;
    }

    degrees
}

/// Returns the `k` best-connected entities, descending by degree.
///
/// Only entities present in the snapshot are ranked. Ties keep snapshot
/// order: the ranking starts from the entity list in insertion order and
/// uses a stable sort, so equal degrees never reorder.
pub fn top_by_degree(snapshot: &GraphSnapshot, k: usize) -> Vec<DegreeRank> {
    let degrees = degree_map(snapshot);

    let mut ranks: Vec<DegreeRank> = snapshot
        .entities()
        .map(|e| DegreeRank {
            id: e.id.clone(),
            name: e.name.clone(),
            type_label: e.type_label.clone(),
            degree: degrees.get(&e.id).copied().unwrap_or(0),
        })
        .collect();

    // Vec::sort_by is stable; equal degrees preserve snapshot order.
    ranks.sort_by(|a, b| b.degree.cmp(&a.degree));
    ranks.truncate(k);
    ranks
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
    fn test_degree_counts_both_endpoints() {
        // X → Y, Y → Z
        let snapshot = snapshot_with(
            vec![
                Entity::new("x", "X", "organization"),
                Entity::new("y", "Y", "person"),
                Entity::new("z", "Z", "organization"),
            ],
            vec![Relation::new("x", "y"), Relation::new("y", "z")],
        );
        let degrees = degree_map(&snapshot);

        assert_eq!(degrees["x"], 1);
        assert_eq!(degrees["y"], 2);
        assert_eq!(degrees["z"], 1);
    }

    #[test]
    fn test_isolated_entity_has_degree_zero() {
        let snapshot = snapshot_with(
            vec![
                Entity::new("a", "A", "person"),
                Entity::new("b", "B", "person"),
            ],
            vec![Relation::new("a", "a")],
        );
        let degrees = degree_map(&snapshot);

        // Present with zero, not absent.
        assert_eq!(degrees["b"], 0);
        // Self-loop counts twice.
        assert_eq!(degrees["a"], 2);
    }

    #[test]
    fn test_degree_sum_is_twice_relation_count() {
        let snapshot = snapshot_with(
            vec![Entity::new("a", "A", "person")],
            vec![
                Relation::new("a", "a"),
                Relation::new("a", "ghost"),
                Relation::new("phantom", "ghost"),
            ],
        );
        let degrees = degree_map(&snapshot);
        let total: usize = degrees.values().sum();
        assert_eq!(total, 2 * snapshot.relation_count());
    }

    #[test]
    fn test_top_by_degree_stable_tie_break() {
        // b and c tie on degree; snapshot order must decide.
        let snapshot = snapshot_with(
            vec![
                Entity::new("a", "A", "person"),
                Entity::new("b", "B", "person"),
                Entity::new("c", "C", "person"),
            ],
            vec![
                Relation::new("a", "b"),
                Relation::new("a", "c"),
                Relation::new("b", "ghost"),
                Relation::new("c", "ghost"),
            ],
        );
        let ranks = top_by_degree(&snapshot, 3);

        assert_eq!(ranks[0].id, "a");
        assert_eq!(ranks[1].id, "b");
        assert_eq!(ranks[2].id, "c");
    }

    #[test]
    fn test_top_by_degree_truncates() {
        let snapshot = snapshot_with(
            vec![
                Entity::new("a", "A", "person"),
                Entity::new("b", "B", "person"),
            ],
            vec![],
        );
        assert_eq!(top_by_degree(&snapshot, 1).len(), 1);
        assert!(top_by_degree(&snapshot, 0).is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = snapshot_with(vec![], vec![]);
        assert!(degree_map(&snapshot).is_empty());
        assert!(top_by_degree(&snapshot, 10).is_empty());
    }
}
