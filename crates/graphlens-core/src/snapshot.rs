//! The immutable graph snapshot and its builder.
//!
//! A snapshot is an arena: entities and relations reference each other by
//! string identity, never by direct pointers. Relations may name entities
//! that are absent from the snapshot; lookups resolve identities lazily at
//! query time, so a partially inconsistent snapshot stays usable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::Entity;
use crate::locale::TypeLexicon;
use crate::relation::Relation;

/// An immutable point-in-time capture of the graph's entities and relations.
///
/// Built once via [`SnapshotBuilder`]; all analytics operate on a shared
/// reference and nothing mutates it after construction. That invariant is
/// what makes every analytics operation safe to call concurrently.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphSnapshot {
    entities: Vec<Entity>,
    relations: Vec<Relation>,

    /// Maps entity identity to its index in `entities`.
    #[serde(skip)]
    id_index: HashMap<String, usize>,
}

impl GraphSnapshot {
    /// Number of entities in the snapshot.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of relations in the snapshot.
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Looks up an entity by identity.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        let index = self.id_index.get(id)?;
        self.entities.get(*index)
    }

    /// Whether an entity with this identity is present.
    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// Iterates entities in snapshot (insertion) order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterates relations in snapshot (insertion) order.
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter()
    }
}

/// Builds a [`GraphSnapshot`] from raw entities and relations.
///
/// The builder handles the two-phase process:
/// 1. Collect entities and relations from the source
/// 2. Freeze: localize type labels and index identities
pub struct SnapshotBuilder {
    entities: Vec<Entity>,
    relations: Vec<Relation>,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Adds an entity. On a duplicate identity the first entity wins;
    /// identity is unique within a snapshot.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Adds a relation. Endpoints are not validated here; relations may
    /// reference entities the snapshot never receives.
    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Freezes the builder into an immutable snapshot.
    ///
    /// Fills each entity's `type_label` from the lexicon (falling back to
    /// the code for untranslated types) and builds the identity index.
    pub fn build(self, lexicon: &TypeLexicon) -> GraphSnapshot {
        let mut entities = Vec::with_capacity(self.entities.len());
        let mut id_index = HashMap::with_capacity(self.entities.len());

        for mut entity in self.entities {
            if id_index.contains_key(&entity.id) {
                debug!(id = %entity.id, "duplicate entity identity, keeping first");
                continue;
            }
            entity.type_label = lexicon.label_or_code(&entity.type_code).to_string();
            id_index.insert(entity.id.clone(), entities.len());
            entities.push(entity);
        }

        debug!(
            entities = entities.len(),
            relations = self.relations.len(),
            "snapshot built"
        );

        GraphSnapshot {
            entities,
            relations: self.relations,
            id_index,
        }
    }
}

impl GraphSnapshot {
    /// Rebuilds the identity index after deserialization.
    ///
    /// `id_index` is skipped by serde; call this once on a snapshot loaded
    /// from a file before querying it.
    pub fn reindex(mut self) -> Self {
        self.id_index = self
            .entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        self
    }
}
