//! Single-entity neighborhood extraction.
//!
//! Given one entity identity, lists its direct relations annotated with
//! direction and the identity/type of the entity on the other end. The
//! result preserves the snapshot's relation order and is never re-sorted.

use serde::Serialize;

use graphlens_core::{GraphError, GraphSnapshot, Result, UNKNOWN_TYPE};

/// Direction of a relation relative to the queried entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkDirection {
    /// The queried entity is the relation's source.
    Outgoing,
    /// The queried entity is the relation's target.
    Incoming,
}

impl std::fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkDirection::Outgoing => write!(f, "outgoing"),
            LinkDirection::Incoming => write!(f, "incoming"),
        }
    }
}

/// One relation incident to the queried entity.
#[derive(Debug, Clone, Serialize)]
pub struct NeighborLink {
    /// Direction relative to the queried entity.
    pub direction: LinkDirection,
    /// Identity of the entity on the other end.
    pub other_id: String,
    /// Localized type label of the other entity, or `"unknown"` when the
    /// identity does not resolve against the snapshot's entity set.
    pub other_type: String,
    /// Free-text description of the relation.
    pub relation: String,
}

/// Extracts the direct neighborhood of one entity.
///
/// The source side is checked first, so a self-loop produces a single
/// `Outgoing` entry. An identity present in the entity set but touched by
/// no relation yields an empty vec; an identity absent from the entity set
/// is caller misuse and fails with
/// [`GraphError::UnknownEntity`].
pub fn neighborhood(snapshot: &GraphSnapshot, id: &str) -> Result<Vec<NeighborLink>> {
    if !snapshot.contains(id) {
        return Err(GraphError::UnknownEntity(id.to_string()));
    }

    let mut links = Vec::new();

    for relation in snapshot.relations() {
        let (direction, other_id) = if relation.source == id {
            (LinkDirection::Outgoing, relation.target.as_str())
        } else if relation.target == id {
            (LinkDirection::Incoming, relation.source.as_str())
        } else {
            continue;
        };

        // Lazy identity resolution; missing endpoints surface as "unknown".
        let other_type = snapshot
            .get(other_id)
            .map(|e| e.type_label.clone())
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

        links.push(NeighborLink {
            direction,
            other_id: other_id.to_string(),
            other_type,
            relation: relation.description.clone(),
        });
    }

    Ok(links)
}
