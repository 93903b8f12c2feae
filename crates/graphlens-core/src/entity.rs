//! Entity type for the knowledge graph.

use serde::{Deserialize, Serialize};

/// A named entity in the knowledge graph.
///
/// Entities are referenced by string identity, not by direct pointers, so
/// relations can name entities that are absent from a snapshot without
/// creating dangling structural references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identity within a snapshot.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Canonical (source-language) type code, e.g. "organization".
    pub type_code: String,

    /// Localized display label, e.g. "组织". Filled in at snapshot build
    /// time; falls back to the code itself for untranslated types.
    #[serde(default)]
    pub type_label: String,

    /// Relative importance score (PageRank upstream). Non-negative, not
    /// normalized. Defaults to 0 when the source omits it.
    #[serde(default)]
    pub importance: f64,

    /// Identifiers of the source documents this entity was extracted from.
    #[serde(default)]
    pub source_refs: Vec<String>,

    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl Entity {
    /// Creates an entity with the given identity, name, and type code.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        type_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_code: type_code.into(),
            type_label: String::new(),
            importance: 0.0,
            source_refs: Vec::new(),
            description: String::new(),
        }
    }

    /// Sets the importance score.
    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = importance;
        self
    }

    /// Sets the source-document references.
    pub fn with_source_refs(mut self, refs: Vec<String>) -> Self {
        self.source_refs = refs;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this entity has at least one source-document reference.
    pub fn has_sources(&self) -> bool {
        !self.source_refs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let e = Entity::new("a", "Acme", "organization");
        assert_eq!(e.importance, 0.0);
        assert!(!e.has_sources());
        assert!(e.description.is_empty());
    }

    #[test]
    fn test_with_source_refs() {
        let e = Entity::new("a", "Acme", "organization")
            .with_source_refs(vec!["doc-1".to_string()]);
        assert!(e.has_sources());
    }
}
