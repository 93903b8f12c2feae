//! Relation type for the knowledge graph.

use serde::{Deserialize, Serialize};

fn default_weight() -> f64 {
    1.0
}

/// A directed relation between two entities, referenced by identity.
///
/// There is no guaranteed typed relation field upstream; the free-text
/// description doubles as a coarse relation-type proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    /// Identity of the source entity.
    pub source: String,

    /// Identity of the target entity.
    pub target: String,

    /// Free-text description of the relationship.
    #[serde(default)]
    pub description: String,

    /// Relation weight. Defaults to 1 when the source omits it.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Relation {
    /// Creates a relation between two entity identities.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            description: String::new(),
            weight: 1.0,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether source and target name the same entity.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_loop() {
        assert!(Relation::new("a", "a").is_self_loop());
        assert!(!Relation::new("a", "b").is_self_loop());
    }

    #[test]
    fn test_default_weight_on_deserialize() {
        let r: Relation = serde_json::from_str(r#"{"source":"a","target":"b"}"#).unwrap();
        assert_eq!(r.weight, 1.0);
        assert!(r.description.is_empty());
    }
}
