//! Snapshot files: JSON export for hand-off and offline analysis.
//!
//! The file is a data interchange artifact, not a persistence layer; it
//! holds exactly the entity and relation collections plus a format
//! version. Loading rebuilds the snapshot through [`SnapshotBuilder`], so
//! type labels are re-localized against the caller's lexicon.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use graphlens_core::{Entity, GraphSnapshot, Relation, SnapshotBuilder, TypeLexicon};

use crate::ClientError;

const FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    version: String,
    entities: Vec<Entity>,
    relations: Vec<Relation>,
}

/// Writes a snapshot to a pretty-printed JSON file.
pub fn export_snapshot(snapshot: &GraphSnapshot, path: &Path) -> Result<(), ClientError> {
    let file = SnapshotFile {
        version: FORMAT_VERSION.to_string(),
        entities: snapshot.entities().cloned().collect(),
        relations: snapshot.relations().cloned().collect(),
    };
    fs::write(path, serde_json::to_string_pretty(&file)?)?;
    debug!(path = %path.display(), entities = file.entities.len(), "snapshot exported");
    Ok(())
}

/// Reads a snapshot file and rebuilds an immutable snapshot from it.
pub fn load_snapshot(path: &Path, lexicon: &TypeLexicon) -> Result<GraphSnapshot, ClientError> {
    let file: SnapshotFile = serde_json::from_str(&fs::read_to_string(path)?)?;

    let mut builder = SnapshotBuilder::new();
    for entity in file.entities {
        builder.add_entity(entity);
    }
    for relation in file.relations {
        builder.add_relation(relation);
    }
    Ok(builder.build(lexicon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_then_load_preserves_graph() {
        let lexicon = TypeLexicon::new();
        let mut builder = SnapshotBuilder::new();
        builder.add_entity(
            Entity::new("a", "Acme", "organization")
                .with_importance(0.8)
                .with_source_refs(vec!["doc-1".to_string()]),
        );
        builder.add_entity(Entity::new("b", "Bea", "person"));
        builder.add_relation(Relation::new("b", "a").with_description("works at"));
        let snapshot = builder.build(&lexicon);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");

        export_snapshot(&snapshot, &path).unwrap();
        let loaded = load_snapshot(&path, &lexicon).unwrap();

        assert_eq!(loaded.entity_count(), 2);
        assert_eq!(loaded.relation_count(), 1);
        let a = loaded.get("a").unwrap();
        assert_eq!(a.importance, 0.8);
        assert_eq!(a.type_label, "组织");
        assert_eq!(
            loaded.relations().next().unwrap().description,
            "works at"
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_snapshot(Path::new("/nonexistent/graph.json"), &TypeLexicon::new())
            .unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        let err = load_snapshot(&path, &TypeLexicon::new()).unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }
}
