//! GraphLens Core - Knowledge graph data model
//!
//! This crate defines the snapshot model shared by every other GraphLens
//! crate: entities, relations, the immutable [`GraphSnapshot`] they live in,
//! and the bilingual [`TypeLexicon`] that maps canonical entity-type codes
//! to localized display labels.
//!
//! # Example
//!
//! ```
//! use graphlens_core::{Entity, Relation, SnapshotBuilder, TypeLexicon};
//!
//! let lexicon = TypeLexicon::new();
//! let mut builder = SnapshotBuilder::new();
//! builder.add_entity(Entity::new("acme", "Acme Corp", "organization"));
//! builder.add_entity(Entity::new("jane", "Jane Doe", "person"));
//! builder.add_relation(Relation::new("jane", "acme"));
//! let snapshot = builder.build(&lexicon);
//!
//! assert_eq!(snapshot.entity_count(), 2);
//! assert_eq!(snapshot.get("acme").unwrap().type_label, "组织");
//! ```

mod entity;
mod error;
mod locale;
mod relation;
mod snapshot;

pub use entity::Entity;
pub use error::{GraphError, Result};
pub use locale::TypeLexicon;
pub use relation::Relation;
pub use snapshot::{GraphSnapshot, SnapshotBuilder};

/// Sentinel type label for relation endpoints that do not resolve to a
/// known entity in the snapshot.
pub const UNKNOWN_TYPE: &str = "unknown";
