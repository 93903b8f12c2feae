//! GraphLens Analytics - Read-only queries over graph snapshots
//!
//! Every function in this crate is a pure, synchronous query over an
//! immutable [`GraphSnapshot`](graphlens_core::GraphSnapshot): summary
//! statistics, degree analysis, entity filtering, and single-entity
//! neighborhood extraction. Nothing here mutates the snapshot or keeps
//! state between calls, so all operations are safe to run concurrently
//! against a shared snapshot.
//!
//! Derived structures (degree maps, frequency tables) are transient and
//! rebuilt per call; they are bounded by input size and never block.

pub mod connectivity;
pub mod filter;
pub mod neighborhood;
pub mod stats;

pub use connectivity::{degree_map, top_by_degree, DegreeRank};
pub use filter::{by_keyword, by_type, top_by_source_count};
pub use neighborhood::{neighborhood, LinkDirection, NeighborLink};
pub use stats::{relation_frequency, summarize, GraphSummary, TypeShare, RELATION_PREFIX_LEN};
