//! HTTP client for the RAGFlow-compatible knowledge-graph API.
//!
//! Uses `ureq` for synchronous requests with a fixed timeout. The wire
//! format is the API's contract: nodes carry `entity_name`/`entity_type`/
//! `pagerank`/`source_id`, edges carry `source`/`target`/`description`.
//! Optional fields default rather than fail, because real payloads omit
//! them freely.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use graphlens_core::{Entity, GraphSnapshot, Relation, SnapshotBuilder, TypeLexicon};

use crate::ClientError;

/// Request timeout for all API calls.
const TIMEOUT_SECS: u64 = 30;

/// How much of an HTTP error body to keep in the error message.
const ERROR_BODY_PREVIEW: usize = 500;

fn default_weight() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// Standard response envelope: `code` 0 on success, message otherwise.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct GraphPayload {
    graph: WireGraph,
}

#[derive(Debug, Deserialize)]
struct WireGraph {
    #[serde(default)]
    nodes: Vec<WireNode>,
    #[serde(default)]
    edges: Vec<WireEdge>,
}

#[derive(Debug, Deserialize)]
struct WireNode {
    /// Some deployments omit `id`; the entity name doubles as identity.
    #[serde(default)]
    id: Option<String>,
    entity_name: String,
    #[serde(default)]
    entity_type: String,
    #[serde(default)]
    pagerank: f64,
    #[serde(default)]
    source_id: Vec<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct WireEdge {
    source: String,
    target: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

/// A dataset (knowledge base) visible to the configured API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub document_count: u64,
    #[serde(default)]
    pub chunk_count: u64,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Synchronous client for one API endpoint.
pub struct GraphClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl GraphClient {
    /// Creates a client for the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Lists the datasets visible to the configured API key.
    pub fn list_datasets(&self) -> Result<Vec<Dataset>, ClientError> {
        let url = format!("{}/api/v1/datasets", self.base_url);
        let envelope: Envelope<Vec<Dataset>> = self.get_json(&url)?;
        Ok(unwrap_envelope(envelope)?.unwrap_or_default())
    }

    /// Fetches one knowledge-graph snapshot for a dataset.
    ///
    /// The raw graph is enriched through the lexicon at build time, so the
    /// returned snapshot already carries localized type labels.
    pub fn fetch_snapshot(
        &self,
        dataset_id: &str,
        lexicon: &TypeLexicon,
    ) -> Result<GraphSnapshot, ClientError> {
        let url = format!(
            "{}/api/v1/datasets/{}/knowledge_graph",
            self.base_url, dataset_id
        );
        debug!(%url, "fetching knowledge graph");

        let envelope: Envelope<GraphPayload> = self.get_json(&url)?;
        let payload = unwrap_envelope(envelope)?;

        let mut builder = SnapshotBuilder::new();
        if let Some(payload) = payload {
            for node in payload.graph.nodes {
                builder.add_entity(entity_from_wire(node));
            }
            for edge in payload.graph.edges {
                let mut relation = Relation::new(edge.source, edge.target)
                    .with_description(edge.description);
                relation.weight = edge.weight;
                builder.add_relation(relation);
            }
        }

        let snapshot = builder.build(lexicon);
        info!(
            dataset = dataset_id,
            entities = snapshot.entity_count(),
            relations = snapshot.relation_count(),
            "snapshot fetched"
        );
        Ok(snapshot)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self
            .agent
            .get(url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .call();

        match response {
            Ok(resp) => Ok(resp.into_json::<T>()?),
            Err(ureq::Error::Status(status, resp)) => {
                let mut body = resp.into_string().unwrap_or_default();
                if body.len() > ERROR_BODY_PREVIEW {
                    body = body.chars().take(ERROR_BODY_PREVIEW).collect();
                }
                Err(ClientError::Http { status, body })
            }
            Err(e) => Err(ClientError::Transport(Box::new(e))),
        }
    }
}

/// Rejects application-level errors and unwraps the payload.
fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<Option<T>, ClientError> {
    if envelope.code != 0 {
        return Err(ClientError::Api {
            code: envelope.code,
            message: envelope.message.unwrap_or_default(),
        });
    }
    Ok(envelope.data)
}

fn entity_from_wire(node: WireNode) -> Entity {
    let id = node.id.unwrap_or_else(|| node.entity_name.clone());
    Entity::new(id, node.entity_name, node.entity_type)
        .with_importance(node.pagerank)
        .with_source_refs(node.source_id)
        .with_description(node.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_graph_payload_with_defaults() {
        // `id`, `pagerank`, `source_id`, `weight` all omitted.
        let json = r#"{
            "code": 0,
            "data": {
                "graph": {
                    "nodes": [
                        {"entity_name": "厦门国贸", "entity_type": "organization"}
                    ],
                    "edges": [
                        {"source": "厦门国贸", "target": "财务部", "description": "下设"}
                    ]
                }
            }
        }"#;

        let envelope: Envelope<GraphPayload> = serde_json::from_str(json).unwrap();
        let payload = unwrap_envelope(envelope).unwrap().unwrap();

        let node = &payload.graph.nodes[0];
        assert_eq!(node.pagerank, 0.0);
        assert!(node.source_id.is_empty());

        let entity = entity_from_wire(payload.graph.nodes.into_iter().next().unwrap());
        // Missing id falls back to the entity name.
        assert_eq!(entity.id, "厦门国贸");

        assert_eq!(payload.graph.edges[0].weight, 1.0);
    }

    #[test]
    fn test_envelope_error_code_is_api_error() {
        let json = r#"{"code": 102, "message": "invalid api key"}"#;
        let envelope: Envelope<GraphPayload> = serde_json::from_str(json).unwrap();
        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { code: 102, ref message } if message == "invalid api key"
        ));
    }

    #[test]
    fn test_decode_dataset_listing() {
        let json = r#"{
            "code": 0,
            "data": [
                {"id": "kb-1", "name": "Policies", "document_count": 12, "chunk_count": 480}
            ]
        }"#;
        let envelope: Envelope<Vec<Dataset>> = serde_json::from_str(json).unwrap();
        let datasets = unwrap_envelope(envelope).unwrap().unwrap();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].name, "Policies");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GraphClient::new("http://localhost:9380/", "key");
        assert_eq!(client.base_url, "http://localhost:9380");
    }
}
