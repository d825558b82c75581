//! # Search API
//!
//! Retrieval over a dataset: dense/sparse recall with optional tag and
//! metadata filtering, reranking, and conversation-aware query rewriting,
//! all decided server-side from the dataset's model bindings.

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::types::{ChatMessage, SearchResult};

/// Result count requested when the caller leaves `top_k` unset.
pub const DEFAULT_TOP_K: u32 = 10;

// =============================================================================
// Request Types
// =============================================================================

/// Request to retrieve chunks relevant to a query.
///
/// # Example
///
/// ```rust
/// use raglite_sdk::search::RetrieveRequest;
///
/// let request = RetrieveRequest {
///     query: "how do I rotate credentials?".to_string(),
///     dataset_id: "ds_1".to_string(),
///     top_k: Some(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct RetrieveRequest {
    pub query: String,
    pub dataset_id: String,
    /// Number of chunks to return. Unset (or zero) falls back to
    /// [`DEFAULT_TOP_K`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// `full` or `smart`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_mode: Option<String>,
    /// Minimum relevance score for a chunk to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
    /// Metadata filter applied before scoring.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
    /// Tag filter applied before scoring.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Prior conversation turns, used server-side to rewrite the query.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chat_history: Vec<ChatMessage>,
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from a retrieval call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// The query as the server evaluated it.
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total: i32,
    /// Server-side processing time.
    pub latency_ms: i64,
}

// =============================================================================
// API Client Methods
// =============================================================================

impl Client {
    /// Retrieve the chunks most relevant to a query.
    pub async fn retrieve(&self, request: &RetrieveRequest) -> Result<SearchResponse, Error> {
        let mut request = request.clone();
        if request.top_k.unwrap_or(0) == 0 {
            request.top_k = Some(DEFAULT_TOP_K);
        }

        self.request(Method::POST, "/api/v1/search", &[], Some(&request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_skips_unset_optional_fields() {
        let request = RetrieveRequest {
            query: "hello".to_string(),
            dataset_id: "ds_1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"query\":\"hello\""));
        assert!(!json.contains("top_k"));
        assert!(!json.contains("retrieval_mode"));
        assert!(!json.contains("chat_history"));
    }

    #[test]
    fn request_serializes_filters_and_history() {
        let mut metadata = HashMap::new();
        metadata.insert("lang".to_string(), serde_json::json!("en"));

        let request = RetrieveRequest {
            query: "hello".to_string(),
            dataset_id: "ds_1".to_string(),
            top_k: Some(3),
            metadata,
            tags: vec!["manual".to_string()],
            chat_history: vec![ChatMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"top_k\":3"));
        assert!(json.contains("\"lang\":\"en\""));
        assert!(json.contains("\"tags\":[\"manual\"]"));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn response_deserializes_results() {
        let json = r#"{
            "query": "hello",
            "results": [{
                "chunk_id": "c1",
                "document_id": "d1",
                "document_title": "Guide",
                "content": "hello world",
                "score": 0.93
            }],
            "total": 1,
            "latency_ms": 12
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, 1);
        assert!((response.results[0].score - 0.93).abs() < 1e-9);
    }
}
