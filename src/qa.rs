//! # Question Answering API
//!
//! Retrieval followed by answer generation in one call. The retrieved
//! context comes back alongside the answer so callers can render citations.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::search::DEFAULT_TOP_K;
use crate::types::SearchResult;

// =============================================================================
// Request Types
// =============================================================================

/// Request to answer a question over a dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QaRequest {
    pub query: String,
    pub dataset_id: String,
    /// Number of chunks to retrieve as context. Unset (or zero) falls back
    /// to [`DEFAULT_TOP_K`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// `full` or `smart`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_mode: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from a question-answering call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QaResponse {
    pub answer: String,
    /// The chunks the answer was generated from.
    pub context: Vec<SearchResult>,
}

// =============================================================================
// API Client Methods
// =============================================================================

impl Client {
    /// Ask a question and get a generated answer with its retrieval context.
    pub async fn ask(&self, request: &QaRequest) -> Result<QaResponse, Error> {
        let mut request = request.clone();
        if request.top_k.unwrap_or(0) == 0 {
            request.top_k = Some(DEFAULT_TOP_K);
        }

        self.request(Method::POST, "/api/v1/qa", &[], Some(&request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_skips_stream_flag_when_false() {
        let request = QaRequest {
            query: "why is the sky blue?".to_string(),
            dataset_id: "ds_1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("stream"));
        assert!(!json.contains("similarity_threshold"));
    }

    #[test]
    fn request_serializes_stream_flag_when_set() {
        let request = QaRequest {
            query: "why?".to_string(),
            dataset_id: "ds_1".to_string(),
            stream: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"stream\":true"));
    }

    #[test]
    fn response_deserializes_answer_and_context() {
        let json = r#"{
            "answer": "Rayleigh scattering.",
            "context": []
        }"#;
        let response: QaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.answer, "Rayleigh scattering.");
        assert!(response.context.is_empty());
    }
}
