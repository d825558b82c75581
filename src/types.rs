//! Shared wire types returned by the RAGLite API.
//!
//! Free-form `config`, `capabilities`, and `metadata` fields are carried as
//! JSON maps; their keys are provider- and pipeline-defined and the SDK does
//! not interpret them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An AI model registered with the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Model role, e.g. `chat`, `embedding`, `reranker`.
    pub model_type: String,
    /// Upstream provider, e.g. `openai`, `ollama`.
    pub provider: String,
    /// Provider-side model identifier, e.g. `gpt-4`.
    pub model_name: String,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub capabilities: HashMap<String, serde_json::Value>,
    pub status: String,
    #[serde(default)]
    pub is_default: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last-update timestamp.
    pub updated_at: String,
}

/// A named collection of documents bound to retrieval models.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Dense embedding model backing this dataset.
    pub dense_model_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparse_model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reranker_model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_model_id: Option<String>,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A document stored in a dataset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Document {
    pub id: String,
    pub dataset_id: String,
    pub title: String,
    pub filename: String,
    #[serde(default)]
    pub file_path: String,
    /// Content hash computed server-side at ingestion.
    #[serde(default)]
    pub file_hash: String,
    pub file_size: i64,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ingestion status, e.g. `pending`, `processing`, `completed`, `failed`.
    pub status: String,
    /// Populated when ingestion failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A single retrieval hit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    pub chunk_id: String,
    pub document_id: String,
    pub document_title: String,
    #[serde(default)]
    pub section_title: String,
    /// Chunk text content.
    pub content: String,
    /// Relevance score, higher is better.
    pub score: f64,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

/// Aggregate document counts for a dataset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetStats {
    pub dataset: Dataset,
    pub total_documents: i64,
    pub pending_docs: i64,
    pub processing_docs: i64,
    pub completed_docs: i64,
    pub failed_docs: i64,
    /// Sum of stored file sizes in bytes.
    pub total_file_size: i64,
}

/// A model offered by an upstream provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Result of validating a model configuration against its provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckModelResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_info: Option<serde_json::Value>,
}

/// One turn of conversation history passed along with a retrieval query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatMessage {
    /// `user` or `assistant`.
    pub role: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_deserializes_with_defaults() {
        let json = r#"{
            "id": "mdl_1",
            "name": "GPT-4",
            "model_type": "chat",
            "provider": "openai",
            "model_name": "gpt-4",
            "status": "active",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let model: AiModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.id, "mdl_1");
        assert!(model.description.is_empty());
        assert!(model.config.is_empty());
        assert!(!model.is_default);
    }

    #[test]
    fn dataset_deserializes_optional_model_bindings() {
        let json = r#"{
            "id": "ds_1",
            "name": "docs",
            "dense_model_id": "mdl_1",
            "reranker_model_id": "mdl_9",
            "status": "active",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.reranker_model_id.as_deref(), Some("mdl_9"));
        assert!(dataset.sparse_model_id.is_none());
    }

    #[test]
    fn search_result_omits_empty_highlights() {
        let result = SearchResult {
            chunk_id: "c1".to_string(),
            document_id: "d1".to_string(),
            document_title: "Guide".to_string(),
            section_title: String::new(),
            content: "hello".to_string(),
            score: 0.9,
            metadata: HashMap::new(),
            tags: vec![],
            highlights: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("highlights"));
    }

    #[test]
    fn document_keeps_error_message_when_present() {
        let json = r#"{
            "id": "doc_1",
            "dataset_id": "ds_1",
            "title": "Guide",
            "filename": "guide.md",
            "file_size": 1024,
            "status": "failed",
            "error_message": "unsupported encoding",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.error_message.as_deref(), Some("unsupported encoding"));
        assert!(doc.tags.is_empty());
    }
}
