//! # Datasets API
//!
//! Management of datasets, the named document collections that search and
//! question answering run against.
//!
//! ## Endpoints
//!
//! - `POST /api/v1/datasets` - create a dataset
//! - `GET /api/v1/datasets` - list datasets, filtered by status
//! - `GET /api/v1/datasets/{id}` - fetch one dataset
//! - `PUT /api/v1/datasets/{id}` - update a dataset
//! - `DELETE /api/v1/datasets/{id}` - delete a dataset
//! - `GET /api/v1/datasets/{id}/stats` - document counts and sizes

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::types::{Dataset, DatasetStats};

// =============================================================================
// Request Types
// =============================================================================

/// Request to create a dataset.
///
/// Model bindings left as `None` fall back to the service defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDatasetRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dense_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reranker_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision_model_id: Option<String>,
    /// Ingestion configuration (chunk_size, chunk_overlap, ...).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, serde_json::Value>,
}

/// Partial update of a dataset.
///
/// `None` fields are left untouched server-side; `Some` fields are sent even
/// when they hold an empty or zero value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDatasetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dense_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reranker_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Filters for listing datasets. An empty status means "no filter".
#[derive(Debug, Clone, Default)]
pub struct ListDatasetsRequest {
    pub status: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from listing datasets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListDatasetsResponse {
    pub datasets: Vec<Dataset>,
    pub total: i64,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub page_size: i32,
}

// =============================================================================
// API Client Methods
// =============================================================================

impl Client {
    /// Create a dataset.
    pub async fn create_dataset(&self, request: &CreateDatasetRequest) -> Result<Dataset, Error> {
        self.request(Method::POST, "/api/v1/datasets", &[], Some(request))
            .await
    }

    /// List datasets, optionally filtered by status.
    pub async fn list_datasets(
        &self,
        request: &ListDatasetsRequest,
    ) -> Result<ListDatasetsResponse, Error> {
        let query = [("status", request.status.as_str())];
        self.request(Method::GET, "/api/v1/datasets", &query, NO_BODY)
            .await
    }

    /// Fetch one dataset by id.
    pub async fn get_dataset(&self, dataset_id: &str) -> Result<Dataset, Error> {
        let path = format!("/api/v1/datasets/{}", dataset_id);
        self.request(Method::GET, &path, &[], NO_BODY).await
    }

    /// Update a dataset. Only the fields present in the request are changed.
    pub async fn update_dataset(
        &self,
        dataset_id: &str,
        request: &UpdateDatasetRequest,
    ) -> Result<Dataset, Error> {
        let path = format!("/api/v1/datasets/{}", dataset_id);
        self.request(Method::PUT, &path, &[], Some(request)).await
    }

    /// Delete a dataset and everything in it.
    pub async fn delete_dataset(&self, dataset_id: &str) -> Result<(), Error> {
        let path = format!("/api/v1/datasets/{}", dataset_id);
        self.request_no_content(Method::DELETE, &path, NO_BODY).await
    }

    /// Fetch aggregate document counts and sizes for a dataset.
    pub async fn dataset_stats(&self, dataset_id: &str) -> Result<DatasetStats, Error> {
        let path = format!("/api/v1/datasets/{}/stats", dataset_id);
        self.request(Method::GET, &path, &[], NO_BODY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_skips_unbound_models() {
        let request = CreateDatasetRequest {
            name: "docs".to_string(),
            dense_model_id: Some("mdl_1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"dense_model_id\":\"mdl_1\""));
        assert!(!json.contains("sparse_model_id"));
        assert!(!json.contains("config"));
    }

    #[test]
    fn update_request_sends_present_empty_values() {
        let request = UpdateDatasetRequest {
            description: Some(String::new()),
            config: Some(HashMap::new()),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"description\":\"\""));
        assert!(json.contains("\"config\":{}"));
        assert!(!json.contains("\"name\""));
    }

    #[test]
    fn list_response_tolerates_missing_paging_fields() {
        let json = r#"{"datasets": [], "total": 0}"#;
        let response: ListDatasetsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, 0);
        assert_eq!(response.page, 0);
    }
}
