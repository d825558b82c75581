//! # Models API
//!
//! Management of AI models registered with the service.
//!
//! ## Endpoints
//!
//! - `POST /api/v1/models` - register a model
//! - `GET /api/v1/models` - list models, filtered by type/provider/status
//! - `GET /api/v1/models/{id}` - fetch one model
//! - `PUT /api/v1/models/{id}` - update a model
//! - `DELETE /api/v1/models/{id}` - delete a model
//! - `POST /api/v1/models/provider/supported` - list provider-side models
//! - `POST /api/v1/models/check` - validate a configuration
//! - `POST /api/v1/models/upsert` - create or update by provider/model name

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::types::{AiModel, CheckModelResponse};

// =============================================================================
// Request Types
// =============================================================================

/// Request to register a new model.
///
/// # Example
///
/// ```rust
/// use raglite_sdk::models::CreateModelRequest;
///
/// let request = CreateModelRequest {
///     name: "OpenAI GPT-4".to_string(),
///     model_type: "chat".to_string(),
///     provider: "openai".to_string(),
///     model_name: "gpt-4".to_string(),
///     is_default: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateModelRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Model role, e.g. `chat`, `embedding`, `reranker`.
    pub model_type: String,
    pub provider: String,
    pub model_name: String,
    /// Provider configuration (api_key, api_base, temperature, ...).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub capabilities: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_default: bool,
}

/// Partial update of a model.
///
/// `None` fields are left untouched server-side; `Some` fields are sent even
/// when they hold an empty or zero value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filters for listing models. Empty strings mean "no filter".
#[derive(Debug, Clone, Default)]
pub struct ListModelsRequest {
    pub model_type: String,
    pub provider: String,
    pub status: String,
}

/// Request for the models an upstream provider supports.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListProviderModelsRequest {
    pub provider: String,
    /// Provider-specific connection options (api_key, api_base, ...).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub options: HashMap<String, serde_json::Value>,
}

/// Request to validate a model configuration against its provider.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckModelRequest {
    pub provider: String,
    pub model_name: String,
    pub config: HashMap<String, serde_json::Value>,
}

/// Request to create or update a model keyed by the server's matching rule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpsertModelRequest {
    /// Display name for a created model; the server derives one when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub model_type: String,
    pub provider: String,
    pub model_name: String,
    pub config: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub capabilities: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_default: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_active: bool,
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from listing models.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListModelsResponse {
    pub models: Vec<AiModel>,
    pub total: i64,
}

/// Response from the upsert endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpsertModelResponse {
    /// `created` or `updated`.
    pub action: String,
    pub model: AiModel,
}

// =============================================================================
// API Client Methods
// =============================================================================

impl Client {
    /// Register a new AI model.
    pub async fn create_model(&self, request: &CreateModelRequest) -> Result<AiModel, Error> {
        self.request(Method::POST, "/api/v1/models", &[], Some(request))
            .await
    }

    /// List registered models, optionally filtered by type, provider, and
    /// status. Empty filter values are omitted from the query string.
    pub async fn list_models(
        &self,
        request: &ListModelsRequest,
    ) -> Result<ListModelsResponse, Error> {
        let query = [
            ("model_type", request.model_type.as_str()),
            ("provider", request.provider.as_str()),
            ("status", request.status.as_str()),
        ];
        self.request(Method::GET, "/api/v1/models", &query, NO_BODY)
            .await
    }

    /// Fetch one model by id.
    pub async fn get_model(&self, model_id: &str) -> Result<AiModel, Error> {
        let path = format!("/api/v1/models/{}", model_id);
        self.request(Method::GET, &path, &[], NO_BODY).await
    }

    /// Update a model. Only the fields present in the request are changed.
    pub async fn update_model(
        &self,
        model_id: &str,
        request: &UpdateModelRequest,
    ) -> Result<AiModel, Error> {
        let path = format!("/api/v1/models/{}", model_id);
        self.request(Method::PUT, &path, &[], Some(request)).await
    }

    /// Delete a model.
    pub async fn delete_model(&self, model_id: &str) -> Result<(), Error> {
        let path = format!("/api/v1/models/{}", model_id);
        self.request_no_content(Method::DELETE, &path, NO_BODY).await
    }

    /// List the models an upstream provider supports.
    ///
    /// The payload shape is provider-defined, so the result is returned as
    /// raw JSON.
    pub async fn list_provider_models(
        &self,
        request: &ListProviderModelsRequest,
    ) -> Result<serde_json::Value, Error> {
        self.request(
            Method::POST,
            "/api/v1/models/provider/supported",
            &[],
            Some(request),
        )
        .await
    }

    /// Validate a model configuration against its provider without
    /// registering it.
    pub async fn check_model(
        &self,
        request: &CheckModelRequest,
    ) -> Result<CheckModelResponse, Error> {
        self.request(Method::POST, "/api/v1/models/check", &[], Some(request))
            .await
    }

    /// Create or update a model, keyed by the server's provider/model-name
    /// matching rule.
    pub async fn upsert_model(
        &self,
        request: &UpsertModelRequest,
    ) -> Result<UpsertModelResponse, Error> {
        self.request(Method::POST, "/api/v1/models/upsert", &[], Some(request))
            .await
    }
}
