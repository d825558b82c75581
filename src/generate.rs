//! # Generate API
//!
//! Answer generation from caller-supplied context, skipping retrieval.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// Request to generate an answer from the given context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateRequest {
    pub query: String,
    /// Context text the answer is grounded in.
    pub context: String,
    /// Dataset whose generation model should be used.
    pub dataset_id: String,
}

/// Response from a generation call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateResponse {
    pub answer: String,
}

impl Client {
    /// Generate an answer directly from the supplied context, without
    /// retrieval.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, Error> {
        self.request(Method::POST, "/api/v1/generate", &[], Some(request))
            .await
    }
}
