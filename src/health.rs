//! # Health API

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Client, NO_BODY};
use crate::error::Error;

/// Response from the health endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    /// `ok` when the service is up.
    pub status: String,
    pub service: String,
}

impl Client {
    /// Check that the service is reachable and healthy.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        self.request(Method::GET, "/health", &[], NO_BODY).await
    }
}
