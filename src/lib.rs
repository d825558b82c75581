//! # RAGLite SDK
//!
//! Typed async client for the RAGLite retrieval-augmented-generation API:
//! model and dataset management, document upload, search, question
//! answering, and generation over a JSON REST backend.
//!
//! ## Modules
//!
//! - [`client`] - client construction and the shared request pipeline
//! - [`error`] - error types and status-code classification
//! - [`types`] - wire types shared across endpoints
//! - [`models`], [`datasets`], [`documents`], [`search`], [`qa`],
//!   [`generate`], [`health`] - endpoint bindings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use raglite_sdk::{Client, QaRequest};
//!
//! async fn answer() -> Result<String, raglite_sdk::Error> {
//!     let client = Client::builder("http://localhost:8080")
//!         .api_key(std::env::var("RAGLITE_API_KEY").unwrap_or_default())
//!         .build()?;
//!
//!     let response = client
//!         .ask(&QaRequest {
//!             query: "How do I rotate credentials?".to_string(),
//!             dataset_id: "ds_1".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     Ok(response.answer)
//! }
//! ```
//!
//! One [`Client`] can serve any number of concurrent calls; it holds no
//! per-call state. The SDK never retries: wrap calls externally for
//! resilience.

pub mod client;
pub mod datasets;
pub mod documents;
pub mod error;
pub mod generate;
pub mod health;
pub mod models;
pub mod qa;
pub mod search;
pub mod types;

// Re-export commonly used types for convenience
pub use client::{Client, ClientBuilder, DEFAULT_TIMEOUT};
pub use datasets::*;
pub use documents::*;
pub use error::{ApiError, Error};
pub use generate::*;
pub use health::*;
pub use models::*;
pub use qa::*;
pub use search::*;
pub use types::*;
