//! # Documents API
//!
//! Upload and management of documents inside a dataset.
//!
//! Upload is the one operation that does not send JSON: the file is streamed
//! as a `multipart/form-data` body together with optional tag, metadata, and
//! document-id fields. The response comes back in the same envelope as every
//! other endpoint and is decoded by the same routine.
//!
//! ## Endpoints
//!
//! - `POST /api/v1/datasets/{id}/documents` - upload (multipart)
//! - `GET /api/v1/datasets/{id}/documents` - list documents
//! - `GET /api/v1/datasets/{id}/documents/{docId}` - fetch one document
//! - `PATCH /api/v1/datasets/{id}/documents/{docId}` - update tags/metadata
//! - `DELETE /api/v1/datasets/{id}/documents/{docId}` - delete a document
//! - `POST /api/v1/datasets/{id}/documents/batch-delete` - delete many

use std::collections::HashMap;

use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{decode_and_classify, to_network_error, Client, NO_BODY};
use crate::error::Error;
use crate::types::Document;

// =============================================================================
// Request Types
// =============================================================================

/// Request to upload a document into a dataset.
///
/// `content` accepts anything convertible into a request body: in-memory
/// bytes, a string, or a stream. The bytes are sent as-is, without
/// transcoding.
///
/// # Example
///
/// ```rust
/// use raglite_sdk::documents::UploadDocumentRequest;
///
/// let request = UploadDocumentRequest {
///     dataset_id: "ds_1".to_string(),
///     filename: "guide.md".to_string(),
///     content: "# Guide\n".into(),
///     tags: vec!["manual".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug)]
pub struct UploadDocumentRequest {
    pub dataset_id: String,
    /// When set, the upload replaces this document's content in place
    /// instead of creating a new one.
    pub document_id: Option<String>,
    pub filename: String,
    pub content: reqwest::Body,
    /// Serialized as a JSON array field when non-empty, omitted otherwise.
    pub tags: Vec<String>,
    /// Serialized as a JSON object field when present; an explicitly empty
    /// map still goes on the wire as `{}`.
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl Default for UploadDocumentRequest {
    fn default() -> Self {
        Self {
            dataset_id: String::new(),
            document_id: None,
            filename: String::new(),
            content: reqwest::Body::from(Vec::new()),
            tags: Vec::new(),
            metadata: None,
        }
    }
}

/// Partial update of a document's tags and metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize)]
struct BatchDeleteBody<'a> {
    document_ids: &'a [String],
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from uploading a document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadDocumentResponse {
    pub document_id: String,
    /// Ingestion status at upload time, usually `pending`.
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub filename: String,
    #[serde(default)]
    pub title: String,
    /// Stored size in bytes.
    pub size: i64,
}

/// Response from listing documents.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListDocumentsResponse {
    pub documents: Vec<Document>,
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
    /// Upload a document.
    ///
    /// The file content is streamed into a multipart `file` part under the
    /// given filename; the form boundary and `Content-Type` header are
    /// generated together so they always match.
    ///
    /// # Returns
    ///
    /// The server's ingestion receipt. Processing continues asynchronously
    /// server-side; poll [`get_document`](Self::get_document) for status.
    pub async fn upload_document(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<UploadDocumentResponse, Error> {
        let file = Part::stream(request.content)
            .file_name(request.filename)
            .mime_str("application/octet-stream")
            .map_err(|e| Error::Encode {
                message: format!("failed to build file part: {}", e),
            })?;

        let mut form = Form::new().part("file", file);

        if !request.tags.is_empty() {
            let tags = serde_json::to_string(&request.tags).map_err(|e| Error::Encode {
                message: format!("failed to serialize tags: {}", e),
            })?;
            form = form.text("tags", tags);
        }

        if let Some(metadata) = &request.metadata {
            let metadata = serde_json::to_string(metadata).map_err(|e| Error::Encode {
                message: format!("failed to serialize metadata: {}", e),
            })?;
            form = form.text("metadata", metadata);
        }

        if let Some(document_id) = request.document_id {
            form = form.text("document_id", document_id);
        }

        let path = format!("/api/v1/datasets/{}/documents", request.dataset_id);
        let url = self.endpoint(&path, &[])?;

        let response = self
            .authorize(self.http().post(url))
            .multipart(form)
            .send()
            .await
            .map_err(to_network_error)?;

        let status = response.status();
        debug!(
            "[api] upload response status: {} ({})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown")
        );

        let body = response.bytes().await.map_err(to_network_error)?;
        decode_and_classify(status, &body)
    }

    /// List the documents in a dataset.
    pub async fn list_documents(&self, dataset_id: &str) -> Result<ListDocumentsResponse, Error> {
        let path = format!("/api/v1/datasets/{}/documents", dataset_id);
        self.request(Method::GET, &path, &[], NO_BODY).await
    }

    /// Fetch one document by id.
    pub async fn get_document(
        &self,
        dataset_id: &str,
        document_id: &str,
    ) -> Result<Document, Error> {
        let path = format!("/api/v1/datasets/{}/documents/{}", dataset_id, document_id);
        self.request(Method::GET, &path, &[], NO_BODY).await
    }

    /// Update a document's tags and metadata. Only the fields present in
    /// the request are changed.
    pub async fn update_document(
        &self,
        dataset_id: &str,
        document_id: &str,
        request: &UpdateDocumentRequest,
    ) -> Result<Document, Error> {
        let path = format!("/api/v1/datasets/{}/documents/{}", dataset_id, document_id);
        self.request(Method::PATCH, &path, &[], Some(request)).await
    }

    /// Delete a document.
    pub async fn delete_document(&self, dataset_id: &str, document_id: &str) -> Result<(), Error> {
        let path = format!("/api/v1/datasets/{}/documents/{}", dataset_id, document_id);
        self.request_no_content(Method::DELETE, &path, NO_BODY).await
    }

    /// Delete several documents in one call.
    ///
    /// An empty id list is a successful no-op: no request is issued.
    pub async fn batch_delete_documents(
        &self,
        dataset_id: &str,
        document_ids: &[String],
    ) -> Result<(), Error> {
        if document_ids.is_empty() {
            return Ok(());
        }

        let path = format!("/api/v1/datasets/{}/documents/batch-delete", dataset_id);
        let body = BatchDeleteBody { document_ids };
        self.request_no_content(Method::POST, &path, Some(&body)).await
    }
}
