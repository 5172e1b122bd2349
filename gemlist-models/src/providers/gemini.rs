//! Gemini (Generative Language API) model registry.
//!
//! Lists models from `GET /{version}/models`, authenticating with the
//! `x-goog-api-key` header.
//!
//! # Example
//!
//! ```ignore
//! use gemlist_models::providers::GeminiClient;
//!
//! let client = GeminiClient::new(api_key)?;  // generativelanguage.googleapis.com
//! let client = GeminiClient::with_base_url(api_key, "http://localhost:8080")?;
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ModelRegistry, ModelStream};
use crate::auth::ApiKey;
use crate::{Error, ModelDescriptor, Result};

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Requested page size. The API caps this at 1000.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

const API_KEY_HEADER: &str = "x-goog-api-key";

// ────────────────────────────────────────────────────────────────────────────
// Gemini API Response Types
// ────────────────────────────────────────────────────────────────────────────

/// Response from the `models.list` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Google API error envelope: `{"error": {...}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}

/// Map a non-success response to the crate's error taxonomy.
fn classify_error(status: StatusCode, body: &str) -> Error {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();

    let key_rejected = parsed.as_ref().is_some_and(|e| {
        e.error.status == "UNAUTHENTICATED"
            || e.error
                .details
                .iter()
                .any(|d| d.reason.as_deref() == Some("API_KEY_INVALID"))
    });

    let message = match parsed {
        Some(e) if !e.error.message.is_empty() => e.error.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    if key_rejected || matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        Error::Authentication(message)
    } else {
        Error::RemoteService {
            status: status.as_u16(),
            message,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Authenticated handle to the Gemini model registry.
///
/// Construction performs no network I/O; a rejected key surfaces on the
/// first [`list_models`](ModelRegistry::list_models) call.
pub struct GeminiClient {
    base_url: String,
    api_version: String,
    page_size: u32,
    api_key: ApiKey,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client against the public Gemini endpoint.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidApiKey` if the key is blank.
    pub fn new(api_key: ApiKey) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(api_key: ApiKey, base_url: impl Into<String>) -> Result<Self> {
        if api_key.is_blank() {
            return Err(Error::InvalidApiKey);
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            base_url,
            api_version: DEFAULT_API_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            api_key,
            client: reqwest::Client::new(),
        })
    }

    /// Override the API version path segment (e.g. `v1`).
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Override the requested page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Get the base URL for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn models_url(&self) -> String {
        format!("{}/{}/models", self.base_url, self.api_version)
    }

    /// Fetch one page of models from the API.
    pub async fn fetch_models(&self) -> Result<Vec<ModelDescriptor>> {
        let url = self.models_url();
        debug!(%url, page_size = self.page_size, "listing models");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .query(&[("pageSize", self.page_size)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_error(status, &body);
            debug!(status = status.as_u16(), error = %err, "model listing failed");
            return Err(err);
        }

        let list: ListModelsResponse = response.json().await?;

        if let Some(token) = list.next_page_token.as_deref().filter(|t| !t.is_empty()) {
            warn!(
                next_page_token = token,
                "model listing has more pages; only the first is shown"
            );
        }

        debug!(count = list.models.len(), "received models");
        Ok(list.models)
    }
}

#[async_trait]
impl ModelRegistry for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn list_models(&self) -> Result<ModelStream> {
        let models = self.fetch_models().await?;
        Ok(Box::pin(tokio_stream::iter(models)))
    }
}
