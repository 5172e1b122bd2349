use gemlist_models::Capability;
use gemlist_models::providers::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawGemlistConfig {
    #[serde(default)]
    pub api: RawApiConfig,

    #[serde(default)]
    pub list: RawListConfig,
}

/// API config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawApiConfig {
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub page_size: Option<u32>,
    pub api_key_env: Option<String>,
}

/// Listing config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawListConfig {
    pub capabilities: Option<Vec<String>>,
    pub fetch_once: Option<bool>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GemlistConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Generative Language API
    pub base_url: String,

    /// API version path segment
    pub api_version: String,

    /// Models requested per listing call
    pub page_size: u32,

    /// Extra environment variable to read the API key from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            api_key_env: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Capability groups to print, in order
    pub capabilities: Vec<String>,

    /// Fetch the model list once and filter it for every group
    pub fetch_once: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            capabilities: Capability::defaults()
                .into_iter()
                .map(|c| c.to_string())
                .collect(),
            fetch_once: false,
        }
    }
}
