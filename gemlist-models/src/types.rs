//! Core types for model listing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A capability tag advertised by a model, e.g. `generateContent`.
///
/// # Examples
///
/// ```
/// use gemlist_models::Capability;
///
/// let cap = Capability::generate_content();
/// assert_eq!(cap.as_str(), "generateContent");
/// assert_eq!(Capability::from("embedContent"), Capability::embed_content());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    /// Tag for text generation.
    pub const GENERATE_CONTENT: &'static str = "generateContent";
    /// Tag for embeddings.
    pub const EMBED_CONTENT: &'static str = "embedContent";

    /// Create a capability from any tag string.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The `generateContent` capability.
    pub fn generate_content() -> Self {
        Self::new(Self::GENERATE_CONTENT)
    }

    /// The `embedContent` capability.
    pub fn embed_content() -> Self {
        Self::new(Self::EMBED_CONTENT)
    }

    /// The default groups printed by the lister, in order.
    pub fn defaults() -> Vec<Self> {
        vec![Self::generate_content(), Self::embed_content()]
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Capability {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Capability {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A model as described by the remote registry.
///
/// Field names follow the Gemini `models.list` payload. Only `name` is
/// required; everything else defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Resource name in `models/{model}` format.
    pub name: String,
    /// Action tags the model supports (e.g. `generateContent`, `embedContent`).
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_token_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_token_limit: Option<u32>,
}

impl ModelDescriptor {
    /// Create a descriptor with a name and its supported actions.
    pub fn new<I, S>(name: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            supported_generation_methods: actions.into_iter().map(Into::into).collect(),
            display_name: None,
            description: None,
            version: None,
            input_token_limit: None,
            output_token_limit: None,
        }
    }

    /// Check whether the model advertises the given capability.
    pub fn supports(&self, capability: &Capability) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == capability.as_str())
    }
}
