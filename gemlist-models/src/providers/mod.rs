//! Model registry trait and implementations.
//!
//! The [`ModelRegistry`] trait is the seam between the lister and the remote
//! service. [`GeminiClient`] talks to the Gemini API; tests substitute an
//! in-memory registry.
//!
//! # Example
//!
//! ```ignore
//! use gemlist_models::providers::{GeminiClient, ModelRegistry};
//! use tokio_stream::StreamExt;
//!
//! let client = GeminiClient::new(api_key)?;
//! let mut models = client.list_models().await?;
//! while let Some(model) = models.next().await {
//!     println!("{}", model.name);
//! }
//! ```

mod gemini;

use std::pin::Pin;

use async_trait::async_trait;
use tokio_stream::Stream;

pub use gemini::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, GeminiClient};

use crate::{ModelDescriptor, Result};

/// A lazily consumed sequence of model descriptors.
///
/// Each call to [`ModelRegistry::list_models`] produces a fresh stream that
/// starts from the beginning of the remote collection.
pub type ModelStream = Pin<Box<dyn Stream<Item = ModelDescriptor> + Send>>;

/// A remote collection of models that can be listed.
///
/// # Example Implementation
///
/// ```ignore
/// use async_trait::async_trait;
/// use gemlist_models::{ModelDescriptor, ModelRegistry, ModelStream, Result};
///
/// struct StaticRegistry(Vec<ModelDescriptor>);
///
/// #[async_trait]
/// impl ModelRegistry for StaticRegistry {
///     fn name(&self) -> &str {
///         "static"
///     }
///
///     async fn list_models(&self) -> Result<ModelStream> {
///         Ok(Box::pin(tokio_stream::iter(self.0.clone())))
///     }
/// }
/// ```
#[async_trait]
pub trait ModelRegistry: Send + Sync {
    /// Returns the registry name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Request the full collection of models.
    ///
    /// # Errors
    ///
    /// - `Error::Transport` when the request cannot be completed
    /// - `Error::Authentication` when the credential is rejected
    /// - `Error::RemoteService` for any other non-success response
    async fn list_models(&self) -> Result<ModelStream>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    struct MockRegistry {
        models: Vec<ModelDescriptor>,
    }

    #[async_trait]
    impl ModelRegistry for MockRegistry {
        fn name(&self) -> &str {
            "mock"
        }

        async fn list_models(&self) -> Result<ModelStream> {
            Ok(Box::pin(tokio_stream::iter(self.models.clone())))
        }
    }

    #[tokio::test]
    async fn each_listing_restarts_from_the_beginning() {
        let registry = MockRegistry {
            models: vec![
                ModelDescriptor::new("models/a", ["generateContent"]),
                ModelDescriptor::new("models/b", ["embedContent"]),
            ],
        };

        let mut first = registry.list_models().await.unwrap();
        assert_eq!(first.next().await.unwrap().name, "models/a");

        let second: Vec<_> = registry.list_models().await.unwrap().collect().await;
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].name, "models/a");
    }

    #[test]
    fn registry_is_object_safe() {
        let registry: Box<dyn ModelRegistry> = Box::new(MockRegistry { models: vec![] });
        assert_eq!(registry.name(), "mock");
    }
}
