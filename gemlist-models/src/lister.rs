//! Capability filtering and grouped name output.
//!
//! [`ModelLister`] drives the whole listing: for each capability it lists the
//! registry, keeps the models advertising that capability, and prints their
//! names under a header line.

use std::io::Write;
use std::pin::pin;
use std::sync::Arc;

use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use crate::{Capability, ModelDescriptor, ModelRegistry, Result};

/// Keep only the models whose action set contains `capability`.
///
/// Lazy and order-preserving. Empty input, or a tag no model carries,
/// yields an empty stream.
pub fn filter_by_capability<S>(
    models: S,
    capability: &Capability,
) -> impl Stream<Item = ModelDescriptor> + use<S>
where
    S: Stream<Item = ModelDescriptor>,
{
    let capability = capability.clone();
    models.filter(move |model| model.supports(&capability))
}

/// Write the header for `capability`, then one model name per line.
///
/// Returns the number of names written.
pub async fn print_names<W, S>(out: &mut W, capability: &Capability, models: S) -> Result<usize>
where
    W: Write,
    S: Stream<Item = ModelDescriptor>,
{
    writeln!(out, "List of models that support {capability}:")?;

    let mut models = pin!(models);
    let mut count = 0;
    while let Some(model) = models.next().await {
        writeln!(out, "{}", model.name)?;
        count += 1;
    }

    out.flush()?;
    Ok(count)
}

/// Lists a registry once per capability group and prints the matches.
pub struct ModelLister {
    registry: Arc<dyn ModelRegistry>,
    fetch_once: bool,
}

impl ModelLister {
    pub fn new(registry: Arc<dyn ModelRegistry>) -> Self {
        Self {
            registry,
            fetch_once: false,
        }
    }

    /// Fetch the collection a single time and filter it for every group.
    ///
    /// Off by default: each group issues its own listing call.
    pub fn fetch_once(mut self, enabled: bool) -> Self {
        self.fetch_once = enabled;
        self
    }

    /// Print one group per capability, in order.
    ///
    /// Each group's listing completes before its header is written, so a
    /// failed first call leaves `out` untouched. Groups already printed stay
    /// printed when a later call fails.
    pub async fn run<W: Write>(&self, out: &mut W, capabilities: &[Capability]) -> Result<()> {
        if capabilities.is_empty() {
            return Ok(());
        }

        let registry = self.registry.name();

        if self.fetch_once {
            let models: Vec<ModelDescriptor> = self.registry.list_models().await?.collect().await;
            debug!(registry, count = models.len(), "fetched models once");

            for capability in capabilities {
                let matching = filter_by_capability(tokio_stream::iter(models.clone()), capability);
                let printed = print_names(out, capability, matching).await?;
                debug!(registry, %capability, printed, "printed group");
            }
            return Ok(());
        }

        for capability in capabilities {
            let models = self.registry.list_models().await?;
            let printed = print_names(out, capability, filter_by_capability(models, capability)).await?;
            debug!(registry, %capability, printed, "printed group");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ModelStream};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory registry that counts calls and can fail on a given call.
    struct MockRegistry {
        models: Vec<ModelDescriptor>,
        calls: AtomicUsize,
        fail_on_call: Option<usize>,
    }

    impl MockRegistry {
        fn new(models: Vec<ModelDescriptor>) -> Self {
            Self {
                models,
                calls: AtomicUsize::new(0),
                fail_on_call: None,
            }
        }

        fn failing_on(mut self, call: usize) -> Self {
            self.fail_on_call = Some(call);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelRegistry for MockRegistry {
        fn name(&self) -> &str {
            "mock"
        }

        async fn list_models(&self) -> Result<ModelStream> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on_call == Some(call) {
                return Err(Error::Authentication("API key not valid".to_string()));
            }
            Ok(Box::pin(tokio_stream::iter(self.models.clone())))
        }
    }

    fn scenario_models() -> Vec<ModelDescriptor> {
        vec![
            ModelDescriptor::new("gemini-pro", ["generateContent"]),
            ModelDescriptor::new("embed-1", ["embedContent"]),
        ]
    }

    async fn names(models: Vec<ModelDescriptor>, capability: &Capability) -> Vec<String> {
        filter_by_capability(tokio_stream::iter(models), capability)
            .map(|m| m.name)
            .collect()
            .await
    }

    // ────────────────────────────────────────────────────────────────────────────
    // Filter Tests
    // ────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn filter_splits_generate_and_embed() {
        let generate = names(scenario_models(), &Capability::generate_content()).await;
        let embed = names(scenario_models(), &Capability::embed_content()).await;

        assert_eq!(generate, vec!["gemini-pro"]);
        assert_eq!(embed, vec!["embed-1"]);
    }

    #[tokio::test]
    async fn model_with_both_tags_appears_in_both_groups() {
        let models = vec![
            ModelDescriptor::new("dual", ["generateContent", "embedContent"]),
            ModelDescriptor::new("embed-1", ["embedContent"]),
        ];

        let generate = names(models.clone(), &Capability::generate_content()).await;
        let embed = names(models, &Capability::embed_content()).await;

        assert_eq!(generate, vec!["dual"]);
        assert_eq!(embed, vec!["dual", "embed-1"]);
    }

    #[tokio::test]
    async fn filter_preserves_order_and_keeps_each_match_once() {
        let models = vec![
            ModelDescriptor::new("c", ["generateContent"]),
            ModelDescriptor::new("skip", ["countTokens"]),
            ModelDescriptor::new("a", ["countTokens", "generateContent"]),
            ModelDescriptor::new("b", ["generateContent"]),
        ];

        let generate = names(models, &Capability::generate_content()).await;
        assert_eq!(generate, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn filter_is_idempotent() {
        let cap = Capability::generate_content();
        let first = names(scenario_models(), &cap).await;
        let second = names(scenario_models(), &cap).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn filter_empty_collection_yields_nothing() {
        assert!(names(vec![], &Capability::generate_content()).await.is_empty());
    }

    #[tokio::test]
    async fn filter_absent_tag_yields_nothing() {
        let result = names(scenario_models(), &Capability::from("createTunedModel")).await;
        assert!(result.is_empty());
    }

    // ────────────────────────────────────────────────────────────────────────────
    // Output Tests
    // ────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn print_names_writes_header_then_names() {
        let mut out = Vec::new();
        let count = print_names(
            &mut out,
            &Capability::generate_content(),
            tokio_stream::iter(scenario_models()),
        )
        .await
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "List of models that support generateContent:\ngemini-pro\nembed-1\n"
        );
    }

    #[tokio::test]
    async fn print_names_with_no_models_writes_only_header() {
        let mut out = Vec::new();
        let count = print_names(
            &mut out,
            &Capability::embed_content(),
            tokio_stream::iter(Vec::<ModelDescriptor>::new()),
        )
        .await
        .unwrap();

        assert_eq!(count, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "List of models that support embedContent:\n"
        );
    }

    // ────────────────────────────────────────────────────────────────────────────
    // Lister Tests
    // ────────────────────────────────────────────────────────────────────────────

    const EXPECTED: &str = "List of models that support generateContent:\n\
                            gemini-pro\n\
                            List of models that support embedContent:\n\
                            embed-1\n";

    #[tokio::test]
    async fn run_lists_once_per_group_by_default() {
        let registry = Arc::new(MockRegistry::new(scenario_models()));
        let lister = ModelLister::new(registry.clone());

        let mut out = Vec::new();
        lister.run(&mut out, &Capability::defaults()).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
        assert_eq!(registry.calls(), 2);
    }

    #[tokio::test]
    async fn run_with_fetch_once_lists_a_single_time() {
        let registry = Arc::new(MockRegistry::new(scenario_models()));
        let lister = ModelLister::new(registry.clone()).fetch_once(true);

        let mut out = Vec::new();
        lister.run(&mut out, &Capability::defaults()).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
        assert_eq!(registry.calls(), 1);
    }

    #[tokio::test]
    async fn auth_failure_on_first_call_prints_nothing() {
        let registry = Arc::new(MockRegistry::new(scenario_models()).failing_on(1));
        let lister = ModelLister::new(registry.clone());

        let mut out = Vec::new();
        let result = lister.run(&mut out, &Capability::defaults()).await;

        assert!(result.unwrap_err().is_authentication());
        assert!(out.is_empty());
        assert_eq!(registry.calls(), 1);
    }

    #[tokio::test]
    async fn failure_on_second_call_keeps_first_group() {
        let registry = Arc::new(MockRegistry::new(scenario_models()).failing_on(2));
        let lister = ModelLister::new(registry);

        let mut out = Vec::new();
        let result = lister.run(&mut out, &Capability::defaults()).await;

        assert!(result.is_err());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "List of models that support generateContent:\ngemini-pro\n"
        );
    }

    #[tokio::test]
    async fn run_with_fetch_once_and_no_capabilities_does_not_list() {
        let registry = Arc::new(MockRegistry::new(scenario_models()));
        let lister = ModelLister::new(registry.clone()).fetch_once(true);

        let mut out = Vec::new();
        lister.run(&mut out, &[]).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(registry.calls(), 0);
    }

    #[tokio::test]
    async fn run_with_no_capabilities_does_not_list() {
        let registry = Arc::new(MockRegistry::new(scenario_models()));
        let lister = ModelLister::new(registry.clone());

        let mut out = Vec::new();
        lister.run(&mut out, &[]).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(registry.calls(), 0);
    }
}
