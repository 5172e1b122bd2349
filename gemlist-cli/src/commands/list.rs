//! Model listing command.
//!
//! Prints one group of model names per capability, e.g.
//!
//! ```text
//! List of models that support generateContent:
//! models/gemini-1.5-flash
//! List of models that support embedContent:
//! models/text-embedding-004
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use gemlist_models::{Capability, GeminiClient, ModelLister};
use tracing::debug;

use super::auth::credential_store;
use crate::config::ConfigLoader;

/// List command arguments.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Capability to list, repeatable (default: generateContent, embedContent)
    #[arg(short, long = "capability", value_name = "TAG")]
    pub capabilities: Vec<String>,

    /// Fetch the model list once and filter it for every group
    #[arg(long)]
    pub fetch_once: bool,

    /// Read the API key from this environment variable first
    #[arg(long, value_name = "VAR")]
    pub api_key_env: Option<String>,
}

/// Run list command.
pub async fn run(args: ListArgs) -> Result<()> {
    let config = ConfigLoader::load()?;

    let capabilities = resolve_capabilities(&args.capabilities, &config.list.capabilities);
    let fetch_once = args.fetch_once || config.list.fetch_once;

    let store = credential_store(args.api_key_env.or(config.api.api_key_env));
    let api_key = store.get().with_context(|| {
        format!(
            "no Gemini API key found; run `gemlist auth set` or set one of: {}",
            store.env_vars().join(", ")
        )
    })?;

    let client = GeminiClient::with_base_url(api_key, &config.api.base_url)?
        .api_version(&config.api.api_version)
        .page_size(config.api.page_size);
    debug!(
        base_url = client.base_url(),
        fetch_once,
        groups = capabilities.len(),
        "listing models"
    );

    let lister = ModelLister::new(Arc::new(client)).fetch_once(fetch_once);
    let mut stdout = std::io::stdout();
    lister.run(&mut stdout, &capabilities).await?;

    Ok(())
}

/// Flags replace the configured groups; blank tags are dropped.
fn resolve_capabilities(flags: &[String], configured: &[String]) -> Vec<Capability> {
    let source = if flags.is_empty() { configured } else { flags };
    source
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(Capability::from)
        .collect()
}
