//! API key management commands.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use dialoguer::{Password, theme::ColorfulTheme};
use gemlist_models::auth::{CredentialSource, CredentialStore};

use crate::config::ConfigLoader;

/// Keyring service name.
const SERVICE_NAME: &str = "gemlist";

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Show where the API key is read from
    Status,
    /// Store the API key in the system keyring
    Set,
    /// Delete the API key from the system keyring
    Delete,
}

/// Build the credential store, optionally checking an extra env var first.
pub fn credential_store(env_var: Option<String>) -> CredentialStore {
    let store = CredentialStore::new(SERVICE_NAME);
    match env_var {
        Some(var) => store.with_env_var(var),
        None => store.with_env_fallback(),
    }
}

pub fn run(args: AuthArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let store = credential_store(config.api.api_key_env);

    match args.command {
        AuthCommand::Status => status(&store),
        AuthCommand::Set => set(&store),
        AuthCommand::Delete => delete(&store),
    }
}

fn status(store: &CredentialStore) -> Result<()> {
    println!("{}", describe_source(store.source().as_ref()));
    println!("Environment variables checked: {}", store.env_vars().join(", "));
    Ok(())
}

fn set(store: &CredentialStore) -> Result<()> {
    println!("Enter your Gemini API key (or set GEMINI_API_KEY)");

    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("API key")
        .interact()?;

    if key.trim().is_empty() {
        bail!("API key cannot be empty");
    }

    store.set(key.trim())?;
    println!("API key saved to keyring.");
    Ok(())
}

fn delete(store: &CredentialStore) -> Result<()> {
    match store.delete() {
        Ok(()) => println!("API key deleted from keyring."),
        Err(gemlist_models::Error::CredentialsNotFound(_)) => {
            println!("No API key stored in keyring.")
        }
        Err(e) => bail!("Failed to delete API key: {}", e),
    }
    Ok(())
}

fn describe_source(source: Option<&CredentialSource>) -> String {
    match source {
        Some(CredentialSource::Keyring) => "API key: configured (keyring)".to_string(),
        Some(CredentialSource::Environment(var)) => {
            format!("API key: configured (environment: {var})")
        }
        None => "API key: not configured".to_string(),
    }
}
