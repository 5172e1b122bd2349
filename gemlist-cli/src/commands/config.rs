//! Configuration inspection commands.

use std::fmt::Write as _;

use crate::config::{ConfigLayer, ConfigLoader, GemlistConfig};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration, defaults included
    Show,
    /// Show config layers in merge order and whether each is loaded
    Path,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let config = ConfigLoader::load()?;
            print!("{}", render_config(&config)?);
        }
        ConfigCommands::Path => print!("{}", render_layers(&ConfigLoader::layers())),
    }
    Ok(())
}

/// Merged config as TOML, preceded by a comment naming its origin.
fn render_config(config: &GemlistConfig) -> Result<String> {
    let mut out = String::from("# merged gemlist configuration (defaults + config layers)\n");
    out.push_str(&toml::to_string_pretty(config)?);
    Ok(out)
}

/// One line per layer; later layers override earlier ones.
fn render_layers(layers: &[ConfigLayer]) -> String {
    let mut out = String::new();
    for layer in layers {
        let status = if layer.path.is_file() {
            "loaded"
        } else {
            "not found, skipped"
        };
        let _ = writeln!(
            out,
            "{:<8} {} ({})",
            format!("{}:", layer.name),
            layer.path.display(),
            status
        );
    }
    if layers.is_empty() {
        out.push_str("No config layers; using defaults\n");
    }
    out
}
