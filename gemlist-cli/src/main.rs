use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "gemlist", about = "List Gemini models by capability")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List models grouped by capability (default)
    List(commands::list::ListArgs),
    /// Manage the stored API key
    Auth(commands::auth::AuthArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the listing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => commands::list::run(commands::list::ListArgs::default()).await,
        Some(Commands::List(args)) => commands::list::run(args).await,
        Some(Commands::Auth(args)) => commands::auth::run(args),
        Some(Commands::Config(args)) => commands::config::run(args),
    }
}
