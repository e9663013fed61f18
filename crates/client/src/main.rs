//! Client entry point.

use anyhow::Result;
use c14l_client::ClientConfig;
use c14l_client::commands::{Click, Locate, Render};
use c14l_client::logging::setup_logging;
use clap::Parser;
use runtime::RuntimeConfig;

/// Render widget pages and submit fuzzed locations
#[derive(Parser)]
#[command(name = "c14l")]
#[command(about = "Widget pages and privacy-preserving location submission", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Upgrade a page and print its markup
    Render(Render),

    /// Dispatch clicks and print menu events
    Click(Click),

    /// Fuzz a position and print the submitted form
    Locate(Locate),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let client_config = ClientConfig::from_env();
    let _guard = setup_logging(&client_config, cli.verbose)?;

    let config = RuntimeConfig::from_env();
    tracing::debug!(?config, "runtime configured");

    match cli.command {
        Command::Render(cmd) => cmd.execute(&config),
        Command::Click(cmd) => cmd.execute(&config),
        Command::Locate(cmd) => cmd.execute(&config).await,
    }
}
