//! SCA CLI - Command line tool for satellite snow cover analysis.

use clap::Parser;
use sca_ee::ClientConfig;

#[derive(Parser)]
#[command(
    name = "sca-cli",
    version,
    about = "Satellite snow cover analysis toolkit"
)]
struct Cli {
    /// Base URL of the platform endpoint
    #[arg(long, default_value = sca_ee::DEFAULT_BASE_URL)]
    base_url: String,

    /// Cloud project hosting the watershed assets
    #[arg(long, default_value = sca_ee::DEFAULT_PROJECT)]
    project: String,

    /// Bearer token; falls back to the EE_TOKEN environment variable
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: sca_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ClientConfig {
        base_url: cli.base_url,
        project: cli.project,
        token: cli.token.or_else(|| std::env::var("EE_TOKEN").ok()),
    };
    sca_cmd::run(config, cli.command).await
}
