mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tenants::HttpTenantsClient;

use crate::commands::Commands;
use crate::config::{AppConfig, CliOverrides};

/// tenantctl - tenant administration for dashboards security backends
#[derive(Parser)]
#[command(name = "tenantctl")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Acting user name (overrides config)
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        base_url: cli.base_url,
        username: cli.username,
        verbose: cli.verbose,
    });

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("no command given; see `tenantctl --help`");
    };

    let mut stdout = std::io::stdout().lock();

    if !command.needs_backend() {
        return command.run_offline(&config, &mut stdout);
    }

    let client = HttpTenantsClient::from_config(&config.client)
        .context("failed to configure tenants backend client")?;
    tracing::debug!(base_url = %config.client.base_url, "dispatching command");

    command.run(&config, &client, &mut stdout).await
}
