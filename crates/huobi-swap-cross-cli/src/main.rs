/*
[INPUT]:  CLI arguments, YAML configuration file, credential environment variables
[OUTPUT]: Endpoint payload printed as JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use huobi_swap_cross_adapter::HuobiSwapCrossClient;
use huobi_swap_cross_cli::command::Command;
use huobi_swap_cross_cli::config::{ACCESS_KEY_ENV, CliConfig, SECRET_KEY_ENV};

#[derive(Parser, Debug)]
#[command(name = "huobi-swap-cross", version, about = "Cross-margined USDT swap REST client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        dry_run = args.dry_run,
        "starting huobi-swap-cross"
    );

    let config = load_config(&args.config_path)?;
    info!(host = %config.host, "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .context("a command is required unless --dry-run is given")?;

    let client = HuobiSwapCrossClient::with_config(
        &config.host,
        config.credentials(),
        config.client_config(),
    )
    .context("build client")?;

    info!(?command, private = command.is_private(), "running command");
    let payload = command.run(&client).await.context("request failed")?;

    let rendered = serde_json::to_string_pretty(&payload).context("render payload")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    let config = CliConfig::from_file(path_str)
        .context("load config")?
        .with_credential_overrides(
            std::env::var(ACCESS_KEY_ENV).ok(),
            std::env::var(SECRET_KEY_ENV).ok(),
        );
    config.validate().context("validate config")?;
    Ok(config)
}
