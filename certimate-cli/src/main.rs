//! Command-line host for the Certimate record editors.
//!
//! Lists the provider catalog, validates and saves access / deploy / notify
//! records through the same form engine the console uses. Records are kept
//! in the JSON store configured by `AppConfig`.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use certimate_app::adapters::JsonFileRecordRepository;
use certimate_app::{AppConfig, AppStateBuilder};
use certimate_core::i18n::Language;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::RecordArgs;

#[derive(Debug, Parser)]
#[command(
    name = "certimate",
    version,
    about = "Edit certimate access, deploy and notify records"
)]
struct Cli {
    /// Config file (defaults to `<config dir>/certimate/config.json`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Record store, overriding the configured `storePath`.
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Language of labels and messages, overriding the configured one.
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the providers of a record kind.
    Providers {
        kind: KindArg,
        /// Only providers usable for this purpose.
        #[arg(long)]
        usage: Option<UsageArg>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Validate a record without saving it.
    Validate(RecordArgs),
    /// Validate and save a record.
    Save(RecordArgs),
    /// List saved records of a kind.
    List {
        kind: KindArg,
        /// Only records of this provider.
        #[arg(long)]
        provider: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum KindArg {
    Access,
    Deploy,
    Notify,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum UsageArg {
    Dns,
    Hosting,
    DnsHosting,
    Ca,
    Notification,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    if let Some(ref store) = cli.store {
        config.store_path.clone_from(store);
    }
    if let Some(ref code) = cli.lang {
        config.language = Language::from_code(code)
            .with_context(|| format!("unsupported language: {code}"))?;
    }
    Ok(config)
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<bool> {
    let repository = JsonFileRecordRepository::open(&config.store_path)
        .await
        .with_context(|| format!("failed to open store {}", config.store_path.display()))?;
    let state = AppStateBuilder::new()
        .config(config)
        .repository(Arc::new(repository))
        .build()?;

    match cli.command {
        Command::Providers { kind, usage, json } => {
            commands::providers(&state, kind, usage, json)?;
            Ok(true)
        }
        Command::Validate(args) => commands::validate(&state, &args).await,
        Command::Save(args) => commands::save(&state, &args).await,
        Command::List { kind, provider } => {
            commands::list(&state, kind, provider).await?;
            Ok(true)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);
    tracing::debug!("Using record store {}", config.store_path.display());

    match run(cli, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
