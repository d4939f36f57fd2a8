//! Command line front end for devchain network profiles.

use clap::{Parser, Subcommand};
use devchain_config::{ConfigFormat, ConfigUtils};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "devchain")]
#[command(about = "Inspect and validate contract deployment network profiles")]
struct Cli {
    /// Configuration file; built-in profiles are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one network profile, or the whole configuration
    Show {
        #[arg(short, long)]
        network: Option<String>,
    },
    /// Load and validate the configuration
    Validate,
    /// List configured network names
    Networks,
    /// Print the configuration fingerprint
    Fingerprint,
    /// Print a configuration template
    Template {
        #[arg(default_value = "default")]
        name: String,
    },
    /// Convert a configuration file between TOML and JSON
    Convert {
        input: PathBuf,
        output: PathBuf,
        #[arg(short, long, value_parser = parse_format)]
        format: ConfigFormat,
    },
}

fn parse_format(s: &str) -> Result<ConfigFormat, String> {
    s.parse().map_err(|e: devchain_config::ConfigError| e.to_string())
}

fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let resolved = commands::resolve_config(cli.config.as_deref(), &ConfigUtils::search_paths());
    let config = resolved.as_deref();
    match cli.command {
        Commands::Show { network } => commands::show(config, network.as_deref()).await,
        Commands::Validate => commands::validate(config).await,
        Commands::Networks => commands::networks(config).await,
        Commands::Fingerprint => commands::fingerprint(config).await,
        Commands::Template { name } => commands::template(&name),
        Commands::Convert {
            input,
            output,
            format,
        } => commands::convert(&input, &output, format).await,
    }
}
