use std::path::PathBuf;

use airfeed::config::Config;
use airfeed::{fetch_source, format_document, HttpFetcher, IndiaAdapter};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "airfeed", about = "Fetch and normalise air quality station feeds")]
struct Cli {
    /// Config file (defaults to ~/.config/airfeed/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch every active source, or just the named one, and print the
    /// normalised JSON.
    Fetch {
        #[arg(long)]
        source: Option<String>,
    },
    /// Normalise a document already on disk.
    Normalize {
        file: PathBuf,
        /// IANA timezone the document's clocks use.
        #[arg(long, default_value = "Asia/Kolkata")]
        timezone: String,
    },
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(sources = config.sources.len(), "config loaded");

    match cli.command {
        Command::Fetch { source } => fetch(&config, source.as_deref()).await,
        Command::Normalize { file, timezone } => {
            let tz: chrono_tz::Tz = timezone
                .parse()
                .map_err(|_| anyhow::anyhow!("unknown timezone {timezone:?}"))?;
            let raw = std::fs::read_to_string(&file)?;
            let label = file.display().to_string();
            match format_document(&IndiaAdapter, &label, &raw, tz) {
                Ok(normalized) => {
                    println!("{}", serde_json::to_string_pretty(&normalized)?);
                    Ok(())
                }
                Err(e) => anyhow::bail!("{label}: {}", e.message()),
            }
        }
    }
}

async fn fetch(config: &Config, only: Option<&str>) -> anyhow::Result<()> {
    let sources: Vec<_> = match only {
        Some(name) => vec![config
            .source(name)
            .ok_or_else(|| anyhow::anyhow!("no source named {name:?} in config"))?],
        None => config.active_sources().collect(),
    };
    if sources.is_empty() {
        anyhow::bail!("no active sources configured");
    }

    let fetcher = HttpFetcher::new(config.fetch.timeout());
    let mut failed = 0usize;

    for source in sources {
        match fetch_source(config, &fetcher, source).await {
            Ok(normalized) => println!("{}", serde_json::to_string_pretty(&normalized)?),
            Err(e) => {
                failed += 1;
                eprintln!("{}: {}", source.name, e.message());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} source(s) failed");
    }
    Ok(())
}
