mod config;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use relay_core::{DiscordForwarder, RelayConfig};

fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    if GIT_HASH.is_empty() {
        VERSION
    } else {
        Box::leak(format!("{VERSION} ({GIT_HASH})").into_boxed_str())
    }
}

/// Relay uptime monitor status webhooks to a chat channel.
#[derive(Parser)]
#[command(name = "uptime-relay", version = version_string(), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook receiver.
    Serve {
        /// Listen address (e.g. 127.0.0.1:8080). Overrides http_port.
        #[arg(short, long)]
        listen: Option<SocketAddr>,

        /// Path to TOML config file.
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },
    /// Load the config file and report settings that would break delivery.
    Check {
        /// Path to TOML config file.
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen, config } => run_serve(listen, &config).await,
        Commands::Check { config } => run_check(&config),
    }
}

fn load_or_exit(path: &Path) -> RelayConfig {
    match config::AppConfig::load(path) {
        Ok(c) => c.to_relay_config(),
        Err(e) => {
            init_tracing(false);
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

async fn run_serve(listen_override: Option<SocketAddr>, config_path: &Path) {
    let relay_config = load_or_exit(config_path);
    init_tracing(relay_config.prod);
    tracing::info!(path = %config_path.display(), prod = relay_config.prod, "Loaded config file");

    for problem in relay_config.problems() {
        tracing::warn!("Config: {}", problem);
    }

    let listen = listen_override
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], relay_config.http_port)));

    let client = match DiscordForwarder::build_client() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let state = relay_api::state::AppState::with_discord(relay_config, client);

    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%listen, error = %e, "Failed to bind listen address");
            std::process::exit(1);
        }
    };

    tracing::info!(%listen, "Starting uptime relay");
    if let Err(e) = relay_api::serve(listener, state, relay_api::shutdown_signal()).await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}

fn run_check(config_path: &Path) {
    let relay_config = load_or_exit(config_path);
    let problems = relay_config.problems();

    if problems.is_empty() {
        println!("{}: ok", config_path.display());
        return;
    }

    for problem in &problems {
        eprintln!("{}: {}", config_path.display(), problem);
    }
    std::process::exit(1);
}

/// Production logs are JSON at `info`; otherwise readable lines at `debug`.
/// `RUST_LOG` overrides either default.
fn init_tracing(prod: bool) {
    let default_level = if prod { "info" } else { "debug" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if prod {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}
