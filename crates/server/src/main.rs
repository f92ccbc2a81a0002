use std::future::IntoFuture;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use quill_server::api::{self, AppState};
use quill_server::config::{ConfigOverrides, QuillConfig};
use quill_server::error::ServerError;
use quill_server::{seed, store_factory, telemetry};

/// Quill blog post HTTP server.
#[derive(Parser, Debug)]
#[command(name = "quill-server", about = "Read-only HTTP API for blog posts")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "quill.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Override the MongoDB connection string.
    #[arg(long, env = "MONGO_URL")]
    mongo_url: Option<String>,

    /// Override the store backend (`mongodb` or `memory`).
    #[arg(long)]
    store_backend: Option<String>,

    /// Delete every post and load the fixture before serving.
    #[arg(
        long,
        env = "RESET_DB",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    reset_db: Option<bool>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reseed the configured store from the fixture, then exit.
    Seed,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            store_url: self.mongo_url.clone(),
            store_backend: self.store_backend.clone(),
            reset_db: self.reset_db,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config.with_overrides(cli.overrides()),
        Err(e) => {
            eprintln!("quill-server: {e}");
            return ExitCode::FAILURE;
        }
    };

    telemetry::init(&config.telemetry);

    if !Path::new(&cli.config).exists() {
        info!(path = %cli.config, "config file not found, using defaults");
    }

    let result = match cli.command {
        Some(Commands::Seed) => run_seed(&config).await,
        None => run_server(config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "quill-server failed");
            ExitCode::FAILURE
        }
    }
}

/// Load configuration from the TOML file, or defaults if it does not exist.
fn load_config(path: &str) -> Result<QuillConfig, ServerError> {
    if !Path::new(path).exists() {
        return Ok(QuillConfig::default());
    }
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| ServerError::Config(format!("{path}: {e}")))
}

/// The `seed` subcommand: reseed unconditionally and report.
async fn run_seed(config: &QuillConfig) -> Result<(), ServerError> {
    let store = store_factory::create_store(&config.store).await?;
    let report = seed::seed_from_config(store.as_ref(), &config.seed).await?;
    info!(
        deleted = report.deleted,
        inserted = report.inserted,
        "database seeded"
    );
    Ok(())
}

async fn run_server(config: QuillConfig) -> Result<(), ServerError> {
    let store = store_factory::create_store(&config.store).await?;

    // Seeding finishes (or fails) before the listener accepts anything.
    seed::run_startup_seed(store.as_ref(), &config.seed).await;

    let app = api::router(AppState::new(store));

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "quill-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM. Once a signal has
    // arrived, open connections get `shutdown_timeout_seconds` to finish.
    let (signalled_tx, mut signalled_rx) = tokio::sync::watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signalled_tx.send(true);
        })
        .into_future();

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_seconds);
    let drain_deadline = async move {
        if signalled_rx.wait_for(|signalled| *signalled).await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server => result?,
        () = drain_deadline => {
            warn!(
                timeout_secs = config.server.shutdown_timeout_seconds,
                "shutdown timeout exceeded, dropping open connections"
            );
        }
    }

    info!("quill-server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_reset_db_flag_enables_seeding() {
        let cli = Cli::try_parse_from(["quill-server", "--reset-db"]).unwrap();
        assert_eq!(cli.reset_db, Some(true));
    }

    #[test]
    fn reset_db_accepts_boolish_values() {
        for (raw, expected) in [("true", true), ("1", true), ("off", false), ("no", false)] {
            let cli = Cli::try_parse_from(["quill-server", "--reset-db", raw]).unwrap();
            assert_eq!(cli.reset_db, Some(expected), "{raw}");
        }
    }

    #[test]
    fn reset_db_rejects_other_values() {
        assert!(Cli::try_parse_from(["quill-server", "--reset-db", "please"]).is_err());
    }
}
