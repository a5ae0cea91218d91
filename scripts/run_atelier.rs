use anyhow::Context;
use atelier_adaptor_web::AtelierServer;
use atelier_core::utils::logger::init_logging;
use atelier_core::{load_env, load_env_from_path, ServerConfig};
use atelier_plugin_advice::KeywordResponder;
use clap::Parser;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Fashion styling chat server
#[derive(Parser, Debug)]
#[command(name = "run-atelier", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Host/interface to bind
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Directory holding index.html and the client bundle
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Log filter, e.g. `info` or `atelier_adaptor_web=debug`
    #[arg(long, env = "ATELIER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Extra .env file; variables already set by the environment or `.env` win
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Skip the startup upstream probe and trust the configured key
    #[arg(long)]
    no_probe: bool,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env().context("invalid configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(dir) = cli.static_dir {
        config.static_dir = dir;
    }
    if cli.no_probe {
        config.probe_upstream = false;
    }
    info!(?config, "Starting Atelier");

    let server = AtelierServer::new(config, Arc::new(KeywordResponder::new()))?;

    let listener = match server.bind().await {
        Ok(listener) => listener,
        Err(atelier_core::AtelierError::Io(e)) if e.kind() == ErrorKind::AddrInUse => {
            error!("❌ Port {} is already in use", server.config().port);
            error!("   Stop the other process or choose another port with --port or PORT");
            anyhow::bail!("address {} already in use", server.config().bind_addr());
        }
        Err(e) => return Err(e).context("failed to bind listener"),
    };

    let api_mode = server.resolve_api_mode().await;
    info!(?api_mode, "API mode resolved");

    server.serve(listener, api_mode).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Both env files load before parsing so clap's env fallbacks see them
    let env_loaded = load_env();
    let mut cli = Cli::parse();
    let extra_loaded = match cli.env_file.clone() {
        Some(path) => {
            let loaded = load_env_from_path(&path).map(|()| path);
            if loaded.is_ok() {
                cli = Cli::parse();
            }
            Some(loaded)
        }
        None => None,
    };

    if let Some(level) = &cli.log_level {
        std::env::set_var("ATELIER_LOG_LEVEL", level);
    }
    init_logging();

    match env_loaded {
        Ok(Some(path)) => info!("✓ Loaded environment from: {}", path.display()),
        Ok(None) => debug!("No .env file found - using system environment variables only"),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }
    match extra_loaded {
        Some(Ok(path)) => info!("✓ Loaded environment from: {}", path.display()),
        Some(Err(e)) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        None => {}
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
