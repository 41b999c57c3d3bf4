use anyhow::{Context, Result, bail};
use pantheon_relay::{config, server};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// `RUST_LOG` wins over `server.logs.level`; either must name a plain level.
fn resolve_log_level(env_level: Option<String>, configured: &str) -> Result<String> {
    let level = env_level.unwrap_or_else(|| configured.to_string());

    if level.parse::<LevelFilter>().is_err() {
        bail!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        );
    }

    Ok(level)
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .json()
        .init();
}

async fn start() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let level = resolve_log_level(std::env::var("RUST_LOG").ok(), &config.server.logs.level)?;
    init_tracing(&level);

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    info!(
        "Starting Pantheon relay on {}:{} (log level {}, {} allowed origins)",
        config.server.host,
        config.server.port,
        level,
        config.server.allowed_origins.len()
    );

    server::run(config).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = start().await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
