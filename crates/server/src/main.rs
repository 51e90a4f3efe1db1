//! Farol - weekly SEO/content performance dashboard backend
//!
//! # Usage
//!
//! ```bash
//! # Run the server (default config path)
//! farol
//! farol --config configs/farol.toml
//!
//! # Point at the staging database
//! FAROL_ENVIRONMENT=staging farol
//! ```

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use farol_analytics::SummaryEngine;
use farol_api::{build_router, AppState};
use farol_config::{Config, Environment, LogFormat, ResolvedStore};
use farol_store::{MemoryStore, MetricsStore, PostgrestBackend, PostgrestConfig};

/// Farol - weekly SEO/content performance dashboard backend
#[derive(Parser, Debug)]
#[command(name = "farol")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "configs/farol.toml")]
    config: std::path::PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_missing = !cli.config.exists();
    let config = if config_missing {
        Config::default()
    } else {
        Config::from_file(&cli.config)?
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log.level.as_str().to_string());
    init_logging(&level, config.log.format)?;

    if config_missing {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    // The environment is resolved once here and handed to the store at
    // construction time; nothing below reads it ambiently.
    let environment = std::env::var("FAROL_ENVIRONMENT")
        .ok()
        .and_then(|value| Environment::parse(&value))
        .unwrap_or(config.store.environment);

    let store = build_store(&config, environment)?;
    tracing::info!(store = store.name(), ?environment, "store initialized");

    let engine = SummaryEngine::new(store);
    let app = build_router(AppState::new(engine));
    let app = apply_cors(app, &config);

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr).await?;
    tracing::info!(addr = %config.server.listen_addr, "farol listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_store(config: &Config, environment: Environment) -> Result<Box<dyn MetricsStore>> {
    match config.store.resolve(environment)? {
        ResolvedStore::Postgrest {
            url,
            api_key,
            schema,
            timeout_secs,
        } => {
            let backend_config = PostgrestConfig::new(url, api_key)
                .with_schema(schema)
                .with_timeout_secs(timeout_secs);
            Ok(Box::new(PostgrestBackend::new(&backend_config)?))
        }
        ResolvedStore::Memory => Ok(Box::new(MemoryStore::new())),
    }
}

fn apply_cors(app: axum::Router, config: &Config) -> axum::Router {
    if config.server.cors_origins.is_empty() {
        return app;
    }

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET]);

    app.layer(cors)
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Console => registry.with(fmt::layer().with_target(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).init(),
    }

    Ok(())
}
