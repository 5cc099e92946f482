//! Process bootstrap for the La Liga match service.
//!
//! Loads configuration, prepares the data directory, opens and seeds the
//! SQLite store, and wraps the API router in the HTTP layers (CORS, request
//! timeout, tracing) that the API crate leaves to its caller.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use anyhow::Context as _;
use axum::{
  Router,
  http::{Method, StatusCode, header},
};
use laliga_core::{MatchStore, seed};
use laliga_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  timeout::TimeoutLayer,
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file, then
/// `LALIGA_*` environment variables (e.g. `LALIGA_PORT=9000`).
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  /// Directory holding the database file; created on first run.
  pub data_dir:             PathBuf,
  pub database_file:        String,
  pub request_timeout_secs: u64,
}

impl ServerConfig {
  /// Load configuration. A missing file is not an error.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8080_i64)?
      .set_default("data_dir", "./data")?
      .set_default("database_file", "laliga.db")?
      .set_default("request_timeout_secs", 10_i64)?
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("LALIGA"))
      .build()?
      .try_deserialize()
  }

  pub fn database_path(&self) -> PathBuf {
    self.data_dir.join(&self.database_file)
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

// ─── Store bootstrap ──────────────────────────────────────────────────────────

/// Create the data directory, open the store and seed it if empty.
///
/// Any failure here is fatal: the caller must not start serving.
pub async fn open_store(cfg: &ServerConfig) -> anyhow::Result<SqliteStore> {
  tokio::fs::create_dir_all(&cfg.data_dir)
    .await
    .with_context(|| format!("failed to create data directory {:?}", cfg.data_dir))?;

  let path = cfg.database_path();
  let store = SqliteStore::open(&path)
    .await
    .with_context(|| format!("failed to open store at {path:?}"))?;

  let inserted = store
    .seed_if_empty(&seed::fixtures())
    .await
    .context("failed to seed match table")?;
  if inserted > 0 {
    tracing::info!(inserted, "seeded empty match table");
  }

  Ok(store)
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router wrapped in the HTTP layers.
pub fn app<S>(store: Arc<S>, cfg: &ServerConfig) -> Router
where
  S: MatchStore + 'static,
{
  with_layers(laliga_api::api_router(store), cfg)
}

/// Request timeout (answered with 408), CORS, then per-request tracing
/// outermost.
pub fn with_layers(router: Router, cfg: &ServerConfig) -> Router {
  router
    .layer(TimeoutLayer::with_status_code(
      StatusCode::REQUEST_TIMEOUT,
      Duration::from_secs(cfg.request_timeout_secs),
    ))
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
}

/// Any origin may call the API. Credentials are not allowed: browsers reject
/// them alongside a wildcard origin.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PUT,
      Method::PATCH,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([
      header::ORIGIN,
      header::CONTENT_TYPE,
      header::AUTHORIZATION,
      header::ACCEPT,
    ])
    .expose_headers([header::CONTENT_LENGTH])
    .max_age(Duration::from_secs(12 * 60 * 60))
}

// ─── Shutdown ─────────────────────────────────────────────────────────────────

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
}

// ─── Integration tests ────────────────────────────────────────────────────────
