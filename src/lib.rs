use crate::client::{ApiClient, Session};
use crate::error::AppResult;

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod client;
pub mod dashboard;
pub mod error;
pub mod lesson;
pub mod model;
pub mod utils;

static APPLICATION_NAME: &str = "alblearn";

/// Builds an [`ApiClient`] from the on-disk configuration, with the session
/// token hydrated from its persisted slot if one exists.
pub async fn build_client() -> AppResult<ApiClient> {
    let use_local = cfg!(debug_assertions);
    let config = config::Config::get_or_init(use_local).await;

    let session = Session::hydrate(use_local);
    let client = ApiClient::from_config(config, session)?;
    Ok(client)
}

pub fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}
