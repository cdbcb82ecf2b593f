use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, find_token_file, read_config};

mod error;
pub use error::{ConfigError, ConfigResult};
use tokio::sync::OnceCell;

static DEFAULT_API_BASE_URL: &str = "https://alblearn.almotech.co";

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize)]
pub struct Config {
    api: Api,
    #[serde(default)]
    app: App,
}

#[derive(Debug, Deserialize)]
pub struct Api {
    base_url: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct App {
    /// Gates the learning-path insight wave on the student dashboard.
    #[serde(default)]
    learning_path: bool,
}

impl Config {
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> &'static Config {
        CONFIG
            .get_or_init(|| async {
                let read_cfg = |use_local| -> ConfigResult<Self> {
                    let text = read_config(use_local)?;
                    let config: Self = toml::from_str(&text)?;
                    Ok(config)
                };

                match read_cfg(use_local) {
                    Ok(c) => c,
                    Err(error::ConfigError::ConfigNotFound) => {
                        tracing::debug!("config not found, using defaults");
                        Config::default()
                    }
                    Err(e) => {
                        crate::error::log_error(&e);
                        tracing::error!("Config is unreadable.");
                        std::process::exit(1);
                    }
                }
            })
            .await
    }

    #[inline]
    pub fn api(&self) -> &Api {
        &self.api
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Default for Config {
    fn default() -> Self {
        let base_url = std::env::var("ALBLEARN_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self {
            api: Api {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout_secs: default_timeout_secs(),
            },
            app: App::default(),
        }
    }
}

impl Api {
    #[inline]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    #[inline]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl App {
    #[inline]
    pub fn learning_path(&self) -> bool {
        self.learning_path
    }
}
