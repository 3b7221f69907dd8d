// file: src/config.rs
// description: application configuration management with toml and env support
// reference: https://docs.rs/config

use crate::error::{ProvisionError, Result};
use crate::utils::Validator;
use config::ConfigBuilder;
use config::builder::DefaultState;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "REPO_BOOTSTRAP";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub github: GithubConfig,
    pub server: ServerConfig,
    pub provision: ProvisionConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    #[serde(default)]
    pub token: String,
    pub api_url: String,
    pub user_agent: String,
}

// Keeps the token out of log lines that print the whole config.
impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvisionConfig {
    pub readme_path: String,
    pub workflow_path: String,
    pub readme_message: String,
    pub workflow_message: String,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            readme_path: "README.md".to_string(),
            workflow_path: ".github/workflows/lint.yml".to_string(),
            readme_message: "Add README.md".to_string(),
            workflow_message: "Add CI workflow".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from defaults, the toml file, `REPO_BOOTSTRAP__*`
    /// variables and finally `GITHUB_TOKEN` (after reading `.env`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_token(path, std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// An empty `token` leaves `github.token` to the lower layers.
    pub fn load_with_token(path: Option<&Path>, token: Option<String>) -> Result<Self> {
        let token = token.filter(|t| !t.trim().is_empty());
        let settings = Self::builder(path)
            .and_then(|builder| builder.set_override_option("github.token", token))
            .and_then(|builder| builder.build())
            .map_err(|e| ProvisionError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ProvisionError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn builder(
        path: Option<&Path>,
    ) -> std::result::Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        let defaults = ProvisionConfig::default();

        let mut builder = config::Config::builder()
            .set_default("github.api_url", "https://api.github.com")?
            .set_default("github.user_agent", "repo-bootstrap")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000_i64)?
            .set_default("provision.readme_path", defaults.readme_path)?
            .set_default("provision.workflow_path", defaults.workflow_path)?
            .set_default("provision.readme_message", defaults.readme_message)?
            .set_default("provision.workflow_message", defaults.workflow_message)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        Ok(builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        ))
    }

    fn validate(&self) -> Result<()> {
        if self.github.token.trim().is_empty() {
            return Err(ProvisionError::Config(format!(
                "{} is not set; a GitHub token is required to start",
                TOKEN_ENV_VAR
            )));
        }

        Validator::validate_url(&self.github.api_url)?;
        Validator::validate_port(self.server.port)?;
        Validator::validate_repo_path(&self.provision.readme_path)?;
        Validator::validate_repo_path(&self.provision.workflow_path)?;

        Ok(())
    }
}
