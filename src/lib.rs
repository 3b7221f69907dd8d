// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod provision;
pub mod server;
pub mod utils;

pub use crate::config::{Config, GithubConfig, ProvisionConfig, ServerConfig};
pub use error::{ProvisionError, Result};
pub use github::GitHubClient;
pub use models::{CreationRequest, CreationResult, DEFAULT_README, DEFAULT_WORKFLOW};
pub use provision::RepoProvisioner;
pub use server::{AppState, create_router};
pub use utils::{HealthReport, HealthStatus, OperationTimer, Validator};
