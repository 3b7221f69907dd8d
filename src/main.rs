// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use repo_bootstrap::utils::logging::{format_error, format_field, format_success};
use repo_bootstrap::{
    AppState, Config, CreationRequest, GitHubClient, ProvisionError, RepoProvisioner,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "repo-bootstrap")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Bootstrap GitHub repositories with a README and CI workflow", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "REPO_BOOTSTRAP_CONFIG",
        default_value = repo_bootstrap::config::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the repository creation endpoint over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create a single repository and exit
    Create {
        /// Repository name
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(long)]
        private: bool,

        /// File whose contents become README.md
        #[arg(long, value_name = "FILE")]
        readme_file: Option<PathBuf>,

        /// File whose contents become the CI workflow
        #[arg(long, value_name = "FILE")]
        workflow_file: Option<PathBuf>,
    },

    /// Check that the configured token can reach the GitHub API
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    repo_bootstrap::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using defaults and environment",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    let client = GitHubClient::new(&config.github).context("Failed to build GitHub client")?;

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(&config, client, host, port).await?;
        }
        Commands::Create {
            name,
            description,
            private,
            readme_file,
            workflow_file,
        } => {
            let mut request = CreationRequest::new(name)
                .with_description(description)
                .with_private(private);
            if let Some(path) = readme_file {
                request = request.with_readme(read_content(&path)?);
            }
            if let Some(path) = workflow_file {
                request = request.with_workflow(read_content(&path)?);
            }
            cmd_create(&config, client, request).await?;
        }
        Commands::Verify => {
            cmd_verify(&client).await?;
        }
    }

    Ok(())
}

fn read_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

async fn cmd_serve(
    config: &Config,
    client: GitHubClient,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut server_config = config.server.clone();
    if let Some(host) = host {
        server_config.host = host;
    }
    if let Some(port) = port {
        repo_bootstrap::Validator::validate_port(port)?;
        server_config.port = port;
    }

    info!("Repository bootstrap service against {}", client.api_url());

    let provisioner = RepoProvisioner::new(client, config.provision.clone());
    let state = Arc::new(AppState::new(provisioner));

    repo_bootstrap::server::serve(&server_config.bind_address(), state)
        .await
        .context("HTTP server failed")?;

    Ok(())
}

async fn cmd_create(config: &Config, client: GitHubClient, request: CreationRequest) -> Result<()> {
    let provisioner = RepoProvisioner::new(client, config.provision.clone());

    match provisioner.create(&request).await {
        Ok(result) => {
            println!("{}", format_success(&format!("Created {}", request.name)));
            println!("{}", format_field("repo_url", &result.repo_url));
            println!("{}", format_field("readme_url", &result.readme_url));
            println!("{}", format_field("workflow_url", &result.workflow_url));
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(ProvisionError::RemoteApi { status, body }) => {
            eprintln!(
                "{}",
                format_error(&format!("GitHub answered {} for {}", status, request.name))
            );
            eprintln!("{}", body);
            Err(anyhow::anyhow!("Provisioning failed with upstream status {}", status))
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            Err(e).context("Provisioning failed")
        }
    }
}

async fn cmd_verify(client: &GitHubClient) -> Result<()> {
    info!("Verifying token against {}", client.api_url());

    let user = client
        .authenticated_user()
        .await
        .context("Token verification failed")?;

    println!(
        "{}",
        format_success(&format!("Authenticated as {}", user.login))
    );
    if let Some(url) = user.html_url {
        println!("{}", format_field("profile", &url));
    }

    Ok(())
}
