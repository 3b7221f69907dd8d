// file: src/provision/provisioner.rs
// description: sequential create-repository, readme and workflow provisioning
// reference: three-step call-and-check against the GitHub REST API

use crate::config::ProvisionConfig;
use crate::error::{ProvisionError, Result};
use crate::github::{
    CreateFilePayload, CreateRepositoryPayload, FileCommit, GitHubClient, Repository,
};
use crate::models::{CreationRequest, CreationResult};
use crate::utils::OperationTimer;
use tracing::{error, info};

/// Creates a repository and commits a README and CI workflow into it.
///
/// Steps run strictly in order and the first failure aborts the run. Nothing
/// already created upstream is rolled back.
#[derive(Debug, Clone)]
pub struct RepoProvisioner {
    client: GitHubClient,
    settings: ProvisionConfig,
}

impl RepoProvisioner {
    pub fn new(client: GitHubClient, settings: ProvisionConfig) -> Self {
        Self { client, settings }
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    pub async fn create(&self, request: &CreationRequest) -> Result<CreationResult> {
        request.validate()?;

        info!(
            repo = %request.name,
            private = request.private,
            "Provisioning repository"
        );
        let mut timer = OperationTimer::new(&format!("provision {}", request.name));

        let repository = self
            .client
            .create_repository(&CreateRepositoryPayload::from(request))
            .await
            .inspect_err(|e| error!(step = "create_repository", "Provisioning aborted: {}", e))?;
        info!(
            owner = %repository.owner.login,
            repo = %repository.name,
            "Repository created at {}",
            repository.html_url
        );
        timer.step("create_repository");

        let readme = self
            .commit_file(
                &repository,
                &self.settings.readme_path,
                &self.settings.readme_message,
                &request.readme_content,
            )
            .await?;
        timer.step("create_readme");

        let workflow = self
            .commit_file(
                &repository,
                &self.settings.workflow_path,
                &self.settings.workflow_message,
                &request.workflow_content,
            )
            .await?;
        timer.step("create_workflow");

        timer.finish();

        // Urls are only read once every call has gone through.
        let readme_url = Self::file_url(&readme, &self.settings.readme_path)?;
        let workflow_url = Self::file_url(&workflow, &self.settings.workflow_path)?;

        Ok(CreationResult {
            repo_url: repository.html_url,
            readme_url,
            workflow_url,
        })
    }

    async fn commit_file(
        &self,
        repository: &Repository,
        path: &str,
        message: &str,
        content: &str,
    ) -> Result<FileCommit> {
        let payload = CreateFilePayload::new(message, content);

        let commit = self
            .client
            .create_file(&repository.owner.login, &repository.name, path, &payload)
            .await
            .inspect_err(|e| {
                error!(
                    repo = %repository.name,
                    path,
                    "Provisioning aborted, repository left in place: {}",
                    e
                )
            })?;

        info!(repo = %repository.name, path, "File committed");
        Ok(commit)
    }

    fn file_url(commit: &FileCommit, path: &str) -> Result<String> {
        commit.html_url().map(str::to_string).ok_or_else(|| {
            ProvisionError::MalformedResponse(format!(
                "Contents API response for {} has no content.html_url",
                path
            ))
        })
    }
}
