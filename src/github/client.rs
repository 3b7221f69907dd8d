// file: src/github/client.rs
// description: async GitHub REST client for repository and contents calls
// reference: https://docs.github.com/en/rest

use crate::config::GithubConfig;
use crate::error::{ProvisionError, Result};
use crate::utils::Validator;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, redirect};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::types::{
    AuthenticatedUser, CreateFilePayload, CreateRepositoryPayload, FileCommit, Repository,
};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| {
                ProvisionError::Config("GitHub token contains invalid header characters".into())
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        // A 3xx must reach the caller as a failed step, so redirects stay unfollowed.
        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn create_repository(
        &self,
        payload: &CreateRepositoryPayload<'_>,
    ) -> Result<Repository> {
        let url = format!("{}/user/repos", self.api_url);
        debug!(repo = payload.name, private = payload.private, "POST {}", url);

        let response = self.client.post(&url).json(payload).send().await?;
        Self::parse_response(response).await
    }

    pub async fn create_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        payload: &CreateFilePayload<'_>,
    ) -> Result<FileCommit> {
        let url = format!("{}/repos/{}/{}/contents/{}", self.api_url, owner, repo, path);
        debug!(
            "PUT {} ({} base64 bytes)",
            url,
            payload.content.len()
        );

        let response = self.client.put(&url).json(payload).send().await?;
        Self::parse_response(response).await
    }

    pub async fn authenticated_user(&self) -> Result<AuthenticatedUser> {
        let url = format!("{}/user", self.api_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if status.as_u16() >= 300 {
            warn!(
                status = status.as_u16(),
                "GitHub API request to {} failed: {}",
                url,
                Validator::truncate_text(&body, 200)
            );
            return Err(ProvisionError::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ProvisionError::MalformedResponse(format!(
                "Failed to parse response from {}: {}",
                url, e
            ))
        })
    }
}
