// file: src/github/types.rs
// description: GitHub REST API request payloads and response shapes
// reference: https://docs.github.com/en/rest/repos/contents

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::models::CreationRequest;

#[derive(Debug, Serialize)]
pub struct CreateRepositoryPayload<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub private: bool,
    pub auto_init: bool,
}

impl<'a> From<&'a CreationRequest> for CreateRepositoryPayload<'a> {
    fn from(request: &'a CreationRequest) -> Self {
        Self {
            name: &request.name,
            description: &request.description,
            private: request.private,
            auto_init: false,
        }
    }
}

/// Body of a contents API `PUT`; `content` is base64 of the raw file bytes.
#[derive(Debug, Serialize)]
pub struct CreateFilePayload<'a> {
    pub message: &'a str,
    pub content: String,
}

impl<'a> CreateFilePayload<'a> {
    pub fn new(message: &'a str, raw: &str) -> Self {
        Self {
            message,
            content: STANDARD.encode(raw.as_bytes()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub owner: Owner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileCommit {
    pub content: Option<FileContent>,
}

impl FileCommit {
    pub fn html_url(&self) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(|c| c.html_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
    pub html_url: Option<String>,
}
