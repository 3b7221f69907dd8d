// file: tests/common/mod.rs
// description: in-process fake of the GitHub repository and contents endpoints
// reference: https://docs.rs/axum
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{post, put},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use repo_bootstrap::{GitHubClient, GithubConfig, ProvisionConfig, RepoProvisioner};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const OWNER: &str = "octocat";
pub const TOKEN: &str = "ghp_test_token";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

impl RecordedCall {
    /// Decodes the base64 `content` field of a contents API call.
    pub fn decoded_content(&self) -> String {
        let encoded = self.body["content"].as_str().unwrap_or_default();
        let bytes = STANDARD.decode(encoded).unwrap();
        String::from_utf8(bytes).unwrap()
    }
}

/// Replaces the normal answer to the call at `call_index` (0-based).
#[derive(Debug, Clone)]
pub struct ScriptedResponse {
    pub call_index: usize,
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct FakeGitHub {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    scripted: Option<ScriptedResponse>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responding_at(call_index: usize, status: u16, body: &str) -> Self {
        Self {
            calls: Arc::default(),
            scripted: Some(ScriptedResponse {
                call_index,
                status,
                body: body.to_string(),
            }),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Binds to an ephemeral port and returns the base url.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/user/repos", post(create_repo))
            .route("/repos/:owner/:repo/contents/*path", put(create_file))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn record(
        &self,
        method: &'static str,
        uri: &Uri,
        headers: &HeaderMap,
        body: Value,
    ) -> Option<Response> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedCall {
            method,
            path: uri.path().to_string(),
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
        let index = calls.len() - 1;

        self.scripted
            .as_ref()
            .filter(|s| s.call_index == index)
            .map(|s| {
                (
                    StatusCode::from_u16(s.status).unwrap(),
                    [(header::CONTENT_TYPE, "application/json")],
                    s.body.clone(),
                )
                    .into_response()
            })
    }
}

async fn create_repo(
    State(fake): State<FakeGitHub>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    if let Some(scripted) = fake.record("POST", &uri, &headers, body) {
        return scripted;
    }

    (
        StatusCode::CREATED,
        Json(json!({
            "name": name,
            "html_url": format!("https://github.com/{}/{}", OWNER, name),
            "owner": { "login": OWNER },
        })),
    )
        .into_response()
}

async fn create_file(
    State(fake): State<FakeGitHub>,
    Path((owner, repo, path)): Path<(String, String, String)>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(scripted) = fake.record("PUT", &uri, &headers, body) {
        return scripted;
    }

    let path = path.trim_start_matches('/');
    (
        StatusCode::CREATED,
        Json(json!({
            "content": {
                "path": path,
                "html_url": format!("https://github.com/{}/{}/blob/main/{}", owner, repo, path),
            },
            "commit": { "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" },
        })),
    )
        .into_response()
}

pub fn provisioner(api_url: &str) -> RepoProvisioner {
    let config = GithubConfig {
        token: TOKEN.to_string(),
        api_url: api_url.to_string(),
        user_agent: "repo-bootstrap-test".to_string(),
    };
    RepoProvisioner::new(
        GitHubClient::new(&config).unwrap(),
        ProvisionConfig::default(),
    )
}
