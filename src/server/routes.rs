// file: src/server/routes.rs
// description: axum routes for repository creation and health checks
// reference: https://docs.rs/axum

use crate::error::ProvisionError;
use crate::models::{CreationRequest, CreationResult};
use crate::provision::RepoProvisioner;
use crate::utils::HealthReport;
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

pub struct AppState {
    pub provisioner: RepoProvisioner,
}

impl AppState {
    pub fn new(provisioner: RepoProvisioner) -> Self {
        Self { provisioner }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/repos", post(create_repo))
        .route("/repos/", post(create_repo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(HealthReport::healthy(state.provisioner.client().api_url()))
}

async fn create_repo(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreationRequest>,
) -> Result<Json<CreationResult>, ProvisionError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("create_repo", %request_id, repo = %request.name);

    let result = state.provisioner.create(&request).instrument(span).await?;
    Ok(Json(result))
}

impl IntoResponse for ProvisionError {
    fn into_response(self) -> Response {
        match self {
            // Upstream status and body are forwarded untouched.
            ProvisionError::RemoteApi { status, body } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let content_type = if serde_json::from_str::<serde_json::Value>(&body).is_ok() {
                    "application/json"
                } else {
                    "text/plain; charset=utf-8"
                };
                (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
            }
            other => {
                let status = match &other {
                    ProvisionError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    ProvisionError::Transport(_) | ProvisionError::MalformedResponse(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                warn!(status = status.as_u16(), "Request failed: {}", other);
                (status, Json(json!({ "detail": other.to_string() }))).into_response()
            }
        }
    }
}
