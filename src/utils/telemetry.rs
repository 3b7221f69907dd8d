// file: src/utils/telemetry.rs
// description: step timing and health reporting for the provisioning service
// reference: https://docs.rs/tracing

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::info;

/// Health status reported by the `/health` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub api_url: String,
    pub timestamp: String,
}

impl HealthReport {
    pub fn healthy(api_url: &str) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_url: api_url.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Times a multi-step operation, logging each completed step.
pub struct OperationTimer {
    operation: String,
    start: Instant,
    last_step: Instant,
    steps: Vec<(String, Duration)>,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        let now = Instant::now();
        Self {
            operation: operation.to_string(),
            start: now,
            last_step: now,
            steps: Vec::new(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn step(&mut self, name: &str) -> Duration {
        let now = Instant::now();
        let took = now.duration_since(self.last_step);
        self.last_step = now;
        self.steps.push((name.to_string(), took));

        info!(
            operation = %self.operation,
            step = name,
            elapsed_ms = took.as_millis() as u64,
            "Step complete"
        );
        took
    }

    pub fn steps(&self) -> &[(String, Duration)] {
        &self.steps
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            operation = %self.operation,
            steps = self.steps.len(),
            "Completed in {:.2}s",
            elapsed.as_secs_f64()
        );
        elapsed
    }
}
