//! HTTP client for the scheduler API
//!
//! Thin wrapper over reqwest. One request per call, no retries; every
//! failure is mapped into [`ClientError`] and nothing escapes uncaught.

use crate::error::ClientError;
use crate::models::{QueueEnvelope, TaskEnvelope};
use std::time::Duration;
use tracing::{debug, info};

/// Default scheduler endpoint (local development server).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the scheduler's queue endpoints.
#[derive(Debug, Clone)]
pub struct QueueClient {
    http: reqwest::Client,
    endpoint: String,
}

impl QueueClient {
    /// Create a client for the given endpoint (scheme + host + port).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint this client talks to, without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full queue listing (`GET /queue/`).
    pub async fn fetch_queue(&self) -> Result<QueueEnvelope, ClientError> {
        let url = format!("{}/queue/", self.endpoint);
        let envelope: QueueEnvelope = self.get_json(&url).await?;
        info!(tasks = envelope.tasks.len(), "queue fetched");
        Ok(envelope)
    }

    /// Fetch one task's details (`GET /queue/{task_id}`).
    pub async fn fetch_task(&self, task_id: &str) -> Result<TaskEnvelope, ClientError> {
        let url = format!("{}/queue/{}", self.endpoint, task_id);
        let envelope: TaskEnvelope = self.get_json(&url).await?;
        info!(task_id = %envelope.task.task_id, "task fetched");
        Ok(envelope)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json().await.map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
