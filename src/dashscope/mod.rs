//! DashScope HTTP client
//!
//! Thin client for the TongYi (DashScope) REST API. Each capability lives in
//! its own submodule; this module holds the shared request plumbing and the
//! polling loop for asynchronous vendor tasks.

pub mod audio;
pub mod embeddings;
pub mod generation;
pub mod images;

pub use generation::ChatMessage;

use crate::config::DashScopeConfig;
use crate::utils::error::{Result, TongYiError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Path for querying asynchronous task status
const TASK_PATH: &str = "/api/v1/tasks";

/// DashScope API client
#[derive(Debug, Clone)]
pub struct DashScopeClient {
    http: reqwest::Client,
    config: DashScopeConfig,
}

impl DashScopeClient {
    /// Create a new client from configuration
    pub fn new(config: DashScopeConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            warn!("DashScope API key is empty; upstream calls will be rejected");
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self { http, config })
    }

    /// Client configuration
    pub fn config(&self) -> &DashScopeConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body and return the raw response after a status check
    async fn post_raw<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        let mut request = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.config.api_key)
            .json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        check_status(response).await
    }

    /// POST a JSON body and deserialize the JSON response
    async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<R> {
        let response = self.post_raw(path, body, headers).await?;
        Ok(response.json().await?)
    }

    /// GET a path and deserialize the JSON response
    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Poll an asynchronous task until it completes
    ///
    /// `what` names the capability for log and error messages. Returns the
    /// task payload once the task reaches `SUCCEEDED`.
    pub(crate) async fn wait_for_task<T: DeserializeOwned>(
        &self,
        task_id: &str,
        what: &str,
    ) -> Result<T> {
        let path = format!("{}/{}", TASK_PATH, task_id);

        for attempt in 0..self.config.poll_attempts {
            let response: TaskResponse<T> = self.get_json(&path).await?;
            debug!(
                "{} task {} poll {}: {:?}",
                what, task_id, attempt, response.output.task_status
            );

            match response.output.task_status {
                TaskStatus::Succeeded => {
                    return response.output.result.ok_or_else(|| {
                        TongYiError::provider(format!("{} task succeeded without a result", what))
                    });
                }
                TaskStatus::Failed | TaskStatus::Canceled => {
                    let detail = response
                        .output
                        .message
                        .unwrap_or_else(|| "no detail".to_string());
                    return Err(TongYiError::provider(format!(
                        "{} task {} failed: {}",
                        what, task_id, detail
                    )));
                }
                TaskStatus::Pending | TaskStatus::Running | TaskStatus::Unknown => {
                    tokio::time::sleep(Duration::from_millis(self.config.poll_interval_ms)).await;
                }
            }
        }

        Err(TongYiError::timeout(format!(
            "{} task {} did not finish after {} polls",
            what, task_id, self.config.poll_attempts
        )))
    }
}

/// Map a non-success response to a provider error, preserving the API detail
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ApiError>(&body) {
        Ok(api) => format!(
            "{}: {}",
            api.code.unwrap_or_else(|| "unknown".to_string()),
            api.message.unwrap_or_else(|| "no message".to_string())
        ),
        Err(_) => body,
    };

    Err(TongYiError::provider(format!("HTTP {}: {}", status, detail)))
}

/// Error body returned by the DashScope API
#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<String>,
    message: Option<String>,
}

/// Status of an asynchronous vendor task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

/// Response to submitting an asynchronous task
#[derive(Debug, Deserialize)]
pub(crate) struct TaskSubmit {
    pub output: TaskSubmitOutput,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskSubmitOutput {
    pub task_id: String,
}

/// Response to polling an asynchronous task
#[derive(Debug, Deserialize)]
struct TaskResponse<T> {
    output: TaskOutput<T>,
}

#[derive(Debug, Deserialize)]
struct TaskOutput<T> {
    task_status: TaskStatus,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    result: Option<T>,
}
