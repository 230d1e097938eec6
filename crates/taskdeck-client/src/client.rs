use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use taskdeck_core::AppConfig;
use taskdeck_domain::{Task, TaskId};
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::response::ApiResponse;

/// Header sent on every request, mirroring what the server expects from the
/// interactive client.
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Complete,
    Incomplete,
    Delete,
}

impl TaskAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskAction::Complete => "complete",
            TaskAction::Incomplete => "incomplete",
            TaskAction::Delete => "delete",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A state-changing action with its resolved target. A link without a target
/// fails locally; no request is attempted.
#[derive(Debug, Clone)]
pub struct ActionLink {
    pub action: TaskAction,
    pub task_id: TaskId,
    pub href: Option<Url>,
}

/// Resolver for the server's route layout.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn tasks(&self) -> Result<Url, ApiError> {
        Ok(self.base.join("tasks")?)
    }

    pub fn add(&self) -> Result<Url, ApiError> {
        Ok(self.base.join("add")?)
    }

    pub fn update(&self, task_id: TaskId) -> Result<Url, ApiError> {
        Ok(self.base.join(&format!("update/{}", task_id))?)
    }

    pub fn reorder(&self) -> Result<Url, ApiError> {
        Ok(self.base.join("reorder")?)
    }

    pub fn action_link(&self, action: TaskAction, task_id: TaskId) -> ActionLink {
        let href = self
            .base
            .join(&format!("{}/{}", action.as_str(), task_id))
            .ok();
        ActionLink {
            action,
            task_id,
            href,
        }
    }
}

#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Load the full task list.
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// POST serialized form fields to the form's declared target.
    async fn submit_form(
        &self,
        target: &Url,
        fields: &[(String, String)],
    ) -> Result<ApiResponse, ApiError>;

    /// GET an action link's target, failing locally when it has none.
    async fn run_action(&self, link: &ActionLink) -> Result<ApiResponse, ApiError>;

    /// Best-effort persistence of a new task order.
    async fn persist_order(&self, task_ids: &[TaskId]) -> Result<ApiResponse, ApiError>;
}

pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::new(base),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let base = Url::parse(config.effective_server_url())?;
        Ok(Self::new(base))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!(%status, url = %response.url(), "request rejected");
            Err(ApiError::Status(status))
        }
    }
}

#[async_trait]
impl TaskApi for ApiClient {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.endpoints.tasks()?;
        debug!(%url, "loading tasks");
        let response = self
            .http
            .get(url)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .send()
            .await?;
        let response = Self::check_status(response)?;
        Ok(response.json().await?)
    }

    async fn submit_form(
        &self,
        target: &Url,
        fields: &[(String, String)],
    ) -> Result<ApiResponse, ApiError> {
        debug!(url = %target, field_count = fields.len(), "submitting form");
        let response = self
            .http
            .post(target.clone())
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .form(fields)
            .send()
            .await?;
        let response = Self::check_status(response)?;
        Ok(response.json().await?)
    }

    async fn run_action(&self, link: &ActionLink) -> Result<ApiResponse, ApiError> {
        let Some(url) = link.href.clone() else {
            return Err(ApiError::MissingTarget {
                action: link.action,
                task_id: link.task_id,
            });
        };
        debug!(%url, action = %link.action, task_id = link.task_id, "running action");
        let response = self
            .http
            .get(url)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .send()
            .await?;
        let response = Self::check_status(response)?;
        Ok(response.json().await?)
    }

    async fn persist_order(&self, task_ids: &[TaskId]) -> Result<ApiResponse, ApiError> {
        let url = self.endpoints.reorder()?;
        let payload = ReorderPayload {
            task_ids: task_ids.iter().map(|id| id.to_string()).collect(),
        };
        debug!(%url, count = payload.task_ids.len(), "persisting order");
        let response = self
            .http
            .post(url)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .json(&payload)
            .send()
            .await?;
        let response = Self::check_status(response)?;
        Ok(response.json().await?)
    }
}

#[derive(Debug, Serialize)]
struct ReorderPayload {
    #[serde(rename = "taskIds")]
    task_ids: Vec<String>,
}
