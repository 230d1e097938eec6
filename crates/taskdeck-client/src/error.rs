use crate::client::TaskAction;
use taskdeck_domain::TaskId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("no target URL to {action} task #{task_id}")]
    MissingTarget { action: TaskAction, task_id: TaskId },

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Transport-level failures (network, bad status, undecodable body) get a
    /// generic user-facing message; only structured responses surface server
    /// text.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Status(_))
    }
}
