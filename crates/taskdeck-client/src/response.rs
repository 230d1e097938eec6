use serde::Deserialize;
use taskdeck_domain::TaskId;

/// Structured mutation response. Any status other than "success" is treated
/// as non-success.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub task_id: Option<TaskId>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
