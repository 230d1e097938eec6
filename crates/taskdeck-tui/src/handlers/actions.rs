use std::sync::Arc;

use taskdeck_client::TaskAction;
use taskdeck_domain::TaskId;

use crate::app::{App, NetEvent};

impl App {
    pub fn toggle_complete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let action = if task.completed {
            TaskAction::Incomplete
        } else {
            TaskAction::Complete
        };
        self.run_task_action(action, task.id);
    }

    pub fn delete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        self.run_task_action(TaskAction::Delete, task.id);
    }

    /// Resolve the action's link and run it in the background. A link
    /// without a target fails inside the client without touching the
    /// network; the completion path turns that into the synthesized toast.
    pub fn run_task_action(&mut self, action: TaskAction, task_id: TaskId) {
        let link = self.endpoints.action_link(action, task_id);
        let api = Arc::clone(&self.api);
        let tx = self.net_tx.clone();
        tokio::spawn(async move {
            let result = api.run_action(&link).await;
            let _ = tx.send(NetEvent::ActionFinished {
                action,
                task_id,
                result,
            });
        });
    }
}
