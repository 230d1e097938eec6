use std::time::Instant;

use taskdeck_client::{ApiError, ApiResponse, TaskAction};
use taskdeck_domain::{Task, TaskId, VisibilityRule};

use crate::app::{App, AppMode, FormKind, NetEvent};
use crate::toast::Severity;

impl App {
    pub fn handle_net_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::TasksLoaded(result) => self.on_tasks_loaded(result),
            NetEvent::SubmitFinished { kind, result } => self.on_submit_finished(kind, result),
            NetEvent::ActionFinished {
                action,
                task_id,
                result,
            } => self.on_action_finished(action, task_id, result),
            NetEvent::ReorderFinished(result) => self.on_reorder_finished(result),
        }
    }

    /// The analogue of a page reload: the refreshed list resets the filter,
    /// clears the search, closes forms, and replays the fade-in stagger.
    fn on_tasks_loaded(&mut self, result: Result<Vec<Task>, ApiError>) {
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                self.visibility = VisibilityRule::default();
                self.active_filter = Some(taskdeck_domain::ListFilter::All);
                self.search.clear();
                self.close_all_forms();
                self.refresh_visibility();
                self.selection.clamp(self.tasks.len());
                self.recompute_stats();
                self.reveal.restart(Instant::now());
            }
            Err(err) => {
                tracing::error!(error = %err, "task list load failed");
                self.toasts.notify("Failed to load tasks.", Severity::Error);
            }
        }
    }

    fn on_submit_finished(&mut self, kind: FormKind, result: Result<ApiResponse, ApiError>) {
        // Restore the submit control before looking at the outcome; the
        // label/enabled reset must happen on every path.
        match kind {
            FormKind::Add => self.add_form.submitting = false,
            FormKind::Edit(task_id) => {
                if let Some(form) = self.edit_form.as_mut() {
                    if form.task_id == task_id {
                        form.submitting = false;
                    }
                }
            }
        }

        match result {
            Ok(response) => {
                self.toasts
                    .notify(response.message.clone(), Severity::parse(&response.status));
                if response.is_success() {
                    if kind == FormKind::Add {
                        self.add_form.reset();
                        self.add_form.visible = false;
                        if self.mode == AppMode::AddTask {
                            self.mode = AppMode::Normal;
                        }
                    }
                    self.schedule_refresh(Instant::now());
                }
            }
            Err(err) => {
                tracing::error!(error = %err, ?kind, "form submission failed");
                self.toasts.notify("Form submission failed.", Severity::Error);
            }
        }
    }

    fn on_action_finished(
        &mut self,
        action: TaskAction,
        task_id: TaskId,
        result: Result<ApiResponse, ApiError>,
    ) {
        match result {
            Ok(response) => {
                self.toasts
                    .notify(response.message.clone(), Severity::parse(&response.status));
                if response.is_success() {
                    self.schedule_refresh(Instant::now());
                }
            }
            Err(err) => {
                tracing::error!(error = %err, %action, task_id, "action failed");
                self.toasts.notify(
                    format!("Failed to {} task #{}.", action, task_id),
                    Severity::Error,
                );
            }
        }
    }

    /// Reorder persistence is best-effort but not silently divergent: any
    /// failure restores the pre-drop order.
    fn on_reorder_finished(&mut self, result: Result<ApiResponse, ApiError>) {
        match result {
            Ok(response) => {
                if response.is_success() {
                    self.reorder_snapshot = None;
                } else {
                    self.rollback_reorder();
                }
                self.toasts
                    .notify(response.message.clone(), Severity::parse(&response.status));
            }
            Err(err) => {
                tracing::error!(error = %err, "reorder persistence failed");
                self.rollback_reorder();
                self.toasts
                    .notify("Failed to reorder tasks", Severity::Error);
            }
        }
    }
}
