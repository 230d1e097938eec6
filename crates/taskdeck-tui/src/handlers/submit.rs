use std::sync::Arc;
use url::Url;

use taskdeck_domain::task::validate_description;

use crate::app::{App, FormKind, NetEvent};
use crate::toast::Severity;

impl App {
    pub fn submit_add_form(&mut self) {
        let description = self.add_form.description.as_str().trim().to_string();
        if !validate_description(&description) {
            self.toasts
                .notify("Invalid task description", Severity::Error);
            return;
        }

        let target = match self.endpoints.add() {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(error = %err, "add form has no usable target");
                self.toasts.notify("Form submission failed.", Severity::Error);
                return;
            }
        };

        let fields = vec![
            ("description".to_string(), description),
            (
                "priority".to_string(),
                self.add_form.priority.as_str().to_string(),
            ),
        ];

        self.add_form.submitting = true;
        self.spawn_submit(FormKind::Add, target, fields);
    }

    pub fn submit_edit_form(&mut self) {
        let Some(form) = self.edit_form.as_ref() else {
            return;
        };
        let task_id = form.task_id;
        let description = form.description.as_str().trim().to_string();
        let priority = form.priority;

        if !validate_description(&description) {
            self.toasts
                .notify("Invalid task description", Severity::Error);
            return;
        }

        let target = match self.endpoints.update(task_id) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(error = %err, task_id, "edit form has no usable target");
                self.toasts.notify("Form submission failed.", Severity::Error);
                return;
            }
        };

        let fields = vec![
            ("description".to_string(), description),
            ("priority".to_string(), priority.as_str().to_string()),
        ];

        if let Some(form) = self.edit_form.as_mut() {
            form.submitting = true;
        }
        self.spawn_submit(FormKind::Edit(task_id), target, fields);
    }

    fn spawn_submit(&self, kind: FormKind, target: Url, fields: Vec<(String, String)>) {
        let api = Arc::clone(&self.api);
        let tx = self.net_tx.clone();
        tokio::spawn(async move {
            let result = api.submit_form(&target, &fields).await;
            let _ = tx.send(NetEvent::SubmitFinished { kind, result });
        });
    }
}
