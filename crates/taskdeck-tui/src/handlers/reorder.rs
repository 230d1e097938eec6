use std::sync::Arc;

use taskdeck_domain::{apply_drop, ordered_ids};

use crate::app::{App, NetEvent};
use crate::drag::DragState;

impl App {
    pub fn begin_drag(&mut self, task_index: usize) {
        let Some(task) = self.tasks.get(task_index) else {
            return;
        };
        self.drag = DragState::begin(task.id, task_index);
    }

    /// Button release: leave the Dragging state (restoring the row's normal
    /// style), and when the release lands on another row, reorder and kick
    /// off the persistence call.
    pub fn finish_drag(&mut self, column: u16, row: u16) {
        let Some(origin_index) = self.drag.dragged_index() else {
            return;
        };
        self.drag = DragState::Idle;

        let Some(target_index) = self.layout.task_row_at(column, row) else {
            return;
        };
        self.perform_drop(origin_index, target_index);
    }

    /// Apply the reorder immediately (no confirmation) and persist it in the
    /// background, keeping the previous order for rollback on failure.
    pub fn perform_drop(&mut self, dragged: usize, target: usize) {
        let snapshot = self.tasks.clone();
        if !apply_drop(&mut self.tasks, dragged, target) {
            return;
        }
        self.refresh_visibility();
        if let Some(selected) = self.selection.get() {
            if selected == dragged {
                self.selection.set(Some(target));
            }
        }
        self.reorder_snapshot = Some(snapshot);

        let task_ids = ordered_ids(&self.tasks);
        let api = Arc::clone(&self.api);
        let tx = self.net_tx.clone();
        tokio::spawn(async move {
            let result = api.persist_order(&task_ids).await;
            let _ = tx.send(NetEvent::ReorderFinished(result));
        });
    }

    pub(crate) fn rollback_reorder(&mut self) {
        if let Some(snapshot) = self.reorder_snapshot.take() {
            self.tasks = snapshot;
            self.refresh_visibility();
        }
    }
}
