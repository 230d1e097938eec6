use crossterm::event::KeyCode;
use taskdeck_domain::{Priority, Task, TaskId};

use crate::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Priority,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Description,
        }
    }
}

#[derive(Debug, Default)]
pub struct AddTaskForm {
    pub visible: bool,
    pub description: InputState,
    pub priority: Priority,
    pub focus: FormField,
    pub submitting: bool,
}

impl AddTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Processing..."
        } else {
            "Create Task"
        }
    }

    pub fn reset(&mut self) {
        self.description.clear();
        self.priority = Priority::default();
        self.focus = FormField::Description;
    }
}

#[derive(Debug)]
pub struct EditTaskForm {
    pub task_id: TaskId,
    pub description: InputState,
    pub priority: Priority,
    pub focus: FormField,
    pub submitting: bool,
}

impl EditTaskForm {
    /// Pre-filled from the task being edited.
    pub fn for_task(task: &Task) -> Self {
        let mut description = InputState::new();
        description.set(task.description.clone());
        Self {
            task_id: task.id,
            description,
            priority: task.priority,
            focus: FormField::Description,
            submitting: false,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Processing..."
        } else {
            "Update"
        }
    }
}

pub fn cycle_priority(priority: Priority, forward: bool) -> Priority {
    match (priority, forward) {
        (Priority::Low, true) => Priority::Medium,
        (Priority::Medium, true) => Priority::High,
        (Priority::High, true) => Priority::Low,
        (Priority::Low, false) => Priority::High,
        (Priority::Medium, false) => Priority::Low,
        (Priority::High, false) => Priority::Medium,
    }
}

/// Route an editing key into a text field. Returns true when the buffer
/// changed (callers re-run live search on that).
pub fn edit_text_field(input: &mut InputState, code: KeyCode) -> bool {
    match code {
        KeyCode::Char(c) => {
            input.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_home();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}
