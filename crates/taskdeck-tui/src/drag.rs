use taskdeck_domain::TaskId;

/// Drag-and-drop reorder state machine. Idle until a button press lands on a
/// task row; while dragging the origin row renders dimmed and the hovered
/// row is tracked for feedback; release returns to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: TaskId,
        origin_index: usize,
        hover: Option<usize>,
    },
}

impl DragState {
    pub fn begin(task_id: TaskId, origin_index: usize) -> Self {
        DragState::Dragging {
            task_id,
            origin_index,
            hover: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            DragState::Dragging { origin_index, .. } => Some(*origin_index),
            DragState::Idle => None,
        }
    }

    pub fn hover(&self) -> Option<usize> {
        match self {
            DragState::Dragging { hover, .. } => *hover,
            DragState::Idle => None,
        }
    }

    pub fn set_hover(&mut self, index: Option<usize>) {
        if let DragState::Dragging { hover, .. } = self {
            *hover = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.hover(), None);

        drag = DragState::begin(7, 2);
        assert!(drag.is_dragging());
        assert_eq!(drag.dragged_index(), Some(2));

        drag.set_hover(Some(0));
        assert_eq!(drag.hover(), Some(0));

        drag = DragState::Idle;
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_set_hover_ignored_when_idle() {
        let mut drag = DragState::Idle;
        drag.set_hover(Some(3));
        assert_eq!(drag.hover(), None);
    }
}
