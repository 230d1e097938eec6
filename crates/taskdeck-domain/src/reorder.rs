use crate::task::{Task, TaskId};

/// Move the dragged task relative to the drop target: immediately after it
/// when the dragged task originally preceded the target, immediately before
/// it otherwise. Returns false (list untouched) for a self-drop or an
/// out-of-range index.
///
/// Removing the dragged task first makes `target` the slot just after the
/// drop target when dragging downward and just before it when dragging
/// upward, so a single insert covers both directions.
pub fn apply_drop(tasks: &mut Vec<Task>, dragged: usize, target: usize) -> bool {
    if dragged == target || dragged >= tasks.len() || target >= tasks.len() {
        return false;
    }
    let task = tasks.remove(dragged);
    tasks.insert(target, task);
    true
}

/// The full order of task ids, as sent to the reorder endpoint.
pub fn ordered_ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(|t| t.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Task> {
        vec![Task::new(1, "A"), Task::new(2, "B"), Task::new(3, "C")]
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        ordered_ids(tasks)
    }

    #[test]
    fn test_drag_down_inserts_after_target() {
        // A dragged onto C: A lands immediately after C.
        let mut tasks = abc();
        assert!(apply_drop(&mut tasks, 0, 2));
        assert_eq!(ids(&tasks), vec![2, 3, 1]);
    }

    #[test]
    fn test_drag_up_inserts_before_target() {
        // C dragged onto A: C lands immediately before A.
        let mut tasks = abc();
        assert!(apply_drop(&mut tasks, 2, 0));
        assert_eq!(ids(&tasks), vec![3, 1, 2]);
    }

    #[test]
    fn test_middle_moves() {
        let mut tasks = abc();
        assert!(apply_drop(&mut tasks, 1, 2));
        assert_eq!(ids(&tasks), vec![1, 3, 2]);

        let mut tasks = abc();
        assert!(apply_drop(&mut tasks, 1, 0));
        assert_eq!(ids(&tasks), vec![2, 1, 3]);
    }

    #[test]
    fn test_self_drop_is_a_no_op() {
        let mut tasks = abc();
        assert!(!apply_drop(&mut tasks, 1, 1));
        assert_eq!(ids(&tasks), vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_is_a_no_op() {
        let mut tasks = abc();
        assert!(!apply_drop(&mut tasks, 0, 3));
        assert!(!apply_drop(&mut tasks, 3, 0));
        assert_eq!(ids(&tasks), vec![1, 2, 3]);
    }
}
