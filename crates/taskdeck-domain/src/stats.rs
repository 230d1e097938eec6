use crate::task::{Priority, Task};

/// Summary counts derived from the full task list. Pending is always
/// total minus completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority: usize,
}

impl TaskStats {
    pub fn compute(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let high_priority = tasks
            .iter()
            .filter(|t| t.priority == Priority::High)
            .count();
        Self {
            total,
            completed,
            pending: total - completed,
            high_priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(TaskStats::compute(&[]), TaskStats::default());
    }

    #[test]
    fn test_counts() {
        let tasks = vec![
            Task::new(1, "a").with_completed(true),
            Task::new(2, "b").with_priority(Priority::High),
            Task::new(3, "c")
                .with_priority(Priority::High)
                .with_completed(true),
            Task::new(4, "d"),
        ];
        let stats = TaskStats::compute(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.high_priority, 2);
    }

    #[test]
    fn test_pending_is_total_minus_completed() {
        let mut tasks = Vec::new();
        for id in 0..17 {
            tasks.push(Task::new(id, "t").with_completed(id % 3 == 0));
        }
        let stats = TaskStats::compute(&tasks);
        assert_eq!(stats.pending, stats.total - stats.completed);
    }
}
