//! List filter state and predicates.
//!
//! The active filter is an explicit value object rather than styling-derived
//! state; visibility is a pure predicate over a task's completion flag and
//! priority.

use crate::task::{Priority, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Pending,
    Completed,
    HighPriority,
}

impl ListFilter {
    /// Filters in presentation order; digit shortcuts 1-4 index into this.
    pub const ALL_FILTERS: [ListFilter; 4] = [
        ListFilter::All,
        ListFilter::Pending,
        ListFilter::Completed,
        ListFilter::HighPriority,
    ];

    /// Parse a filter name as carried on filter controls. Unknown names have
    /// no filter; callers treat that as hide-all, never as match-all.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "all" => Some(ListFilter::All),
            "pending" => Some(ListFilter::Pending),
            "completed" => Some(ListFilter::Completed),
            "high" => Some(ListFilter::HighPriority),
            _ => None,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            ListFilter::All => "all",
            ListFilter::Pending => "pending",
            ListFilter::Completed => "completed",
            ListFilter::HighPriority => "high",
        }
    }

    /// Capitalized label used in the filter bar and result toasts.
    pub fn label(self) -> &'static str {
        match self {
            ListFilter::All => "All",
            ListFilter::Pending => "Pending",
            ListFilter::Completed => "Completed",
            ListFilter::HighPriority => "High",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Pending => !task.completed,
            ListFilter::Completed => task.completed,
            ListFilter::HighPriority => task.priority == Priority::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(1, "done already").with_completed(true),
            Task::new(2, "still open"),
            Task::new(3, "urgent").with_priority(Priority::High),
        ]
    }

    #[test]
    fn test_pending_filter_counts() {
        let tasks = sample_tasks();
        let visible: Vec<_> = tasks
            .iter()
            .filter(|t| ListFilter::Pending.matches(t))
            .collect();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_completed_filter() {
        let tasks = sample_tasks();
        let visible = tasks
            .iter()
            .filter(|t| ListFilter::Completed.matches(t))
            .count();
        assert_eq!(visible, 1);
    }

    #[test]
    fn test_high_priority_filter_ignores_completion() {
        let task = Task::new(4, "urgent and done")
            .with_priority(Priority::High)
            .with_completed(true);
        assert!(ListFilter::HighPriority.matches(&task));
        assert!(!ListFilter::HighPriority.matches(&Task::new(5, "calm")));
    }

    #[test]
    fn test_all_filter_matches_everything() {
        assert!(sample_tasks().iter().all(|t| ListFilter::All.matches(t)));
    }

    #[test]
    fn test_parse_known_and_unknown_names() {
        assert_eq!(ListFilter::parse("all"), Some(ListFilter::All));
        assert_eq!(ListFilter::parse("pending"), Some(ListFilter::Pending));
        assert_eq!(ListFilter::parse("completed"), Some(ListFilter::Completed));
        assert_eq!(ListFilter::parse("high"), Some(ListFilter::HighPriority));
        assert_eq!(ListFilter::parse("urgent"), None);
        assert_eq!(ListFilter::parse("All"), None);
    }
}
