//! The active visibility rule for the task list.
//!
//! Filter and search are independent and do not compose: applying one
//! replaces the other (last-applied wins). An unrecognized filter name hides
//! every task; there is no default-true fallback.

use crate::filter::ListFilter;
use crate::search::{DescriptionSearcher, TaskSearcher};
use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityRule {
    Filter(ListFilter),
    HideAll,
    Search(String),
}

impl Default for VisibilityRule {
    fn default() -> Self {
        VisibilityRule::Filter(ListFilter::All)
    }
}

impl VisibilityRule {
    pub fn from_filter_name(name: &str) -> Self {
        match ListFilter::parse(name) {
            Some(filter) => VisibilityRule::Filter(filter),
            None => VisibilityRule::HideAll,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            VisibilityRule::Filter(filter) => filter.matches(task),
            VisibilityRule::HideAll => false,
            VisibilityRule::Search(query) => DescriptionSearcher::new(query).matches(task),
        }
    }

    /// Per-task visibility flags, parallel to the task slice.
    pub fn visible_flags(&self, tasks: &[Task]) -> Vec<bool> {
        match self {
            VisibilityRule::Filter(filter) => tasks.iter().map(|t| filter.matches(t)).collect(),
            VisibilityRule::HideAll => vec![false; tasks.len()],
            VisibilityRule::Search(query) => {
                let searcher = DescriptionSearcher::new(query);
                tasks.iter().map(|t| searcher.matches(t)).collect()
            }
        }
    }

    pub fn visible_count(&self, tasks: &[Task]) -> usize {
        self.visible_flags(tasks).into_iter().filter(|v| *v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new(1, "water the garden").with_completed(true),
            Task::new(2, "buy milk"),
            Task::new(3, "file taxes").with_priority(Priority::High),
        ]
    }

    #[test]
    fn test_unknown_filter_name_hides_all() {
        let rule = VisibilityRule::from_filter_name("urgent");
        assert_eq!(rule, VisibilityRule::HideAll);
        assert_eq!(rule.visible_count(&tasks()), 0);
        assert_eq!(rule.visible_flags(&tasks()), vec![false, false, false]);
    }

    #[test]
    fn test_known_filter_name() {
        let rule = VisibilityRule::from_filter_name("pending");
        assert_eq!(rule, VisibilityRule::Filter(ListFilter::Pending));
        assert_eq!(rule.visible_count(&tasks()), 2);
    }

    #[test]
    fn test_search_rule_matches_substring() {
        let rule = VisibilityRule::Search("MILK".to_string());
        assert_eq!(rule.visible_flags(&tasks()), vec![false, true, false]);
    }

    #[test]
    fn test_empty_search_shows_all() {
        let rule = VisibilityRule::Search(String::new());
        assert_eq!(rule.visible_count(&tasks()), 3);
    }

    #[test]
    fn test_rules_replace_rather_than_compose() {
        // A search applied after a filter consults only the query; the
        // completed task still matches.
        let rule = VisibilityRule::Search("garden".to_string());
        assert!(rule.matches(&tasks()[0]));
    }
}
