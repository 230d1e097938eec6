use std::time::Instant;

use taskdeck_domain::{ListFilter, VisibilityRule};

use crate::app::App;
use crate::toast::Severity;

impl App {
    pub fn apply_filter(&mut self, filter: ListFilter) {
        self.active_filter = Some(filter);
        self.visibility = VisibilityRule::Filter(filter);
        self.refresh_visibility();
        self.reveal.restart(Instant::now());
        self.recompute_stats();
        let count = self.visible_count();
        self.toasts.notify(
            format!("Showing {} Tasks ({})", filter.label(), count),
            Severity::Info,
        );
    }

    /// Filter by name as carried on the filter controls. Unknown names hide
    /// everything and report a zero count; there is no match-all fallback.
    pub fn apply_filter_name(&mut self, name: &str) {
        match ListFilter::parse(name) {
            Some(filter) => self.apply_filter(filter),
            None => {
                tracing::debug!(name, "unknown filter name");
                self.active_filter = None;
                self.visibility = VisibilityRule::HideAll;
                self.refresh_visibility();
                self.recompute_stats();
                self.toasts.notify(
                    format!("Showing {} Tasks (0)", capitalize(name)),
                    Severity::Info,
                );
            }
        }
    }

    /// Live search: runs on every keystroke. Replaces any active filter
    /// rather than composing with it.
    pub fn apply_search(&mut self) {
        let query = self.search.as_str().to_string();
        self.active_filter = None;
        self.visibility = VisibilityRule::Search(query);
        self.refresh_visibility();
        self.recompute_stats();
        let count = self.visible_count();
        self.toasts
            .notify(format!("Found {} tasks", count), Severity::Info);
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pending"), "Pending");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }
}
