use crate::app::AppMode;

#[derive(Debug, Clone, Copy)]
pub struct Keybinding {
    pub key: &'static str,
    pub description: &'static str,
}

const NORMAL_BINDINGS: &[Keybinding] = &[
    Keybinding {
        key: "j/k",
        description: "navigate",
    },
    Keybinding {
        key: "1-4",
        description: "filter",
    },
    Keybinding {
        key: "/",
        description: "search",
    },
    Keybinding {
        key: "ctrl+c",
        description: "new task",
    },
    Keybinding {
        key: "e",
        description: "edit",
    },
    Keybinding {
        key: "c",
        description: "complete",
    },
    Keybinding {
        key: "d",
        description: "delete",
    },
    Keybinding {
        key: "b",
        description: "sidebar",
    },
    Keybinding {
        key: "q",
        description: "quit",
    },
];

const FORM_BINDINGS: &[Keybinding] = &[
    Keybinding {
        key: "tab",
        description: "switch field",
    },
    Keybinding {
        key: "←/→",
        description: "priority",
    },
    Keybinding {
        key: "enter",
        description: "submit",
    },
    Keybinding {
        key: "esc",
        description: "close",
    },
];

const SEARCH_BINDINGS: &[Keybinding] = &[
    Keybinding {
        key: "type",
        description: "search live",
    },
    Keybinding {
        key: "esc",
        description: "done",
    },
];

pub fn bindings_for(mode: AppMode) -> &'static [Keybinding] {
    match mode {
        AppMode::Normal => NORMAL_BINDINGS,
        AppMode::AddTask | AppMode::EditTask => FORM_BINDINGS,
        AppMode::Search => SEARCH_BINDINGS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_bindings() {
        for mode in [
            AppMode::Normal,
            AppMode::AddTask,
            AppMode::EditTask,
            AppMode::Search,
        ] {
            assert!(!bindings_for(mode).is_empty());
        }
    }

    #[test]
    fn test_normal_mode_keys_are_unique() {
        let keys: Vec<_> = NORMAL_BINDINGS.iter().map(|b| b.key).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }
}
