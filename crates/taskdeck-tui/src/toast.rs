use ratatui::style::Color;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(5);
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
    Warning,
    Neutral,
}

impl Severity {
    /// Map a severity name (typically a response status) to a variant.
    /// Anything unrecognized gets the neutral color.
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            _ => Severity::Neutral,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Info => Color::Blue,
            Severity::Warning => Color::Yellow,
            Severity::Neutral => Color::Gray,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    created_at: Instant,
    dismissed_at: Option<Instant>,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity, now: Instant) -> Self {
        Self {
            message: message.into(),
            severity,
            created_at: now,
            dismissed_at: None,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= TOAST_TTL
    }

    /// A dismissed toast lingers briefly in a dimmed exit state.
    pub fn is_leaving(&self) -> bool {
        self.dismissed_at.is_some()
    }

    fn should_drop(&self, now: Instant) -> bool {
        self.dismissed_at
            .is_some_and(|at| now.duration_since(at) >= TOAST_EXIT)
    }
}

#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.push_at(message, severity, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.toasts.push(Toast::new(message, severity, now));
    }

    /// Expire old toasts and drop the ones whose exit fade has finished.
    pub fn tick(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if !toast.is_leaving() && toast.is_expired(now) {
                toast.dismissed_at = Some(now);
            }
        }
        self.toasts.retain(|t| !t.should_drop(now));
    }

    pub fn dismiss(&mut self, index: usize) {
        self.dismiss_at(index, Instant::now());
    }

    pub fn dismiss_at(&mut self, index: usize, now: Instant) {
        if let Some(toast) = self.toasts.get_mut(index) {
            if !toast.is_leaving() {
                toast.dismissed_at = Some(now);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
