use std::time::{Duration, Instant};

/// Per-row fade-in delay: the nth visible row appears n stagger units after
/// the animation started.
pub const STAGGER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, Default)]
pub struct RevealState {
    started: Option<Instant>,
}

impl RevealState {
    pub fn restart(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn revealed(&self, visible_index: usize, now: Instant) -> bool {
        match self.started {
            None => true,
            Some(started) => now.duration_since(started) >= STAGGER * visible_index as u32,
        }
    }
}
