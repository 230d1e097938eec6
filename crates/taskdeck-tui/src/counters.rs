use taskdeck_domain::TaskStats;

/// A numeric display that walks toward its target one unit per tick,
/// stopping exactly at the target. Animation length is proportional to the
/// distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimatedCounter {
    current: i64,
    target: i64,
}

impl AnimatedCounter {
    pub fn new(value: i64) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: i64) {
        self.target = target;
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn at_target(&self) -> bool {
        self.current == self.target
    }

    /// Advance one unit toward the target. Returns false when already there.
    pub fn step(&mut self) -> bool {
        if self.current == self.target {
            return false;
        }
        self.current += if self.target > self.current { 1 } else { -1 };
        true
    }
}

/// The four summary displays: total, completed, pending, high priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsPanel {
    pub total: AnimatedCounter,
    pub completed: AnimatedCounter,
    pub pending: AnimatedCounter,
    pub high_priority: AnimatedCounter,
}

impl StatsPanel {
    pub fn set_targets(&mut self, stats: TaskStats) {
        self.total.set_target(stats.total as i64);
        self.completed.set_target(stats.completed as i64);
        self.pending.set_target(stats.pending as i64);
        self.high_priority.set_target(stats.high_priority as i64);
    }

    pub fn step_all(&mut self) {
        self.total.step();
        self.completed.step();
        self.pending.step();
        self.high_priority.step();
    }
}
