//! Counter animation.
//!
//! Displayed counters step one unit toward their target on every
//! animation tick and stop once they arrive. Purely visual; the real
//! numbers always come from [`crate::stats`].

use std::time::Duration;

use crate::stats::TaskStats;

/// Interval between animation steps.
pub const ANIMATION_STEP: Duration = Duration::from_millis(50);

/// A number that walks toward a target one step per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimatedCounter {
    displayed: usize,
    target: usize,
}

impl AnimatedCounter {
    /// A counter already showing `value`.
    pub fn at(value: usize) -> Self {
        Self {
            displayed: value,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: usize) {
        self.target = target;
    }

    /// Advance one step. Returns true if the displayed value changed.
    pub fn step(&mut self) -> bool {
        if self.displayed < self.target {
            self.displayed += 1;
            true
        } else if self.displayed > self.target {
            self.displayed -= 1;
            true
        } else {
            false
        }
    }

    /// Jump straight to the target.
    pub fn finish(&mut self) {
        self.displayed = self.target;
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.displayed == self.target
    }
}

/// The three animated counters in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatCounters {
    pub total: AnimatedCounter,
    pub completed: AnimatedCounter,
    pub high_priority: AnimatedCounter,
}

impl StatCounters {
    pub fn retarget(&mut self, stats: &TaskStats) {
        self.total.set_target(stats.total);
        self.completed.set_target(stats.completed);
        self.high_priority.set_target(stats.high_priority);
    }

    /// Step every counter. Returns true if any displayed value changed.
    pub fn step(&mut self) -> bool {
        // No short-circuit: every counter advances on the same tick.
        let total = self.total.step();
        let completed = self.completed.step();
        let high = self.high_priority.step();
        total || completed || high
    }

    pub fn finish(&mut self) {
        self.total.finish();
        self.completed.finish();
        self.high_priority.finish();
    }

    pub fn is_settled(&self) -> bool {
        self.total.is_settled() && self.completed.is_settled() && self.high_priority.is_settled()
    }
}
