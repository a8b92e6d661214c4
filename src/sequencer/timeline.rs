//! Cancellable reveal timeline.
//!
//! A single owned timeline replaces scattered one-shot timers. Each mode
//! switch begins a new generation; steps from a cancelled generation can
//! never apply because `begin` discards them atomically and every poll is
//! tagged with the generation it belongs to.

use eframe::egui::Color32;

use crate::data::Fid;

/// One scheduled visual update: color a marker and optionally show its
/// detail ring after `delay_ms` from sequence start.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStep {
    pub fid: Fid,
    pub delay_ms: u64,
    pub color: Color32,
    pub show_ring: bool,
}

/// Scheduled steps for the live mode, polled from the frame loop.
#[derive(Default)]
pub struct Timeline {
    steps: Vec<RevealStep>,
    next: usize,
    generation: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the live sequence. Steps are stably ordered by delay so
    /// they always apply in nondecreasing schedule order. Returns the new
    /// generation; every `begin`/`cancel` bumps it, invalidating anything
    /// scheduled before.
    pub fn begin(&mut self, mut steps: Vec<RevealStep>) -> u64 {
        steps.sort_by_key(|s| s.delay_ms);
        self.steps = steps;
        self.next = 0;
        self.generation += 1;
        self.generation
    }

    /// Drops all outstanding steps.
    pub fn cancel(&mut self) {
        self.steps.clear();
        self.next = 0;
        self.generation += 1;
    }

    /// Whether any steps are still outstanding.
    pub fn is_running(&self) -> bool {
        self.next < self.steps.len()
    }

    /// Returns the steps newly due at `elapsed_ms` since sequence start,
    /// advancing past them. Each step is returned exactly once.
    pub fn poll(&mut self, elapsed_ms: u64) -> &[RevealStep] {
        let start = self.next;
        while self.next < self.steps.len() && self.steps[self.next].delay_ms <= elapsed_ms {
            self.next += 1;
        }
        &self.steps[start..self.next]
    }

    /// Delay of the next outstanding step, if any. Used to schedule the
    /// next repaint.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.steps.get(self.next).map(|s| s.delay_ms)
    }
}
