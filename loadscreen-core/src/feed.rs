//! Progress sources feeding the controller.

use crate::error::FeedError;

/// Timer-style progress source: fixed increments ending at exactly 1.0.
///
/// Stops yielding once 1.0 has been produced, so the caller's interval can
/// be cleared when the iterator runs dry.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedFeed {
    step: f64,
    current: f64,
    finished: bool,
}

impl SimulatedFeed {
    pub fn new(step: f64) -> Result<Self, FeedError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(FeedError::InvalidStep(step));
        }
        Ok(Self {
            step,
            current: 0.0,
            finished: false,
        })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Last value handed out (0.0 before the first tick).
    pub fn current(&self) -> f64 {
        self.current
    }

    /// True once 1.0 has been yielded.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for SimulatedFeed {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.finished {
            return None;
        }
        self.current = (self.current + self.step).min(1.0);
        if self.current >= 1.0 {
            self.finished = true;
        }
        Some(self.current)
    }
}

/// Progress of a discrete set of assets being loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadProgress {
    pub completed_steps: u32,
    pub total_steps: u32,
    pub is_complete: bool,
}

impl LoadProgress {
    /// Create new progress tracker.
    pub fn new(total_steps: u32) -> Self {
        Self {
            completed_steps: 0,
            total_steps,
            is_complete: total_steps == 0,
        }
    }

    /// Count one more asset as loaded. Saturates at the total.
    pub fn record_loaded(&mut self) {
        self.completed_steps = (self.completed_steps + 1).min(self.total_steps);
        self.is_complete = self.completed_steps == self.total_steps;
    }

    /// Completion fraction (0.0 to 1.0). Nothing to load counts as done.
    pub fn fraction(&self) -> f64 {
        if self.total_steps == 0 {
            1.0
        } else {
            self.completed_steps as f64 / self.total_steps as f64
        }
    }
}
