//! Progress-driven visual state.
//!
//! Maps a single load-progress scalar to the two visual channels of the
//! loading screen: a continuous bar fill and a discrete set of emphasized
//! markers. Renderers only read from here; the progress feed is the only
//! writer.

use crate::error::MarkerError;
use crate::markers::{MarkerSet, MARKER_COUNT};

/// Single source of truth for progress and everything derived from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressVisualStateController {
    progress: f64,
    /// `None` until the first update.
    active_marker: Option<usize>,
    markers: MarkerSet,
    /// Bumped every time the marker pass runs.
    marker_generation: u64,
}

impl ProgressVisualStateController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new progress value.
    ///
    /// Out-of-range input is clamped to [0, 1] and NaN is read as 0. The bar
    /// fill always tracks the value; markers are only rewritten when the
    /// active index moves.
    pub fn set_progress(&mut self, value: f64) {
        let clamped = clamp_progress(value);
        self.progress = clamped;

        let active = Some(active_index_for(clamped));
        if active != self.active_marker {
            log::debug!(
                "Active marker {:?} -> {:?} at progress {:.3}",
                self.active_marker,
                active,
                clamped
            );
            self.active_marker = active;
            self.markers.apply_active(active);
            self.marker_generation += 1;
        }
    }

    /// Current progress after clamping.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Value for the bar shader's fill uniform. Equal to the clamped progress.
    pub fn bar_fill_ratio(&self) -> f64 {
        self.progress
    }

    /// Whether marker `index` is emphasized.
    pub fn marker_emphasis(&self, index: isize) -> Result<bool, MarkerError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.markers.get(i))
            .map(|m| m.is_emphasized())
            .ok_or(MarkerError::OutOfRange {
                index,
                count: MARKER_COUNT,
            })
    }

    /// Highest emphasized marker, or `None` before the first update.
    pub fn active_marker_index(&self) -> Option<usize> {
        self.active_marker
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn marker_opacities(&self) -> [f32; MARKER_COUNT] {
        self.markers.opacities()
    }

    pub fn marker_generation(&self) -> u64 {
        self.marker_generation
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// `floor(progress * N)`, with progress 1.0 landing on the last marker.
fn active_index_for(progress: f64) -> usize {
    ((progress * MARKER_COUNT as f64).floor() as usize).min(MARKER_COUNT - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emphasized(c: &ProgressVisualStateController) -> Vec<bool> {
        (0..MARKER_COUNT as isize)
            .map(|i| c.marker_emphasis(i).unwrap())
            .collect()
    }

    #[test]
    fn starts_with_no_active_marker() {
        let c = ProgressVisualStateController::new();
        assert_eq!(c.active_marker_index(), None);
        assert_eq!(c.bar_fill_ratio(), 0.0);
        assert!(emphasized(&c).iter().all(|&e| !e));
        assert_eq!(c.marker_generation(), 0);
    }

    #[test]
    fn zero_progress_emphasizes_first_marker() {
        let mut c = ProgressVisualStateController::new();
        c.set_progress(0.0);
        assert_eq!(c.bar_fill_ratio(), 0.0);
        assert_eq!(c.active_marker_index(), Some(0));
        assert_eq!(
            emphasized(&c),
            vec![true, false, false, false, false, false, false, false]
        );
    }

    #[test]
    fn half_progress_emphasizes_five_markers() {
        let mut c = ProgressVisualStateController::new();
        c.set_progress(0.5);
        assert_eq!(c.bar_fill_ratio(), 0.5);
        assert_eq!(c.active_marker_index(), Some(4));
        assert_eq!(
            emphasized(&c),
            vec![true, true, true, true, true, false, false, false]
        );
    }

    #[test]
    fn full_progress_clamps_to_last_marker() {
        let mut c = ProgressVisualStateController::new();
        c.set_progress(1.0);
        assert_eq!(c.bar_fill_ratio(), 1.0);
        assert_eq!(c.active_marker_index(), Some(MARKER_COUNT - 1));
        assert!(emphasized(&c).iter().all(|&e| e));
        assert!(c.is_complete());
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let mut c = ProgressVisualStateController::new();
        c.set_progress(-3.5);
        assert_eq!(c.bar_fill_ratio(), 0.0);
        c.set_progress(42.0);
        assert_eq!(c.bar_fill_ratio(), 1.0);
        c.set_progress(f64::NEG_INFINITY);
        assert_eq!(c.bar_fill_ratio(), 0.0);
    }

    #[test]
    fn nan_reads_as_zero() {
        let mut c = ProgressVisualStateController::new();
        c.set_progress(0.9);
        c.set_progress(f64::NAN);
        assert_eq!(c.bar_fill_ratio(), 0.0);
        assert_eq!(c.active_marker_index(), Some(0));
    }

    #[test]
    fn out_of_range_marker_query_fails() {
        let c = ProgressVisualStateController::new();
        assert_eq!(
            c.marker_emphasis(8),
            Err(MarkerError::OutOfRange { index: 8, count: 8 })
        );
        assert_eq!(
            c.marker_emphasis(-1),
            Err(MarkerError::OutOfRange { index: -1, count: 8 })
        );
    }

    #[test]
    fn bar_moves_without_marker_pass() {
        let mut c = ProgressVisualStateController::new();
        c.set_progress(0.51);
        let generation = c.marker_generation();
        c.set_progress(0.6);
        assert_eq!(c.bar_fill_ratio(), 0.6);
        assert_eq!(c.active_marker_index(), Some(4));
        assert_eq!(c.marker_generation(), generation);

        c.set_progress(0.63);
        assert_eq!(c.active_marker_index(), Some(5));
        assert_eq!(c.marker_generation(), generation + 1);
    }

    #[test]
    fn opacities_match_emphasis() {
        let mut c = ProgressVisualStateController::new();
        c.set_progress(0.25);
        assert_eq!(
            c.marker_opacities(),
            [1.0, 1.0, 1.0, 0.3, 0.3, 0.3, 0.3, 0.3]
        );
    }
}
