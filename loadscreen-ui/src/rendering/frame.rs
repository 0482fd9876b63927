//! Per-frame snapshot of the visual state and the animation frame loop.

use loadscreen_core::{ProgressVisualStateController, DIM_OPACITY, MARKER_COUNT};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// What the renderers read on a frame. Captured from the controller, never
/// written back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub fill_ratio: f64,
    pub opacities: [f32; MARKER_COUNT],
    pub marker_generation: u64,
}

impl FrameSnapshot {
    pub fn capture(controller: &ProgressVisualStateController) -> Self {
        Self {
            fill_ratio: controller.bar_fill_ratio(),
            opacities: controller.marker_opacities(),
            marker_generation: controller.marker_generation(),
        }
    }

    /// Opacity for thumbnail `index`. Out-of-range indices are logged and
    /// drawn dim.
    pub fn opacity(&self, index: usize) -> f32 {
        match self.opacities.get(index) {
            Some(&opacity) => opacity,
            None => {
                log::error!("Thumbnail index {index} out of range (0..{MARKER_COUNT})");
                DIM_OPACITY
            }
        }
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self::capture(&ProgressVisualStateController::new())
    }
}

/// Recurring requestAnimationFrame callback. Runs until `stop` is called.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let running = Rc::new(Cell::new(true));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let still_running = Rc::clone(&running);
        let next_frame = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !still_running.get() {
                // Drop our own closure to break the reference cycle.
                let _ = next_frame.borrow_mut().take();
                return;
            }

            on_frame();

            if let Some(closure) = next_frame.borrow().as_ref() {
                if let Err(e) = request_frame(closure) {
                    web_sys::console::error_1(&e);
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(closure) = callback.borrow().as_ref() {
            request_frame(closure)?;
        }

        Ok(Self { running })
    }

    pub fn stop(&self) {
        self.running.set(false);
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .request_animation_frame(closure.as_ref().unchecked_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadscreen_core::EMPHASIZED_OPACITY;

    #[test]
    fn default_snapshot_is_empty_and_dim() {
        let snapshot = FrameSnapshot::default();
        assert_eq!(snapshot.fill_ratio, 0.0);
        assert!(snapshot.opacities.iter().all(|&o| o == DIM_OPACITY));
        assert_eq!(snapshot.marker_generation, 0);
    }

    #[test]
    fn capture_reads_derived_state() {
        let mut controller = ProgressVisualStateController::new();
        controller.set_progress(0.5);
        let snapshot = FrameSnapshot::capture(&controller);
        assert_eq!(snapshot.fill_ratio, 0.5);
        assert_eq!(snapshot.opacity(4), EMPHASIZED_OPACITY);
        assert_eq!(snapshot.opacity(5), DIM_OPACITY);
    }

    #[test]
    fn snapshots_differ_when_only_bar_moves() {
        let mut controller = ProgressVisualStateController::new();
        controller.set_progress(0.51);
        let before = FrameSnapshot::capture(&controller);
        controller.set_progress(0.55);
        let after = FrameSnapshot::capture(&controller);
        assert_ne!(before, after);
        assert_eq!(before.marker_generation, after.marker_generation);
    }

    #[test]
    fn out_of_range_opacity_is_dim() {
        assert_eq!(FrameSnapshot::default().opacity(MARKER_COUNT), DIM_OPACITY);
    }
}
