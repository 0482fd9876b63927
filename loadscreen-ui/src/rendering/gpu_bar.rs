//! Progress bar drawn through the wgpu canvas surface.

use web_sys::HtmlCanvasElement;

#[cfg(target_arch = "wasm32")]
use loadscreen_core::SCENE_CONFIG;
#[cfg(target_arch = "wasm32")]
use loadscreen_gpu::CanvasSurface;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Shared handle to the canvas surface, empty until initialization succeeds.
#[derive(Clone, Default)]
pub struct GpuBar {
    #[cfg(target_arch = "wasm32")]
    surface: Rc<RefCell<Option<CanvasSurface>>>,
}

impl GpuBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start async surface creation on `canvas`. `on_ready` receives the
    /// outcome once the adapter and device are resolved.
    #[cfg(target_arch = "wasm32")]
    pub fn attach(
        &self,
        canvas: HtmlCanvasElement,
        on_ready: impl FnOnce(Result<(), String>) + 'static,
    ) {
        let slot = Rc::clone(&self.surface);
        wasm_bindgen_futures::spawn_local(async move {
            match CanvasSurface::new(canvas, &SCENE_CONFIG).await {
                Ok(surface) => {
                    *slot.borrow_mut() = Some(surface);
                    on_ready(Ok(()));
                }
                Err(e) => on_ready(Err(e.to_string())),
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn attach(
        &self,
        canvas: HtmlCanvasElement,
        on_ready: impl FnOnce(Result<(), String>) + 'static,
    ) {
        let _ = canvas;
        on_ready(Err("canvas surfaces require wasm32".into()));
    }

    /// Draw the bar at `fill_ratio`. No-op until attached.
    pub fn draw(&self, fill_ratio: f64) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(surface) = self.surface.borrow_mut().as_mut() {
                if let Err(e) = surface.draw(fill_ratio as f32) {
                    log::warn!("Bar frame skipped: {e}");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = fill_ratio;
        }
    }
}
