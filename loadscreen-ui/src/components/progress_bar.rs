use crate::config::get_use_gpu;
use crate::rendering::{bar_gradient_css, ndc_rect_css, GpuBar};
use leptos::*;
use loadscreen_core::SCENE_CONFIG;
use web_sys::HtmlCanvasElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BarMode {
    /// Surface creation in flight
    Pending,
    Gpu,
    Css,
}

/// Progress bar. Drawn by the threshold shader on a full-window canvas when
/// a GPU is available, otherwise by an equivalent hard-stop CSS gradient.
#[component]
pub fn ProgressBar(fill_ratio: Signal<f64>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (mode, set_mode) = create_signal(BarMode::Pending);
    let gpu_bar = GpuBar::new();

    // Attach the GPU surface once the canvas is mounted.
    let attach_bar = gpu_bar.clone();
    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if mode.get_untracked() != BarMode::Pending {
            return;
        }
        if !get_use_gpu() {
            log::info!("GPU bar disabled in settings");
            set_mode.set(BarMode::Css);
            return;
        }

        let canvas: HtmlCanvasElement = (*canvas).clone();
        size_canvas_to_window(&canvas);
        attach_bar.attach(canvas, move |result| match result {
            Ok(()) => {
                log::info!("Progress bar rendering on GPU");
                set_mode.set(BarMode::Gpu);
            }
            Err(reason) => {
                log::warn!("GPU bar unavailable, using CSS fallback: {reason}");
                set_mode.set(BarMode::Css);
            }
        });
    });

    // fill_ratio only changes on animation frames, so this draws once per
    // frame at most.
    let draw_bar = gpu_bar.clone();
    create_effect(move |_| {
        let fill = fill_ratio.get();
        if mode.get() == BarMode::Gpu {
            draw_bar.draw(fill);
        }
    });

    let bar = &SCENE_CONFIG.bar;
    let css_style = move || {
        format!(
            "{} background: {};",
            ndc_rect_css(bar.rect),
            bar_gradient_css(bar, fill_ratio.get())
        )
    };

    view! {
        <div class="absolute inset-0 pointer-events-none">
            <canvas node_ref=canvas_ref class="absolute inset-0 w-full h-full" />
            <Show when=move || mode.get() != BarMode::Gpu>
                <div class="absolute rounded-sm" style=css_style />
            </Show>
        </div>
    }
}

fn size_canvas_to_window(canvas: &HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    canvas.set_width(dimension(window.inner_width()));
    canvas.set_height(dimension(window.inner_height()));
}
