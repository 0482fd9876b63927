use crate::components::{ProgressBar, ThumbnailStrip, Title};
use crate::config::{get_feed_interval, get_feed_step};
use crate::hooks::use_progress_feed;
use crate::rendering::{FrameLoop, FrameSnapshot};
use leptos::*;
use loadscreen_core::{ProgressVisualStateController, SCENE_CONFIG};

/// Owns the controller. The progress feed is its only writer; the frame
/// loop copies derived state into `frame` for the renderers to read.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let controller = create_rw_signal(ProgressVisualStateController::new());
    let frame = create_rw_signal(FrameSnapshot::default());

    use_progress_feed(controller, get_feed_step(), get_feed_interval());

    match FrameLoop::start(move || {
        let snapshot = controller.with_untracked(FrameSnapshot::capture);
        if frame.with_untracked(|current| *current != snapshot) {
            frame.set(snapshot);
        }
    }) {
        Ok(frame_loop) => on_cleanup(move || frame_loop.stop()),
        Err(e) => log::error!("Failed to start frame loop: {e:?}"),
    }

    let fill_ratio = Signal::derive(move || frame.with(|f| f.fill_ratio));

    view! {
        <div
            class="fixed inset-0 overflow-hidden"
            style=format!("background: {};", SCENE_CONFIG.background.to_css())
        >
            <Title />
            <ThumbnailStrip frame=frame.read_only() />
            <ProgressBar fill_ratio=fill_ratio />
        </div>
    }
}
