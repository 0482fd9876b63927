use crate::rendering::FrameSnapshot;
use leptos::*;
use loadscreen_core::SCENE_CONFIG;

/// The fixed row of thumbnails. Each one's opacity follows its marker.
#[component]
pub fn ThumbnailStrip(frame: ReadSignal<FrameSnapshot>) -> impl IntoView {
    // Only re-read opacities when the controller ran a marker pass; bar-only
    // frames leave the thumbnails untouched.
    let generation = create_memo(move |_| frame.with(|f| f.marker_generation));
    let markers = create_memo(move |_| {
        generation.get();
        frame.get_untracked()
    });

    let layout = &SCENE_CONFIG.markers;
    let size = layout.size_px;

    view! {
        <div class="absolute inset-0 pointer-events-none">
            {layout
                .positions
                .iter()
                .enumerate()
                .map(|(index, &(x, y))| {
                    let style = move || {
                        format!(
                            "left: {x}%; top: {y}%; width: {size}px; height: {size}px; \
                             transform: translate(-50%, -50%); opacity: {:.2};",
                            markers.with(|m| m.opacity(index)),
                        )
                    };
                    view! {
                        <div
                            class="absolute rounded-md bg-white/80 flex items-center justify-center text-black text-sm transition-opacity duration-300"
                            style=style
                        >
                            {index + 1}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
