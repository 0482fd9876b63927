use crate::rendering::emissive_text_shadow;
use leptos::*;
use loadscreen_core::SCENE_CONFIG;

/// The glowing "LOADING" caption.
#[component]
pub fn Title() -> impl IntoView {
    let title = &SCENE_CONFIG.title;
    let style = format!(
        "color: {}; text-shadow: {}; font-size: {}rem; letter-spacing: 0.2em;",
        title.color.to_css(),
        emissive_text_shadow(title.emissive, title.emissive_intensity),
        title.size,
    );

    view! {
        <h1
            class="absolute inset-x-0 top-1/3 text-center font-bold select-none animate-pulse"
            style=style
        >
            {title.text}
        </h1>
    }
}
