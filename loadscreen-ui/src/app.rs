use crate::components::LoadingScreen;
use leptos::*;
use loadscreen_core::SCENE_CONFIG;

#[component]
pub fn App() -> impl IntoView {
    match SCENE_CONFIG.to_json() {
        Ok(json) => log::debug!("Scene config: {json}"),
        Err(e) => log::warn!("Scene config could not be serialized: {e}"),
    }

    view! { <LoadingScreen /> }
}
