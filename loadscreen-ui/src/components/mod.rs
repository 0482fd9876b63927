mod loading_screen;
mod progress_bar;
mod thumbnail_strip;
mod title;

pub use loading_screen::LoadingScreen;
pub use progress_bar::ProgressBar;
pub use thumbnail_strip::ThumbnailStrip;
pub use title::Title;
