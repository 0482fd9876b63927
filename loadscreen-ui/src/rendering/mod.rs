mod css;
mod frame;
mod gpu_bar;

pub use css::{bar_gradient_css, emissive_text_shadow, ndc_rect_css};
pub use frame::{FrameLoop, FrameSnapshot};
pub use gpu_bar::GpuBar;
