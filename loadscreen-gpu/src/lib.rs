//! GPU rendering of the loading screen progress bar using wgpu.

mod buffers;
mod device;
mod error;
mod renderer;
mod shader;
#[cfg(target_arch = "wasm32")]
mod surface;
#[cfg(test)]
mod tests;

pub use buffers::{padded_bytes_per_row, BarUniforms};
pub use device::{GpuAvailability, GpuContext};
pub use error::GpuError;
pub use renderer::{BarRenderer, HeadlessBarRenderer, OffscreenTarget};
pub use shader::{BAR_SHADER, BAR_VERTEX_COUNT};
#[cfg(target_arch = "wasm32")]
pub use surface::CanvasSurface;
