//! Uniform data for the progress bar shader.

use bytemuck::{Pod, Zeroable};
use loadscreen_core::{BarConfig, ProgressVisualStateController};

/// Uniform block read by both shader stages. Layout matches `BarUniforms`
/// in the WGSL source.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BarUniforms {
    /// left, bottom, right, top in NDC
    pub rect: [f32; 4],
    /// rgb, w unused
    pub color: [f32; 4],
    pub fill_ratio: f32,
    pub filled_alpha: f32,
    pub unfilled_alpha: f32,
    pub _pad0: f32,
}

impl BarUniforms {
    pub fn new(bar: &BarConfig, fill_ratio: f32) -> Self {
        let [r, g, b] = bar.color.to_unit_f32();
        Self {
            rect: bar.rect,
            color: [r, g, b, 1.0],
            fill_ratio,
            filled_alpha: bar.filled_alpha,
            unfilled_alpha: bar.unfilled_alpha,
            _pad0: 0.0,
        }
    }

    pub fn from_controller(bar: &BarConfig, controller: &ProgressVisualStateController) -> Self {
        Self::new(bar, controller.bar_fill_ratio() as f32)
    }

    pub fn create_buffer(device: &wgpu::Device) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("bar_uniforms"),
            size: std::mem::size_of::<Self>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }
}

/// Row pitch for texture-to-buffer copies, padded to wgpu's alignment.
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadscreen_core::SCENE_CONFIG;

    #[test]
    fn uniforms_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<BarUniforms>(), 48);
        assert_eq!(std::mem::size_of::<BarUniforms>() % 16, 0);
    }

    #[test]
    fn uniforms_mirror_controller_fill() {
        let mut controller = ProgressVisualStateController::new();
        controller.set_progress(0.375);
        let u = BarUniforms::from_controller(&SCENE_CONFIG.bar, &controller);
        assert_eq!(u.fill_ratio, 0.375);
        assert_eq!(u.filled_alpha, 1.0);
        assert_eq!(u.unfilled_alpha, 0.2);
        assert_eq!(u.rect, SCENE_CONFIG.bar.rect);
    }

    #[test]
    fn uniforms_clamp_through_controller() {
        let mut controller = ProgressVisualStateController::new();
        controller.set_progress(3.0);
        let u = BarUniforms::from_controller(&SCENE_CONFIG.bar, &controller);
        assert_eq!(u.fill_ratio, 1.0);
    }

    #[test]
    fn bytes_match_field_order() {
        let u = BarUniforms::new(&SCENE_CONFIG.bar, 0.5);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats.len(), 12);
        assert_eq!(floats[8], 0.5);
        assert_eq!(floats[7], 1.0);
    }

    #[test]
    fn row_padding() {
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(128), 512);
    }
}
