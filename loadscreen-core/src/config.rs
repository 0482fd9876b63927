//! Static scene configuration.
//!
//! Everything the loading screen sets up once at start: camera, lights,
//! title text, progress bar geometry and the thumbnail layout. None of it
//! changes with progress.

use crate::markers::MARKER_COUNT;
use serde::Serialize;

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    pub fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// `#rrggbb` form for CSS.
    pub fn to_css(self) -> String {
        format!("#{:06x}", self.0)
    }

    /// Channels as 0..1 floats, sRGB-encoded.
    pub fn to_unit_f32(self) -> [f32; 3] {
        let (r, g, b) = self.channels();
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TitleConfig {
    pub text: &'static str,
    pub font_path: &'static str,
    pub size: f32,
    pub depth: f32,
    pub curve_segments: u32,
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
}

/// Progress bar placement and threshold alphas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BarConfig {
    /// `[left, bottom, right, top]` in normalized device coordinates.
    pub rect: [f32; 4],
    pub color: Rgb,
    pub filled_alpha: f32,
    pub unfilled_alpha: f32,
}

/// Thumbnail strip layout. Positions are percentages of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MarkerLayout {
    pub positions: [(f32, f32); MARKER_COUNT],
    pub size_px: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SceneConfig {
    pub background: Rgb,
    pub camera: CameraConfig,
    pub ambient_light: AmbientLight,
    pub directional_light: DirectionalLight,
    pub title: TitleConfig,
    pub bar: BarConfig,
    pub markers: MarkerLayout,
}

impl SceneConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The loading screen scene.
pub static SCENE_CONFIG: SceneConfig = SceneConfig {
    background: Rgb::from_hex(0x000000),
    camera: CameraConfig {
        fov_degrees: 75.0,
        near: 0.1,
        far: 1000.0,
        position: [0.0, 0.0, 30.0],
    },
    ambient_light: AmbientLight {
        color: Rgb::from_hex(0x404040),
        intensity: 10.0,
    },
    directional_light: DirectionalLight {
        color: Rgb::from_hex(0xffffff),
        intensity: 1.0,
        position: [5.0, 5.0, 5.0],
    },
    title: TitleConfig {
        text: "LOADING",
        font_path: "assets/fonts/font.json",
        size: 5.0,
        depth: 0.5,
        curve_segments: 12,
        color: Rgb::from_hex(0xffa500),
        emissive: Rgb::from_hex(0xffa500),
        emissive_intensity: 0.8,
    },
    bar: BarConfig {
        rect: [-0.6, -0.42, 0.6, -0.38],
        color: Rgb::from_hex(0xffa500),
        filled_alpha: 1.0,
        unfilled_alpha: 0.2,
    },
    markers: MarkerLayout {
        positions: [
            (12.5, 80.0),
            (22.5, 80.0),
            (32.5, 80.0),
            (42.5, 80.0),
            (52.5, 80.0),
            (62.5, 80.0),
            (72.5, 80.0),
            (82.5, 80.0),
        ],
        size_px: 64,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_css_is_zero_padded() {
        assert_eq!(Rgb::from_hex(0x404040).to_css(), "#404040");
        assert_eq!(Rgb::from_hex(0x0000ff).to_css(), "#0000ff");
    }

    #[test]
    fn rgb_drops_alpha_byte() {
        assert_eq!(Rgb::from_hex(0xff_ffa500), Rgb(0xffa500));
    }

    #[test]
    fn rgb_unit_channels() {
        let [r, g, b] = Rgb::from_hex(0xff8000).to_unit_f32();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn bar_rect_is_well_formed() {
        let [left, bottom, right, top] = SCENE_CONFIG.bar.rect;
        assert!(left < right && bottom < top);
        assert!([left, bottom, right, top].iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn markers_are_ordered_left_to_right() {
        let xs: Vec<f32> = SCENE_CONFIG.markers.positions.iter().map(|p| p.0).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn config_serializes_to_json() {
        let json = SCENE_CONFIG.to_json().unwrap();
        assert!(json.contains("\"text\":\"LOADING\""));
        assert!(json.contains("\"fov_degrees\":75.0"));
    }
}
