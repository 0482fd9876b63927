//! CSS fallbacks and layout helpers for the DOM side of the loading screen.

use loadscreen_core::{BarConfig, Rgb};

/// Hard-stop gradient with the same threshold as the bar shader: full
/// `filled_alpha` up to the fill edge, `unfilled_alpha` after it.
pub fn bar_gradient_css(bar: &BarConfig, fill_ratio: f64) -> String {
    let percent = (fill_ratio.clamp(0.0, 1.0) * 100.0) as f32;
    let filled = rgba_css(bar.color, bar.filled_alpha);
    let unfilled = rgba_css(bar.color, bar.unfilled_alpha);
    format!(
        "linear-gradient(to right, {filled} 0%, {filled} {percent:.2}%, {unfilled} {percent:.2}%, {unfilled} 100%)"
    )
}

pub fn rgba_css(color: Rgb, alpha: f32) -> String {
    let (r, g, b) = color.channels();
    format!("rgba({r}, {g}, {b}, {alpha:.2})")
}

/// Absolute CSS placement for a `[left, bottom, right, top]` NDC rectangle.
pub fn ndc_rect_css(rect: [f32; 4]) -> String {
    let [left, bottom, right, top] = rect;
    format!(
        "left: {:.2}%; top: {:.2}%; width: {:.2}%; height: {:.2}%;",
        (left + 1.0) * 50.0,
        (1.0 - top) * 50.0,
        (right - left) * 50.0,
        (top - bottom) * 50.0,
    )
}

/// Glow for the title text from its emissive color and intensity.
pub fn emissive_text_shadow(color: Rgb, intensity: f32) -> String {
    let blur = (intensity * 24.0).round() as u32;
    format!("0 0 {}px {}", blur, rgba_css(color, intensity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadscreen_core::SCENE_CONFIG;

    #[test]
    fn gradient_has_hard_stop_at_fill() {
        let css = bar_gradient_css(&SCENE_CONFIG.bar, 0.5);
        assert_eq!(
            css,
            "linear-gradient(to right, rgba(255, 165, 0, 1.00) 0%, rgba(255, 165, 0, 1.00) 50.00%, \
             rgba(255, 165, 0, 0.20) 50.00%, rgba(255, 165, 0, 0.20) 100%)"
        );
    }

    #[test]
    fn gradient_clamps_fill() {
        let css = bar_gradient_css(&SCENE_CONFIG.bar, 2.0);
        assert!(css.contains("1.00) 100.00%"));
        let css = bar_gradient_css(&SCENE_CONFIG.bar, -1.0);
        assert!(css.contains("1.00) 0.00%"));
    }

    #[test]
    fn full_screen_rect() {
        assert_eq!(
            ndc_rect_css([-1.0, -1.0, 1.0, 1.0]),
            "left: 0.00%; top: 0.00%; width: 100.00%; height: 100.00%;"
        );
    }

    #[test]
    fn lower_half_rect() {
        assert_eq!(
            ndc_rect_css([-0.5, -1.0, 0.5, 0.0]),
            "left: 25.00%; top: 50.00%; width: 50.00%; height: 50.00%;"
        );
    }

    #[test]
    fn text_shadow_scales_with_intensity() {
        let shadow = emissive_text_shadow(Rgb::from_hex(0xffa500), 0.5);
        assert_eq!(shadow, "0 0 12px rgba(255, 165, 0, 0.50)");
    }
}
