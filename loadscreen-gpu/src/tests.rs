//! GPU tests - render the bar offscreen and inspect the pixels.

use crate::{GpuAvailability, GpuContext, HeadlessBarRenderer};
use loadscreen_core::{BarConfig, ProgressVisualStateController, SceneConfig, SCENE_CONFIG};

const WIDTH: u32 = 64;
const HEIGHT: u32 = 8;

/// Scene whose bar covers the whole target.
fn full_screen_bar_scene() -> SceneConfig {
    SceneConfig {
        bar: BarConfig {
            rect: [-1.0, -1.0, 1.0, 1.0],
            ..SCENE_CONFIG.bar
        },
        ..SCENE_CONFIG
    }
}

fn alpha_at(pixels: &[u8], width: u32, x: u32, y: u32) -> u8 {
    pixels[((y * width + x) * 4 + 3) as usize]
}

fn assert_alpha_near(actual: u8, expected: f32, context: &str) {
    let expected = (expected * 255.0).round() as i32;
    assert!(
        (actual as i32 - expected).abs() <= 1,
        "{context}: alpha {actual}, expected ~{expected}"
    );
}

fn render(scene: &SceneConfig, progress: f64) -> Option<Vec<u8>> {
    render_sized(scene, progress, WIDTH, HEIGHT)
}

fn render_sized(scene: &SceneConfig, progress: f64, width: u32, height: u32) -> Option<Vec<u8>> {
    pollster::block_on(async {
        let GpuAvailability::Available(ctx) = GpuContext::try_init().await else {
            println!("Skipping test: no GPU available");
            return None;
        };
        let mut renderer = HeadlessBarRenderer::new(ctx, scene, width, height);
        let mut controller = ProgressVisualStateController::new();
        controller.set_progress(progress);
        Some(
            renderer
                .render_frame(&controller)
                .await
                .expect("offscreen render should succeed"),
        )
    })
}

/// Test that GPU initialization doesn't panic.
#[test]
fn gpu_init_does_not_panic() {
    pollster::block_on(async {
        match GpuContext::try_init().await {
            GpuAvailability::Available(_) => println!("GPU available"),
            GpuAvailability::Unavailable(reason) => println!("GPU unavailable: {reason}"),
        }
    });
}

#[test]
fn half_fill_splits_bar_at_midpoint() {
    let Some(pixels) = render(&full_screen_bar_scene(), 0.5) else {
        return;
    };
    assert_eq!(pixels.len(), (WIDTH * HEIGHT * 4) as usize);

    let y = HEIGHT / 2;
    for x in 0..WIDTH / 2 {
        assert_alpha_near(alpha_at(&pixels, WIDTH, x, y), 1.0, &format!("x={x}"));
    }
    for x in WIDTH / 2..WIDTH {
        assert_alpha_near(alpha_at(&pixels, WIDTH, x, y), 0.2, &format!("x={x}"));
    }
}

#[test]
fn empty_and_full_bar() {
    let scene = full_screen_bar_scene();

    let Some(empty) = render(&scene, 0.0) else {
        return;
    };
    for x in 0..WIDTH {
        assert_alpha_near(alpha_at(&empty, WIDTH, x, 0), 0.2, &format!("empty x={x}"));
    }

    let Some(full) = render(&scene, 1.0) else {
        return;
    };
    for x in 0..WIDTH {
        assert_alpha_near(alpha_at(&full, WIDTH, x, 0), 1.0, &format!("full x={x}"));
    }
}

#[test]
fn filled_pixels_use_bar_color() {
    let Some(pixels) = render(&full_screen_bar_scene(), 1.0) else {
        return;
    };
    let (r, g, b) = SCENE_CONFIG.bar.color.channels();
    let px = &pixels[0..4];
    assert!((px[0] as i32 - r as i32).abs() <= 1);
    assert!((px[1] as i32 - g as i32).abs() <= 1);
    assert!((px[2] as i32 - b as i32).abs() <= 1);
}

/// Pixel column/row whose centre maps to the given NDC coordinates.
fn ndc_to_pixel(x: f32, y: f32, width: u32, height: u32) -> (u32, u32) {
    let col = ((x + 1.0) / 2.0 * width as f32) as u32;
    let row = ((1.0 - y) / 2.0 * height as f32) as u32;
    (col.min(width - 1), row.min(height - 1))
}

#[test]
fn bar_appears_at_configured_rect() {
    // Tall enough that the thin configured bar covers whole pixel rows.
    const W: u32 = 64;
    const H: u32 = 400;
    let Some(pixels) = render_sized(&SCENE_CONFIG, 0.5, W, H) else {
        return;
    };
    assert_eq!(pixels.len(), (W * H * 4) as usize);

    let [left, bottom, right, top] = SCENE_CONFIG.bar.rect;
    let mid_y = (bottom + top) / 2.0;
    let (_, row) = ndc_to_pixel(0.0, mid_y, W, H);
    let (filled_col, _) = ndc_to_pixel(left + (right - left) * 0.25, mid_y, W, H);
    let (unfilled_col, _) = ndc_to_pixel(left + (right - left) * 0.75, mid_y, W, H);
    let (outside_col, _) = ndc_to_pixel((left - 1.0) / 2.0, mid_y, W, H);

    assert_alpha_near(alpha_at(&pixels, W, filled_col, row), 1.0, "filled half");
    assert_alpha_near(alpha_at(&pixels, W, unfilled_col, row), 0.2, "unfilled half");
    assert_eq!(alpha_at(&pixels, W, outside_col, row), 0, "left of bar");

    // Rows well above and below the bar stay transparent.
    let (_, above) = ndc_to_pixel(0.0, top + 0.1, W, H);
    let (_, below) = ndc_to_pixel(0.0, bottom - 0.1, W, H);
    for x in 0..W {
        assert_eq!(alpha_at(&pixels, W, x, 0), 0, "top row x={x}");
        assert_eq!(alpha_at(&pixels, W, x, above), 0, "above bar x={x}");
        assert_eq!(alpha_at(&pixels, W, x, below), 0, "below bar x={x}");
    }
}
