use image::{imageops, imageops::FilterType, Rgb, Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_circle_mut, filter::gaussian_blur_f32};

/// Blur strength covered by one step of layer downscaling.
const BLUR_PER_DOWNSCALE_STEP: f32 = 30.0;
const MAX_DOWNSCALE: u32 = 8;

/// A blurred, semi-transparent disk to composite onto a canvas.
#[derive(Debug, Clone, Copy)]
pub struct RadialGlow {
    pub center: (i32, i32),
    pub radius: u32,
    pub color: Rgb<u8>,
    pub opacity: u8,
    pub blur: f32,
}

/// Draw `glow` onto `canvas` in place (source-over).
///
/// The disk is drawn in its color and opacity on a transparent layer, the
/// whole layer is blurred channel by channel (not premultiplied, so color
/// fades toward transparent black along with alpha) and composited. Large
/// blurs are computed on a smaller layer and scaled back to the canvas size.
pub fn add_radial_glow(canvas: &mut RgbaImage, glow: &RadialGlow) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let layer = glow_layer(width, height, glow);
    imageops::overlay(canvas, &layer, 0, 0);
}

/// Blurred glow layer, sized `width` x `height`.
fn glow_layer(width: u32, height: u32, glow: &RadialGlow) -> RgbaImage {
    let factor = downscale_factor(glow.blur);
    let step = factor as i32;
    let [r, g, b] = glow.color.0;

    let mut layer = RgbaImage::new(width.div_ceil(factor), height.div_ceil(factor));
    draw_filled_circle_mut(
        &mut layer,
        (glow.center.0.div_euclid(step), glow.center.1.div_euclid(step)),
        (glow.radius / factor) as i32,
        Rgba([r, g, b, glow.opacity]),
    );

    let sigma = glow.blur / factor as f32;
    if sigma > 0.0 {
        layer = gaussian_blur_f32(&layer, sigma);
    }

    if factor > 1 {
        imageops::resize(&layer, width, height, FilterType::Triangle)
    } else {
        layer
    }
}

/// How much smaller the glow layer is than the canvas for a given blur strength.
pub fn downscale_factor(blur: f32) -> u32 {
    if !blur.is_finite() || blur <= 0.0 {
        return 1;
    }
    ((blur / BLUR_PER_DOWNSCALE_STEP) as u32).clamp(1, MAX_DOWNSCALE)
}
