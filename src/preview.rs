use crate::{
    font::{load_font, TextSize},
    glow::{add_radial_glow, RadialGlow},
    gradient::vertical_gradient,
    icons::{load_source_icon, resize_square},
    paths::AssetPaths,
    style::PreviewStyle,
};
use anyhow::{Context, Result};
use image::{imageops, DynamicImage, Rgb, Rgba, RgbImage};
use jpeg_encoder::{ColorType, Encoder};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

pub const JPEG_QUALITY: u8 = 92;

/// Top-left positions of the icon and both caption lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLayout {
    pub icon: (i32, i32),
    pub headline: (i32, i32),
    pub subline: (i32, i32),
}

impl StackLayout {
    /// Stack icon, headline and subline vertically, center the stack in the
    /// canvas height and center every element in the canvas width.
    pub fn compute(
        canvas: (u32, u32),
        style: &PreviewStyle,
        headline: TextSize,
        subline: TextSize,
    ) -> Self {
        let (width, height) = (canvas.0 as i32, canvas.1 as i32);
        let icon_size = style.icon.size as i32;

        let total_height = icon_size
            + style.icon.gap
            + headline.height as i32
            + style.caption_gap
            + subline.height as i32;
        let start_y = (height - total_height).div_euclid(2);
        let center_x = |w: i32| (width - w).div_euclid(2);

        let icon = (center_x(icon_size), start_y);
        let headline_pos = (
            center_x(headline.width as i32),
            icon.1 + icon_size + style.icon.gap,
        );
        let subline_pos = (
            center_x(subline.width as i32),
            headline_pos.1 + headline.height as i32 + style.caption_gap,
        );

        Self {
            icon,
            headline: headline_pos,
            subline: subline_pos,
        }
    }
}

/// Render the preview image in memory.
pub fn compose_preview(source: &DynamicImage, style: &PreviewStyle) -> RgbImage {
    let (width, height) = (style.width, style.height);
    let background = vertical_gradient(
        width,
        height,
        style.background.top,
        style.background.bottom,
    );
    let mut canvas = DynamicImage::ImageRgb8(background).to_rgba8();

    for spec in &style.glows {
        let glow = RadialGlow {
            center: spec.center(width, height),
            radius: spec.radius,
            color: spec.color,
            opacity: spec.opacity,
            blur: spec.blur,
        };
        log::debug!("glow {:?}", glow);
        add_radial_glow(&mut canvas, &glow);
    }

    let headline_font = load_font(style.headline.size);
    let subline_font = load_font(style.subline.size);
    let headline_size = headline_font.text_size(&style.headline.text);
    let subline_size = subline_font.text_size(&style.subline.text);

    let icon = resize_square(source, style.icon.size).to_rgba8();
    let layout = StackLayout::compute((width, height), style, headline_size, subline_size);
    log::debug!("preview layout {:?}", layout);

    imageops::overlay(
        &mut canvas,
        &icon,
        layout.icon.0.into(),
        layout.icon.1.into(),
    );
    headline_font.draw(
        &mut canvas,
        layout.headline.0,
        layout.headline.1,
        opaque(style.headline.color),
        &style.headline.text,
    );
    subline_font.draw(
        &mut canvas,
        layout.subline.0,
        layout.subline.1,
        opaque(style.subline.color),
        &style.subline.text,
    );

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Compose the preview from the source icon and write it as JPEG.
pub fn generate_preview(paths: &AssetPaths, style: &PreviewStyle) -> Result<PathBuf> {
    println!("Generating preview image...");
    let source = load_source_icon(&paths.source_icon)?;
    let preview = compose_preview(&source, style);

    if let Some(dir) = paths.preview.parent() {
        create_dir_all(dir)
            .with_context(|| format!("Can't create output directory {}", dir.display()))?;
    }

    let mut out_file = BufWriter::new(
        File::create(&paths.preview)
            .with_context(|| format!("Failed to create {}", paths.preview.display()))?,
    );
    write_jpeg(&preview, &mut out_file)?;
    out_file.flush()?;

    println!("  ✓ Generated {}", paths.preview.display());
    Ok(paths.preview.clone())
}

/// Encode `image` as baseline JPEG with optimized Huffman tables.
fn write_jpeg<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let width = u16::try_from(image.width()).context("Preview too wide for JPEG")?;
    let height = u16::try_from(image.height()).context("Preview too tall for JPEG")?;

    let mut encoder = Encoder::new(w, JPEG_QUALITY);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(image.as_raw(), width, height, ColorType::Rgb)
        .context("Failed to encode JPEG")?;
    Ok(())
}

fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    let [r, g, b] = color.0;
    Rgba([r, g, b, 255])
}
