//! Design constants for the social preview image
//!
//! The values live in an embedded JSON document so the whole look of the
//! preview can be read in one place. Colors are CSS color strings.

use crate::error::AssetError;
use anyhow::{Context, Result};
use image::Rgb;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

const BALANCE_STYLE_JSON: &str = r##"
{
  "width": 1200,
  "height": 630,
  "background": { "top": "#05060f", "bottom": "#080c18" },
  "glows": [
    { "x": 0.18, "y": 0.22, "radius": 340, "color": "#8f5bff", "opacity": 120, "blur": 120.0 },
    { "x": 0.82, "y": 0.25, "radius": 320, "color": "#48e6b0", "opacity": 110, "blur": 120.0 },
    { "x": 0.62, "y": 0.78, "radius": 300, "color": "#5096ff", "opacity": 90, "blur": 120.0 }
  ],
  "icon": { "size": 112, "gap": 30 },
  "headline": {
    "text": "Finanze personali con controllo totale",
    "size": 60.0,
    "color": "#eef3ff"
  },
  "caption_gap": 16,
  "subline": {
    "text": "Privacy-first · Offline · Open source",
    "size": 30.0,
    "color": "#aebad4"
  }
}
"##;

/// Complete description of the preview image
#[derive(Deserialize, Debug, Clone)]
pub struct PreviewStyle {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Vertical gradient behind everything else
    pub background: Background,

    /// Glows applied in order, later ones over earlier ones
    pub glows: Vec<GlowSpec>,

    /// Size of the centered icon and the gap below it
    pub icon: IconSpec,

    /// First caption line
    pub headline: Caption,

    /// Gap between headline and subline
    pub caption_gap: i32,

    /// Second caption line
    pub subline: Caption,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Background {
    #[serde(deserialize_with = "de_color")]
    pub top: Rgb<u8>,
    #[serde(deserialize_with = "de_color")]
    pub bottom: Rgb<u8>,
}

/// A soft radial light placed at a fraction of the canvas size
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct GlowSpec {
    /// Horizontal position as a fraction of the canvas width
    pub x: f64,

    /// Vertical position as a fraction of the canvas height
    pub y: f64,

    /// Radius of the disk before blurring
    pub radius: u32,

    #[serde(deserialize_with = "de_color")]
    pub color: Rgb<u8>,

    /// Alpha of the disk, 0..=255
    pub opacity: u8,

    /// Gaussian blur strength (sigma)
    pub blur: f32,
}

impl GlowSpec {
    /// Pixel center on a canvas of the given size, truncated toward zero.
    pub fn center(&self, width: u32, height: u32) -> (i32, i32) {
        (
            (width as f64 * self.x) as i32,
            (height as f64 * self.y) as i32,
        )
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct IconSpec {
    pub size: u32,
    /// Gap between the icon and the headline
    pub gap: i32,
}

/// One line of text with its font size and fill color
#[derive(Deserialize, Debug, Clone)]
pub struct Caption {
    pub text: String,
    pub size: f32,
    #[serde(deserialize_with = "de_color")]
    pub color: Rgb<u8>,
}

impl PreviewStyle {
    /// The style of the Balance social preview (`og-balance.jpg`).
    pub fn balance() -> Result<Self> {
        serde_json::from_str(BALANCE_STYLE_JSON).context("Invalid embedded preview style")
    }
}

/// Parse a CSS color string into an opaque RGB pixel.
pub fn parse_color(value: &str) -> Result<Rgb<u8>, AssetError> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| AssetError::InvalidColor(value.to_string()))?;

    Ok(Rgb([
        channel(color.red),
        channel(color.green),
        channel(color.blue),
    ]))
}

fn channel(value: f32) -> u8 {
    (value * 255.).round().clamp(0., 255.) as u8
}

fn de_color<'de, D>(deserializer: D) -> Result<Rgb<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_color(&value).map_err(serde::de::Error::custom)
}
