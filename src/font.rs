//! Font lookup for the preview captions
//!
//! Fonts are looked up in a fixed, platform-specific list of system paths.
//! The first candidate that loads wins; when nothing loads, an 8x8 bitmap
//! font compiled into the binary is used instead, so resolution never fails.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_text_mut},
    rect::Rect,
};
use rusttype::{point, Font, Scale};
use std::path::Path;

#[cfg(target_os = "macos")]
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/System/Library/Fonts/SFNS.ttf",
    "/System/Library/Fonts/Supplemental/HelveticaNeue.ttc",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

#[cfg(target_os = "windows")]
pub const FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\segoeuib.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

/// Size of a glyph cell in the built-in bitmap font.
const BITMAP_CELL: u32 = 8;
/// Point size covered by one pixel of bitmap glyph scaling.
const BITMAP_POINTS_PER_PIXEL: f32 = 20.0;

pub enum FontFace {
    TrueType(Font<'static>),
    Bitmap,
}

/// A font ready to measure and draw text at a fixed size.
pub struct LoadedFont {
    face: FontFace,
    size: f32,
}

/// Ink extent of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Resolve a font for `size` from the system candidates.
pub fn load_font(size: f32) -> LoadedFont {
    load_font_from(FONT_CANDIDATES, size)
}

/// Resolve a font for `size`, trying `candidates` in order.
pub fn load_font_from<P: AsRef<Path>>(candidates: &[P], size: f32) -> LoadedFont {
    for candidate in candidates {
        let path = candidate.as_ref();
        if !path.exists() {
            continue;
        }

        match read_face(path) {
            Some(font) => {
                log::debug!("using font {} at size {}", path.display(), size);
                return LoadedFont {
                    face: FontFace::TrueType(font),
                    size,
                };
            }
            None => log::debug!("skipping unreadable font {}", path.display()),
        }
    }

    log::warn!("no system font found, falling back to built-in bitmap font");
    LoadedFont {
        face: FontFace::Bitmap,
        size,
    }
}

fn read_face(path: &Path) -> Option<Font<'static>> {
    let data = std::fs::read(path).ok()?;
    let is_collection = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ttc"));

    if is_collection {
        Font::try_from_vec_and_index(data, 0)
    } else {
        Font::try_from_vec(data)
    }
}

impl LoadedFont {
    #[cfg(test)]
    fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Bitmap)
    }

    /// Width and height of the ink bounding box of `text`.
    pub fn text_size(&self, text: &str) -> TextSize {
        match &self.face {
            FontFace::TrueType(font) => truetype_text_size(font, self.scale(font), text),
            FontFace::Bitmap => bitmap_text_size(self.bitmap_scale(), text),
        }
    }

    /// Draw `text` with its ascent line at `y` and its origin at `x`.
    pub fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
        match &self.face {
            FontFace::TrueType(font) => {
                draw_text_mut(canvas, color, x, y, self.scale(font), font, text)
            }
            FontFace::Bitmap => {
                let pixel = self.bitmap_scale();
                for_each_bitmap_dot(text, |dot_x, dot_y| {
                    let rect = Rect::at(x + dot_x * pixel as i32, y + dot_y * pixel as i32)
                        .of_size(pixel, pixel);
                    draw_filled_rect_mut(canvas, rect, color);
                });
            }
        }
    }

    /// rusttype scales by ascent-to-descent height; convert the em size.
    fn scale(&self, font: &Font<'static>) -> Scale {
        let metrics = font.v_metrics_unscaled();
        let units_per_em = font.units_per_em().max(1) as f32;
        let height = self.size * (metrics.ascent - metrics.descent) / units_per_em;
        Scale::uniform(height.max(1.0))
    }

    fn bitmap_scale(&self) -> u32 {
        ((self.size / BITMAP_POINTS_PER_PIXEL).round() as u32).max(1)
    }
}

fn truetype_text_size(font: &Font<'static>, scale: Scale, text: &str) -> TextSize {
    let ascent = font.v_metrics(scale).ascent;
    let mut bounds: Option<(i32, i32, i32, i32)> = None;

    for glyph in font.layout(text, scale, point(0.0, ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            bounds = Some(match bounds {
                Some((x0, y0, x1, y1)) => (
                    x0.min(bb.min.x),
                    y0.min(bb.min.y),
                    x1.max(bb.max.x),
                    y1.max(bb.max.y),
                ),
                None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
            });
        }
    }

    match bounds {
        Some((x0, y0, x1, y1)) => TextSize {
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        },
        None => TextSize {
            width: 0,
            height: 0,
        },
    }
}

fn bitmap_text_size(pixel: u32, text: &str) -> TextSize {
    let mut bounds: Option<(i32, i32, i32, i32)> = None;

    for_each_bitmap_dot(text, |x, y| {
        bounds = Some(match bounds {
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
            None => (x, y, x + 1, y + 1),
        });
    });

    match bounds {
        Some((x0, y0, x1, y1)) => TextSize {
            width: (x1 - x0) as u32 * pixel,
            height: (y1 - y0) as u32 * pixel,
        },
        None => TextSize {
            width: 0,
            height: 0,
        },
    }
}

/// Visit every lit dot of `text` in unscaled bitmap coordinates.
fn for_each_bitmap_dot(text: &str, mut visit: impl FnMut(i32, i32)) {
    for (index, ch) in text.chars().enumerate() {
        let Some(glyph) = bitmap_glyph(ch) else {
            continue;
        };
        let origin = (index as u32 * BITMAP_CELL) as i32;

        for (row, bits) in glyph.iter().enumerate() {
            for column in 0..BITMAP_CELL {
                if bits & (1 << column) != 0 {
                    visit(origin + column as i32, row as i32);
                }
            }
        }
    }
}

fn bitmap_glyph(ch: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch))
}
