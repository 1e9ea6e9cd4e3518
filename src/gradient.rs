use image::{Rgb, RgbImage};

/// Fill a canvas row by row, interpolating linearly from `top` to `bottom`.
///
/// Channels are truncated toward zero, so row 0 is exactly `top` and the
/// last row is exactly `bottom`. A single-row canvas gets `top`.
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);

    for (y, row) in canvas.enumerate_rows_mut() {
        let color = row_color(y, height, top, bottom);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }

    canvas
}

/// Color of row `y` in a gradient of `height` rows.
pub fn row_color(y: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> Rgb<u8> {
    if height < 2 {
        return top;
    }

    let ratio = y as f64 / (height - 1) as f64;
    let lerp = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * ratio) as u8;

    Rgb([
        lerp(top[0], bottom[0]),
        lerp(top[1], bottom[1]),
        lerp(top[2], bottom[2]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: Rgb<u8> = Rgb([5, 6, 15]);
    const BOTTOM: Rgb<u8> = Rgb([8, 12, 24]);

    #[test]
    fn test_first_and_last_rows_match_endpoints() {
        let canvas = vertical_gradient(40, 630, TOP, BOTTOM);

        assert_eq!(canvas.dimensions(), (40, 630));
        assert_eq!(*canvas.get_pixel(0, 0), TOP);
        assert_eq!(*canvas.get_pixel(39, 629), BOTTOM);
    }

    #[test]
    fn test_rows_are_uniform() {
        let canvas = vertical_gradient(64, 32, TOP, BOTTOM);

        for y in 0..32 {
            let first = *canvas.get_pixel(0, y);
            for x in 1..64 {
                assert_eq!(*canvas.get_pixel(x, y), first, "row {} varies at x={}", y, x);
            }
        }
    }

    #[test]
    fn test_truncates_toward_zero() {
        // Halfway from 0 to 255 is 127.5, truncated to 127.
        let color = row_color(1, 3, Rgb([0, 0, 0]), Rgb([255, 255, 255]));
        assert_eq!(color, Rgb([127, 127, 127]));

        // Descending channels truncate toward zero as well (127.5 -> 127).
        let color = row_color(1, 3, Rgb([255, 255, 255]), Rgb([0, 0, 0]));
        assert_eq!(color, Rgb([127, 127, 127]));
    }

    #[test]
    fn test_monotonic_between_endpoints() {
        let canvas = vertical_gradient(1, 256, Rgb([0, 0, 0]), Rgb([255, 128, 64]));

        for y in 1..256 {
            let above = canvas.get_pixel(0, y - 1);
            let here = canvas.get_pixel(0, y);
            for c in 0..3 {
                assert!(here[c] >= above[c]);
            }
        }
    }

    #[test]
    fn test_single_row_uses_top() {
        let canvas = vertical_gradient(8, 1, TOP, BOTTOM);
        assert_eq!(*canvas.get_pixel(7, 0), TOP);
    }
}
