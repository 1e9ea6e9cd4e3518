use crate::{error::AssetError, paths::AssetPaths};
use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage};
use std::path::{Path, PathBuf};

/// Load the source icon as RGBA, failing with [`AssetError::MissingSource`]
/// when the file does not exist.
pub fn load_source_icon(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(AssetError::MissingSource(path.to_path_buf()).into());
    }

    let source = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?;

    Ok(DynamicImage::ImageRgba8(source.to_rgba8()))
}

/// Square resize with the filter every asset in this crate uses.
pub fn resize_square(source: &DynamicImage, size: u32) -> DynamicImage {
    source.resize_exact(size, size, FilterType::Lanczos3)
}

/// Write the 192px and 180px app icons, returning their paths.
pub fn generate_app_icons(paths: &AssetPaths) -> Result<Vec<PathBuf>> {
    let source = load_source_icon(&paths.source_icon)?;

    println!("Generating app icons...");
    let targets = [(192, &paths.icon_192), (180, &paths.icon_180)];

    let mut written = Vec::with_capacity(targets.len());
    for (size, path) in targets {
        let resized = resize_square(&source, size);
        save_png(&resized, path)?;
        println!("  ✓ Generated {}", path.display());
        written.push(path.to_path_buf());
    }

    Ok(written)
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_source(root: &Path, width: u32, height: u32) {
        std::fs::create_dir_all(root.join("assets")).unwrap();
        let image = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        image.save(root.join("assets/icon.png")).unwrap();
    }

    #[test]
    fn test_generates_both_sizes() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        write_source(temp_dir.path(), 512, 512);
        let paths = AssetPaths::new(temp_dir.path());

        let written = generate_app_icons(&paths).unwrap();
        assert_eq!(written, vec![paths.icon_192.clone(), paths.icon_180.clone()]);

        let icon_192 = image::open(&paths.icon_192).unwrap();
        let icon_180 = image::open(&paths.icon_180).unwrap();
        assert_eq!((icon_192.width(), icon_192.height()), (192, 192));
        assert_eq!((icon_180.width(), icon_180.height()), (180, 180));
    }

    #[test]
    fn test_non_square_source_is_stretched() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        write_source(temp_dir.path(), 300, 100);
        let paths = AssetPaths::new(temp_dir.path());

        generate_app_icons(&paths).unwrap();

        let icon_180 = image::open(&paths.icon_180).unwrap();
        assert_eq!((icon_180.width(), icon_180.height()), (180, 180));
    }

    #[test]
    fn test_missing_source_is_typed_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let paths = AssetPaths::new(temp_dir.path());

        let err = generate_app_icons(&paths).unwrap_err();

        match err.downcast_ref::<AssetError>() {
            Some(AssetError::MissingSource(path)) => assert_eq!(path, &paths.source_icon),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!paths.icon_192.exists());
        assert!(!paths.icon_180.exists());
    }

    #[test]
    fn test_output_is_deterministic() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        write_source(temp_dir.path(), 256, 256);
        let paths = AssetPaths::new(temp_dir.path());

        generate_app_icons(&paths).unwrap();
        let first = std::fs::read(&paths.icon_192).unwrap();
        generate_app_icons(&paths).unwrap();
        let second = std::fs::read(&paths.icon_192).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_loaded_source_is_rgba() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(temp_dir.path().join("assets")).unwrap();
        let rgb = image::RgbImage::from_pixel(16, 16, image::Rgb([10, 20, 30]));
        let path = temp_dir.path().join("assets/icon.png");
        rgb.save(&path).unwrap();

        let source = load_source_icon(&path).unwrap();
        assert!(matches!(source, DynamicImage::ImageRgba8(_)));
        assert_eq!(source.to_rgba8().get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }
}
