//! Generates the static image assets of the Balance website: two app icons
//! and the social preview image, all derived from `assets/icon.png`.

pub mod error;
pub mod font;
pub mod glow;
pub mod gradient;
pub mod icons;
pub mod paths;
pub mod preview;
pub mod style;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::AssetError;
pub use paths::AssetPaths;
pub use style::PreviewStyle;

/// Generate every asset under `root`, icons first, then the preview.
///
/// Returns the written files in order. A failure in the preview step leaves
/// the icons on disk.
pub fn generate_all(root: &Path) -> Result<Vec<PathBuf>> {
    let paths = AssetPaths::new(root);
    let style = PreviewStyle::balance()?;

    let mut written = icons::generate_app_icons(&paths)?;
    written.push(preview::generate_preview(&paths, &style)?);

    Ok(written)
}
