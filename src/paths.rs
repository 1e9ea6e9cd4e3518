use std::path::{Path, PathBuf};

/// Fixed input and output locations, relative to a project root.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub source_icon: PathBuf,
    pub icon_192: PathBuf,
    pub icon_180: PathBuf,
    pub preview: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let assets = root.as_ref().join("assets");

        Self {
            source_icon: assets.join("icon.png"),
            icon_192: assets.join("icon-192.png"),
            icon_180: assets.join("icon-180.png"),
            preview: assets.join("og").join("og-balance.jpg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted() {
        let paths = AssetPaths::new("/srv/site");

        assert_eq!(paths.source_icon, Path::new("/srv/site/assets/icon.png"));
        assert_eq!(paths.icon_192, Path::new("/srv/site/assets/icon-192.png"));
        assert_eq!(paths.icon_180, Path::new("/srv/site/assets/icon-180.png"));
        assert_eq!(
            paths.preview,
            Path::new("/srv/site/assets/og/og-balance.jpg")
        );
    }
}
