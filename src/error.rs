use std::path::PathBuf;

/// Errors raised by the asset pipeline itself.
///
/// Everything else (decode, encode, I/O) travels as `anyhow::Error` with
/// context attached at the call site.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Missing {}", .0.display())]
    MissingSource(PathBuf),
    #[error("Invalid color {0:?}")]
    InvalidColor(String),
}
