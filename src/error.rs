use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("Sprite atlas not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode sprite atlas: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Atlas width {actual} does not match grid ({columns} columns x {icon_size}px = {expected})")]
    GridMismatch {
        actual: u32,
        columns: u32,
        icon_size: u32,
        expected: u32,
    },
}

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Pack manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse pack manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
