//! CLI command implementations

pub mod grade;
pub mod info;
pub mod preset;

use anyhow::{Context, Result};
use hue_core::RgbaImage;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    hue_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &RgbaImage, quality: Option<u8>) -> Result<()> {
    hue_io::write_with_quality(path, image, quality)
        .with_context(|| format!("Failed to save: {}", path.display()))
}
