//! # hue-io
//!
//! Loading and saving [`RgbaImage`]s.
//!
//! - **PNG** - lossless, alpha preserved
//! - **JPEG** - lossy, always opaque on read, alpha dropped on write
//!
//! Every decoded image is 8-bit RGBA regardless of the source color type.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hue_io::{read, write};
//!
//! let image = read("photo.jpg")?;
//! write("photo.png", &image)?;
//! # Ok::<(), hue_io::IoError>(())
//! ```
//!
//! # Format Detection
//!
//! [`read`] trusts magic bytes first and falls back to the extension, so a
//! mislabeled file still loads. [`write`] picks the encoder from the
//! extension.
//!
//! # Feature Flags
//!
//! - `png` (default) - PNG via the `png` crate
//! - `jpeg` (default) - JPEG via `jpeg-decoder` / `jpeg-encoder`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod detect;
mod error;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

use hue_core::RgbaImage;
use std::path::Path;
use tracing::debug;

/// Reads an image, auto-detecting the format.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), format = format.name(), "reading image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        other => Err(unsupported(path, other)),
    }
}

/// Writes an image, choosing the format from the extension.
///
/// JPEG output uses the default quality; see [`write_with_quality`].
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    write_with_quality(path, image, None)
}

/// Writes an image with an optional JPEG quality (1-100).
///
/// `quality` is ignored for lossless formats.
pub fn write_with_quality<P: AsRef<Path>>(
    path: P,
    image: &RgbaImage,
    quality: Option<u8>,
) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), format = format.name(), "writing image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => {
            let options = match quality {
                Some(quality) => jpeg::JpegWriterOptions { quality },
                None => jpeg::JpegWriterOptions::default(),
            };
            jpeg::write_with_options(path, image, &options)
        }

        other => Err(unsupported(path, other)),
    }
}

fn unsupported(path: &Path, format: Format) -> IoError {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("none");
    IoError::UnsupportedFormat(format!("{} (extension: {})", format.name(), ext))
}
