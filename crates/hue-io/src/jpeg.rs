//! JPEG format support.
//!
//! Decoding accepts RGB, grayscale (8 and 16 bit) and CMYK sources and
//! always produces opaque RGBA. Encoding drops alpha and writes baseline RGB
//! at a configurable quality.

use crate::{IoError, IoResult};
use hue_core::RgbaImage;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use tracing::trace;

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// JPEG writer options.
///
/// ```rust
/// use hue_io::jpeg::JpegWriterOptions;
///
/// let preview = JpegWriterOptions { quality: 60 };
/// assert!(preview.quality < JpegWriterOptions::default().quality);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Reads a JPEG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let file = std::fs::File::open(path.as_ref())?;
    decode(file)
}

/// Decodes a JPEG held in memory.
pub fn read_from_memory(data: &[u8]) -> IoResult<RgbaImage> {
    decode(Cursor::new(data))
}

fn decode<R: Read>(reader: R) -> IoResult<RgbaImage> {
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(reader));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    trace!(width, height, format = ?info.pixel_format, "jpeg::decode");

    let rgba: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        // 16-bit gray: keep the high byte
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l16| [l16[0], l16[0], l16[0], 255])
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                let [r, g, b] = cmyk_to_rgb([cmyk[0], cmyk[1], cmyk[2], cmyk[3]]);
                [r, g, b, 255]
            })
            .collect(),
    };

    Ok(RgbaImage::from_data(width, height, rgba)?)
}

/// Approximate CMYK to RGB without a color profile.
fn cmyk_to_rgb(cmyk: [u8; 4]) -> [u8; 3] {
    let k = 1.0 - cmyk[3] as f32 / 255.0;
    let channel = |c: u8| ((1.0 - c as f32 / 255.0) * k * 255.0) as u8;
    [channel(cmyk[0]), channel(cmyk[1]), channel(cmyk[2])]
}

/// Writes a JPEG file at the default quality.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    write_with_options(path, image, &JpegWriterOptions::default())
}

/// Writes a JPEG file with explicit options.
pub fn write_with_options<P: AsRef<Path>>(
    path: P,
    image: &RgbaImage,
    options: &JpegWriterOptions,
) -> IoResult<()> {
    let data = write_to_memory(image, options)?;
    std::fs::write(path.as_ref(), data)?;
    Ok(())
}

/// Encodes an image to JPEG bytes. Alpha is discarded.
pub fn write_to_memory(image: &RgbaImage, options: &JpegWriterOptions) -> IoResult<Vec<u8>> {
    use jpeg_encoder::{ColorType, Encoder};

    let (width, height) = image.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(IoError::EncodeError(format!(
            "{}x{} exceeds the JPEG limit of 65535x65535",
            width, height
        )));
    };
    if image.is_empty() {
        return Err(IoError::EncodeError("cannot encode an empty image".into()));
    }
    if !(1..=100).contains(&options.quality) {
        return Err(IoError::EncodeError(format!(
            "quality {} out of range 1-100",
            options.quality
        )));
    }

    let rgb: Vec<u8> = image
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, options.quality);
    encoder
        .encode(&rgb, w, h, ColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::filled(w, h, px)
    }

    #[test]
    fn test_roundtrip_is_opaque_and_close() {
        let image = flat(16, 16, [200, 100, 50, 255]);
        let bytes = write_to_memory(&image, &JpegWriterOptions { quality: 95 }).unwrap();
        let loaded = read_from_memory(&bytes).unwrap();
        assert_eq!(loaded.dimensions(), (16, 16));
        let px = loaded.pixel(8, 8);
        assert_eq!(px[3], 255);
        for c in 0..3 {
            assert!((px[c] as i32 - image.pixel(8, 8)[c] as i32).abs() <= 6, "{:?}", px);
        }
    }

    #[test]
    fn test_quality_affects_size() {
        let image = RgbaImage::from_fn(64, 64, |x, y| [(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8, 255]);
        let low = write_to_memory(&image, &JpegWriterOptions { quality: 10 }).unwrap();
        let high = write_to_memory(&image, &JpegWriterOptions { quality: 100 }).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_bad_quality_rejected() {
        let image = flat(2, 2, [0, 0, 0, 255]);
        assert!(write_to_memory(&image, &JpegWriterOptions { quality: 0 }).is_err());
        assert!(write_to_memory(&image, &JpegWriterOptions { quality: 101 }).is_err());
    }

    #[test]
    fn test_cmyk_conversion() {
        assert_eq!(cmyk_to_rgb([0, 0, 0, 0]), [255, 255, 255]);
        assert_eq!(cmyk_to_rgb([0, 0, 0, 255]), [0, 0, 0]);
        assert_eq!(cmyk_to_rgb([255, 0, 255, 0]), [0, 255, 0]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        assert!(matches!(
            read_from_memory(&[0xFF, 0xD8, 0xFF, 0x00, 1, 2, 3]),
            Err(IoError::DecodeError(_))
        ));
    }
}
