//! PNG format support.
//!
//! Every PNG color type is decoded to 8-bit RGBA: palettes and low bit
//! depths are expanded, 16-bit samples are stripped to their high byte,
//! gray is replicated and missing alpha becomes 255. Writing always emits
//! 8-bit RGBA so transparency survives a round trip.

use crate::{IoError, IoResult};
use hue_core::RgbaImage;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;
use tracing::trace;

/// Reads a PNG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Decodes a PNG held in memory.
pub fn read_from_memory(data: &[u8]) -> IoResult<RgbaImage> {
    decode(Cursor::new(data))
}

fn decode<R: BufRead + Seek>(reader: R) -> IoResult<RgbaImage> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    trace!(
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        "png::decode"
    );

    let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => buf,
        (png::ColorType::Rgb, png::BitDepth::Eight) => buf
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            buf.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => buf
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Ok(RgbaImage::from_data(info.width, info.height, rgba)?)
}

/// Writes an image to a PNG file as 8-bit RGBA.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    encode(BufWriter::new(file), image)
}

/// Encodes an image to PNG bytes.
pub fn write_to_memory(image: &RgbaImage) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    encode(&mut buffer, image)?;
    Ok(buffer)
}

fn encode<W: Write>(writer: W, image: &RgbaImage) -> IoResult<()> {
    if image.is_empty() {
        return Err(IoError::EncodeError("cannot encode an empty image".into()));
    }
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_raw(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_roundtrip_keeps_alpha() {
        let image = RgbaImage::from_fn(7, 5, |x, y| [(x * 30) as u8, (y * 50) as u8, 9, (x * y * 10) as u8]);
        let bytes = write_to_memory(&image).unwrap();
        assert_eq!(read_from_memory(&bytes).unwrap(), image);
    }

    #[test]
    fn test_rgb_gets_opaque_alpha() {
        let bytes = encode_raw(2, 1, png::ColorType::Rgb, &[1, 2, 3, 4, 5, 6]);
        let image = read_from_memory(&bytes).unwrap();
        assert_eq!(image.pixel(0, 0), [1, 2, 3, 255]);
        assert_eq!(image.pixel(1, 0), [4, 5, 6, 255]);
    }

    #[test]
    fn test_gray_alpha_is_replicated() {
        let bytes = encode_raw(1, 2, png::ColorType::GrayscaleAlpha, &[80, 0, 200, 128]);
        let image = read_from_memory(&bytes).unwrap();
        assert_eq!(image.pixel(0, 0), [80, 80, 80, 0]);
        assert_eq!(image.pixel(0, 1), [200, 200, 200, 128]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = read_from_memory(b"not a png at all").unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_empty_image_rejected() {
        assert!(write_to_memory(&RgbaImage::new(0, 3)).is_err());
    }
}
