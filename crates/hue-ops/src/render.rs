//! The shared per-pixel render pass.
//!
//! Every engine has the same outer shape: allocate a fresh transparent image
//! of the base's size, visit each base pixel whose alpha is non-zero, and
//! write the shaded result. Transparent pixels are never copied, so they
//! stay `[0, 0, 0, 0]` in the output.
//!
//! With the `parallel` feature (default) rows are shaded on the rayon pool.
//! Pixels are independent, so the output is identical either way.
//!
//! # Example
//!
//! ```rust
//! use hue_core::RgbaImage;
//! use hue_ops::render::map_opaque;
//!
//! let src = RgbaImage::filled(4, 4, [10, 20, 30, 255]);
//! let out = map_opaque(&src, |_, _, [r, g, b, a]| [b, g, r, a]);
//! assert_eq!(out.pixel(2, 2), [30, 20, 10, 255]);
//! ```

use hue_core::RgbaImage;
use hue_core::pixel::{CHANNELS, Rgba8, is_transparent};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Shades every non-transparent pixel of `base` into a new image.
///
/// `shade` receives `(x, y, source pixel)` and returns the full output pixel,
/// alpha included. The base image is only read.
pub fn map_opaque<F>(base: &RgbaImage, shade: F) -> RgbaImage
where
    F: Fn(u32, u32, Rgba8) -> Rgba8 + Sync + Send,
{
    let (width, height) = base.dimensions();
    let mut out = RgbaImage::new(width, height);
    if out.is_empty() {
        return out;
    }

    let stride = width as usize * CHANNELS;
    let src = base.data();

    let shade_row = |(y, row): (usize, &mut [u8])| {
        let src_row = &src[y * stride..(y + 1) * stride];
        for (x, (s, d)) in src_row
            .chunks_exact(CHANNELS)
            .zip(row.chunks_exact_mut(CHANNELS))
            .enumerate()
        {
            let px = [s[0], s[1], s[2], s[3]];
            if is_transparent(px) {
                continue;
            }
            d.copy_from_slice(&shade(x as u32, y as u32, px));
        }
    };

    #[cfg(feature = "parallel")]
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(shade_row);

    #[cfg(not(feature = "parallel"))]
    out.data_mut()
        .chunks_mut(stride)
        .enumerate()
        .for_each(shade_row);

    out
}
