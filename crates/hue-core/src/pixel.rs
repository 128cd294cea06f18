//! 8-bit RGBA pixel helpers.
//!
//! Pixels are plain `[u8; 4]` arrays in `[R, G, B, A]` order. The engines
//! split a pixel with [`rgb`], shade the color, and rejoin it with
//! [`with_alpha`]; there is no wrapper type.

/// One 8-bit RGBA sample: `[R, G, B, A]`.
pub type Rgba8 = [u8; 4];

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 4;

/// Index of the red channel.
pub const R: usize = 0;
/// Index of the green channel.
pub const G: usize = 1;
/// Index of the blue channel.
pub const B: usize = 2;
/// Index of the alpha channel.
pub const A: usize = 3;

/// Returns `true` if the pixel has zero alpha.
///
/// Transparent source pixels are skipped by every engine.
#[inline]
pub fn is_transparent(px: Rgba8) -> bool {
    px[A] == 0
}

/// Returns the color channels of a pixel.
#[inline]
pub fn rgb(px: Rgba8) -> [u8; 3] {
    [px[R], px[G], px[B]]
}

/// Builds a pixel from color channels and an alpha value.
#[inline]
pub fn with_alpha(rgb: [u8; 3], alpha: u8) -> Rgba8 {
    [rgb[0], rgb[1], rgb[2], alpha]
}

/// Clamps a float to `[0, 255]` and truncates toward zero.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_truncate(v: f32) -> u8 {
    if v < 0.0 || v.is_nan() {
        0
    } else if v < 255.0 {
        v as u8
    } else {
        255
    }
}
