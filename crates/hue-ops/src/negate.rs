//! Negation engine.
//!
//! Every color channel becomes its two's-complement negation modulo 256,
//! `(-c) & 0xFF`: 0 stays 0, 1 becomes 255 and 128 is its own negation.
//! Alpha is kept.

use hue_core::RgbaImage;
use hue_core::pixel::{A, rgb, with_alpha};
use tracing::trace;

use crate::render::map_opaque;

/// Negates the colors of `base`.
///
/// # Example
///
/// ```rust
/// use hue_core::RgbaImage;
/// use hue_ops::apply_negate;
///
/// let out = apply_negate(&RgbaImage::filled(1, 1, [0, 1, 200, 255]));
/// assert_eq!(out.pixel(0, 0), [0, 255, 56, 255]);
/// ```
pub fn apply_negate(base: &RgbaImage) -> RgbaImage {
    trace!(width = base.width(), height = base.height(), "negate::apply");
    map_opaque(base, |_, _, px| with_alpha(rgb(px).map(u8::wrapping_neg), px[A]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_table() {
        let base = RgbaImage::from_fn(256, 1, |x, _| [x as u8, x as u8, x as u8, 255]);
        let out = apply_negate(&base);
        for (x, _, px) in out.pixels() {
            let expected = ((256 - x) % 256) as u8;
            assert_eq!(px, [expected, expected, expected, 255]);
        }
    }

    #[test]
    fn test_twice_is_identity() {
        let base = RgbaImage::from_fn(8, 8, |x, y| [(x * 31) as u8, (y * 17) as u8, 3, 99]);
        assert_eq!(apply_negate(&apply_negate(&base)), base);
    }

    #[test]
    fn test_transparent_skipped() {
        let out = apply_negate(&RgbaImage::filled(2, 2, [5, 5, 5, 0]));
        assert!(out.pixels().all(|(_, _, px)| px == [0, 0, 0, 0]));
    }
}
