//! Pigment engine: chroma-weighted tint with channel swapping and luma
//! correction.
//!
//! Six bytes drive the transform, all neutral at 128:
//!
//! - `tint[0..3]` -> ratios `P = byte / 128` for R, G, B. `P <= 1` darkens
//!   multiplicatively, `P > 1` brightens toward white.
//! - `swap[0..3]` -> weights `|byte - 128| / 128` for the RG, GB and RB
//!   pairs. 0 keeps each channel, 1 exchanges the pair.
//!
//! Per pixel, on channels normalized to `[0, 1)`:
//!
//! ```text
//! brightness = mean(r, g, b)        t = brightness * (1 - brightness)
//! chroma     = max - min            db = mean(P) / 2 - 0.5
//! swap       (simultaneous over the source channels)
//! c          = c + (tint(c, P) + db - c) * chroma,   clamp [0, 1]
//! luma       = mean(c)
//! c          = c + (brightness - luma) * (1 - t),    clamp [0, 1]
//! ```
//!
//! Gray pixels (chroma 0) take no tint, so the luma step only undoes what the
//! swap did to them.

use hue_core::pixel::{A, rgb, with_alpha};
use hue_core::{PIGMENT_NEUTRAL, PigmentParams, RgbaImage};
use tracing::{debug, trace};

use crate::render::map_opaque;

/// Byte channels are divided by this to land in `[0, 1)`.
const UNIT: f32 = 256.0;

const NEUTRAL: f32 = PIGMENT_NEUTRAL as f32;

/// Float working values derived from [`PigmentParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PigmentTint {
    /// Tint ratios for R, G, B; 1.0 is neutral.
    pub ratios: [f32; 3],
    /// Swap weights for the RG, GB and RB pairs; 0.0 is neutral.
    pub swaps: [f32; 3],
    /// Uniform brightness bias added with the tint.
    pub offset: f32,
}

impl PigmentTint {
    /// Derives ratios, swap weights and the brightness bias.
    pub fn from_params(params: &PigmentParams) -> Self {
        let ratios = params.tints().map(|p| p as f32 / NEUTRAL);
        let swaps = params.swaps().map(|p| (p as f32 - NEUTRAL).abs() / NEUTRAL);
        let mean = (ratios[0] + ratios[1] + ratios[2]) / 3.0;
        Self {
            ratios,
            swaps,
            offset: mean * 0.5 - 0.5,
        }
    }

    /// Tints one color.
    pub fn apply(&self, color: [u8; 3]) -> [u8; 3] {
        self.apply_normalized(color).map(to_byte)
    }

    /// Tints one color, returning the clamped channels before quantization.
    pub fn apply_normalized(&self, color: [u8; 3]) -> [f32; 3] {
        let [r, g, b] = color.map(|c| c as f32 / UNIT);

        let brightness = (r + g + b) / 3.0;
        let t = brightness * (1.0 - brightness);
        let chroma = r.max(g).max(b) - r.min(g).min(b);

        let [s_rg, s_gb, s_rb] = self.swaps;
        let swapped = [
            r + s_rg * (g - r) + s_rb * (b - r),
            g + s_rg * (r - g) + s_gb * (b - g),
            b + s_gb * (g - b) + s_rb * (r - b),
        ];

        let mut c = [0.0f32; 3];
        for i in 0..3 {
            let tinted = tint(swapped[i], self.ratios[i]) + self.offset;
            c[i] = (swapped[i] + (tinted - swapped[i]) * chroma).clamp(0.0, 1.0);
        }

        let luma = (c[0] + c[1] + c[2]) / 3.0;
        let correction = (brightness - luma) * (1.0 - t);

        c.map(|v| (v + correction).clamp(0.0, 1.0))
    }
}

/// Piecewise tint: multiply for `ratio <= 1`, lift toward white above.
#[inline]
fn tint(channel: f32, ratio: f32) -> f32 {
    if ratio <= 1.0 {
        ratio * channel
    } else {
        channel + (1.0 - channel) * (ratio - 1.0)
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    debug_assert!((0.0..=1.0).contains(&v), "channel {v} left the unit range");
    (v * UNIT).min(255.0) as u8
}

/// Applies the pigment transform to `base`.
///
/// # Example
///
/// ```rust
/// use hue_core::{PigmentParams, RgbaImage};
/// use hue_ops::apply_pigments;
///
/// let base = RgbaImage::filled(2, 2, [200, 80, 40, 255]);
/// let out = apply_pigments(&base, &PigmentParams::NEUTRAL);
/// assert_eq!(out, base);
/// ```
pub fn apply_pigments(base: &RgbaImage, params: &PigmentParams) -> RgbaImage {
    trace!(
        width = base.width(),
        height = base.height(),
        pigments = ?params.0,
        "pigment::apply"
    );

    let tint = PigmentTint::from_params(params);
    debug!(ratios = ?tint.ratios, swaps = ?tint.swaps, offset = tint.offset, "pigment tint");

    map_opaque(base, |_, _, px| {
        with_alpha(tint.apply(rgb(px)), px[A])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn every_color_step(step: usize) -> impl Iterator<Item = [u8; 3]> {
        (0..=255u8).step_by(step).flat_map(move |r| {
            (0..=255u8)
                .step_by(step)
                .flat_map(move |g| (0..=255u8).step_by(step).map(move |b| [r, g, b]))
        })
    }

    #[test]
    fn test_neutral_derivation() {
        let tint = PigmentTint::from_params(&PigmentParams::NEUTRAL);
        assert_eq!(tint.ratios, [1.0; 3]);
        assert_eq!(tint.swaps, [0.0; 3]);
        assert_eq!(tint.offset, 0.0);
    }

    #[test]
    fn test_swap_weight_is_symmetric() {
        let low = PigmentTint::from_params(&PigmentParams([128, 128, 128, 28, 128, 128]));
        let high = PigmentTint::from_params(&PigmentParams([128, 128, 128, 228, 128, 128]));
        assert_eq!(low.swaps, high.swaps);
    }

    #[test]
    fn test_neutral_is_identity() {
        let tint = PigmentTint::from_params(&PigmentParams::NEUTRAL);
        for rgb in every_color_step(15) {
            assert_eq!(tint.apply(rgb), rgb);
        }
    }

    #[test]
    fn test_exact_tint_with_darkened_red_and_brightened_blue() {
        let tint = PigmentTint::from_params(&PigmentParams([64, 128, 200, 128, 128, 128]));
        assert_eq!(tint.ratios, [0.5, 1.0, 1.5625]);
        assert_relative_eq!(tint.offset, 0.0104167, epsilon = 1e-6);

        // Red takes the multiplicative branch, blue the lift toward white,
        // and the positive offset nudges all three before luma correction.
        let [r, g, b] = tint.apply_normalized([200, 100, 50]);
        assert_relative_eq!(r, 0.544_774_6, epsilon = 1e-5);
        assert_relative_eq!(g, 0.383_031_4, epsilon = 1e-5);
        assert_relative_eq!(b, 0.452_935_8, epsilon = 1e-5);
        assert_eq!(tint.apply([200, 100, 50]), [139, 98, 115]);
    }

    #[test]
    fn test_full_red_tint_stays_in_range_and_warms() {
        let tint = PigmentTint::from_params(&PigmentParams([255, 128, 128, 128, 128, 128]));
        for rgb in every_color_step(17) {
            let out = tint.apply_normalized(rgb);
            assert!(out.iter().all(|v| (0.0..=1.0).contains(v)), "{:?} -> {:?}", rgb, out);
        }
        let [r, _, b] = tint.apply([160, 100, 60]);
        assert!(r > 160);
        assert!(b <= 60);
    }

    #[test]
    fn test_gray_ignores_tint() {
        let tint = PigmentTint::from_params(&PigmentParams([255, 0, 200, 128, 128, 128]));
        for v in [0u8, 64, 128, 200, 255] {
            assert_eq!(tint.apply([v, v, v]), [v, v, v]);
        }
    }

    #[test]
    fn test_full_swap_keeps_gray_balance() {
        // Swapping R and G of a pure color keeps brightness, so luma
        // correction has nothing to undo.
        let tint = PigmentTint::from_params(&PigmentParams([128, 128, 128, 0, 128, 128]));
        assert_eq!(tint.swaps[0], 1.0);
        let [r, g, b] = tint.apply([192, 64, 0]);
        assert_eq!([r, g, b], [64, 192, 0]);
    }

    #[test]
    fn test_transparent_skipped() {
        let mut base = RgbaImage::filled(2, 2, [10, 200, 30, 255]);
        base.set_pixel(1, 0, [10, 200, 30, 0]);
        let out = apply_pigments(&base, &PigmentParams([20, 240, 90, 0, 255, 30]));
        assert_eq!(out.pixel(1, 0), [0, 0, 0, 0]);
        assert_eq!(out.pixel(0, 0)[A], 255);
    }
}
