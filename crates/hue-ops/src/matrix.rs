//! Channel-mixing matrix engine.
//!
//! Each output channel is a weighted sum over five inputs:
//!
//! ```text
//! [base R, base G, base B, modifier R, modifier G]
//! ```
//!
//! Weights are the matrix bytes divided by 255. A row whose weights sum to
//! more than 1 is divided by its sum so it cannot overflow; rows summing to
//! 1 or less are kept as-is and may darken. Results are truncated and
//! clamped to `[0, 255]`. Without a modifier image its two channels read as 0.

use hue_core::pixel::{A, G, R, clamp_truncate, rgb, with_alpha};
use hue_core::{MATRIX_COLS, MATRIX_ROWS, MatrixParams, RgbaImage};
use tracing::{debug, trace};

use crate::render::map_opaque;
use crate::{OpsError, OpsResult};

/// Row-normalized float form of [`MatrixParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixMatrix {
    rows: [[f32; MATRIX_COLS]; MATRIX_ROWS],
}

impl MixMatrix {
    /// Converts matrix bytes to weights and rescales over-weighted rows.
    pub fn from_params(params: &MatrixParams) -> Self {
        let mut rows = [[0.0f32; MATRIX_COLS]; MATRIX_ROWS];
        for (r, row) in rows.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (c, w) in row.iter_mut().enumerate() {
                *w = params.get(r, c) as f32 / 255.0;
                sum += *w;
            }
            if sum > 1.0 {
                for w in row.iter_mut() {
                    *w /= sum;
                }
            }
        }
        Self { rows }
    }

    /// The normalized weight rows.
    #[inline]
    pub fn rows(&self) -> &[[f32; MATRIX_COLS]; MATRIX_ROWS] {
        &self.rows
    }

    /// Mixes the five input channels into three output channels.
    #[inline]
    pub fn mix(&self, inputs: [u8; MATRIX_COLS]) -> [u8; MATRIX_ROWS] {
        self.rows.map(|row| {
            let sum: f32 = row
                .iter()
                .zip(inputs.iter())
                .map(|(w, &c)| c as f32 * w)
                .sum();
            clamp_truncate(sum)
        })
    }
}

/// Applies the channel-mixing matrix to `base`.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`] if `modifier` is present and its dimensions
/// differ from `base`. Nothing is resized or truncated.
///
/// # Example
///
/// ```rust
/// use hue_core::{MatrixParams, RgbaImage};
/// use hue_ops::apply_matrix;
///
/// let base = RgbaImage::filled(2, 2, [10, 20, 30, 255]);
/// // Swap red and blue.
/// let m = MatrixParams::from_rows([
///     [0, 0, 255, 0, 0],
///     [0, 255, 0, 0, 0],
///     [255, 0, 0, 0, 0],
/// ]);
/// let out = apply_matrix(&base, None, &m).unwrap();
/// assert_eq!(out.pixel(0, 0), [30, 20, 10, 255]);
/// ```
pub fn apply_matrix(
    base: &RgbaImage,
    modifier: Option<&RgbaImage>,
    params: &MatrixParams,
) -> OpsResult<RgbaImage> {
    trace!(
        width = base.width(),
        height = base.height(),
        modifier = modifier.is_some(),
        "matrix::apply"
    );

    if let Some(m) = modifier {
        if m.dimensions() != base.dimensions() {
            return Err(OpsError::SizeMismatch(format!(
                "modifier is {}x{}, base is {}x{}",
                m.width(),
                m.height(),
                base.width(),
                base.height()
            )));
        }
    }

    let mix = MixMatrix::from_params(params);
    debug!(rows = ?mix.rows(), "normalized mix matrix");

    Ok(map_opaque(base, |x, y, px| {
        let (mod_r, mod_g) = match modifier {
            Some(m) => {
                let mp = m.pixel(x, y);
                (mp[R], mp[G])
            }
            None => (0, 0),
        };
        let [r, g, b] = rgb(px);
        with_alpha(mix.mix([r, g, b, mod_r, mod_g]), px[A])
    }))
}
