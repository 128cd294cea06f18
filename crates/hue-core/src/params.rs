//! Parameter sets for the three grading transforms.
//!
//! Every parameter is a byte in `[0, 255]`, as edited by the host's sliders
//! and spin boxes. The engines derive their float working values from these
//! bytes on each invocation; nothing derived is cached here.
//!
//! Defaults are the document-reset state:
//! - matrix: pass-through, base R/G/B to output R/G/B
//! - angles: all zero
//! - pigments: all 128 (neutral)
//!
//! With the `serde` feature each set serializes as a plain byte list and
//! [`GradeParams`] as a map whose missing keys fall back to the defaults.

/// Number of rows (output channels) in the mixing matrix.
pub const MATRIX_ROWS: usize = 3;
/// Number of columns (input channels) in the mixing matrix.
pub const MATRIX_COLS: usize = 5;
/// Total entries in the mixing matrix.
pub const MATRIX_SIZE: usize = MATRIX_ROWS * MATRIX_COLS;

/// Neutral value of a pigment byte.
pub const PIGMENT_NEUTRAL: u8 = 128;

/// 3x5 channel-mixing weights.
///
/// Row `r` computes output channel `r` from
/// `[base R, base G, base B, modifier R, modifier G]`; entry `(row, col)`
/// lives at `row * 5 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MatrixParams(pub [u8; MATRIX_SIZE]);

impl MatrixParams {
    /// Pass-through matrix: each output row selects its own base channel.
    pub const IDENTITY: Self = {
        let mut m = [0u8; MATRIX_SIZE];
        let mut row = 0;
        while row < MATRIX_ROWS {
            m[row * MATRIX_COLS + row] = 255;
            row += 1;
        }
        Self(m)
    };

    /// Returns the weight at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 3` or `col >= 5`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < MATRIX_ROWS && col < MATRIX_COLS, "matrix index out of range");
        self.0[row * MATRIX_COLS + col]
    }

    /// Sets the weight at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 3` or `col >= 5`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(row < MATRIX_ROWS && col < MATRIX_COLS, "matrix index out of range");
        self.0[row * MATRIX_COLS + col] = value;
    }

    /// Returns one row of weights.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; MATRIX_COLS] {
        let mut out = [0u8; MATRIX_COLS];
        out.copy_from_slice(&self.0[row * MATRIX_COLS..(row + 1) * MATRIX_COLS]);
        out
    }

    /// Builds a matrix from its three rows.
    pub fn from_rows(rows: [[u8; MATRIX_COLS]; MATRIX_ROWS]) -> Self {
        let mut m = [0u8; MATRIX_SIZE];
        for (r, row) in rows.iter().enumerate() {
            m[r * MATRIX_COLS..(r + 1) * MATRIX_COLS].copy_from_slice(row);
        }
        Self(m)
    }
}

impl Default for MatrixParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Three rotation angle bytes (roll, pitch, yaw).
///
/// Byte `n` stands for `n * PI / 128` radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RotationParams(pub [u8; 3]);

impl RotationParams {
    /// Returns the three angles in radians.
    pub fn radians(&self) -> [f32; 3] {
        self.0.map(|a| a as f32 * std::f32::consts::PI / 128.0)
    }

    /// Returns `true` if no rotation is requested.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 3]
    }
}

/// Six pigment bytes.
///
/// Indices 0..3 are the R/G/B tint intensities, indices 3..6 the
/// red-green, green-blue and red-blue swap weights. 128 is neutral for all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PigmentParams(pub [u8; 6]);

impl PigmentParams {
    /// All six controls at the neutral point.
    pub const NEUTRAL: Self = Self([PIGMENT_NEUTRAL; 6]);

    /// Tint intensity bytes for R, G, B.
    #[inline]
    pub fn tints(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Swap weight bytes for RG, GB, RB.
    #[inline]
    pub fn swaps(&self) -> [u8; 3] {
        [self.0[3], self.0[4], self.0[5]]
    }

    /// Returns `true` if every control sits at 128.
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for PigmentParams {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// All parameter sets of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GradeParams {
    /// Channel-mixing matrix.
    pub matrix: MatrixParams,
    /// Color-space rotation angles.
    pub angles: RotationParams,
    /// Pigment tint and swap controls.
    pub pigments: PigmentParams,
}
