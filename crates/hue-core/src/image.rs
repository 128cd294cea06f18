//! The RGBA8 image grid the grading engines read and write.
//!
//! [`RgbaImage`] stores pixels in **row-major** order, top-to-bottom, with
//! interleaved channels:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Memory Management
//!
//! The buffer lives in an [`Arc<Vec<u8>>`]. Cloning an image is cheap and
//! shares the data; the first mutation through [`RgbaImage::set_pixel`] or
//! [`RgbaImage::data_mut`] copies it (copy-on-write). This gives every render
//! pass an immutable snapshot of its source images even while the host keeps
//! its own handle.
//!
//! # Usage
//!
//! ```rust
//! use hue_core::RgbaImage;
//!
//! let mut img = RgbaImage::new(4, 2);
//! img.set_pixel(1, 1, [255, 128, 0, 255]);
//!
//! assert_eq!(img.pixel(1, 1), [255, 128, 0, 255]);
//! assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
//! ```

use crate::pixel::{CHANNELS, Rgba8};
use crate::{Error, Result};
use std::sync::Arc;

/// Owned 8-bit RGBA image.
///
/// A zero-sized image (`0 x 0`) is valid and is what an empty document holds.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbaImage {
    data: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl RgbaImage {
    /// Creates a new image filled with transparent black.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hue_core::RgbaImage;
    ///
    /// let img = RgbaImage::new(1920, 1080);
    /// assert_eq!(img.dimensions(), (1920, 1080));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            data: Arc::new(vec![0; len]),
            width,
            height,
        }
    }

    /// Creates an image from interleaved RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows usize"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Creates an image with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba8) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Builds an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgba8,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `Ok(())` when `other` has the same dimensions.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] otherwise.
    pub fn ensure_same_size(&self, other: &RgbaImage) -> Result<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(Error::dimension_mismatch(self.dimensions(), other.dimensions()))
        }
    }

    /// Returns the interleaved RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the interleaved RGBA bytes for mutation (copy-on-write).
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let mut px = [0u8; CHANNELS];
        px.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        px
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let data = Arc::make_mut(&mut self.data);
        data[offset..offset + CHANNELS].copy_from_slice(&px);
    }

    /// Returns one row of interleaved bytes.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row out of bounds");
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Iterates over all pixels with their coordinates, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba8)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }
}

impl Default for RgbaImage {
    /// The empty `0 x 0` image.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl std::fmt::Debug for RgbaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
