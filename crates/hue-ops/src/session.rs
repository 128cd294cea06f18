//! Document session: the images, parameter sets and current render.
//!
//! A [`Session`] is what an editor front end drives. It owns the base and
//! optional modifier images, the three parameter sets and the transform on
//! display, and recomputes the render synchronously after every change.
//! Each recompute reads only the stored images and parameters, so repeating
//! it with unchanged inputs yields an identical buffer.
//!
//! ```rust
//! use hue_core::{PigmentParams, RgbaImage};
//! use hue_ops::{Session, Transform};
//!
//! let mut session = Session::new();
//! session.load_base(RgbaImage::filled(4, 4, [200, 90, 30, 255]))?;
//!
//! let before = session.snapshot();
//! session.set_pigments(PigmentParams([255, 128, 128, 128, 128, 128]))?;
//! assert_eq!(session.active(), Some(Transform::Pigment));
//!
//! // Cancel the edit.
//! session.revert(before)?;
//! assert_eq!(session.render(), session.base());
//! # Ok::<(), hue_ops::OpsError>(())
//! ```

use hue_core::{GradeParams, MatrixParams, PigmentParams, RgbaImage, RotationParams};
use tracing::{debug, info};

use crate::transform::{Transform, apply_transform};
use crate::{OpsError, OpsResult};

/// Parameter state captured before an edit, for [`Session::revert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    params: GradeParams,
    active: Option<Transform>,
}

impl Snapshot {
    /// The captured parameter sets.
    pub fn params(&self) -> &GradeParams {
        &self.params
    }
}

/// One open document.
#[derive(Debug, Clone, Default)]
pub struct Session {
    base: Option<RgbaImage>,
    modifier: Option<RgbaImage>,
    params: GradeParams,
    active: Option<Transform>,
    render: Option<RgbaImage>,
}

impl Session {
    /// Creates an empty document with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// The base image, if loaded.
    pub fn base(&self) -> Option<&RgbaImage> {
        self.base.as_ref()
    }

    /// The modifier image, if loaded.
    pub fn modifier(&self) -> Option<&RgbaImage> {
        self.modifier.as_ref()
    }

    /// The current parameter sets.
    pub fn params(&self) -> &GradeParams {
        &self.params
    }

    /// The transform currently on display, `None` after a reset.
    pub fn active(&self) -> Option<Transform> {
        self.active
    }

    /// The current render; `None` when no base image is loaded.
    pub fn render(&self) -> Option<&RgbaImage> {
        self.render.as_ref()
    }

    /// Loads a new base image and resets the document.
    ///
    /// # Errors
    ///
    /// Rejects an image whose size differs from the loaded modifier; the
    /// session is left unchanged.
    pub fn load_base(&mut self, image: RgbaImage) -> OpsResult<()> {
        if let Some(modifier) = &self.modifier {
            modifier.ensure_same_size(&image)?;
        }
        info!(width = image.width(), height = image.height(), "base image loaded");
        self.base = Some(image);
        self.reset();
        Ok(())
    }

    /// Loads the modifier image. Parameters are kept.
    ///
    /// # Errors
    ///
    /// Rejects an image whose size differs from the loaded base; the
    /// session is left unchanged.
    pub fn load_modifier(&mut self, image: RgbaImage) -> OpsResult<()> {
        if let Some(base) = &self.base {
            base.ensure_same_size(&image)?;
        }
        info!(width = image.width(), height = image.height(), "modifier image loaded");
        self.modifier = Some(image);
        if self.active == Some(Transform::Matrix) {
            self.recompute()?;
        }
        Ok(())
    }

    /// Drops the modifier image.
    pub fn clear_modifier(&mut self) -> OpsResult<()> {
        self.modifier = None;
        if self.active == Some(Transform::Matrix) {
            self.recompute()?;
        }
        Ok(())
    }

    /// Replaces the base with an image from an external source such as the
    /// clipboard, then resets parameters.
    ///
    /// Unlike [`load_base`](Self::load_base) a paste is never rejected: a
    /// loaded modifier whose size differs from the pasted image is dropped,
    /// one that matches is kept.
    pub fn paste(&mut self, image: RgbaImage) {
        if self.modifier.as_ref().is_some_and(|m| m.ensure_same_size(&image).is_err()) {
            info!("modifier dropped: size differs from pasted image");
            self.modifier = None;
        }
        info!(width = image.width(), height = image.height(), "base image pasted");
        self.base = Some(image);
        self.reset();
    }

    /// Closes the document: drops every image and resets parameters.
    pub fn close(&mut self) {
        self.base = None;
        self.modifier = None;
        self.reset();
    }

    /// Restores default parameters and shows the base unmodified.
    pub fn reset(&mut self) {
        self.params = GradeParams::default();
        self.active = None;
        self.render = self.base.clone();
    }

    /// Stores a matrix and renders it.
    ///
    /// # Errors
    ///
    /// [`OpsError::NoImage`] without a base image; the parameters are
    /// stored regardless.
    pub fn set_matrix(&mut self, matrix: MatrixParams) -> OpsResult<()> {
        self.params.matrix = matrix;
        self.show(Transform::Matrix)
    }

    /// Stores rotation angles and renders them.
    pub fn set_angles(&mut self, angles: RotationParams) -> OpsResult<()> {
        self.params.angles = angles;
        self.show(Transform::Rotation)
    }

    /// Stores pigment controls and renders them.
    pub fn set_pigments(&mut self, pigments: PigmentParams) -> OpsResult<()> {
        self.params.pigments = pigments;
        self.show(Transform::Pigment)
    }

    /// Replaces all parameter sets at once, keeping the active transform.
    pub fn set_params(&mut self, params: GradeParams) -> OpsResult<()> {
        self.params = params;
        match self.active {
            Some(_) => self.recompute(),
            None => Ok(()),
        }
    }

    /// Renders the negation of the base.
    pub fn negate(&mut self) -> OpsResult<()> {
        self.show(Transform::Negate)
    }

    /// Makes `transform` the active one and renders it.
    pub fn show(&mut self, transform: Transform) -> OpsResult<()> {
        self.active = Some(transform);
        self.recompute()
    }

    /// Captures the parameters and active transform.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            params: self.params,
            active: self.active,
        }
    }

    /// Restores a [`Snapshot`] and re-renders.
    pub fn revert(&mut self, snapshot: Snapshot) -> OpsResult<()> {
        self.params = snapshot.params;
        self.active = snapshot.active;
        match self.active {
            Some(_) => self.recompute(),
            None => {
                self.render = self.base.clone();
                Ok(())
            }
        }
    }

    fn recompute(&mut self) -> OpsResult<()> {
        let Some(transform) = self.active else {
            return Ok(());
        };
        let Some(base) = &self.base else {
            self.render = None;
            return Err(OpsError::NoImage);
        };
        debug!(%transform, "recomputing render");
        let image = apply_transform(transform, base, self.modifier.as_ref(), &self.params)?;
        self.render = Some(image);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> RgbaImage {
        RgbaImage::from_fn(6, 4, |x, y| [(x * 40) as u8, (y * 60) as u8, 150, 255])
    }

    #[test]
    fn test_load_base_resets_params() {
        let mut s = Session::new();
        s.set_angles(RotationParams([1, 2, 3])).unwrap_err();
        assert_eq!(s.params().angles, RotationParams([1, 2, 3]));

        s.load_base(base()).unwrap();
        assert_eq!(*s.params(), GradeParams::default());
        assert_eq!(s.render(), Some(&base()));
        assert_eq!(s.active(), None);
    }

    #[test]
    fn test_render_without_base_is_no_image() {
        let mut s = Session::new();
        assert!(matches!(s.negate(), Err(OpsError::NoImage)));
        assert!(s.render().is_none());
    }

    #[test]
    fn test_modifier_size_checked_both_ways() {
        let mut s = Session::new();
        s.load_base(base()).unwrap();
        let err = s.load_modifier(RgbaImage::new(3, 3)).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(s.modifier().is_none());

        let mut s = Session::new();
        s.load_modifier(RgbaImage::new(3, 3)).unwrap();
        assert!(s.load_base(base()).is_err());
        assert!(s.base().is_none());
    }

    #[test]
    fn test_modifier_rerenders_active_matrix() {
        let mut s = Session::new();
        s.load_base(base()).unwrap();
        let m = MatrixParams::from_rows([[0, 0, 0, 255, 0], [0, 255, 0, 0, 0], [0, 0, 255, 0, 0]]);
        s.set_matrix(m).unwrap();
        assert_eq!(s.render().unwrap().pixel(2, 2)[0], 0);

        s.load_modifier(RgbaImage::filled(6, 4, [77, 0, 0, 255])).unwrap();
        assert_eq!(s.render().unwrap().pixel(2, 2)[0], 77);

        s.clear_modifier().unwrap();
        assert_eq!(s.render().unwrap().pixel(2, 2)[0], 0);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let mut s = Session::new();
        s.load_base(base()).unwrap();
        s.set_pigments(PigmentParams([30, 200, 128, 90, 128, 250])).unwrap();
        let first = s.render().cloned();
        s.show(Transform::Pigment).unwrap();
        assert_eq!(s.render().cloned(), first);
    }

    #[test]
    fn test_snapshot_revert() {
        let mut s = Session::new();
        s.load_base(base()).unwrap();
        s.set_angles(RotationParams([10, 0, 0])).unwrap();
        let accepted = s.render().cloned();
        let snap = s.snapshot();

        s.set_angles(RotationParams([90, 90, 90])).unwrap();
        assert_ne!(s.render().cloned(), accepted);

        s.revert(snap).unwrap();
        assert_eq!(s.params().angles, RotationParams([10, 0, 0]));
        assert_eq!(s.render().cloned(), accepted);
    }

    #[test]
    fn test_close_drops_everything() {
        let mut s = Session::new();
        s.load_base(base()).unwrap();
        s.negate().unwrap();
        s.close();
        assert!(s.base().is_none());
        assert!(s.render().is_none());
        assert_eq!(s.active(), None);
    }

    #[test]
    fn test_paste_replaces_base() {
        let mut s = Session::new();
        s.load_base(base()).unwrap();
        s.set_angles(RotationParams([10, 20, 30])).unwrap();
        let pasted = RgbaImage::filled(2, 2, [1, 2, 3, 4]);
        s.paste(pasted.clone());
        assert_eq!(s.base(), Some(&pasted));
        assert_eq!(s.render(), Some(&pasted));
        assert_eq!(s.active(), None);
        assert_eq!(s.params(), &GradeParams::default());
    }

    #[test]
    fn test_paste_drops_mismatched_modifier() {
        let mut s = Session::new();
        s.load_base(RgbaImage::filled(4, 4, [9, 9, 9, 255])).unwrap();
        s.load_modifier(RgbaImage::filled(4, 4, [1, 1, 1, 255])).unwrap();

        s.paste(RgbaImage::filled(4, 4, [50, 60, 70, 255]));
        assert!(s.modifier().is_some());

        let pasted = RgbaImage::filled(3, 5, [50, 60, 70, 255]);
        s.paste(pasted.clone());
        assert!(s.modifier().is_none());
        assert_eq!(s.base(), Some(&pasted));

        // The matrix engine now renders without a modifier.
        s.set_matrix(MatrixParams::IDENTITY).unwrap();
        assert_eq!(s.render(), Some(&pasted));
    }
}
