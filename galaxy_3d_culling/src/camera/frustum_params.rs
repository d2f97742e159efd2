/// Optical parameters of a perspective frustum.
///
/// Angles are in degrees. The horizontal and vertical FOV are linked by
/// `vfov = 2 * atan(tan(hfov / 2) / aspect)`. Whichever one is supplied
/// stays fixed; the other is cached and recomputed by every setter.

use crate::error::{Error, Result};
use crate::engine_err;

/// Which FOV the caller supplied. The other one is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FovSource {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumParams {
    fov_source: FovSource,
    aspect_ratio: f32,
    horizontal_fov: f32,
    vertical_fov: f32,
    near_distance: f32,
    far_distance: f32,
}

/// Vertical FOV (degrees) from a horizontal FOV (degrees) and an aspect ratio.
pub fn vertical_fov_from_horizontal(horizontal_fov: f32, aspect_ratio: f32) -> f32 {
    let half = (horizontal_fov * 0.5).to_radians();
    2.0 * (half.tan() / aspect_ratio).atan().to_degrees()
}

/// Horizontal FOV (degrees) from a vertical FOV (degrees) and an aspect ratio.
pub fn horizontal_fov_from_vertical(vertical_fov: f32, aspect_ratio: f32) -> f32 {
    let half = (vertical_fov * 0.5).to_radians();
    2.0 * (half.tan() * aspect_ratio).atan().to_degrees()
}

impl FrustumParams {
    /// Build from a horizontal FOV, deriving the vertical FOV.
    ///
    /// # Errors
    ///
    /// `InvalidFrustum` if aspect <= 0, FOV outside (0, 180), near <= 0,
    /// near >= far, or any value is not finite.
    pub fn from_horizontal_fov(
        horizontal_fov: f32,
        aspect_ratio: f32,
        near_distance: f32,
        far_distance: f32,
    ) -> Result<Self> {
        check_fov("horizontal", horizontal_fov)?;
        check_aspect(aspect_ratio)?;
        let params = Self {
            fov_source: FovSource::Horizontal,
            aspect_ratio,
            horizontal_fov,
            vertical_fov: vertical_fov_from_horizontal(horizontal_fov, aspect_ratio),
            near_distance,
            far_distance,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build from a vertical FOV, deriving the horizontal FOV.
    pub fn from_vertical_fov(
        vertical_fov: f32,
        aspect_ratio: f32,
        near_distance: f32,
        far_distance: f32,
    ) -> Result<Self> {
        check_fov("vertical", vertical_fov)?;
        check_aspect(aspect_ratio)?;
        let params = Self {
            fov_source: FovSource::Vertical,
            aspect_ratio,
            horizontal_fov: horizontal_fov_from_vertical(vertical_fov, aspect_ratio),
            vertical_fov,
            near_distance,
            far_distance,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every precondition.
    pub fn validate(&self) -> Result<()> {
        check_aspect(self.aspect_ratio)?;
        check_fov("horizontal", self.horizontal_fov)?;
        check_fov("vertical", self.vertical_fov)?;
        check_near_far(self.near_distance, self.far_distance)
    }

    // ===== GETTERS =====

    pub fn fov_source(&self) -> FovSource {
        self.fov_source
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn horizontal_fov(&self) -> f32 {
        self.horizontal_fov
    }

    /// Vertical FOV, derived from the horizontal FOV and aspect unless given directly.
    pub fn vertical_fov(&self) -> f32 {
        self.vertical_fov
    }

    pub fn near_distance(&self) -> f32 {
        self.near_distance
    }

    pub fn far_distance(&self) -> f32 {
        self.far_distance
    }

    // ===== SETTERS (validate, then recompute derived values) =====

    /// Change the horizontal FOV. It becomes the supplied FOV and the
    /// vertical FOV is recomputed.
    pub fn set_horizontal_fov(&mut self, horizontal_fov: f32) -> Result<()> {
        check_fov("horizontal", horizontal_fov)?;
        let vertical_fov = vertical_fov_from_horizontal(horizontal_fov, self.aspect_ratio);
        check_fov("vertical", vertical_fov)?;
        self.fov_source = FovSource::Horizontal;
        self.horizontal_fov = horizontal_fov;
        self.vertical_fov = vertical_fov;
        Ok(())
    }

    /// Change the vertical FOV. It becomes the supplied FOV and the
    /// horizontal FOV is recomputed.
    pub fn set_vertical_fov(&mut self, vertical_fov: f32) -> Result<()> {
        check_fov("vertical", vertical_fov)?;
        let horizontal_fov = horizontal_fov_from_vertical(vertical_fov, self.aspect_ratio);
        check_fov("horizontal", horizontal_fov)?;
        self.fov_source = FovSource::Vertical;
        self.horizontal_fov = horizontal_fov;
        self.vertical_fov = vertical_fov;
        Ok(())
    }

    /// Change the aspect ratio. The supplied FOV is kept and only the
    /// derived one is recomputed.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<()> {
        check_aspect(aspect_ratio)?;
        let (horizontal_fov, vertical_fov) = match self.fov_source {
            FovSource::Horizontal => (
                self.horizontal_fov,
                vertical_fov_from_horizontal(self.horizontal_fov, aspect_ratio),
            ),
            FovSource::Vertical => (
                horizontal_fov_from_vertical(self.vertical_fov, aspect_ratio),
                self.vertical_fov,
            ),
        };
        check_fov("horizontal", horizontal_fov)?;
        check_fov("vertical", vertical_fov)?;
        self.aspect_ratio = aspect_ratio;
        self.horizontal_fov = horizontal_fov;
        self.vertical_fov = vertical_fov;
        Ok(())
    }

    pub fn set_near_far(&mut self, near_distance: f32, far_distance: f32) -> Result<()> {
        check_near_far(near_distance, far_distance)?;
        self.near_distance = near_distance;
        self.far_distance = far_distance;
        Ok(())
    }
}

impl Default for FrustumParams {
    /// near 10, far 50, aspect 3, horizontal FOV 50 degrees
    fn default() -> Self {
        let horizontal_fov = 50.0;
        let aspect_ratio = 3.0;
        Self {
            fov_source: FovSource::Horizontal,
            aspect_ratio,
            horizontal_fov,
            vertical_fov: vertical_fov_from_horizontal(horizontal_fov, aspect_ratio),
            near_distance: 10.0,
            far_distance: 50.0,
        }
    }
}

fn invalid(message: String) -> Error {
    engine_err!(InvalidFrustum, "galaxy3d::FrustumParams", "{}", message)
}

fn check_aspect(aspect_ratio: f32) -> Result<()> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(invalid(format!("aspect ratio {} must be finite and > 0", aspect_ratio)));
    }
    Ok(())
}

fn check_fov(axis: &str, fov: f32) -> Result<()> {
    if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
        return Err(invalid(format!("{} FOV {} must be in (0, 180) degrees", axis, fov)));
    }
    Ok(())
}

fn check_near_far(near_distance: f32, far_distance: f32) -> Result<()> {
    if !near_distance.is_finite() || near_distance <= 0.0 {
        return Err(invalid(format!("near distance {} must be finite and > 0", near_distance)));
    }
    if !far_distance.is_finite() || near_distance >= far_distance {
        return Err(invalid(format!(
            "near distance {} must be < far distance {}", near_distance, far_distance
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "frustum_params_tests.rs"]
mod tests;
