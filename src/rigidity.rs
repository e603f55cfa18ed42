//! Axial and flexural rigidity of the overlapped wall section.
//!
//! The wall is idealised as a rectangular strip one metre wide whose depth is
//! the effective thickness of the pile overlap.

use tracing::debug;

use crate::errors::RigidityError;
use crate::geometry::WallGeometry;

/// Second moment of area of a rectangle of `width` and `depth` about its
/// centroidal axis parallel to the width.
#[must_use]
pub fn rectangle_moment_of_inertia(width: f64, depth: f64) -> f64 {
    width * depth.powi(3) / 12.0
}

/// Stiffness of one metre of wall with a given effective thickness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRigidity {
    /// Effective thickness in metres.
    pub thickness: f64,
    /// Second moment of area in m⁴/m.
    pub moment_of_inertia: f64,
    /// Axial rigidity `EA` in kN/m.
    pub axial: f64,
    /// Flexural rigidity `EI` in kNm²/m.
    pub flexural: f64,
}

impl SectionRigidity {
    /// Evaluate the rigidity of a strip of `thickness` metres for a Young's
    /// modulus of `elastic_modulus` kPa.
    ///
    /// # Errors
    ///
    /// Returns [`RigidityError::NonPositiveThickness`] or
    /// [`RigidityError::NonPositiveModulus`] when either value is zero,
    /// negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use secantx::SectionRigidity;
    ///
    /// let section = SectionRigidity::new(0.5, 30.0e6).expect("valid section");
    /// assert!((section.axial - 15.0e6).abs() < 1.0e-6);
    /// ```
    pub fn new(thickness: f64, elastic_modulus: f64) -> Result<Self, RigidityError> {
        if !(thickness.is_finite() && thickness > 0.0) {
            return Err(RigidityError::NonPositiveThickness(thickness));
        }
        if !(elastic_modulus.is_finite() && elastic_modulus > 0.0) {
            return Err(RigidityError::NonPositiveModulus(elastic_modulus));
        }
        let moment_of_inertia = rectangle_moment_of_inertia(1.0, thickness);
        Ok(Self {
            thickness,
            moment_of_inertia,
            axial: elastic_modulus * thickness,
            flexural: elastic_modulus * moment_of_inertia,
        })
    }
}

/// Rigidity of the wall at the top and at the base of the shaft.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallRigidity {
    /// Young's modulus in kPa the rigidities were evaluated with.
    pub elastic_modulus: f64,
    /// Section at the top of the wall.
    pub top: SectionRigidity,
    /// Section at the base of the wall.
    pub base: SectionRigidity,
}

impl WallRigidity {
    /// Evaluate both sections of a wall.
    ///
    /// # Errors
    ///
    /// Returns [`RigidityError::NoBaseOverlap`] when the piles do not touch at
    /// the base, since no effective thickness exists there. Other variants are
    /// forwarded from [`SectionRigidity::new`].
    pub fn evaluate(geometry: &WallGeometry, elastic_modulus: f64) -> Result<Self, RigidityError> {
        let base_thickness = geometry
            .base
            .thickness()
            .ok_or(RigidityError::NoBaseOverlap)?;
        let rigidity = Self {
            elastic_modulus,
            top: SectionRigidity::new(geometry.thickness_top, elastic_modulus)?,
            base: SectionRigidity::new(base_thickness, elastic_modulus)?,
        };
        debug!(?rigidity, "wall rigidity evaluated");
        Ok(rigidity)
    }
}
