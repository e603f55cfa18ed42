//! Overlap geometry of neighbouring secant piles.
//!
//! Two drilled piles of diameter `D` placed `a` apart intersect in a lens. The
//! chord of that lens is the effective wall thickness. Drilling deviation
//! pushes the piles apart with depth, so the lens shrinks towards the base of
//! the wall and may vanish entirely.

use tracing::{debug, warn};
use uom::si::f64::Ratio;
use uom::si::ratio::{percent, ratio};

use crate::errors::{Field, InputError};

/// Geometric inputs of a secant pile wall.
///
/// Lengths are in metres. The verticality is the drilling tolerance in
/// percent, so `1.0` means one centimetre of lateral deviation per metre
/// drilled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PileWallInput {
    /// Pile shaft diameter `D`.
    pub diameter: f64,
    /// Centre-to-centre spacing `a` between neighbouring piles.
    pub spacing: f64,
    /// Drilled shaft length `L`.
    pub shaft_length: f64,
    /// Height `H` of the drilling platform above the top of the piles.
    pub platform_height: f64,
    /// Drilling verticality `v` in percent.
    pub verticality: f64,
}

impl PileWallInput {
    /// Create a [`PileWallInput`] with explicit values.
    #[must_use]
    pub const fn new(
        diameter: f64,
        spacing: f64,
        shaft_length: f64,
        platform_height: f64,
        verticality: f64,
    ) -> Self {
        Self {
            diameter,
            spacing,
            shaft_length,
            platform_height,
            verticality,
        }
    }

    /// Check that the inputs describe a drawable wall.
    ///
    /// A spacing larger than the diameter is accepted; it simply produces a
    /// wall whose piles never overlap.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotFinite`] for NaN or infinite values,
    /// [`InputError::NonPositive`] when the diameter is not strictly positive and
    /// [`InputError::Negative`] when any other value is below zero.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            (Field::Diameter, self.diameter),
            (Field::Spacing, self.spacing),
            (Field::ShaftLength, self.shaft_length),
            (Field::PlatformHeight, self.platform_height),
            (Field::Verticality, self.verticality),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NotFinite { field, value });
            }
        }
        if self.diameter <= 0.0 {
            return Err(InputError::NonPositive {
                field: Field::Diameter,
                value: self.diameter,
            });
        }
        for (field, value) in &fields[1..] {
            if *value < 0.0 {
                return Err(InputError::Negative {
                    field: *field,
                    value: *value,
                });
            }
        }
        Ok(())
    }

    /// Drilling verticality expressed as a dimensionless slope.
    #[must_use]
    pub fn slope(&self) -> f64 {
        Ratio::new::<percent>(self.verticality).get::<ratio>()
    }
}

/// State of the pile overlap at the base of the wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BaseOverlap {
    /// The piles still intersect; the effective thickness in metres.
    Overlap(f64),
    /// Deviation consumed the whole overcut; the piles do not touch.
    NoOverlap,
}

impl BaseOverlap {
    /// Effective thickness at the base, when the piles touch.
    #[must_use]
    pub const fn thickness(self) -> Option<f64> {
        match self {
            BaseOverlap::Overlap(thickness) => Some(thickness),
            BaseOverlap::NoOverlap => None,
        }
    }

    /// Whether the piles still intersect at the base.
    #[must_use]
    pub const fn is_overlapping(self) -> bool {
        matches!(self, BaseOverlap::Overlap(_))
    }
}

/// Result of the overlap check for one wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallGeometry {
    /// Inputs the result was computed from.
    pub input: PileWallInput,
    /// Theoretical overcut at the top, `t = D - a`.
    pub overcut_top: f64,
    /// Effective thickness at the top, `d`.
    pub thickness_top: f64,
    /// Deviation accumulated while drilling through the platform, `x0`.
    pub initial_deviation: f64,
    /// Deviation at the base of the shaft, `x`.
    pub base_deviation: f64,
    /// Overcut left at the base, `t_eff = t - x`. Negative values are gaps.
    pub overcut_base: f64,
    /// Effective thickness at the base, `d_eff`.
    pub base: BaseOverlap,
    /// Area shared by two neighbouring piles at the top, in square metres.
    pub intersection_area: f64,
}

/// Run the overlap check for a secant pile wall.
///
/// # Errors
///
/// Returns [`InputError`] when [`PileWallInput::validate`] rejects the inputs.
///
/// # Examples
/// ```
/// use secantx::{wall_geometry, BaseOverlap, PileWallInput};
///
/// let input = PileWallInput::new(1.0, 1.0, 50.0, 0.0, 1.0);
/// let geometry = wall_geometry(&input).expect("valid input");
/// assert_eq!(geometry.base, BaseOverlap::NoOverlap);
/// ```
pub fn wall_geometry(input: &PileWallInput) -> Result<WallGeometry, InputError> {
    input.validate()?;
    debug!(?input, "computing secant pile overlap");

    let diameter = input.diameter;
    let slope = input.slope();

    let overcut_top = diameter - input.spacing;
    let thickness_top = lens_width(diameter, input.spacing);
    let initial_deviation = input.platform_height * slope;
    let base_deviation = (input.platform_height + input.shaft_length) * slope;
    let overcut_base = overcut_top - base_deviation;

    let base = if overcut_base > 0.0 {
        BaseOverlap::Overlap(lens_width_from_overcut(diameter, overcut_base))
    } else {
        warn!(
            overcut_base,
            base_deviation, "piles do not touch at the base of the wall"
        );
        BaseOverlap::NoOverlap
    };

    let geometry = WallGeometry {
        input: *input,
        overcut_top,
        thickness_top,
        initial_deviation,
        base_deviation,
        overcut_base,
        base,
        intersection_area: lens_area(diameter, input.spacing),
    };
    debug!(?geometry, "secant pile overlap computed");
    Ok(geometry)
}

/// Chord of the lens formed by two circles of `diameter` whose centres are
/// `spacing` apart. Zero when the circles do not intersect.
#[must_use]
pub fn lens_width(diameter: f64, spacing: f64) -> f64 {
    if spacing >= diameter {
        return 0.0;
    }
    let radius = diameter / 2.0;
    let half_spacing = spacing / 2.0;
    2.0 * (radius * radius - half_spacing * half_spacing).max(0.0).sqrt()
}

/// Chord of the lens expressed through the overcut `t` between the circles.
/// Zero when the overcut is not positive.
#[must_use]
pub fn lens_width_from_overcut(diameter: f64, overcut: f64) -> f64 {
    if overcut <= 0.0 {
        return 0.0;
    }
    let half_overcut = overcut / 2.0;
    2.0 * ((diameter / 2.0) * overcut - half_overcut * half_overcut)
        .max(0.0)
        .sqrt()
}

/// Area of the lens shared by two circles of `diameter` whose centres are
/// `spacing` apart.
///
/// Each half of the lens is a circular sector of angle `theta` minus the
/// triangular wedge between the sector and the line joining the centres.
#[must_use]
pub fn lens_area(diameter: f64, spacing: f64) -> f64 {
    let radius = diameter / 2.0;
    let half_width = lens_width(diameter, spacing) / 2.0;
    let theta = 2.0 * (half_width / radius).min(1.0).asin();
    let sector = theta / 2.0 * radius * radius;
    let wedge = (spacing / 2.0) * half_width;
    2.0 * (sector - wedge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn lens_width_is_zero_for_touching_circles() {
        assert_eq!(lens_width(1.0, 1.0), 0.0);
        assert_eq!(lens_width(1.0, 1.5), 0.0);
    }

    #[test]
    fn lens_width_matches_diameter_for_coincident_circles() {
        assert!((lens_width(1.2, 0.0) - 1.2).abs() < 1.0e-12);
    }

    #[test]
    fn both_lens_width_forms_agree() {
        let diameter = 0.88;
        let spacing = 0.62;
        let from_spacing = lens_width(diameter, spacing);
        let from_overcut = lens_width_from_overcut(diameter, diameter - spacing);
        assert!((from_spacing - from_overcut).abs() < 1.0e-12);
    }

    #[test]
    fn lens_area_of_coincident_circles_is_full_circle() {
        let area = lens_area(1.0, 0.0);
        assert!((area - PI * 0.25).abs() < 1.0e-12);
    }

    #[test]
    fn lens_area_vanishes_without_overlap() {
        assert_eq!(lens_area(1.0, 1.0), 0.0);
        assert_eq!(lens_area(1.0, 2.0), 0.0);
    }

    #[test]
    fn slope_converts_percent() {
        let input = PileWallInput::new(1.0, 0.8, 10.0, 2.0, 0.5);
        assert!((input.slope() - 0.005).abs() < 1.0e-15);
    }

    #[test]
    fn rejects_non_positive_diameter() {
        let input = PileWallInput::new(0.0, 0.5, 10.0, 0.0, 0.5);
        assert_eq!(
            wall_geometry(&input),
            Err(InputError::NonPositive {
                field: Field::Diameter,
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_negative_spacing() {
        let input = PileWallInput::new(1.0, -0.1, 10.0, 0.0, 0.5);
        assert_eq!(
            wall_geometry(&input),
            Err(InputError::Negative {
                field: Field::Spacing,
                value: -0.1
            })
        );
    }

    #[test]
    fn rejects_nan() {
        let input = PileWallInput::new(1.0, 0.8, f64::NAN, 0.0, 0.5);
        match wall_geometry(&input) {
            Err(InputError::NotFinite { field, .. }) => assert_eq!(field, Field::ShaftLength),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn spacing_beyond_diameter_is_not_an_error() {
        let input = PileWallInput::new(1.0, 1.3, 10.0, 0.0, 0.0);
        let geometry = wall_geometry(&input).expect("wide spacing is accepted");
        assert!(geometry.overcut_top < 0.0);
        assert_eq!(geometry.thickness_top, 0.0);
        assert_eq!(geometry.base, BaseOverlap::NoOverlap);
    }
}
