//! Form parameters of a secant pile wall check.
//!
//! [`WallParameters`] holds every value the engineer enters. It is a plain
//! value: the geometry kernel only ever sees the [`PileWallInput`] derived
//! from it.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::errors::{Field, InputError};
use crate::geometry::PileWallInput;
use crate::visualization::PlotMode;

/// Accepted pile diameters in metres.
pub const DIAMETER_RANGE: RangeInclusive<f64> = 0.3..=5.0;
/// Accepted centre-to-centre spacings in metres.
pub const SPACING_RANGE: RangeInclusive<f64> = 0.0..=5.0;
/// Accepted shaft lengths in metres.
pub const SHAFT_LENGTH_RANGE: RangeInclusive<f64> = 1.0..=150.0;
/// Accepted drilling platform heights in metres.
pub const PLATFORM_HEIGHT_RANGE: RangeInclusive<f64> = 0.0..=20.0;
/// Accepted drilling verticality in percent.
pub const VERTICALITY_RANGE: RangeInclusive<f64> = 0.0..=2.0;
/// Accepted concrete Young's modulus in kPa.
pub const ELASTIC_MODULUS_RANGE: RangeInclusive<f64> = 25.0e6..=35.0e6;
/// Accepted number of piles in the random layout.
pub const PILE_COUNT_RANGE: RangeInclusive<u32> = 2..=100;

/// How the piles are drawn at the base of the wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlotOption {
    /// Two neighbouring piles in three deviation orientations.
    #[default]
    TwoPilesApart,
    /// A row of piles, each deviating in a random direction.
    RandomDeviations,
}

impl PlotOption {
    /// Label shown to the user and stored in snapshots.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PlotOption::TwoPilesApart => "Two piles apart",
            PlotOption::RandomDeviations => "Random deviations",
        }
    }
}

impl fmt::Display for PlotOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlotOption {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [PlotOption::TwoPilesApart, PlotOption::RandomDeviations]
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| InputError::UnknownPlotOption(s.to_owned()))
    }
}

/// Project identification printed in reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Project name.
    pub name: String,
    /// Revision of the calculation.
    pub revision: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: "Sample project".to_owned(),
            revision: "First issue, rev0".to_owned(),
        }
    }
}

/// Every value of the secant pile wall form.
#[derive(Clone, Debug, PartialEq)]
pub struct WallParameters {
    /// Project identification.
    pub project: ProjectInfo,
    /// Wall identification.
    pub wall_name: String,
    /// Pile diameter in metres.
    pub diameter: f64,
    /// Centre-to-centre pile spacing in metres.
    pub spacing: f64,
    /// Length of shaft in metres.
    pub shaft_length: f64,
    /// Height of the drilling platform above the top of the piles in metres.
    pub platform_height: f64,
    /// Drilling verticality in percent.
    pub verticality: f64,
    /// Concrete Young's modulus in kPa.
    pub elastic_modulus: f64,
    /// Type of visualization.
    pub plot_option: PlotOption,
    /// Number of piles drawn in the random layout.
    pub pile_count: u32,
}

impl Default for WallParameters {
    fn default() -> Self {
        Self {
            project: ProjectInfo::default(),
            wall_name: "Wall 1".to_owned(),
            diameter: 1.2,
            spacing: 0.75,
            shaft_length: 25.0,
            platform_height: 0.0,
            verticality: 0.75,
            elastic_modulus: 30.0e6,
            plot_option: PlotOption::TwoPilesApart,
            pile_count: 10,
        }
    }
}

impl WallParameters {
    /// Check every numeric field against the range the form accepts.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found, in form order.
    ///
    /// # Examples
    /// ```
    /// use secantx::{InputError, WallParameters};
    ///
    /// let parameters = WallParameters {
    ///     verticality: 3.0,
    ///     ..WallParameters::default()
    /// };
    /// assert!(matches!(
    ///     parameters.validate(),
    ///     Err(InputError::OutOfRange { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), InputError> {
        check_range(Field::Diameter, self.diameter, &DIAMETER_RANGE)?;
        check_range(Field::Spacing, self.spacing, &SPACING_RANGE)?;
        check_range(Field::ShaftLength, self.shaft_length, &SHAFT_LENGTH_RANGE)?;
        check_range(Field::Verticality, self.verticality, &VERTICALITY_RANGE)?;
        check_range(
            Field::PlatformHeight,
            self.platform_height,
            &PLATFORM_HEIGHT_RANGE,
        )?;
        check_range(
            Field::ElasticModulus,
            self.elastic_modulus,
            &ELASTIC_MODULUS_RANGE,
        )?;
        if !PILE_COUNT_RANGE.contains(&self.pile_count) {
            return Err(InputError::OutOfRange {
                field: Field::PileCount,
                value: f64::from(self.pile_count),
                min: f64::from(*PILE_COUNT_RANGE.start()),
                max: f64::from(*PILE_COUNT_RANGE.end()),
            });
        }
        Ok(())
    }

    /// Geometric inputs for [`wall_geometry`](crate::wall_geometry).
    #[must_use]
    pub fn geometry_input(&self) -> PileWallInput {
        PileWallInput::new(
            self.diameter,
            self.spacing,
            self.shaft_length,
            self.platform_height,
            self.verticality,
        )
    }

    /// Visualization mode selected on the form. `seed` drives the random
    /// layout and is ignored otherwise.
    #[must_use]
    pub fn plot_mode(&self, seed: u64) -> PlotMode {
        match self.plot_option {
            PlotOption::TwoPilesApart => PlotMode::TwoPilesApart,
            PlotOption::RandomDeviations => PlotMode::RandomDeviations {
                count: self.pile_count as usize,
                seed,
            },
        }
    }
}

/// Reject `value` unless it is finite and within `range`.
fn check_range(
    field: Field,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if !range.contains(&value) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        WallParameters::default()
            .validate()
            .expect("default form values are accepted");
    }

    #[test]
    fn rejects_small_diameter() {
        let parameters = WallParameters {
            diameter: 0.2,
            ..WallParameters::default()
        };
        assert_eq!(
            parameters.validate(),
            Err(InputError::OutOfRange {
                field: Field::Diameter,
                value: 0.2,
                min: 0.3,
                max: 5.0
            })
        );
    }

    #[test]
    fn rejects_infinite_length() {
        let parameters = WallParameters {
            shaft_length: f64::INFINITY,
            ..WallParameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(InputError::NotFinite {
                field: Field::ShaftLength,
                ..
            })
        ));
    }

    #[test]
    fn rejects_single_pile() {
        let parameters = WallParameters {
            pile_count: 1,
            ..WallParameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(InputError::OutOfRange {
                field: Field::PileCount,
                ..
            })
        ));
    }

    #[test]
    fn spacing_wider_than_diameter_is_in_range() {
        let parameters = WallParameters {
            diameter: 0.6,
            spacing: 0.9,
            ..WallParameters::default()
        };
        assert_eq!(parameters.validate(), Ok(()));
    }

    #[test]
    fn plot_option_labels_parse_back() {
        for option in [PlotOption::TwoPilesApart, PlotOption::RandomDeviations] {
            assert_eq!(option.label().parse::<PlotOption>(), Ok(option));
        }
        assert_eq!(
            "Pie chart".parse::<PlotOption>(),
            Err(InputError::UnknownPlotOption("Pie chart".to_owned()))
        );
    }
}
