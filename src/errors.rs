//! Error types produced while validating, computing or loading secant pile walls.

use std::fmt;

use thiserror::Error;

/// Named input field of a secant pile wall, used to point users at the value
/// that needs correcting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Pile shaft diameter `D`.
    Diameter,
    /// Centre-to-centre spacing `a`.
    Spacing,
    /// Shaft length `L`.
    ShaftLength,
    /// Drilling platform height `H`.
    PlatformHeight,
    /// Drilling verticality `v`.
    Verticality,
    /// Concrete Young's modulus `E`.
    ElasticModulus,
    /// Number of piles in the random layout.
    PileCount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Diameter => "pile diameter [m]",
            Field::Spacing => "c/c pile spacing [m]",
            Field::ShaftLength => "length of shaft [m]",
            Field::PlatformHeight => "height of drilling platform [m]",
            Field::Verticality => "drilling verticality [%]",
            Field::ElasticModulus => "Young's modulus [kPa]",
            Field::PileCount => "number of piles",
        };
        f.write_str(name)
    }
}

/// Error returned when an input value is rejected before any computation runs.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when a value is NaN or infinite.
    #[error("{field} must be a finite number (received {value})")]
    NotFinite {
        /// Offending field.
        field: Field,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a value falls outside the range accepted by the form.
    #[error("{field} must lie within [{min}, {max}] (received {value})")]
    OutOfRange {
        /// Offending field.
        field: Field,
        /// Rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },
    /// Returned when a value that must be strictly positive is not.
    #[error("{field} must be positive (received {value})")]
    NonPositive {
        /// Offending field.
        field: Field,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a value that must not be negative is.
    #[error("{field} must not be negative (received {value})")]
    Negative {
        /// Offending field.
        field: Field,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a count carries a fractional part.
    #[error("{field} must be a whole number (received {value})")]
    NonIntegral {
        /// Offending field.
        field: Field,
        /// Rejected value.
        value: f64,
    },
    /// Returned when the visualization option is not one of the known labels.
    #[error("unknown type of visualization {0:?}")]
    UnknownPlotOption(String),
}

/// Error returned when loading or saving a form snapshot.
///
/// A snapshot written for another form is reported through
/// [`SnapshotError::MismatchedForm`] so the caller can stop before any value of
/// the file is used.
///
/// # Examples
///
/// ```
/// use secantx::{load_snapshot, SnapshotError};
///
/// let error = load_snapshot(r#"{"selected_form": "Micropile buckling"}"#)
///     .expect_err("foreign snapshot is rejected");
/// assert!(matches!(error, SnapshotError::MismatchedForm { .. }));
/// ```
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Returned when the snapshot file cannot be read or written.
    #[error("snapshot file access failed: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when the snapshot is not valid JSON or lacks a field.
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    /// Returned when the snapshot belongs to a different form.
    #[error("wrong JSON data file: expected form {expected:?}, found {found:?}")]
    MismatchedForm {
        /// Form tag this crate reads and writes.
        expected: &'static str,
        /// Form tag found in the file, if any.
        found: Option<String>,
    },
    /// Returned when the snapshot parses but holds out-of-range values.
    #[error("snapshot holds invalid parameters: {0}")]
    InvalidParameters(#[from] InputError),
}

/// Error returned when stiffness is requested for an unusable section.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum RigidityError {
    /// Returned when the piles do not touch at the base of the wall.
    #[error("piles do not touch at the base of the wall; no effective thickness")]
    NoBaseOverlap,
    /// Returned when the section thickness is zero, negative or not finite.
    #[error("section thickness must be positive (received {0})")]
    NonPositiveThickness(f64),
    /// Returned when the elastic modulus is zero, negative or not finite.
    #[error("elastic modulus must be positive (received {0})")]
    NonPositiveModulus(f64),
}
