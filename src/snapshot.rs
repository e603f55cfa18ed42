//! Flat JSON snapshots of the secant pile wall form.
//!
//! A snapshot maps every form field to its value and carries a
//! `selected_form` tag naming the form it was saved from. Files saved by other
//! forms of the same application are rejected before any value is read.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::info;

use crate::errors::{Field, InputError, SnapshotError};
use crate::parameters::{PlotOption, ProjectInfo, WallParameters};

/// Value of the `selected_form` tag identifying this form.
pub const FORM_NAME: &str = "Secant piled wall";

/// File name offered when saving a snapshot.
pub const DEFAULT_FILE_NAME: &str = "piles_and_pannels_secant_piles_wall.JSON";

/// On-disk layout of a snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotRecord {
    /// Form discriminator.
    selected_form: String,
    /// Project name.
    project_name_spw: String,
    /// Project revision.
    project_revision_spw: String,
    /// Wall identification.
    wall_name_spw: String,
    /// Pile diameter in metres.
    #[serde(rename = "D_spw")]
    diameter: f64,
    /// Number of piles in the random layout. Older files store it as a float.
    n_pieces_spw: Number,
    /// Centre-to-centre spacing in metres.
    a_spw: f64,
    /// Shaft length in metres.
    #[serde(rename = "L_spw")]
    shaft_length: f64,
    /// Verticality in percent.
    v_spw: f64,
    /// Drilling platform height in metres.
    #[serde(rename = "H_drilling_platform_spw")]
    platform_height: f64,
    /// Young's modulus in kPa.
    #[serde(rename = "E_spw")]
    elastic_modulus: f64,
    /// Label of the visualization option.
    plotting_option_spw: String,
}

impl From<&WallParameters> for SnapshotRecord {
    fn from(parameters: &WallParameters) -> Self {
        Self {
            selected_form: FORM_NAME.to_owned(),
            project_name_spw: parameters.project.name.clone(),
            project_revision_spw: parameters.project.revision.clone(),
            wall_name_spw: parameters.wall_name.clone(),
            diameter: parameters.diameter,
            n_pieces_spw: Number::from(parameters.pile_count),
            a_spw: parameters.spacing,
            shaft_length: parameters.shaft_length,
            v_spw: parameters.verticality,
            platform_height: parameters.platform_height,
            elastic_modulus: parameters.elastic_modulus,
            plotting_option_spw: parameters.plot_option.label().to_owned(),
        }
    }
}

impl SnapshotRecord {
    /// Convert the record into validated form values.
    fn into_parameters(self) -> Result<WallParameters, InputError> {
        let parameters = WallParameters {
            project: ProjectInfo {
                name: self.project_name_spw,
                revision: self.project_revision_spw,
            },
            wall_name: self.wall_name_spw,
            diameter: self.diameter,
            spacing: self.a_spw,
            shaft_length: self.shaft_length,
            platform_height: self.platform_height,
            verticality: self.v_spw,
            elastic_modulus: self.elastic_modulus,
            plot_option: self.plotting_option_spw.parse()?,
            pile_count: pile_count(&self.n_pieces_spw)?,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

/// Read the pile count from an integer or an integral float.
fn pile_count(number: &Number) -> Result<u32, InputError> {
    if let Some(count) = number.as_u64() {
        return u32::try_from(count).map_err(|_| InputError::OutOfRange {
            field: Field::PileCount,
            value: count as f64,
            min: 0.0,
            max: f64::from(u32::MAX),
        });
    }
    let value = number.as_f64().unwrap_or(f64::NAN);
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            field: Field::PileCount,
            value,
        });
    }
    if value.fract() != 0.0 {
        return Err(InputError::NonIntegral {
            field: Field::PileCount,
            value,
        });
    }
    if !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(InputError::OutOfRange {
            field: Field::PileCount,
            value,
            min: 0.0,
            max: f64::from(u32::MAX),
        });
    }
    Ok(value as u32)
}

/// Parse a snapshot and return the form values it holds.
///
/// # Errors
///
/// Returns [`SnapshotError::MismatchedForm`] when the `selected_form` tag is
/// missing or names another form, [`SnapshotError::Parse`] when the text is not
/// a complete snapshot and [`SnapshotError::InvalidParameters`] when a value is
/// outside the accepted range.
pub fn load_snapshot(json: &str) -> Result<WallParameters, SnapshotError> {
    let value: Value = serde_json::from_str(json)?;
    let found = value.get("selected_form").and_then(Value::as_str);
    if found != Some(FORM_NAME) {
        return Err(SnapshotError::MismatchedForm {
            expected: FORM_NAME,
            found: found.map(str::to_owned),
        });
    }
    let record: SnapshotRecord = serde_json::from_value(value)?;
    let parameters = record.into_parameters()?;
    info!(wall = %parameters.wall_name, "snapshot loaded");
    Ok(parameters)
}

/// Serialise the form values into a snapshot.
///
/// # Errors
///
/// Returns [`SnapshotError::InvalidParameters`] when the values would not load
/// back, and [`SnapshotError::Parse`] if serialisation fails.
pub fn save_snapshot(parameters: &WallParameters) -> Result<String, SnapshotError> {
    parameters.validate()?;
    Ok(serde_json::to_string_pretty(&SnapshotRecord::from(
        parameters,
    ))?)
}

/// Read and parse a snapshot file.
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] when the file cannot be read, otherwise the
/// errors of [`load_snapshot`].
pub fn load_snapshot_file(path: impl AsRef<Path>) -> Result<WallParameters, SnapshotError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    info!(path = %path.display(), "reading snapshot");
    load_snapshot(&json)
}

/// Write a snapshot file. Nothing is written when serialisation fails.
///
/// # Errors
///
/// Returns the errors of [`save_snapshot`] and [`SnapshotError::Io`] when the
/// file cannot be written.
pub fn save_snapshot_file(
    path: impl AsRef<Path>,
    parameters: &WallParameters,
) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let json = save_snapshot(parameters)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "snapshot saved");
    Ok(())
}
