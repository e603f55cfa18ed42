use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use secantx::{load_snapshot_file, PlotOption, WallParameters};

/// Command line of the secant pile wall check.
#[derive(Debug, Parser)]
#[command(name = "secantx")]
#[command(about = "Geometric check for secant piled walls")]
pub struct Cli {
    /// Load form values from a saved snapshot before applying the flags below.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    /// Project name.
    #[arg(long)]
    pub project: Option<String>,
    /// Project revision.
    #[arg(long)]
    pub revision: Option<String>,
    /// Wall identification.
    #[arg(long)]
    pub wall_name: Option<String>,
    /// Pile diameter [m].
    #[arg(long)]
    pub diameter: Option<f64>,
    /// C/C pile spacing between two neighbouring piles [m].
    #[arg(long)]
    pub spacing: Option<f64>,
    /// Length of shaft [m].
    #[arg(long)]
    pub length: Option<f64>,
    /// Height of drilling platform above top of piles [m].
    #[arg(long)]
    pub platform_height: Option<f64>,
    /// Drilling verticality [%].
    #[arg(long)]
    pub verticality: Option<f64>,
    /// Concrete Young's modulus [kPa].
    #[arg(long)]
    pub modulus: Option<f64>,
    /// Type of visualization.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Number of piles drawn with random deviations.
    #[arg(long)]
    pub piles: Option<u32>,
    /// Seed of the random deviation directions.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Save the resulting form values as a snapshot.
    #[arg(long)]
    pub save: Option<PathBuf>,
    /// Write the cross-section at the base of the wall as SVG.
    #[arg(long)]
    pub svg: Option<PathBuf>,
    /// Write an isometric view of the pile shafts as SVG.
    #[arg(long)]
    pub svg_3d: Option<PathBuf>,
}

/// Visualization choices accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two piles in three deviation orientations.
    TwoPiles,
    /// A row of piles with random deviation directions.
    Random,
}

impl From<ModeArg> for PlotOption {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPiles => PlotOption::TwoPilesApart,
            ModeArg::Random => PlotOption::RandomDeviations,
        }
    }
}

impl Cli {
    /// Form values from defaults, the optional snapshot and the flags, in
    /// increasing precedence.
    pub fn resolve_parameters(&self) -> Result<WallParameters> {
        let mut parameters = match &self.snapshot {
            Some(path) => load_snapshot_file(path)
                .with_context(|| format!("failed to load snapshot {}", path.display()))?,
            None => WallParameters::default(),
        };

        if let Some(name) = &self.project {
            parameters.project.name.clone_from(name);
        }
        if let Some(revision) = &self.revision {
            parameters.project.revision.clone_from(revision);
        }
        if let Some(wall_name) = &self.wall_name {
            parameters.wall_name.clone_from(wall_name);
        }
        let overrides = [
            (self.diameter, &mut parameters.diameter),
            (self.spacing, &mut parameters.spacing),
            (self.length, &mut parameters.shaft_length),
            (self.platform_height, &mut parameters.platform_height),
            (self.verticality, &mut parameters.verticality),
            (self.modulus, &mut parameters.elastic_modulus),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(mode) = self.mode {
            parameters.plot_option = mode.into();
        }
        if let Some(piles) = self.piles {
            parameters.pile_count = piles;
        }

        parameters
            .validate()
            .context("invalid secant pile wall parameters")?;
        Ok(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secantx::save_snapshot_file;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["secantx"]);
        let parameters = cli.resolve_parameters().expect("defaults are valid");
        assert_eq!(parameters, WallParameters::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "secantx",
            "--diameter",
            "0.9",
            "--spacing",
            "0.7",
            "--mode",
            "random",
            "--piles",
            "20",
        ]);
        let parameters = cli.resolve_parameters().expect("valid flags");
        assert_eq!(parameters.diameter, 0.9);
        assert_eq!(parameters.spacing, 0.7);
        assert_eq!(parameters.plot_option, PlotOption::RandomDeviations);
        assert_eq!(parameters.pile_count, 20);
    }

    #[test]
    fn out_of_range_flag_is_rejected() {
        let cli = Cli::parse_from(["secantx", "--verticality", "4.0"]);
        assert!(cli.resolve_parameters().is_err());
    }

    #[test]
    fn flags_override_snapshot() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("wall.JSON");
        let saved = WallParameters {
            wall_name: "South wall".to_owned(),
            shaft_length: 30.0,
            ..WallParameters::default()
        };
        save_snapshot_file(&path, &saved).expect("snapshot written");

        let cli = Cli::parse_from([
            "secantx",
            "--snapshot",
            path.to_str().expect("utf-8 path"),
            "--length",
            "12",
        ]);
        let parameters = cli.resolve_parameters().expect("snapshot loads");
        assert_eq!(parameters.wall_name, "South wall");
        assert_eq!(parameters.shaft_length, 12.0);
    }
}
