use crate::analysis::CheckSummary;
use secantx::BaseOverlap;
use std::fmt::Write;
use uom::si::area::{square_centimeter, square_meter};
use uom::si::f64::{Area, Length};
use uom::si::length::{centimeter, meter};

/// Metres expressed in centimetres.
fn cm(value: f64) -> f64 {
    Length::new::<meter>(value).get::<centimeter>()
}

/// Square metres expressed in square centimetres.
fn cm2(value: f64) -> f64 {
    Area::new::<square_meter>(value).get::<square_centimeter>()
}

/// Render a textual summary of the wall check.
///
/// Lengths are reported in centimetres because overcuts and deviations are of
/// that order. Rigidities are per metre of wall.
#[must_use]
pub fn render_summary(summary: &CheckSummary) -> String {
    let mut output = String::new();
    let parameters = &summary.parameters;
    let geometry = &summary.geometry;

    writeln!(
        &mut output,
        "Geometric check for secant piled wall: {} ({}, {})",
        parameters.wall_name, parameters.project.name, parameters.project.revision
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Input: D = {:.2} m, a = {:.2} m, L = {:.1} m, H = {:.1} m, v = {:.2} %",
        parameters.diameter,
        parameters.spacing,
        parameters.shaft_length,
        parameters.platform_height,
        parameters.verticality
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Initial deviation by free drilling x0 = {:.2} cm",
        cm(geometry.initial_deviation)
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Overcut at top of wall t = {:.2} cm",
        cm(geometry.overcut_top)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Effective thickness at top of wall d = {:.2} cm",
        cm(geometry.thickness_top)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Deviation at bottom of wall dx = {:.2} cm",
        cm(geometry.base_deviation)
    )
    .expect("writing to string cannot fail");

    match geometry.base {
        BaseOverlap::Overlap(thickness) => {
            writeln!(
                &mut output,
                "Overcut at bottom of wall t_eff = {:.2} cm",
                cm(geometry.overcut_base)
            )
            .expect("writing to string cannot fail");
            writeln!(
                &mut output,
                "Effective thickness at bottom of wall d_eff = {:.2} cm",
                cm(thickness)
            )
            .expect("writing to string cannot fail");
            writeln!(
                &mut output,
                "Intersected area between two neighbouring piles: {:.2} cm2",
                cm2(geometry.intersection_area)
            )
            .expect("writing to string cannot fail");
        }
        BaseOverlap::NoOverlap => {
            output.push_str("WARNING: PILES DO NOT TOUCH IN BASE OF WALL!\n");
        }
    }

    if let Some(rigidity) = &summary.rigidity {
        writeln!(
            &mut output,
            "Rigidity for E = {:.0} kPa:",
            rigidity.elastic_modulus
        )
        .expect("writing to string cannot fail");
        for (position, section) in [("top", &rigidity.top), ("bottom", &rigidity.base)] {
            writeln!(
                &mut output,
                "  EI at {position} = {:.2} kNm2/m, EA at {position} = {:.2} kN/m",
                section.flexural, section.axial
            )
            .expect("writing to string cannot fail");
        }
    }

    writeln!(
        &mut output,
        "Piles at base of the shaft for a deviation dx = {:.2} cm:",
        cm(geometry.base_deviation)
    )
    .expect("writing to string cannot fail");
    for (caption, layout) in summary.scene.layouts() {
        let written = match layout.min_overlap() {
            Some(overlap) if overlap > 0.0 => writeln!(
                &mut output,
                "  {caption}: smallest overlap {:.2} cm",
                cm(overlap)
            ),
            Some(overlap) => writeln!(
                &mut output,
                "  {caption}: largest gap {:.2} cm",
                cm(-overlap)
            ),
            None => writeln!(&mut output, "  {caption}: single pile"),
        };
        written.expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_check;
    use secantx::WallParameters;

    #[test]
    fn formats_overlapping_wall() {
        let summary = run_check(&WallParameters::default(), 0).expect("check runs");
        let report = render_summary(&summary);
        assert!(report.contains("Wall 1 (Sample project, First issue, rev0)"));
        assert!(report.contains("Overcut at top of wall t = 45.00 cm"));
        assert!(report.contains("Deviation at bottom of wall dx = 18.75 cm"));
        assert!(report.contains("EI at bottom"));
        assert!(!report.contains("WARNING"));
    }

    #[test]
    fn warns_when_piles_separate() {
        let parameters = WallParameters {
            diameter: 1.0,
            spacing: 1.0,
            shaft_length: 50.0,
            verticality: 1.0,
            ..WallParameters::default()
        };
        let summary = run_check(&parameters, 0).expect("check runs");
        let report = render_summary(&summary);
        assert!(report.contains("PILES DO NOT TOUCH IN BASE OF WALL"));
        assert!(!report.contains("d_eff"));
        assert!(!report.contains("EI at"));
    }
}
