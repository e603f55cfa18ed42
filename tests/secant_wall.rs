#![warn(clippy::pedantic)]

use proptest::prelude::*;
use secantx::{
    lens_width, orientation_pairs, wall_geometry, BaseOverlap, PileWallInput, PlotInputs,
    RigidityError, WallRigidity,
};

#[derive(Debug, Clone, Copy)]
struct Scenario {
    diameter: f64,
    spacing: f64,
    shaft_length: f64,
    platform_height: f64,
    verticality: f64,
}

impl Scenario {
    fn input(self) -> PileWallInput {
        PileWallInput::new(
            self.diameter,
            self.spacing,
            self.shaft_length,
            self.platform_height,
            self.verticality,
        )
    }
}

const PLUMB_WALL: Scenario = Scenario {
    diameter: 1.2,
    spacing: 0.75,
    shaft_length: 25.0,
    platform_height: 0.0,
    verticality: 0.0,
};

const SEPARATING_WALL: Scenario = Scenario {
    diameter: 1.0,
    spacing: 1.0,
    shaft_length: 50.0,
    platform_height: 0.0,
    verticality: 1.0,
};

#[test]
fn plumb_wall_keeps_full_overlap() {
    let geometry = wall_geometry(&PLUMB_WALL.input()).expect("valid input");

    assert_eq!(geometry.initial_deviation, 0.0);
    assert_eq!(geometry.base_deviation, 0.0);
    assert!((geometry.overcut_top - 0.45).abs() < 1.0e-12);
    assert!((geometry.thickness_top - 2.0 * 0.219_375_f64.sqrt()).abs() < 1.0e-12);
    assert!((geometry.thickness_top - 0.937).abs() < 5.0e-4);
    assert_eq!(geometry.overcut_base, geometry.overcut_top);

    let base = geometry.base.thickness().expect("piles overlap at base");
    assert!((base - geometry.thickness_top).abs() < 1.0e-12);
}

#[test]
fn separating_wall_flags_base_and_refuses_rigidity() {
    let geometry = wall_geometry(&SEPARATING_WALL.input()).expect("valid input");

    assert!((geometry.base_deviation - 0.5).abs() < 1.0e-12);
    assert!(geometry.overcut_base <= 0.0);
    assert_eq!(geometry.base, BaseOverlap::NoOverlap);
    assert_eq!(geometry.base.thickness(), None);
    assert_eq!(
        WallRigidity::evaluate(&geometry, 30.0e6),
        Err(RigidityError::NoBaseOverlap)
    );
}

#[test]
fn zero_overcut_gives_zero_thickness() {
    let geometry =
        wall_geometry(&PileWallInput::new(0.8, 0.8, 10.0, 0.0, 0.0)).expect("valid input");
    assert_eq!(geometry.thickness_top, 0.0);
    assert_eq!(geometry.intersection_area, 0.0);
    assert_eq!(geometry.base, BaseOverlap::NoOverlap);
}

#[test]
fn verticality_is_percent_of_drilled_length() {
    // 1 % over a 10 m platform and a 20 m shaft.
    let geometry =
        wall_geometry(&PileWallInput::new(1.2, 0.8, 20.0, 10.0, 1.0)).expect("valid input");
    assert!((geometry.initial_deviation - 0.10).abs() < 1.0e-12);
    assert!((geometry.base_deviation - 0.30).abs() < 1.0e-12);
    assert!((geometry.overcut_base - 0.10).abs() < 1.0e-12);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let input = PileWallInput::new(0.88, 0.65, 17.5, 1.5, 0.65);
    let first = wall_geometry(&input).expect("valid input");
    let second = wall_geometry(&input).expect("valid input");
    assert_eq!(first, second);
    assert_eq!(
        first.overcut_base.to_bits(),
        second.overcut_base.to_bits()
    );
}

#[test]
fn rigidity_follows_effective_thickness() {
    let geometry = wall_geometry(&PLUMB_WALL.input()).expect("valid input");
    let rigidity = WallRigidity::evaluate(&geometry, 30.0e6).expect("piles overlap");
    let d = geometry.thickness_top;

    assert!((rigidity.top.axial - 30.0e6 * d).abs() < 1.0e-3);
    assert!((rigidity.top.flexural - 30.0e6 * d.powi(3) / 12.0).abs() < 1.0e-3);
    assert!((rigidity.base.axial - rigidity.top.axial).abs() < 1.0e-3);
}

#[test]
fn plot_inputs_come_from_geometry() {
    let geometry =
        wall_geometry(&PileWallInput::new(1.2, 0.75, 25.0, 2.0, 0.5)).expect("valid input");
    let inputs = PlotInputs::from(&geometry);
    assert_eq!(inputs.initial_deviation, geometry.initial_deviation);
    assert_eq!(inputs.base_deviation, geometry.base_deviation);

    let pairs = orientation_pairs(&inputs);
    let inward = pairs[0].layout.contacts()[0];
    let expected = inputs.spacing - 2.0 * inputs.base_deviation;
    assert!((inward.center_distance - expected).abs() < 1.0e-12);
}

proptest! {
    #[test]
    fn more_deviation_never_thickens_the_base(
        diameter in 0.3f64..5.0,
        spacing_fraction in 0.0f64..1.0,
        shaft_length in 1.0f64..150.0,
        platform_height in 0.0f64..20.0,
        verticality in 0.0f64..1.9,
        extra in 0.01f64..0.1,
    ) {
        let spacing = diameter * spacing_fraction;
        let lower = wall_geometry(&PileWallInput::new(
            diameter, spacing, shaft_length, platform_height, verticality,
        ))
        .expect("valid input");
        let higher = wall_geometry(&PileWallInput::new(
            diameter, spacing, shaft_length, platform_height, verticality + extra,
        ))
        .expect("valid input");

        prop_assert!(higher.overcut_base < lower.overcut_base);
        if let (Some(thin), Some(thick)) = (higher.base.thickness(), lower.base.thickness()) {
            prop_assert!(thin <= thick + 1.0e-12);
        }
        if !lower.base.is_overlapping() {
            prop_assert!(!higher.base.is_overlapping());
        }
    }

    #[test]
    fn top_thickness_never_exceeds_diameter(
        diameter in 0.3f64..5.0,
        spacing in 0.0f64..5.0,
    ) {
        let width = lens_width(diameter, spacing);
        prop_assert!(width >= 0.0);
        prop_assert!(width <= diameter + 1.0e-12);
    }
}
