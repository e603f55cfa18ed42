//! Plot inputs for pile cross-sections and shafts.
//!
//! Nothing here draws. The functions place every pile of a layout at the top
//! and at the base of the wall so a renderer can show how drilling deviation
//! moves neighbouring piles relative to each other. Pile tops sit at `z = 0`
//! and bases at `z = -L`; the wall runs along the x axis.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::{Point2, Point3, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::geometry::WallGeometry;

/// Geometric values a pile plot is parameterised by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotInputs {
    /// Centre-to-centre spacing `a` in metres.
    pub spacing: f64,
    /// Pile diameter `D` in metres.
    pub diameter: f64,
    /// Deviation at the top of the pile `x0` in metres.
    pub initial_deviation: f64,
    /// Deviation at the base of the pile `x` in metres.
    pub base_deviation: f64,
    /// Shaft length `L` in metres.
    pub shaft_length: f64,
}

impl From<&WallGeometry> for PlotInputs {
    fn from(geometry: &WallGeometry) -> Self {
        Self {
            spacing: geometry.input.spacing,
            diameter: geometry.input.diameter,
            initial_deviation: geometry.initial_deviation,
            base_deviation: geometry.base_deviation,
            shaft_length: geometry.input.shaft_length,
        }
    }
}

/// Position of one deviated pile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PileTrace {
    /// Design position of the pile centre.
    pub nominal: Point2<f64>,
    /// Unit direction of the drilling deviation.
    pub direction: Vector2<f64>,
    /// Pile centre at the top of the wall.
    pub top: Point2<f64>,
    /// Pile centre at the base of the wall.
    pub base: Point2<f64>,
    /// Pile radius.
    pub radius: f64,
    /// Shaft length.
    pub length: f64,
}

impl PileTrace {
    /// Place a pile deviating along `azimuth` radians from the x axis.
    #[must_use]
    pub fn new(nominal: Point2<f64>, azimuth: f64, inputs: &PlotInputs) -> Self {
        let direction = Vector2::new(azimuth.cos(), azimuth.sin());
        Self {
            nominal,
            direction,
            top: nominal + direction * inputs.initial_deviation,
            base: nominal + direction * inputs.base_deviation,
            radius: inputs.diameter / 2.0,
            length: inputs.shaft_length,
        }
    }

    /// Centre line of the shaft, top first.
    #[must_use]
    pub fn shaft_axis(&self) -> [Point3<f64>; 2] {
        [
            Point3::new(self.top.x, self.top.y, 0.0),
            Point3::new(self.base.x, self.base.y, -self.length),
        ]
    }

    /// Pile centre at `depth` metres below the top, clamped to the shaft.
    #[must_use]
    pub fn center_at_depth(&self, depth: f64) -> Point2<f64> {
        if depth <= 0.0 || self.length <= 0.0 {
            return self.top;
        }
        if depth >= self.length {
            return self.base;
        }
        self.top + (self.base - self.top) * (depth / self.length)
    }

    /// Outline of the shaft at `depth` as `segments` points on a circle.
    #[must_use]
    pub fn ring_at_depth(&self, depth: f64, segments: usize) -> Vec<Point3<f64>> {
        let center = self.center_at_depth(depth);
        let z = -depth.clamp(0.0, self.length.max(0.0));
        (0..segments)
            .map(|i| {
                let angle = TAU * i as f64 / segments as f64;
                Point3::new(
                    center.x + self.radius * angle.cos(),
                    center.y + self.radius * angle.sin(),
                    z,
                )
            })
            .collect()
    }
}

/// Contact between two neighbouring piles at the base of the wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighbourContact {
    /// Index of the first pile.
    pub first: usize,
    /// Index of the second pile.
    pub second: usize,
    /// Distance between the pile centres at the base.
    pub center_distance: f64,
    /// `D` minus the centre distance. Negative values are gaps.
    pub overlap: f64,
}

impl NeighbourContact {
    /// Whether the two piles still intersect.
    #[must_use]
    pub fn touching(&self) -> bool {
        self.overlap > 0.0
    }
}

/// A row of piles in the order they are placed along the wall.
#[derive(Clone, Debug, PartialEq)]
pub struct PileLayout {
    /// Piles of the row.
    pub piles: Vec<PileTrace>,
}

impl PileLayout {
    /// Base contact of every pair of consecutive piles.
    #[must_use]
    pub fn contacts(&self) -> Vec<NeighbourContact> {
        self.piles
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                let center_distance = (pair[1].base - pair[0].base).norm();
                NeighbourContact {
                    first: index,
                    second: index + 1,
                    center_distance,
                    overlap: pair[0].radius + pair[1].radius - center_distance,
                }
            })
            .collect()
    }

    /// Smallest base overlap along the row.
    #[must_use]
    pub fn min_overlap(&self) -> Option<f64> {
        self.contacts()
            .into_iter()
            .map(|contact| contact.overlap)
            .reduce(f64::min)
    }
}

/// Relative direction in which two neighbouring piles deviate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Both piles deviate in the wall plane towards each other.
    InPlaneInward,
    /// Both piles deviate in the wall plane away from each other.
    InPlaneOutward,
    /// The piles deviate out of the wall plane in opposite directions.
    OutOfPlane,
}

impl Orientation {
    /// The three orientations in plotting order.
    pub const ALL: [Orientation; 3] = [
        Orientation::InPlaneInward,
        Orientation::InPlaneOutward,
        Orientation::OutOfPlane,
    ];

    /// Caption of the orientation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Orientation::InPlaneInward => "in-plane inward",
            Orientation::InPlaneOutward => "in-plane outward",
            Orientation::OutOfPlane => "out-of-plane opposite",
        }
    }

    /// Deviation azimuths of the left and right pile.
    fn azimuths(self) -> [f64; 2] {
        match self {
            Orientation::InPlaneInward => [0.0, PI],
            Orientation::InPlaneOutward => [PI, 0.0],
            Orientation::OutOfPlane => [FRAC_PI_2, -FRAC_PI_2],
        }
    }
}

/// Two neighbouring piles deviating in one orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct PairView {
    /// How the piles deviate.
    pub orientation: Orientation,
    /// Left pile at the origin, right pile at `(a, 0)`.
    pub layout: PileLayout,
}

/// Which layout to derive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotMode {
    /// Two piles in the three [`Orientation`]s.
    TwoPilesApart,
    /// `count` piles with random deviation directions drawn from `seed`.
    RandomDeviations {
        /// Number of piles in the row.
        count: usize,
        /// Seed of the direction generator.
        seed: u64,
    },
}

/// Plot inputs for one visualization mode.
#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
    /// Comparison of the three orientations.
    Pairs(Vec<PairView>),
    /// Random row of piles.
    Row(PileLayout),
}

impl Scene {
    /// Every layout of the scene with a caption.
    #[must_use]
    pub fn layouts(&self) -> Vec<(&'static str, &PileLayout)> {
        match self {
            Scene::Pairs(pairs) => pairs
                .iter()
                .map(|pair| (pair.orientation.label(), &pair.layout))
                .collect(),
            Scene::Row(layout) => vec![("random orientations", layout)],
        }
    }
}

/// Two neighbouring piles in each of the three orientations.
///
/// # Examples
/// ```
/// use secantx::{orientation_pairs, PlotInputs};
///
/// let inputs = PlotInputs {
///     spacing: 0.75,
///     diameter: 1.2,
///     initial_deviation: 0.0,
///     base_deviation: 0.1,
///     shaft_length: 20.0,
/// };
/// let pairs = orientation_pairs(&inputs);
/// let outward = pairs[1].layout.contacts()[0];
/// assert!((outward.center_distance - 0.95).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn orientation_pairs(inputs: &PlotInputs) -> Vec<PairView> {
    Orientation::ALL
        .into_iter()
        .map(|orientation| {
            let [left, right] = orientation.azimuths();
            PairView {
                orientation,
                layout: PileLayout {
                    piles: vec![
                        PileTrace::new(Point2::origin(), left, inputs),
                        PileTrace::new(Point2::new(inputs.spacing, 0.0), right, inputs),
                    ],
                },
            }
        })
        .collect()
}

/// A row of `count` piles, each deviating in a direction drawn uniformly from
/// a generator seeded with `seed`.
#[must_use]
pub fn random_layout(inputs: &PlotInputs, count: usize, seed: u64) -> PileLayout {
    let mut rng = StdRng::seed_from_u64(seed);
    let piles = (0..count)
        .map(|index| {
            let azimuth = rng.gen_range(0.0..TAU);
            PileTrace::new(
                Point2::new(index as f64 * inputs.spacing, 0.0),
                azimuth,
                inputs,
            )
        })
        .collect();
    debug!(count, seed, "sampled random pile deviations");
    PileLayout { piles }
}

/// Derive the plot inputs for `mode`.
#[must_use]
pub fn scene(inputs: &PlotInputs, mode: PlotMode) -> Scene {
    match mode {
        PlotMode::TwoPilesApart => Scene::Pairs(orientation_pairs(inputs)),
        PlotMode::RandomDeviations { count, seed } => {
            Scene::Row(random_layout(inputs, count, seed))
        }
    }
}
