#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod errors;
pub mod geometry;
pub mod parameters;
pub mod rigidity;
pub mod snapshot;
pub mod visualization;

pub use errors::{Field, InputError, RigidityError, SnapshotError};
pub use geometry::{
    lens_area, lens_width, lens_width_from_overcut, wall_geometry, BaseOverlap, PileWallInput,
    WallGeometry,
};
pub use parameters::{PlotOption, ProjectInfo, WallParameters};
pub use rigidity::{rectangle_moment_of_inertia, SectionRigidity, WallRigidity};
pub use snapshot::{
    load_snapshot, load_snapshot_file, save_snapshot, save_snapshot_file, DEFAULT_FILE_NAME,
    FORM_NAME,
};
pub use visualization::{
    orientation_pairs, random_layout, scene, NeighbourContact, Orientation, PairView, PileLayout,
    PileTrace, PlotInputs, PlotMode, Scene,
};
