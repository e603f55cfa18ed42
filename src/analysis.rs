use secantx::{
    scene, wall_geometry, BaseOverlap, InputError, PlotInputs, RigidityError, Scene,
    WallGeometry, WallParameters, WallRigidity,
};
use thiserror::Error;

/// Failure of a complete wall check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Returned when the geometry inputs are rejected.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Returned when the overlapped section cannot carry stiffness.
    #[error(transparent)]
    Rigidity(#[from] RigidityError),
}

/// Everything the report and the plots need for one wall.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSummary {
    /// Form values the check ran with.
    pub parameters: WallParameters,
    /// Overlap geometry at top and base.
    pub geometry: WallGeometry,
    /// Rigidity at top and base, present only when the piles touch at the base.
    pub rigidity: Option<WallRigidity>,
    /// Plot inputs of the selected visualization.
    pub scene: Scene,
}

/// Run the overlap check, evaluate the rigidity when the base overlap exists
/// and derive the plot inputs.
///
/// The overlap follows the circle intersection described at
/// <https://mathworld.wolfram.com/Circle-CircleIntersection.html>.
pub fn run_check(parameters: &WallParameters, seed: u64) -> Result<CheckSummary, CheckError> {
    parameters.validate()?;
    let geometry = wall_geometry(&parameters.geometry_input())?;

    // Stiffness only exists where concrete is continuous across the joint.
    let rigidity = match geometry.base {
        BaseOverlap::Overlap(_) => Some(WallRigidity::evaluate(
            &geometry,
            parameters.elastic_modulus,
        )?),
        BaseOverlap::NoOverlap => None,
    };

    let scene = scene(&PlotInputs::from(&geometry), parameters.plot_mode(seed));

    Ok(CheckSummary {
        parameters: parameters.clone(),
        geometry,
        rigidity,
        scene,
    })
}
