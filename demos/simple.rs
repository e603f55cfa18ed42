use secantx::{wall_geometry, BaseOverlap, PileWallInput, WallRigidity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Piles of 1.2 m at 0.75 m spacing, drilled 25 m from a platform 1 m high
    let input = PileWallInput::new(1.2, 0.75, 25.0, 1.0, 0.75);

    // Run the overlap check
    let geometry = wall_geometry(&input)?;
    println!("Deviation at base: {:.1} cm", geometry.base_deviation * 100.0);

    // Rigidity only exists where the piles still touch
    match geometry.base {
        BaseOverlap::Overlap(thickness) => {
            let rigidity = WallRigidity::evaluate(&geometry, 30.0e6)?;
            println!("Effective thickness at base: {:.1} cm", thickness * 100.0);
            println!("EI at base: {:.0} kNm2/m", rigidity.base.flexural);
        }
        BaseOverlap::NoOverlap => println!("Piles do not touch at the base of the wall."),
    }

    // All done
    Ok(())
}
