use secantx::{random_layout, wall_geometry, PileWallInput, PlotInputs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let geometry = wall_geometry(&PileWallInput::new(0.9, 0.7, 30.0, 0.0, 1.0))?;
    let layout = random_layout(&PlotInputs::from(&geometry), 12, 2024);

    for contact in layout.contacts() {
        let state = if contact.touching() { "overlap" } else { "gap" };
        println!(
            "piles {}-{}: {} {:.1} cm",
            contact.first,
            contact.second,
            state,
            contact.overlap.abs() * 100.0
        );
    }

    Ok(())
}
