use nalgebra::{Point2, Point3};
use secantx::{PileLayout, Scene};
use std::fmt::Write;

/// Height of a drawing panel in pixels, caption excluded.
const PANEL_HEIGHT: f64 = 320.0;
/// Widest a single panel may grow, in pixels.
const MAX_PANEL_WIDTH: f64 = 1600.0;
/// Space around the drawing inside a panel.
const PADDING: f64 = 30.0;
/// Space reserved above the panels for the title.
const TITLE_HEIGHT: f64 = 30.0;
/// Points per pile outline in the shaft view.
const RING_SEGMENTS: usize = 48;

/// Axis-aligned extent of a drawing in world units.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    /// Lower-left corner.
    min: Point2<f64>,
    /// Upper-right corner.
    max: Point2<f64>,
}

impl Bounds {
    /// Bounds containing nothing.
    fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Grow to contain a disc of `radius` around `point`.
    fn include(&mut self, point: Point2<f64>, radius: f64) {
        self.min.x = self.min.x.min(point.x - radius);
        self.min.y = self.min.y.min(point.y - radius);
        self.max.x = self.max.x.max(point.x + radius);
        self.max.y = self.max.y.max(point.y + radius);
    }

    /// Horizontal extent, never zero.
    fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(1.0e-3)
    }

    /// Vertical extent, never zero.
    fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(1.0e-3)
    }

    /// Largest scale at which the bounds fit a panel.
    fn fit_scale(&self) -> f64 {
        ((PANEL_HEIGHT - 2.0 * PADDING) / self.height())
            .min((MAX_PANEL_WIDTH - 2.0 * PADDING) / self.width())
    }
}

/// Placement of one panel in the picture.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// World extent shown in the panel.
    bounds: Bounds,
    /// Pixels per world unit.
    scale: f64,
    /// Left edge of the panel in pixels.
    left: f64,
}

impl Frame {
    /// Width of the panel in pixels.
    fn width(&self) -> f64 {
        self.bounds.width() * self.scale + 2.0 * PADDING
    }

    /// Pixel coordinates of a world point; world y points up.
    fn to_px(&self, point: Point2<f64>) -> (f64, f64) {
        (
            self.left + PADDING + (point.x - self.bounds.min.x) * self.scale,
            TITLE_HEIGHT + PADDING + (self.bounds.max.y - point.y) * self.scale,
        )
    }
}

/// Lay panels out left to right. With `shared_scale` every panel uses the
/// smallest fitting scale so sizes compare across panels.
fn frames(bounds: &[Bounds], shared_scale: bool) -> Vec<Frame> {
    let common = bounds
        .iter()
        .map(Bounds::fit_scale)
        .fold(f64::INFINITY, f64::min);
    let mut left = 0.0;
    bounds
        .iter()
        .map(|bounds| {
            let scale = if shared_scale {
                common
            } else {
                bounds.fit_scale()
            };
            let frame = Frame {
                bounds: *bounds,
                scale,
                left,
            };
            left += frame.width();
            frame
        })
        .collect()
}

/// Replace the characters XML reserves.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Open the document and write the title.
fn header(output: &mut String, frames: &[Frame], title: &str) {
    let width = frames
        .iter()
        .map(Frame::width)
        .sum::<f64>()
        .max(PANEL_HEIGHT);
    let height = PANEL_HEIGHT + TITLE_HEIGHT;
    writeln!(
        output,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" \
         viewBox=\"0 0 {width:.0} {height:.0}\">"
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n\
         <text x=\"10\" y=\"20\" font-family=\"sans-serif\" font-size=\"14\">{}</text>",
        escape(title)
    )
    .expect("writing to string cannot fail");
}

/// Write the caption of a panel.
fn caption(output: &mut String, frame: &Frame, text: &str) {
    writeln!(
        output,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"12\" \
         fill=\"#555\">{}</text>",
        frame.left + PADDING,
        TITLE_HEIGHT + 12.0,
        escape(text)
    )
    .expect("writing to string cannot fail");
}

/// Cross-section of every layout of `scene` at the base of the wall.
///
/// Design positions are dashed, deviated piles are solid, and pairs of
/// neighbours that no longer touch are joined by a red line.
#[must_use]
pub fn render_cross_section(scene: &Scene, wall_name: &str) -> String {
    let layouts = scene.layouts();
    let bounds: Vec<Bounds> = layouts
        .iter()
        .map(|(_, layout)| {
            let mut bounds = Bounds::empty();
            for pile in &layout.piles {
                bounds.include(pile.nominal, pile.radius);
                bounds.include(pile.base, pile.radius);
            }
            bounds
        })
        .collect();
    let frames = frames(&bounds, true);

    let mut output = String::new();
    header(
        &mut output,
        &frames,
        &format!("{wall_name}: piles at base of the shaft"),
    );
    for ((label, layout), frame) in layouts.iter().zip(&frames) {
        caption(&mut output, frame, label);
        draw_base_section(&mut output, frame, layout);
    }
    output.push_str("</svg>\n");
    output
}

/// Draw nominal and deviated outlines and the gaps of one layout.
fn draw_base_section(output: &mut String, frame: &Frame, layout: &PileLayout) {
    for pile in &layout.piles {
        let radius = pile.radius * frame.scale;
        let (nx, ny) = frame.to_px(pile.nominal);
        writeln!(
            output,
            "<circle cx=\"{nx:.2}\" cy=\"{ny:.2}\" r=\"{radius:.2}\" fill=\"none\" \
             stroke=\"#999\" stroke-dasharray=\"4 3\"/>"
        )
        .expect("writing to string cannot fail");
        let (bx, by) = frame.to_px(pile.base);
        writeln!(
            output,
            "<circle cx=\"{bx:.2}\" cy=\"{by:.2}\" r=\"{radius:.2}\" fill=\"#1f4e79\" \
             fill-opacity=\"0.25\" stroke=\"#1f4e79\"/>"
        )
        .expect("writing to string cannot fail");
    }
    for contact in layout.contacts().iter().filter(|contact| !contact.touching()) {
        let (x1, y1) = frame.to_px(layout.piles[contact.first].base);
        let (x2, y2) = frame.to_px(layout.piles[contact.second].base);
        writeln!(
            output,
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" \
             stroke=\"#c00\" stroke-width=\"1.5\"/>"
        )
        .expect("writing to string cannot fail");
    }
}

/// Isometric projection with the z axis pointing up the page.
fn project(point: Point3<f64>) -> Point2<f64> {
    let tilt: f64 = 0.6;
    let turn: f64 = 0.8;
    let rx = point.x * turn.cos() - point.y * turn.sin();
    let ry = point.x * turn.sin() + point.y * turn.cos();
    Point2::new(rx, ry * tilt.sin() + point.z * tilt.cos())
}

/// Projected polylines of one layout: rings at top and base, shaft axes and
/// two generators per pile.
fn shaft_polylines(layout: &PileLayout) -> Vec<Vec<Point2<f64>>> {
    let mut lines = Vec::new();
    for pile in &layout.piles {
        let top = pile.ring_at_depth(0.0, RING_SEGMENTS);
        let base = pile.ring_at_depth(pile.length, RING_SEGMENTS);
        for index in [0, RING_SEGMENTS / 2] {
            lines.push(vec![project(top[index]), project(base[index])]);
        }
        let mut close = |ring: &[Point3<f64>]| {
            let mut line: Vec<_> = ring.iter().copied().map(project).collect();
            if let Some(first) = line.first().copied() {
                line.push(first);
            }
            lines.push(line);
        };
        close(&top);
        close(&base);
        lines.push(pile.shaft_axis().into_iter().map(project).collect());
    }
    lines
}

/// Isometric view of the pile shafts of every layout of `scene`.
#[must_use]
pub fn render_shafts(scene: &Scene, wall_name: &str) -> String {
    let layouts = scene.layouts();
    let polylines: Vec<_> = layouts
        .iter()
        .map(|(_, layout)| shaft_polylines(layout))
        .collect();
    let bounds: Vec<Bounds> = polylines
        .iter()
        .map(|lines| {
            let mut bounds = Bounds::empty();
            for point in lines.iter().flatten() {
                bounds.include(*point, 0.0);
            }
            bounds
        })
        .collect();
    let frames = frames(&bounds, false);

    let mut output = String::new();
    header(
        &mut output,
        &frames,
        &format!("{wall_name}: pile shafts"),
    );
    for (((label, _), lines), frame) in layouts.iter().zip(&polylines).zip(&frames) {
        caption(&mut output, frame, label);
        for line in lines {
            let points: Vec<String> = line
                .iter()
                .map(|point| {
                    let (x, y) = frame.to_px(*point);
                    format!("{x:.2},{y:.2}")
                })
                .collect();
            writeln!(
                output,
                "<polyline points=\"{}\" fill=\"none\" stroke=\"#1f4e79\" stroke-width=\"0.8\"/>",
                points.join(" ")
            )
            .expect("writing to string cannot fail");
        }
    }
    output.push_str("</svg>\n");
    output
}
