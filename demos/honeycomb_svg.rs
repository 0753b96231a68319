use std::f64::consts::TAU;

use hexcomb::HoneycombCircle;
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let center = [50.0, 50.0];
    let radius = 40.0;
    let mut fill = HoneycombCircle::new(10.0, 5.0, 1.0, center, radius)?;
    fill.set_arc_resolution(96)?;

    let root = SVGBackend::new("honeycomb_circle.svg", (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    // Bounding circle
    let rim: Vec<(f64, f64)> = (0..=256)
        .map(|i| {
            let a = TAU * i as f64 / 256.0;
            (center[0] + radius * a.cos(), center[1] + radius * a.sin())
        })
        .collect();
    chart.draw_series(std::iter::once(PathElement::new(rim, BLACK.stroke_width(2))))?;

    // Cells: whole hexagons in blue, rim-clipped cells in red
    for cell in fill.calculate()? {
        let mut poly: Vec<(f64, f64)> = cell.vertices().chunks(2).map(|v| (v[0], v[1])).collect();

        let style = if cell.is_clipped() {
            RED.mix(0.25).filled()
        } else {
            BLUE.mix(0.15).filled()
        };
        chart.draw_series(std::iter::once(Polygon::new(poly.clone(), style)))?;

        poly.push(poly[0]);
        chart.draw_series(std::iter::once(PathElement::new(poly, BLACK.mix(0.5))))?;
    }

    root.present()?;
    println!("Output saved to honeycomb_circle.svg");
    Ok(())
}
