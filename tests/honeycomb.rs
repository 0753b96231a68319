use hexcomb::HexCell;
use hexcomb::HoneycombCircle;

fn reference_fill() -> Vec<HexCell> {
    let fill = HoneycombCircle::new(10.0, 5.0, 1.0, [30.0, 30.0], 30.0).unwrap();
    fill.calculate().unwrap()
}

#[test]
fn test_cell_centers_within_reach() {
    for cell in reference_fill() {
        let c = cell.center();
        let dist = ((c[0] - 30.0).powi(2) + (c[1] - 30.0).powi(2)).sqrt();
        assert!(
            dist <= 30.0 + 10.0 + 1e-9,
            "cell at ({}, {}) is {} away, beyond radius + diameter",
            c[0],
            c[1],
            dist
        );
    }
}

#[test]
fn test_every_cell_overlaps_disk() {
    let cells = reference_fill();
    assert!(!cells.is_empty());

    for cell in &cells {
        assert!(
            cell.area() > 1e-9,
            "cell ({}, {}) has no area",
            cell.col(),
            cell.row()
        );
        // Whole cells are only emitted well inside the circle and clipped
        // cells are trimmed to the disk, so every vertex must be inside.
        for v in cell.vertices().chunks(2) {
            let dist = ((v[0] - 30.0).powi(2) + (v[1] - 30.0).powi(2)).sqrt();
            assert!(
                dist <= 30.0 + 1e-6,
                "vertex ({}, {}) of cell ({}, {}) escapes the disk",
                v[0],
                v[1],
                cell.col(),
                cell.row()
            );
        }
    }
}

#[test]
fn test_total_area_bounded_by_disk() {
    let total: f64 = reference_fill().iter().map(|c| c.area()).sum();
    let disk = std::f64::consts::PI * 30.0 * 30.0;
    assert!(total <= disk + 1e-6, "cells cover {} > disk area {}", total, disk);
    // Honeycomb with 1.0 spacing between 10.0 hexagons still covers most of
    // the disk.
    assert!(total > 0.5 * disk, "cells cover only {} of {}", total, disk);
}

#[test]
fn test_deterministic() {
    let a = reference_fill();
    let b = reference_fill();
    assert_eq!(a, b);

    let fill = HoneycombCircle::new(10.0, 5.0, 1.0, [30.0, 30.0], 30.0).unwrap();
    let lazy: Vec<HexCell> = fill.cells().collect::<hexcomb::Result<_>>().unwrap();
    assert_eq!(a, lazy);
}

#[test]
fn test_thickness_carried_through() {
    for cell in reference_fill() {
        assert_eq!(cell.thickness(), 5.0);
        assert!((cell.volume() - cell.area() * 5.0).abs() < 1e-9);
    }
}

#[test]
fn test_small_circle_still_covered() {
    // Circle radius below the hexagon diameter: the fill must still produce
    // at least one clipped cell covering the circle center. Spacing zero so
    // the center cannot land in the gap between hexagons.
    let fill = HoneycombCircle::new(10.0, 1.0, 0.0, [10.0, 10.0], 4.0).unwrap();
    let cells = fill.calculate().unwrap();
    assert!(!cells.is_empty());

    let covering = cells
        .iter()
        .find(|c| c.contains(10.0, 10.0))
        .expect("some cell must cover the circle center");
    assert!(
        covering.is_clipped(),
        "a hexagon larger than the circle cannot fit unclipped"
    );
}
