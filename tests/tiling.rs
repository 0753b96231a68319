use hexcomb::HexLattice;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_point_count_matches_grid() {
    // Fixed seed so failures are reproducible.
    let mut rng = StdRng::seed_from_u64(123456789);

    for _ in 0..50 {
        let hex_diameter = rng.gen_range(0.5..20.0);
        let spacing = rng.gen_range(0.0..5.0);
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let origin = [rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)];

        let lattice = HexLattice::new(origin, hex_diameter, spacing, rows, cols).unwrap();
        let points: Vec<[f64; 2]> = lattice.positions().collect();
        assert_eq!(
            points.len(),
            rows * cols,
            "lattice {}x{} should yield {} points",
            rows,
            cols,
            rows * cols
        );
        assert_eq!(lattice.positions().len(), rows * cols);
    }
}

#[test]
fn test_same_column_spacing() {
    let lattice = HexLattice::new([5.0, -3.0], 12.0, 0.8, 6, 4).unwrap();
    let points: Vec<[f64; 2]> = lattice.positions().collect();

    for col in 0..lattice.cols() {
        for row in 1..lattice.rows() {
            let prev = points[col * lattice.rows() + row - 1];
            let cur = points[col * lattice.rows() + row];
            assert!((cur[0] - prev[0]).abs() < 1e-12, "x must be constant within a column");
            assert!(
                (cur[1] - prev[1] - lattice.row_spacing()).abs() < 1e-12,
                "consecutive rows must differ by exactly the row spacing"
            );
        }
    }
}

#[test]
fn test_odd_column_offset() {
    let lattice = HexLattice::new([0.0, 0.0], 9.0, 1.5, 3, 6).unwrap();

    for col in (1..lattice.cols()).step_by(2) {
        let even = lattice.position(col - 1, 0);
        let odd = lattice.position(col, 0);
        assert!(
            (odd[0] - even[0] - lattice.col_spacing() / 2.0).abs() < 1e-12,
            "odd column {} must sit half a column spacing to the right",
            col
        );
        assert!(
            (odd[1] - even[1] - lattice.row_spacing() / 2.0).abs() < 1e-12,
            "odd column {} must sit half a row spacing up",
            col
        );
    }

    // Two even columns apart: a full column spacing, no vertical shift.
    let a = lattice.position(0, 0);
    let b = lattice.position(2, 0);
    assert!((b[0] - a[0] - lattice.col_spacing()).abs() < 1e-12);
    assert!((b[1] - a[1]).abs() < 1e-12);
}

#[test]
fn test_reference_dimensions() {
    // diameter 10, spacing 1: row spacing = sqrt(3) * 5 + 1,
    // column spacing = 10 + 2 * sec(30 deg) + 5.
    let lattice = HexLattice::new([0.0, 0.0], 10.0, 1.0, 2, 2).unwrap();

    assert!((lattice.row_spacing() - 9.660254037844387).abs() < 1e-12);
    assert!((lattice.col_spacing() - 17.309401076758503).abs() < 1e-12);

    let points: Vec<[f64; 2]> = lattice.positions().collect();
    assert_eq!(points.len(), 4);
    assert_eq!(points[0], [0.0, 0.0]);
    let odd = points[2];
    assert!((odd[0] - lattice.col_spacing() / 2.0).abs() < 1e-12);
    assert!((odd[1] - lattice.row_spacing() / 2.0).abs() < 1e-12);
}
