use std::f64::consts::FRAC_PI_3;

/// A single honeycomb cell: a regular hexagon, possibly trimmed by the
/// bounding circle of a fill.
///
/// Cells are created on demand by [`crate::HoneycombCircle`] and meant to be
/// consumed immediately, typically as cutting tools in a CSG boolean
/// operation. The `thickness` carries the extrusion height the consumer
/// should apply; the cell geometry itself stays 2D.
#[derive(Clone, Debug, PartialEq)]
pub struct HexCell {
    pub(crate) col: usize,
    pub(crate) row: usize,
    pub(crate) center: [f64; 2],
    // Flat array of vertices [x, y, x, y, ...], counter-clockwise.
    pub(crate) vertices: Vec<f64>,
    pub(crate) thickness: f64,
    pub(crate) clipped: bool,
}

impl HexCell {
    /// Lattice column this cell was generated from.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Lattice row this cell was generated from.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Center of the hexagon the cell was built from. For clipped cells this
    /// is still the lattice position, not the centroid of the remaining area.
    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    /// Polygon boundary as a flat `[x, y, x, y, ...]` array, counter-clockwise.
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    /// Extrusion height the consumer should apply to the polygon.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Whether the bounding circle trimmed this cell.
    pub fn is_clipped(&self) -> bool {
        self.clipped
    }

    /// Polygon area via the shoelace formula.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len() / 2;
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let xi = self.vertices[i * 2];
            let yi = self.vertices[i * 2 + 1];
            let xj = self.vertices[j * 2];
            let yj = self.vertices[j * 2 + 1];
            area += xi * yj - xj * yi;
        }
        (area * 0.5).abs()
    }

    /// Volume of the extruded cell, `area * thickness`.
    pub fn volume(&self) -> f64 {
        self.area() * self.thickness
    }

    /// Area centroid of the polygon.
    pub fn centroid(&self) -> [f64; 2] {
        let n = self.vertices.len() / 2;
        if n < 3 {
            return self.center;
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut area = 0.0;

        for i in 0..n {
            let j = (i + 1) % n;
            let xi = self.vertices[i * 2];
            let yi = self.vertices[i * 2 + 1];
            let xj = self.vertices[j * 2];
            let yj = self.vertices[j * 2 + 1];

            let cross = xi * yj - xj * yi;
            area += cross;
            cx += (xi + xj) * cross;
            cy += (yi + yj) * cross;
        }

        if area.abs() < 1e-9 {
            return self.center;
        }

        let factor = 1.0 / (3.0 * area);
        [cx * factor, cy * factor]
    }

    /// Whether the point lies inside the (convex, counter-clockwise) polygon.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.vertices.len() / 2;
        if n < 3 {
            return false;
        }

        for i in 0..n {
            let j = (i + 1) % n;
            let xi = self.vertices[i * 2];
            let yi = self.vertices[i * 2 + 1];
            let xj = self.vertices[j * 2];
            let yj = self.vertices[j * 2 + 1];
            if (xj - xi) * (y - yi) - (yj - yi) * (x - xi) < -1e-9 {
                return false;
            }
        }
        true
    }
}

/// Vertices of a regular flat-top hexagon as a flat `[x, y, ...]` array,
/// counter-clockwise. `diameter` is measured vertex to vertex, so the
/// circumradius is `diameter / 2` and vertices sit at angles `k * 60`
/// degrees, with flat edges at top and bottom. The vertical flat-to-flat
/// height is `sqrt(3) * diameter / 2`, which is what the lattice row spacing
/// is built on.
pub(crate) fn hexagon_vertices(center: [f64; 2], diameter: f64) -> Vec<f64> {
    let circumradius = diameter / 2.0;
    let mut vertices = Vec::with_capacity(12);
    for k in 0..6 {
        let angle = k as f64 * FRAC_PI_3;
        vertices.push(center[0] + circumradius * angle.cos());
        vertices.push(center[1] + circumradius * angle.sin());
    }
    vertices
}
