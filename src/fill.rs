use rayon::prelude::*;

use crate::cell::HexCell;
use crate::cell::hexagon_vertices;
use crate::clip::clip_polygon_to_disk;
use crate::error::HexcombError;
use crate::error::Result;
use crate::lattice::HexLattice;

/// Default number of arc segments per full turn used when clipping boundary
/// cells against the circle.
pub const DEFAULT_ARC_RESOLUTION: usize = 24;

/// A circular region filled with tiled hexagons, including the partial
/// hexagons that straddle the circle boundary.
///
/// Each lattice position is classified by its squared distance from the
/// circle center: positions out of reach are skipped, positions close to the
/// rim are intersected with the bounding disk, and positions safely inside
/// yield the whole hexagon. Only the middle class pays for the geometric
/// intersection.
#[derive(Clone, Debug, PartialEq)]
pub struct HoneycombCircle {
    hex_diameter: f64,
    hex_thickness: f64,
    hex_spacing: f64,
    center: [f64; 2],
    radius: f64,
    arc_resolution: usize,
    lattice: HexLattice,
}

impl HoneycombCircle {
    /// Creates a honeycomb fill of the disk at `center` with the given
    /// `radius`. `hex_diameter` is vertex to vertex, `hex_spacing` is the gap
    /// between neighboring hexagon edges and `hex_thickness` is the extrusion
    /// height carried on every emitted cell.
    pub fn new(
        hex_diameter: f64,
        hex_thickness: f64,
        hex_spacing: f64,
        center: [f64; 2],
        radius: f64,
    ) -> Result<HoneycombCircle> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(HexcombError::InvalidParameter {
                name: "radius",
                value: radius,
                reason: "must be a positive finite number",
            });
        }
        if hex_thickness <= 0.0 || !hex_thickness.is_finite() {
            return Err(HexcombError::InvalidParameter {
                name: "hex_thickness",
                value: hex_thickness,
                reason: "must be a positive finite number",
            });
        }
        let lattice = covering_lattice(hex_diameter, hex_spacing, center, radius)?;
        Ok(HoneycombCircle {
            hex_diameter,
            hex_thickness,
            hex_spacing,
            center,
            radius,
            arc_resolution: DEFAULT_ARC_RESOLUTION,
            lattice,
        })
    }

    pub fn hex_diameter(&self) -> f64 {
        self.hex_diameter
    }

    pub fn hex_thickness(&self) -> f64 {
        self.hex_thickness
    }

    pub fn hex_spacing(&self) -> f64 {
        self.hex_spacing
    }

    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The lattice the fill draws candidate positions from. It over-covers
    /// the circle so that every position within reach of the disk exists.
    pub fn lattice(&self) -> &HexLattice {
        &self.lattice
    }

    pub fn arc_resolution(&self) -> usize {
        self.arc_resolution
    }

    /// Sets the number of arc segments per full turn used for clipped cells.
    pub fn set_arc_resolution(&mut self, segments: usize) -> Result<()> {
        if segments < 3 {
            return Err(HexcombError::InvalidParameter {
                name: "arc_resolution",
                value: segments as f64,
                reason: "must be at least 3 segments per turn",
            });
        }
        self.arc_resolution = segments;
        Ok(())
    }

    /// Lazy iterator over the cells of the fill, in lattice column-major
    /// order. Deterministic: identical fills yield identical sequences.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            fill: self,
            index: 0,
        }
    }

    /// Computes all cells at once, classifying and clipping lattice positions
    /// in parallel. The result matches `self.cells()` in content and order.
    pub fn calculate(&self) -> Result<Vec<HexCell>> {
        let rows = self.lattice.rows();
        let cells: Vec<Option<HexCell>> = (0..self.lattice.count())
            .into_par_iter()
            .map(|index| self.build_cell(index / rows, index % rows))
            .collect::<Result<_>>()?;
        Ok(cells.into_iter().flatten().collect())
    }

    /// Classifies the lattice position at (`col`, `row`). `Ok(None)` means
    /// the position is out of reach of the disk and yields no cell.
    fn build_cell(&self, col: usize, row: usize) -> Result<Option<HexCell>> {
        let cell_center = self.lattice.position(col, row);
        let dx = cell_center[0] - self.center[0];
        let dy = cell_center[1] - self.center[1];
        let dist_sq = dx * dx + dy * dy;

        let outer = self.radius + self.hex_diameter;
        if dist_sq > outer * outer {
            return Ok(None);
        }

        let hexagon = hexagon_vertices(cell_center, self.hex_diameter);

        // The inner threshold loses its sign when squared; clamp at zero so
        // circles smaller than the hexagon diameter send every cell through
        // the clipper.
        let inner = (self.radius - self.hex_diameter).max(0.0);
        if dist_sq >= inner * inner {
            let clipped =
                clip_polygon_to_disk(&hexagon, self.center, self.radius, self.arc_resolution)?;
            if clipped.len() < 6 {
                // Within reach, but the actual overlap is empty.
                return Ok(None);
            }
            let was_trimmed = clipped != hexagon;
            return Ok(Some(HexCell {
                col,
                row,
                center: cell_center,
                vertices: clipped,
                thickness: self.hex_thickness,
                clipped: was_trimmed,
            }));
        }

        Ok(Some(HexCell {
            col,
            row,
            center: cell_center,
            vertices: hexagon,
            thickness: self.hex_thickness,
            clipped: false,
        }))
    }
}

/// Lattice sized to over-cover the circle.
///
/// The lattice origin sits at `center - (radius, radius)`. Column x advances
/// by exactly half a column spacing per column and row y by one row spacing
/// per row, so spanning `2 * radius + hex_diameter` from the origin reaches
/// every position within `radius + hex_diameter` of the circle center on
/// either axis. That bound is exact, not an empirical overscan factor.
fn covering_lattice(
    hex_diameter: f64,
    hex_spacing: f64,
    center: [f64; 2],
    radius: f64,
) -> Result<HexLattice> {
    let origin = [center[0] - radius, center[1] - radius];
    let probe = HexLattice::new(origin, hex_diameter, hex_spacing, 1, 1)?;
    let span = 2.0 * radius + hex_diameter;
    let cols = (span / (probe.col_spacing() / 2.0)).ceil() as usize + 1;
    let rows = (span / probe.row_spacing()).ceil() as usize + 1;
    HexLattice::new(origin, hex_diameter, hex_spacing, rows, cols)
}

/// Lazy iterator returned by [`HoneycombCircle::cells`]. Skips out-of-reach
/// lattice positions and cells whose overlap with the disk is empty.
#[derive(Clone, Debug)]
pub struct Cells<'a> {
    fill: &'a HoneycombCircle,
    index: usize,
}

impl Iterator for Cells<'_> {
    type Item = Result<HexCell>;

    fn next(&mut self) -> Option<Result<HexCell>> {
        let rows = self.fill.lattice.rows();
        while self.index < self.fill.lattice.count() {
            let col = self.index / rows;
            let row = self.index % rows;
            self.index += 1;
            match self.fill.build_cell(col, row) {
                Ok(Some(cell)) => return Some(Ok(cell)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covering_lattice_bounds() {
        let fill = HoneycombCircle::new(10.0, 1.0, 1.0, [30.0, 30.0], 30.0).unwrap();
        let lattice = fill.lattice();

        assert_eq!(lattice.origin(), [0.0, 0.0]);

        // The last column/row must reach past every position within
        // radius + hex_diameter of the circle center.
        let span = 2.0 * 30.0 + 10.0;
        let last_x = lattice.position(lattice.cols() - 1, 0)[0];
        let last_y = lattice.position(0, lattice.rows() - 1)[1];
        assert!(last_x >= 0.0 + span, "columns stop early at x = {}", last_x);
        assert!(last_y >= 0.0 + span, "rows stop early at y = {}", last_y);
    }

    #[test]
    fn test_classification_counts() {
        let fill = HoneycombCircle::new(10.0, 1.0, 1.0, [30.0, 30.0], 30.0).unwrap();
        let cells: Vec<HexCell> = fill.calculate().unwrap();

        assert!(!cells.is_empty());
        let whole = cells.iter().filter(|c| !c.is_clipped()).count();
        let clipped = cells.iter().filter(|c| c.is_clipped()).count();
        assert!(whole > 0, "expected some whole hexagons");
        assert!(clipped > 0, "expected some rim hexagons to be clipped");
        // Fewer cells than lattice positions: the corners get skipped.
        assert!(cells.len() < fill.lattice().count());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let fill = HoneycombCircle::new(7.0, 2.0, 0.5, [-5.0, 12.0], 21.0).unwrap();
        let sequential: Vec<HexCell> = fill.cells().collect::<Result<_>>().unwrap();
        let parallel = fill.calculate().unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            HoneycombCircle::new(10.0, 1.0, 1.0, [0.0, 0.0], 0.0),
            Err(HexcombError::InvalidParameter { name: "radius", .. })
        ));
        assert!(matches!(
            HoneycombCircle::new(10.0, 0.0, 1.0, [0.0, 0.0], 30.0),
            Err(HexcombError::InvalidParameter { name: "hex_thickness", .. })
        ));
        assert!(matches!(
            HoneycombCircle::new(-1.0, 1.0, 1.0, [0.0, 0.0], 30.0),
            Err(HexcombError::InvalidParameter { name: "hex_diameter", .. })
        ));

        let mut fill = HoneycombCircle::new(10.0, 1.0, 1.0, [0.0, 0.0], 30.0).unwrap();
        assert!(fill.set_arc_resolution(2).is_err());
        assert!(fill.set_arc_resolution(64).is_ok());
        assert_eq!(fill.arc_resolution(), 64);
    }
}
