use std::f64::consts::FRAC_PI_6;

use crate::error::HexcombError;
use crate::error::Result;

/// A finite, regular lattice of flat-top hexagon centers.
///
/// Hexagon diameters are measured vertex to vertex, so the side length is
/// half the diameter. Odd columns are offset by half a column spacing in x
/// and half a row spacing in y, which produces the brick-like offset of
/// hexagonal packing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLattice {
    origin: [f64; 2],
    hex_diameter: f64,
    spacing: f64,
    rows: usize,
    cols: usize,
}

impl HexLattice {
    /// Creates a lattice of `rows * cols` hexagon centers starting at `origin`.
    ///
    /// `spacing` is the gap left between the edges of neighboring hexagons.
    /// Fails fast on non-positive diameters, negative spacing, non-finite
    /// coordinates, or zero row/column counts.
    pub fn new(
        origin: [f64; 2],
        hex_diameter: f64,
        spacing: f64,
        rows: usize,
        cols: usize,
    ) -> Result<HexLattice> {
        if hex_diameter <= 0.0 || !hex_diameter.is_finite() {
            return Err(HexcombError::InvalidParameter {
                name: "hex_diameter",
                value: hex_diameter,
                reason: "must be a positive finite number",
            });
        }
        if spacing < 0.0 || !spacing.is_finite() {
            return Err(HexcombError::InvalidParameter {
                name: "spacing",
                value: spacing,
                reason: "must be a non-negative finite number",
            });
        }
        for (name, value) in [("origin_x", origin[0]), ("origin_y", origin[1])] {
            if !value.is_finite() {
                return Err(HexcombError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if rows == 0 {
            return Err(HexcombError::InvalidParameter {
                name: "rows",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        if cols == 0 {
            return Err(HexcombError::InvalidParameter {
                name: "cols",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(HexLattice {
            origin,
            hex_diameter,
            spacing,
            rows,
            cols,
        })
    }

    pub fn origin(&self) -> [f64; 2] {
        self.origin
    }

    pub fn hex_diameter(&self) -> f64 {
        self.hex_diameter
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of lattice positions (`rows * cols`).
    pub fn count(&self) -> usize {
        self.rows * self.cols
    }

    /// Side length of a hexagon, half the vertex-to-vertex diameter.
    pub fn side_length(&self) -> f64 {
        self.hex_diameter / 2.0
    }

    /// Vertical flat-to-flat height of a flat-top hexagon: `sqrt(3) * side`.
    pub fn hex_height(&self) -> f64 {
        3.0_f64.sqrt() * self.side_length()
    }

    /// Vertical distance between hexagon centers in the same column.
    pub fn row_spacing(&self) -> f64 {
        self.hex_height() + self.spacing
    }

    /// Horizontal distance between hexagon centers two columns apart.
    ///
    /// The gap between columns is the edge spacing projected along the
    /// slanted hexagon edge, `spacing * sec(30 deg)`, counted once per side.
    pub fn col_spacing(&self) -> f64 {
        let q = self.spacing / FRAC_PI_6.cos();
        self.hex_diameter + 2.0 * q + self.side_length()
    }

    /// Center position of the hexagon at the given column and row.
    pub fn position(&self, col: usize, row: usize) -> [f64; 2] {
        let odd_col = col % 2 == 1;
        let col_spacing = self.col_spacing();
        let row_spacing = self.row_spacing();
        let x = self.origin[0]
            + (col / 2) as f64 * col_spacing
            + if odd_col { col_spacing / 2.0 } else { 0.0 };
        let y = self.origin[1]
            + row as f64 * row_spacing
            + if odd_col { row_spacing / 2.0 } else { 0.0 };
        [x, y]
    }

    /// Lazy, restartable iterator over all positions in column-major order:
    /// the outer loop runs over columns, the inner loop over rows.
    pub fn positions(&self) -> Positions<'_> {
        Positions {
            lattice: self,
            index: 0,
        }
    }
}

/// Column-major iterator over the center positions of a [`HexLattice`].
#[derive(Clone, Debug)]
pub struct Positions<'a> {
    lattice: &'a HexLattice,
    index: usize,
}

impl Iterator for Positions<'_> {
    type Item = [f64; 2];

    fn next(&mut self) -> Option<[f64; 2]> {
        if self.index >= self.lattice.count() {
            return None;
        }
        let col = self.index / self.lattice.rows;
        let row = self.index % self.lattice.rows;
        self.index += 1;
        Some(self.lattice.position(col, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lattice.count() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions<'_> {}
