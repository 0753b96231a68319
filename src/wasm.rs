//! WASM bindings. Flat `f64` buffers cross the boundary; fallible
//! constructors surface [`crate::HexcombError`] as `JsError`.

use wasm_bindgen::prelude::*;

use crate::cell::HexCell;
use crate::fill::HoneycombCircle;
use crate::lattice::HexLattice;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// WASM wrapper around [`HexLattice`].
#[wasm_bindgen(js_name = HexLattice)]
pub struct HexLatticeWasm {
    inner: HexLattice,
}

#[wasm_bindgen(js_class = HexLattice)]
impl HexLatticeWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(
        origin_x: f64,
        origin_y: f64,
        hex_diameter: f64,
        spacing: f64,
        rows: usize,
        cols: usize,
    ) -> Result<HexLatticeWasm, JsError> {
        Ok(HexLatticeWasm {
            inner: HexLattice::new([origin_x, origin_y], hex_diameter, spacing, rows, cols)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    #[wasm_bindgen(getter)]
    pub fn row_spacing(&self) -> f64 {
        self.inner.row_spacing()
    }

    #[wasm_bindgen(getter)]
    pub fn col_spacing(&self) -> f64 {
        self.inner.col_spacing()
    }

    /// All positions as a flat `[x, y, x, y, ...]` array in column-major order.
    pub fn positions(&self) -> Vec<f64> {
        self.inner.positions().flatten().collect()
    }
}

/// WASM wrapper around [`HexCell`].
#[wasm_bindgen(js_name = HexCell)]
pub struct HexCellWasm {
    inner: HexCell,
}

#[wasm_bindgen(js_class = HexCell)]
impl HexCellWasm {
    #[wasm_bindgen(getter)]
    pub fn col(&self) -> usize {
        self.inner.col()
    }

    #[wasm_bindgen(getter)]
    pub fn row(&self) -> usize {
        self.inner.row()
    }

    #[wasm_bindgen(getter)]
    pub fn center(&self) -> Vec<f64> {
        self.inner.center().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn vertices(&self) -> Vec<f64> {
        self.inner.vertices().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn clipped(&self) -> bool {
        self.inner.is_clipped()
    }

    #[wasm_bindgen(getter)]
    pub fn thickness(&self) -> f64 {
        self.inner.thickness()
    }

    pub fn area(&self) -> f64 {
        self.inner.area()
    }

    pub fn volume(&self) -> f64 {
        self.inner.volume()
    }

    pub fn centroid(&self) -> Vec<f64> {
        self.inner.centroid().to_vec()
    }
}

/// WASM wrapper around [`HoneycombCircle`].
#[wasm_bindgen(js_name = HoneycombCircle)]
pub struct HoneycombCircleWasm {
    inner: HoneycombCircle,
    cells: Vec<HexCell>,
}

#[wasm_bindgen(js_class = HoneycombCircle)]
impl HoneycombCircleWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(
        hex_diameter: f64,
        hex_thickness: f64,
        hex_spacing: f64,
        center_x: f64,
        center_y: f64,
        radius: f64,
    ) -> Result<HoneycombCircleWasm, JsError> {
        Ok(HoneycombCircleWasm {
            inner: HoneycombCircle::new(
                hex_diameter,
                hex_thickness,
                hex_spacing,
                [center_x, center_y],
                radius,
            )?,
            cells: Vec::new(),
        })
    }

    pub fn set_arc_resolution(&mut self, segments: usize) -> Result<(), JsError> {
        self.inner.set_arc_resolution(segments)?;
        Ok(())
    }

    /// Computes all cells, clipping boundary cells in parallel when a thread
    /// pool has been initialized.
    pub fn calculate(&mut self) -> Result<(), JsError> {
        self.cells = self.inner.calculate()?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn count_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, index: usize) -> Option<HexCellWasm> {
        self.cells
            .get(index)
            .cloned()
            .map(|inner| HexCellWasm { inner })
    }
}
