//! # hexcomb
//!
//! `hexcomb` is a Rust library for generating regular hexagonal lattices and
//! filling circular regions with honeycomb cells. It is designed to be used in
//! Rust as well as compiled to WebAssembly (WASM). The typical consumer is a
//! CAD or CSG pipeline that cuts the generated cells out of a parent solid,
//! for example to produce ventilation grilles.
//!
//! ## Features
//!
//! - **Lazy generation**: lattice positions and honeycomb cells come from
//!   restartable iterators and are never materialized unless asked for.
//! - **Cheap boundary classification**: cells fully inside or fully outside
//!   the bounding circle never pay for a geometric intersection; only cells
//!   straddling the rim are clipped against the disk.
//! - **Parallel fills**: [`HoneycombCircle::calculate`] builds cells with
//!   `rayon`, preserving the sequential ordering.
//! - **WASM-first**: built with `wasm-bindgen`, flat `f64` buffers across the
//!   boundary.
//!
//! ## Example
//!
//! See the `demos/` directory for SVG plotting of a honeycombed circle.
//!
//! ## Main Interface
//!
//! [`HexLattice`] generates hexagon center positions; [`HoneycombCircle`] is
//! the circular fill built on top of it.

mod cell;
mod clip;
mod error;
mod fill;
mod lattice;
pub mod wasm;

pub use cell::HexCell;
pub use clip::clip_polygon_to_disk;
pub use error::HexcombError;
pub use error::Result;
pub use fill::Cells;
pub use fill::HoneycombCircle;
pub use fill::DEFAULT_ARC_RESOLUTION;
pub use lattice::HexLattice;
pub use lattice::Positions;
