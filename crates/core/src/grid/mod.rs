//! Grid data structures

mod element;
mod raster;
mod spec;

pub use element::GridElement;
pub use raster::Grid;
pub use spec::GridSpec;
