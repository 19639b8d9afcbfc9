//! # Clusterpolate Core
//!
//! Core types for the clusterpolate estimation library.
//!
//! This crate provides:
//! - `SamplePoint`: a 2D observation with an attached value
//! - `GridSpec`: output grid geometry over a rectangular query area
//! - `Grid<T>`: generic dense 2D grid type
//! - `GridElement`: numeric view over cell types for rendering
//! - Shared error types

pub mod error;
pub mod grid;
pub mod point;

pub use error::{Error, Result};
pub use grid::{Grid, GridElement, GridSpec};
pub use point::{bounding_box, SamplePoint};
