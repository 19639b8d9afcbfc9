//! # Clusterpolate Colormap
//!
//! Color mapping and grid-to-RGBA rendering for clusterpolate.
//!
//! Provides four predefined color schemes over a generic multi-stop
//! interpolation engine. The main entry points are [`grid_to_rgba`] for
//! opaque output and [`grid_to_rgba_with_alpha`], which writes a
//! membership grid into the alpha channel so low-confidence cells fade
//! out.
//!
//! ## Usage
//!
//! ```ignore
//! use clusterpolate_colormap::{auto_params, grid_to_rgba_with_alpha, ColorScheme};
//!
//! let params = auto_params(&result.values, ColorScheme::Summer);
//! let rgba = grid_to_rgba_with_alpha(&result.values, &result.membership, &params)?;
//! ```

mod render;
mod scheme;

pub use render::{auto_params, grid_to_rgba, grid_to_rgba_with_alpha, ColormapParams};
pub use scheme::{evaluate, ColorScheme, ColorStop, Rgb};
