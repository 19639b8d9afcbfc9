//! # Clusterpolate
//!
//! Inter- and extrapolation for clustered 2D data.
//!
//! Scattered data often comes in irregular clusters with large empty
//! areas in between. Convex-hull interpolation forces values onto those
//! empty areas; raw kernel heatmaps overestimate wherever samples are
//! dense. Clusterpolation combines both ideas: kernel functions drive a
//! normalized weighted estimate of the value field, and the same kernels'
//! raw sum gives a density estimate that is mapped to a per-cell degree
//! of membership. Cells with low membership lie where there is not
//! enough data to trust the estimate.
//!
//! ## Modules
//!
//! - **kernel**: weighting functions over a finite support radius
//! - **kdtree**: spatial index for within-radius sample lookup
//! - **estimate**: per-cell value/density/membership estimation
//! - **membership**: density-to-membership ramp
//! - **evaluate**: chunked, parallel grid evaluation
//!
//! The [`clusterpolate`] function is the main entry point.

pub mod estimate;
pub mod evaluate;
pub mod kdtree;
pub mod kernel;
pub mod membership;

pub use estimate::{CellEstimate, Estimator};
pub use evaluate::{clusterpolate, ClusterpolateParams, ResultGrid};
pub use kdtree::{KdTree, Neighbor};
pub use kernel::{KernelConfig, KernelShape};
pub use membership::MembershipRamp;

pub use clusterpolate_core::{bounding_box, Error, Grid, GridElement, GridSpec, Result, SamplePoint};
pub use clusterpolate_parallel::ProcessingMode;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::estimate::CellEstimate;
    pub use crate::evaluate::{clusterpolate, ClusterpolateParams, ResultGrid};
    pub use crate::kernel::{KernelConfig, KernelShape};
    pub use crate::membership::MembershipRamp;
    pub use clusterpolate_core::{bounding_box, Error, Grid, GridSpec, Result, SamplePoint};
    pub use clusterpolate_parallel::ProcessingMode;
}
