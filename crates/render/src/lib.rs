//! # Clusterpolate Render
//!
//! Turns scattered samples straight into an image: run the estimation,
//! colormap a surface, and write membership into the alpha channel so
//! areas without enough data fade to transparent.
//!
//! [`render`] is the one-call entry point; [`layer_image`] colorizes any
//! surface of an existing [`ResultGrid`].

use clusterpolate::{
    bounding_box, clusterpolate, ClusterpolateParams, Error, GridSpec, KernelConfig,
    MembershipRamp, ProcessingMode, Result, ResultGrid,
};
use clusterpolate_colormap::{
    auto_params, grid_to_rgba_with_alpha, ColorScheme, ColormapParams,
};
use clusterpolate_core::{Grid, GridElement};

pub use image::RgbaImage;

/// Options for [`render`]
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output image dimensions as (width, height)
    pub size: (usize, usize),
    /// Query area corners. `None` uses the samples' bounding box, which
    /// requires at least two points with distinct coordinates per axis.
    pub area: Option<((f64, f64), (f64, f64))>,
    /// Kernel shape and support radius
    pub kernel: KernelConfig,
    /// Density-to-membership ramp override
    pub membership: Option<MembershipRamp>,
    /// Execution strategy
    pub mode: ProcessingMode,
    /// Evaluation chunk count override
    pub chunk_count: Option<usize>,
    /// Color scheme for the value surface
    pub scheme: ColorScheme,
    /// Value range for color normalization. `None` spans the estimates.
    pub range: Option<(f64, f64)>,
}

impl RenderOptions {
    pub fn new(size: (usize, usize), kernel: KernelConfig) -> Self {
        Self {
            size,
            area: None,
            kernel,
            membership: None,
            mode: ProcessingMode::default(),
            chunk_count: None,
            scheme: ColorScheme::Summer,
            range: None,
        }
    }
}

/// Surface of a [`ResultGrid`] to colorize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Kernel-weighted value estimates
    Value,
    /// Raw kernel density
    Density,
    /// Membership degrees
    Membership,
}

/// Clusterpolate samples and compose an RGBA image of the value surface.
///
/// The value estimates are colorized with `options.scheme`, membership
/// becomes the alpha channel, and cells without an estimate are fully
/// transparent. Returns the raw estimation result alongside the image so
/// callers can inspect or re-render it.
pub fn render(
    points: &[(f64, f64)],
    values: &[f64],
    options: &RenderOptions,
) -> Result<(ResultGrid, RgbaImage)> {
    let area = match options.area {
        Some(area) => area,
        None => {
            if points.len() < 2 {
                return Err(Error::InsufficientPoints {
                    needed: 2,
                    got: points.len(),
                });
            }
            bounding_box(points).ok_or(Error::InsufficientPoints {
                needed: 2,
                got: points.len(),
            })?
        }
    };

    let params = ClusterpolateParams {
        grid: GridSpec::new(options.size.0, options.size.1, area.0, area.1),
        kernel: options.kernel,
        membership: options.membership,
        mode: options.mode,
        chunk_count: options.chunk_count,
    };
    let result = clusterpolate(points, values, &params)?;
    let image = layer_image(&result, Layer::Value, options.scheme, options.range)?;

    Ok((result, image))
}

/// Colorize one surface of an estimation result.
///
/// Membership always drives the alpha channel. The value and density
/// surfaces auto-detect their color range when `range` is `None`; the
/// membership surface defaults to the unit range so its colors stay
/// comparable across runs.
pub fn layer_image(
    result: &ResultGrid,
    layer: Layer,
    scheme: ColorScheme,
    range: Option<(f64, f64)>,
) -> Result<RgbaImage> {
    let rgba = match layer {
        Layer::Value => colorize(&result.values, &result.membership, scheme, range)?,
        Layer::Density => colorize(&result.density, &result.membership, scheme, range)?,
        Layer::Membership => colorize(
            &result.membership,
            &result.membership,
            scheme,
            Some(range.unwrap_or((0.0, 1.0))),
        )?,
    };

    RgbaImage::from_raw(result.width() as u32, result.height() as u32, rgba)
        .ok_or_else(|| Error::Other("RGBA buffer does not match image dimensions".into()))
}

fn colorize<T: GridElement>(
    grid: &Grid<T>,
    membership: &Grid<f64>,
    scheme: ColorScheme,
    range: Option<(f64, f64)>,
) -> Result<Vec<u8>> {
    let params = match range {
        Some((min, max)) => ColormapParams::with_range(scheme, min, max),
        None => auto_params(grid, scheme),
    };
    grid_to_rgba_with_alpha(grid, membership, &params)
}
