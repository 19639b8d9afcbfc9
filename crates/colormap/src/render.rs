//! Grid-to-RGBA rendering using color schemes.

use crate::scheme::{evaluate, ColorScheme, Rgb};
use clusterpolate_core::{Error, Grid, GridElement, Result};

/// Parameters for colormap rendering.
#[derive(Debug, Clone)]
pub struct ColormapParams {
    /// Color scheme to use.
    pub scheme: ColorScheme,
    /// Minimum value for normalization. Values below this are clamped.
    pub min: f64,
    /// Maximum value for normalization. Values above this are clamped.
    pub max: f64,
    /// Color for cells without a value (RGBA). Default: fully transparent.
    pub nodata_color: [u8; 4],
}

impl ColormapParams {
    /// Create params with the given scheme over the unit range; use
    /// [`auto_params`] to detect the range from data instead.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            min: 0.0,
            max: 1.0,
            nodata_color: [0, 0, 0, 0],
        }
    }

    /// Create params with explicit min/max range.
    pub fn with_range(scheme: ColorScheme, min: f64, max: f64) -> Self {
        Self {
            scheme,
            min,
            max,
            nodata_color: [0, 0, 0, 0],
        }
    }
}

/// Auto-detect min/max from a grid, returning `ColormapParams` ready to use.
///
/// Scans all cells that hold a finite value. Falls back to the unit range
/// when nothing is present, and widens a constant field by one so the
/// normalization never divides by zero.
pub fn auto_params<T: GridElement>(grid: &Grid<T>, scheme: ColorScheme) -> ColormapParams {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for val in grid.iter() {
        if let Some(v) = val.to_f64() {
            if v.is_finite() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
        }
    }

    if !min.is_finite() || !max.is_finite() {
        min = 0.0;
        max = 1.0;
    } else if (max - min).abs() < f64::EPSILON {
        max = min + 1.0;
    }

    ColormapParams::with_range(scheme, min, max)
}

/// Convert a grid to an RGBA pixel buffer with full opacity.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4` in row-major order.
/// Cells without a value are rendered with `params.nodata_color`.
pub fn grid_to_rgba<T: GridElement>(grid: &Grid<T>, params: &ColormapParams) -> Vec<u8> {
    render(grid, None, params)
}

/// Convert a grid to an RGBA pixel buffer, modulating the alpha channel
/// with a membership grid.
///
/// Membership is expected in `[0, 1]` and is scaled to 0..=255; the two
/// grids must have identical shapes. Cells without a value take
/// `params.nodata_color` regardless of their membership.
pub fn grid_to_rgba_with_alpha<T: GridElement>(
    grid: &Grid<T>,
    membership: &Grid<f64>,
    params: &ColormapParams,
) -> Result<Vec<u8>> {
    if membership.shape() != grid.shape() {
        return Err(Error::SizeMismatch {
            er: grid.rows(),
            ec: grid.cols(),
            ar: membership.rows(),
            ac: membership.cols(),
        });
    }
    Ok(render(grid, Some(membership), params))
}

fn render<T: GridElement>(
    grid: &Grid<T>,
    membership: Option<&Grid<f64>>,
    params: &ColormapParams,
) -> Vec<u8> {
    let range = params.max - params.min;
    let inv_range = if range.abs() > f64::EPSILON {
        1.0 / range
    } else {
        1.0
    };

    // Alpha per cell, in the same row-major order as the grid
    let alphas: Option<Vec<u8>> = membership.map(|m| {
        m.iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    });

    let mut rgba = vec![0u8; grid.len() * 4];

    for (i, val) in grid.iter().enumerate() {
        let offset = i * 4;

        match val.to_f64() {
            Some(v) if v.is_finite() => {
                let t = (v - params.min) * inv_range;
                let Rgb { r, g, b } = evaluate(params.scheme, t);
                rgba[offset] = r;
                rgba[offset + 1] = g;
                rgba[offset + 2] = b;
                rgba[offset + 3] = alphas.as_ref().map_or(255, |a| a[i]);
            }
            _ => {
                rgba[offset..offset + 4].copy_from_slice(&params.nodata_color);
            }
        }
    }

    rgba
}
