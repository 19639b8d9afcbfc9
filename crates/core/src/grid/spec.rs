//! Grid geometry: dimensions and query area

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Geometry of an output grid: pixel dimensions plus the rectangular query
/// area spanned between two opposite corners.
///
/// Cell coordinates are spaced evenly along each axis, endpoints included:
/// column 0 maps to `x0`, column `width - 1` maps to `x1`, and likewise for
/// rows between `y0` and `y1`. A single-cell axis maps to its first corner.
/// Corners are kept in the order given, so `x0 > x1` simply lays columns out
/// right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// X coordinate of the first corner (column 0)
    pub x0: f64,
    /// Y coordinate of the first corner (row 0)
    pub y0: f64,
    /// X coordinate of the second corner (last column)
    pub x1: f64,
    /// Y coordinate of the second corner (last row)
    pub y1: f64,
}

impl GridSpec {
    /// Create a grid spec from dimensions and two opposite area corners
    pub fn new(width: usize, height: usize, a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            width,
            height,
            x0: a.0,
            y0: a.1,
            x1: b.0,
            y1: b.1,
        }
    }

    /// Validate dimensions and area corners
    ///
    /// Both dimensions must be at least 1, corners must be finite, and the
    /// corners must differ on each axis so the area encloses actual extent.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidGridSize {
                width: self.width,
                height: self.height,
            });
        }
        let finite = self.x0.is_finite()
            && self.y0.is_finite()
            && self.x1.is_finite()
            && self.y1.is_finite();
        if !finite || self.x0 == self.x1 || self.y0 == self.y1 {
            return Err(Error::DegenerateArea {
                x0: self.x0,
                y0: self.y0,
                x1: self.x1,
                y1: self.y1,
            });
        }
        Ok(())
    }

    /// X coordinate of a column
    #[inline]
    pub fn x_coord(&self, col: usize) -> f64 {
        axis_coord(self.x0, self.x1, self.width, col)
    }

    /// Y coordinate of a row
    #[inline]
    pub fn y_coord(&self, row: usize) -> f64 {
        axis_coord(self.y0, self.y1, self.height, row)
    }

    /// Coordinates of the cell at (row, col)
    #[inline]
    pub fn cell_coord(&self, row: usize, col: usize) -> (f64, f64) {
        (self.x_coord(col), self.y_coord(row))
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True if the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evenly spaced coordinate along one axis, endpoints included
#[inline]
fn axis_coord(c0: f64, c1: f64, n: usize, k: usize) -> f64 {
    if n <= 1 {
        c0
    } else {
        c0 + (c1 - c0) * k as f64 / (n - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_included() {
        let spec = GridSpec::new(5, 3, (-1.0, 10.0), (1.0, 16.0));

        assert_relative_eq!(spec.x_coord(0), -1.0);
        assert_relative_eq!(spec.x_coord(4), 1.0);
        assert_relative_eq!(spec.y_coord(0), 10.0);
        assert_relative_eq!(spec.y_coord(2), 16.0);
    }

    #[test]
    fn test_even_spacing() {
        let spec = GridSpec::new(5, 5, (0.0, 0.0), (4.0, 8.0));

        for col in 0..5 {
            assert_relative_eq!(spec.x_coord(col), col as f64);
        }
        for row in 0..5 {
            assert_relative_eq!(spec.y_coord(row), 2.0 * row as f64);
        }
    }

    #[test]
    fn test_single_cell_axis() {
        let spec = GridSpec::new(1, 1, (3.0, 7.0), (9.0, 11.0));
        assert_eq!(spec.cell_coord(0, 0), (3.0, 7.0));
    }

    #[test]
    fn test_descending_axis() {
        let spec = GridSpec::new(3, 2, (10.0, 0.0), (0.0, 1.0));
        assert_relative_eq!(spec.x_coord(0), 10.0);
        assert_relative_eq!(spec.x_coord(1), 5.0);
        assert_relative_eq!(spec.x_coord(2), 0.0);
    }

    #[test]
    fn test_validate_rejects_zero_dims() {
        let spec = GridSpec::new(0, 4, (0.0, 0.0), (1.0, 1.0));
        assert!(matches!(
            spec.validate(),
            Err(Error::InvalidGridSize { width: 0, height: 4 })
        ));
    }

    #[test]
    fn test_validate_rejects_collapsed_area() {
        let spec = GridSpec::new(4, 4, (2.0, 0.0), (2.0, 1.0));
        assert!(matches!(spec.validate(), Err(Error::DegenerateArea { .. })));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let spec = GridSpec::new(4, 4, (f64::NAN, 0.0), (1.0, 1.0));
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let spec = GridSpec::new(4, 4, (0.0, 0.0), (1.0, 1.0));
        assert!(spec.validate().is_ok());
    }
}
