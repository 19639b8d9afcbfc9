//! Sample points and bounding boxes

/// A sample point with x, y coordinates and an observed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }

    /// Squared Euclidean distance to a query location
    #[inline]
    pub fn dist_sq(&self, other_x: f64, other_y: f64) -> f64 {
        let dx = self.x - other_x;
        let dy = self.y - other_y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to a query location
    #[inline]
    pub fn dist(&self, other_x: f64, other_y: f64) -> f64 {
        self.dist_sq(other_x, other_y).sqrt()
    }
}

/// Axis-aligned bounding box of a point set, as `((min_x, min_y), (max_x, max_y))`.
///
/// Returns `None` for an empty slice.
pub fn bounding_box(points: &[(f64, f64)]) -> Option<((f64, f64), (f64, f64))> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for &(x, y) in rest {
        min.0 = min.0.min(x);
        min.1 = min.1.min(y);
        max.0 = max.0.max(x);
        max.1 = max.1.max(y);
    }
    Some((min, max))
}
