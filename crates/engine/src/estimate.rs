//! Per-cell estimation
//!
//! For a query location, the estimate combines every sample whose kernel
//! support covers it:
//!
//! ```text
//! density = Σ wi                          (raw kernel sum)
//! value   = Σ(wi · vi) / Σ wi             (when Σ wi > 0)
//! where wi = K(d(query, sample_i))
//! ```
//!
//! When no sample is in range the value is missing, not a numeric
//! sentinel.

use crate::kdtree::{KdTree, Neighbor};
use crate::kernel::KernelConfig;
use crate::membership::MembershipRamp;

/// Estimate at a single query location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellEstimate {
    /// Kernel-weighted value, `None` when no sample is in range
    pub value: Option<f64>,
    /// Raw kernel density, `>= 0`
    pub density: f64,
    /// Degree of membership in `[0, 1]`
    pub membership: f64,
}

/// Evaluates cell estimates against a fixed sample set.
///
/// Holds the shared spatial index plus a private neighbor buffer, so one
/// estimator serves a whole chunk of cells without reallocating.
pub struct Estimator<'a> {
    tree: &'a KdTree,
    kernel: KernelConfig,
    ramp: MembershipRamp,
    neighbors: Vec<Neighbor>,
}

impl<'a> Estimator<'a> {
    pub fn new(tree: &'a KdTree, kernel: KernelConfig, ramp: MembershipRamp) -> Self {
        Self {
            tree,
            kernel,
            ramp,
            neighbors: Vec::new(),
        }
    }

    /// Estimate value, density and membership at (x, y).
    pub fn estimate(&mut self, x: f64, y: f64) -> CellEstimate {
        self.tree
            .within_radius_into(x, y, self.kernel.radius, &mut self.neighbors);

        let mut weight_sum = 0.0;
        let mut weighted_values = 0.0;
        for n in &self.neighbors {
            let w = self.kernel.weight(n.distance_sq.sqrt());
            weight_sum += w;
            weighted_values += w * self.tree.point(n.index).value;
        }

        let value = if weight_sum > 0.0 {
            Some(weighted_values / weight_sum)
        } else {
            None
        };

        CellEstimate {
            value,
            density: weight_sum,
            membership: self.ramp.membership(weight_sum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clusterpolate_core::SamplePoint;

    fn estimator(points: &[SamplePoint], radius: f64) -> (KdTree, KernelConfig, MembershipRamp) {
        let tree = KdTree::build(points);
        let kernel = KernelConfig::bump(radius);
        let ramp = MembershipRamp::saturating_at(kernel.peak());
        (tree, kernel, ramp)
    }

    #[test]
    fn test_no_sample_in_range() {
        let points = [SamplePoint::new(10.0, 10.0, 5.0)];
        let (tree, kernel, ramp) = estimator(&points, 1.0);
        let mut est = Estimator::new(&tree, kernel, ramp);

        let cell = est.estimate(0.0, 0.0);
        assert_eq!(cell.value, None);
        assert_eq!(cell.density, 0.0);
        assert_eq!(cell.membership, 0.0);
    }

    #[test]
    fn test_query_at_sample_location() {
        let points = [
            SamplePoint::new(2.0, 3.0, 7.5),
            SamplePoint::new(50.0, 50.0, -4.0),
        ];
        let (tree, kernel, ramp) = estimator(&points, 1.0);
        let mut est = Estimator::new(&tree, kernel, ramp);

        // Only one sample in range, at distance zero
        let cell = est.estimate(2.0, 3.0);
        assert_eq!(cell.value, Some(7.5));
        assert_relative_eq!(cell.density, 1.0);
        assert_relative_eq!(cell.membership, 1.0);
    }

    #[test]
    fn test_single_sample_in_range_yields_its_value() {
        let points = [SamplePoint::new(0.0, 0.0, 32.0)];
        let (tree, kernel, ramp) = estimator(&points, 1.0);
        let mut est = Estimator::new(&tree, kernel, ramp);

        // Any weight cancels in the normalized average
        let cell = est.estimate(0.5, 0.0);
        assert_eq!(cell.value, Some(32.0));
        assert!(cell.density > 0.0 && cell.density < 1.0);
    }

    #[test]
    fn test_weighted_average_between_two_samples() {
        let points = [
            SamplePoint::new(0.0, 0.0, 0.0),
            SamplePoint::new(1.0, 0.0, 10.0),
        ];
        let (tree, kernel, ramp) = estimator(&points, 2.0);
        let mut est = Estimator::new(&tree, kernel, ramp);

        // Midpoint: equal weights, exact mean
        let cell = est.estimate(0.5, 0.0);
        assert_relative_eq!(cell.value.unwrap(), 5.0, epsilon = 1e-12);

        // Closer to the second sample: estimate leans its way
        let cell = est.estimate(0.8, 0.0);
        assert!(cell.value.unwrap() > 5.0);
        assert!(cell.value.unwrap() < 10.0);
    }

    #[test]
    fn test_coincident_samples_both_contribute() {
        let single = [SamplePoint::new(0.0, 0.0, 4.0)];
        let doubled = [
            SamplePoint::new(0.0, 0.0, 4.0),
            SamplePoint::new(0.0, 0.0, 4.0),
        ];

        let (tree1, kernel, ramp) = estimator(&single, 1.0);
        let (tree2, _, _) = estimator(&doubled, 1.0);
        let mut est1 = Estimator::new(&tree1, kernel, ramp);
        let mut est2 = Estimator::new(&tree2, kernel, ramp);

        let a = est1.estimate(0.2, 0.0);
        let b = est2.estimate(0.2, 0.0);

        assert_relative_eq!(b.density, 2.0 * a.density, epsilon = 1e-12);
        assert_eq!(a.value, b.value);
    }

    #[test]
    fn test_sample_at_support_edge_does_not_contribute() {
        let points = [SamplePoint::new(1.0, 0.0, 3.0)];
        let (tree, kernel, ramp) = estimator(&points, 1.0);
        let mut est = Estimator::new(&tree, kernel, ramp);

        let cell = est.estimate(0.0, 0.0);
        assert_eq!(cell.value, None);
        assert_eq!(cell.density, 0.0);
    }

    #[test]
    fn test_density_adds_up() {
        let points = [
            SamplePoint::new(0.0, 0.0, 1.0),
            SamplePoint::new(0.3, 0.0, 2.0),
            SamplePoint::new(0.0, 0.4, 3.0),
        ];
        let (tree, kernel, ramp) = estimator(&points, 1.0);
        let mut est = Estimator::new(&tree, kernel, ramp);

        let cell = est.estimate(0.0, 0.0);
        let expected: f64 = points
            .iter()
            .map(|p| kernel.weight(p.dist(0.0, 0.0)))
            .sum();
        assert_relative_eq!(cell.density, expected, epsilon = 1e-12);
    }
}
