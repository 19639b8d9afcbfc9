//! Membership mapping from kernel density
//!
//! The raw kernel density says how much data backs an estimate; membership
//! rescales it to a bounded degree of confidence. Cells with membership
//! near zero lie where there is simply not enough data.

use clusterpolate_core::{Error, Result};

/// Clamped linear ramp from kernel density to a membership degree in
/// `[0, 1]`.
///
/// Density at or below `min` maps to 0, density at or above `max` maps
/// to 1, and the mapping is linear in between. Monotone non-decreasing
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipRamp {
    /// Density at which membership starts to rise
    pub min: f64,
    /// Density at which membership saturates
    pub max: f64,
}

impl MembershipRamp {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Ramp rising from zero density and saturating at `max`.
    ///
    /// With `max` equal to the kernel's peak weight, a single sample at
    /// zero distance is already fully trusted.
    pub fn saturating_at(max: f64) -> Self {
        Self::new(0.0, max)
    }

    /// Validate the thresholds
    pub fn validate(&self) -> Result<()> {
        let ordered = self.min.is_finite() && self.max.is_finite() && self.min < self.max;
        if !ordered || self.min < 0.0 {
            return Err(Error::InvalidMembershipRamp {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Membership degree for a kernel density
    #[inline]
    pub fn membership(&self, density: f64) -> f64 {
        ((density - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_density_is_zero_membership() {
        let ramp = MembershipRamp::saturating_at(1.0);
        assert_eq!(ramp.membership(0.0), 0.0);
    }

    #[test]
    fn test_linear_between_thresholds() {
        let ramp = MembershipRamp::new(1.0, 3.0);
        assert_relative_eq!(ramp.membership(1.0), 0.0);
        assert_relative_eq!(ramp.membership(2.0), 0.5);
        assert_relative_eq!(ramp.membership(3.0), 1.0);
    }

    #[test]
    fn test_clamps_outside_thresholds() {
        let ramp = MembershipRamp::new(1.0, 3.0);
        assert_eq!(ramp.membership(0.5), 0.0);
        assert_eq!(ramp.membership(100.0), 1.0);
    }

    #[test]
    fn test_monotone_non_decreasing() {
        let ramp = MembershipRamp::new(0.5, 2.5);
        let mut prev = ramp.membership(0.0);
        for i in 1..=60 {
            let m = ramp.membership(i as f64 * 0.1);
            assert!(m >= prev);
            assert!((0.0..=1.0).contains(&m));
            prev = m;
        }
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        for (min, max) in [
            (1.0, 1.0),
            (2.0, 1.0),
            (-0.5, 1.0),
            (f64::NAN, 1.0),
            (0.0, f64::INFINITY),
        ] {
            let ramp = MembershipRamp::new(min, max);
            assert!(
                matches!(ramp.validate(), Err(Error::InvalidMembershipRamp { .. })),
                "({min}, {max}) accepted"
            );
        }
    }

    #[test]
    fn test_validate_accepts_ordered_thresholds() {
        assert!(MembershipRamp::new(0.0, 1.0).validate().is_ok());
        assert!(MembershipRamp::new(0.2, 5.0).validate().is_ok());
    }
}
