use crate::{CoreError, CoreResult};

/// Floating point type used throughout the workspace
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value of `v`, so `2.675` (stored just below the
/// tie) gives `2.67`. Exact ties such as `0.125` go to the even digit.
pub fn round_dp(v: Real, places: u32) -> Real {
    let rounded = format!("{:.*}", places as usize, v)
        .parse::<Real>()
        .unwrap_or(v);
    // Avoid printing "-0.00" for tiny negative values
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn round_dp_places() {
        assert_eq!(round_dp(5.71828, 2), 5.72);
        assert_eq!(round_dp(-1.234, 2), -1.23);
        assert_eq!(round_dp(87.66, 1), 87.7);
        assert_eq!(round_dp(100.0, 1), 100.0);
    }

    #[test]
    fn round_dp_uses_exact_binary_value() {
        assert_eq!(round_dp(0.125, 2), 0.12);
        assert_eq!(round_dp(0.375, 2), 0.38);
        assert_eq!(round_dp(64.25, 1), 64.2);
        assert_eq!(round_dp(2.675, 2), 2.67);
        assert_eq!(round_dp(-499.965, 2), -499.96);
    }

    #[test]
    fn round_dp_clears_negative_zero() {
        let r = round_dp(-0.001, 2);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }
}
