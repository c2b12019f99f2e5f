//! Numeric helpers for Phred-scaled and log10-scaled probabilities.
//!
//! This module provides the small set of conversions the projector and the
//! theta-N prior corrector need: Phred to linear scale and back, log10
//! normalization of a two-state distribution, and a stable `log10(1 - 10^x)`.

use std::f64::consts::LN_10;

/// Converts a Phred-scaled value to a linear-scale likelihood.
///
/// # Arguments
///
/// * `pl` - The Phred-scaled likelihood (lower is more likely, 0 is best).
///
/// # Returns
///
/// The linear-scale likelihood `10^(-pl/10)`.
pub fn phred_to_linear(pl: i32) -> f64 {
    10f64.powf(-f64::from(pl) / 10.0)
}

/// Converts a linear-scale likelihood to the Phred scale.
///
/// # Arguments
///
/// * `p` - The linear-scale likelihood; must be positive.
///
/// # Returns
///
/// The Phred-scaled value `-10*log10(p)`.
pub fn linear_to_phred(p: f64) -> f64 {
    -10.0 * p.log10()
}

/// Computes `log10(10^a + 10^b)` without leaving log space for longer than
/// necessary, anchoring on the larger operand to avoid underflow.
pub fn log10_sum_log10(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if lo == f64::NEG_INFINITY {
        return hi;
    }
    hi + (1.0 + 10f64.powf(lo - hi)).log10()
}

/// Normalizes a two-state log10 distribution so the linear probabilities sum
/// to one.
///
/// # Arguments
///
/// * `vals` - Unnormalized log10 values for the two states.
///
/// # Returns
///
/// The normalized log10 probabilities.
pub fn normalize_log10(vals: [f64; 2]) -> [f64; 2] {
    let log10_sum = log10_sum_log10(vals[0], vals[1]);
    [vals[0] - log10_sum, vals[1] - log10_sum]
}

/// Computes `log10(1 - 10^x)` for `x < 0`.
///
/// For `x` close to zero the naive form loses all precision, so the
/// computation goes through `exp_m1`; far from zero `ln_1p` is exact enough.
pub fn log10_one_minus_pow10(x: f64) -> f64 {
    debug_assert!(x < 0.0);
    if x > -1.0 {
        (-(x * LN_10).exp_m1()).ln() / LN_10
    } else {
        (-10f64.powf(x)).ln_1p() / LN_10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phred_to_linear() {
        assert!((phred_to_linear(0) - 1.0).abs() < 1e-12);
        assert!((phred_to_linear(10) - 0.1).abs() < 1e-12);
        assert!((phred_to_linear(30) - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_linear_to_phred() {
        assert!((linear_to_phred(1.0)).abs() < 1e-12);
        assert!((linear_to_phred(0.1) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_log10_sum_log10() {
        // log10(0.1 + 0.1) = log10(0.2)
        assert!((log10_sum_log10(-1.0, -1.0) - 0.2f64.log10()).abs() < 1e-12);
        assert!((log10_sum_log10(0.0, f64::NEG_INFINITY)).abs() < 1e-12);
        // order must not matter
        assert_eq!(log10_sum_log10(-3.0, -1.0), log10_sum_log10(-1.0, -3.0));
    }

    #[test]
    fn test_normalize_log10() {
        let normed = normalize_log10([-1.0, -1.0]);
        let total = 10f64.powf(normed[0]) + 10f64.powf(normed[1]);
        assert!((total - 1.0).abs() < 1e-12);
        assert!((normed[0] - 0.5f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_log10_one_minus_pow10() {
        // log10(1 - 0.1) = log10(0.9)
        assert!((log10_one_minus_pow10(-1.0) - 0.9f64.log10()).abs() < 1e-12);
        // near zero: log10(1 - 10^-0.001)
        let x = -0.001;
        let expected = (1.0 - 10f64.powf(x)).log10();
        assert!((log10_one_minus_pow10(x) - expected).abs() < 1e-9);
        // far from zero
        assert!((log10_one_minus_pow10(-5.0) - (1.0f64 - 1e-5).log10()).abs() < 1e-15);
    }
}
