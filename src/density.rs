//! Density of the half-period von Mises distribution
//!
//! ```text
//! f(x; k) = exp(k cos(2 (x - pi/2))) / (pi I0(k)),  x in (0, pi)
//! ```
//!
//! Positive `k` peaks at `pi/2`, negative `k` at `0` and `pi`.
//! All functions here expect an already capped `k`.

use crate::special::bessel_i0e;
use std::f64::consts::*;

fn phase(x: f64) -> f64 {
    (2.0 * (x - FRAC_PI_2)).cos()
}

pub fn density(x: f64, kappa: f64) -> f64 {
    // exp(k c) / I0(k) == exp(k c - |k|) / i0e(k)
    (kappa * phase(x) - kappa.abs()).exp() / (PI * bessel_i0e(kappa))
}

pub fn ln_density(x: f64, kappa: f64) -> f64 {
    kappa * phase(x) - kappa.abs() - (PI * bessel_i0e(kappa)).ln()
}

/// Location of the density maximum.
pub fn mode(kappa: f64) -> f64 {
    if kappa > 0.0 { FRAC_PI_2 } else { 0.0 }
}

/// Height of the density maximum, the rejection envelope.
pub fn peak_density(kappa: f64) -> f64 {
    density(mode(kappa), kappa)
}

/// Simpson panels over the whole half period.
const CDF_PANELS: usize = 4096;

/// Distribution function on `(0, pi)` by composite Simpson integration of
/// [`density`] from `0` to `x`.
pub fn cdf(x: f64, kappa: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= PI {
        return 1.0;
    }
    let half = ((x / PI * CDF_PANELS as f64) / 2.0).ceil().max(1.0) as usize;
    let n = 2 * half;
    let h = x / n as f64;
    let f = |t: f64| density(t, kappa);
    let inner: f64 = (1..n)
        .map(|i| f(i as f64 * h) * if i % 2 == 1 { 4.0 } else { 2.0 })
        .sum();
    ((f(0.0) + inner + f(x)) * h / 3.0).clamp(0.0, 1.0)
}
