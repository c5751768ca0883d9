use itertools::{Either, Itertools};
use rand::Rng;
use std::f64::consts::*;

/// Sampling regime of a single capped concentration parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `kappa == 0`, the uniform density `1/pi`.
    Uniform,
    /// Saturated negative `kappa`, mass split evenly between `0` and `pi`.
    Bimodal,
    /// Saturated positive `kappa`, all mass at `pi/2`.
    Unimodal,
    /// Needs rejection sampling.
    Residual,
}

impl Regime {
    /// Classifies a capped `kappa`. A value sitting on the cap boundary
    /// counts as saturated, as does any value whose `exp` leaves the
    /// representable range.
    pub fn of(kappa: f64, kappa_cap: f64) -> Self {
        if kappa == 0.0 {
            return Regime::Uniform;
        }
        let e = kappa.exp();
        let saturated = e == f64::INFINITY || e == 0.0 || kappa.abs() >= kappa_cap;
        match (saturated, kappa > 0.0) {
            (false, _) => Regime::Residual,
            (true, true) => Regime::Unimodal,
            (true, false) => Regime::Bimodal,
        }
    }

    /// Closed-form draw for the degenerate regimes, `None` for [`Regime::Residual`].
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> Option<f64> {
        match self {
            Regime::Uniform => Some(rng.gen_range(0.0..PI)),
            Regime::Bimodal => Some(if rng.gen_bool(0.5) { 0.0 } else { PI }),
            Regime::Unimodal => Some(FRAC_PI_2),
            Regime::Residual => None,
        }
    }
}

/// Writes the closed-form variates of every degenerate element of `kappa`
/// into `result` and returns the indices left for rejection sampling,
/// in ascending order.
pub fn resolve<R: Rng + ?Sized>(
    kappa: &[f64], kappa_cap: f64, result: &mut [f64], rng: &mut R,
) -> Vec<usize> {
    let (closed, residual): (Vec<(usize, f64)>, Vec<usize>) = kappa.iter()
        .enumerate()
        .partition_map(|(i, &k)| match Regime::of(k, kappa_cap).draw(rng) {
            Some(x) => Either::Left((i, x)),
            None => Either::Right(i),
        });

    tracing::debug!(closed = closed.len(), residual = residual.len(), "resolved degenerate kappa");
    for (i, x) in closed {
        result[i] = x;
    }
    residual
}
