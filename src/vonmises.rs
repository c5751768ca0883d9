//! The von Mises distribution folded onto the half period `(0, pi)`.
//!
//! The classical density `exp(k cos(x - mu)) / (2 pi I0(k))` becomes
//! `exp(k cos(2 (x - mu))) / (pi I0(k))` with `mu = pi/2`, so it completes a
//! full period on `(0, pi)` and still integrates to one there. Unlike the
//! classical family it is defined for negative `k` as well.
//!
//! Concentration parameters are capped (see [`crate::cap`]) since the
//! distribution cannot reach the delta functions at `0`/`pi` or at `pi/2`;
//! a capped parameter takes the closed-form delta limit when sampled.

use crate::cap::{cap, cap_kappa, kappa_bounds, kappa_cap};
use crate::degenerate;
use crate::density;
use crate::error::{Result, VonMisesError};
use crate::rejection::{RejectionSampler, DEFAULT_MAX_ITERATIONS};
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::{Max, Min};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    /// Number of variates, `None` for one per concentration parameter.
    pub size: Option<usize>,
    /// Rejection rounds before giving up; 0 is treated as 1.
    pub max_iterations: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self{ size: None, max_iterations: DEFAULT_MAX_ITERATIONS }
    }
}

impl SampleOptions {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Sampled angles together with how the rejection loop ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Variates {
    pub angles: Vec<f64>,
    pub iterations: usize,
    /// Elements whose value is the last rejected candidate.
    pub unresolved: usize,
}

impl Variates {
    pub fn converged(&self) -> bool {
        self.unresolved == 0
    }
}

/// Stateless half-period von Mises distribution, parametrized per call by
/// an array of concentration parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VonMisesHalf;

impl VonMisesHalf {
    /// Density at `x` for concentration `kappa`. Either argument may have
    /// length 1, in which case it is broadcast to the other's length.
    pub fn density(&self, x: &[f64], kappa: &[f64]) -> Result<Vec<f64>> {
        check_kappa(kappa)?;
        let n = broadcast_len(x.len(), kappa.len())?;
        let kappa = cap_kappa(kappa);
        let at = |v: &[f64], i: usize| if v.len() == 1 { v[0] } else { v[i] };
        Ok((0..n).map(|i| density::density(at(x, i), at(&kappa[..], i))).collect())
    }

    pub fn sample<R: Rng + ?Sized>(
        &self, kappa: &[f64], options: SampleOptions, rng: &mut R,
    ) -> Result<Vec<f64>> {
        Ok(self.sample_report(kappa, options, rng)?.angles)
    }

    pub fn sample_with_thread_rng(&self, kappa: &[f64], options: SampleOptions) -> Result<Vec<f64>> {
        self.sample(kappa, options, &mut rand::thread_rng())
    }

    /// Like [`VonMisesHalf::sample`], also reporting iterations run and
    /// elements left unresolved by the iteration budget.
    pub fn sample_report<R: Rng + ?Sized>(
        &self, kappa: &[f64], options: SampleOptions, rng: &mut R,
    ) -> Result<Variates> {
        check_kappa(kappa)?;
        let kappa = expand_to_size(kappa, options.size)?;
        Ok(draw(&cap_kappa(&kappa), options.max_iterations, rng))
    }
}

fn check_kappa(kappa: &[f64]) -> Result<()> {
    match kappa.iter().position(|k| k.is_nan()) {
        Some(index) => Err(VonMisesError::InvalidKappa{ index }),
        None => Ok(()),
    }
}

fn broadcast_len(x_len: usize, kappa_len: usize) -> Result<usize> {
    match (x_len, kappa_len) {
        (a, b) if a == b => Ok(a),
        (1, b) => Ok(b),
        (a, 1) => Ok(a),
        (a, b) => Err(VonMisesError::ShapeMismatch{ what: "kappa", expected: a, got: b }),
    }
}

/// A length-1 `kappa` is replicated to `size`; otherwise `size` must equal
/// the length of `kappa`.
fn expand_to_size(kappa: &[f64], size: Option<usize>) -> Result<Vec<f64>> {
    match size {
        None => Ok(kappa.to_vec()),
        Some(n) if n == kappa.len() => Ok(kappa.to_vec()),
        Some(n) if kappa.len() == 1 => Ok(vec![kappa[0]; n]),
        Some(n) => Err(VonMisesError::ShapeMismatch{ what: "kappa", expected: n, got: kappa.len() }),
    }
}

/// Degenerate shortcuts followed by rejection sampling, over capped `kappa`.
fn draw<R: Rng + ?Sized>(kappa: &[f64], max_iterations: usize, rng: &mut R) -> Variates {
    let mut angles = vec![f64::NAN; kappa.len()];
    let residual = degenerate::resolve(kappa, kappa_cap(), &mut angles, rng);
    let outcome = RejectionSampler::new(max_iterations).run(kappa, residual, &mut angles, rng);
    Variates{ angles, iterations: outcome.iterations, unresolved: outcome.unresolved }
}

/// The distribution with one fixed concentration parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frozen {
    kappa: f64,
}

impl Frozen {
    pub fn new(kappa: f64) -> Result<Self> {
        check_kappa(&[kappa])?;
        Ok(Self{ kappa: cap(kappa, kappa_bounds()) })
    }

    /// The capped concentration parameter.
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    pub fn mode(&self) -> f64 {
        density::mode(self.kappa)
    }
}

impl Continuous<f64, f64> for Frozen {
    fn pdf(&self, x: f64) -> f64 {
        density::density(x, self.kappa)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        density::ln_density(x, self.kappa)
    }
}

impl ContinuousCDF<f64, f64> for Frozen {
    fn cdf(&self, x: f64) -> f64 {
        density::cdf(x, self.kappa)
    }
}

impl Min<f64> for Frozen {
    fn min(&self) -> f64 {
        0.0
    }
}

impl Max<f64> for Frozen {
    fn max(&self) -> f64 {
        PI
    }
}

impl Distribution<f64> for Frozen {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        draw(&[self.kappa], DEFAULT_MAX_ITERATIONS, rng).angles[0]
    }
}
