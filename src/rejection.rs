use crate::density::{density, peak_density};
use itertools::izip;
use rand::Rng;
use std::f64::consts::PI;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectionOutcome {
    pub iterations: usize,
    pub unresolved: usize,
}

/// Vectorized accept/reject sampler with a constant envelope per element,
/// the height of that element's density maximum.
///
/// Acceptance drops like `1/sqrt(|kappa|)`: just below the cap it is about
/// 1/63 per round, so strong kappa just below the cap can exhaust the
/// default budget and leave elements unresolved.
#[derive(Debug, Clone, Copy)]
pub struct RejectionSampler {
    pub max_iterations: usize,
}

impl Default for RejectionSampler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl RejectionSampler {
    /// A budget of 0 is raised to one round so every element gets a value.
    pub fn new(max_iterations: usize) -> Self {
        Self{ max_iterations: max_iterations.max(1) }
    }

    /// Samples `result[i]` for every `i` in `pending` using the capped
    /// `kappa[i]`. Elements still pending when the budget runs out keep
    /// their last drawn candidate.
    pub fn run<R: Rng + ?Sized>(
        &self, kappa: &[f64], mut pending: Vec<usize>,
        result: &mut [f64], rng: &mut R,
    ) -> RejectionOutcome {

        let mut iterations = 0;
        while !pending.is_empty() && iterations < self.max_iterations {
            let kk: Vec<f64> = pending.iter().map(|&i| kappa[i]).collect();
            let y_maxes: Vec<f64> = kk.iter().map(|&k| peak_density(k)).collect();
            let x_draws: Vec<f64> = kk.iter().map(|_| rng.gen_range(0.0..PI)).collect();
            let y_draws: Vec<f64> = y_maxes.iter().map(|&h| h * rng.gen::<f64>()).collect();

            let mut rejected = Vec::with_capacity(pending.len());
            for (&i, &k, &x, &y) in izip!(&pending, &kk, &x_draws, &y_draws) {
                result[i] = x;
                if y >= density(x, k) {
                    rejected.push(i);
                }
            }

            pending = rejected;
            iterations += 1;
        }

        let unresolved = pending.len();
        if unresolved > 0 {
            tracing::warn!(
                unresolved, iterations,
                "maximum number of iterations reached, random variates may not be representative"
            );
        } else {
            tracing::debug!(iterations, "rejection sampling converged");
        }
        RejectionOutcome{ iterations, unresolved }
    }
}
