use crate::alignment::strength_to_kappa;

/// Alignment strength beyond which the distribution is indistinguishable
/// from a delta function.
pub const CAP_STRENGTH: f64 = 0.999;

/// Lower and upper kappa bounds, the kappa values of alignment strengths
/// `+CAP_STRENGTH` and `-CAP_STRENGTH` in ascending order.
pub fn kappa_bounds() -> (f64, f64) {
    let a = strength_to_kappa(CAP_STRENGTH);
    let b = strength_to_kappa(-CAP_STRENGTH);
    (a.min(b), a.max(b))
}

/// Smallest magnitude of the two kappa bounds. Any capped kappa at least
/// this large sits on a bound.
pub fn kappa_cap() -> f64 {
    let (low, high) = kappa_bounds();
    low.abs().min(high.abs())
}

pub fn cap(kappa: f64, bounds: (f64, f64)) -> f64 {
    kappa.clamp(bounds.0, bounds.1)
}

/// Returns a copy of `kappa` with every value clamped into [`kappa_bounds`].
/// NaN values are passed through unchanged.
pub fn cap_kappa(kappa: &[f64]) -> Vec<f64> {
    let bounds = kappa_bounds();
    kappa.iter().map(|&k| cap(k, bounds)).collect()
}
