//! Alignment of headless 2D axes with reference directions.
//!
//! The alignment strength `p` in `[-1, 1]` maps to the concentration
//! parameter `kappa = -tan(p pi/2)`. Strength `1` puts every sampled angle
//! at `0` or `pi` (axes parallel to the reference), strength `-1` at `pi/2`
//! (perpendicular), strength `0` is isotropic.

use crate::error::{Result, VonMisesError};
use crate::vonmises::{SampleOptions, VonMisesHalf};
use nalgebra::{Matrix2, Rotation2, SymmetricEigen, Unit, Vector2};
use rand::Rng;
use std::f64::consts::*;

pub(crate) fn strength_to_kappa(p: f64) -> f64 {
    if p == 1.0 {
        f64::NEG_INFINITY
    } else if p == -1.0 {
        f64::INFINITY
    } else {
        -(p * FRAC_PI_2).tan()
    }
}

/// Converts an alignment strength into a concentration parameter.
pub fn alignment_strength(p: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&p) {
        return Err(VonMisesError::InvalidAlignmentStrength{ value: p });
    }
    Ok(strength_to_kappa(p))
}

/// Distance between two axes given as angles, in `[0, pi/2]`.
pub fn axial_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(PI);
    d.min(PI - d)
}

fn offsets(n: usize, strength: &[f64], rng: &mut impl Rng) -> Result<Vec<f64>> {
    let kappa = strength.iter()
        .map(|&p| alignment_strength(p))
        .collect::<Result<Vec<_>>>()?;
    VonMisesHalf.sample(&kappa, SampleOptions::default().with_size(n), rng)
}

/// Axis angles in `[0, pi)` correlated with the `reference` angles.
/// `strength` holds one value per reference or a single shared value.
pub fn axes_correlated_with_angles(
    reference: &[f64], strength: &[f64], rng: &mut impl Rng,
) -> Result<Vec<f64>> {
    let theta = offsets(reference.len(), strength, rng)?;
    Ok(reference.iter()
        .zip(theta)
        .map(|(&r, t)| (r + t).rem_euclid(PI))
        .collect())
}

/// Unit axes correlated with the `reference` vectors. The sign of each axis
/// is chosen to point into the half-plane of its reference.
pub fn axes_correlated_with_vectors(
    reference: &[Vector2<f64>], strength: &[f64], rng: &mut impl Rng,
) -> Result<Vec<Unit<Vector2<f64>>>> {
    let units = reference.iter()
        .enumerate()
        .map(|(index, v)| Unit::try_new(*v, f64::EPSILON)
            .ok_or(VonMisesError::DegenerateReference{ index }))
        .collect::<Result<Vec<_>>>()?;
    let theta = offsets(reference.len(), strength, rng)?;

    Ok(units.into_iter()
        .zip(theta)
        .map(|(u, t)| {
            let u = u.into_inner();
            let axis = Rotation2::new(t) * u;
            let axis = if axis.dot(&u) < 0.0 { -axis } else { axis };
            Unit::new_normalize(axis)
        })
        .collect())
}

/// Angle in `[0, pi)` of the principal axis of the symmetric tidal tensor
/// `[[s11, s12], [s12, s22]]` with the largest eigenvalue.
pub fn tidal_angle(s11: f64, s22: f64, s12: f64) -> f64 {
    let eigen = SymmetricEigen::new(Matrix2::new(s11, s12, s12, s22));
    let v = eigen.eigenvectors.column(eigen.eigenvalues.imax());
    v[1].atan2(v[0]).rem_euclid(PI)
}

/// Axis angles correlated with the principal axes of the tidal tensors
/// given by their components.
pub fn align_to_tidal_field(
    s11: &[f64], s22: &[f64], s12: &[f64], strength: &[f64], rng: &mut impl Rng,
) -> Result<Vec<f64>> {
    let n = s11.len();
    for (what, got) in [("s22", s22.len()), ("s12", s12.len())] {
        if got != n {
            return Err(VonMisesError::ShapeMismatch{ what, expected: n, got });
        }
    }
    let angles: Vec<f64> = itertools::izip!(s11, s22, s12)
        .map(|(&a, &b, &c)| tidal_angle(a, b, c))
        .collect();
    axes_correlated_with_angles(&angles, strength, rng)
}
