//! Half-period von Mises distribution on `(0, pi)` with a vectorized
//! rejection sampler, for modelling the alignment of orientation axes
//! around a preferred direction.

pub use rand::prelude::*;
pub use statrs::distribution::Continuous;

pub use alignment::{
    align_to_tidal_field, alignment_strength, axes_correlated_with_angles,
    axes_correlated_with_vectors, axial_distance, tidal_angle,
};
pub use cap::{cap_kappa, kappa_bounds, CAP_STRENGTH};
pub use error::{Result, VonMisesError};
pub use rejection::DEFAULT_MAX_ITERATIONS;
pub use vonmises::{Frozen, SampleOptions, Variates, VonMisesHalf};

pub mod alignment;
pub mod cap;
pub mod degenerate;
pub mod density;
pub mod error;
pub mod rejection;
pub mod special;
pub mod vonmises;
