use statrs::function::evaluate::polynomial;

// Abramowitz & Stegun 9.8.1 - 9.8.2,
// max abs error is around 1.6e-7 for I0 and 1.9e-7 for the scaled tail
const SMALL_ARG: f64 = 3.75;
const SMALL_COEFS: [f64; 7] = [
    1.0,
    3.5156229,
    3.0899424,
    1.2067492,
    0.2659732,
    0.0360768,
    0.0045813,
];
const LARGE_COEFS: [f64; 9] = [
    0.39894228,
    0.01328592,
    0.00225319,
    -0.00157565,
    0.00916281,
    -0.02057706,
    0.02635537,
    -0.01647633,
    0.00392377,
];

/// Exponentially scaled modified Bessel function of the first kind, order 0:
/// `I0(x) * exp(-|x|)`. Finite for every finite `x`.
pub fn bessel_i0e(x: f64) -> f64 {
    let ax = x.abs();
    if ax < SMALL_ARG {
        let t = ax / SMALL_ARG;
        polynomial(t * t, &SMALL_COEFS) * (-ax).exp()
    } else {
        polynomial(SMALL_ARG / ax, &LARGE_COEFS) / ax.sqrt()
    }
}

/// Modified Bessel function of the first kind, order 0. Overflows to
/// infinity for `|x|` above roughly 713.
pub fn bessel_i0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < SMALL_ARG {
        let t = ax / SMALL_ARG;
        polynomial(t * t, &SMALL_COEFS)
    } else {
        bessel_i0e(ax) * ax.exp()
    }
}
