//! Miscellaneous tools.

use ndarray as nd;
use num_traits::Float;
use crate::{ Arr1, ORIGIN_EPSILON };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &Arr1<S>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Integrate using the composite Simpson's rule.
///
/// If `y` has an even number of points, Simpson's rule is applied to all but
/// the last interval, which is handled by the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn simpson<S, A>(y: &Arr1<S>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    if n < 3 { return trapz(y, dx); }
    let two = A::one() + A::one();
    let three = two + A::one();
    let four = two + two;
    let m = if n % 2 == 1 { n } else { n - 1 };
    let (odd, even)
        = y.iter().take(m - 1).enumerate().skip(1)
        .fold((A::zero(), A::zero()), |(o, e), (k, yk)| {
            if k % 2 == 1 { (o + *yk, e) } else { (o, e + *yk) }
        });
    let main = (dx / three) * (y[0] + four * odd + two * even + y[m - 1]);
    if m == n {
        main
    } else {
        main + (dx / two) * (y[n - 2] + y[n - 1])
    }
}

/// Integrate an array over one of its axes using [`simpson`], reducing its
/// dimension by one.
///
/// *Panics if the axis has length less than 2*.
pub fn simpson_axis<S, D>(y: &nd::ArrayBase<S, D>, axis: nd::Axis, dx: f64)
    -> nd::Array<f64, D::Smaller>
where
    S: nd::Data<Elem = f64>,
    D: nd::RemoveAxis,
{
    y.map_axis(axis, |lane| simpson(&lane, dx))
}

/// Return the index of the largest element of `y`, ignoring NaNs.
///
/// Returns `None` if `y` is empty or contains only NaNs. The first index is
/// returned on ties.
pub fn argmax<'a, I>(y: I) -> Option<usize>
where I: IntoIterator<Item = &'a f64>
{
    y.into_iter().enumerate()
        .filter(|(_, yk)| !yk.is_nan())
        .fold(None, |acc: Option<(usize, f64)>, (k, &yk)| {
            match acc {
                Some((_, best)) if best >= yk => acc,
                _ => Some((k, yk)),
            }
        })
        .map(|(k, _)| k)
}

/// Convert a Cartesian point to spherical coordinates `(r, θ, φ)`.
///
/// The radius is replaced by [`ORIGIN_EPSILON`] at the origin, so that the
/// polar angle is well defined everywhere (and equal to π/2 at the origin).
/// The azimuth lies in (-π, π].
pub fn to_spherical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let mut r = x.hypot(y).hypot(z);
    if r == 0.0 { r = ORIGIN_EPSILON; }
    let theta = (z / r).clamp(-1.0, 1.0).acos();
    let phi = y.atan2(x);
    (r, theta, phi)
}
