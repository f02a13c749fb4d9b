//! Analytical bound-state wavefunctions of hydrogen,
//! ψ<sub>*nlm*</sub>(*r*, *θ*, *φ*) = *R*<sub>*nl*</sub>(*r*)
//! *Y*<sub>*l*</sub><sup>*m*</sup>(*θ*, *φ*), in atomic units.
//!
//! Functions taking bare quantum numbers validate them and return
//! [`WfError::QuantumNumber`] on failure; functions taking a [`QuantumState`]
//! can only fail on mismatched coordinate array shapes.
//!
//! ```
//! use hspace::{ QuantumState, wavefunction as wf };
//!
//! let r = wf::radial_wave_function(1.0, 1, 0).unwrap();
//! assert!((r - 2.0 * (-1.0_f64).exp()).abs() < 1e-12);
//! let s = QuantumState::new(2, 1, 0).unwrap();
//! assert!(wf::density(s, 2.0, 0.3, 1.1) > 0.0);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ QuantumNumberError, ShapeError, WfError },
    special::{ assoc_legendre_normed, laguerre_scaled, ln_factorial },
    state::QuantumState,
    utils::{ argmax, simpson_axis },
    ORIGIN_EPSILON,
    DEF_RADIAL_SAMPLES,
};

pub type WfResult<T> = Result<T, WfError>;

fn check_nl(n: u32, l: u32) -> Result<(), QuantumNumberError> {
    if n < 1 {
        Err(QuantumNumberError::BadN(n as i32))
    } else if l >= n {
        Err(QuantumNumberError::BadL { n: n as i32, l: l as i32 })
    } else {
        Ok(())
    }
}

fn check_lm(l: u32, m: i32) -> Result<(), QuantumNumberError> {
    (m.unsigned_abs() <= l).then_some(())
        .ok_or(QuantumNumberError::BadM { l: l as i32, m })
}

/// Natural logarithm of the radial normalization constant,
/// ```text
/// N = √[ (2/n)³ (n - l - 1)! / (2n (n + l)!) ]
/// ```
///
/// *N* itself underflows for large quantum numbers (ln *N* ≈ -790 at *n* =
/// 200, *l* = 150), so radial functions are assembled from its logarithm.
///
/// Assumes `n ≥ 1` and `l < n`.
pub fn ln_radial_norm(n: u32, l: u32) -> f64 {
    let nf = f64::from(n);
    let ln_n2
        = 3.0 * (2.0 / nf).ln()
        + ln_factorial(n - l - 1)
        - (2.0 * nf).ln()
        - ln_factorial(n + l);
    0.5 * ln_n2
}

// assumes valid (n, l); `ln_norm` from `ln_radial_norm`
//
// ln|R| = ln N - ρ/2 + l ln ρ + ln|L|, exponentiated once at the end
fn radial_with_norm(r: f64, n: u32, l: u32, ln_norm: f64) -> f64 {
    let r = if r == 0.0 { ORIGIN_EPSILON } else { r };
    let rho = 2.0 * r / f64::from(n);
    if rho.is_infinite() { return 0.0; }
    let (lag, ln_scale)
        = laguerre_scaled(rho, n - l - 1, f64::from(2 * l + 1));
    if lag == 0.0 { return 0.0; }
    let sign
        = if rho < 0.0 && l % 2 == 1 { -lag.signum() } else { lag.signum() };
    let ln_abs
        = ln_norm - rho / 2.0 + f64::from(l) * rho.abs().ln()
        + lag.abs().ln() + ln_scale;
    sign * ln_abs.exp()
}

fn radial_unchecked(r: f64, n: u32, l: u32) -> f64 {
    radial_with_norm(r, n, l, ln_radial_norm(n, l))
}

// assumes |m| ≤ l
fn ylm_unchecked(theta: f64, phi: f64, l: u32, m: i32) -> C64 {
    let ma = m.unsigned_abs();
    let y = C64::from_polar(
        assoc_legendre_normed(theta.cos(), l, ma), f64::from(ma) * phi);
    match (m < 0, ma % 2 == 0) {
        (false, _) => y,
        (true, true) => y.conj(),
        (true, false) => -y.conj(),
    }
}

/// Radial wavefunction *R*<sub>*nl*</sub>(*r*) with *r* in Bohr radii.
///
/// ```text
/// R(r) = N exp(-ρ/2) ρ^l L[n - l - 1, 2l + 1](ρ),  ρ = 2r/n
/// ```
/// where *L* is the generalized Laguerre polynomial (see [`ln_radial_norm`]
/// for *N*). The product is evaluated in the log domain, so the result is
/// finite for every valid `(n, l)` and `r ≥ 0`. A radius of exactly 0 is
/// evaluated at [`ORIGIN_EPSILON`] instead.
pub fn radial_wave_function(r: f64, n: u32, l: u32) -> WfResult<f64> {
    check_nl(n, l)?;
    Ok(radial_unchecked(r, n, l))
}

/// Array version of [`radial_wave_function`].
pub fn radial_wave_function_arr<S, D>(r: &nd::ArrayBase<S, D>, n: u32, l: u32)
    -> WfResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    check_nl(n, l)?;
    let ln_norm = ln_radial_norm(n, l);
    Ok(r.mapv(|rk| radial_with_norm(rk, n, l, ln_norm)))
}

/// Complex spherical harmonic *Y*<sub>*l*</sub><sup>*m*</sup>(*θ*, *φ*),
/// including the Condon-Shortley phase.
///
/// ```text
/// Y(θ, φ) = √[ (2l + 1)/(4π) (l - m)!/(l + m)! ] P[l, m](cos θ) exp(i m φ)
/// ```
/// Negative `m` are evaluated via *Y*<sub>*l*</sub><sup>-*m*</sup> =
/// (-1)<sup>*m*</sup> conj(*Y*<sub>*l*</sub><sup>*m*</sup>).
pub fn spherical_harmonic(theta: f64, phi: f64, l: u32, m: i32)
    -> WfResult<C64>
{
    check_lm(l, m)?;
    Ok(ylm_unchecked(theta, phi, l, m))
}

/// Array version of [`spherical_harmonic`].
pub fn spherical_harmonic_arr<S, T, D>(
    theta: &nd::ArrayBase<S, D>,
    phi: &nd::ArrayBase<T, D>,
    l: u32,
    m: i32,
) -> WfResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    check_lm(l, m)?;
    ShapeError::check(theta, phi)?;
    let Y
        = nd::Zip::from(theta).and(phi)
        .map_collect(|&t, &p| ylm_unchecked(t, p, l, m));
    Ok(Y)
}

/// Evaluate ψ<sub>*nlm*</sub> at a single point.
pub fn psi(state: QuantumState, r: f64, theta: f64, phi: f64) -> C64 {
    radial_unchecked(r, state.n(), state.l())
        * ylm_unchecked(theta, phi, state.l(), state.m())
}

/// Evaluate |ψ<sub>*nlm*</sub>|² at a single point.
pub fn density(state: QuantumState, r: f64, theta: f64, phi: f64) -> f64 {
    psi(state, r, theta, phi).norm_sqr()
}

// Zip panics on mismatched shapes; callers check beforehand
pub(crate) fn psi_unchecked<S, T, U, D>(
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
    state: QuantumState,
) -> nd::Array<C64, D>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let (n, l, m) = (state.n(), state.l(), state.m());
    let ln_norm = ln_radial_norm(n, l);
    nd::Zip::from(r).and(theta).and(phi)
        .map_collect(|&rk, &tk, &pk| {
            radial_with_norm(rk, n, l, ln_norm) * ylm_unchecked(tk, pk, l, m)
        })
}

/// Evaluate ψ<sub>*nlm*</sub> = *R*<sub>*nl*</sub>
/// *Y*<sub>*l*</sub><sup>*m*</sup> over arrays of spherical coordinates.
///
/// The three coordinate arrays must have identical shapes.
pub fn hydrogen_wave_function<S, T, U, D>(
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
    state: QuantumState,
) -> WfResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ShapeError::check3(r, theta, phi)?;
    Ok(psi_unchecked(r, theta, phi, state))
}

/// Evaluate the probability density |ψ<sub>*nlm*</sub>|² over arrays of
/// spherical coordinates.
///
/// Every element of the result is non-negative.
pub fn probability_density<S, T, U, D>(
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
    state: QuantumState,
) -> WfResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let psi = hydrogen_wave_function(r, theta, phi, state)?;
    Ok(psi.mapv(|q| q.norm_sqr()))
}

/// Radial probability density *r*² |*R*<sub>*nl*</sub>(*r*)|².
pub fn radial_probability_density(r: f64, n: u32, l: u32) -> WfResult<f64> {
    radial_wave_function(r, n, l).map(|R| r * r * R * R)
}

/// Array version of [`radial_probability_density`].
pub fn radial_probability_density_arr<S, D>(
    r: &nd::ArrayBase<S, D>,
    n: u32,
    l: u32,
) -> WfResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let mut P = radial_wave_function_arr(r, n, l)?;
    nd::Zip::from(&mut P).and(r)
        .for_each(|Pk, &rk| { *Pk = rk * rk * *Pk * *Pk; });
    Ok(P)
}

/// Angular probability density |*Y*<sub>*l*</sub><sup>*m*</sup>(*θ*, *φ*)|².
pub fn angular_probability_density(theta: f64, phi: f64, l: u32, m: i32)
    -> WfResult<f64>
{
    spherical_harmonic(theta, phi, l, m).map(|y| y.norm_sqr())
}

/// Expectation value ⟨*r*⟩ = (3*n*² - *l*(*l* + 1)) / 2 in Bohr radii.
pub fn expectation_value_r(n: u32, l: u32) -> WfResult<f64> {
    check_nl(n, l)?;
    let nf = f64::from(n);
    let lf = f64::from(l);
    Ok(0.5 * (3.0 * nf * nf - lf * (lf + 1.0)))
}

/// Location of the maximum of the radial probability density, found by a
/// scan over 1000 evenly spaced radii in [0, 5n²].
///
/// The result is accurate to the scan spacing, 5n²/999.
pub fn most_probable_radius(n: u32, l: u32) -> WfResult<f64> {
    check_nl(n, l)?;
    let r: nd::Array1<f64>
        = nd::Array1::linspace(0.0, 5.0 * f64::from(n * n), DEF_RADIAL_SAMPLES);
    let P = radial_probability_density_arr(&r, n, l)?;
    Ok(argmax(&P).map(|k| r[k]).unwrap_or(0.0))
}

/// Numerically integrate |ψ|² *r*² sin *θ* over the ball of radius `r_max`
/// using Simpson's rule on a `num_points`³ grid in (*r*, *θ*, *φ*).
///
/// The result should approach 1 for sufficiently large `r_max` and
/// `num_points`. This is a consistency check on the normalization constants
/// and is not used by any other computation.
///
/// *Panics if `num_points < 2`*.
pub fn verify_normalization(state: QuantumState, r_max: f64, num_points: usize)
    -> f64
{
    assert!(
        num_points >= 2,
        "wavefunction::verify_normalization: need at least 2 points per axis"
    );
    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, r_max, num_points);
    let theta: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, num_points);
    let phi: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0 * PI, num_points);
    let dr = r[1] - r[0];
    let dtheta = theta[1] - theta[0];
    let dphi = phi[1] - phi[0];
    let shape = (num_points, num_points, num_points);
    let R = nd::Array3::from_shape_fn(shape, |(i, _, _)| r[i]);
    let TH = nd::Array3::from_shape_fn(shape, |(_, j, _)| theta[j]);
    let PH = nd::Array3::from_shape_fn(shape, |(_, _, k)| phi[k]);
    let mut integrand: nd::Array3<f64>
        = psi_unchecked(&R, &TH, &PH, state).mapv(|q| q.norm_sqr());
    nd::Zip::from(&mut integrand).and(&R).and(&TH)
        .for_each(|f, &rk, &tk| { *f *= rk * rk * tk.sin(); });
    let over_phi = simpson_axis(&integrand, nd::Axis(2), dphi);
    let over_theta = simpson_axis(&over_phi, nd::Axis(1), dtheta);
    crate::utils::simpson(&over_theta, dr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_states(n_max: i32) -> Vec<QuantumState> {
        (1..=n_max)
            .flat_map(|n| (0..n).map(move |l| (n, l)))
            .flat_map(|(n, l)| (-l..=l).map(move |m| (n, l, m)))
            .map(|(n, l, m)| QuantumState::new(n, l, m).unwrap())
            .collect()
    }

    #[test]
    fn radial_known_forms() {
        // R_10 = 2 exp(-r)
        assert_relative_eq!(
            radial_wave_function(1.0, 1, 0).unwrap(),
            2.0 * (-1.0_f64).exp(),
            epsilon = 1e-12,
        );
        // R_20 = (2 - r) exp(-r/2) / (2√2)
        let r = 0.7;
        assert_relative_eq!(
            radial_wave_function(r, 2, 0).unwrap(),
            (2.0 - r) * (-r / 2.0).exp() / (2.0 * 2.0_f64.sqrt()),
            epsilon = 1e-12,
        );
        // R_21 = r exp(-r/2) / (2√6)
        let r = 2.0;
        assert_relative_eq!(
            radial_wave_function(r, 2, 1).unwrap(),
            r * (-r / 2.0).exp() / (2.0 * 6.0_f64.sqrt()),
            epsilon = 1e-12,
        );
    }

    #[test]
    fn radial_finite_at_origin() {
        for n in 1..=12 {
            for l in 0..n {
                let R0 = radial_wave_function(0.0, n, l).unwrap();
                assert!(R0.is_finite(), "R({n}, {l}) at 0 = {R0}");
                let R1 = radial_wave_function(50.0, n, l).unwrap();
                assert!(R1.is_finite());
            }
        }
        let r = nd::array![0.0, 1.0, 2.0];
        let R = radial_wave_function_arr(&r, 1, 0).unwrap();
        assert!(R.iter().all(|Rk| Rk.is_finite()));
    }

    #[test]
    fn radial_large_quantum_numbers() {
        let ln_N = ln_radial_norm(200, 150);
        assert!(ln_N.is_finite() && ln_N < -700.0);
        // ∫ r² R² dr = 1 even though N alone underflows
        for (n, l) in [(200, 150), (161, 160)] {
            let r_max = 3.0 * f64::from(n * n);
            let r: nd::Array1<f64> = nd::Array1::linspace(0.0, r_max, 20001);
            let P = radial_probability_density_arr(&r, n, l).unwrap();
            assert!(P.iter().all(|p| p.is_finite() && *p >= 0.0));
            let norm = crate::utils::simpson(&P, r[1] - r[0]);
            assert_relative_eq!(norm, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn radial_finite_at_huge_radius() {
        for (n, l) in [(1, 0), (3, 0), (3, 2), (40, 7)] {
            for r in [1e5, 1e200, f64::MAX] {
                let R = radial_wave_function(r, n, l).unwrap();
                assert!(R.is_finite(), "R({n}, {l}) at {r} = {R}");
                assert_eq!(R.abs(), 0.0);
            }
        }
    }

    #[test]
    fn harmonic_high_order() {
        let y = spherical_harmonic(1.2, 0.3, 160, 160).unwrap();
        assert!(y.re.is_finite() && y.im.is_finite());
        assert!(y.norm() > 0.0);
        let y = spherical_harmonic(1.2, 0.3, 160, -157).unwrap();
        assert!(y.re.is_finite() && y.im.is_finite());

        let state = QuantumState::new(161, 160, 160).unwrap();
        for r in [100.0, 161.0 * 161.0, 1e6] {
            let p = density(state, r, 1.2, 0.3);
            assert!(p.is_finite() && p >= 0.0);
        }
        assert!(density(state, 161.0 * 161.0, 1.2, 0.3) > 0.0);
    }

    #[test]
    fn radial_validation() {
        assert!(matches!(
            radial_wave_function(1.0, 0, 0),
            Err(WfError::QuantumNumber(QuantumNumberError::BadN(0))),
        ));
        assert!(matches!(
            radial_wave_function(1.0, 2, 2),
            Err(WfError::QuantumNumber(QuantumNumberError::BadL { n: 2, l: 2 })),
        ));
        assert!(expectation_value_r(1, 1).is_err());
    }

    #[test]
    fn harmonic_known_forms() {
        let (theta, phi) = (0.4, 1.3);
        let y00 = spherical_harmonic(theta, phi, 0, 0).unwrap();
        assert_relative_eq!(y00.re, (4.0 * PI).recip().sqrt(), epsilon = 1e-14);
        assert_relative_eq!(y00.im, 0.0);

        let y10 = spherical_harmonic(theta, phi, 1, 0).unwrap();
        assert_relative_eq!(
            y10.re, (3.0 / (4.0 * PI)).sqrt() * theta.cos(), epsilon = 1e-14);

        let a = (3.0 / (8.0 * PI)).sqrt() * theta.sin();
        let y11 = spherical_harmonic(theta, phi, 1, 1).unwrap();
        assert_relative_eq!(y11.re, -a * phi.cos(), epsilon = 1e-14);
        assert_relative_eq!(y11.im, -a * phi.sin(), epsilon = 1e-14);
        let y1m1 = spherical_harmonic(theta, phi, 1, -1).unwrap();
        assert_relative_eq!(y1m1.re, a * phi.cos(), epsilon = 1e-14);
        assert_relative_eq!(y1m1.im, -a * phi.sin(), epsilon = 1e-14);

        assert!(spherical_harmonic(theta, phi, 1, 2).is_err());
    }

    #[test]
    fn harmonic_arrays() {
        let theta: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 30);
        let phi: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0 * PI, 30);
        let Y = spherical_harmonic_arr(&theta, &phi, 2, -1).unwrap();
        assert_eq!(Y.shape(), theta.shape());
        assert!(Y.iter().all(|y| y.re.is_finite() && y.im.is_finite()));
        let short: nd::Array1<f64> = nd::Array1::zeros(3);
        assert!(matches!(
            spherical_harmonic_arr(&theta, &short, 0, 0),
            Err(WfError::Shape(_)),
        ));
    }

    #[test]
    fn density_nonnegative_everywhere() {
        let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 20.0, 17);
        let theta: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 17);
        let phi: nd::Array1<f64> = nd::Array1::linspace(-PI, PI, 17);
        for state in all_states(4) {
            let P = probability_density(&r, &theta, &phi, state).unwrap();
            assert!(P.iter().all(|p| p.is_finite() && *p >= 0.0), "{state}");
        }
    }

    #[test]
    fn radial_probability_peaks() {
        let r: nd::Array1<f64> = nd::Array1::linspace(0.1, 10.0, 100);
        let P = radial_probability_density_arr(&r, 1, 0).unwrap();
        assert!(P.iter().all(|p| *p >= 0.0));
        let rmax = r[argmax(&P).unwrap()];
        assert!(0.5 < rmax && rmax < 1.5);

        assert_relative_eq!(most_probable_radius(1, 0).unwrap(), 1.0, epsilon = 1e-2);
        assert_relative_eq!(most_probable_radius(2, 1).unwrap(), 4.0, epsilon = 5e-2);
        assert_eq!(radial_probability_density(0.0, 1, 0).unwrap(), 0.0);
    }

    #[test]
    fn expectation_values() {
        assert_relative_eq!(expectation_value_r(1, 0).unwrap(), 1.5);
        assert_relative_eq!(expectation_value_r(2, 1).unwrap(), 5.0);
        assert_relative_eq!(expectation_value_r(3, 2).unwrap(), 10.5);
    }

    #[test]
    fn angular_density() {
        assert_relative_eq!(
            angular_probability_density(0.3, 0.2, 0, 0).unwrap(),
            (4.0 * PI).recip(),
            epsilon = 1e-14,
        );
    }

    #[test]
    fn normalization_check() {
        let s1 = QuantumState::new(1, 0, 0).unwrap();
        assert_relative_eq!(verify_normalization(s1, 30.0, 121), 1.0, epsilon = 1e-3);
        let s2 = QuantumState::new(2, 1, 1).unwrap();
        assert_relative_eq!(verify_normalization(s2, 40.0, 121), 1.0, epsilon = 5e-3);
    }
}
