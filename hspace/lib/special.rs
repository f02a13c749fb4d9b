//! Special functions needed for the hydrogen eigenstates, evaluated via their
//! standard three-term recurrences.
//!
//! Factorials are also provided in the log domain so that ratios of large
//! factorials (e.g. in normalization constants) stay representable.

use std::f64::consts::PI;

/// Natural logarithm of `n!`.
pub fn ln_factorial(n: u32) -> f64 {
    (2..=n).map(|k| f64::from(k).ln()).sum()
}

/// `n!` as a floating-point number.
///
/// Overflows to `f64::INFINITY` for `n > 170`; use [`ln_factorial`] for ratios.
pub fn factorial(n: u32) -> f64 {
    (2..=n).map(f64::from).product()
}

/// Generalized (associated) Laguerre polynomial
/// *L*<sub>`n`</sub><sup>(`alpha`)</sup>(`x`).
///
/// Uses the upward recurrence
/// ```text
/// k L[k] = (2k - 1 + α - x) L[k - 1] - (k - 1 + α) L[k - 2]
/// ```
/// with `L[0] = 1` and `L[1] = 1 + α - x`. Overflows for large `x` or `n`;
/// see [`laguerre_scaled`].
pub fn laguerre(x: f64, n: u32, alpha: f64) -> f64 {
    let (v, ln_scale) = laguerre_scaled(x, n, alpha);
    v * ln_scale.exp()
}

/// [`laguerre`] as a pair `(v, s)` such that the polynomial equals
/// `v · exp(s)`.
///
/// The two most recent terms of the recurrence are rescaled to magnitude at
/// most 1 before every step, so `v` stays finite for any finite `x`.
pub fn laguerre_scaled(x: f64, n: u32, alpha: f64) -> (f64, f64) {
    if n == 0 { return (1.0, 0.0); }
    let mut ln_scale: f64 = 0.0;
    let mut lkm2: f64 = 1.0;
    let mut lkm1: f64 = 1.0 + alpha - x;
    for k in 2..=n {
        let big = lkm1.abs().max(lkm2.abs());
        if big > 1.0 {
            lkm1 /= big;
            lkm2 /= big;
            ln_scale += big.ln();
        }
        let k = f64::from(k);
        let lk
            = ((2.0 * k - 1.0 + alpha - x) * lkm1 - (k - 1.0 + alpha) * lkm2)
            / k;
        lkm2 = lkm1;
        lkm1 = lk;
    }
    (lkm1, ln_scale)
}

/// Legendre polynomial *P*<sub>`l`</sub>(`x`).
pub fn legendre(x: f64, l: u32) -> f64 {
    assoc_legendre(x, l, 0)
}

/// Associated Legendre function *P*<sub>`l`</sub><sup>`m`</sup>(`x`) for
/// `0 ≤ m ≤ l`, including the Condon-Shortley phase (-1)<sup>*m*</sup>.
///
/// Returns 0 for `m > l`. Starts from the closed form
/// ```text
/// P[m, m](x) = (-1)^m (2m - 1)!! (1 - x²)^(m/2)
/// ```
/// and recurses upward in `l`. Values grow like (2*m*)!/(2<sup>*m*</sup>
/// *m*!), so the result overflows for *m* beyond roughly 150; use
/// [`assoc_legendre_normed`] there.
pub fn assoc_legendre(x: f64, l: u32, m: u32) -> f64 {
    if m > l { return 0.0; }
    let somx2 = ((1.0 - x) * (1.0 + x)).max(0.0).sqrt();
    let mut pmm: f64 = 1.0;
    let mut fact: f64 = 1.0;
    for _ in 0..m {
        pmm *= -fact * somx2;
        fact += 2.0;
    }
    if l == m { return pmm; }
    let mut pmmp1 = x * f64::from(2 * m + 1) * pmm;
    if l == m + 1 { return pmmp1; }
    let mf = f64::from(m);
    let mut pll: f64 = pmmp1;
    for ll in (m + 2)..=l {
        let llf = f64::from(ll);
        pll = (x * (2.0 * llf - 1.0) * pmmp1 - (llf + mf - 1.0) * pmm)
            / (llf - mf);
        pmm = pmmp1;
        pmmp1 = pll;
    }
    pll
}

/// Associated Legendre function with the spherical-harmonic normalization
/// folded in,
/// ```text
/// √[ (2l + 1)/(4π) (l - m)!/(l + m)! ] P[l, m](x)
/// ```
/// for `0 ≤ m ≤ l`, including the Condon-Shortley phase.
///
/// Returns 0 for `m > l`. The normalization is carried through every step of
/// the recurrence, so the result is finite for all `l` and `m`.
pub fn assoc_legendre_normed(x: f64, l: u32, m: u32) -> f64 {
    if m > l { return 0.0; }
    let omx2 = ((1.0 - x) * (1.0 + x)).max(0.0);
    let mut pmm: f64 = 1.0;
    let mut fact: f64 = 1.0;
    for _ in 0..m {
        pmm *= omx2 * fact / (fact + 1.0);
        fact += 2.0;
    }
    pmm = (f64::from(2 * m + 1) * pmm / (4.0 * PI)).sqrt();
    if m % 2 == 1 { pmm = -pmm; }
    if l == m { return pmm; }
    let mut oldfact = f64::from(2 * m + 3).sqrt();
    let mut pmmp1 = x * oldfact * pmm;
    if l == m + 1 { return pmmp1; }
    let mf = f64::from(m);
    let mut pll: f64 = pmmp1;
    for ll in (m + 2)..=l {
        let llf = f64::from(ll);
        let fact
            = ((4.0 * llf * llf - 1.0) / (llf * llf - mf * mf)).sqrt();
        pll = (x * pmmp1 - pmm / oldfact) * fact;
        oldfact = fact;
        pmm = pmmp1;
        pmmp1 = pll;
    }
    pll
}
