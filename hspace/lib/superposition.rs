//! Coherent superpositions of hydrogen eigenstates.
//!
//! A superposition is an ordered list of [`QuantumState`]s paired with complex
//! coefficients. Apart from [`create_superposition`] and
//! [`decompose_superposition`], every function here normalizes its
//! coefficients before use, so that Σ|*c*<sub>*i*</sub>|² = 1, and never
//! modifies the caller's copy.
//!
//! Energies are reported in electron-volts. Time evolution works in atomic
//! units, with energies converted to Hartrees and time measured in units of
//! ħ/*E*<sub>h</sub>.

use ndarray as nd;
use num_complex::Complex64 as C64;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{ Deserialize, Serialize };
use crate::{
    error::{ LengthError, QuantumNumberError, ShapeError, SuperError },
    state::QuantumState,
    utils::argmax,
    wavefunction::psi_unchecked,
};

pub type SuperResult<T> = Result<T, SuperError>;

/// Scale a set of coefficients by the inverse of their 2-norm.
///
/// The norm is accumulated with `hypot`, so coefficients too small or too
/// large to square are still handled. Returns [`SuperError::ZeroNorm`] if all
/// coefficients are zero or there are none.
pub fn normalize_superposition(coeffs: &[C64]) -> SuperResult<Vec<C64>> {
    let norm: f64 = coeffs.iter().fold(0.0_f64, |acc, c| acc.hypot(c.norm()));
    if norm == 0.0 { return Err(SuperError::ZeroNorm); }
    Ok(coeffs.iter().map(|c| *c / norm).collect())
}

// assumes equal-shaped coordinate arrays and matching lengths
fn sum_states<S, T, U, D, F>(
    states: &[QuantumState],
    coeffs: &[C64],
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
    mut weight: F,
) -> nd::Array<C64, D>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
    F: FnMut(QuantumState, C64) -> C64,
{
    let mut total: nd::Array<C64, D> = nd::Array::zeros(r.raw_dim());
    for (state, c) in states.iter().zip(coeffs) {
        let w = weight(*state, *c);
        let psi = psi_unchecked(r, theta, phi, *state);
        nd::Zip::from(&mut total).and(&psi)
            .for_each(|tk, pk| { *tk += w * *pk; });
    }
    total
}

/// Compute Ψ = Σ *c*<sub>*i*</sub> ψ<sub>*i*</sub> over arrays of spherical
/// coordinates.
///
/// Coefficients are used exactly as given.
pub fn create_superposition<S, T, U, D>(
    states: &[QuantumState],
    coeffs: &[C64],
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
) -> SuperResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    LengthError::check(states, coeffs)?;
    ShapeError::check3(r, theta, phi)?;
    Ok(sum_states(states, coeffs, r, theta, phi, |_, c| c))
}

/// Output of [`calculate_interference`].
#[derive(Clone, Debug)]
pub struct Interference<D: nd::Dimension> {
    /// Coherent probability density |Ψ|².
    pub superposition_prob: nd::Array<f64, D>,
    /// Incoherent sum Σ |*c*<sub>*i*</sub>|² |ψ<sub>*i*</sub>|².
    pub classical_sum: nd::Array<f64, D>,
    /// Difference between the coherent and incoherent densities.
    pub interference: nd::Array<f64, D>,
    /// Σ |interference| / Σ |Ψ|², or 0 if the denominator is 0.
    pub interference_fraction: f64,
}

/// Compare the coherent probability density of a superposition to the
/// incoherent (classical) sum of its components.
pub fn calculate_interference<S, T, U, D>(
    states: &[QuantumState],
    coeffs: &[C64],
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
) -> SuperResult<Interference<D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    LengthError::check(states, coeffs)?;
    ShapeError::check3(r, theta, phi)?;
    let coeffs = normalize_superposition(coeffs)?;
    let mut superposition_prob: nd::Array<f64, D>
        = nd::Array::zeros(r.raw_dim());
    let mut classical_sum: nd::Array<f64, D>
        = nd::Array::zeros(r.raw_dim());
    let mut total: nd::Array<C64, D> = nd::Array::zeros(r.raw_dim());
    for (state, c) in states.iter().zip(&coeffs) {
        let p = c.norm_sqr();
        let psi = psi_unchecked(r, theta, phi, *state);
        nd::Zip::from(&mut total).and(&mut classical_sum).and(&psi)
            .for_each(|tk, ck, qk| {
                *tk += *c * *qk;
                *ck += p * qk.norm_sqr();
            });
    }
    nd::Zip::from(&mut superposition_prob).and(&total)
        .for_each(|pk, tk| { *pk = tk.norm_sqr(); });
    let interference: nd::Array<f64, D>
        = nd::Zip::from(&superposition_prob).and(&classical_sum)
        .map_collect(|s, cl| s - cl);
    let total_prob: f64 = superposition_prob.sum();
    let interference_fraction
        = if total_prob > 0.0 {
            interference.iter().map(|i| i.abs()).sum::<f64>() / total_prob
        } else {
            0.0
        };
    Ok(Interference {
        superposition_prob,
        classical_sum,
        interference,
        interference_fraction,
    })
}

/// Compute Ψ(*t*) = Σ *c*<sub>*i*</sub> ψ<sub>*i*</sub>
/// exp(-*i* *E*<sub>*i*</sub> *t*) for time *t* in atomic units.
///
/// Coefficients are normalized first.
pub fn time_evolution<S, T, U, D>(
    states: &[QuantumState],
    coeffs: &[C64],
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
    time: f64,
) -> SuperResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    LengthError::check(states, coeffs)?;
    ShapeError::check3(r, theta, phi)?;
    let coeffs = normalize_superposition(coeffs)?;
    let psi_t = sum_states(
        states, &coeffs, r, theta, phi,
        |state, c| c * C64::cis(-state.energy_hartree() * time),
    );
    Ok(psi_t)
}

// normalized probabilities |c_i|²
fn probabilities(states: &[QuantumState], coeffs: &[C64])
    -> SuperResult<Vec<f64>>
{
    LengthError::check(states, coeffs)?;
    let coeffs = normalize_superposition(coeffs)?;
    Ok(coeffs.iter().map(|c| c.norm_sqr()).collect())
}

/// Energy expectation value ⟨*E*⟩ = Σ |*c*<sub>*i*</sub>|²
/// *E*<sub>*i*</sub> in electron-volts.
pub fn calculate_expectation_energy(states: &[QuantumState], coeffs: &[C64])
    -> SuperResult<f64>
{
    let probs = probabilities(states, coeffs)?;
    let E: f64
        = states.iter().zip(&probs)
        .map(|(state, p)| p * state.energy_ev())
        .sum();
    Ok(E)
}

/// Energy uncertainty Δ*E* = √(⟨*E*²⟩ - ⟨*E*⟩²) in electron-volts.
///
/// The variance is clamped to 0 from below.
pub fn calculate_uncertainty_energy(states: &[QuantumState], coeffs: &[C64])
    -> SuperResult<f64>
{
    let probs = probabilities(states, coeffs)?;
    let (E, E2)
        = states.iter().zip(&probs)
        .fold((0.0, 0.0), |(E, E2), (state, p)| {
            let En = state.energy_ev();
            (E + p * En, E2 + p * En * En)
        });
    Ok((E2 - E * E).max(0.0).sqrt())
}

/// Purity Σ |*c*<sub>*i*</sub>|⁴ of the normalized coefficients.
///
/// This is 1 for a single nonzero coefficient and less than 1 otherwise.
pub fn calculate_purity(coeffs: &[C64]) -> SuperResult<f64> {
    let coeffs = normalize_superposition(coeffs)?;
    Ok(coeffs.iter().map(|c| c.norm_sqr().powi(2)).sum())
}

/// Return the state with the largest normalized weight |*c*<sub>*i*</sub>|²,
/// along with that weight.
///
/// The first such state is returned on ties.
pub fn get_dominant_state(states: &[QuantumState], coeffs: &[C64])
    -> SuperResult<(QuantumState, f64)>
{
    let probs = probabilities(states, coeffs)?;
    // probabilities are finite and non-empty after normalization
    let k = argmax(&probs).unwrap_or(0);
    Ok((states[k], probs[k]))
}

/// Project a sampled wavefunction onto a set of basis states.
///
/// Each overlap is approximated by the plain sum
/// Σ conj(ψ<sub>*i*</sub>) ψ *r*² sin *θ* over all sample points, without any
/// cell-volume factor, so the results depend on the sampling resolution and
/// are only meaningful relative to each other.
pub fn decompose_superposition<P, S, T, U, D>(
    psi: &nd::ArrayBase<P, D>,
    states: &[QuantumState],
    r: &nd::ArrayBase<S, D>,
    theta: &nd::ArrayBase<T, D>,
    phi: &nd::ArrayBase<U, D>,
) -> SuperResult<Vec<C64>>
where
    P: nd::Data<Elem = C64>,
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ShapeError::check3(r, theta, phi)?;
    ShapeError::check(psi, r)?;
    let weighted: nd::Array<C64, D>
        = nd::Zip::from(psi).and(r).and(theta)
        .map_collect(|&q, &rk, &tk| q * (rk * rk * tk.sin()));
    let overlaps: Vec<C64>
        = states.iter()
        .map(|state| {
            let basis = psi_unchecked(r, theta, phi, *state);
            basis.iter().zip(&weighted)
                .map(|(b, w)| b.conj() * *w)
                .sum()
        })
        .collect();
    Ok(overlaps)
}

/// An ordered collection of states with complex coefficients.
///
/// The numbers of states and coefficients always agree. Coefficients are not
/// normalized on construction; see [`Self::normalized`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSuperposition", into = "RawSuperposition")]
pub struct SuperpositionState {
    states: Vec<QuantumState>,
    coeffs: Vec<C64>,
}

impl SuperpositionState {
    /// Create a new superposition, checking that `states` and `coeffs` have
    /// equal lengths.
    pub fn new(states: Vec<QuantumState>, coeffs: Vec<C64>)
        -> SuperResult<Self>
    {
        LengthError::check(&states, &coeffs)?;
        Ok(Self { states, coeffs })
    }

    /// Create a new superposition from (state, coefficient) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where I: IntoIterator<Item = (QuantumState, C64)>
    {
        let (states, coeffs): (Vec<QuantumState>, Vec<C64>)
            = pairs.into_iter().unzip();
        Self { states, coeffs }
    }

    /// Return a copy of `self` with normalized coefficients.
    pub fn normalized(&self) -> SuperResult<Self> {
        let coeffs = normalize_superposition(&self.coeffs)?;
        Ok(Self { states: self.states.clone(), coeffs })
    }

    /// Get a reference to the states.
    pub fn states(&self) -> &[QuantumState] { &self.states }

    /// Get a reference to the coefficients.
    pub fn coeffs(&self) -> &[C64] { &self.coeffs }

    /// Number of components.
    pub fn len(&self) -> usize { self.states.len() }

    /// Return `true` if there are no components.
    pub fn is_empty(&self) -> bool { self.states.is_empty() }

    /// Iterate over (state, coefficient) pairs.
    pub fn iter(&self)
        -> impl Iterator<Item = (QuantumState, C64)> + '_
    {
        self.states.iter().copied().zip(self.coeffs.iter().copied())
    }

    /// Normalized weights |*c*<sub>*i*</sub>|².
    pub fn probabilities(&self) -> SuperResult<Vec<f64>> {
        probabilities(&self.states, &self.coeffs)
    }

    /// See [`create_superposition`].
    pub fn psi<S, T, U, D>(
        &self,
        r: &nd::ArrayBase<S, D>,
        theta: &nd::ArrayBase<T, D>,
        phi: &nd::ArrayBase<U, D>,
    ) -> SuperResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        create_superposition(&self.states, &self.coeffs, r, theta, phi)
    }

    /// See [`calculate_interference`].
    pub fn interference<S, T, U, D>(
        &self,
        r: &nd::ArrayBase<S, D>,
        theta: &nd::ArrayBase<T, D>,
        phi: &nd::ArrayBase<U, D>,
    ) -> SuperResult<Interference<D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        calculate_interference(&self.states, &self.coeffs, r, theta, phi)
    }

    /// See [`time_evolution`].
    pub fn evolve<S, T, U, D>(
        &self,
        r: &nd::ArrayBase<S, D>,
        theta: &nd::ArrayBase<T, D>,
        phi: &nd::ArrayBase<U, D>,
        time: f64,
    ) -> SuperResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        time_evolution(&self.states, &self.coeffs, r, theta, phi, time)
    }

    /// See [`calculate_expectation_energy`].
    pub fn expectation_energy(&self) -> SuperResult<f64> {
        calculate_expectation_energy(&self.states, &self.coeffs)
    }

    /// See [`calculate_uncertainty_energy`].
    pub fn uncertainty_energy(&self) -> SuperResult<f64> {
        calculate_uncertainty_energy(&self.states, &self.coeffs)
    }

    /// See [`calculate_purity`].
    pub fn purity(&self) -> SuperResult<f64> {
        calculate_purity(&self.coeffs)
    }

    /// See [`get_dominant_state`].
    pub fn dominant_state(&self) -> SuperResult<(QuantumState, f64)> {
        get_dominant_state(&self.states, &self.coeffs)
    }
}

// unchecked serialization proxy
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawSuperposition {
    states: Vec<QuantumState>,
    coeffs: Vec<C64>,
}

impl TryFrom<RawSuperposition> for SuperpositionState {
    type Error = SuperError;

    fn try_from(raw: RawSuperposition) -> Result<Self, Self::Error> {
        Self::new(raw.states, raw.coeffs)
    }
}

impl From<SuperpositionState> for RawSuperposition {
    fn from(sup: SuperpositionState) -> Self {
        Self { states: sup.states, coeffs: sup.coeffs }
    }
}

/// Draw `num_states` uniformly random valid states with principal quantum
/// numbers in `1..=max_n`, paired with normalized coefficients whose real and
/// imaginary parts are drawn from the standard normal distribution.
///
/// States may repeat.
pub fn random_superposition<R>(rng: &mut R, max_n: u32, num_states: usize)
    -> SuperResult<SuperpositionState>
where R: Rng + ?Sized
{
    if max_n < 1 { return Err(QuantumNumberError::BadN(max_n as i32).into()); }
    let states: Vec<QuantumState>
        = (0..num_states)
        .map(|_| {
            let n: i32 = rng.gen_range(1..=max_n as i32);
            let l: i32 = rng.gen_range(0..n);
            let m: i32 = rng.gen_range(-l..=l);
            QuantumState::new(n, l, m)
        })
        .collect::<Result<_, _>>()?;
    let coeffs: Vec<C64>
        = (0..num_states)
        .map(|_| C64::new(rng.sample(StandardNormal), rng.sample(StandardNormal)))
        .collect();
    let coeffs = normalize_superposition(&coeffs)?;
    SuperpositionState::new(states, coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use approx::assert_relative_eq;
    use rand::{ SeedableRng, rngs::StdRng };

    fn st(n: i32, l: i32, m: i32) -> QuantumState {
        QuantumState::new(n, l, m).unwrap()
    }

    fn c(re: f64, im: f64) -> C64 { C64::new(re, im) }

    // (r, θ, φ) mesh over a ball, ij-indexed
    fn spherical_mesh(r_max: f64, nr: usize, na: usize)
        -> (nd::Array3<f64>, nd::Array3<f64>, nd::Array3<f64>)
    {
        let r: nd::Array1<f64> = nd::Array1::linspace(0.0, r_max, nr);
        let t: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, na);
        let p: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0 * PI, na);
        let shape = (nr, na, na);
        (
            nd::Array3::from_shape_fn(shape, |(i, _, _)| r[i]),
            nd::Array3::from_shape_fn(shape, |(_, j, _)| t[j]),
            nd::Array3::from_shape_fn(shape, |(_, _, k)| p[k]),
        )
    }

    #[test]
    fn normalization() {
        let cn = normalize_superposition(&[c(1.0, 0.0), c(1.0, 0.0)]).unwrap();
        let total: f64 = cn.iter().map(|ck| ck.norm_sqr()).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert_relative_eq!(cn[0].re, 0.5_f64.sqrt(), epsilon = 1e-12);

        let cn = normalize_superposition(&[c(3.0, 0.0), c(0.0, 4.0)]).unwrap();
        assert_relative_eq!(cn[1].im, 0.8, epsilon = 1e-12);

        assert!(matches!(
            normalize_superposition(&[c(0.0, 0.0), c(0.0, 0.0)]),
            Err(SuperError::ZeroNorm),
        ));
        assert!(matches!(normalize_superposition(&[]), Err(SuperError::ZeroNorm)));
    }

    #[test]
    fn normalization_extreme_magnitudes() {
        let cn = normalize_superposition(&[c(1e-200, 0.0), c(0.0, 1e-200)])
            .unwrap();
        assert_relative_eq!(cn[0].re, 0.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(cn[1].im, 0.5_f64.sqrt(), epsilon = 1e-12);

        let cn = normalize_superposition(&[c(1e200, 0.0), c(0.0, 0.0)]).unwrap();
        assert_relative_eq!(cn[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            calculate_purity(&[c(1e200, 0.0), c(0.0, 0.0)]).unwrap(),
            1.0,
            epsilon = 1e-12,
        );
        assert_relative_eq!(
            calculate_purity(&[c(1e-200, 0.0), c(1e-200, 0.0)]).unwrap(),
            0.5,
            epsilon = 1e-12,
        );
    }

    #[test]
    fn purity() {
        assert_relative_eq!(
            calculate_purity(&[c(1.0, 0.0), c(0.0, 0.0)]).unwrap(), 1.0);
        let p = calculate_purity(&[c(1.0, 0.0), c(1.0, 0.0)]).unwrap();
        assert!(p < 1.0);
        assert_relative_eq!(p, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn energies() {
        let states = [st(1, 0, 0), st(2, 0, 0)];
        let coeffs = [c(1.0, 0.0), c(1.0, 0.0)];
        let E1 = st(1, 0, 0).energy_ev();
        let E2 = st(2, 0, 0).energy_ev();
        let E = calculate_expectation_energy(&states, &coeffs).unwrap();
        assert!(E1 < E && E < E2);
        assert_relative_eq!(E, (E1 + E2) / 2.0, epsilon = 1e-9);

        let dE = calculate_uncertainty_energy(&states, &coeffs).unwrap();
        assert_relative_eq!(dE, (E2 - E1) / 2.0, epsilon = 1e-9);

        let dE = calculate_uncertainty_energy(&[st(3, 1, 0)], &[c(0.0, 2.0)])
            .unwrap();
        assert_relative_eq!(dE, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn dominant_state() {
        let states = [st(1, 0, 0), st(2, 1, 1)];
        let (s, p)
            = get_dominant_state(&states, &[c(0.6, 0.0), c(0.0, 0.8)]).unwrap();
        assert_eq!(s, st(2, 1, 1));
        assert_relative_eq!(p, 0.64, epsilon = 1e-12);

        let (s, _)
            = get_dominant_state(&states, &[c(1.0, 0.0), c(0.0, 1.0)]).unwrap();
        assert_eq!(s, st(1, 0, 0));
    }

    #[test]
    fn length_mismatch() {
        let r = nd::array![1.0, 2.0];
        let t = nd::array![0.5, 0.5];
        let p = nd::array![0.0, 0.0];
        let states = [st(1, 0, 0), st(2, 0, 0)];
        assert!(matches!(
            create_superposition(&states, &[c(1.0, 0.0)], &r, &t, &p),
            Err(SuperError::Length(_)),
        ));
        assert!(matches!(
            calculate_expectation_energy(&states, &[c(1.0, 0.0)]),
            Err(SuperError::Length(_)),
        ));
        assert!(matches!(
            SuperpositionState::new(states.to_vec(), vec![]),
            Err(SuperError::Length(_)),
        ));
        let short = nd::array![0.0];
        assert!(matches!(
            create_superposition(&states, &[c(1.0, 0.0); 2], &r, &t, &short),
            Err(SuperError::Shape(_)),
        ));
    }

    #[test]
    fn single_component_matches_eigenstate() {
        let (r, t, p) = spherical_mesh(10.0, 8, 6);
        let s = st(3, 2, -1);
        let psi = crate::wavefunction::hydrogen_wave_function(&r, &t, &p, s)
            .unwrap();
        let sup = create_superposition(&[s], &[c(1.0, 0.0)], &r, &t, &p)
            .unwrap();
        nd::Zip::from(&psi).and(&sup)
            .for_each(|a, b| { assert_relative_eq!((*a - *b).norm(), 0.0); });
    }

    #[test]
    fn interference_terms() {
        let (r, t, p) = spherical_mesh(10.0, 10, 8);
        let states = [st(2, 0, 0), st(2, 1, 0)];
        let res = calculate_interference(
            &states, &[c(1.0, 0.0), c(1.0, 0.0)], &r, &t, &p).unwrap();
        nd::Zip::from(&res.superposition_prob).and(&res.classical_sum)
            .and(&res.interference)
            .for_each(|s, cl, i| {
                assert_relative_eq!(cl + i, *s, epsilon = 1e-14);
            });
        assert!(res.interference_fraction > 0.0);

        // a state added to itself interferes fully constructively
        let s = st(1, 0, 0);
        let res = calculate_interference(
            &[s, s], &[c(1.0, 0.0), c(1.0, 0.0)], &r, &t, &p).unwrap();
        assert_relative_eq!(res.interference_fraction, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn time_evolution_phases() {
        let (r, t, p) = spherical_mesh(15.0, 10, 8);
        let states = [st(1, 0, 0), st(2, 0, 0)];
        let coeffs = [c(1.0, 0.0), c(1.0, 0.0)];

        let psi0 = time_evolution(&states, &coeffs, &r, &t, &p, 0.0).unwrap();
        let norm = normalize_superposition(&coeffs).unwrap();
        let sup = create_superposition(&states, &norm, &r, &t, &p).unwrap();
        nd::Zip::from(&psi0).and(&sup)
            .for_each(|a, b| { assert_relative_eq!((*a - *b).norm(), 0.0, epsilon = 1e-14); });

        // half a beat period flips the sign of the cross term
        let dE = states[1].energy_hartree() - states[0].energy_hartree();
        let psih
            = time_evolution(&states, &coeffs, &r, &t, &p, PI / dE).unwrap();
        let classical
            = calculate_interference(&states, &coeffs, &r, &t, &p).unwrap()
            .classical_sum;
        nd::Zip::from(&psi0).and(&psih).and(&classical)
            .for_each(|a, b, cl| {
                assert_relative_eq!(
                    a.norm_sqr() + b.norm_sqr(), 2.0 * cl, epsilon = 1e-12);
            });

        // stationary states have time-independent densities
        let psi1
            = time_evolution(&states[..1], &coeffs[..1], &r, &t, &p, 7.3)
            .unwrap();
        let psi2
            = time_evolution(&states[..1], &coeffs[..1], &r, &t, &p, 0.0)
            .unwrap();
        nd::Zip::from(&psi1).and(&psi2)
            .for_each(|a, b| {
                assert_relative_eq!(a.norm_sqr(), b.norm_sqr(), epsilon = 1e-12);
            });
    }

    #[test]
    fn decomposition_overlaps() {
        let (r, t, p) = spherical_mesh(20.0, 200, 40);
        let s1 = st(1, 0, 0);
        let psi = crate::wavefunction::hydrogen_wave_function(&r, &t, &p, s1)
            .unwrap();
        let basis = [s1, st(2, 0, 0), st(2, 1, 0)];
        let overlaps = decompose_superposition(&psi, &basis, &r, &t, &p)
            .unwrap();
        assert_eq!(overlaps.len(), 3);
        assert!(overlaps[0].re > 0.0);
        assert!(overlaps[0].im.abs() < 1e-9 * overlaps[0].re);
        assert!(overlaps[1].norm() < 1e-2 * overlaps[0].norm());
        assert!(overlaps[2].norm() < 1e-2 * overlaps[0].norm());
    }

    #[test]
    fn superposition_state_methods() {
        let sup = SuperpositionState::from_pairs([
            (st(1, 0, 0), c(2.0, 0.0)),
            (st(2, 1, -1), c(0.0, 2.0)),
        ]);
        assert_eq!(sup.len(), 2);
        assert!(!sup.is_empty());
        let normed = sup.normalized().unwrap();
        let total: f64 = normed.coeffs().iter().map(|ck| ck.norm_sqr()).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert_eq!(normed.states(), sup.states());
        assert_relative_eq!(sup.purity().unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            sup.expectation_energy().unwrap(),
            normed.expectation_energy().unwrap(),
            epsilon = 1e-12,
        );
        let probs = sup.probabilities().unwrap();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_eq!(sup.dominant_state().unwrap().0, st(1, 0, 0));
        assert_eq!(sup.iter().count(), 2);
    }

    #[test]
    fn random_states() {
        let mut rng = StdRng::seed_from_u64(10546);
        let sup = random_superposition(&mut rng, 3, 5).unwrap();
        assert_eq!(sup.len(), 5);
        assert!(sup.states().iter().all(|s| (1..=3).contains(&s.n())));
        let total: f64 = sup.coeffs().iter().map(|ck| ck.norm_sqr()).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);

        assert!(matches!(
            random_superposition(&mut rng, 0, 3),
            Err(SuperError::QuantumNumber(QuantumNumberError::BadN(0))),
        ));
        assert!(matches!(
            random_superposition(&mut rng, 2, 0),
            Err(SuperError::ZeroNorm),
        ));
    }
}
