#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for evaluating the
//! analytical bound-state solutions of the hydrogen atom over discretized
//! three-dimensional grids, along with a handful of derived observables.
//!
//! Provides the following:
//! - Wavefunctions:
//!     - Radial functions *R*<sub>*nl*</sub>(*r*) via generalized Laguerre
//!       polynomials[^1]
//!     - Complex spherical harmonics *Y*<sub>*l*</sub><sup>*m*</sup>(*θ*, *φ*)
//!       with the Condon-Shortley phase
//!     - Products of the two and their probability densities
//! - Sampling:
//!     - Uniform Cartesian grids and planar cross sections
//!     - Grid statistics and isosurface levels
//! - Superpositions:
//!     - Coherent sums, interference terms, and free time evolution
//!     - Energy expectation values, uncertainties, and purities
//! - Measurements:
//!     - Point probes, box-region integrals, and position/momentum uncertainty
//!       estimates
//!
//! All lengths are given in Bohr radii and all energies in electron-volts
//! unless noted otherwise. See [`docs`] for theoretical background.
//!
//! [^1]: D. J. Griffiths, *Introduction to Quantum Mechanics*, 2nd ed. (Pearson,
//! 2005), §4.2.

pub mod config;
pub mod error;
pub mod grid;
pub mod measure;
pub mod special;
pub mod state;
pub mod superposition;
pub mod units;
pub mod utils;
pub mod wavefunction;

pub mod docs;

pub use state::QuantumState;

/// Radius substituted for any radial coordinate at (or numerically at) the
/// origin.
pub const ORIGIN_EPSILON: f64 = 1e-10;

pub(crate) const DEF_GRID_POINTS: usize = 100;
pub(crate) const DEF_SPATIAL_EXTENT: f64 = 30.0;
pub(crate) const DEF_ISO_LEVEL: f64 = 0.01;
pub(crate) const DEF_NORM_RMAX: f64 = 50.0;
pub(crate) const DEF_NORM_POINTS: usize = 100;
pub(crate) const DEF_RADIAL_SAMPLES: usize = 1000;
pub(crate) const DEF_LINE_SAMPLES: usize = 100;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
