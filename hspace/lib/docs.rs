//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Special functions](#special-functions)
//! - [Sampling](#sampling)
//! - [Superpositions](#superpositions)
//! - [Uncertainties](#uncertainties)
//!
//! # Background
//! The hydrogen atom is one of the few systems for which the time-independent
//! Schrödinger equation (TISE) can be solved exactly. For an electron bound to
//! a fixed proton by the Coulomb potential,
//! ```text
//!    ħ²                e²
//! - --- ∇² ψ(r) - ---------- ψ(r) = E ψ(r)
//!   2 mₑ          4π ε₀ |r|
//! ```
//! and the spherical symmetry of the potential allows the solutions to be
//! separated as *ψ*(*r*, *θ*, *φ*) = *R*(*r*) *Y*(*θ*, *φ*). The angular part
//! is a spherical harmonic *Y*<sub>*l*</sub><sup>*m*</sup>, and the radial
//! part satisfies
//! ```text
//!    ħ² 1  ∂     ∂R      e²          l (l + 1) ħ²
//! - --- -- -- (r² --) - -------- R + ------------ R = E R
//!   2 mₑ r² ∂r    ∂r    4π ε₀ r         2 mₑ r²
//! ```
//! Requiring *R* to vanish at infinity restricts the energy to the discrete
//! set
//! ```text
//!         Ry
//! E(n) = - --,  n ∊ {1, 2, ...}
//!          n²
//! ```
//! with *Ry* ≈ 13.6057 eV, and restricts the quantum numbers to
//! ```text
//! n ≥ 1
//! 0 ≤ l < n
//! -l ≤ m ≤ l
//! ```
//! Every state with the same *n* shares the same energy, giving an
//! *n*²-fold degeneracy (neglecting spin). The bound-state solutions are[^1]
//! ```text
//! ψ(r, θ, φ) = R[n, l](r) Y[l, m](θ, φ)
//!
//!                   (2/n)³ (n - l - 1)!         l            2l+1
//! R[n, l](r) = √[ ------------------- ] e^(-ρ/2) ρ  L[n - l - 1](ρ)
//!                     2n (n + l)!
//! ```
//! where ρ = 2*r*/*n* and *L*<sub>*k*</sub><sup>*α*</sup> is a generalized
//! Laguerre polynomial. All wavefunctions are normalized over all space,
//! ```text
//! ∫ |ψ|² r² sin θ dr dθ dφ = 1
//! ```
//! which can be checked numerically with
//! [`verify_normalization`][crate::wavefunction::verify_normalization].
//!
//! # Units
//! All computations in this crate use atomic units, where *ħ* = *m*ₑ = *e* =
//! 4π*ε*₀ = 1. Lengths are then measured in Bohr radii,
//! ```text
//!      4π ε₀ ħ²
//! a₀ = -------- ≈ 5.29177 × 10⁻¹¹ m
//!       mₑ e²
//! ```
//! energies in Hartrees, *E*ₕ = 2 *Ry* ≈ 27.2114 eV, and times in units of
//! ħ/*E*ₕ ≈ 2.41888 × 10⁻¹⁷ s. For convenience, energies are reported in
//! electron-volts at the public boundary; the only place Hartrees appear is in
//! the phase factors of [time evolution](#superpositions).
//!
//! Items in [`units`][crate::units] are provided to convert between atomic
//! and SI units, and between the common spectroscopic units.
//!
//! # Special functions
//! Both families of orthogonal polynomials needed here are evaluated by their
//! three-term recurrences, which are stable in the forward direction for the
//! arguments that occur. The generalized Laguerre polynomials satisfy
//! ```text
//! L[0](x) = 1
//! L[1](x) = 1 + α - x
//! (k + 1) L[k + 1](x) = (2k + 1 + α - x) L[k](x) - (k + α) L[k - 1](x)
//! ```
//! and the associated Legendre functions (including the Condon-Shortley phase
//! (-1)<sup>*m*</sup>) satisfy
//! ```text
//! P[m, m](x) = (-1)^m (2m - 1)!! (1 - x²)^(m/2)
//! P[m + 1, m](x) = x (2m + 1) P[m, m](x)
//! (l - m) P[l, m](x) = x (2l - 1) P[l - 1, m](x) - (l + m - 1) P[l - 2, m](x)
//! ```
//! The complex spherical harmonics are then
//! ```text
//!                  2l + 1 (l - m)!
//! Y[l, m](θ, φ) = √[------ -------] P[l, m](cos θ) e^(i m φ)
//!                    4π   (l + m)!
//! ```
//! for *m* ≥ 0, with *Y*<sub>*l*</sub><sup>-*m*</sup> = (-1)<sup>*m*</sup>
//! conj(*Y*<sub>*l*</sub><sup>*m*</sup>).
//!
//! The factorial ratios appearing in both normalization constants overflow
//! `f64` quickly when computed directly, so they are instead computed as
//! differences of log-factorials and exponentiated at the end.
//!
//! # Sampling
//! Orbitals are sampled on uniform Cartesian grids spanning a cube
//! \[-*L*, *L*\]³ centered on the nucleus. Each grid point is converted to
//! spherical coordinates,
//! ```text
//! r = √(x² + y² + z²)
//! θ = arccos(z / r)
//! φ = atan2(y, x)
//! ```
//! where a point exactly at the origin is assigned a small radius
//! (10⁻¹⁰ *a*₀) so that the polar angle is defined. The density is finite at
//! the origin for every state, so this only affects which branch of *Y* is
//! evaluated there.
//!
//! Integrals over a grid are approximated as plain sums weighted by the cell
//! volume *δV* = *δx*³; this is adequate when the grid spacing is small
//! relative to the scale *n*² *a*₀ of the orbital and the cube contains most
//! of its density.
//!
//! # Superpositions
//! Since the TISE is linear, any normalized combination
//! ```text
//! Ψ = Σ c[i] ψ[i],  Σ |c[i]|² = 1
//! ```
//! is also a valid state, though not in general an eigenstate. Its density
//! differs from the classical mixture Σ |*c*<sub>*i*</sub>|²
//! |*ψ*<sub>*i*</sub>|² by the cross terms
//! ```text
//! |Ψ|² - Σ |c[i]|² |ψ[i]|² = Σ_(i ≠ j) conj(c[i] ψ[i]) c[j] ψ[j]
//! ```
//! which encode the interference between components. Each eigenstate evolves
//! in time only by a phase,
//! ```text
//! Ψ(t) = Σ c[i] ψ[i] e^(-i E[i] t)
//! ```
//! so that the cross terms between states of different energy oscillate at
//! the Bohr frequencies (*E*<sub>*i*</sub> - *E*<sub>*j*</sub>)/ħ while the
//! classical mixture is stationary. Energy statistics follow directly from the
//! weights,
//! ```text
//! ⟨E⟩ = Σ |c[i]|² E[i]
//! ΔE = √(⟨E²⟩ - ⟨E⟩²)
//! ```
//!
//! # Uncertainties
//! Position moments are estimated from the sampled density as
//! ```text
//! ⟨x^k⟩ ≈ Σ x^k ρ(x, y, z) δV / Σ ρ δV
//! ```
//! For the momentum spread, rather than transforming to momentum space, the
//! rough estimate Δ*p* ≈ ħ/Δ*x* is used. This saturates at a Heisenberg
//! product of exactly 1 (in units of ħ), compared to the true lower bound of
//! 1/2; it indicates the expected scale rather than a rigorous value.
//!
//! [^1]: D. J. Griffiths, *Introduction to Quantum Mechanics*, 2nd ed.
//! (Pearson, 2005), §4.2.
