//! Derived measurements on sampled orbitals.
//!
//! Point probes and line profiles evaluate the wavefunction analytically at
//! the requested coordinates; region integrals and uncertainty estimates work
//! from the density already sampled on an [`OrbitalGrid`].

use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    error::MeasureError,
    grid::OrbitalGrid,
    state::QuantumState,
    units::hbar,
    utils::to_spherical,
    wavefunction::{ density, expectation_value_r, psi },
};

pub type MeasureResult<T> = Result<T, MeasureError>;

/// Minimum Heisenberg product Δ*x* Δ*p* in units of ħ.
pub const HEISENBERG_MINIMUM: f64 = 0.5;

/// A point in Cartesian coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A point in spherical coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

/// Output of [`measure_probability_at_point`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointMeasurement {
    /// Probe location as given.
    pub coordinates: Cartesian,
    /// Probe location in spherical coordinates; *r* is never 0.
    pub spherical: Spherical,
    /// Wavefunction value.
    pub wave_function: C64,
    pub psi_real: f64,
    pub psi_imag: f64,
    pub psi_magnitude: f64,
    /// |ψ|²
    pub probability_density: f64,
    /// Probed state.
    pub state: QuantumState,
}

/// Evaluate the wavefunction of the grid's state at a single Cartesian point.
///
/// The value is computed directly rather than interpolated from the grid, so
/// the point need not lie on, or even inside, the grid.
pub fn measure_probability_at_point(
    grid: &OrbitalGrid,
    x: f64,
    y: f64,
    z: f64,
) -> MeasureResult<PointMeasurement>
{
    MeasureError::check_point(x, y, z)?;
    let state = grid.get_state();
    let (r, theta, phi) = to_spherical(x, y, z);
    let q = psi(state, r, theta, phi);
    Ok(PointMeasurement {
        coordinates: Cartesian { x, y, z },
        spherical: Spherical { r, theta, phi },
        wave_function: q,
        psi_real: q.re,
        psi_imag: q.im,
        psi_magnitude: q.norm(),
        probability_density: q.norm_sqr(),
        state,
    })
}

/// Output of [`calculate_region_probability`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionMeasurement {
    /// Σ ρ d*V* over the region.
    pub total_probability: f64,
    /// Number of points in the region times d*V*.
    pub region_volume: f64,
    /// Number of grid points in the region.
    pub num_points: usize,
    /// Mean density in the region, or 0 if the region is empty.
    pub average_density: f64,
    /// Maximum density in the region, or 0 if the region is empty.
    pub max_density: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub z_range: (f64, f64),
}

/// Integrate the sampled density over an axis-aligned box with inclusive
/// bounds `(min, max)` on each axis.
///
/// A box with `min > max` on any axis simply contains no points.
pub fn calculate_region_probability(
    grid: &OrbitalGrid,
    x_range: (f64, f64),
    y_range: (f64, f64),
    z_range: (f64, f64),
) -> MeasureResult<RegionMeasurement>
{
    MeasureError::check_range('x', x_range)?;
    MeasureError::check_range('y', y_range)?;
    MeasureError::check_range('z', z_range)?;
    let inside = |v: f64, range: (f64, f64)| range.0 <= v && v <= range.1;
    let (sum, max, count)
        = nd::Zip::from(grid.get_x()).and(grid.get_y()).and(grid.get_z())
        .and(grid.get_prob_density())
        .fold(
            (0.0, f64::NEG_INFINITY, 0_usize),
            |(sum, max, count), &x, &y, &z, &p| {
                if inside(x, x_range) && inside(y, y_range) && inside(z, z_range) {
                    (sum + p, max.max(p), count + 1)
                } else {
                    (sum, max, count)
                }
            },
        );
    let dV = grid.volume_element();
    let (average_density, max_density)
        = if count > 0 { (sum / count as f64, max) } else { (0.0, 0.0) };
    log::debug!(
        "measure::calculate_region_probability: {} of {} points in region",
        count, grid.get_prob_density().len(),
    );
    Ok(RegionMeasurement {
        total_probability: sum * dV,
        region_volume: count as f64 * dV,
        num_points: count,
        average_density,
        max_density,
        x_range,
        y_range,
        z_range,
    })
}

/// Standard deviations of position, in Bohr radii.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionUncertainty {
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_z: f64,
    pub delta_r: f64,
}

/// Momentum spreads estimated as ħ/Δ*x*, with ħ in J·s and Δ*x* in Bohr radii
/// (J·s per Bohr radius).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MomentumUncertainty {
    pub delta_px: f64,
    pub delta_py: f64,
    pub delta_pz: f64,
}

/// Heisenberg products Δ*x* Δ*p*/ħ, alongside the theoretical minimum.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeisenbergProducts {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub minimum: f64,
}

/// Position expectation values; `r` is the analytical ⟨*r*⟩.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectationValues {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub r: f64,
}

/// Output of [`uncertainty_calculator`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyMeasurement {
    pub position: PositionUncertainty,
    pub momentum: MomentumUncertainty,
    pub heisenberg: HeisenbergProducts,
    pub expectation: ExpectationValues,
}

// Δp = ħ/Δ and the product Δ Δp / ħ; both infinite for vanishing Δ
fn momentum_spread(delta: f64, axis: char) -> (f64, f64) {
    if delta > 0.0 {
        let dp = hbar / delta;
        (dp, delta * dp / hbar)
    } else {
        log::warn!(
            "measure::uncertainty_calculator: zero spread along {}; \
            momentum spread is unbounded",
            axis,
        );
        (f64::INFINITY, f64::INFINITY)
    }
}

/// Estimate position and momentum uncertainties from the sampled density.
///
/// Position moments are computed as sums over the grid weighted by the volume
/// element, with the density rescaled by its total grid probability. Δ*r*
/// combines the analytical ⟨*r*⟩ with the grid estimate of ⟨*r*²⟩.
///
/// Momentum spreads use the rough estimate Δ*p* = ħ/Δ*x* rather than a
/// momentum-space calculation, so every finite Heisenberg product is exactly
/// 1.
pub fn uncertainty_calculator(grid: &OrbitalGrid)
    -> MeasureResult<UncertaintyMeasurement>
{
    let state = grid.get_state();
    let dV = grid.volume_element();
    let prob = grid.get_prob_density();
    let total_prob = prob.sum() * dV;
    let scale
        = if total_prob > 0.0 {
            dV / total_prob
        } else {
            log::warn!(
                "measure::uncertainty_calculator: zero total probability on \
                grid; moments are unnormalized"
            );
            dV
        };
    // [x, x², y, y², z, z², r²]
    let moments: [f64; 7]
        = nd::Zip::from(grid.get_x()).and(grid.get_y()).and(grid.get_z())
        .and(grid.get_r()).and(prob)
        .fold([0.0; 7], |mut acc, &x, &y, &z, &r, &p| {
            acc[0] += x * p;
            acc[1] += x * x * p;
            acc[2] += y * p;
            acc[3] += y * y * p;
            acc[4] += z * p;
            acc[5] += z * z * p;
            acc[6] += r * r * p;
            acc
        })
        .map(|m| m * scale);
    let spread = |avg: f64, avg2: f64| (avg2 - avg * avg).max(0.0).sqrt();
    let delta_x = spread(moments[0], moments[1]);
    let delta_y = spread(moments[2], moments[3]);
    let delta_z = spread(moments[4], moments[5]);
    let r_avg = expectation_value_r(state.n(), state.l())?;
    let delta_r = spread(r_avg, moments[6]);

    let (delta_px, hx) = momentum_spread(delta_x, 'x');
    let (delta_py, hy) = momentum_spread(delta_y, 'y');
    let (delta_pz, hz) = momentum_spread(delta_z, 'z');
    Ok(UncertaintyMeasurement {
        position: PositionUncertainty { delta_x, delta_y, delta_z, delta_r },
        momentum: MomentumUncertainty { delta_px, delta_py, delta_pz },
        heisenberg: HeisenbergProducts {
            x: hx,
            y: hy,
            z: hz,
            minimum: HEISENBERG_MINIMUM,
        },
        expectation: ExpectationValues {
            x: moments[0],
            y: moments[2],
            z: moments[4],
            r: r_avg,
        },
    })
}

/// Output of [`distance_ruler`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineProfile {
    /// Euclidean distance between the endpoints.
    pub distance: f64,
    pub point1: (f64, f64, f64),
    pub point2: (f64, f64, f64),
    /// Sample coordinates along the segment, endpoints included.
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// Density at each sample.
    pub probability_profile: Vec<f64>,
    pub average_probability: f64,
    pub max_probability: f64,
}

/// Sample the density of the grid's state at `num_points` evenly spaced
/// points along the segment from `point1` to `point2`.
pub fn distance_ruler(
    grid: &OrbitalGrid,
    point1: (f64, f64, f64),
    point2: (f64, f64, f64),
    num_points: usize,
) -> MeasureResult<LineProfile>
{
    MeasureError::check_point(point1.0, point1.1, point1.2)?;
    MeasureError::check_point(point2.0, point2.1, point2.2)?;
    if num_points < 2 { return Err(MeasureError::BadSamples(num_points)); }
    let state = grid.get_state();
    let (x1, y1, z1) = point1;
    let (x2, y2, z2) = point2;
    let distance
        = (x2 - x1).hypot(y2 - y1).hypot(z2 - z1);
    let t: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, num_points);
    let x: Vec<f64> = t.iter().map(|tk| x1 + tk * (x2 - x1)).collect();
    let y: Vec<f64> = t.iter().map(|tk| y1 + tk * (y2 - y1)).collect();
    let z: Vec<f64> = t.iter().map(|tk| z1 + tk * (z2 - z1)).collect();
    let probability_profile: Vec<f64>
        = x.iter().zip(&y).zip(&z)
        .map(|((xk, yk), zk)| {
            let (r, theta, phi) = to_spherical(*xk, *yk, *zk);
            density(state, r, theta, phi)
        })
        .collect();
    let average_probability
        = probability_profile.iter().sum::<f64>() / num_points as f64;
    let max_probability
        = probability_profile.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(LineProfile {
        distance,
        point1,
        point2,
        x,
        y,
        z,
        probability_profile,
        average_probability,
        max_probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use approx::assert_relative_eq;
    use crate::grid::generate_orbital_grid;

    #[test]
    fn point_probe() {
        let grid = generate_orbital_grid(1, 0, 0, 10, 5.0).unwrap();
        let m = measure_probability_at_point(&grid, 1.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(m.probability_density, (-2.0_f64).exp() / PI, epsilon = 1e-12);
        assert_relative_eq!(m.psi_magnitude.powi(2), m.probability_density, epsilon = 1e-14);
        assert_relative_eq!(m.psi_imag, 0.0);
        assert_relative_eq!(m.spherical.r, 1.0);
        assert_relative_eq!(m.spherical.theta, PI / 2.0);
        assert_eq!(m.state, grid.get_state());

        let m = measure_probability_at_point(&grid, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(m.spherical.r, crate::ORIGIN_EPSILON);
        assert!(m.probability_density.is_finite());

        // off-grid points are evaluated directly
        let m = measure_probability_at_point(&grid, 0.0, 0.0, 50.0).unwrap();
        assert!(m.probability_density >= 0.0);
        let m = measure_probability_at_point(&grid, 1e200, 0.0, -1e200).unwrap();
        assert!(m.spherical.r.is_finite());
        assert_eq!(m.probability_density, 0.0);

        assert!(matches!(
            measure_probability_at_point(&grid, f64::NAN, 0.0, 0.0),
            Err(MeasureError::NonFinitePoint(..)),
        ));
    }

    #[test]
    fn full_region_is_grid_total() {
        let grid = generate_orbital_grid(2, 1, 1, 40, 20.0).unwrap();
        let e = grid.get_extent();
        let reg = calculate_region_probability(
            &grid, (-e, e), (-e, e), (-e, e)).unwrap();
        let dV = grid.volume_element();
        let expected = grid.get_prob_density().sum() * dV;
        assert_relative_eq!(reg.total_probability, expected, max_relative = 1e-12);
        assert_eq!(reg.num_points, 40 * 40 * 40);
        assert_relative_eq!(reg.region_volume, 64000.0 * dV, max_relative = 1e-12);
        assert_relative_eq!(
            reg.max_density, grid.statistics().max_probability, max_relative = 1e-12);
        assert!(reg.total_probability > 0.9 && reg.total_probability < 1.1);
    }

    #[test]
    fn half_space_by_symmetry() {
        let grid = generate_orbital_grid(2, 1, 0, 20, 20.0).unwrap();
        let e = grid.get_extent();
        let full = calculate_region_probability(
            &grid, (-e, e), (-e, e), (-e, e)).unwrap();
        let upper = calculate_region_probability(
            &grid, (-e, e), (-e, e), (0.0, e)).unwrap();
        assert_eq!(upper.num_points, 20 * 20 * 10);
        assert_relative_eq!(
            2.0 * upper.total_probability, full.total_probability,
            max_relative = 1e-10,
        );
    }

    #[test]
    fn empty_region() {
        let grid = generate_orbital_grid(1, 0, 0, 10, 5.0).unwrap();
        let reg = calculate_region_probability(
            &grid, (1.0, -1.0), (-5.0, 5.0), (-5.0, 5.0)).unwrap();
        assert_eq!(reg.num_points, 0);
        assert_eq!(reg.total_probability, 0.0);
        assert_eq!(reg.region_volume, 0.0);
        assert_eq!(reg.average_density, 0.0);
        assert_eq!(reg.max_density, 0.0);
        assert_eq!(reg.x_range, (1.0, -1.0));

        assert!(matches!(
            calculate_region_probability(
                &grid, (-1.0, 1.0), (f64::NAN, 1.0), (-1.0, 1.0)),
            Err(MeasureError::BadRange { axis: 'y', .. }),
        ));
    }

    #[test]
    fn ground_state_uncertainties() {
        let grid = generate_orbital_grid(1, 0, 0, 61, 15.0).unwrap();
        let unc = uncertainty_calculator(&grid).unwrap();
        // ⟨x²⟩ = ⟨r²⟩/3 = 1 for 1s
        assert_relative_eq!(unc.position.delta_x, 1.0, max_relative = 5e-2);
        assert_relative_eq!(unc.position.delta_x, unc.position.delta_y, max_relative = 1e-10);
        assert_relative_eq!(unc.position.delta_x, unc.position.delta_z, max_relative = 1e-10);
        // ⟨r⟩ = 3/2, ⟨r²⟩ = 3
        assert_relative_eq!(unc.position.delta_r, 0.75_f64.sqrt(), max_relative = 1e-1);
        assert_relative_eq!(unc.expectation.r, 1.5);
        assert!(unc.expectation.x.abs() < 1e-10);
        assert!(unc.expectation.z.abs() < 1e-10);

        assert_relative_eq!(
            unc.momentum.delta_px, hbar / unc.position.delta_x, max_relative = 1e-12);
        assert_relative_eq!(unc.heisenberg.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(unc.heisenberg.z, 1.0, epsilon = 1e-12);
        assert_eq!(unc.heisenberg.minimum, 0.5);
        assert!(unc.heisenberg.y >= unc.heisenberg.minimum);
    }

    #[test]
    fn zero_spread_is_unbounded() {
        let (dp, prod) = momentum_spread(0.0, 'x');
        assert!(dp.is_infinite() && dp > 0.0);
        assert!(prod.is_infinite() && prod > 0.0);
    }

    #[test]
    fn line_profile() {
        let grid = generate_orbital_grid(1, 0, 0, 10, 5.0).unwrap();
        let line = distance_ruler(&grid, (0.0, 0.0, 0.0), (3.0, 4.0, 0.0), 100)
            .unwrap();
        assert_relative_eq!(line.distance, 5.0);
        assert_eq!(line.probability_profile.len(), 100);
        assert_eq!(line.x.len(), 100);
        assert_relative_eq!(line.x[99], 3.0, epsilon = 1e-12);
        assert_relative_eq!(line.y[99], 4.0, epsilon = 1e-12);
        // 1s density decreases monotonically away from the nucleus
        assert_relative_eq!(line.max_probability, line.probability_profile[0]);
        assert!(line.average_probability < line.max_probability);
        assert!(line.probability_profile.windows(2).all(|w| w[1] <= w[0]));

        assert!(matches!(
            distance_ruler(&grid, (0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 1),
            Err(MeasureError::BadSamples(1)),
        ));
        assert!(matches!(
            distance_ruler(&grid, (0.0, 0.0, f64::INFINITY), (1.0, 0.0, 0.0), 10),
            Err(MeasureError::NonFinitePoint(..)),
        ));
    }
}
