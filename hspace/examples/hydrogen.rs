use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use hspace::{
    grid,
    measure,
    superposition::SuperpositionState,
    units,
    wavefunction,
    QuantumState,
};

// sample a few orbitals and watch a 1s + 2p_z superposition slosh along z

fn main() {
    const GRID_POINTS: usize = 60;
    const EXTENT: f64 = 20.0; // a₀

    // energies and the Lyman-α line
    for n in 1..=3 {
        println!("E({}) = {:.4} eV", n, units::energy_level_ev(n).unwrap());
    }
    println!("λ(2 → 1) = {:.2} nm", units::photon_wavelength_nm(2, 1).unwrap());

    // sample 2p_z and compare the grid to the analytical results
    let orbital = grid::generate_orbital_grid(2, 1, 0, GRID_POINTS, EXTENT)
        .unwrap();
    let stats = orbital.statistics();
    println!(
        "{}: grid probability = {:.4}",
        orbital.get_name(),
        stats.total_probability * orbital.volume_element(),
    );
    let state = orbital.get_state();
    println!(
        "normalization check = {:.6}",
        wavefunction::verify_normalization(state, 40.0, 101),
    );
    let upper = measure::calculate_region_probability(
        &orbital, (-EXTENT, EXTENT), (-EXTENT, EXTENT), (0.0, EXTENT)).unwrap();
    println!("P(z > 0) = {:.4}", upper.total_probability);
    let unc = measure::uncertainty_calculator(&orbital).unwrap();
    println!(
        "Δx = {:.3}, Δz = {:.3}, Δr = {:.3} (a₀)",
        unc.position.delta_x, unc.position.delta_z, unc.position.delta_r,
    );

    // z-axis coordinates for the superposition
    let z: nd::Array1<f64> = nd::Array1::linspace(-EXTENT, EXTENT, 401);
    let dz = z[1] - z[0];
    let r = z.mapv(|zk| zk.abs().max(hspace::ORIGIN_EPSILON));
    let theta = z.mapv(|zk| if zk >= 0.0 { 0.0 } else { PI });
    let phi: nd::Array1<f64> = nd::Array1::zeros(z.len());

    let sup = SuperpositionState::from_pairs([
        (QuantumState::new(1, 0, 0).unwrap(), C64::from(1.0)),
        (QuantumState::new(2, 1, 0).unwrap(), C64::from(1.0)),
    ]);
    let beat = 2.0 * PI
        / (sup.states()[1].energy_hartree() - sup.states()[0].energy_hartree());
    println!("beat period = {:.3} a.u. = {:.3e} s", beat, beat * units::t_au);
    for t in nd::Array1::linspace(0.0, beat, 9).iter() {
        let psi = sup.evolve(&r, &theta, &phi, *t).unwrap();
        let prob = psi.mapv(|q| q.norm_sqr());
        let norm = prob.sum() * dz;
        let z_avg = (&prob * &z).sum() * dz / norm;
        println!("t = {:8.3}: ⟨z⟩ along axis = {:+.4}", t, z_avg);
    }
}
