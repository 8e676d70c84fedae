use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::config::SimConfig;
use crate::geometry::Torus;
use crate::mcmc::{anneal, MoveCounts};
use crate::occupancy::energy::lattice_energy;
use crate::occupancy::Lattice;

/// Seed for realization `r` at temperature index `temp_id`.
///
/// Streams are laid out as `base_seed, base_seed+1, …` across the whole sweep,
/// temperature-major, so no two realizations share a stream.
pub fn realization_seed(base_seed: u64, temp_id: usize, n_realizations: usize, r: usize) -> u64 {
    base_seed.wrapping_add((temp_id * n_realizations + r) as u64)
}

/// One independent chain: a fresh random lattice and the PRNG that drives it.
pub struct Realization {
    pub lattice: Lattice,
    pub rng: Xoshiro256StarStar,
}

/// What a finished realization contributes to the ensemble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealizationOutcome {
    /// Total energy of the annealed lattice.
    pub energy: f64,
    pub moves: MoveCounts,
}

impl Realization {
    /// Seed the PRNG and draw the initial lattice from it.
    pub fn new(torus: &Torus, seed: u64) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let lattice = Lattice::random(torus, &mut rng);
        Self { lattice, rng }
    }

    /// Anneal at `temp` for `config.n_steps` steps and read the final energy.
    pub fn run(self, torus: &Torus, temp: f64, config: &SimConfig) -> RealizationOutcome {
        let Self { lattice, mut rng } = self;
        let (lattice, moves) = anneal(
            torus,
            lattice,
            temp,
            config.n_steps,
            config.energy_mode,
            config.partner_wrap,
            &mut rng,
        );
        RealizationOutcome {
            energy: lattice_energy(torus, &lattice),
            moves,
        }
    }
}
