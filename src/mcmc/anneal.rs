use rand_xoshiro::Xoshiro256StarStar;

use super::exchange::{metropolis_step, Move};
use crate::config::{EnergyMode, PartnerWrap};
use crate::geometry::Torus;
use crate::occupancy::Lattice;

/// Tally of trial outcomes over an anneal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveCounts {
    pub accepted: usize,
    pub rejected: usize,
    pub unchanged: usize,
}

impl MoveCounts {
    #[inline]
    pub fn record(&mut self, m: Move) {
        match m {
            Move::Accepted => self.accepted += 1,
            Move::Rejected => self.rejected += 1,
            Move::Unchanged => self.unchanged += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.unchanged
    }

    /// Fraction of all trials whose exchange was kept.
    pub fn acceptance_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.accepted as f64 / total as f64
    }
}

/// Apply `n_steps` Metropolis steps in sequence at fixed `temp`.
///
/// Takes ownership of the lattice and hands back the final state. There is
/// no convergence check; the full step count always runs.
pub fn anneal(
    torus: &Torus,
    mut lattice: Lattice,
    temp: f64,
    n_steps: usize,
    energy_mode: EnergyMode,
    partner_wrap: PartnerWrap,
    rng: &mut Xoshiro256StarStar,
) -> (Lattice, MoveCounts) {
    let mut counts = MoveCounts::default();
    for _ in 0..n_steps {
        counts.record(metropolis_step(
            torus,
            &mut lattice,
            temp,
            energy_mode,
            partner_wrap,
            rng,
        ));
    }
    (lattice, counts)
}
