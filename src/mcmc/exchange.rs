use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::config::{EnergyMode, PartnerWrap};
use crate::geometry::Torus;
use crate::occupancy::energy::{exchange_delta, lattice_energy};
use crate::occupancy::Lattice;

/// Result of one trial exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// The two sites differed and the exchange was kept.
    Accepted,
    /// The two sites differed and the exchange was undone.
    Rejected,
    /// The two sites held the same value; nothing to exchange.
    Unchanged,
}

/// One Kawasaki exchange trial under the Metropolis criterion at `temp`.
///
/// Draws a base site `(i, j)`, then picks its row partner with probability
/// 0.5 and its column partner otherwise (see [`PartnerWrap`]). Differing
/// occupations are swapped; an uphill swap is kept with probability
/// `exp(-dE / temp)`. The particle count never changes.
///
/// Random draws, in order: row, column, direction, and the acceptance draw
/// only when `dE > 0`. Both energy modes consume the stream identically.
pub fn metropolis_step(
    torus: &Torus,
    lattice: &mut Lattice,
    temp: f64,
    energy_mode: EnergyMode,
    partner_wrap: PartnerWrap,
    rng: &mut Xoshiro256StarStar,
) -> Move {
    let i = rng.gen_range(0..torus.xspan);
    let j = rng.gen_range(0..torus.yspan);
    let along_rows = rng.gen::<f64>() < 0.5;

    let a = torus.site(i, j);
    let b = torus.partner(i, j, along_rows, partner_wrap);
    if lattice.get(a) == lattice.get(b) {
        return Move::Unchanged;
    }

    let del_engy = match energy_mode {
        EnergyMode::Full => {
            let engy0 = lattice_energy(torus, lattice);
            lattice.exchange(a, b);
            lattice_energy(torus, lattice) - engy0
        }
        EnergyMode::Local => {
            let delta = exchange_delta(torus, lattice, a, b);
            lattice.exchange(a, b);
            delta
        }
    };

    if del_engy <= 0.0 || rng.gen::<f64>() <= (-del_engy / temp).exp() {
        Move::Accepted
    } else {
        lattice.exchange(a, b);
        Move::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn random_lattice(torus: &Torus, seed: u64) -> Lattice {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        Lattice::random(torus, &mut rng)
    }

    #[test]
    fn test_full_and_local_agree_step_by_step() {
        let torus = Torus::new(6, 5);
        let mut lat_full = random_lattice(&torus, 3);
        let mut lat_local = lat_full.clone();
        let mut rng_full = Xoshiro256StarStar::seed_from_u64(11);
        let mut rng_local = rng_full.clone();

        for _ in 0..2_000 {
            let m_full = metropolis_step(
                &torus,
                &mut lat_full,
                1.5,
                EnergyMode::Full,
                PartnerWrap::Truncated,
                &mut rng_full,
            );
            let m_local = metropolis_step(
                &torus,
                &mut lat_local,
                1.5,
                EnergyMode::Local,
                PartnerWrap::Truncated,
                &mut rng_local,
            );
            assert_eq!(m_full, m_local);
            assert_eq!(lat_full, lat_local);
        }
    }

    #[test]
    fn test_zero_temperature_never_climbs() {
        let torus = Torus::new(8, 8);
        let mut lat = random_lattice(&torus, 5);
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let mut engy = lattice_energy(&torus, &lat);
        let mut rejected = 0;

        for _ in 0..5_000 {
            let m = metropolis_step(
                &torus,
                &mut lat,
                1e-9,
                EnergyMode::Local,
                PartnerWrap::Periodic,
                &mut rng,
            );
            let next = lattice_energy(&torus, &lat);
            assert!(next <= engy);
            if m == Move::Rejected {
                rejected += 1;
            }
            engy = next;
        }
        assert!(rejected > 0);
    }

    #[test]
    fn test_equal_sites_are_untouched() {
        let torus = Torus::new(4, 4);
        let mut lat = Lattice::filled(&torus, 1);
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        for _ in 0..100 {
            let m = metropolis_step(
                &torus,
                &mut lat,
                1.0,
                EnergyMode::Full,
                PartnerWrap::Truncated,
                &mut rng,
            );
            assert_eq!(m, Move::Unchanged);
        }
        assert_eq!(lat, Lattice::filled(&torus, 1));
    }

    proptest! {
        #[test]
        fn exchange_conserves_particles(
            seed in any::<u64>(),
            temp in 0.01f64..5.0,
            x in 2usize..8,
            y in 2usize..8,
            periodic in any::<bool>(),
        ) {
            let torus = Torus::new(x, y);
            let mut lat = random_lattice(&torus, seed);
            let n0 = lat.n_occupied();
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed ^ 0x9e37_79b9);
            let wrap = if periodic { PartnerWrap::Periodic } else { PartnerWrap::Truncated };
            for _ in 0..200 {
                metropolis_step(&torus, &mut lat, temp, EnergyMode::Local, wrap, &mut rng);
                prop_assert_eq!(lat.n_occupied(), n0);
            }
        }
    }
}
