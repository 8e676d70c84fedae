use crate::geometry::Torus;
use crate::occupancy::Lattice;

/// Interaction energy of `site` with its four neighbors.
///
/// Each bond contributes `-0.5 * occ(site) * occ(neighbor)`; summing this over
/// all sites counts every bond twice and yields `-1` per occupied bond.
#[inline]
pub fn site_energy(torus: &Torus, lattice: &Lattice, site: usize) -> f64 {
    let occ = lattice.get(site) as f64;
    let mut engy = 0.0;
    for n in torus.neighbors(site) {
        engy += -0.5 * occ * lattice.get(n) as f64;
    }
    engy
}

/// Total energy of the lattice. O(n_sites).
pub fn lattice_energy(torus: &Torus, lattice: &Lattice) -> f64 {
    debug_assert_eq!(lattice.shape(), (torus.xspan, torus.yspan));
    let mut engy = 0.0;
    for site in 0..torus.n_sites {
        engy += site_energy(torus, lattice, site);
    }
    engy
}

/// Energy change from swapping the occupations of `a` and `b`, evaluated on
/// the bonds touching those two sites only.
///
/// Every term is a multiple of 0.5, so the result equals the difference of
/// two [`lattice_energy`] calls exactly.
pub fn exchange_delta(torus: &Torus, lattice: &Lattice, a: usize, b: usize) -> f64 {
    if a == b || lattice.get(a) == lattice.get(b) {
        return 0.0;
    }
    let before = |s: usize| lattice.get(s) as f64;
    let after = |s: usize| {
        if s == a {
            lattice.get(b) as f64
        } else if s == b {
            lattice.get(a) as f64
        } else {
            lattice.get(s) as f64
        }
    };
    pair_energy(torus, a, b, after) - pair_energy(torus, a, b, before)
}

/// Energy of every directed bond with an endpoint in `{a, b}`.
///
/// A bond between `a` and `b` is visited from both ends; a bond leaving the
/// pair is visited once and carries both of its half-weights.
#[inline]
fn pair_energy(torus: &Torus, a: usize, b: usize, occ: impl Fn(usize) -> f64) -> f64 {
    let mut engy = 0.0;
    for c in [a, b] {
        let oc = occ(c);
        for m in torus.neighbors(c) {
            let weight = if m == a || m == b { -0.5 } else { -1.0 };
            engy += weight * oc * occ(m);
        }
    }
    engy
}
