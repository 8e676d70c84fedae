pub mod energy;

use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::geometry::Torus;

/// Binary occupation state of every site of a [`Torus`].
///
/// Cells are stored flat in the torus' row-major order and always hold 0 or 1.
/// The shape is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    xspan: usize,
    yspan: usize,
    cells: Vec<u8>,
}

impl Lattice {
    /// Every cell set to `value` (0 or 1).
    pub fn filled(torus: &Torus, value: u8) -> Self {
        debug_assert!(value <= 1);
        Self {
            xspan: torus.xspan,
            yspan: torus.yspan,
            cells: vec![value; torus.n_sites],
        }
    }

    /// Sample each cell independently and uniformly from {0, 1}, row-major,
    /// one draw per cell.
    pub fn random(torus: &Torus, rng: &mut Xoshiro256StarStar) -> Self {
        let cells = (0..torus.n_sites)
            .map(|_| if rng.gen::<f64>() < 0.5 { 0 } else { 1 })
            .collect();
        Self {
            xspan: torus.xspan,
            yspan: torus.yspan,
            cells,
        }
    }

    pub fn from_cells(torus: &Torus, cells: Vec<u8>) -> Result<Self, String> {
        if cells.len() != torus.n_sites {
            return Err(format!(
                "expected {} cells for a {}x{} lattice, got {}",
                torus.n_sites,
                torus.xspan,
                torus.yspan,
                cells.len()
            ));
        }
        if let Some(pos) = cells.iter().position(|&c| c > 1) {
            return Err(format!(
                "cell {pos} holds {}, occupancy must be 0 or 1",
                cells[pos]
            ));
        }
        Ok(Self {
            xspan: torus.xspan,
            yspan: torus.yspan,
            cells,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.xspan, self.yspan)
    }

    #[inline]
    pub fn get(&self, site: usize) -> u8 {
        self.cells[site]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of occupied sites.
    pub fn n_occupied(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Swap the occupations of sites `a` and `b`.
    #[inline]
    pub(crate) fn exchange(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_is_binary_and_seeded() {
        let torus = Torus::new(10, 10);
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let lat = Lattice::random(&torus, &mut rng);
        assert_eq!(lat.cells().len(), 100);
        assert!(lat.cells().iter().all(|&c| c <= 1));
        // roughly half filled
        assert!(lat.n_occupied() > 20 && lat.n_occupied() < 80);

        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        assert_eq!(Lattice::random(&torus, &mut rng), lat);
    }

    #[test]
    fn test_from_cells_validation() {
        let torus = Torus::new(2, 3);
        assert!(Lattice::from_cells(&torus, vec![0, 1, 1, 0, 0, 1]).is_ok());
        assert!(Lattice::from_cells(&torus, vec![0, 1, 1]).is_err());
        let err = Lattice::from_cells(&torus, vec![0, 1, 2, 0, 0, 1]).unwrap_err();
        assert!(err.contains("cell 2"), "{err}");
    }

    #[test]
    fn test_exchange() {
        let torus = Torus::new(2, 2);
        let mut lat = Lattice::from_cells(&torus, vec![1, 0, 0, 0]).unwrap();
        lat.exchange(0, 3);
        assert_eq!(lat.cells(), &[0, 0, 0, 1]);
        assert_eq!(lat.n_occupied(), 1);
        assert_eq!(lat.shape(), (2, 2));
    }
}
