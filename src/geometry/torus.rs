use crate::config::PartnerWrap;

/// Periodic 2D grid with a precomputed neighbor table.
///
/// Sites are indexed in row-major order: site `(i, j)` has flat index
/// `i * yspan + j`, where `i` is the row in `0..xspan` and `j` the column in
/// `0..yspan`. Both extents wrap, so every site has exactly four neighbors.
#[derive(Debug, Clone)]
pub struct Torus {
    /// Number of rows.
    pub xspan: usize,
    /// Number of columns.
    pub yspan: usize,
    /// Total number of sites (`xspan * yspan`).
    pub n_sites: usize,
    /// Precomputed neighbor table, length `n_sites * 4`.
    /// Layout: `neighbors[i * 4 + k]` with `k` = up, left, down, right.
    neighbors: Vec<u32>,
}

impl Torus {
    /// # Panics
    ///
    /// Panics if either extent is smaller than 2. [`crate::SimConfig`]
    /// rejects such shapes before a torus is built.
    pub fn new(xspan: usize, yspan: usize) -> Self {
        assert!(
            xspan >= 2 && yspan >= 2,
            "torus extents must be >= 2, got {xspan}x{yspan}"
        );
        let n_sites = xspan * yspan;
        let mut neighbors = vec![0u32; n_sites * 4];

        for i in 0..xspan {
            for j in 0..yspan {
                let flat = i * yspan + j;
                let up = (i + xspan - 1) % xspan;
                let down = (i + 1) % xspan;
                let left = (j + yspan - 1) % yspan;
                let right = (j + 1) % yspan;
                neighbors[flat * 4] = (up * yspan + j) as u32;
                neighbors[flat * 4 + 1] = (i * yspan + left) as u32;
                neighbors[flat * 4 + 2] = (down * yspan + j) as u32;
                neighbors[flat * 4 + 3] = (i * yspan + right) as u32;
            }
        }

        Self {
            xspan,
            yspan,
            n_sites,
            neighbors,
        }
    }

    #[inline]
    pub fn site(&self, i: usize, j: usize) -> usize {
        i * self.yspan + j
    }

    #[inline]
    pub fn coords(&self, site: usize) -> (usize, usize) {
        (site / self.yspan, site % self.yspan)
    }

    /// The four toroidal neighbors of `site`: up, left, down, right.
    #[inline]
    pub fn neighbors(&self, site: usize) -> [usize; 4] {
        let base = site * 4;
        [
            self.neighbors[base] as usize,
            self.neighbors[base + 1] as usize,
            self.neighbors[base + 2] as usize,
            self.neighbors[base + 3] as usize,
        ]
    }

    /// Exchange partner of `(i, j)`: the next row when `along_rows`, else the
    /// next column, wrapped by `wrap`.
    #[inline]
    pub fn partner(&self, i: usize, j: usize, along_rows: bool, wrap: PartnerWrap) -> usize {
        if along_rows {
            self.site(wrap.advance(i, self.xspan), j)
        } else {
            self.site(i, wrap.advance(j, self.yspan))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_3x4() {
        let torus = Torus::new(3, 4);
        assert_eq!(torus.n_sites, 12);

        // Site 0 = (0,0): up wraps to (2,0)=8, left wraps to (0,3)=3
        assert_eq!(torus.neighbors(0), [8, 3, 4, 1]);

        // Site 11 = (2,3): down wraps to (0,3)=3, right wraps to (2,0)=8
        assert_eq!(torus.neighbors(11), [7, 10, 3, 8]);

        // Site 5 = (1,1): interior
        assert_eq!(torus.neighbors(5), [1, 4, 9, 6]);
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        for (x, y) in [(2, 2), (2, 5), (3, 4), (6, 6)] {
            let torus = Torus::new(x, y);
            for s in 0..torus.n_sites {
                for n in torus.neighbors(s) {
                    let back = torus.neighbors(n).iter().filter(|&&m| m == s).count();
                    let fwd = torus.neighbors(s).iter().filter(|&&m| m == n).count();
                    assert_eq!(back, fwd, "site {s} <-> {n} on {x}x{y}");
                }
            }
        }
    }

    #[test]
    fn test_coords_roundtrip() {
        let torus = Torus::new(4, 7);
        assert_eq!(torus.coords(torus.site(3, 5)), (3, 5));
        assert_eq!(torus.site(1, 0), 7);
    }

    #[test]
    fn test_partner() {
        let torus = Torus::new(4, 4);
        // truncated: row 3 pairs with row 1, row 2 with row 0
        assert_eq!(torus.partner(3, 2, true, PartnerWrap::Truncated), torus.site(1, 2));
        assert_eq!(torus.partner(2, 2, true, PartnerWrap::Truncated), torus.site(0, 2));
        assert_eq!(torus.partner(1, 3, false, PartnerWrap::Truncated), torus.site(1, 1));
        // periodic: true forward neighbor
        assert_eq!(torus.partner(3, 2, true, PartnerWrap::Periodic), torus.site(0, 2));
        assert_eq!(torus.partner(1, 3, false, PartnerWrap::Periodic), torus.site(1, 0));
    }

    #[test]
    fn test_partner_can_be_self_on_2x2() {
        let torus = Torus::new(2, 2);
        assert_eq!(torus.partner(0, 1, true, PartnerWrap::Truncated), torus.site(0, 1));
    }

    #[test]
    #[should_panic]
    fn test_rejects_thin_torus() {
        Torus::new(1, 5);
    }
}
