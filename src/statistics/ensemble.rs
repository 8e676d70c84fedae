use crate::config::Weighting;

/// Ensemble averages at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observables {
    /// ⟨E⟩
    pub energy: f64,
    /// ⟨E²⟩
    pub energy2: f64,
    /// (⟨E²⟩ − ⟨E⟩²) / T²
    pub heat_capacity: f64,
}

/// Collects one terminal energy per realization at a fixed temperature and
/// reduces them to weighted averages.
///
/// With [`Weighting::Boltzmann`] each energy carries `w = exp(-E / T)`, on top
/// of samples that the Metropolis chain already drew near the Boltzmann
/// distribution. That double weighting is kept deliberately;
/// [`Weighting::Uniform`] gives the plain canonical estimate.
///
/// Weights are taken relative to the lowest energy, `exp(-(E - E_min) / T)`,
/// which leaves every ratio unchanged but keeps the weights in `(0, 1]` at
/// small `T`. Moments are accumulated about `E_min` as well.
pub struct EnsembleAccum {
    temp: f64,
    weighting: Weighting,
    energies: Vec<f64>,
}

impl EnsembleAccum {
    pub fn new(temp: f64, weighting: Weighting) -> Self {
        Self {
            temp,
            weighting,
            energies: Vec::new(),
        }
    }

    pub fn with_capacity(temp: f64, weighting: Weighting, n: usize) -> Self {
        Self {
            temp,
            weighting,
            energies: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, energy: f64) {
        self.energies.push(energy);
    }

    pub fn count(&self) -> usize {
        self.energies.len()
    }

    pub fn finish(&self) -> Observables {
        if self.energies.is_empty() {
            return Observables {
                energy: 0.0,
                energy2: 0.0,
                heat_capacity: 0.0,
            };
        }

        let e_min = self.energies.iter().copied().fold(f64::INFINITY, f64::min);

        let mut part_func = 0.0;
        let mut sum_d = 0.0;
        let mut sum_d2 = 0.0;
        for &e in &self.energies {
            let d = e - e_min;
            let w = match self.weighting {
                Weighting::Boltzmann => (-d / self.temp).exp(),
                Weighting::Uniform => 1.0,
            };
            part_func += w;
            sum_d += d * w;
            sum_d2 += d * d * w;
        }

        let mean_d = sum_d / part_func;
        let mean_d2 = sum_d2 / part_func;
        let variance = mean_d2 - mean_d * mean_d;

        Observables {
            energy: e_min + mean_d,
            energy2: e_min * e_min + 2.0 * e_min * mean_d + mean_d2,
            heat_capacity: variance / (self.temp * self.temp),
        }
    }
}
