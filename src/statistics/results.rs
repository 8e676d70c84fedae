use super::ensemble::Observables;

/// Observables and diagnostics at one temperature of the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperaturePoint {
    pub temperature: f64,
    pub observables: Observables,
    /// Mean fraction of accepted exchanges per step, over realizations.
    pub acceptance: f64,
}

/// Per-temperature observables over a whole schedule.
///
/// All vectors are indexed by temperature index and have length `num_pts`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub temperatures: Vec<f64>,
    /// ⟨E⟩
    pub energies: Vec<f64>,
    /// ⟨E²⟩
    pub energies2: Vec<f64>,
    /// (⟨E²⟩ − ⟨E⟩²) / T²
    pub heat_capacity: Vec<f64>,
    /// Mean acceptance rate of the anneals.
    pub acceptance: Vec<f64>,
}

impl SweepResult {
    pub fn from_points(points: &[TemperaturePoint]) -> Self {
        Self {
            temperatures: points.iter().map(|p| p.temperature).collect(),
            energies: points.iter().map(|p| p.observables.energy).collect(),
            energies2: points.iter().map(|p| p.observables.energy2).collect(),
            heat_capacity: points.iter().map(|p| p.observables.heat_capacity).collect(),
            acceptance: points.iter().map(|p| p.acceptance).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Temperature and heat-capacity columns, as consumed by a plotter.
    pub fn columns(&self) -> (&[f64], &[f64]) {
        (&self.temperatures, &self.heat_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_keeps_order() {
        let points: Vec<TemperaturePoint> = [0.5, 1.0, 1.5]
            .iter()
            .enumerate()
            .map(|(k, &t)| TemperaturePoint {
                temperature: t,
                observables: Observables {
                    energy: -(k as f64),
                    energy2: (k * k) as f64,
                    heat_capacity: 0.1 * k as f64,
                },
                acceptance: 0.2,
            })
            .collect();

        let res = SweepResult::from_points(&points);
        assert_eq!(res.len(), 3);
        assert!(!res.is_empty());
        assert_eq!(res.energies, vec![0.0, -1.0, -2.0]);
        assert_eq!(res.energies2, vec![0.0, 1.0, 4.0]);
        let (temps, heat_cap) = res.columns();
        assert_eq!(temps, &[0.5, 1.0, 1.5]);
        assert_eq!(heat_cap.len(), temps.len());
    }
}
