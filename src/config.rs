use validator::{Validate, ValidationError};

use crate::schedule::TemperatureSchedule;

/// How the energy change of a trial exchange is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyMode {
    /// Recompute the whole lattice energy before and after the exchange.
    Full,
    /// Sum only the bonds touching the two exchanged sites.
    Local,
}

impl TryFrom<&str> for EnergyMode {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "full" => Ok(Self::Full),
            "local" => Ok(Self::Local),
            _ => Err(format!(
                "unknown energy_mode '{s}', expected 'full' or 'local'"
            )),
        }
    }
}

/// Wrap rule for the forward partner of a trial exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerWrap {
    /// `(c + 1) mod (dim - 1)`: the partner row/column never reaches `dim - 1`.
    Truncated,
    /// `(c + 1) mod dim`: the true toroidal forward neighbor.
    Periodic,
}

impl PartnerWrap {
    /// Forward partner coordinate of `coord` along an axis of extent `dim`.
    #[inline]
    pub fn advance(self, coord: usize, dim: usize) -> usize {
        match self {
            Self::Truncated => (coord + 1) % (dim - 1),
            Self::Periodic => (coord + 1) % dim,
        }
    }
}

impl TryFrom<&str> for PartnerWrap {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "truncated" => Ok(Self::Truncated),
            "periodic" => Ok(Self::Periodic),
            _ => Err(format!(
                "unknown partner_wrap '{s}', expected 'truncated' or 'periodic'"
            )),
        }
    }
}

/// Weighting applied to annealed energies when forming ensemble averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Each realization weighted by `exp(-E / T)`.
    Boltzmann,
    /// Plain arithmetic mean over realizations.
    Uniform,
}

impl TryFrom<&str> for Weighting {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "boltzmann" => Ok(Self::Boltzmann),
            "uniform" => Ok(Self::Uniform),
            _ => Err(format!(
                "unknown weighting '{s}', expected 'boltzmann' or 'uniform'"
            )),
        }
    }
}

fn validate_sim_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    if cfg.xspan < 2 || cfg.yspan < 2 {
        return Err(ValidationError::new(
            "lattice xspan and yspan must both be >= 2",
        ));
    }
    if cfg.n_steps < 1 {
        return Err(ValidationError::new("n_steps must be >= 1"));
    }
    if cfg.n_realizations < 1 {
        return Err(ValidationError::new("n_realizations must be >= 1"));
    }
    Ok(())
}

#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_sim_config"))]
pub struct SimConfig {
    /// Number of rows.
    pub xspan: usize,
    /// Number of columns.
    pub yspan: usize,
    #[validate]
    pub schedule: TemperatureSchedule,
    /// Metropolis steps per anneal.
    pub n_steps: usize,
    /// Independent annealed lattices per temperature.
    pub n_realizations: usize,
    pub seed: u64,
    pub energy_mode: EnergyMode,
    pub partner_wrap: PartnerWrap,
    pub weighting: Weighting,
    /// Run realizations on the calling thread instead of the rayon pool.
    pub sequential: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            xspan: 10,
            yspan: 10,
            schedule: TemperatureSchedule::default(),
            n_steps: 10_000,
            n_realizations: 20,
            seed: 42,
            energy_mode: EnergyMode::Full,
            partner_wrap: PartnerWrap::Truncated,
            weighting: Weighting::Boltzmann,
            sequential: false,
        }
    }
}
