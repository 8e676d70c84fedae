//! Metropolis Monte Carlo for a two-dimensional lattice gas.
//!
//! Cells of a toroidal grid hold 0 or 1. Particles move by Kawasaki
//! exchanges between a site and one of its forward partners, accepted under
//! the Metropolis criterion. A sweep anneals many independent lattices at
//! each temperature of a linear schedule and derives ⟨E⟩, ⟨E²⟩ and the heat
//! capacity from their terminal energies.

pub mod config;
pub mod geometry;
pub mod mcmc;
pub mod occupancy;
pub mod schedule;
pub mod simulation;
pub mod statistics;

mod parallel;

pub use config::{EnergyMode, PartnerWrap, SimConfig, Weighting};
pub use geometry::Torus;
pub use mcmc::{anneal, metropolis_step, Move, MoveCounts};
pub use occupancy::energy::lattice_energy;
pub use occupancy::Lattice;
pub use schedule::TemperatureSchedule;
pub use simulation::{run_sweep, run_temperature, Realization};
pub use statistics::{EnsembleAccum, Observables, SweepResult, TemperaturePoint};
