pub mod ensemble;
pub mod results;

pub use ensemble::{EnsembleAccum, Observables};
pub use results::{SweepResult, TemperaturePoint};
