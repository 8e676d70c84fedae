pub mod realization;

pub use realization::{realization_seed, Realization, RealizationOutcome};

use tracing::{debug, info};
use validator::Validate;

use crate::config::SimConfig;
use crate::geometry::Torus;
use crate::parallel::par_over_realizations;
use crate::statistics::{EnsembleAccum, SweepResult, TemperaturePoint};

/// Run every realization at one temperature and reduce them to observables.
///
/// `temp_id` selects the block of PRNG streams (see [`realization_seed`]), so
/// calling this with the index a sweep would use reproduces that sweep's row.
pub fn run_temperature(
    config: &SimConfig,
    temp: f64,
    temp_id: usize,
) -> Result<TemperaturePoint, String> {
    config.validate().map_err(|e| format!("{e}"))?;
    if !temp.is_finite() || temp <= 0.0 {
        return Err(format!("temperature must be finite and > 0, got {temp}"));
    }
    let torus = Torus::new(config.xspan, config.yspan);
    Ok(sample_temperature(&torus, temp, temp_id, config))
}

fn sample_temperature(
    torus: &Torus,
    temp: f64,
    temp_id: usize,
    config: &SimConfig,
) -> TemperaturePoint {
    let n_realizations = config.n_realizations;

    let outcomes = par_over_realizations(n_realizations, config.sequential, |r| {
        let seed = realization_seed(config.seed, temp_id, n_realizations, r);
        Realization::new(torus, seed).run(torus, temp, config)
    });

    let mut accum = EnsembleAccum::with_capacity(temp, config.weighting, n_realizations);
    let mut acceptance = 0.0;
    for outcome in &outcomes {
        accum.push(outcome.energy);
        acceptance += outcome.moves.acceptance_rate();
    }
    acceptance /= n_realizations as f64;

    let observables = accum.finish();
    debug!(
        temp,
        energy = observables.energy,
        heat_capacity = observables.heat_capacity,
        acceptance,
        "temperature done"
    );

    TemperaturePoint {
        temperature: temp,
        observables,
        acceptance,
    }
}

/// Sweep the whole temperature schedule.
///
/// Temperatures are processed in schedule order; realizations within a
/// temperature run in parallel unless `config.sequential` is set. Results are
/// identical either way.
///
/// `on_temperature` is called once per finished temperature (useful for
/// progress bars).
pub fn run_sweep(
    config: &SimConfig,
    on_temperature: &(dyn Fn() + Sync),
) -> Result<SweepResult, String> {
    config.validate().map_err(|e| format!("{e}"))?;

    let torus = Torus::new(config.xspan, config.yspan);
    let temps = config.schedule.values();
    info!(
        xspan = config.xspan,
        yspan = config.yspan,
        num_pts = temps.len(),
        n_steps = config.n_steps,
        n_realizations = config.n_realizations,
        "starting temperature sweep"
    );

    let mut points = Vec::with_capacity(temps.len());
    for (temp_id, &temp) in temps.iter().enumerate() {
        points.push(sample_temperature(&torus, temp, temp_id, config));
        on_temperature();
    }

    info!(num_pts = points.len(), "temperature sweep finished");
    Ok(SweepResult::from_points(&points))
}
