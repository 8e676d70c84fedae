use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use lattice_gas::{run_sweep, EnergyMode, SimConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = SimConfig {
        energy_mode: EnergyMode::Local,
        ..SimConfig::default()
    };
    let n_temps = config.schedule.num_pts;

    println!(
        "Lattice: {}x{}  |  Temps: {}  |  Steps: {}  |  Realizations: {}",
        config.xspan, config.yspan, n_temps, config.n_steps, config.n_realizations
    );
    println!("{}", "-".repeat(70));

    let pb = ProgressBar::new(n_temps as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("=> "),
    );
    pb.set_message("temperatures");

    let t0 = Instant::now();
    let result = run_sweep(&config, &|| pb.inc(1)).unwrap();
    pb.finish();
    let elapsed = t0.elapsed().as_secs_f64();

    let (temps, heat_cap) = result.columns();
    println!("{:>10}  {:>14}", "T", "C");
    for (t, c) in temps.iter().zip(heat_cap) {
        println!("{t:>10.4}  {c:>14.6e}");
    }
    println!(
        "Total: {:.3} s  |  {:.3} ms/temperature",
        elapsed,
        elapsed / n_temps as f64 * 1000.0
    );
}
