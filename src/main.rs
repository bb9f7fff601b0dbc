//! u-cpusched: run SJF and priority-with-aging over a random workload.
//!
//! Usage: `u-cpusched [config.json]`
//!
//! Logging is controlled by `RUST_LOG` (default `info`); set
//! `CPUSCHED_TRACE_JSON=1` for JSON log lines.

use std::error::Error;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use u_cpusched::config::SimulationConfig;
use u_cpusched::report::OutcomeReport;
use u_cpusched::scheduler::Simulation;
use u_cpusched::workload::RandomWorkload;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("CPUSCHED_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading configuration");
            SimulationConfig::from_path(&path)?
        }
        None => SimulationConfig::default(),
    };

    let mut source = RandomWorkload::new(config.workload.clone())?;
    let outcome = Simulation::new(config).run_source(&mut source)?;

    println!("{}", OutcomeReport(&outcome));
    Ok(())
}
