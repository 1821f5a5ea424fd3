use rand::{SeedableRng, rngs::StdRng};
use swarm_solver::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PsoConfig::default();
    let rng = StdRng::from_os_rng();

    let report = ParticleSwarm::new(config.clone(), rng).run(config.generations)?;

    print!("{report}");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}
