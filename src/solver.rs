use std::fmt;

use argmin::core::{Error, Executor, KV, Problem, Solver, State, observers::ObserverMode};
use rand::Rng;
use tracing::info;

use crate::prelude::*;

/// Particle swarm optimizer for the saddle objective, driven by an argmin `Executor`.
///
/// `init` scatters the swarm and every `next_iter` is one generation. The state's individual is
/// the global best position and its population holds the current particle positions.
pub struct ParticleSwarm<R> {
    config: PsoConfig,
    rng: R,
    swarm: Option<Swarm>,
}

impl<R: Rng> ParticleSwarm<R> {
    pub fn new(config: PsoConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            swarm: None,
        }
    }

    /// The swarm as of the last generation, `None` before `init`.
    pub fn swarm(&self) -> Option<&Swarm> {
        self.swarm.as_ref()
    }

    /// Initializes the swarm, performs exactly `generations` steps and reports the global best.
    pub fn run(self, generations: u64) -> Result<SwarmReport, PsoError> {
        self.config.validate()?;

        info!(
            solver = %tynm::type_name::<Self>(),
            population = self.config.population,
            generations,
            "starting particle swarm run"
        );

        let observer = BestCostObserver::new();
        let mut opt_result = Executor::new(SaddleObjective, self)
            .configure(|state| state.max_iters(generations))
            .add_observer(observer.clone(), ObserverMode::Always)
            .run()?;

        info!(
            status = ?opt_result.state.get_termination_status(),
            iterations = opt_result.state.get_iter(),
            best_cost = opt_result.state.get_best_cost(),
            "particle swarm run finished"
        );

        SwarmReport::from_opt_result(&mut opt_result, observer.cost_history())
    }

    fn publish(swarm: &Swarm, state: SwarmState) -> SwarmState {
        let best = swarm.global_best();
        let positions = swarm.particles().iter().map(|p| p.position).collect();
        state
            .individual(best.position)
            .cost(best.fitness)
            .population(positions)
    }
}

impl<R: Rng> Solver<SaddleObjective, SwarmState> for ParticleSwarm<R> {
    fn name(&self) -> &str {
        "ParticleSwarm"
    }

    fn init(
        &mut self,
        _problem: &mut Problem<SaddleObjective>,
        state: SwarmState,
    ) -> Result<(SwarmState, Option<KV>), Error> {
        let swarm = Swarm::initialize(&self.config, &mut self.rng)?;
        let state = Self::publish(&swarm, state);
        self.swarm = Some(swarm);
        Ok((state, None))
    }

    fn next_iter(
        &mut self,
        _problem: &mut Problem<SaddleObjective>,
        state: SwarmState,
    ) -> Result<(SwarmState, Option<KV>), Error> {
        let swarm = self.swarm.as_mut().ok_or(PsoError::NotInitialized)?;
        swarm.step(&mut self.rng);
        Ok((Self::publish(swarm, state), None))
    }
}

/// Outcome of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmReport {
    pub best_fitness: f64,
    pub best_position: Position,
    /// Generations actually performed after initialization.
    pub generations: u64,
    /// Global best fitness after initialization, then after each generation.
    pub cost_history: Vec<f64>,
}

impl SwarmReport {
    fn from_opt_result<R>(
        opt_result: &mut OptRes<R>,
        cost_history: Vec<f64>,
    ) -> Result<Self, PsoError> {
        let best_position = opt_result
            .state
            .take_best_individual()
            .ok_or(PsoError::NoBestIndividual)?;

        Ok(SwarmReport {
            best_fitness: opt_result.state.get_best_cost(),
            best_position,
            generations: opt_result.state.get_iter(),
            cost_history,
        })
    }
}

/// The three result lines printed by the binary: `ymin`, `x1` and `x2`.
impl fmt::Display for SwarmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ymin = {}", self.best_fitness)?;
        writeln!(f, "x1 = {}", self.best_position[0])?;
        writeln!(f, "x2 = {}", self.best_position[1])
    }
}
