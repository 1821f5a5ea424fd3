use std::{cell::RefCell, rc::Rc};

use argmin::core::{Error, KV, OptimizationResult, PopulationState, State, observers::Observe};

use crate::prelude::{ParticleSwarm, Position, SaddleObjective};

pub type SwarmState = PopulationState<Position, f64>;

pub type OptRes<R> = OptimizationResult<SaddleObjective, ParticleSwarm<R>, SwarmState>;

/// Records the best cost after initialization and after every iteration.
///
/// Clones share the same history, so keep one clone and hand the other to the `Executor`.
#[derive(Clone, Default)]
pub struct BestCostObserver {
    cost_history: Rc<RefCell<Vec<f64>>>,
}

impl BestCostObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cost_history(&self) -> Vec<f64> {
        self.cost_history.borrow().clone()
    }

    pub fn observe_cost(&self, cost: f64) {
        self.cost_history.borrow_mut().push(cost);
    }
}

impl<I> Observe<I> for BestCostObserver
where
    I: State<Float = f64>,
{
    fn observe_init(&mut self, _name: &str, state: &I, _kv: &KV) -> Result<(), Error> {
        self.observe_cost(state.get_best_cost());
        Ok(())
    }

    fn observe_iter(&mut self, state: &I, _kv: &KV) -> Result<(), Error> {
        self.observe_cost(state.get_best_cost());
        Ok(())
    }
}
