pub mod config;
pub mod error;
pub mod objective;
pub mod opt_tools;
pub mod solver;
pub mod swarm;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::{
        config::*,
        error::*,
        objective::*,
        opt_tools::{self, *},
        solver::*,
        swarm::{DIM, GlobalBest, Swarm, particle::*},
    };

    pub use nalgebra;
}
