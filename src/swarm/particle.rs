use nalgebra::Vector2;

use crate::objective::saddle;

pub type Position = Vector2<f64>;
pub type Velocity = Vector2<f64>;

/// A single candidate solution.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Always inside the search box once `Swarm::step` has clamped it.
    pub position: Position,
    /// Never clamped; it keeps its value even when the position hits a wall.
    pub velocity: Velocity,
    /// Objective value at `position`.
    pub fitness: f64,
    pub best_position: Position,
    pub best_fitness: f64,
}

impl Particle {
    pub fn new(position: Position, velocity: Velocity) -> Self {
        let fitness = saddle(&position);
        Particle {
            position,
            velocity,
            fitness,
            best_position: position,
            best_fitness: fitness,
        }
    }

    /// Recomputes the fitness and keeps the personal best on strict improvement.
    pub(crate) fn evaluate(&mut self) {
        self.fitness = saddle(&self.position);
        if self.fitness < self.best_fitness {
            self.best_fitness = self.fitness;
            self.best_position = self.position;
        }
    }
}
