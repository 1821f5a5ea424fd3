use rand::{
    Rng,
    distr::{Distribution, Uniform},
};
use tracing::debug;

use crate::prelude::*;

pub mod particle;

/// Dimension of the search space.
pub const DIM: usize = 2;

/// Best position seen by any particle so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalBest {
    pub position: Position,
    pub fitness: f64,
}

impl GlobalBest {
    /// Sentinel that any real fitness beats.
    fn unset() -> Self {
        Self {
            position: Position::zeros(),
            fitness: f64::INFINITY,
        }
    }

    /// Takes the particle's current position if it strictly improves on the best.
    fn offer(&mut self, particle: &Particle) -> bool {
        if particle.fitness < self.fitness {
            self.position = particle.position;
            self.fitness = particle.fitness;
            true
        } else {
            false
        }
    }
}

/// The swarm and the global best it has found.
///
/// Particles are updated in place and in index order, so a particle sees any global-best
/// improvement made earlier in the same generation.
#[derive(Clone, Debug)]
pub struct Swarm {
    particles: Vec<Particle>,
    global_best: GlobalBest,
    bounds: Bounds,
    inertia: f64,
    cognitive: f64,
    social: f64,
    generation: u64,
}

impl Swarm {
    /// Scatters `config.population` particles uniformly over the box, with velocities drawn from
    /// the same interval, then seeds the global best from the best of them.
    ///
    /// Per particle the draws are taken in the order `x1, x2, v1, v2`.
    pub fn initialize<R: Rng>(config: &PsoConfig, rng: &mut R) -> Result<Self, PsoError> {
        config.validate()?;
        let bounds = config.bounds;
        let uniform = Uniform::new(bounds.min, bounds.max)?;

        let mut particles = Vec::with_capacity(config.population);
        for _ in 0..config.population {
            let x1 = uniform.sample(rng);
            let x2 = uniform.sample(rng);
            let v1 = uniform.sample(rng);
            let v2 = uniform.sample(rng);
            particles.push(Particle::new(Position::new(x1, x2), Velocity::new(v1, v2)));
        }

        let mut global_best = GlobalBest::unset();
        for particle in &particles {
            global_best.offer(particle);
        }

        debug!(
            population = particles.len(),
            best_fitness = global_best.fitness,
            "swarm initialized"
        );

        Ok(Swarm {
            particles,
            global_best,
            bounds,
            inertia: config.inertia,
            cognitive: config.cognitive,
            social: config.social,
            generation: 0,
        })
    }

    /// Advances every particle by one generation.
    ///
    /// Each particle draws `r1, r2` for the first coordinate and a fresh pair for the second.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.generation += 1;

        for (idx, particle) in self.particles.iter_mut().enumerate() {
            for d in 0..DIM {
                let r1: f64 = rng.random();
                let r2: f64 = rng.random();

                let inertia = self.inertia * particle.velocity[d];
                let cognitive =
                    self.cognitive * r1 * (particle.best_position[d] - particle.position[d]);
                let social =
                    self.social * r2 * (self.global_best.position[d] - particle.position[d]);
                particle.velocity[d] = inertia + cognitive + social;

                particle.position[d] = self.bounds.clamp(particle.position[d] + particle.velocity[d]);
            }

            particle.evaluate();

            if self.global_best.offer(particle) {
                debug!(
                    generation = self.generation,
                    particle = idx,
                    fitness = self.global_best.fitness,
                    "new global best"
                );
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn global_best(&self) -> &GlobalBest {
        &self.global_best
    }

    /// Number of `step` calls since initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
