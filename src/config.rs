use crate::error::PsoError;

/// Closed interval `[min, max]` applied to every coordinate of a particle's position.
///
/// Velocities are initialised from the same interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), PsoError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(PsoError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Pins a coordinate that left the box back onto the violated face.
    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        if x > self.max {
            self.max
        } else if x < self.min {
            self.min
        } else {
            x
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}

/// Configuration for the particle swarm.
#[derive(Clone, Debug, PartialEq)]
pub struct PsoConfig {
    /// Number of particles in the swarm. Fixed for the whole run.
    pub population: usize,

    /// Number of generations `run` performs after initialization.
    pub generations: u64,

    /// Search box, shared by both coordinates.
    pub bounds: Bounds,

    /// Inertia weight `w` applied to the previous velocity.
    pub inertia: f64,
    /// Acceleration coefficient `c1` pulling towards the particle's own best position.
    pub cognitive: f64,
    /// Acceleration coefficient `c2` pulling towards the swarm's best position.
    pub social: f64,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            population: 20,
            generations: 500,
            bounds: Bounds::default(),
            inertia: 0.5,
            cognitive: 2.0,
            social: 2.0,
        }
    }
}

impl PsoConfig {
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn validate(&self) -> Result<(), PsoError> {
        if self.population == 0 {
            return Err(PsoError::EmptySwarm);
        }
        self.bounds.validate()
    }
}
