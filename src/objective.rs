use argmin::core::{CostFunction, Error as ArgminError};

use crate::swarm::particle::Position;

/// The saddle `f(x1, x2) = x1² − x2²`.
///
/// Over the default box `[-10, 10]²` the minimum is `-100`, attained at `(0, ±10)`.
#[inline]
pub fn saddle(p: &Position) -> f64 {
    p[0] * p[0] - p[1] * p[1]
}

/// Problem type handed to the argmin `Executor`. Particles call `saddle` directly, so argmin's
/// cost-function counter stays at zero during a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SaddleObjective;

impl CostFunction for SaddleObjective {
    type Param = Position;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<Self::Output, ArgminError> {
        Ok(saddle(p))
    }
}
