use thiserror::Error;

#[derive(Error, Debug)]
pub enum PsoError {
    #[error("Swarm must contain at least one particle")]
    EmptySwarm,

    #[error("Invalid search bounds; min={min}, max={max} (need finite min < max)")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Sampler construction error: {0}")]
    Sampling(#[from] rand::distr::uniform::Error),

    #[error("Argmin error: {0}")]
    ArgminError(#[from] argmin::core::Error),

    #[error("Swarm stepped before it was initialized")]
    NotInitialized,

    #[error("No best individual found in optimization result")]
    NoBestIndividual,
}
