mod solver;

use rand::{SeedableRng, rngs::StdRng};

pub(crate) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
