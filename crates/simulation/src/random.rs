//! Construction of the random source handed to the engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Builds the random source for one run.
///
/// A fixed seed makes the run reproducible; without one the generator is
/// seeded from the operating system.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}
