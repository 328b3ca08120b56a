//! Internal utilities.
//!
//! Randomness reaches the codecs only through [`EntropySource`], so tests can
//! swap the OS source for a seeded one.

pub mod det_rng;
pub mod entropy;

pub use det_rng::DetRng;
pub use entropy::{DetEntropy, EntropySource, OsEntropy};
