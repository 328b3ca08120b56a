//! Entropy source abstraction for deterministic testing.
//!
//! Identifier payloads and K1 secrets are drawn through an [`EntropySource`].
//! Production code uses [`OsEntropy`]; tests inject [`DetEntropy`].

use crate::util::DetRng;
use std::sync::{Mutex, PoisonError};

/// Core trait for entropy providers.
pub trait EntropySource: Send + Sync {
    /// Fill a buffer with entropy bytes.
    fn fill_bytes(&self, dest: &mut [u8]);

    /// Stable identifier for tracing and diagnostics.
    fn source_id(&self) -> &'static str;

    /// Return `len` fresh entropy bytes.
    fn bytes(&self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        self.fill_bytes(&mut buf);
        buf
    }
}

/// OS-backed entropy source for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        getrandom::fill(dest).expect("OS entropy failed");
    }

    fn source_id(&self) -> &'static str {
        "os"
    }
}

/// Deterministic entropy source for tests and replay.
///
/// ```
/// use authentic::util::{DetEntropy, EntropySource};
///
/// let a = DetEntropy::new(5);
/// let b = DetEntropy::new(5);
/// assert_eq!(a.bytes(26), b.bytes(26));
/// ```
#[derive(Debug)]
pub struct DetEntropy {
    rng: Mutex<DetRng>,
}

impl DetEntropy {
    /// Create a deterministic entropy source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(DetRng::new(seed)),
        }
    }
}

impl EntropySource for DetEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_bytes(dest);
    }

    fn source_id(&self) -> &'static str {
        "deterministic"
    }
}
