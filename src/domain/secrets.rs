//! Random operational secrets (database passwords, TURN shared secret).

use std::cell::RefCell;

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length used for ordinary service passwords.
pub const PASSWORD_LENGTH: usize = 16;

/// Length used for shared secrets between services.
pub const SHARED_SECRET_LENGTH: usize = 64;

/// Generates `[A-Za-z0-9]` strings. Owns its random source so one instance can
/// be threaded through a run instead of relying on a process-wide generator.
#[derive(Debug)]
pub struct SecretGenerator {
    rng: RefCell<StdRng>,
}

impl SecretGenerator {
    /// Seed from the operating system.
    pub fn from_entropy() -> Self {
        Self { rng: RefCell::new(StdRng::from_os_rng()) }
    }

    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: RefCell::new(StdRng::seed_from_u64(seed)) }
    }

    pub fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.borrow_mut();
        (&mut *rng).sample_iter(&Alphanumeric).take(length).map(char::from).collect()
    }

    pub fn password(&self) -> String {
        self.generate(PASSWORD_LENGTH)
    }

    pub fn shared_secret(&self) -> String {
        self.generate(SHARED_SECRET_LENGTH)
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
