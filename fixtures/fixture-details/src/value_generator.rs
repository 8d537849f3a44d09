// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::{Config, RngAlgorithm, TestRng, TestRunner},
};
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Deterministic proptest value generation: the same seed string always
/// produces the same sequence of values.
pub(crate) struct ValueGenerator {
    runner: TestRunner,
}

impl ValueGenerator {
    pub(crate) fn from_seed(seed: &str) -> Self {
        let mut hasher = XxHash64::with_seed(0);
        hasher.write(seed.as_bytes());
        let seed_hash = hasher.finish().to_le_bytes();

        let mut rng_seed = [0_u8; 32];
        for chunk in rng_seed.chunks_exact_mut(8) {
            chunk.copy_from_slice(&seed_hash);
        }
        let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &rng_seed);
        Self {
            runner: TestRunner::new_with_rng(Config::default(), rng),
        }
    }

    /// Forks a generator whose stream is derived from, but independent of,
    /// this one's.
    pub(crate) fn partial_clone(&mut self) -> Self {
        Self {
            runner: TestRunner::new_with_rng(Config::default(), self.runner.new_rng()),
        }
    }

    pub(crate) fn generate<S: Strategy>(&mut self, strategy: S) -> S::Value {
        strategy
            .new_tree(&mut self.runner)
            .expect("failed to generate new value")
            .current()
    }
}
