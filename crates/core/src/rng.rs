//! RNG module - uniform random piece selection
//!
//! Every draw picks one of the seven shapes uniformly and independently.
//! There is no bag and no repeat protection, so the same shape may come up
//! several times in a row.
//!
//! The generator is seeded, so a fixed seed replays the same piece stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Seeded source of shapes
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: StdRng,
}

impl PieceRandomizer {
    /// Create a new randomizer with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one shape uniformly at random
    pub fn pick_random(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}
