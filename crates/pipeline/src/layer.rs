use seedcraft_common::ChunkPos;
use serde::{Deserialize, Serialize};

use crate::seed::{
    chunk_seed, first_int, first_is_zero, layer_salt, start_salt, start_seed, step_seed,
};

/// The derived salt/seed bundle for one generation layer of a world.
///
/// Deriving once per layer and reusing the bundle is the intended pattern;
/// everything per-chunk hangs off `start_seed` and `start_salt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSeeds {
    pub layer_salt: u64,
    pub start_salt: u64,
    pub start_seed: u64,
}

impl LayerSeeds {
    /// Derive the full bundle for a world seed and a per-layer salt constant.
    pub fn derive(world_seed: u64, salt: u64) -> Self {
        let ls = layer_salt(salt);
        let seeds = Self {
            layer_salt: ls,
            start_salt: start_salt(world_seed, ls),
            start_seed: start_seed(world_seed, ls),
        };
        tracing::trace!(
            world_seed,
            salt,
            start_seed = seeds.start_seed,
            "derived layer seeds"
        );
        seeds
    }

    /// Position-dependent leaf seed for `pos`.
    pub const fn chunk_seed(&self, pos: ChunkPos) -> u64 {
        chunk_seed(self.start_seed, pos.x, pos.z)
    }

    /// The draw stream rooted at `pos`'s chunk seed.
    pub const fn chunk_stream(&self, pos: ChunkPos) -> ChunkStream {
        ChunkStream::new(self.chunk_seed(pos), self.start_salt)
    }
}

/// Successive bounded draws from a chunk seed.
///
/// The first draw comes straight off the chunk seed; every subsequent draw
/// re-steps the seed with the layer's start salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkStream {
    seed: u64,
    salt: u64,
}

impl ChunkStream {
    pub const fn new(seed: u64, salt: u64) -> Self {
        Self { seed, salt }
    }

    /// Extract the next value in `[0, modulus)` and step the seed.
    pub fn next_int(&mut self, modulus: i32) -> i32 {
        let v = first_int(self.seed, modulus);
        self.seed = step_seed(self.seed, self.salt);
        v
    }

    /// Extract the next zero-test and step the seed.
    pub fn next_is_zero(&mut self, modulus: i32) -> bool {
        let v = first_is_zero(self.seed, modulus);
        self.seed = step_seed(self.seed, self.salt);
        v
    }
}
