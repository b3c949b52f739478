//! Layered seed derivation for position-dependent random streams:
//! world seed -> layer salt -> start seed/salt -> chunk seed, plus the
//! integer extraction helpers consumers draw from a chunk seed.
//!
//! # Invariants
//! - Every derivation is pure over wrapping 64-bit arithmetic; there is no
//!   shared mutable state anywhere in the hierarchy.
//! - Which generator family a consumer seeds from a chunk seed is irrelevant
//!   to the derivation itself.
//! - Bit-for-bit agreement with the reference derivation constants; existing
//!   seed catalogs depend on it.

mod layer;
mod seed;

pub use layer::{ChunkStream, LayerSeeds};
pub use seed::{
    chunk_seed, first_int, first_is_zero, layer_salt, start_salt, start_seed, step_seed,
};
