use serde::{Deserialize, Serialize};

/// A 2D chunk coordinate in the generation grid.
///
/// Coordinates may be negative; seed derivation sign-extends them into the
/// 64-bit mixing arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}
