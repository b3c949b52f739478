// Knuth MMIX multiplier/increment; the single nonlinear mixing step every
// derivation in the hierarchy composes.
const STEP_MULT: u64 = 6364136223846793005;
const STEP_INC: u64 = 1442695040888963407;

/// One mixing step: `s * (s * STEP_MULT + STEP_INC) + salt` mod 2^64.
#[inline]
pub const fn step_seed(s: u64, salt: u64) -> u64 {
    s.wrapping_mul(s.wrapping_mul(STEP_MULT).wrapping_add(STEP_INC))
        .wrapping_add(salt)
}

/// Expand a small per-layer salt constant into a full 64-bit layer salt:
/// three mixing steps with `salt` as both running state and step salt.
pub const fn layer_salt(salt: u64) -> u64 {
    let mut ls = step_seed(salt, salt);
    ls = step_seed(ls, salt);
    step_seed(ls, salt)
}

/// The stepping salt for a `(world_seed, layer_salt)` pair: three mixing
/// steps applied to the world seed.
pub const fn start_salt(world_seed: u64, layer_salt: u64) -> u64 {
    let mut st = step_seed(world_seed, layer_salt);
    st = step_seed(st, layer_salt);
    step_seed(st, layer_salt)
}

/// The per-chunk derivation seed: the start salt pushed through one more
/// mixing step with salt 0.
pub const fn start_seed(world_seed: u64, layer_salt: u64) -> u64 {
    step_seed(start_salt(world_seed, layer_salt), 0)
}

/// Position-dependent leaf seed for chunk `(x, z)`. Coordinates are
/// sign-extended into the 64-bit arithmetic.
pub const fn chunk_seed(start_seed: u64, x: i32, z: i32) -> u64 {
    let xs = x as i64 as u64;
    let zs = z as i64 as u64;
    let mut cs = start_seed.wrapping_add(xs);
    cs = step_seed(cs, zs);
    cs = step_seed(cs, xs);
    step_seed(cs, zs)
}

/// Extract the first pseudorandom integer in `[0, modulus)` from a seed.
/// `modulus` must be positive.
///
/// The shift keeps the well-mixed high bits; the truncating signed modulo
/// can go negative and is corrected back into range.
#[inline]
pub const fn first_int(seed: u64, modulus: i32) -> i32 {
    debug_assert!(modulus > 0);
    let mut ret = ((seed as i64 >> 24) % modulus as i64) as i32;
    if ret < 0 {
        ret += modulus;
    }
    ret
}

/// Whether [`first_int`] would return 0, without the negative-correction
/// step: a truncating modulo is zero independently of the correction.
#[inline]
pub const fn first_is_zero(seed: u64, modulus: i32) -> bool {
    debug_assert!(modulus > 0);
    (seed as i64 >> 24) % modulus as i64 == 0
}
