//! Deterministic seeding primitives.
//!
//! `std::hash` is randomized per process, so identifiers are seeded with a
//! fixed FNV-1a hash instead. Unit-interval noise comes from a seeded sine
//! fold: not statistically rigorous, but smooth tick-over-tick and exactly
//! reproducible across runs and platforms, which is all the simulation
//! needs.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a hash of an identifier, used as its per-entity seed.
pub(crate) fn stable_hash(value: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in value.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Deterministic pseudo-random value in [0, 1) for a numeric seed.
pub(crate) fn seeded_unit(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

/// Round to three decimal places, the resolution of simulated coordinates.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
