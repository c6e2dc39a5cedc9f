//! Seedable randomness for simulations.
//!
//! The engine accepts any `rand::Rng`; these helpers produce the ChaCha20
//! generators used by the simulator so runs are reproducible across
//! platforms.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Generator used for seeded runs.
pub type SpinRng = ChaCha20Rng;

/// Generator for a single run.
pub fn seeded(seed: u64) -> SpinRng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Generator for run `stream` of a family sharing `seed`.
///
/// Streams of the same seed never overlap, so independent runs (for example
/// a fair run and its tweaked counterpart) can share one configured seed.
pub fn stream_rng(seed: u64, stream: u64) -> SpinRng {
    let mut rng = seeded(seed);
    rng.set_stream(stream);
    rng
}
