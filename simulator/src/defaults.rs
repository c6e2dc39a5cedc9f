//! Default values for [`crate::Config`].

use spinlab_types::roulette;

pub const DEFAULT_STAKE: f64 = roulette::DEFAULT_STAKE;
pub const DEFAULT_ROUNDS: u64 = roulette::DEFAULT_ROUNDS;
pub const DEFAULT_STARTING_BALANCE: f64 = roulette::DEFAULT_STARTING_BALANCE;
pub const DEFAULT_MAX_ROUNDS: u64 = roulette::MAX_ROUNDS;
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Pause between replayed rounds.
pub const DEFAULT_REPLAY_DELAY_MS: u64 = 500;
/// Worker threads for batch runs (0 uses logical cores).
pub const DEFAULT_THREADS: usize = 0;
