//! Spinlab simulation engine.
//!
//! This crate contains the Monte Carlo roulette engine used by the simulator:
//! input validation, weighted sampling, the round loop, summaries, closed-form
//! odds and the built-in wheel presets.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time or ambient randomness; every draw comes from the
//!   injected RNG.
//! - The same wheel, bet, round count, starting balance and RNG state always
//!   produce the same run.
//! - Avoid iteration order of hash-based collections influencing outputs.
//!
//! ## Validation
//! All input checks run before the first draw. A run that starts always
//! completes with exactly the requested number of rounds.
//!
//! The primary entrypoint is [`run_simulation`].
//!
//! ## Minimal simulation (example)
//! ```rust
//! use spinlab_execution::{presets, rng, run_simulation, summarize};
//! use spinlab_types::Preset;
//!
//! let preset = Preset::EuropeanFair;
//! let wheel = presets::wheel(preset);
//! let bet = presets::bet(preset, presets::default_target(preset), 100.0);
//! let mut rng = rng::seeded(42);
//!
//! let run = run_simulation(&wheel, &bet, 1_000, 1_000.0, &mut rng).unwrap();
//! let summary = summarize(&run).unwrap();
//! assert_eq!(summary.rounds, 1_000);
//! ```

pub mod batch;
pub mod engine;
pub mod odds;
pub mod presets;
pub mod rng;
pub mod sampler;
pub mod summary;
pub mod validation;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use batch::{run_batch, SimulationJob};
pub use engine::{
    run_simulation, run_simulation_with_limit, stream_simulation, stream_simulation_with_limit,
    RoundStream,
};
pub use odds::{delta_std_dev, expected_delta, house_edge, win_probability};
pub use presets::{PresetCategory, PresetInfo};
pub use rng::{seeded, stream_rng, SpinRng};
pub use sampler::Sampler;
pub use summary::{balance_series, compare, outcome_histogram, summarize, SummaryAccumulator};
pub use validation::{validate_bet, validate_rounds, validate_starting_balance, validate_wheel};
