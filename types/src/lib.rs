//! Common types used throughout spinlab.
//!
//! Everything here is plain configuration or result data. Validation and
//! sampling live in `spinlab-execution`.

pub mod roulette;

pub use roulette::{
    BetError, BetSpec, BetTarget, Color, Comparison, DistributionError, Label, OutcomeCount,
    PayoutTable, Pocket, Preset, RoundEntry, SimulationError, SimulationRun, SimulationSummary,
    SpecialPayout, Wheel,
};
