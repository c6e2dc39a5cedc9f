use thiserror::Error;

use super::{Color, Label};

/// Why a wheel's probability table was rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DistributionError {
    #[error("wheel has no pockets")]
    Empty,
    #[error("label {label} appears more than once")]
    DuplicateLabel { label: Label },
    #[error("probability for {label} out of range (got={probability})")]
    ProbabilityOutOfRange { label: Label, probability: f64 },
    #[error("probabilities sum to {sum}, expected 1 (tolerance={tolerance})")]
    SumMismatch { sum: f64, tolerance: f64 },
}

/// Why a bet was rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BetError {
    #[error("stake must be positive and finite (got={stake})")]
    NonPositiveStake { stake: f64 },
    #[error("{field} multiplier must be finite and non-negative (got={value})")]
    InvalidMultiplier { field: &'static str, value: f64 },
    #[error("target label {label} is not on the wheel")]
    UnknownLabel { label: Label },
    #[error("no pocket on the wheel is {color}")]
    UnknownColor { color: Color },
}

/// Errors reported before a simulation starts sampling.
///
/// A run that passes validation always completes; rounds never fail
/// individually.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("invalid distribution: {0}")]
    InvalidDistribution(#[from] DistributionError),
    #[error("invalid bet: {0}")]
    InvalidBet(#[from] BetError),
    #[error("invalid round count (got={rounds}, allowed=1..={max})")]
    InvalidRoundCount { rounds: u64, max: u64 },
    #[error("starting balance must be finite (got={balance})")]
    InvalidStartingBalance { balance: f64 },
    #[error("run has no rounds")]
    EmptyRun,
}

/// Returned when parsing a color name fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown color: {0} (expected RED, BLACK or GREEN)")]
pub struct UnknownColor(pub String);

/// Returned when parsing a preset name fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown preset: {0} (expected european-fair, european-tweaked, colors-fair or colors-tweaked)")]
pub struct UnknownPreset(pub String);
