//! Closed-form odds for a bet on a wheel.
//!
//! These are the values a long simulation converges to, useful as a caption
//! next to simulated results and as a reference in convergence tests.

use spinlab_types::roulette::{BetSpec, SimulationError, Wheel};

use crate::validation::{validate_bet, validate_wheel};

/// Probability that one round wins.
pub fn win_probability(wheel: &Wheel, bet: &BetSpec) -> Result<f64, SimulationError> {
    validate_wheel(wheel)?;
    validate_bet(wheel, bet)?;
    Ok(wheel
        .pockets()
        .iter()
        .filter(|pocket| bet.target.matches(pocket))
        .map(|pocket| pocket.probability)
        .sum())
}

/// Expected balance change per round.
///
/// Sums `p * delta` over every pocket, so a special multiplier on the rare
/// color is weighted by that pocket's own probability.
pub fn expected_delta(wheel: &Wheel, bet: &BetSpec) -> Result<f64, SimulationError> {
    validate_wheel(wheel)?;
    validate_bet(wheel, bet)?;
    Ok(wheel
        .pockets()
        .iter()
        .map(|pocket| pocket.probability * bet.delta_for(pocket))
        .sum())
}

/// Expected loss per unit staked. Negative when the bet favors the player.
pub fn house_edge(wheel: &Wheel, bet: &BetSpec) -> Result<f64, SimulationError> {
    Ok(-expected_delta(wheel, bet)? / bet.stake)
}

/// Standard deviation of the per-round delta.
pub fn delta_std_dev(wheel: &Wheel, bet: &BetSpec) -> Result<f64, SimulationError> {
    let mean = expected_delta(wheel, bet)?;
    let variance: f64 = wheel
        .pockets()
        .iter()
        .map(|pocket| {
            let diff = bet.delta_for(pocket) - mean;
            pocket.probability * diff * diff
        })
        .sum();
    Ok(variance.max(0.0).sqrt())
}
