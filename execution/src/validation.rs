//! Up-front checks for wheels, bets and round counts.
//!
//! Everything that can go wrong with a simulation is caught here, before the
//! first draw. A malformed probability table is rejected, never renormalized.

use spinlab_types::roulette::{
    BetError, BetSpec, BetTarget, DistributionError, SimulationError, Wheel, PROBABILITY_TOLERANCE,
    ROUND_LIMIT,
};
use std::collections::HashSet;

/// Check that a wheel is a proper categorical distribution.
///
/// Requires at least one pocket, unique labels, every probability in
/// `[0, 1]`, and a sum within [`PROBABILITY_TOLERANCE`] of 1.
pub fn validate_wheel(wheel: &Wheel) -> Result<(), SimulationError> {
    if wheel.is_empty() {
        return Err(DistributionError::Empty.into());
    }

    let mut seen = HashSet::with_capacity(wheel.len());
    let mut sum = 0.0;
    for pocket in wheel.pockets() {
        if !seen.insert(pocket.label) {
            return Err(DistributionError::DuplicateLabel {
                label: pocket.label,
            }
            .into());
        }
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&pocket.probability) {
            return Err(DistributionError::ProbabilityOutOfRange {
                label: pocket.label,
                probability: pocket.probability,
            }
            .into());
        }
        sum += pocket.probability;
    }

    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(DistributionError::SumMismatch {
            sum,
            tolerance: PROBABILITY_TOLERANCE,
        }
        .into());
    }
    Ok(())
}

fn validate_multiplier(field: &'static str, value: f64) -> Result<(), BetError> {
    if !value.is_finite() || value < 0.0 {
        return Err(BetError::InvalidMultiplier { field, value });
    }
    Ok(())
}

/// Check a bet against the wheel it will be played on.
pub fn validate_bet(wheel: &Wheel, bet: &BetSpec) -> Result<(), SimulationError> {
    if !bet.stake.is_finite() || bet.stake <= 0.0 {
        return Err(BetError::NonPositiveStake { stake: bet.stake }.into());
    }
    validate_multiplier("base", bet.payout.multiplier)?;
    if let Some(special) = bet.payout.special {
        validate_multiplier("special", special.multiplier)?;
    }

    match bet.target {
        BetTarget::Label(label) if !wheel.contains_label(&label) => {
            Err(BetError::UnknownLabel { label }.into())
        }
        BetTarget::Color(color) if !wheel.contains_color(color) => {
            Err(BetError::UnknownColor { color }.into())
        }
        _ => Ok(()),
    }
}

/// Check that `rounds` is within `1..=max_rounds`.
///
/// A ceiling above [`ROUND_LIMIT`] is clamped to it.
pub fn validate_rounds(rounds: u64, max_rounds: u64) -> Result<(), SimulationError> {
    let max = max_rounds.min(ROUND_LIMIT);
    if rounds == 0 || rounds > max {
        return Err(SimulationError::InvalidRoundCount { rounds, max });
    }
    Ok(())
}

pub fn validate_starting_balance(balance: f64) -> Result<(), SimulationError> {
    if !balance.is_finite() {
        return Err(SimulationError::InvalidStartingBalance { balance });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{fair_wheel, straight_bet};
    use spinlab_types::roulette::{
        Color, Label, PayoutTable, Pocket, SpecialPayout, MAX_ROUNDS, STRAIGHT_PAYOUT,
    };

    fn color_wheel(red: f64, black: f64, green: f64) -> Wheel {
        Wheel::new(vec![
            Pocket::category(Color::Red, red),
            Pocket::category(Color::Black, black),
            Pocket::category(Color::Green, green),
        ])
    }

    #[test]
    fn test_fair_wheel_is_valid() {
        assert_eq!(validate_wheel(&fair_wheel()), Ok(()));
    }

    #[test]
    fn test_rejects_empty_wheel() {
        assert_eq!(
            validate_wheel(&Wheel::default()),
            Err(SimulationError::InvalidDistribution(DistributionError::Empty))
        );
    }

    #[test]
    fn test_rejects_sum_outside_tolerance() {
        let result = validate_wheel(&color_wheel(0.5, 0.5, 0.1));
        assert!(matches!(
            result,
            Err(SimulationError::InvalidDistribution(
                DistributionError::SumMismatch { .. }
            ))
        ));

        // Off by more than the tolerance, in the other direction.
        let result = validate_wheel(&color_wheel(0.47, 0.47, 0.0599));
        assert!(matches!(
            result,
            Err(SimulationError::InvalidDistribution(
                DistributionError::SumMismatch { .. }
            ))
        ));
    }

    #[test]
    fn test_accepts_sum_within_tolerance() {
        assert_eq!(validate_wheel(&color_wheel(0.47, 0.47, 0.0600001)), Ok(()));
    }

    #[test]
    fn test_rejects_negative_probability() {
        let result = validate_wheel(&color_wheel(0.6, 0.5, -0.1));
        assert_eq!(
            result,
            Err(SimulationError::InvalidDistribution(
                DistributionError::ProbabilityOutOfRange {
                    label: Label::Category(Color::Green),
                    probability: -0.1,
                }
            ))
        );
    }

    #[test]
    fn test_rejects_nan_probability() {
        let result = validate_wheel(&color_wheel(0.5, 0.5, f64::NAN));
        assert!(matches!(
            result,
            Err(SimulationError::InvalidDistribution(
                DistributionError::ProbabilityOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn test_rejects_duplicate_label() {
        let wheel = Wheel::new(vec![Pocket::number(1, 0.5), Pocket::number(1, 0.5)]);
        assert_eq!(
            validate_wheel(&wheel),
            Err(SimulationError::InvalidDistribution(
                DistributionError::DuplicateLabel {
                    label: Label::Number(1)
                }
            ))
        );
    }

    #[test]
    fn test_zero_probability_pocket_is_allowed() {
        let wheel = Wheel::new(vec![Pocket::number(0, 0.0), Pocket::number(1, 1.0)]);
        assert_eq!(validate_wheel(&wheel), Ok(()));
    }

    #[test]
    fn test_bet_stake_must_be_positive() {
        let wheel = fair_wheel();
        for stake in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let mut bet = straight_bet(17);
            bet.stake = stake;
            assert!(
                matches!(
                    validate_bet(&wheel, &bet),
                    Err(SimulationError::InvalidBet(BetError::NonPositiveStake { .. }))
                ),
                "stake {stake} should be rejected"
            );
        }
    }

    #[test]
    fn test_bet_target_must_exist() {
        let wheel = fair_wheel();
        assert_eq!(validate_bet(&wheel, &straight_bet(17)), Ok(()));
        assert_eq!(
            validate_bet(&wheel, &straight_bet(37)),
            Err(SimulationError::InvalidBet(BetError::UnknownLabel {
                label: Label::Number(37)
            }))
        );

        let only_red = Wheel::new(vec![Pocket::category(Color::Red, 1.0)]);
        let bet = BetSpec::new(BetTarget::Color(Color::Green), 10.0, PayoutTable::flat(1.0));
        assert_eq!(
            validate_bet(&only_red, &bet),
            Err(SimulationError::InvalidBet(BetError::UnknownColor {
                color: Color::Green
            }))
        );
    }

    #[test]
    fn test_bet_multipliers_must_be_finite() {
        let wheel = fair_wheel();
        let mut bet = straight_bet(17);
        bet.payout.multiplier = -1.0;
        assert!(matches!(
            validate_bet(&wheel, &bet),
            Err(SimulationError::InvalidBet(BetError::InvalidMultiplier { field: "base", .. }))
        ));

        let mut bet = straight_bet(17);
        bet.payout = PayoutTable {
            multiplier: STRAIGHT_PAYOUT,
            special: Some(SpecialPayout {
                color: Color::Green,
                multiplier: f64::INFINITY,
            }),
        };
        assert!(matches!(
            validate_bet(&wheel, &bet),
            Err(SimulationError::InvalidBet(BetError::InvalidMultiplier {
                field: "special",
                ..
            }))
        ));
    }

    #[test]
    fn test_round_bounds() {
        assert!(validate_rounds(1, MAX_ROUNDS).is_ok());
        assert!(validate_rounds(MAX_ROUNDS, MAX_ROUNDS).is_ok());
        assert_eq!(
            validate_rounds(0, MAX_ROUNDS),
            Err(SimulationError::InvalidRoundCount {
                rounds: 0,
                max: MAX_ROUNDS
            })
        );
        assert!(validate_rounds(MAX_ROUNDS + 1, MAX_ROUNDS).is_err());
        assert_eq!(
            validate_rounds(ROUND_LIMIT + 1, u64::MAX),
            Err(SimulationError::InvalidRoundCount {
                rounds: ROUND_LIMIT + 1,
                max: ROUND_LIMIT
            })
        );
        assert!(validate_rounds(ROUND_LIMIT, u64::MAX).is_ok());
        assert!(validate_rounds(50, 10).is_err());
    }

    #[test]
    fn test_starting_balance_must_be_finite() {
        assert!(validate_starting_balance(-250.0).is_ok());
        assert!(validate_starting_balance(f64::NAN).is_err());
    }
}
