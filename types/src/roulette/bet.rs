use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Color, Label, Pocket, UnknownColor};

/// What the player bets on.
///
/// Deserialized untagged: a color name becomes a color bet, a number a
/// straight bet on that label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BetTarget {
    Color(Color),
    Label(Label),
}

impl BetTarget {
    /// Check if a pocket satisfies this target.
    pub fn matches(&self, pocket: &Pocket) -> bool {
        match self {
            BetTarget::Color(color) => pocket.color == *color,
            BetTarget::Label(label) => pocket.label == *label,
        }
    }
}

impl fmt::Display for BetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetTarget::Color(color) => write!(f, "{color}"),
            BetTarget::Label(label) => write!(f, "{label}"),
        }
    }
}

impl FromStr for BetTarget {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(number) = s.trim().parse::<u8>() {
            return Ok(BetTarget::Label(Label::Number(number)));
        }
        s.parse().map(BetTarget::Color)
    }
}

/// Multiplier paid on a rare color in place of the base multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecialPayout {
    pub color: Color,
    pub multiplier: f64,
}

/// Multipliers applied to the stake on a win (the stake itself is not returned).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutTable {
    pub multiplier: f64,
    #[serde(default)]
    pub special: Option<SpecialPayout>,
}

impl PayoutTable {
    pub fn flat(multiplier: f64) -> Self {
        Self {
            multiplier,
            special: None,
        }
    }

    pub fn with_special(multiplier: f64, color: Color, special: f64) -> Self {
        Self {
            multiplier,
            special: Some(SpecialPayout {
                color,
                multiplier: special,
            }),
        }
    }

    /// Multiplier for a winning pocket of the given color.
    pub fn multiplier_for(&self, color: Color) -> f64 {
        match self.special {
            Some(special) if special.color == color => special.multiplier,
            _ => self.multiplier,
        }
    }
}

/// Target, stake and payout table for every round of a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BetSpec {
    pub target: BetTarget,
    pub stake: f64,
    pub payout: PayoutTable,
}

impl BetSpec {
    pub fn new(target: BetTarget, stake: f64, payout: PayoutTable) -> Self {
        Self {
            target,
            stake,
            payout,
        }
    }

    /// Signed balance change for landing on `pocket`.
    pub fn delta_for(&self, pocket: &Pocket) -> f64 {
        if self.target.matches(pocket) {
            self.stake * self.payout.multiplier_for(pocket.color)
        } else {
            -self.stake
        }
    }
}
