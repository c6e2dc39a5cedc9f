use serde::{Deserialize, Serialize};

use super::{Color, Label};

/// One round of a run: the drawn pocket, its delta, and the balance after it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundEntry {
    /// 1-based round index.
    pub round: u64,
    pub label: Label,
    pub color: Color,
    pub delta: f64,
    pub balance: f64,
}

impl RoundEntry {
    pub fn is_win(&self) -> bool {
        self.delta > 0.0
    }
}

/// Ordered, immutable history produced by one simulation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    starting_balance: f64,
    entries: Vec<RoundEntry>,
}

impl SimulationRun {
    pub fn new(starting_balance: f64, entries: Vec<RoundEntry>) -> Self {
        Self {
            starting_balance,
            entries,
        }
    }

    pub fn starting_balance(&self) -> f64 {
        self.starting_balance
    }

    pub fn entries(&self) -> &[RoundEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Balance after the last round, or the starting balance if there were none.
    pub fn final_balance(&self) -> f64 {
        self.entries
            .last()
            .map(|entry| entry.balance)
            .unwrap_or(self.starting_balance)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoundEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<RoundEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a SimulationRun {
    type Item = &'a RoundEntry;
    type IntoIter = std::slice::Iter<'a, RoundEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Aggregate statistics over a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub rounds: u64,
    pub starting_balance: f64,
    pub final_balance: f64,
    /// `final_balance - starting_balance`.
    pub total_profit: f64,
    pub wins: u64,
    pub win_rate: f64,
    pub mean_delta: f64,
    /// Lowest balance seen, starting balance included. May be negative.
    pub lowest_balance: f64,
    pub highest_balance: f64,
}

/// Number of rounds that landed on one label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub label: Label,
    pub color: Color,
    pub count: u64,
}

/// Signed difference between a fair and a tweaked run (tweaked minus fair).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub fair_final_balance: f64,
    pub tweaked_final_balance: f64,
    pub final_balance_delta: f64,
    pub profit_delta: f64,
}
