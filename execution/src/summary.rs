//! Aggregates over a finished (or streaming) run.

use spinlab_types::roulette::{
    Comparison, OutcomeCount, RoundEntry, SimulationError, SimulationRun, SimulationSummary, Wheel,
};
use std::collections::HashMap;

/// Running totals for a sequence of rounds.
///
/// Push entries as they are produced, then call [`SummaryAccumulator::finish`].
#[derive(Clone, Debug)]
pub struct SummaryAccumulator {
    starting_balance: f64,
    rounds: u64,
    wins: u64,
    final_balance: f64,
    lowest_balance: f64,
    highest_balance: f64,
}

impl SummaryAccumulator {
    pub fn new(starting_balance: f64) -> Self {
        Self {
            starting_balance,
            rounds: 0,
            wins: 0,
            final_balance: starting_balance,
            lowest_balance: starting_balance,
            highest_balance: starting_balance,
        }
    }

    pub fn push(&mut self, entry: &RoundEntry) {
        self.rounds += 1;
        if entry.is_win() {
            self.wins += 1;
        }
        self.final_balance = entry.balance;
        self.lowest_balance = self.lowest_balance.min(entry.balance);
        self.highest_balance = self.highest_balance.max(entry.balance);
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn finish(&self) -> Result<SimulationSummary, SimulationError> {
        if self.rounds == 0 {
            return Err(SimulationError::EmptyRun);
        }
        let total_profit = self.final_balance - self.starting_balance;
        Ok(SimulationSummary {
            rounds: self.rounds,
            starting_balance: self.starting_balance,
            final_balance: self.final_balance,
            total_profit,
            wins: self.wins,
            win_rate: self.wins as f64 / self.rounds as f64,
            mean_delta: total_profit / self.rounds as f64,
            lowest_balance: self.lowest_balance,
            highest_balance: self.highest_balance,
        })
    }
}

impl<'a> Extend<&'a RoundEntry> for SummaryAccumulator {
    fn extend<I: IntoIterator<Item = &'a RoundEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

/// Summarize a run in a single pass. Fails with `EmptyRun` on zero rounds.
pub fn summarize(run: &SimulationRun) -> Result<SimulationSummary, SimulationError> {
    let mut accumulator = SummaryAccumulator::new(run.starting_balance());
    accumulator.extend(run);
    accumulator.finish()
}

/// Difference between a tweaked and a fair summary (tweaked minus fair).
pub fn compare(fair: &SimulationSummary, tweaked: &SimulationSummary) -> Comparison {
    Comparison {
        fair_final_balance: fair.final_balance,
        tweaked_final_balance: tweaked.final_balance,
        final_balance_delta: tweaked.final_balance - fair.final_balance,
        profit_delta: tweaked.total_profit - fair.total_profit,
    }
}

/// Count how often each label of `wheel` came up, in wheel order.
///
/// Labels that never came up get a zero bucket; entries whose label is not on
/// the wheel are ignored.
pub fn outcome_histogram(wheel: &Wheel, run: &SimulationRun) -> Vec<OutcomeCount> {
    let mut counts: Vec<OutcomeCount> = wheel
        .pockets()
        .iter()
        .map(|pocket| OutcomeCount {
            label: pocket.label,
            color: pocket.color,
            count: 0,
        })
        .collect();
    let index: HashMap<_, _> = counts
        .iter()
        .enumerate()
        .map(|(i, bucket)| (bucket.label, i))
        .collect();

    for entry in run {
        if let Some(&i) = index.get(&entry.label) {
            counts[i].count += 1;
        }
    }
    counts
}

/// Balance after each round, as `(round, balance)` pairs.
pub fn balance_series(run: &SimulationRun) -> Vec<(u64, f64)> {
    run.iter().map(|entry| (entry.round, entry.balance)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::run_simulation;
    use crate::mocks::{fair_wheel, straight_bet, uniform_for, ScriptedRng};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use spinlab_types::roulette::{Color, Label};

    fn entry(round: u64, delta: f64, balance: f64) -> RoundEntry {
        RoundEntry {
            round,
            label: Label::Number(0),
            color: Color::Green,
            delta,
            balance,
        }
    }

    #[test]
    fn test_summarize_basic() {
        let run = SimulationRun::new(
            1_000.0,
            vec![
                entry(1, -100.0, 900.0),
                entry(2, 3_500.0, 4_400.0),
                entry(3, -100.0, 4_300.0),
                entry(4, -100.0, 4_200.0),
            ],
        );
        let summary = summarize(&run).unwrap();
        assert_eq!(summary.rounds, 4);
        assert_eq!(summary.final_balance, 4_200.0);
        assert_eq!(summary.total_profit, 3_200.0);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.win_rate, 0.25);
        assert_eq!(summary.mean_delta, 800.0);
        assert_eq!(summary.lowest_balance, 900.0);
        assert_eq!(summary.highest_balance, 4_400.0);
    }

    #[test]
    fn test_extremes_include_starting_balance() {
        let run = SimulationRun::new(
            100.0,
            vec![entry(1, 50.0, 150.0), entry(2, 50.0, 200.0)],
        );
        let summary = summarize(&run).unwrap();
        assert_eq!(summary.lowest_balance, 100.0);
        assert_eq!(summary.highest_balance, 200.0);
    }

    #[test]
    fn test_zero_delta_is_not_a_win() {
        let run = SimulationRun::new(10.0, vec![entry(1, 0.0, 10.0)]);
        let summary = summarize(&run).unwrap();
        assert_eq!(summary.wins, 0);
        assert_eq!(summary.win_rate, 0.0);
    }

    #[test]
    fn test_empty_run() {
        let run = SimulationRun::new(1_000.0, Vec::new());
        assert_eq!(summarize(&run), Err(SimulationError::EmptyRun));
        assert_eq!(
            SummaryAccumulator::new(0.0).finish(),
            Err(SimulationError::EmptyRun)
        );
    }

    #[test]
    fn test_single_round_scenario() {
        let wheel = fair_wheel();
        let mut rng = ScriptedRng::from_uniforms(&[uniform_for(17, 37)]);
        let run = run_simulation(&wheel, &straight_bet(17), 1, 1_000.0, &mut rng).unwrap();
        let summary = summarize(&run).unwrap();
        assert_eq!(summary.final_balance, 4_500.0);
        assert_eq!(summary.total_profit, 3_500.0);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.win_rate, 1.0);
    }

    #[test]
    fn test_accumulator_matches_summarize() {
        let wheel = fair_wheel();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let run = run_simulation(&wheel, &straight_bet(8), 2_000, 1_000.0, &mut rng).unwrap();

        let mut accumulator = SummaryAccumulator::new(run.starting_balance());
        for entry in &run {
            accumulator.push(entry);
        }
        assert_eq!(accumulator.rounds(), 2_000);
        assert_eq!(accumulator.finish(), summarize(&run));
    }

    #[test]
    fn test_compare_signs() {
        let fair = summarize(&SimulationRun::new(1_000.0, vec![entry(1, 100.0, 1_100.0)])).unwrap();
        let tweaked =
            summarize(&SimulationRun::new(1_000.0, vec![entry(1, -100.0, 900.0)])).unwrap();
        let comparison = compare(&fair, &tweaked);
        assert_eq!(comparison.fair_final_balance, 1_100.0);
        assert_eq!(comparison.tweaked_final_balance, 900.0);
        assert_eq!(comparison.final_balance_delta, -200.0);
        assert_eq!(comparison.profit_delta, -200.0);
    }

    #[test]
    fn test_histogram_covers_every_label() {
        let wheel = fair_wheel();
        let mut rng = ScriptedRng::from_uniforms(&[uniform_for(3, 37), uniform_for(3, 37), uniform_for(36, 37)]);
        let run = run_simulation(&wheel, &straight_bet(3), 3, 0.0, &mut rng).unwrap();

        let histogram = outcome_histogram(&wheel, &run);
        assert_eq!(histogram.len(), 37);
        assert_eq!(histogram[3].label, Label::Number(3));
        assert_eq!(histogram[3].count, 2);
        assert_eq!(histogram[36].count, 1);
        assert_eq!(histogram.iter().map(|bucket| bucket.count).sum::<u64>(), 3);
        assert_eq!(histogram[0].color, Color::Green);
    }

    #[test]
    fn test_balance_series() {
        let run = SimulationRun::new(
            0.0,
            vec![entry(1, -1.0, -1.0), entry(2, -1.0, -2.0)],
        );
        assert_eq!(balance_series(&run), vec![(1, -1.0), (2, -2.0)]);
    }

    proptest! {
        #[test]
        fn prop_compare_equals_final_balance_difference(
            fair_seed in any::<u64>(),
            tweaked_seed in any::<u64>(),
            rounds in 1u64..200,
        ) {
            let wheel = fair_wheel();
            let bet = straight_bet(17);
            let fair = run_simulation(&wheel, &bet, rounds, 1_000.0, &mut ChaCha20Rng::seed_from_u64(fair_seed)).unwrap();
            let tweaked = run_simulation(&wheel, &bet, rounds, 1_000.0, &mut ChaCha20Rng::seed_from_u64(tweaked_seed)).unwrap();
            let comparison = compare(&summarize(&fair).unwrap(), &summarize(&tweaked).unwrap());
            prop_assert_eq!(comparison.final_balance_delta, tweaked.final_balance() - fair.final_balance());
        }

        #[test]
        fn prop_win_rate_bounded(seed in any::<u64>(), rounds in 1u64..300) {
            let wheel = fair_wheel();
            let run = run_simulation(&wheel, &straight_bet(1), rounds, 0.0, &mut ChaCha20Rng::seed_from_u64(seed)).unwrap();
            let summary = summarize(&run).unwrap();
            prop_assert!((0.0..=1.0).contains(&summary.win_rate));
            prop_assert!(summary.lowest_balance <= summary.final_balance);
            prop_assert!(summary.final_balance <= summary.highest_balance);
        }
    }
}
