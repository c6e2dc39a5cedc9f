use rayon::ThreadPool;
use serde::Serialize;
use spinlab_execution::{
    expected_delta, house_edge, outcome_histogram, run_batch, summarize, SimulationJob,
};
use spinlab_types::roulette::{
    BetTarget, Comparison, OutcomeCount, SimulationError, SimulationSummary,
};
use std::fmt;
use tracing::{debug, info, warn};

use crate::{ResultSlots, Scenario, ValidatedConfig};

/// Results for one scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub caption: String,
    pub tweaked: bool,
    pub target: BetTarget,
    pub stake: f64,
    pub summary: SimulationSummary,
    pub expected_delta: f64,
    pub house_edge: f64,
    pub histogram: Vec<OutcomeCount>,
}

/// Everything a simulator invocation produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub seed: u64,
    pub rounds: u64,
    pub scenarios: Vec<ScenarioReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

fn job(config: &ValidatedConfig, scenario: &Scenario) -> SimulationJob {
    SimulationJob {
        wheel: scenario.wheel.clone(),
        bet: scenario.bet,
        rounds: config.rounds,
        starting_balance: config.starting_balance,
    }
}

/// Run the configured scenario (and its counterpart, when comparing).
///
/// The primary scenario runs on stream 0 of `seed`, the counterpart on
/// stream 1. Summaries are stored into `slots` by their fair/tweaked flag.
pub fn execute(
    config: &ValidatedConfig,
    seed: u64,
    slots: &mut ResultSlots,
    pool: &ThreadPool,
) -> Result<Report, SimulationError> {
    let scenarios: Vec<&Scenario> = std::iter::once(&config.scenario)
        .chain(config.counterpart.as_ref())
        .collect();
    let jobs: Vec<SimulationJob> = scenarios
        .iter()
        .map(|scenario| job(config, scenario))
        .collect();

    let runs = run_batch(&jobs, seed, config.max_rounds, pool);
    let mut reports = Vec::with_capacity(runs.len());
    for (scenario, run) in scenarios.into_iter().zip(runs) {
        let run = run?;
        let summary = summarize(&run)?;
        let expected = expected_delta(&scenario.wheel, &scenario.bet)?;
        let edge = house_edge(&scenario.wheel, &scenario.bet)?;
        info!(
            scenario = %scenario.name,
            rounds = summary.rounds,
            final_balance = summary.final_balance,
            wins = summary.wins,
            "run complete"
        );
        debug!(
            scenario = %scenario.name,
            expected_delta = expected,
            mean_delta = summary.mean_delta,
            lowest_balance = summary.lowest_balance,
            "run statistics"
        );
        if edge < 0.0 {
            warn!(scenario = %scenario.name, house_edge = edge, "bet favors the player");
        }

        slots.store(scenario.tweaked, summary.clone());
        reports.push(ScenarioReport {
            name: scenario.name.clone(),
            caption: scenario.caption.clone(),
            tweaked: scenario.tweaked,
            target: scenario.bet.target,
            stake: scenario.bet.stake,
            summary,
            expected_delta: expected,
            house_edge: edge,
            histogram: outcome_histogram(&scenario.wheel, &run),
        });
    }

    let comparison = if config.counterpart.is_some() {
        slots.comparison()
    } else {
        None
    };
    Ok(Report {
        seed,
        rounds: config.rounds,
        scenarios: reports,
        comparison,
    })
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;
        writeln!(f, "== {} ==", self.caption)?;
        writeln!(f, "bet:              {} x {:.2}", self.target, self.stake)?;
        writeln!(f, "rounds:           {}", summary.rounds)?;
        writeln!(f, "starting balance: {:.2}", summary.starting_balance)?;
        writeln!(f, "final balance:    {:.2}", summary.final_balance)?;
        writeln!(f, "total profit:     {:+.2}", summary.total_profit)?;
        writeln!(
            f,
            "wins:             {} ({:.2}%)",
            summary.wins,
            summary.win_rate * 100.0
        )?;
        writeln!(
            f,
            "balance range:    {:.2} .. {:.2}",
            summary.lowest_balance, summary.highest_balance
        )?;
        writeln!(
            f,
            "mean delta:       {:+.4} (expected {:+.4})",
            summary.mean_delta, self.expected_delta
        )?;
        writeln!(f, "house edge:       {:.2}%", self.house_edge * 100.0)?;
        writeln!(f, "outcomes:")?;
        for bucket in &self.histogram {
            writeln!(
                f,
                "  {:>5} {:<5} {}",
                bucket.label.to_string(),
                bucket.color.as_str(),
                bucket.count
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed: {}", self.seed)?;
        for scenario in &self.scenarios {
            writeln!(f)?;
            write!(f, "{scenario}")?;
        }
        if let Some(comparison) = &self.comparison {
            writeln!(f)?;
            writeln!(f, "== comparison (tweaked - fair) ==")?;
            writeln!(
                f,
                "final balance:    {:.2} vs {:.2} ({:+.2})",
                comparison.tweaked_final_balance,
                comparison.fair_final_balance,
                comparison.final_balance_delta
            )?;
            writeln!(f, "profit:           {:+.2}", comparison.profit_delta)?;
        }
        Ok(())
    }
}
