//! Spinlab simulator: configuration, result slots and reporting around the
//! simulation engine.

use serde::{Deserialize, Serialize};
use spinlab_execution::presets::{self, PresetInfo};
use spinlab_types::roulette::{
    BetSpec, BetTarget, PayoutTable, Preset, SimulationError, Wheel, ROUND_LIMIT,
};
use std::{fmt, num::NonZeroUsize, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::Level;

pub mod defaults;
mod replay;
mod report;
mod slots;

pub use replay::replay;
pub use report::{execute, Report, ScenarioReport};
pub use slots::ResultSlots;

/// Simulator configuration, as read from YAML and overridden by flags.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub preset: Preset,
    /// Bet target; the preset's default target when unset.
    #[serde(default)]
    pub target: Option<BetTarget>,
    #[serde(default = "default_stake")]
    pub stake: f64,
    #[serde(default = "default_rounds")]
    pub rounds: u64,
    #[serde(default = "default_starting_balance")]
    pub starting_balance: f64,
    /// Seed for reproducible runs; drawn at startup when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u64,

    /// Custom wheel used instead of the preset (requires `payout`).
    #[serde(default)]
    pub wheel: Option<Wheel>,
    #[serde(default)]
    pub payout: Option<PayoutTable>,

    /// Also run the preset's fair/tweaked counterpart and compare.
    #[serde(default)]
    pub compare: bool,
    /// Number of leading rounds to print one at a time (0 disables).
    #[serde(default)]
    pub replay: usize,
    #[serde(default = "default_replay_delay_ms")]
    pub replay_delay_ms: u64,
    #[serde(default = "default_threads")]
    pub threads: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json_logs: bool,
}

fn default_stake() -> f64 {
    defaults::DEFAULT_STAKE
}

fn default_rounds() -> u64 {
    defaults::DEFAULT_ROUNDS
}

fn default_starting_balance() -> f64 {
    defaults::DEFAULT_STARTING_BALANCE
}

fn default_max_rounds() -> u64 {
    defaults::DEFAULT_MAX_ROUNDS
}

fn default_replay_delay_ms() -> u64 {
    defaults::DEFAULT_REPLAY_DELAY_MS
}

fn default_threads() -> usize {
    defaults::DEFAULT_THREADS
}

fn default_log_level() -> String {
    defaults::DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            target: None,
            stake: default_stake(),
            rounds: default_rounds(),
            starting_balance: default_starting_balance(),
            seed: None,
            max_rounds: default_max_rounds(),
            wheel: None,
            payout: None,
            compare: false,
            replay: 0,
            replay_delay_ms: default_replay_delay_ms(),
            threads: default_threads(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
    #[error("{field} must be positive and finite (got {value})")]
    InvalidPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite (got {value})")]
    InvalidFinite { field: &'static str, value: f64 },
    #[error("max_rounds must not exceed {limit} (got {max_rounds})")]
    MaxRoundsTooLarge { max_rounds: u64, limit: u64 },
    #[error("rounds must not exceed max_rounds (rounds={rounds}, max_rounds={max_rounds})")]
    RoundsExceedLimit { rounds: u64, max_rounds: u64 },
    #[error("replay must not exceed rounds (replay={replay}, rounds={rounds})")]
    ReplayExceedsRounds { replay: usize, rounds: u64 },
    #[error("custom wheel requires both wheel and payout")]
    IncompleteCustomWheel,
    #[error("custom wheel requires a target")]
    MissingTarget,
    #[error("compare requires a preset (custom wheels have no counterpart)")]
    CompareRequiresPreset,
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// A wheel and bet ready to simulate, with its caption metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub caption: String,
    pub tweaked: bool,
    pub wheel: Wheel,
    pub bet: BetSpec,
}

impl Scenario {
    pub fn from_preset(preset: Preset, target: BetTarget, stake: f64) -> Self {
        let info = PresetInfo::of(preset);
        Self {
            name: preset.to_string(),
            caption: info.caption(),
            tweaked: info.tweaked,
            wheel: presets::wheel(preset),
            bet: presets::bet(preset, target, stake),
        }
    }

    pub fn custom(wheel: Wheel, bet: BetSpec) -> Self {
        Self {
            name: "custom".to_string(),
            caption: "Custom wheel".to_string(),
            tweaked: false,
            wheel,
            bet,
        }
    }

    fn validate(&self) -> Result<(), SimulationError> {
        spinlab_execution::validate_wheel(&self.wheel)?;
        spinlab_execution::validate_bet(&self.wheel, &self.bet)
    }
}

pub struct ValidatedConfig {
    pub scenario: Scenario,
    /// Fair/tweaked counterpart, present when comparing.
    pub counterpart: Option<Scenario>,
    pub rounds: u64,
    pub starting_balance: f64,
    pub seed: Option<u64>,
    pub max_rounds: u64,
    pub replay: usize,
    pub replay_delay: Duration,
    pub threads: NonZeroUsize,
    pub log_level: Level,
    pub json_logs: bool,
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("scenario", &self.scenario.name)
            .field("target", &self.scenario.bet.target.to_string())
            .field("stake", &self.scenario.bet.stake)
            .field(
                "counterpart",
                &self.counterpart.as_ref().map(|scenario| scenario.name.as_str()),
            )
            .field("rounds", &self.rounds)
            .field("starting_balance", &self.starting_balance)
            .field("seed", &self.seed)
            .field("max_rounds", &self.max_rounds)
            .field("replay", &self.replay)
            .field("threads", &self.threads)
            .field("log_level", &self.log_level)
            .finish()
    }
}

fn ensure_nonzero(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidNonZero { field, value });
    }
    Ok(())
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidPositive { field, value });
    }
    Ok(())
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidFinite { field, value });
    }
    Ok(())
}

/// Worker threads to use: `0` means one per logical core.
pub fn resolve_threads(value: usize) -> NonZeroUsize {
    let fallback = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
    NonZeroUsize::new(value).unwrap_or(fallback)
}

impl Config {
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        let log_level = Level::from_str(&self.log_level).map_err(|_| {
            ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            }
        })?;
        ensure_positive("stake", self.stake)?;
        ensure_nonzero("rounds", self.rounds)?;
        ensure_nonzero("max_rounds", self.max_rounds)?;
        ensure_finite("starting_balance", self.starting_balance)?;
        if self.max_rounds > ROUND_LIMIT {
            return Err(ConfigError::MaxRoundsTooLarge {
                max_rounds: self.max_rounds,
                limit: ROUND_LIMIT,
            });
        }
        if self.rounds > self.max_rounds {
            return Err(ConfigError::RoundsExceedLimit {
                rounds: self.rounds,
                max_rounds: self.max_rounds,
            });
        }
        if self.replay as u64 > self.rounds {
            return Err(ConfigError::ReplayExceedsRounds {
                replay: self.replay,
                rounds: self.rounds,
            });
        }

        let (scenario, counterpart) = match (self.wheel, self.payout) {
            (Some(wheel), Some(payout)) => {
                if self.compare {
                    return Err(ConfigError::CompareRequiresPreset);
                }
                let target = self.target.ok_or(ConfigError::MissingTarget)?;
                let bet = BetSpec::new(target, self.stake, payout);
                (Scenario::custom(wheel, bet), None)
            }
            (None, None) => {
                let target = self
                    .target
                    .unwrap_or_else(|| presets::default_target(self.preset));
                let scenario = Scenario::from_preset(self.preset, target, self.stake);
                let counterpart = self.compare.then(|| {
                    Scenario::from_preset(self.preset.counterpart(), target, self.stake)
                });
                (scenario, counterpart)
            }
            _ => return Err(ConfigError::IncompleteCustomWheel),
        };
        scenario.validate()?;
        if let Some(counterpart) = &counterpart {
            counterpart.validate()?;
        }

        Ok(ValidatedConfig {
            scenario,
            counterpart,
            rounds: self.rounds,
            starting_balance: self.starting_balance,
            seed: self.seed,
            max_rounds: self.max_rounds,
            replay: self.replay,
            replay_delay: Duration::from_millis(self.replay_delay_ms),
            threads: resolve_threads(self.threads),
            log_level,
            json_logs: self.json_logs,
        })
    }
}
