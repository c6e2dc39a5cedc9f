//! The simulation loop.
//!
//! Each round draws one pocket from the wheel, applies the bet's payout rule,
//! and advances the running balance. Balances are unconstrained: a losing
//! streak can take them below zero.

use rand::Rng;
use spinlab_types::roulette::{
    BetSpec, RoundEntry, SimulationError, SimulationRun, Wheel, MAX_ROUNDS,
};
use std::iter::FusedIterator;

use crate::sampler::Sampler;
use crate::validation::{validate_bet, validate_rounds, validate_starting_balance, validate_wheel};

/// Lazy, finite, non-restartable sequence of rounds.
///
/// Retains no history: each entry is produced on demand from the injected RNG.
pub struct RoundStream<'a, R: Rng + ?Sized> {
    wheel: &'a Wheel,
    bet: BetSpec,
    sampler: Sampler,
    rng: &'a mut R,
    rounds: u64,
    played: u64,
    starting_balance: f64,
    balance: f64,
}

impl<R: Rng + ?Sized> RoundStream<'_, R> {
    pub fn starting_balance(&self) -> f64 {
        self.starting_balance
    }

    /// Balance after the most recently yielded round.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }
}

impl<R: Rng + ?Sized> Iterator for RoundStream<'_, R> {
    type Item = RoundEntry;

    fn next(&mut self) -> Option<RoundEntry> {
        if self.played == self.rounds {
            return None;
        }

        let pocket = &self.wheel.pockets()[self.sampler.sample(&mut *self.rng)];
        let delta = self.bet.delta_for(pocket);
        self.balance += delta;
        self.played += 1;

        Some(RoundEntry {
            round: self.played,
            label: pocket.label,
            color: pocket.color,
            delta,
            balance: self.balance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.rounds - self.played) as usize;
        (remaining, Some(remaining))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for RoundStream<'_, R> {}

impl<R: Rng + ?Sized> FusedIterator for RoundStream<'_, R> {}

/// Validate inputs and return a streaming run capped at [`MAX_ROUNDS`].
pub fn stream_simulation<'a, R: Rng + ?Sized>(
    wheel: &'a Wheel,
    bet: &BetSpec,
    rounds: u64,
    starting_balance: f64,
    rng: &'a mut R,
) -> Result<RoundStream<'a, R>, SimulationError> {
    stream_simulation_with_limit(wheel, bet, rounds, starting_balance, MAX_ROUNDS, rng)
}

/// Validate inputs and return a streaming run capped at `max_rounds`.
pub fn stream_simulation_with_limit<'a, R: Rng + ?Sized>(
    wheel: &'a Wheel,
    bet: &BetSpec,
    rounds: u64,
    starting_balance: f64,
    max_rounds: u64,
    rng: &'a mut R,
) -> Result<RoundStream<'a, R>, SimulationError> {
    validate_wheel(wheel)?;
    validate_bet(wheel, bet)?;
    validate_rounds(rounds, max_rounds)?;
    validate_starting_balance(starting_balance)?;

    Ok(RoundStream {
        wheel,
        bet: *bet,
        sampler: Sampler::from_validated(wheel),
        rng,
        rounds,
        played: 0,
        starting_balance,
        balance: starting_balance,
    })
}

/// Run `rounds` independent spins and keep the full history.
///
/// All validation happens before the first draw; once sampling starts the run
/// always completes with exactly `rounds` entries.
pub fn run_simulation<R: Rng + ?Sized>(
    wheel: &Wheel,
    bet: &BetSpec,
    rounds: u64,
    starting_balance: f64,
    rng: &mut R,
) -> Result<SimulationRun, SimulationError> {
    run_simulation_with_limit(wheel, bet, rounds, starting_balance, MAX_ROUNDS, rng)
}

/// [`run_simulation`] with an explicit round ceiling.
pub fn run_simulation_with_limit<R: Rng + ?Sized>(
    wheel: &Wheel,
    bet: &BetSpec,
    rounds: u64,
    starting_balance: f64,
    max_rounds: u64,
    rng: &mut R,
) -> Result<SimulationRun, SimulationError> {
    let stream =
        stream_simulation_with_limit(wheel, bet, rounds, starting_balance, max_rounds, rng)?;
    // Grow on demand rather than reserving the whole run up front.
    let mut entries = Vec::new();
    for entry in stream {
        entries.push(entry);
    }
    Ok(SimulationRun::new(starting_balance, entries))
}
