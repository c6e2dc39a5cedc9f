//! Roulette simulation domain types.
//!
//! Defines wheels, bets, per-round entries and run summaries used by the
//! execution engine and the simulator.

mod bet;
mod constants;
mod error;
mod preset;
mod run;
mod wheel;

pub use bet::*;
pub use constants::*;
pub use error::*;
pub use preset::*;
pub use run::*;
pub use wheel::*;
