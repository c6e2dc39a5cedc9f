//! Independent runs executed together.
//!
//! Each job gets its own RNG stream derived from the batch seed and its
//! position, so results do not depend on scheduling.

#[cfg(feature = "parallel")]
use rayon::{prelude::*, ThreadPool};
use spinlab_types::roulette::{BetSpec, SimulationError, SimulationRun, Wheel};

use crate::engine::run_simulation_with_limit;
use crate::rng::stream_rng;

/// One simulation request.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationJob {
    pub wheel: Wheel,
    pub bet: BetSpec,
    pub rounds: u64,
    pub starting_balance: f64,
}

impl SimulationJob {
    fn run(&self, seed: u64, stream: u64, max_rounds: u64) -> Result<SimulationRun, SimulationError> {
        let mut rng = stream_rng(seed, stream);
        run_simulation_with_limit(
            &self.wheel,
            &self.bet,
            self.rounds,
            self.starting_balance,
            max_rounds,
            &mut rng,
        )
    }
}

/// Run every job, job `i` on stream `i` of `seed`.
///
/// Results are returned in job order. A job that fails validation yields its
/// error without affecting the others.
pub fn run_batch(
    jobs: &[SimulationJob],
    seed: u64,
    max_rounds: u64,
    #[cfg(feature = "parallel")] pool: &ThreadPool,
) -> Vec<Result<SimulationRun, SimulationError>> {
    #[cfg(feature = "parallel")]
    {
        pool.install(|| {
            jobs.par_iter()
                .enumerate()
                .map(|(i, job)| job.run(seed, i as u64, max_rounds))
                .collect()
        })
    }
    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter()
            .enumerate()
            .map(|(i, job)| job.run(seed, i as u64, max_rounds))
            .collect()
    }
}
