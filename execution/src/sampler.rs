//! Cumulative-weight sampling over a wheel.

use rand::Rng;
use spinlab_types::roulette::{SimulationError, Wheel};

use crate::validation::validate_wheel;

/// Precomputed cumulative weights for one wheel.
///
/// A draw `u ~ Uniform[0, 1)` selects the first pocket whose cumulative weight
/// exceeds `u`, so zero-weight pockets are never selected.
#[derive(Clone, Debug)]
pub struct Sampler {
    cumulative: Vec<f64>,
    /// Last pocket with positive weight; absorbs `u` past the rounded total.
    fallback: usize,
}

impl Sampler {
    pub fn new(wheel: &Wheel) -> Result<Self, SimulationError> {
        validate_wheel(wheel)?;
        Ok(Self::from_validated(wheel))
    }

    pub(crate) fn from_validated(wheel: &Wheel) -> Self {
        let mut total = 0.0;
        let mut fallback = 0;
        let mut cumulative = Vec::with_capacity(wheel.len());
        for (index, pocket) in wheel.pockets().iter().enumerate() {
            total += pocket.probability;
            if pocket.probability > 0.0 {
                fallback = index;
            }
            cumulative.push(total);
        }
        Self {
            cumulative,
            fallback,
        }
    }

    /// Map a uniform value in `[0, 1)` to a pocket index.
    ///
    /// Picks the first pocket whose cumulative weight is strictly greater than
    /// `u`. Compared with "first weight >= u" this only differs when `u` lands
    /// exactly on a boundary, and it keeps zero-weight pockets unreachable.
    pub fn select(&self, u: f64) -> usize {
        let index = self.cumulative.partition_point(|&weight| weight <= u);
        if index < self.cumulative.len() {
            index
        } else {
            self.fallback
        }
    }

    /// Draw one pocket index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.select(rng.gen::<f64>())
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}
