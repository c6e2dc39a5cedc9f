use spinlab_execution::compare;
use spinlab_types::roulette::{Comparison, SimulationSummary};

/// Latest fair and tweaked results, kept for comparison.
///
/// Owned by the caller and passed explicitly; storing a result replaces the
/// previous one in the same slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSlots {
    fair: Option<SimulationSummary>,
    tweaked: Option<SimulationSummary>,
}

impl ResultSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, tweaked: bool, summary: SimulationSummary) {
        if tweaked {
            self.tweaked = Some(summary);
        } else {
            self.fair = Some(summary);
        }
    }

    pub fn fair(&self) -> Option<&SimulationSummary> {
        self.fair.as_ref()
    }

    pub fn tweaked(&self) -> Option<&SimulationSummary> {
        self.tweaked.as_ref()
    }

    /// Comparison of the two slots, once both are filled.
    pub fn comparison(&self) -> Option<Comparison> {
        match (&self.fair, &self.tweaked) {
            (Some(fair), Some(tweaked)) => Some(compare(fair, tweaked)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.fair = None;
        self.tweaked = None;
    }
}
