//! Test fixtures: canned wheels and bets, plus an RNG that replays scripted draws.

use rand::{Error, RngCore};
use spinlab_types::roulette::{
    BetSpec, BetTarget, Label, PayoutTable, Pocket, Wheel, DEFAULT_STAKE, EUROPEAN_POCKETS,
    STRAIGHT_PAYOUT,
};

/// Creates a single-zero wheel with 37 equally likely numbers
pub fn fair_wheel() -> Wheel {
    let probability = 1.0 / EUROPEAN_POCKETS as f64;
    (0..EUROPEAN_POCKETS)
        .map(|number| Pocket::number(number, probability))
        .collect()
}

/// Creates a straight-number bet paying 35:1 at the default stake
pub fn straight_bet(number: u8) -> BetSpec {
    BetSpec::new(
        BetTarget::Label(Label::Number(number)),
        DEFAULT_STAKE,
        PayoutTable::flat(STRAIGHT_PAYOUT),
    )
}

/// Uniform value that lands in the middle of pocket `index` of an
/// equally weighted wheel with `pockets` pockets.
pub fn uniform_for(index: usize, pockets: usize) -> f64 {
    (index as f64 + 0.5) / pockets as f64
}

/// RNG that yields a fixed script of uniform draws, cycling when exhausted.
///
/// Each scripted value `u` in `[0, 1)` is encoded so that `rng.gen::<f64>()`
/// returns `u` (to 53 bits of precision).
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    words: Vec<u64>,
    next: usize,
}

impl ScriptedRng {
    pub fn from_uniforms(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "script must not be empty");
        let words = values
            .iter()
            .map(|u| {
                assert!((0.0..1.0).contains(u), "uniform out of range: {u}");
                ((u * (1u64 << 53) as f64) as u64) << 11
            })
            .collect();
        Self { words, next: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.next % self.words.len()];
        self.next += 1;
        word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
