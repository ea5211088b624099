//! Scramble generation and inverse-replay solving.
//!
//! A scramble draws a fixed number of moves uniformly at random from the
//! move catalog and remembers them. Solving replays the remembered
//! sequence's element-wise inverse in reverse order, undoing the scramble
//! move by move, last move first. There is no general solver: only a
//! scramble this controller generated can be reversed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::moves::{self, MOVES};
use crate::sequencer::Sequencer;

/// Number of random moves in one scramble.
pub const SCRAMBLE_LENGTH: usize = 20;

/// Generates scrambles and queues their inverses to solve.
pub struct Scrambler {
    record: Vec<&'static str>,
    rng: ChaCha8Rng,
}

impl Scrambler {
    /// Creates a scrambler seeded from the operating system.
    pub fn new() -> Self {
        Self {
            record: Vec::new(),
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Creates a scrambler with a fixed seed, for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            record: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Whether a scramble is remembered, i.e. `solve` would do anything.
    pub fn has_scramble(&self) -> bool {
        !self.record.is_empty()
    }

    /// The remembered scramble sequence.
    pub fn record(&self) -> &[&'static str] {
        &self.record
    }

    /// Queues a fresh random scramble.
    ///
    /// Moves are drawn with replacement, so repeats (including back-to-back)
    /// are possible. Returns `false` without touching the record or the
    /// queue when the sequencer is busy.
    pub fn scramble(&mut self, sequencer: &mut Sequencer) -> bool {
        if !sequencer.begin_queuing() {
            return false;
        }
        self.record.clear();
        for _ in 0..SCRAMBLE_LENGTH {
            let mv = MOVES[self.rng.random_range(0..MOVES.len())];
            self.record.push(mv.name);
            sequencer.enqueue(mv.name);
        }
        sequencer.end_queuing();
        true
    }

    /// Queues the inverse of the remembered scramble, last move first.
    ///
    /// Clears the record once the solve sequence is queued, so calling
    /// `solve` again without a new scramble is a no-op. Returns `false`
    /// when the sequencer is busy or nothing is remembered.
    pub fn solve(&mut self, sequencer: &mut Sequencer) -> bool {
        if !self.has_scramble() {
            return false;
        }
        if !sequencer.begin_queuing() {
            return false;
        }
        for &name in self.record.iter().rev() {
            if let Some(inverse) = moves::inverse(name) {
                sequencer.enqueue(inverse);
            }
        }
        self.record.clear();
        sequencer.end_queuing();
        true
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}
