//! Random city selection
//!
//! Every random choice the rules make is a uniform pick over board indices,
//! so the whole source of randomness fits behind one small trait. Sessions own
//! a boxed draw; tests and replays swap in a scripted one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

pub trait LocationDraw: Send {
    /// Pick an index in `0..count`. `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

/// `StdRng`-backed draw.
pub struct SeededDraw {
    rng: StdRng,
}

impl SeededDraw {
    pub fn new(seed: u64) -> Self {
        SeededDraw {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        SeededDraw {
            rng: StdRng::from_entropy(),
        }
    }
}

impl LocationDraw for SeededDraw {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

// Custom Debug that doesn't expose RNG internals
impl fmt::Debug for SeededDraw {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SeededDraw").finish_non_exhaustive()
    }
}

/// Replays a fixed sequence of picks, cycling when it runs out. Each pick is
/// reduced modulo the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedDraw {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedDraw {
    pub fn new(picks: Vec<usize>) -> Self {
        ScriptedDraw { picks, cursor: 0 }
    }
}

impl LocationDraw for ScriptedDraw {
    fn pick(&mut self, count: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        value % count
    }
}
