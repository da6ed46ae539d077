pub mod service;

pub use service::FortuneService;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Randomness behind the decorative fortune content. The indirection exists
/// so tests can pin the stream and assert on the generated shape.
pub trait RandomSource: Send {
    /// Uniform pick in `0..bound` (`bound` ≥ 1).
    fn pick(&mut self, bound: usize) -> usize;
}

/// Entropy-seeded source used in production.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Deterministic source for tests.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LuckyColor {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Warning {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

/// Decorative extras attached to a horoscope detail view.
#[derive(Debug, Clone, Serialize)]
pub struct FortuneExtras {
    pub sign: String,
    pub lucky_numbers: Vec<u8>,
    pub lucky_colors: Vec<LuckyColor>,
    pub lucky_time: String,
    pub best_match: Vec<String>,
    pub good_match: Vec<String>,
    pub warnings: Vec<Warning>,
    pub recommendations: Vec<Recommendation>,
    pub quote: String,
    pub accuracy_percent: u8,
    pub viewer_count: u32,
}
