//! Dice sources for the turn engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Roll needed to enter a new figure.
pub const ENTRY_ROLL: u8 = DIE_FACES;

/// A source of die rolls.
pub trait Dice {
    /// Roll the die, returning a value in `1..=DIE_FACES`.
    fn roll(&mut self) -> u8;
}

/// Uniform die over any random number generator.
#[derive(Debug, Clone)]
pub struct RandomDice<R> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    /// Wrap a random number generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDice<StdRng> {
    /// A reproducible die seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of rolls, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Create a die that replays `rolls`.
    ///
    /// Values are clamped into `1..=DIE_FACES`; an empty script always
    /// rolls 1.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().map(|r| r.clamp(1, DIE_FACES)).collect(),
            next: 0,
        }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let Some(&roll) = self.rolls.get(self.next) else {
            return 1;
        };
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}
