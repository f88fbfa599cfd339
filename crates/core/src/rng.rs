//! RNG module - piece pool drawn without replacement
//!
//! The pool holds the piece kinds not yet dealt in the current cycle. Each draw
//! removes a random member; once the pool is empty it is refilled with one of
//! every kind. Over any full cycle each kind is dealt exactly once, in random
//! order.
//!
//! Randomness comes from a small seeded LCG so a seed reproduces a game.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, NUM_PIECE_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Working set of not-yet-dealt piece kinds
#[derive(Debug, Clone)]
pub struct PiecePool {
    remaining: ArrayVec<PieceKind, NUM_PIECE_KINDS>,
    rng: SimpleRng,
}

impl PiecePool {
    /// Create a full pool with the given seed
    pub fn new(seed: u32) -> Self {
        let mut pool = Self {
            remaining: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        pool.refill();
        pool
    }

    /// Put one of every kind back into the pool
    pub fn refill(&mut self) {
        self.remaining.clear();
        self.remaining.extend(PieceKind::ALL);
    }

    /// Draw one kind, refilling first if the cycle is exhausted
    pub fn draw(&mut self) -> PieceKind {
        if self.remaining.is_empty() {
            self.refill();
        }
        let idx = self.rng.next_range(self.remaining.len() as u32) as usize;
        // Pool order is irrelevant.
        self.remaining.swap_remove(idx)
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for PiecePool {
    fn default() -> Self {
        Self::new(1)
    }
}
