//! RNG module - piece sources
//!
//! New pieces come from a [`PieceSource`]. The default [`UniformSource`] picks each
//! kind with equal probability using a small seeded LCG, so a seed fully
//! determines a game. [`SequenceSource`] replays a fixed list for scripted games
//! and tests.

use crate::types::PieceKind;

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
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

/// Supplies the kind of every newly spawned piece.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

/// Uniformly random kinds from a seeded [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformSource {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed list of kinds, cycling back to the start when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    pieces: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// Panics if `pieces` is empty.
    pub fn new(pieces: impl Into<Vec<PieceKind>>) -> Self {
        let pieces = pieces.into();
        assert!(!pieces.is_empty(), "SequenceSource needs at least one piece");
        Self { pieces, index: 0 }
    }

    /// Always the same kind.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequenceSource {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.pieces[self.index % self.pieces.len()];
        self.index = self.index.wrapping_add(1);
        kind
    }
}
