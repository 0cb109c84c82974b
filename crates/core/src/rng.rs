//! RNG module - seedable randomness and the level-scoped kind picker
//!
//! Each board owns its random source: a simple LCG seeded at construction,
//! so the same seed reproduces the same level exactly. The picker restricts
//! play to a random subset of the full kind enumeration, drawn without
//! replacement once and fixed for the level's lifetime.

use arrayvec::ArrayVec;

use gridcrush_types::{PieceKind, ALL_KINDS};

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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Picks piece kinds from a level-scoped random subset of [`ALL_KINDS`]
///
/// Construction shuffles the full enumeration and keeps the first
/// `subset_size` kinds as the level's *applicable* set. Every pick is
/// uniform over that set.
#[derive(Debug, Clone)]
pub struct KindPicker {
    /// The level's applicable kinds, fixed at construction
    applicable: ArrayVec<PieceKind, 18>,
    rng: SimpleRng,
}

impl KindPicker {
    /// Create a picker playing `subset_size` kinds, seeded for determinism
    ///
    /// # Panics
    ///
    /// Panics unless `2 <= subset_size <= 18`. A subset of one kind would
    /// make every exclusion-pick impossible (the whole board is one kind);
    /// initial fill's two-run exclusion additionally needs at least 3, which
    /// any realistic configuration (the default is 6) satisfies.
    pub fn new(subset_size: usize, seed: u32) -> Self {
        assert!(
            (2..=ALL_KINDS.len()).contains(&subset_size),
            "subset size {subset_size} not in 2..=18"
        );
        let mut rng = SimpleRng::new(seed);
        let mut kinds = ALL_KINDS;
        rng.shuffle(&mut kinds);

        let applicable = kinds[..subset_size].iter().copied().collect();
        Self { applicable, rng }
    }

    /// The level's applicable kinds
    pub fn applicable_kinds(&self) -> &[PieceKind] {
        &self.applicable
    }

    /// A uniformly random applicable kind
    pub fn pick_random(&mut self) -> PieceKind {
        let index = self.rng.next_range(self.applicable.len() as u32) as usize;
        self.applicable[index]
    }

    /// A uniformly random applicable kind outside `excluded`
    ///
    /// Replaces retry-until-different sampling loops with a bounded draw:
    /// the candidates are materialized and one is picked, so termination
    /// does not depend on luck.
    ///
    /// # Panics
    ///
    /// Panics if `excluded` covers the whole applicable set. Callers exclude
    /// at most two kinds (initial fill) against a subset of at least 3, or
    /// one kind (top-up) against a subset of at least 2, which the
    /// constructor enforces.
    pub fn pick_excluding(&mut self, excluded: &[PieceKind]) -> PieceKind {
        let candidates: ArrayVec<PieceKind, 18> = self
            .applicable
            .iter()
            .copied()
            .filter(|kind| !excluded.contains(kind))
            .collect();
        assert!(
            !candidates.is_empty(),
            "exclusions cover the whole applicable kind set"
        );
        let index = self.rng.next_range(candidates.len() as u32) as usize;
        candidates[index]
    }
}
