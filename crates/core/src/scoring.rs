//! Scoring module - chain score math
//!
//! A 3-chain is worth 60 points, a 4-chain 120, a 5-chain 180, and so on.
//! Cascades are rewarded through the combo multiplier: it starts at 1 each
//! turn and grows by one for every chain scored within the turn, so the
//! second chain of a cascade is worth double, the third triple.
//!
//! The multiplier lives on the board (it is per-turn state); this module is
//! the pure formula.

use gridcrush_types::{CHAIN_BASE_SCORE, MIN_CHAIN_LENGTH};

/// Points for a chain of `length` pieces at the given combo multiplier
///
/// `length` must be at least [`MIN_CHAIN_LENGTH`]; match detection never
/// produces shorter runs.
pub fn chain_score(length: usize, combo_multiplier: u32) -> u32 {
    debug_assert!(length >= MIN_CHAIN_LENGTH);
    CHAIN_BASE_SCORE
        .saturating_mul(length as u32 - 2)
        .saturating_mul(combo_multiplier)
}
