//! Core engine module - pure, deterministic, and testable
//!
//! This module contains the complete rule engine of the match-three board:
//! the grid of playable cells, the pieces occupying them, and the algorithms
//! that detect valid moves, resolve matches, and refill the board. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards (for testing)
//! - **Testable**: Comprehensive unit tests for all board rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 7x9 fixed-size optional-cell storage (tile mask and piece layer)
//! - [`piece`]: a placed piece with stable id, position, and kind
//! - [`swap`]: an unordered adjacent-piece pair with commutative equality
//! - [`chain`]: a scored run of three or more same-kind pieces
//! - [`scoring`]: chain score math with the per-turn combo multiplier
//! - [`rng`]: seedable LCG and the level-scoped kind picker
//! - [`board`]: the orchestrator - shuffle, swap legality, matching, gravity, refill
//! - [`snapshot`]: plain-data board view for observers
//!
//! # Turn Protocol
//!
//! The engine exposes primitives; the caller owns the sequencing:
//!
//! 1. [`Board::perform_swap`] (after [`Board::is_possible_swap`] says yes)
//! 2. [`Board::remove_matches`] - returns scored chains, empties their cells
//! 3. [`Board::fill_holes`] - gravity, returns per-column fall lists
//! 4. [`Board::top_up_pieces`] - refill, returns per-column spawn lists
//! 5. repeat from 2 until `remove_matches` returns nothing (cascade done)
//! 6. [`Board::reset_combo_multiplier`] + [`Board::detect_possible_swaps`]
//!
//! # Example
//!
//! ```
//! use gridcrush_core::{Board, Grid, KindPicker};
//! use gridcrush_core::types::{KINDS_PER_LEVEL, NUM_CELLS};
//!
//! let mask = Grid::fully_playable();
//! let picker = KindPicker::new(KINDS_PER_LEVEL, 12345);
//! let mut board = Board::new(mask, picker);
//!
//! // A shuffled board is fully populated and always has a legal move.
//! let pieces = board.shuffle();
//! assert_eq!(pieces.len(), NUM_CELLS);
//! assert!(!board.possible_swaps().is_empty());
//! ```

pub mod board;
pub mod chain;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod swap;

pub use gridcrush_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ColumnPieces};
pub use chain::{Chain, ChainKind};
pub use grid::{Grid, Tile};
pub use piece::Piece;
pub use rng::{KindPicker, SimpleRng};
pub use scoring::chain_score;
pub use snapshot::BoardSnapshot;
pub use swap::Swap;
