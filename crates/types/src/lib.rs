//! Core types module - shared constants and the piece-kind enumeration
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (engine core, session layer, presentation).
//!
//! # Board Dimensions
//!
//! - **Columns**: 7 (indexed 0-6, left to right)
//! - **Rows**: 9 (indexed 0-8, bottom to top)
//!
//! Rows are indexed bottom-up: row 0 is the lowest row, the one pieces
//! settle into under gravity. Level definitions authored top-to-bottom are
//! flipped on ingestion (see the session crate).
//!
//! # Match Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_CHAIN_LENGTH` | 3 | Shortest run of same-kind pieces that matches |
//! | `CHAIN_BASE_SCORE` | 60 | Base points per chain: `60 × (length − 2) × combo` |
//! | `KINDS_PER_LEVEL` | 6 | Size of the per-level random kind subset |
//!
//! # Examples
//!
//! ```
//! use gridcrush_types::{PieceKind, ALL_KINDS, NUM_COLUMNS, NUM_ROWS};
//!
//! // The full enumeration has 18 kinds; a level plays with a subset of 6.
//! assert_eq!(ALL_KINDS.len(), 18);
//!
//! // Parse from string (case-insensitive)
//! let kind = PieceKind::from_str("ruby").unwrap();
//! assert_eq!(kind, PieceKind::Ruby);
//! assert_eq!(kind.as_str(), "ruby");
//!
//! // Kind indices are stable and 1-based (0 encodes an empty cell).
//! assert_eq!(PieceKind::Amber.index(), 1);
//!
//! // Board dimensions
//! assert_eq!(NUM_COLUMNS, 7);
//! assert_eq!(NUM_ROWS, 9);
//! ```

/// Number of board columns (indexed 0-6, left to right)
pub const NUM_COLUMNS: usize = 7;

/// Number of board rows (indexed 0-8, bottom to top)
pub const NUM_ROWS: usize = 9;

/// Total number of cells on the board
pub const NUM_CELLS: usize = NUM_COLUMNS * NUM_ROWS;

/// Size of the random kind subset a level plays with
///
/// Drawn without replacement from [`ALL_KINDS`] at picker construction and
/// fixed for the level's lifetime.
pub const KINDS_PER_LEVEL: usize = 6;

/// Shortest run of same-kind pieces that counts as a match
pub const MIN_CHAIN_LENGTH: usize = 3;

/// Base points per chain: `CHAIN_BASE_SCORE × (length − 2) × combo multiplier`
pub const CHAIN_BASE_SCORE: u32 = 60;

/// The eighteen piece kinds
///
/// A level never plays with all of them: a random subset of
/// [`KINDS_PER_LEVEL`] is drawn at level setup (see the core crate's
/// `KindPicker`), so the same board feels different level to level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Amber,
    Amethyst,
    Aquamarine,
    Citrine,
    Coral,
    Emerald,
    Garnet,
    Jade,
    Lapis,
    Moonstone,
    Obsidian,
    Onyx,
    Opal,
    Pearl,
    Quartz,
    Ruby,
    Sapphire,
    Topaz,
}

/// All piece kinds, in declaration order
pub const ALL_KINDS: [PieceKind; 18] = [
    PieceKind::Amber,
    PieceKind::Amethyst,
    PieceKind::Aquamarine,
    PieceKind::Citrine,
    PieceKind::Coral,
    PieceKind::Emerald,
    PieceKind::Garnet,
    PieceKind::Jade,
    PieceKind::Lapis,
    PieceKind::Moonstone,
    PieceKind::Obsidian,
    PieceKind::Onyx,
    PieceKind::Opal,
    PieceKind::Pearl,
    PieceKind::Quartz,
    PieceKind::Ruby,
    PieceKind::Sapphire,
    PieceKind::Topaz,
];

impl PieceKind {
    /// Stable 1-based index of this kind
    ///
    /// Used by board snapshots, where `0` encodes an empty cell.
    pub fn index(&self) -> u8 {
        *self as u8 + 1
    }

    /// Look up a kind by its 1-based [`index`](Self::index)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => None,
            n => ALL_KINDS.get(n as usize - 1).copied(),
        }
    }

    /// Parse a kind from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrush_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("opal"), Some(PieceKind::Opal));
    /// assert_eq!(PieceKind::from_str("Topaz"), Some(PieceKind::Topaz));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        ALL_KINDS.iter().copied().find(|k| k.as_str() == lower)
    }

    /// Lowercase name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Amber => "amber",
            PieceKind::Amethyst => "amethyst",
            PieceKind::Aquamarine => "aquamarine",
            PieceKind::Citrine => "citrine",
            PieceKind::Coral => "coral",
            PieceKind::Emerald => "emerald",
            PieceKind::Garnet => "garnet",
            PieceKind::Jade => "jade",
            PieceKind::Lapis => "lapis",
            PieceKind::Moonstone => "moonstone",
            PieceKind::Obsidian => "obsidian",
            PieceKind::Onyx => "onyx",
            PieceKind::Opal => "opal",
            PieceKind::Pearl => "pearl",
            PieceKind::Quartz => "quartz",
            PieceKind::Ruby => "ruby",
            PieceKind::Sapphire => "sapphire",
            PieceKind::Topaz => "topaz",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
