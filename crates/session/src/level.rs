//! Level module - the level definition data model
//!
//! A level supplies three things: a rectangular 0/1 mask of playable cells,
//! a target score, and a move budget. The definition is pure data - where
//! it comes from (bundled JSON, an editor, a test literal) is the caller's
//! concern, not this crate's.

use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};

use gridcrush_core::{Grid, Tile};
use gridcrush_types::{NUM_COLUMNS, NUM_ROWS};

/// A level definition: playable-cell mask, target score, move budget
///
/// `tiles` rows are authored top-to-bottom, the way level designers read
/// them; the engine indexes rows bottom-up, so [`build_mask`] flips
/// vertically. Serialized keys are camelCase (`targetScore`):
///
/// ```
/// # use gridcrush_session::LevelConfig;
/// let json = r#"{
///     "tiles": [
///         [1, 1, 1, 1, 1, 1, 1],
///         [1, 1, 1, 1, 1, 1, 1],
///         [1, 1, 1, 1, 1, 1, 1],
///         [1, 1, 0, 1, 0, 1, 1],
///         [1, 1, 1, 1, 1, 1, 1],
///         [1, 1, 1, 1, 1, 1, 1],
///         [1, 1, 1, 1, 1, 1, 1],
///         [1, 1, 1, 1, 1, 1, 1],
///         [1, 1, 1, 1, 1, 1, 1]
///     ],
///     "targetScore": 1000,
///     "moves": 15
/// }"#;
/// let config: LevelConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.target_score, 1000);
/// assert!(config.build_mask().is_ok());
/// ```
///
/// [`build_mask`]: Self::build_mask
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    /// Playable-cell mask, rows top-to-bottom, 1 = playable
    pub tiles: Vec<Vec<u8>>,
    /// Score the player must reach within the move budget
    pub target_score: u32,
    /// Number of moves the player gets
    pub moves: u32,
}

impl LevelConfig {
    /// A level where every cell is playable
    pub fn fully_open(target_score: u32, moves: u32) -> Self {
        Self {
            tiles: vec![vec![1; NUM_COLUMNS]; NUM_ROWS],
            target_score,
            moves,
        }
    }

    /// Validate the tile mask and convert it to the engine's row convention
    ///
    /// Errors when the mask is not exactly `NUM_ROWS x NUM_COLUMNS` or when
    /// a cell holds anything but 0 or 1.
    pub fn build_mask(&self) -> Result<Grid<Tile>> {
        ensure!(
            self.tiles.len() == NUM_ROWS,
            "expected {NUM_ROWS} tile rows, got {}",
            self.tiles.len()
        );

        let mut mask = Grid::new();
        for (row_index, row) in self.tiles.iter().enumerate() {
            ensure!(
                row.len() == NUM_COLUMNS,
                "tile row {row_index} has {} cells, expected {NUM_COLUMNS}",
                row.len()
            );

            // Config row 0 is the top of the board; engine row 0 is the bottom.
            let mask_row = NUM_ROWS - row_index - 1;
            for (column, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => mask.set(column, mask_row, Some(Tile)),
                    other => bail!(
                        "tile row {row_index}, column {column}: \
                         invalid value {other} (expected 0 or 1)"
                    ),
                }
            }
        }
        Ok(mask)
    }
}
