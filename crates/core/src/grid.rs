//! Grid module - fixed-size optional-cell storage
//!
//! Both board layers use the same storage shape: a 7x9 grid where each cell
//! holds an `Option<T>`. The tile mask (`Grid<Tile>`) is built once per level
//! and never changes; the piece layer (`Grid<Piece>`) mutates on every move.
//! Uses a flat array for cache locality, row-major with row 0 at the bottom.
//!
//! Coordinates outside `[0, NUM_COLUMNS) x [0, NUM_ROWS)` are a programming
//! error, not a recoverable condition: accessors assert. Callers that cannot
//! guarantee a coordinate use [`Grid::in_bounds`] first.

use gridcrush_types::{NUM_CELLS, NUM_COLUMNS, NUM_ROWS};

/// Marker occupying playable cells of the tile mask
///
/// A mask cell holding `Some(Tile)` is part of the level; `None` cells never
/// hold pieces and are skipped by every board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile;

/// Fixed `NUM_COLUMNS x NUM_ROWS` storage of optional values
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    /// Flat array of cells, row-major (row * NUM_COLUMNS + column)
    cells: [Option<T>; NUM_CELLS],
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell empty
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CELLS],
        }
    }

    /// Calculate the flat index for (column, row)
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of range.
    #[inline(always)]
    fn index(column: usize, row: usize) -> usize {
        assert!(column < NUM_COLUMNS, "column {column} out of range");
        assert!(row < NUM_ROWS, "row {row} out of range");
        row * NUM_COLUMNS + column
    }

    /// Whether (column, row) addresses a cell of this grid
    pub fn in_bounds(column: usize, row: usize) -> bool {
        column < NUM_COLUMNS && row < NUM_ROWS
    }

    /// Value at (column, row); `None` for an empty cell
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<T> {
        self.cells[Self::index(column, row)]
    }

    /// Store `value` at (column, row), overwriting the previous content
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of range.
    pub fn set(&mut self, column: usize, row: usize, value: Option<T>) {
        self.cells[Self::index(column, row)] = value;
    }

    /// Remove and return the value at (column, row)
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of range.
    pub fn take(&mut self, column: usize, row: usize) -> Option<T> {
        self.cells[Self::index(column, row)].take()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = [None; NUM_CELLS];
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Grid<Tile> {
    /// Mask with every cell playable
    pub fn fully_playable() -> Self {
        Self {
            cells: [Some(Tile); NUM_CELLS],
        }
    }
}

impl<T: Copy> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}
