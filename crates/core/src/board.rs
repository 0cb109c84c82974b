//! Board module - the engine orchestrator
//!
//! The board owns the two grid layers (the immutable tile mask and the
//! mutable piece layer), the level's kind picker, the legal-swap set, and
//! the per-turn combo multiplier. Every rule of the game funnels through
//! here: shuffle and initial fill, swap legality and application, match
//! detection and scoring, gravity, and refill.
//!
//! The board does not sequence turns - the caller drives the documented
//! protocol (swap, remove, fill, top up, repeat) and recomputes the
//! legal-swap set once the cascade settles. See the crate docs.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use gridcrush_types::{PieceKind, MIN_CHAIN_LENGTH, NUM_COLUMNS, NUM_ROWS};

use crate::chain::{Chain, ChainKind};
use crate::grid::{Grid, Tile};
use crate::piece::Piece;
use crate::rng::KindPicker;
use crate::scoring::chain_score;
use crate::snapshot::BoardSnapshot;
use crate::swap::Swap;

/// Pieces of one column, in discovery order
///
/// Returned by [`Board::fill_holes`] (fall order, lowest hole first) and
/// [`Board::top_up_pieces`] (spawn order, topmost cell first). Bounded by
/// the column height, so building one never allocates.
pub type ColumnPieces = ArrayVec<Piece, NUM_ROWS>;

/// The match-three board engine
#[derive(Debug, Clone)]
pub struct Board {
    /// Playable-cell mask, fixed for the life of the level
    tiles: Grid<Tile>,
    /// Piece layer; a cell is `Some` iff a piece currently occupies it
    pieces: Grid<Piece>,
    picker: KindPicker,
    possible_swaps: HashSet<Swap>,
    /// Per-turn cascade reward, 1 on a fresh turn
    combo_multiplier: u32,
    /// Monotonic id handed to the next spawned piece
    next_piece_id: u32,
}

impl Board {
    /// Create an empty board over the given mask
    ///
    /// The board starts with no pieces; call [`shuffle`](Self::shuffle) to
    /// populate it.
    pub fn new(tiles: Grid<Tile>, picker: KindPicker) -> Self {
        Self {
            tiles,
            pieces: Grid::new(),
            picker,
            possible_swaps: HashSet::new(),
            combo_multiplier: 1,
            next_piece_id: 0,
        }
    }

    /// Tile mask entry at (column, row); `None` means the cell is not playable
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of range.
    pub fn tile_at(&self, column: usize, row: usize) -> Option<Tile> {
        self.tiles.get(column, row)
    }

    /// Whether (column, row) is a playable cell of this level
    pub fn is_playable(&self, column: usize, row: usize) -> bool {
        self.tiles.get(column, row).is_some()
    }

    /// Piece currently at (column, row), if any
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of range.
    pub fn piece_at(&self, column: usize, row: usize) -> Option<Piece> {
        self.pieces.get(column, row)
    }

    /// Number of pieces currently on the board
    pub fn piece_count(&self) -> usize {
        self.pieces.occupied_count()
    }

    /// The current legal-swap set
    ///
    /// Valid until the next structural change to the piece layer. Empty
    /// means the board is dead and needs a [`shuffle`](Self::shuffle).
    pub fn possible_swaps(&self) -> &HashSet<Swap> {
        &self.possible_swaps
    }

    /// Current combo multiplier (1 on a fresh turn)
    pub fn combo_multiplier(&self) -> u32 {
        self.combo_multiplier
    }

    /// Start a new turn: the next chain scored is worth its base value
    pub fn reset_combo_multiplier(&mut self) {
        self.combo_multiplier = 1;
    }

    /// Populate the board until at least one legal move exists
    ///
    /// Repeatedly regenerates every playable cell and recomputes the
    /// legal-swap set until the set is non-empty. On return the board is
    /// fully populated and playable. Returns the final population.
    ///
    /// Masks so constrained that no population admits a legal move (for
    /// example a single isolated cell) would never converge; real levels
    /// always admit one.
    pub fn shuffle(&mut self) -> Vec<Piece> {
        loop {
            self.pieces.clear();
            let created = self.create_initial_pieces();
            self.detect_possible_swaps();
            if !self.possible_swaps.is_empty() {
                return created;
            }
        }
    }

    /// Fill every playable cell with a piece that completes no match
    ///
    /// Kinds are chosen excluding whichever kind already forms a pair in the
    /// two cells to the left and the two below - a one-directional look-back
    /// that suffices because cells are filled in reading order.
    fn create_initial_pieces(&mut self) -> Vec<Piece> {
        let mut created = Vec::new();

        for row in 0..NUM_ROWS {
            for column in 0..NUM_COLUMNS {
                if self.tiles.get(column, row).is_none() {
                    continue;
                }

                let mut excluded: ArrayVec<PieceKind, 2> = ArrayVec::new();
                if column >= 2 {
                    if let Some(kind) = self.pair_kind(column - 1, row, column - 2, row) {
                        excluded.push(kind);
                    }
                }
                if row >= 2 {
                    if let Some(kind) = self.pair_kind(column, row - 1, column, row - 2) {
                        if !excluded.contains(&kind) {
                            excluded.push(kind);
                        }
                    }
                }

                let kind = self.picker.pick_excluding(&excluded);
                created.push(self.spawn_piece(column, row, kind));
            }
        }
        created
    }

    /// Kind shared by the two given cells, if both hold it
    fn pair_kind(&self, c1: usize, r1: usize, c2: usize, r2: usize) -> Option<PieceKind> {
        let first = self.kind_at(c1, r1)?;
        (self.kind_at(c2, r2) == Some(first)).then_some(first)
    }

    fn kind_at(&self, column: usize, row: usize) -> Option<PieceKind> {
        self.pieces.get(column, row).map(|piece| piece.kind())
    }

    fn spawn_piece(&mut self, column: usize, row: usize, kind: PieceKind) -> Piece {
        let piece = Piece::new(self.next_piece_id, column, row, kind);
        self.next_piece_id = self.next_piece_id.wrapping_add(1);
        self.pieces.set(column, row, Some(piece));
        piece
    }

    /// Put a piece of the given kind at (column, row)
    ///
    /// Intended for scenario setup and tests; gameplay mutation goes through
    /// the swap/match/gravity operations. Replaces any piece already there.
    ///
    /// # Panics
    ///
    /// Panics when the cell is out of range or not playable.
    pub fn place_piece(&mut self, column: usize, row: usize, kind: PieceKind) -> Piece {
        assert!(
            self.is_playable(column, row),
            "cell ({column}, {row}) is not playable"
        );
        self.spawn_piece(column, row, kind)
    }

    /// Recompute the legal-swap set from scratch
    ///
    /// For every occupied cell, tentatively exchanges it with its right and
    /// upward neighbors and keeps the swap when either destination then
    /// anchors a chain. One pass, constant-size local checks. The tentative
    /// exchange moves cell contents only; recorded piece coordinates stay
    /// put until a real [`perform_swap`](Self::perform_swap).
    pub fn detect_possible_swaps(&mut self) {
        let mut set = HashSet::new();

        for row in 0..NUM_ROWS {
            for column in 0..NUM_COLUMNS {
                let Some(piece) = self.pieces.get(column, row) else {
                    continue;
                };

                // Exchange with the right neighbor, if that cell holds a piece.
                if column < NUM_COLUMNS - 1 {
                    if let Some(other) = self.pieces.get(column + 1, row) {
                        self.pieces.set(column, row, Some(other));
                        self.pieces.set(column + 1, row, Some(piece));

                        if self.has_chain_at(column + 1, row) || self.has_chain_at(column, row) {
                            set.insert(Swap::new(piece, other));
                        }

                        self.pieces.set(column, row, Some(piece));
                        self.pieces.set(column + 1, row, Some(other));
                    }
                }

                // Exchange with the upward neighbor.
                if row < NUM_ROWS - 1 {
                    if let Some(other) = self.pieces.get(column, row + 1) {
                        self.pieces.set(column, row, Some(other));
                        self.pieces.set(column, row + 1, Some(piece));

                        if self.has_chain_at(column, row + 1) || self.has_chain_at(column, row) {
                            set.insert(Swap::new(piece, other));
                        }

                        self.pieces.set(column, row, Some(piece));
                        self.pieces.set(column, row + 1, Some(other));
                    }
                }
            }
        }

        self.possible_swaps = set;
    }

    /// Whether the swap is in the current legal-swap set
    ///
    /// Membership is commutative: the order the two pieces were named in
    /// does not matter.
    pub fn is_possible_swap(&self, swap: &Swap) -> bool {
        self.possible_swaps.contains(swap)
    }

    /// Exchange the two pieces of the swap, updating their coordinates
    ///
    /// Performs no legality check and no legal-swap recomputation: callers
    /// validate with [`is_possible_swap`](Self::is_possible_swap) first and
    /// recompute the legal set once the whole cascade has settled. Applying
    /// the same swap again undoes it.
    ///
    /// # Panics
    ///
    /// Panics when either endpoint cell holds no piece.
    pub fn perform_swap(&mut self, swap: &Swap) {
        let (column_a, row_a) = (swap.a().column(), swap.a().row());
        let (column_b, row_b) = (swap.b().column(), swap.b().row());

        let mut a = self
            .pieces
            .take(column_a, row_a)
            .expect("swap endpoint holds no piece");
        let mut b = self
            .pieces
            .take(column_b, row_b)
            .expect("swap endpoint holds no piece");

        a.set_position(column_b, row_b);
        b.set_position(column_a, row_a);
        self.pieces.set(column_a, row_a, Some(b));
        self.pieces.set(column_b, row_b, Some(a));
    }

    /// Whether the piece at (column, row) sits in a run of three or more
    ///
    /// Counts contiguous same-kind pieces left/right and down/up from the
    /// cell. Only straight runs are considered; overlapping (L/T) shapes
    /// are not detected. Returns false for an empty cell.
    // TODO: detect L/T overlap shapes (two perpendicular 2-runs sharing this cell)
    pub fn has_chain_at(&self, column: usize, row: usize) -> bool {
        let Some(kind) = self.kind_at(column, row) else {
            return false;
        };

        let mut horizontal = 1;
        let mut i = column;
        while i > 0 && self.kind_at(i - 1, row) == Some(kind) {
            i -= 1;
            horizontal += 1;
        }
        let mut i = column + 1;
        while i < NUM_COLUMNS && self.kind_at(i, row) == Some(kind) {
            i += 1;
            horizontal += 1;
        }
        if horizontal >= MIN_CHAIN_LENGTH {
            return true;
        }

        let mut vertical = 1;
        let mut i = row;
        while i > 0 && self.kind_at(column, i - 1) == Some(kind) {
            i -= 1;
            vertical += 1;
        }
        let mut i = row + 1;
        while i < NUM_ROWS && self.kind_at(column, i) == Some(kind) {
            i += 1;
            vertical += 1;
        }
        vertical >= MIN_CHAIN_LENGTH
    }

    /// Resolve all current matches: detect, clear, and score the chains
    ///
    /// Returns the scored chains in a fixed, documented order: horizontal
    /// chains in row-then-column discovery order, then vertical chains in
    /// column-then-row discovery order. The combo multiplier increments
    /// once per chain in exactly that order, so cascades score
    /// deterministically. An empty result is the cascade's terminating
    /// condition.
    pub fn remove_matches(&mut self) -> Vec<Chain> {
        let mut chains = self.detect_horizontal_matches();
        chains.extend(self.detect_vertical_matches());

        for chain in &chains {
            for piece in chain.pieces() {
                self.pieces.set(piece.column(), piece.row(), None);
            }
        }

        for chain in &mut chains {
            chain.set_score(chain_score(chain.len(), self.combo_multiplier));
            self.combo_multiplier += 1;
        }

        chains
    }

    /// Scan each row left-to-right for runs of three or more
    ///
    /// A detected run is consumed whole: the scan resumes past it, so runs
    /// never overlap and no cell is visited twice.
    fn detect_horizontal_matches(&self) -> Vec<Chain> {
        let mut chains = Vec::new();

        for row in 0..NUM_ROWS {
            let mut column = 0;
            while column + 2 < NUM_COLUMNS {
                let Some(kind) = self.kind_at(column, row) else {
                    column += 1;
                    continue;
                };

                if self.kind_at(column + 1, row) == Some(kind)
                    && self.kind_at(column + 2, row) == Some(kind)
                {
                    let mut chain = Chain::new(ChainKind::Horizontal);
                    while column < NUM_COLUMNS {
                        match self.pieces.get(column, row) {
                            Some(piece) if piece.kind() == kind => {
                                chain.push(piece);
                                column += 1;
                            }
                            _ => break,
                        }
                    }
                    chains.push(chain);
                    continue;
                }
                column += 1;
            }
        }
        chains
    }

    /// Scan each column bottom-to-top for runs of three or more
    fn detect_vertical_matches(&self) -> Vec<Chain> {
        let mut chains = Vec::new();

        for column in 0..NUM_COLUMNS {
            let mut row = 0;
            while row + 2 < NUM_ROWS {
                let Some(kind) = self.kind_at(column, row) else {
                    row += 1;
                    continue;
                };

                if self.kind_at(column, row + 1) == Some(kind)
                    && self.kind_at(column, row + 2) == Some(kind)
                {
                    let mut chain = Chain::new(ChainKind::Vertical);
                    while row < NUM_ROWS {
                        match self.pieces.get(column, row) {
                            Some(piece) if piece.kind() == kind => {
                                chain.push(piece);
                                row += 1;
                            }
                            _ => break,
                        }
                    }
                    chains.push(chain);
                    continue;
                }
                row += 1;
            }
        }
        chains
    }

    /// Let pieces fall into the holes left by removed matches
    ///
    /// Scans each column bottom-to-top; every empty playable cell pulls down
    /// the nearest piece above it. Returns the moved pieces per column
    /// (columns with no movement omitted), in the order the holes were
    /// filled - the caller animates them as a falling sequence. Relative
    /// vertical order within a column is preserved.
    pub fn fill_holes(&mut self) -> Vec<ColumnPieces> {
        let mut columns = Vec::new();

        for column in 0..NUM_COLUMNS {
            let mut moved = ColumnPieces::new();

            for row in 0..NUM_ROWS {
                if self.tiles.get(column, row).is_none() || self.pieces.get(column, row).is_some() {
                    continue;
                }
                for lookup in row + 1..NUM_ROWS {
                    if let Some(mut piece) = self.pieces.take(column, lookup) {
                        piece.set_position(column, row);
                        self.pieces.set(column, row, Some(piece));
                        moved.push(piece);
                        break;
                    }
                }
            }

            if !moved.is_empty() {
                columns.push(moved);
            }
        }
        columns
    }

    /// Spawn new pieces into the cells left empty after gravity
    ///
    /// Works each column from the top row downward until it meets an
    /// occupied cell. Each spawn excludes the kind of the previous spawn in
    /// the same column, so refills never arrive as a ready-made vertical
    /// pair. Returns the new pieces per column (columns with no spawns
    /// omitted) in top-to-bottom spawn order for animated entry.
    pub fn top_up_pieces(&mut self) -> Vec<ColumnPieces> {
        let mut columns = Vec::new();

        for column in 0..NUM_COLUMNS {
            let mut spawned = ColumnPieces::new();
            let mut previous: Option<PieceKind> = None;

            let mut row = NUM_ROWS;
            while row > 0 && self.pieces.get(column, row - 1).is_none() {
                row -= 1;
                if self.tiles.get(column, row).is_none() {
                    continue;
                }

                let kind = match previous {
                    Some(prev) => self.picker.pick_excluding(&[prev]),
                    None => self.picker.pick_random(),
                };
                previous = Some(kind);
                spawned.push(self.spawn_piece(column, row, kind));
            }

            if !spawned.is_empty() {
                columns.push(spawned);
            }
        }
        columns
    }

    /// Write the current board into a reusable snapshot
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        for row in 0..NUM_ROWS {
            for column in 0..NUM_COLUMNS {
                out.kinds[row][column] = self
                    .kind_at(column, row)
                    .map(|kind| kind.index())
                    .unwrap_or(0);
                out.playable[row][column] = self.is_playable(column, row);
            }
        }
    }

    /// Plain-data view of the board for observers
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
