//! Engine tests - shuffle, swap legality, matching, gravity, refill
//!
//! Deterministic scenarios are built on a background pattern that contains
//! no runs of three anywhere (two alternating row flavors), with the
//! interesting pieces planted over it.

use gridcrush::core::{Board, Grid, KindPicker, Swap};
use gridcrush::types::{PieceKind, KINDS_PER_LEVEL, NUM_CELLS, NUM_COLUMNS, NUM_ROWS};

fn open_board(seed: u32) -> Board {
    Board::new(Grid::fully_playable(), KindPicker::new(KINDS_PER_LEVEL, seed))
}

/// Fill the whole board so that no three consecutive cells match in any
/// row or column: even rows alternate Amber/Citrine, odd rows alternate
/// Emerald/Moonstone.
fn pattern_board() -> Board {
    let mut board = open_board(1);
    for row in 0..NUM_ROWS {
        for column in 0..NUM_COLUMNS {
            let kind = match (row % 2, column % 2) {
                (0, 0) => PieceKind::Amber,
                (0, _) => PieceKind::Citrine,
                (_, 0) => PieceKind::Emerald,
                (_, _) => PieceKind::Moonstone,
            };
            board.place_piece(column, row, kind);
        }
    }
    board
}

// ============== Shuffle ==============

#[test]
fn test_shuffle_fills_every_playable_cell() {
    for seed in [1, 7, 12345, 99999] {
        let mut board = open_board(seed);
        let pieces = board.shuffle();

        assert_eq!(pieces.len(), NUM_CELLS);
        assert_eq!(board.piece_count(), NUM_CELLS);
        for row in 0..NUM_ROWS {
            for column in 0..NUM_COLUMNS {
                assert!(board.piece_at(column, row).is_some());
            }
        }
    }
}

#[test]
fn test_shuffle_leaves_a_legal_move() {
    for seed in [1, 7, 12345, 99999] {
        let mut board = open_board(seed);
        board.shuffle();
        assert!(!board.possible_swaps().is_empty(), "seed {seed}");
    }
}

#[test]
fn test_shuffle_creates_no_ready_matches() {
    for seed in [1, 7, 12345, 99999] {
        let mut board = open_board(seed);
        board.shuffle();
        assert!(board.remove_matches().is_empty(), "seed {seed}");
    }
}

#[test]
fn test_shuffle_respects_the_mask() {
    let mut mask = Grid::fully_playable();
    mask.set(0, 0, None);
    mask.set(3, 4, None);
    mask.set(6, 8, None);

    let mut board = Board::new(mask, KindPicker::new(KINDS_PER_LEVEL, 5));
    let pieces = board.shuffle();

    assert_eq!(pieces.len(), NUM_CELLS - 3);
    assert_eq!(board.piece_count(), NUM_CELLS - 3);
    assert!(board.piece_at(0, 0).is_none());
    assert!(board.piece_at(3, 4).is_none());
    assert!(board.piece_at(6, 8).is_none());
}

#[test]
fn test_shuffle_is_deterministic_per_seed() {
    let mut a = open_board(4242);
    let mut b = open_board(4242);
    a.shuffle();
    b.shuffle();

    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.possible_swaps().len(), b.possible_swaps().len());
}

// ============== Swap legality ==============

#[test]
fn test_detect_possible_swaps_is_sound_and_complete() {
    for seed in [1, 7, 12345] {
        let mut board = open_board(seed);
        board.shuffle();
        let before = board.snapshot();

        // Every adjacent pair must be classified exactly as "apply it and
        // look for a chain at either destination" would classify it.
        for row in 0..NUM_ROWS {
            for column in 0..NUM_COLUMNS {
                let Some(piece) = board.piece_at(column, row) else {
                    continue;
                };
                for (nc, nr) in [(column + 1, row), (column, row + 1)] {
                    if nc >= NUM_COLUMNS || nr >= NUM_ROWS {
                        continue;
                    }
                    let Some(other) = board.piece_at(nc, nr) else {
                        continue;
                    };

                    let swap = Swap::new(piece, other);
                    board.perform_swap(&swap);
                    let creates_chain =
                        board.has_chain_at(column, row) || board.has_chain_at(nc, nr);
                    board.perform_swap(&swap);

                    assert_eq!(
                        creates_chain,
                        board.is_possible_swap(&swap),
                        "seed {seed}: ({column},{row})<->({nc},{nr})"
                    );
                }
            }
        }

        // The apply/undo probing left the board untouched.
        assert_eq!(board.snapshot(), before);
    }
}

#[test]
fn test_legal_swap_membership_is_commutative() {
    let mut board = open_board(12345);
    board.shuffle();

    for swap in board.possible_swaps() {
        let reversed = Swap::new(swap.b(), swap.a());
        assert!(board.is_possible_swap(&reversed));
    }
}

#[test]
fn test_swapping_back_restores_the_board() {
    let mut board = open_board(7);
    board.shuffle();
    let before = board.snapshot();

    let swap = *board
        .possible_swaps()
        .iter()
        .next()
        .expect("shuffled board has a legal swap");
    board.perform_swap(&swap);
    assert_ne!(board.snapshot(), before);
    board.perform_swap(&swap);
    assert_eq!(board.snapshot(), before);
}

// ============== Match detection and scoring ==============

#[test]
fn test_three_in_a_row_scores_sixty() {
    let mut board = pattern_board();
    board.place_piece(2, 0, PieceKind::Ruby);
    board.place_piece(3, 0, PieceKind::Ruby);
    board.place_piece(4, 0, PieceKind::Ruby);

    let chains = board.remove_matches();
    assert_eq!(chains.len(), 1);

    let chain = &chains[0];
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.score(), 60);
    assert!(chain.pieces().iter().all(|p| p.kind() == PieceKind::Ruby));

    // Matched cells are empty afterwards; the rest of the board is intact.
    for column in 2..=4 {
        assert!(board.piece_at(column, 0).is_none());
    }
    assert_eq!(board.piece_count(), NUM_CELLS - 3);

    // Fixpoint: nothing left to remove.
    assert!(board.remove_matches().is_empty());
}

#[test]
fn test_longer_runs_score_by_length() {
    let mut board = pattern_board();
    for column in 0..4 {
        board.place_piece(column, 2, PieceKind::Ruby);
    }

    let chains = board.remove_matches();
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].len(), 4);
    assert_eq!(chains[0].score(), 120);
}

#[test]
fn test_second_chain_scores_double() {
    let mut board = pattern_board();
    board.place_piece(0, 0, PieceKind::Ruby);
    board.place_piece(1, 0, PieceKind::Ruby);
    board.place_piece(2, 0, PieceKind::Ruby);
    board.place_piece(2, 4, PieceKind::Topaz);
    board.place_piece(3, 4, PieceKind::Topaz);
    board.place_piece(4, 4, PieceKind::Topaz);

    let chains = board.remove_matches();
    assert_eq!(chains.len(), 2);

    // Horizontal discovery order is row-then-column: row 0 scores first.
    assert_eq!(chains[0].first().row(), 0);
    assert_eq!(chains[0].score(), 60);
    assert_eq!(chains[1].first().row(), 4);
    assert_eq!(chains[1].score(), 60 * 2);
}

#[test]
fn test_horizontal_chains_score_before_vertical() {
    let mut board = pattern_board();
    // Vertical run low on the board, horizontal run high up.
    board.place_piece(6, 0, PieceKind::Lapis);
    board.place_piece(6, 1, PieceKind::Lapis);
    board.place_piece(6, 2, PieceKind::Lapis);
    board.place_piece(1, 5, PieceKind::Garnet);
    board.place_piece(2, 5, PieceKind::Garnet);
    board.place_piece(3, 5, PieceKind::Garnet);

    let chains = board.remove_matches();
    assert_eq!(chains.len(), 2);

    use gridcrush::core::ChainKind;
    assert_eq!(chains[0].kind(), ChainKind::Horizontal);
    assert_eq!(chains[0].score(), 60);
    assert_eq!(chains[1].kind(), ChainKind::Vertical);
    assert_eq!(chains[1].score(), 120);
}

#[test]
fn test_vertical_chain_pieces_run_bottom_to_top() {
    let mut board = pattern_board();
    board.place_piece(5, 3, PieceKind::Lapis);
    board.place_piece(5, 4, PieceKind::Lapis);
    board.place_piece(5, 5, PieceKind::Lapis);

    let chains = board.remove_matches();
    assert_eq!(chains.len(), 1);

    let chain = &chains[0];
    assert_eq!(chain.first().row(), 3);
    assert_eq!(chain.last().row(), 5);
    let rows: Vec<usize> = chain.pieces().iter().map(|p| p.row()).collect();
    assert_eq!(rows, vec![3, 4, 5]);
}

#[test]
fn test_crossing_runs_produce_two_chains() {
    let mut board = pattern_board();
    // A plus shape: horizontal 3-run and vertical 3-run sharing (3, 4).
    board.place_piece(2, 4, PieceKind::Ruby);
    board.place_piece(3, 4, PieceKind::Ruby);
    board.place_piece(4, 4, PieceKind::Ruby);
    board.place_piece(3, 3, PieceKind::Ruby);
    board.place_piece(3, 5, PieceKind::Ruby);

    let chains = board.remove_matches();
    assert_eq!(chains.len(), 2);

    // Five distinct cells were cleared, though the chains share one piece.
    assert_eq!(board.piece_count(), NUM_CELLS - 5);
    assert!(board.remove_matches().is_empty());
}

#[test]
fn test_pattern_board_has_no_matches() {
    let mut board = pattern_board();
    assert!(board.remove_matches().is_empty());
}

// ============== Gravity ==============

#[test]
fn test_fill_holes_preserves_vertical_order() {
    let mut board = open_board(1);
    board.place_piece(2, 3, PieceKind::Jade);
    board.place_piece(2, 5, PieceKind::Ruby);
    board.place_piece(2, 7, PieceKind::Opal);

    let columns = board.fill_holes();
    assert_eq!(columns.len(), 1);

    let moved = &columns[0];
    let kinds: Vec<PieceKind> = moved.iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, vec![PieceKind::Jade, PieceKind::Ruby, PieceKind::Opal]);
    let rows: Vec<usize> = moved.iter().map(|p| p.row()).collect();
    assert_eq!(rows, vec![0, 1, 2]);

    assert_eq!(board.piece_at(2, 0).unwrap().kind(), PieceKind::Jade);
    assert_eq!(board.piece_at(2, 1).unwrap().kind(), PieceKind::Ruby);
    assert_eq!(board.piece_at(2, 2).unwrap().kind(), PieceKind::Opal);
    assert!(board.piece_at(2, 3).is_none());
}

#[test]
fn test_fill_holes_keeps_piece_ids() {
    let mut board = open_board(1);
    let placed = board.place_piece(4, 8, PieceKind::Coral);

    let columns = board.fill_holes();
    let moved = columns[0][0];

    assert_eq!(moved.id(), placed.id());
    assert_eq!(moved.row(), 0);
    assert_eq!(board.piece_at(4, 0).unwrap().id(), placed.id());
}

#[test]
fn test_fill_holes_drops_through_mask_gaps() {
    let mut mask = Grid::fully_playable();
    mask.set(2, 1, None);
    let mut board = Board::new(mask, KindPicker::new(KINDS_PER_LEVEL, 1));
    board.place_piece(2, 3, PieceKind::Jade);

    board.fill_holes();

    // The piece fell past the unplayable gap to the column floor.
    assert_eq!(board.piece_at(2, 0).unwrap().kind(), PieceKind::Jade);
    assert!(board.piece_at(2, 3).is_none());
}

#[test]
fn test_fill_holes_on_settled_board_moves_nothing() {
    let mut board = open_board(12345);
    board.shuffle();
    assert!(board.fill_holes().is_empty());
}

// ============== Refill ==============

#[test]
fn test_top_up_fills_empty_columns_top_down() {
    let mut board = open_board(3);
    let columns = board.top_up_pieces();

    assert_eq!(columns.len(), NUM_COLUMNS);
    assert_eq!(board.piece_count(), NUM_CELLS);

    for spawned in &columns {
        assert_eq!(spawned.len(), NUM_ROWS);
        let rows: Vec<usize> = spawned.iter().map(|p| p.row()).collect();
        let expected: Vec<usize> = (0..NUM_ROWS).rev().collect();
        assert_eq!(rows, expected);
    }
}

#[test]
fn test_top_up_never_repeats_within_a_column() {
    for seed in [1, 7, 12345, 99999] {
        let mut board = open_board(seed);
        let columns = board.top_up_pieces();

        for spawned in &columns {
            for pair in spawned.windows(2) {
                assert_ne!(
                    pair[0].kind(),
                    pair[1].kind(),
                    "seed {seed}: consecutive spawns share a kind in column {}",
                    pair[0].column()
                );
            }
        }
    }
}

#[test]
fn test_top_up_stops_at_occupied_cells() {
    let mut board = open_board(1);
    board.place_piece(0, 4, PieceKind::Ruby);

    let columns = board.top_up_pieces();

    // Column 0 only received the run above the occupied cell.
    let column0 = columns
        .iter()
        .find(|spawned| spawned[0].column() == 0)
        .unwrap();
    assert_eq!(column0.len(), NUM_ROWS - 5);
    for row in 5..NUM_ROWS {
        assert!(board.piece_at(0, row).is_some());
    }
    for row in 0..4 {
        assert!(board.piece_at(0, row).is_none(), "row {row}");
    }
}

#[test]
fn test_top_up_after_gravity_completes_the_board() {
    let mut board = pattern_board();
    board.place_piece(2, 0, PieceKind::Ruby);
    board.place_piece(3, 0, PieceKind::Ruby);
    board.place_piece(4, 0, PieceKind::Ruby);

    board.remove_matches();
    board.fill_holes();
    board.top_up_pieces();

    assert_eq!(board.piece_count(), NUM_CELLS);
}
