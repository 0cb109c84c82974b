use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridcrush::core::{Board, Grid, KindPicker};
use gridcrush::types::{PieceKind, KINDS_PER_LEVEL};

fn open_board(seed: u32) -> Board {
    Board::new(Grid::fully_playable(), KindPicker::new(KINDS_PER_LEVEL, seed))
}

fn bench_shuffle(c: &mut Criterion) {
    let mut board = open_board(12345);

    c.bench_function("shuffle", |b| {
        b.iter(|| {
            black_box(board.shuffle());
        })
    });
}

fn bench_detect_possible_swaps(c: &mut Criterion) {
    let mut board = open_board(12345);
    board.shuffle();

    c.bench_function("detect_possible_swaps", |b| {
        b.iter(|| {
            board.detect_possible_swaps();
            black_box(board.possible_swaps().len());
        })
    });
}

fn bench_remove_matches_cycle(c: &mut Criterion) {
    c.bench_function("remove_fill_top_up", |b| {
        b.iter(|| {
            let mut board = open_board(12345);
            board.shuffle();
            // Plant a match so the cycle has work to do.
            board.place_piece(2, 0, PieceKind::Ruby);
            board.place_piece(3, 0, PieceKind::Ruby);
            board.place_piece(4, 0, PieceKind::Ruby);

            while !board.remove_matches().is_empty() {
                board.fill_holes();
                board.top_up_pieces();
            }
            black_box(board.piece_count());
        })
    });
}

fn bench_has_chain_at(c: &mut Criterion) {
    let mut board = open_board(12345);
    board.shuffle();

    c.bench_function("has_chain_at", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for row in 0..9 {
                for column in 0..7 {
                    if board.has_chain_at(column, row) {
                        hits += 1;
                    }
                }
            }
            black_box(hits);
        })
    });
}

criterion_group!(
    benches,
    bench_shuffle,
    bench_detect_possible_swaps,
    bench_remove_matches_cycle,
    bench_has_chain_at
);
criterion_main!(benches);
