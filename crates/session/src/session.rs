//! Session module - per-level turn processing
//!
//! [`GameSession`] wraps one engine [`Board`] with the accounting the board
//! deliberately leaves to its caller: the running score, the move budget,
//! win/loss evaluation, and the cascade loop that resolves a swap to
//! quiescence. Each accepted swap yields a [`TurnReport`] describing every
//! step of the cascade for the presentation layer to animate.

use anyhow::Result;

use gridcrush_core::{Board, Chain, ColumnPieces, KindPicker, Piece, Swap};
use gridcrush_types::KINDS_PER_LEVEL;

use crate::level::LevelConfig;

/// Where the level stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    /// Target score reached within the move budget
    Won,
    /// Move budget exhausted short of the target
    Lost,
}

/// One settle cycle of a cascade
///
/// The presentation layer plays these in order: chains vanish, pieces fall
/// (`falls`, per column), replacements drop in (`spawns`, per column).
#[derive(Debug, Clone)]
pub struct CascadeStep {
    pub chains: Vec<Chain>,
    pub falls: Vec<ColumnPieces>,
    pub spawns: Vec<ColumnPieces>,
}

/// Everything that happened in one accepted swap
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// Settle cycles, in order; empty only if the swap matched nothing,
    /// which a legality-checked swap never does
    pub steps: Vec<CascadeStep>,
    pub score_gained: u32,
    pub moves_left: u32,
    pub state: SessionState,
}

/// Result of asking the session to play a swap
#[derive(Debug, Clone)]
pub enum SwapOutcome {
    /// The swap was legal; the cascade ran and the turn was consumed
    Applied(TurnReport),
    /// The swap was not in the legal set (or the level is over); nothing
    /// changed and no move was consumed
    Rejected,
}

/// One level being played: engine board plus score and move accounting
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    target_score: u32,
    score: u32,
    moves_left: u32,
    state: SessionState,
}

impl GameSession {
    /// Build a session from a level definition and an RNG seed
    ///
    /// The seed fixes the level's kind subset and every later pick, so a
    /// given (config, seed) pair replays identically.
    pub fn new(config: &LevelConfig, seed: u32) -> Result<Self> {
        let mask = config.build_mask()?;
        let picker = KindPicker::new(KINDS_PER_LEVEL, seed);
        Ok(Self {
            board: Board::new(mask, picker),
            target_score: config.target_score,
            score: 0,
            moves_left: config.moves,
            state: SessionState::Playing,
        })
    }

    /// Populate the board for play; returns the initial pieces
    pub fn start(&mut self) -> Vec<Piece> {
        self.board.reset_combo_multiplier();
        self.board.shuffle()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the board has no legal move left and must be reshuffled
    pub fn needs_reshuffle(&self) -> bool {
        self.board.possible_swaps().is_empty()
    }

    /// Play one swap
    ///
    /// Illegal swaps (and any swap after the level has ended) are rejected
    /// without touching the board or the move budget. A legal swap is
    /// applied, the cascade runs to quiescence, and the turn ends: the move
    /// budget drops by one, the combo multiplier resets, the legal-swap set
    /// is recomputed, and the level outcome is evaluated - reaching the
    /// target wins even on the last move.
    pub fn try_swap(&mut self, swap: &Swap) -> SwapOutcome {
        if self.state != SessionState::Playing || !self.board.is_possible_swap(swap) {
            return SwapOutcome::Rejected;
        }

        self.board.perform_swap(swap);
        let (steps, score_gained) = self.resolve_cascade();
        SwapOutcome::Applied(self.end_turn(steps, score_gained))
    }

    /// Shuffle the board into a new playable population, spending one move
    ///
    /// Returns `None` when the level is already over. This is the player's
    /// way out of a dead board (see [`needs_reshuffle`](Self::needs_reshuffle)),
    /// priced like any other move.
    pub fn reshuffle(&mut self) -> Option<Vec<Piece>> {
        if self.state != SessionState::Playing {
            return None;
        }
        let pieces = self.board.shuffle();
        let _ = self.end_turn(Vec::new(), 0);
        Some(pieces)
    }

    /// Run the remove/fall/top-up cycle until no chains remain
    fn resolve_cascade(&mut self) -> (Vec<CascadeStep>, u32) {
        let mut steps = Vec::new();
        let mut score_gained = 0u32;

        loop {
            let chains = self.board.remove_matches();
            if chains.is_empty() {
                break;
            }
            score_gained += chains.iter().map(Chain::score).sum::<u32>();

            let falls = self.board.fill_holes();
            let spawns = self.board.top_up_pieces();
            steps.push(CascadeStep {
                chains,
                falls,
                spawns,
            });
        }
        (steps, score_gained)
    }

    /// Book the turn: score, move budget, outcome, and a settled board
    fn end_turn(&mut self, steps: Vec<CascadeStep>, score_gained: u32) -> TurnReport {
        self.score += score_gained;
        self.moves_left = self.moves_left.saturating_sub(1);

        // Win takes precedence over running out of moves.
        if self.score >= self.target_score {
            self.state = SessionState::Won;
        } else if self.moves_left == 0 {
            self.state = SessionState::Lost;
        }

        self.board.reset_combo_multiplier();
        self.board.detect_possible_swaps();

        TurnReport {
            steps,
            score_gained,
            moves_left: self.moves_left,
            state: self.state,
        }
    }
}
