//! Chain module - a scored run of matched pieces
//!
//! Match detection produces chains: ordered runs of three or more same-kind
//! pieces along a row or column. The board assigns each chain a score when
//! the match is resolved (see [`crate::scoring`]).

use crate::piece::Piece;

/// Orientation of a matched run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    Horizontal,
    Vertical,
    /// Two perpendicular runs sharing a corner (L/T shapes).
    ///
    /// Reserved: the engine only produces straight-run chains today, and
    /// [`crate::Board::has_chain_at`] does not detect overlap shapes.
    Overlapping,
}

impl std::fmt::Display for ChainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChainKind::Horizontal => "horizontal",
            ChainKind::Vertical => "vertical",
            ChainKind::Overlapping => "overlapping",
        };
        f.write_str(name)
    }
}

/// An ordered run of three or more same-kind pieces, scored as a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    kind: ChainKind,
    pieces: Vec<Piece>,
    score: u32,
}

impl Chain {
    pub(crate) fn new(kind: ChainKind) -> Self {
        Self {
            kind,
            pieces: Vec::new(),
            score: 0,
        }
    }

    pub(crate) fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn kind(&self) -> ChainKind {
        self.kind
    }

    /// Member pieces, in scan order (left-to-right or bottom-to-top)
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// First piece of the run
    ///
    /// Chains handed out by the engine always hold at least
    /// `MIN_CHAIN_LENGTH` pieces.
    pub fn first(&self) -> Piece {
        self.pieces[0]
    }

    /// Last piece of the run
    pub fn last(&self) -> Piece {
        self.pieces[self.pieces.len() - 1]
    }

    /// Points awarded for this chain, assigned at match resolution
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} chain of {} scoring {}", self.kind, self.len(), self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcrush_types::PieceKind;

    #[test]
    fn test_accessors() {
        let mut chain = Chain::new(ChainKind::Horizontal);
        for column in 2..5 {
            chain.push(Piece::new(column as u32, column, 0, PieceKind::Coral));
        }
        chain.set_score(60);

        assert_eq!(chain.kind(), ChainKind::Horizontal);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.first().column(), 2);
        assert_eq!(chain.last().column(), 4);
        assert_eq!(chain.score(), 60);
        assert_eq!(chain.to_string(), "horizontal chain of 3 scoring 60");
    }
}
