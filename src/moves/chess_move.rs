//! Move values: the requested `Move` and the recorded `PlayedMove`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::position::chess_types::*;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// A piece moving from one square to another, with an optional promotion.
///
/// Castling is expressed as the king's two-square move and en passant as the
/// pawn's diagonal move onto the en-passant target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn regular(piece: Piece, from: Square, to: Square) -> Move {
        Move {
            piece,
            from,
            to,
            promotion: None,
        }
    }

    /// A pawn move onto the last rank. Rejects promotion to pawn or king and
    /// non-pawn movers.
    pub fn promotion(piece: Piece, from: Square, to: Square, promotion: PieceKind) -> ChessResult<Move> {
        if piece.kind != PieceKind::Pawn {
            return Err(ChessError::IllegalMove(format!(
                "only pawns promote, got {:?} on {from}",
                piece.kind
            )));
        }
        if !promotion.is_promotion_target() {
            return Err(ChessError::IllegalMove(format!(
                "cannot promote to {promotion:?}"
            )));
        }
        Ok(Move {
            piece,
            from,
            to,
            promotion: Some(promotion),
        })
    }

    /// King moving two files along its rank.
    pub fn castling_side(&self) -> Option<CastlingSide> {
        if self.piece.kind != PieceKind::King || self.from.rank() != self.to.rank() {
            return None;
        }
        match self.to.file() as i8 - self.from.file() as i8 {
            2 => Some(CastlingSide::KingSide),
            -2 => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.castling_side().is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.file() == self.to.file() && self.from.rank().abs_diff(self.to.rank()) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}

/// Whether a played move leaves the opponent in check or mated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckType {
    #[default]
    None,
    Check,
    Checkmate,
}

/// A move as it was played in a game, with its observable consequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayedMove {
    mv: Move,
    captured: Option<Piece>,
    check: CheckType,
    offers_draw: bool,
    notation: String,
}

impl PlayedMove {
    pub(crate) fn new(mv: Move, captured: Option<Piece>, check: CheckType, offers_draw: bool, notation: String) -> Self {
        Self {
            mv,
            captured,
            check,
            offers_draw,
            notation,
        }
    }

    #[inline]
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// The captured piece; for en passant this is the pawn removed from beside the destination.
    #[inline]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn check_type(&self) -> CheckType {
        self.check
    }

    #[inline]
    pub fn offers_draw(&self) -> bool {
        self.offers_draw
    }

    /// Standard algebraic notation, e.g. `Nbd7`, `exd6`, `O-O-O#`, `Qb4+(=)`.
    #[inline]
    pub fn notation(&self) -> &str {
        &self.notation
    }
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);
    const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);

    #[test]
    fn promotion_rejects_bad_targets_and_movers() {
        assert!(Move::promotion(WHITE_PAWN, sq("b7"), sq("b8"), PieceKind::Queen).is_ok());
        assert!(matches!(
            Move::promotion(WHITE_PAWN, sq("b7"), sq("b8"), PieceKind::King),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(matches!(
            Move::promotion(WHITE_PAWN, sq("b7"), sq("b8"), PieceKind::Pawn),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(Move::promotion(BLACK_KING, sq("e8"), sq("e7"), PieceKind::Queen).is_err());
    }

    #[test]
    fn castling_and_double_push_shapes() {
        assert_eq!(
            Move::regular(BLACK_KING, sq("e8"), sq("c8")).castling_side(),
            Some(CastlingSide::QueenSide)
        );
        assert_eq!(Move::regular(BLACK_KING, sq("e8"), sq("d8")).castling_side(), None);
        assert!(Move::regular(WHITE_PAWN, sq("e2"), sq("e4")).is_double_pawn_push());
        assert!(!Move::regular(WHITE_PAWN, sq("e2"), sq("e3")).is_double_pawn_push());
    }

    #[test]
    fn display_uses_coordinates() {
        let promotion = Move::promotion(WHITE_PAWN, sq("b7"), sq("c8"), PieceKind::Rook).expect("valid promotion");
        assert_eq!(promotion.to_string(), "b7c8r");
    }
}
