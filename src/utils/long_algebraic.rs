//! Coordinate move notation (`e2e4`, `b7c8q`).
//!
//! Parsing needs a position to know which piece stands on the origin square.
//! It does not check legality; the game does that against its legal set.

use crate::moves::chess_move::Move;
use crate::position::chess_types::*;
use crate::position::position::Position;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = square_to_algebraic(mv.from);
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(kind) = mv.promotion {
        out.push(kind.letter().to_ascii_lowercase());
    }
    out
}

pub fn long_algebraic_to_move(long_algebraic: &str, position: &Position) -> Result<Move, String> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    let piece = position
        .piece_at(from)
        .ok_or_else(|| format!("No piece on from-square: {from}"))?;
    if piece.color != position.side_to_move() {
        return Err(format!("Piece on {from} does not belong to the side to move"));
    }

    let promotion = match long_algebraic[4..].chars().next() {
        Some(ch) => {
            let kind = PieceKind::from_letter(ch)
                .filter(|kind| kind.is_promotion_target())
                .ok_or_else(|| format!("Invalid promotion piece character: {ch}"))?;
            Some(kind)
        }
        None => None,
    };

    Ok(Move {
        piece,
        from,
        to,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::position::chess_types::{CastlingSide, PieceKind};
    use crate::position::position::Position;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn long_algebraic_round_trip_simple_move() {
        let start = Position::starting();
        let mv = long_algebraic_to_move("e2e4", &start).expect("move should parse");
        assert_eq!(move_to_long_algebraic(&mv), "e2e4");
        assert!(mv.is_double_pawn_push());
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn long_algebraic_round_trip_promotion() {
        let promo = position("8/P7/8/8/8/8/8/k6K w - - 0 1");
        let mv = long_algebraic_to_move("a7a8q", &promo).expect("move should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(move_to_long_algebraic(&mv), "a7a8q");
    }

    #[test]
    fn castling_is_the_king_move() {
        let castle = position("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        let mv = long_algebraic_to_move("e8c8", &castle).expect("move should parse");
        assert_eq!(mv.castling_side(), Some(CastlingSide::QueenSide));
    }

    #[test]
    fn rejects_wrong_side_empty_square_and_bad_promotion() {
        let start = Position::starting();
        assert!(long_algebraic_to_move("e7e5", &start).is_err());
        assert!(long_algebraic_to_move("e4e5", &start).is_err());
        assert!(long_algebraic_to_move("e2e4k", &start).is_err());
        assert!(long_algebraic_to_move("e2", &start).is_err());
    }
}
