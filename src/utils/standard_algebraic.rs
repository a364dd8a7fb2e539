//! Standard algebraic notation (SAN) for played moves.
//!
//! Disambiguation uses the origin file when it is unique among rival pieces
//! of the same kind reaching the same square, otherwise the origin rank,
//! otherwise the full origin square. Castling is written `O-O`/`O-O-O`.
//! Check and mate append `+`/`#`, and a draw offer appends `(=)`.

use crate::errors::{ChessError, ChessResult};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::chess_move::{CheckType, Move};
use crate::position::chess_types::*;
use crate::position::position::Position;

/// SAN for `mv` played from `position_before`.
pub fn format_move(position_before: &Position, mv: &Move, offers_draw: bool) -> ChessResult<String> {
    let legal_moves = LegalMoveGenerator.generate_legal_moves(position_before)?;
    let generated = legal_moves
        .iter()
        .find(|generated| generated.mv == *mv)
        .ok_or_else(|| ChessError::IllegalMove(format!("{mv} is not legal in {position_before}")))?;

    let check = match (generated.annotations.gives_check, generated.annotations.is_checkmate) {
        (_, true) => CheckType::Checkmate,
        (true, false) => CheckType::Check,
        _ => CheckType::None,
    };
    Ok(notation_for(&legal_moves, generated, check, offers_draw))
}

/// SAN given the full legal move list of the position the move was played from.
pub(crate) fn notation_for(
    legal_moves: &[GeneratedMove],
    played: &GeneratedMove,
    check: CheckType,
    offers_draw: bool,
) -> String {
    let mv = &played.mv;
    let is_capture = played.captured.is_some();
    let mut out = String::with_capacity(10);

    match mv.castling_side() {
        Some(CastlingSide::KingSide) => out.push_str("O-O"),
        Some(CastlingSide::QueenSide) => out.push_str("O-O-O"),
        None => {
            match mv.piece.kind {
                PieceKind::Pawn => {
                    if is_capture {
                        out.push(mv.from.file_char());
                    }
                }
                kind => {
                    out.push(kind.letter());
                    out.push_str(&disambiguation(legal_moves, mv));
                }
            }

            if is_capture {
                out.push('x');
            }
            out.push_str(&mv.to.to_string());

            if let Some(kind) = mv.promotion {
                out.push('=');
                out.push(kind.letter());
            }
        }
    }

    match check {
        CheckType::Check => out.push('+'),
        CheckType::Checkmate => out.push('#'),
        CheckType::None => {}
    }

    if offers_draw {
        out.push_str("(=)");
    }

    out
}

fn disambiguation(legal_moves: &[GeneratedMove], mv: &Move) -> String {
    let rivals: Vec<Square> = legal_moves
        .iter()
        .map(|generated| &generated.mv)
        .filter(|other| other.piece == mv.piece && other.to == mv.to && other.from != mv.from)
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|from| from.file() != mv.from.file()) {
        mv.from.file_char().to_string()
    } else if rivals.iter().all(|from| from.rank() != mv.from.rank()) {
        mv.from.rank_number().to_string()
    } else {
        mv.from.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::format_move;
    use crate::position::position::Position;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn san(fen: &str, lan: &str) -> String {
        san_with_offer(fen, lan, false)
    }

    fn san_with_offer(fen: &str, lan: &str, offers_draw: bool) -> String {
        let position = Position::from_fen(fen).expect("test FEN should parse");
        let mv = long_algebraic_to_move(lan, &position).expect("test move should parse");
        format_move(&position, &mv, offers_draw).expect("test move should be legal")
    }

    #[test]
    fn piece_moves_and_captures() {
        assert_eq!(san("r1bqkb1r/pppppppp/2n5/8/4n1Q1/2N5/PPPP1PPP/R1B1KBNR w KQkq - 0 1", "c3b5"), "Nb5");
        assert_eq!(san("r1bqkb1r/pppppppp/2n5/8/2n1P1Q1/2N5/PPP2PPP/R1B1KBNR w KQkq - 0 1", "f1c4"), "Bxc4");
    }

    #[test]
    fn check_suffixes() {
        assert_eq!(san("q1q5/q4k2/2P5/3r4/2P1B3/5K2/Q7/8 b - - 1 1", "c8h3"), "Qh3+");
        assert_eq!(san("q7/1P3k2/8/3r4/2P1B2q/5K2/Q7/8 b - - 1 1", "h4e4"), "Qxe4+");
        assert_eq!(san("4k3/R6R/8/8/8/8/8/4K3 w - - 0 1", "h7h8"), "Rh8#");
    }

    #[test]
    fn disambiguation_by_file_rank_and_square() {
        assert_eq!(san("8/4k3/8/8/8/6K1/8/R6R w - - 0 1", "h1d1"), "Rhd1");
        assert_eq!(san("8/4k3/8/8/8/6K1/8/R6R w - - 0 1", "h1h2"), "Rh2");
        assert_eq!(san("b4k2/8/2P5/8/b7/8/8/5K2 b - - 0 1", "a8c6"), "B8xc6");
        assert_eq!(san("b3bk2/8/2P5/8/b7/5K2/8/8 b - - 0 1", "a8c6"), "Ba8xc6+");
    }

    #[test]
    fn pawn_moves_and_promotions() {
        assert_eq!(san("2rk4/1P6/8/5K2/8/8/8/8 w - - 0 1", "b7b8q"), "b8=Q");
        assert_eq!(san("2rk4/1P6/8/5K2/8/8/8/8 w - - 0 1", "b7c8r"), "bxc8=R+");
        assert_eq!(san("k7/8/8/3p1p2/4N3/8/8/7K b - - 0 1", "d5e4"), "dxe4");
        assert_eq!(san("k7/8/8/6pp/7N/8/8/7K b - - 0 1", "g5h4"), "gxh4");
    }

    #[test]
    fn en_passant_is_a_pawn_capture() {
        assert_eq!(san("7k/8/8/Pp6/8/7K/8/8 w - b6 0 1", "a5b6"), "axb6");
        assert_eq!(san("7k/8/8/PpP5/8/7K/8/8 w - b6 0 1", "a5b6"), "axb6");
    }

    #[test]
    fn castling_with_suffixes_and_draw_offer() {
        assert_eq!(san("8/8/8/8/6k1/8/4PP1P/4K2R w K - 0 1", "e1g1"), "O-O");
        assert_eq!(san("r3k1K1/1q6/8/8/8/8/8/8 b q - 0 1", "e8c8"), "O-O-O#");
        assert_eq!(san_with_offer("8/8/3K4/8/Q7/8/p7/1k6 w - - 0 1", "a4b4", true), "Qb4+(=)");
    }
}
