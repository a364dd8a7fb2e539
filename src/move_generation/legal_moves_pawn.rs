//! Pawn pushes, captures, promotions and en passant.

use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::pawn_attacks;
use crate::position::chess_types::*;
use crate::position::position::Position;

pub fn generate_pawn_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    let board = position.board();
    let enemy_occ = board.occupancy(side.opposite());
    let pawn = Piece::new(side, PieceKind::Pawn);
    let (forward, start_rank) = match side {
        Color::White => (1i8, 1u8),
        Color::Black => (-1i8, 6u8),
    };
    let en_passant_mask = position.en_passant_square().map_or(0, Square::bit);

    for from in squares_of(board.pieces(side, PieceKind::Pawn)) {
        if let Some(to) = from.offset(0, forward).filter(|to| board.is_empty(*to)) {
            push_with_promotions(pawn, from, to, out);

            if from.rank() == start_rank {
                if let Some(two_step) = to.offset(0, forward).filter(|sq| board.is_empty(*sq)) {
                    out.push(Move::regular(pawn, from, two_step));
                }
            }
        }

        let captures = pawn_attacks(side, from) & (enemy_occ | en_passant_mask);
        for to in squares_of(captures) {
            push_with_promotions(pawn, from, to, out);
        }
    }
}

fn push_with_promotions(pawn: Piece, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.rank() == pawn.color.promotion_rank() {
        out.extend(PieceKind::PROMOTIONS.into_iter().map(|kind| Move {
            piece: pawn,
            from,
            to,
            promotion: Some(kind),
        }));
    } else {
        out.push(Move::regular(pawn, from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::moves::chess_move::Move;
    use crate::position::chess_types::PieceKind;
    use crate::position::position::Position;

    fn pawn_moves(fen: &str) -> Vec<Move> {
        let position = Position::from_fen(fen).expect("test FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&position, &mut out);
        out
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        assert_eq!(pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").len(), 0);
        assert_eq!(pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").len(), 1);
        assert_eq!(pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").len(), 2);
    }

    #[test]
    fn promotions_expand_to_four_kinds() {
        let moves = pawn_moves("2rk4/1P6/8/5K2/8/8/8/8 w - - 0 1");
        // b8 push and c8 capture, four kinds each.
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|mv| mv.promotion.is_some()));
        assert!(moves.iter().any(|mv| mv.promotion == Some(PieceKind::Knight)));
    }

    #[test]
    fn en_passant_targets_are_generated() {
        let moves = pawn_moves("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 3");
        assert!(moves
            .iter()
            .any(|mv| mv.from.to_string() == "f5" && mv.to.to_string() == "e6"));
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        let moves = pawn_moves("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1");
        let targets: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();
        assert_eq!(targets, vec!["d6".to_owned(), "d5".to_owned()]);
    }
}
