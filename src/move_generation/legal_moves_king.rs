//! King steps and castling candidates.
//!
//! Castling is emitted when the right is held, the king and rook stand on
//! their home squares and every square between them is empty. Whether the
//! king starts in, passes through or lands on an attacked square is decided
//! by the legality filter.

use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_attacks;
use crate::position::chess_types::*;
use crate::position::position::Position;

pub fn generate_king_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    let board = position.board();
    let Some(from) = board.king_square(side) else {
        return;
    };
    let king = Piece::new(side, PieceKind::King);

    let targets = king_attacks(from) & !board.occupancy(side);
    out.extend(squares_of(targets).map(|to| Move::regular(king, from, to)));

    for castling_side in [CastlingSide::KingSide, CastlingSide::QueenSide] {
        if let Some(mv) = castling_candidate(position, castling_side) {
            out.push(mv);
        }
    }
}

/// King and rook squares for one castling move: (king from, king to, rook from, rook to).
pub(crate) fn castling_squares(color: Color, side: CastlingSide) -> (Square, Square, Square, Square) {
    let rank = color.back_rank();
    let (king_to, rook_from, rook_to) = match side {
        CastlingSide::KingSide => (6, 7, 5),
        CastlingSide::QueenSide => (2, 0, 3),
    };
    let at = |file: u8| Square::from_index_unchecked(rank * 8 + file);
    (at(4), at(king_to), at(rook_from), at(rook_to))
}

fn castling_candidate(position: &Position, side: CastlingSide) -> Option<Move> {
    let color = position.side_to_move();
    if !position.has_castling_right(color, side) {
        return None;
    }

    let board = position.board();
    let (king_from, king_to, rook_from, _) = castling_squares(color, side);
    if board.piece_at(king_from) != Some(Piece::new(color, PieceKind::King))
        || board.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook))
    {
        return None;
    }

    let (low, high) = if king_from.index() < rook_from.index() {
        (king_from.index(), rook_from.index())
    } else {
        (rook_from.index(), king_from.index())
    };
    let between = ((1u64 << high) - 1) & !((1u64 << (low + 1)) - 1);
    if board.occupancy_all() & between != 0 {
        return None;
    }

    Some(Move::regular(Piece::new(color, PieceKind::King), king_from, king_to))
}
