use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;
use crate::position::board::Board;
use crate::position::chess_types::*;

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Whether any `attacker_color` piece attacks `square` on this board.
#[inline]
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    attackers_to_square(board, square, attacker_color) != 0
}

/// Bitboard of the `attacker_color` pieces attacking `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> u64 {
    // A pawn of the defending color on `square` would attack exactly the
    // squares attacking pawns must stand on.
    let pawns = pawn_attacks(attacker_color.opposite(), square) & board.pieces(attacker_color, PieceKind::Pawn);
    let knights = knight_attacks(square) & board.pieces(attacker_color, PieceKind::Knight);
    let kings = king_attacks(square) & board.pieces(attacker_color, PieceKind::King);

    let queens = board.pieces(attacker_color, PieceKind::Queen);
    let diagonal = bishop_attacks(square, board.occupancy_all())
        & (board.pieces(attacker_color, PieceKind::Bishop) | queens);
    let orthogonal =
        rook_attacks(square, board.occupancy_all()) & (board.pieces(attacker_color, PieceKind::Rook) | queens);

    pawns | knights | kings | diagonal | orthogonal
}
