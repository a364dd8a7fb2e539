//! Helpers shared by the per-piece generators.

use crate::moves::chess_move::Move;
use crate::position::chess_types::*;
use crate::position::position::Position;

/// Push a move from every `kind` piece of the side to move to each square in
/// its attack set that is not occupied by a friendly piece.
#[inline]
pub fn push_piece_moves<F>(position: &Position, kind: PieceKind, attacks: F, out: &mut Vec<Move>)
where
    F: Fn(Square, u64) -> u64,
{
    let side = position.side_to_move();
    let board = position.board();
    let own_occ = board.occupancy(side);
    let piece = Piece::new(side, kind);

    for from in squares_of(board.pieces(side, kind)) {
        let targets = attacks(from, board.occupancy_all()) & !own_occ;
        out.extend(squares_of(targets).map(|to| Move::regular(piece, from, to)));
    }
}

#[inline]
pub fn enemy_piece_on(position: &Position, square: Square) -> Option<Piece> {
    position
        .piece_at(square)
        .filter(|piece| piece.color != position.side_to_move())
}
