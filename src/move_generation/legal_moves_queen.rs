use crate::move_generation::legal_move_shared::push_piece_moves;
use crate::moves::chess_move::Move;
use crate::moves::queen_moves::queen_attacks;
use crate::position::chess_types::PieceKind;
use crate::position::position::Position;

pub fn generate_queen_moves(position: &Position, out: &mut Vec<Move>) {
    push_piece_moves(position, PieceKind::Queen, queen_attacks, out);
}
