use crate::move_generation::legal_move_shared::push_piece_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::rook_attacks;
use crate::position::chess_types::PieceKind;
use crate::position::position::Position;

pub fn generate_rook_moves(position: &Position, out: &mut Vec<Move>) {
    push_piece_moves(position, PieceKind::Rook, rook_attacks, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::position::position::Position;

    #[test]
    fn rook_rays_stop_on_first_piece() {
        let position = Position::from_fen("4k3/8/8/8/r2R2P1/8/8/4K3 w - - 0 1").expect("test FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&position, &mut out);

        // d4: b4 c4 a4(capture) e4 f4, d1..d3, d5..d8.
        assert_eq!(out.len(), 5 + 3 + 4);
    }
}
