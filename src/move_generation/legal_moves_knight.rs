use crate::move_generation::legal_move_shared::push_piece_moves;
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_attacks;
use crate::position::chess_types::PieceKind;
use crate::position::position::Position;

pub fn generate_knight_moves(position: &Position, out: &mut Vec<Move>) {
    push_piece_moves(position, PieceKind::Knight, |from, _| knight_attacks(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::position::position::Position;

    #[test]
    fn knights_skip_friendly_squares_and_capture_enemies() {
        let position = Position::from_fen("4k3/8/8/8/3p4/8/2N1P3/4K3 w - - 0 1").expect("test FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&position, &mut out);

        let targets: Vec<String> = out.iter().map(|mv| mv.to.to_string()).collect();
        // c2 knight: a1 a3 b4 d4 e3; e1 holds the king.
        assert_eq!(out.len(), 5);
        assert!(targets.contains(&"d4".to_owned()));
        assert!(!targets.contains(&"e1".to_owned()));
    }
}
