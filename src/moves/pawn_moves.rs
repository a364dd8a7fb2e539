//! Pawn capture tables, one per color.

use crate::moves::knight_moves::bit_if_on_board;
use crate::position::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(forward: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        table[sq] = bit_if_on_board(file - 1, rank + forward) | bit_if_on_board(file + 1, rank + forward);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::position::chess_types::{Color, Square};

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        assert_eq!(pawn_attacks(Color::White, sq("e2")), sq("d3").bit() | sq("f3").bit());
    }

    #[test]
    fn black_pawn_on_a_file_attacks_one_square() {
        assert_eq!(pawn_attacks(Color::Black, sq("a7")), sq("b6").bit());
    }
}
