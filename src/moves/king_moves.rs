//! King attack table.

use crate::moves::knight_moves::bit_if_on_board;
use crate::position::chess_types::Square;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut df = -1i32;

        while df <= 1 {
            let mut dr = -1i32;
            while dr <= 1 {
                if df != 0 || dr != 0 {
                    attacks |= bit_if_on_board(file + df, rank + dr);
                }
                dr += 1;
            }
            df += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::position::chess_types::Square;

    #[test]
    fn king_targets_on_edge_and_centre() {
        let a1: Square = "a1".parse().expect("square should parse");
        let e4: Square = "e4".parse().expect("square should parse");
        assert_eq!(king_attacks(a1).count_ones(), 3);
        assert_eq!(king_attacks(e4).count_ones(), 8);
    }
}
