//! Knight attack table.

use crate::position::chess_types::Square;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

const fn generate_knight_attacks() -> [u64; 64] {
    const JUMPS: [(i32, i32); 8] = [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];

    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < JUMPS.len() {
            attacks |= bit_if_on_board(file + JUMPS[i].0, rank + JUMPS[i].1);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn bit_if_on_board(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    1u64 << ((rank as usize) * 8 + (file as usize))
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;
    use crate::position::chess_types::Square;

    #[test]
    fn knight_in_centre_and_corner() {
        let d4: Square = "d4".parse().expect("square should parse");
        let h8: Square = "h8".parse().expect("square should parse");
        assert_eq!(knight_attacks(d4).count_ones(), 8);
        assert_eq!(knight_attacks(h8).count_ones(), 2);
    }
}
