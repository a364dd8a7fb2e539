//! Occupancy-aware bishop attacks.

use crate::moves::rook_moves::trace_ray;
use crate::position::chess_types::Square;

pub(crate) const DIAGONAL_STEPS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    DIAGONAL_STEPS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::position::chess_types::Square;

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    #[test]
    fn empty_board_bishop_from_d4_sees_thirteen_squares() {
        assert_eq!(bishop_attacks(sq("d4"), 0).count_ones(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let attacks = bishop_attacks(sq("c1"), sq("e3").bit());
        assert_ne!(attacks & sq("e3").bit(), 0);
        assert_eq!(attacks & sq("f4").bit(), 0);
    }
}
