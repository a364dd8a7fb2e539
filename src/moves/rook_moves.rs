//! Occupancy-aware rook attacks.

use crate::position::chess_types::Square;

pub(crate) const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ORTHOGONAL_STEPS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

/// Squares along one direction up to and including the first occupied square.
pub(crate) fn trace_ray(square: Square, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = square.file() as i32 + file_step;
    let mut rank = square.rank() as i32 + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if occupancy & bit != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::position::chess_types::Square;

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    #[test]
    fn empty_board_rook_sees_fourteen_squares() {
        assert_eq!(rook_attacks(sq("d4"), 0).count_ones(), 14);
    }

    #[test]
    fn blocker_is_included_and_stops_ray() {
        let attacks = rook_attacks(sq("a1"), sq("a4").bit());
        assert_ne!(attacks & sq("a4").bit(), 0);
        assert_eq!(attacks & sq("a5").bit(), 0);
        assert_ne!(attacks & sq("h1").bit(), 0);
    }
}
