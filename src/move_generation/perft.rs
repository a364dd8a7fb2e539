//! Perft: exhaustive legal-move tree counting.
//!
//! Leaf counts for well-known positions are published, which makes perft the
//! standard cross-check for a move generator.

use crate::move_generation::legal_move_generator::{FastLegalMoveGenerator, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::position::position::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;
        self.captures += usize::from(mv.captured.is_some());
        self.en_passant += usize::from(mv.is_en_passant);
        self.castles += usize::from(mv.mv.is_castling());
        self.promotions += usize::from(mv.mv.promotion.is_some());
        self.checks += usize::from(mv.annotations.gives_check);
        self.checkmates += usize::from(mv.annotations.is_checkmate);
    }
}

pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, position: &Position, depth: u8) -> MoveGenResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    for mv in generator.generate_legal_moves(position)? {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Node-only perft using the unannotated generator.
pub fn perft_legal(position: &Position, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&FastLegalMoveGenerator, position, depth)
}

/// Perft with check and checkmate tallies.
pub fn perft_annotated(position: &Position, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&LegalMoveGenerator, position, depth)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.record_leaf(mv);
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.position_after)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("perft FEN should parse")
    }

    #[test]
    fn depth_zero_counts_single_node() {
        let counts = perft_legal(&Position::starting(), 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn startpos_node_counts() {
        let start = Position::starting();
        let expected = [20usize, 400, 8902];
        for (depth, nodes) in expected.into_iter().enumerate() {
            let counts = perft_legal(&start, depth as u8 + 1).expect("perft should run");
            assert_eq!(counts.nodes, nodes, "depth {}", depth + 1);
        }
    }

    #[test]
    fn startpos_depth_three_tallies() {
        let counts = perft_annotated(&Position::starting(), 3).expect("perft should run");
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let kiwipete = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let one = perft_annotated(&kiwipete, 1).expect("perft should run");
        assert_eq!(one.nodes, 48);
        assert_eq!(one.captures, 8);
        assert_eq!(one.castles, 2);

        let two = perft_annotated(&kiwipete, 2).expect("perft should run");
        assert_eq!(two.nodes, 2039);
        assert_eq!(two.captures, 351);
        assert_eq!(two.en_passant, 1);
        assert_eq!(two.castles, 91);
        assert_eq!(two.checks, 3);
    }

    #[test]
    fn endgame_position_three() {
        let pos3 = position("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
        let counts = perft_legal(&pos3, 3).expect("perft should run");
        assert_eq!(counts.nodes, 2812);
    }

    #[test]
    fn promotion_heavy_position_four() {
        let pos4 = position("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1");
        assert_eq!(perft_legal(&pos4, 1).expect("perft should run").nodes, 6);
        assert_eq!(perft_legal(&pos4, 2).expect("perft should run").nodes, 264);
        assert_eq!(perft_legal(&pos4, 3).expect("perft should run").nodes, 9467);
    }

    #[test]
    fn position_five_depth_two() {
        let pos5 = position("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8");
        assert_eq!(perft_legal(&pos5, 2).expect("perft should run").nodes, 1486);
    }
}
