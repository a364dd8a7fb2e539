//! Zobrist fingerprints for repetition detection.
//!
//! The keys are generated from a fixed seed so fingerprints are deterministic
//! across runs. Clocks never contribute; the en-passant file contributes only
//! when the side to move has a legal en-passant capture.

use std::sync::OnceLock;

use crate::move_generation::legal_move_generator::has_legal_en_passant_capture;
use crate::position::chess_types::*;
use crate::position::position::Position;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for kind in color {
            for key in kind {
                *key = splitmix64(&mut seed);
            }
        }
    }

    let black_to_move = splitmix64(&mut seed);

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = splitmix64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = splitmix64(&mut seed);
    }

    ZobristTables {
        piece_square,
        black_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn position_fingerprint(position: &Position) -> u64 {
    let keys = tables();
    let board = position.board();
    let mut hash = 0u64;

    for color in Color::ALL {
        for kind in PieceKind::ALL {
            for square in squares_of(board.pieces(color, kind)) {
                hash ^= keys.piece_square[color.index()][kind.index()][square.index()];
            }
        }
    }

    if position.side_to_move() == Color::Black {
        hash ^= keys.black_to_move;
    }

    hash ^= keys.castling[(position.castling_rights() & CASTLE_ALL) as usize];

    if let Some(square) = position.en_passant_square() {
        if has_legal_en_passant_capture(position) {
            hash ^= keys.en_passant_file[square.file() as usize];
        }
    }

    hash
}

#[cfg(test)]
mod tests {
    use crate::position::position::Position;

    fn fingerprint(fen: &str) -> u64 {
        Position::from_fen(fen)
            .expect("test FEN should parse")
            .fingerprint()
    }

    #[test]
    fn clocks_do_not_affect_fingerprint() {
        assert_eq!(
            fingerprint("4k3/8/8/8/8/8/8/4K2R w K - 0 1"),
            fingerprint("4k3/8/8/8/8/8/8/4K2R w K - 37 60")
        );
    }

    #[test]
    fn side_and_castling_rights_affect_fingerprint() {
        let base = fingerprint("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        assert_ne!(base, fingerprint("4k3/8/8/8/8/8/8/4K2R b K - 0 1"));
        assert_ne!(base, fingerprint("4k3/8/8/8/8/8/8/4K2R w - - 0 1"));
    }

    #[test]
    fn en_passant_target_counts_only_when_capturable() {
        // After 1. e4 nothing can take on e3.
        assert_eq!(
            fingerprint("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"),
            fingerprint("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
        );

        // The f5 pawn can take e6.
        assert_ne!(
            fingerprint("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 3"),
            fingerprint("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3")
        );

        // The e5 pawn could take d6 but is pinned to its king.
        assert_eq!(
            fingerprint("2k5/6b1/8/3pP3/8/8/1K6/8 w - d6 0 1"),
            fingerprint("2k5/6b1/8/3pP3/8/8/1K6/8 w - - 0 1")
        );
    }
}
