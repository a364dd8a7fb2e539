//! Immutable full-game-state snapshot.
//!
//! A `Position` is everything needed to continue a game from one moment:
//! placement, side to move, castling rights, en-passant target and both
//! clocks. Positions reachable through the public API are always valid:
//! one king per side and the side that just moved is not in check.

use std::fmt;

use crate::errors::ChessResult;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::position::board::Board;
use crate::position::chess_rules::STARTING_POSITION_FEN;
use crate::position::chess_types::*;
use crate::position::fingerprint::position_fingerprint;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    in_check: bool,
}

impl Position {
    /// Validate and build a position from its parts.
    pub fn new(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Result<Position, String> {
        for color in Color::ALL {
            let kings = board.count(color, PieceKind::King);
            if kings != 1 {
                return Err(format!("{color} must have exactly one king, found {kings}"));
            }
        }

        let back_ranks = 0xFF00_0000_0000_00FFu64;
        let pawns = board.pieces(Color::White, PieceKind::Pawn) | board.pieces(Color::Black, PieceKind::Pawn);
        if pawns & back_ranks != 0 {
            return Err("Pawns cannot stand on the first or eighth rank".to_owned());
        }

        if let Some(square) = en_passant_square {
            let expected_rank = match side_to_move {
                Color::White => 5,
                Color::Black => 2,
            };
            if square.rank() != expected_rank {
                return Err(format!("En-passant square {square} is not on the expected rank"));
            }

            let pusher = side_to_move.opposite();
            let forward = match pusher {
                Color::White => 1,
                Color::Black => -1,
            };
            let pushed_to = square.offset(0, forward);
            let pushed_from = square.offset(0, -forward);
            if !board.is_empty(square) || !pushed_from.is_some_and(|origin| board.is_empty(origin)) {
                return Err(format!("En-passant square {square} does not follow a double pawn push"));
            }
            if pushed_to.and_then(|to| board.piece_at(to)) != Some(Piece::new(pusher, PieceKind::Pawn)) {
                return Err(format!("En-passant square {square} has no {pusher} pawn in front of it"));
            }
        }

        if fullmove_number == 0 {
            return Err("Fullmove number must be at least 1".to_owned());
        }

        if is_king_in_check(&board, side_to_move.opposite()) {
            return Err(format!(
                "{} is in check but it is {side_to_move} to move",
                side_to_move.opposite()
            ));
        }

        Ok(Position::from_parts_unchecked(
            board,
            side_to_move,
            castling_rights & CASTLE_ALL,
            en_passant_square,
            halfmove_clock,
            fullmove_number,
        ))
    }

    /// Assemble a position without validation. Used by move application,
    /// whose pseudo-legal outputs may leave the mover in check until filtered.
    pub(crate) fn from_parts_unchecked(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Position {
        let in_check = board
            .king_square(side_to_move)
            .is_some_and(|king| is_square_attacked(&board, king, side_to_move.opposite()));
        Position {
            board,
            side_to_move,
            castling_rights,
            en_passant_square,
            halfmove_clock,
            fullmove_number,
            in_check,
        }
    }

    /// Standard initial array.
    pub fn starting() -> Position {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    pub fn from_fen(fen: &str) -> ChessResult<Position> {
        parse_fen(fen)
    }

    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    /// Repetition identity: placement, side to move, castling rights and the
    /// en-passant target only when a legal en-passant capture exists.
    pub fn fingerprint(&self) -> u64 {
        position_fingerprint(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, color: Color, side: CastlingSide) -> bool {
        self.castling_rights & castling_right(color, side) != 0
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::position::board::Board;
    use crate::position::chess_types::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    fn kings(white: &str, black: &str) -> Board {
        Board::from_pieces([
            (sq(white), Piece::new(Color::White, PieceKind::King)),
            (sq(black), Piece::new(Color::Black, PieceKind::King)),
        ])
    }

    #[test]
    fn starting_position_has_expected_state() {
        let position = Position::starting();
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.castling_rights(), CASTLE_ALL);
        assert_eq!(position.en_passant_square(), None);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 1);
        assert!(!position.in_check());
        assert_eq!(position.board().occupancy_all().count_ones(), 32);
    }

    #[test]
    fn new_rejects_missing_or_extra_kings() {
        let mut board = kings("e1", "e8");
        board.put(sq("a8"), Piece::new(Color::Black, PieceKind::King));
        assert!(Position::new(board, Color::White, 0, None, 0, 1).is_err());

        let lone = Board::from_pieces([(sq("e1"), Piece::new(Color::White, PieceKind::King))]);
        assert!(Position::new(lone, Color::White, 0, None, 0, 1).is_err());
    }

    #[test]
    fn new_rejects_side_not_to_move_in_check() {
        let mut board = kings("e1", "e8");
        board.put(sq("e4"), Piece::new(Color::White, PieceKind::Rook));
        assert!(Position::new(board.clone(), Color::White, 0, None, 0, 1).is_err());

        let position = Position::new(board, Color::Black, 0, None, 0, 1)
            .expect("black to move in check is valid");
        assert!(position.in_check());
    }

    #[test]
    fn new_rejects_misplaced_en_passant_and_pawns() {
        assert!(Position::new(kings("e1", "e8"), Color::White, 0, Some(sq("d3")), 0, 1).is_err());
        assert!(Position::new(kings("e1", "e8"), Color::White, 0, Some(sq("d6")), 0, 1).is_err());

        let mut pushed = kings("e1", "e8");
        pushed.put(sq("d5"), Piece::new(Color::Black, PieceKind::Pawn));
        assert!(Position::new(pushed.clone(), Color::White, 0, Some(sq("d6")), 0, 1).is_ok());
        pushed.put(sq("d7"), Piece::new(Color::Black, PieceKind::Knight));
        assert!(Position::new(pushed, Color::White, 0, Some(sq("d6")), 0, 1).is_err());

        let mut board = kings("e1", "e8");
        board.put(sq("a8"), Piece::new(Color::White, PieceKind::Pawn));
        assert!(Position::new(board, Color::White, 0, None, 0, 1).is_err());
    }

    #[test]
    fn display_is_fen() {
        let position = Position::starting();
        assert_eq!(position.to_string(), position.fen());
    }
}
