//! Bitboard piece placement.
//!
//! `Board` keeps one bitboard per (color, kind) plus occupancy caches that are
//! updated on every `put`/`remove`, so attack queries never rescan pieces.

use std::fmt;

use crate::position::chess_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],
    occupancy_by_color: [u64; 2],
    occupancy_all: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
        }
    }

    /// Build a board from `(square, piece)` pairs. Later pairs overwrite earlier ones.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        for (square, piece) in pieces {
            board.put(square, piece);
        }
        board
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_all
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupancy_all & square.bit() == 0
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square.bit();
        if self.occupancy_all & mask == 0 {
            return None;
        }
        let color = if self.occupancy_by_color[Color::White.index()] & mask != 0 {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & mask != 0)
            .map(|kind| Piece::new(color, kind))
    }

    /// Place a piece, replacing whatever stood on the square.
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.remove(square);
        let mask = square.bit();
        self.pieces[piece.color.index()][piece.kind.index()] |= mask;
        self.occupancy_by_color[piece.color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    /// Clear a square, returning the piece that stood there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square)?;
        let mask = !square.bit();
        self.pieces[piece.color.index()][piece.kind.index()] &= mask;
        self.occupancy_by_color[piece.color.index()] &= mask;
        self.occupancy_all &= mask;
        Some(piece)
    }

    /// Square of the lowest-indexed king of `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(kings.trailing_zeros() as u8))
        }
    }

    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.pieces(color, kind).count_ones()
    }

    /// Occupied squares with their pieces, in square-index order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        squares_of(self.occupancy_all)
            .filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
