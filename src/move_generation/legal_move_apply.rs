//! Produce the position that follows a move.
//!
//! Applies piece relocation, capture removal (including the en-passant pawn),
//! the castling rook hop, promotion, and the bookkeeping fields: castling
//! rights, en-passant target, both clocks and the side to move.

use crate::move_generation::legal_moves_king::castling_squares;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::chess_move::Move;
use crate::position::chess_types::*;
use crate::position::position::Position;

/// Result of applying a move that has not yet been checked for king safety.
#[derive(Debug, Clone)]
pub struct AppliedMove {
    pub position: Position,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
}

pub fn apply_move(position: &Position, mv: &Move) -> MoveGenResult<AppliedMove> {
    let moving_color = position.side_to_move();
    let mut board = position.board().clone();

    let moved_piece = board
        .remove(mv.from)
        .ok_or_else(|| MoveGenerationError::InvalidState(format!("no piece on {}", mv.from)))?;
    if moved_piece != mv.piece {
        return Err(MoveGenerationError::InvalidState(format!(
            "{} holds {moved_piece:?}, move expects {:?}",
            mv.from, mv.piece
        )));
    }

    let is_en_passant = moved_piece.kind == PieceKind::Pawn
        && Some(mv.to) == position.en_passant_square()
        && mv.from.file() != mv.to.file();

    let captured = if is_en_passant {
        let victim = Square::from_file_rank(mv.to.file(), mv.from.rank()).ok_or_else(|| {
            MoveGenerationError::InvalidState(format!("bad en-passant target {}", mv.to))
        })?;
        board.remove(victim)
    } else {
        board.remove(mv.to)
    };

    let placed_kind = mv.promotion.unwrap_or(moved_piece.kind);
    board.put(mv.to, Piece::new(moving_color, placed_kind));

    if let Some(side) = mv.castling_side() {
        let (_, _, rook_from, rook_to) = castling_squares(moving_color, side);
        let rook = board.remove(rook_from).ok_or_else(|| {
            MoveGenerationError::InvalidState(format!("castling without a rook on {rook_from}"))
        })?;
        board.put(rook_to, rook);
    }

    let castling_rights = updated_castling_rights(position.castling_rights(), moved_piece, mv);

    let en_passant_square = if mv.is_double_pawn_push() {
        Square::from_index((mv.from.index() + mv.to.index()) as u8 / 2)
    } else {
        None
    };

    let halfmove_clock = if moved_piece.kind == PieceKind::Pawn || captured.is_some() {
        0
    } else {
        position.halfmove_clock().saturating_add(1)
    };
    let fullmove_number = match moving_color {
        Color::Black => position.fullmove_number().saturating_add(1),
        Color::White => position.fullmove_number(),
    };

    Ok(AppliedMove {
        position: Position::from_parts_unchecked(
            board,
            moving_color.opposite(),
            castling_rights,
            en_passant_square,
            halfmove_clock,
            fullmove_number,
        ),
        captured,
        is_en_passant,
    })
}

fn updated_castling_rights(rights: CastlingRights, moved_piece: Piece, mv: &Move) -> CastlingRights {
    let mut rights = rights;

    if moved_piece.kind == PieceKind::King {
        rights &= !(castling_right(moved_piece.color, CastlingSide::KingSide)
            | castling_right(moved_piece.color, CastlingSide::QueenSide));
    }

    // Anything leaving or landing on a rook home square clears that right.
    for square in [mv.from, mv.to] {
        rights &= !corner_right(square);
    }

    rights
}

fn corner_right(square: Square) -> CastlingRights {
    match square.index() {
        0 => CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}
