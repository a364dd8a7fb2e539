//! Move generation contract and the pseudo-legal candidate pass.

use thiserror::Error;

use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;
use crate::position::chess_types::Piece;
use crate::position::position::Position;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    #[error("invalid position: {0}")]
    InvalidState(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// A legal move together with the position it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    pub mv: Move,
    pub position_after: Position,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<GeneratedMove>>;
}

/// Every move obeying piece movement rules for the side to move, before
/// the own-king-safety filter. Castling candidates check rights, a rook in
/// the corner and empty squares between, but not attacked squares.
pub fn pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);

    generate_pawn_moves(position, &mut out);
    generate_knight_moves(position, &mut out);
    generate_bishop_moves(position, &mut out);
    generate_rook_moves(position, &mut out);
    generate_queen_moves(position, &mut out);
    generate_king_moves(position, &mut out);

    out
}
