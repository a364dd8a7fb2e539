//! Full legal move generation pipeline.
//!
//! Runs the pseudo-legal pass, applies each candidate and drops those that
//! leave the mover's king attacked. Castling is additionally rejected when
//! the king starts on, crosses or lands on an attacked square. En-passant
//! legality falls out of the same apply-then-test check, which catches the
//! rare case where removing both pawns from a rank uncovers a rook or queen.

use tracing::trace;

use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::move_generator::{
    pseudo_legal_moves, GeneratedMove, MoveAnnotations, MoveGenResult, MoveGenerator,
};
use crate::moves::chess_move::Move;
use crate::position::chess_types::*;
use crate::position::position::Position;

/// Legal moves annotated with check and checkmate flags.
pub struct LegalMoveGenerator;

/// Legal moves without annotations.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<GeneratedMove>> {
        generate_filtered(position, pseudo_legal_moves(position), true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<GeneratedMove>> {
        generate_filtered(position, pseudo_legal_moves(position), false)
    }
}

/// Legal moves of the side to move, in generation order.
pub fn legal_moves(position: &Position) -> MoveGenResult<Vec<Move>> {
    Ok(FastLegalMoveGenerator
        .generate_legal_moves(position)?
        .into_iter()
        .map(|generated| generated.mv)
        .collect())
}

/// Whether the side to move can legally capture en passant.
pub fn has_legal_en_passant_capture(position: &Position) -> bool {
    let Some(target) = position.en_passant_square() else {
        return false;
    };

    let mut candidates = Vec::new();
    generate_pawn_moves(position, &mut candidates);
    candidates.retain(|mv| mv.to == target && mv.from.file() != mv.to.file());

    // Positions reaching here have already been validated, so a failed
    // application just means the capture is unavailable.
    generate_filtered(position, candidates, false).is_ok_and(|moves| !moves.is_empty())
}

fn generate_filtered(
    position: &Position,
    candidates: Vec<Move>,
    annotate: bool,
) -> MoveGenResult<Vec<GeneratedMove>> {
    let side = position.side_to_move();
    let mut legal = Vec::with_capacity(candidates.len());

    for mv in candidates {
        if !castling_path_is_safe(position, &mv) {
            continue;
        }

        let applied = apply_move(position, &mv)?;
        if is_king_in_check(applied.position.board(), side) {
            continue;
        }

        let annotations = if annotate && applied.position.in_check() {
            let replies = generate_filtered(
                &applied.position,
                pseudo_legal_moves(&applied.position),
                false,
            )?;
            MoveAnnotations {
                gives_check: true,
                is_checkmate: replies.is_empty(),
            }
        } else {
            MoveAnnotations::default()
        };

        legal.push(GeneratedMove {
            mv,
            position_after: applied.position,
            captured: applied.captured,
            is_en_passant: applied.is_en_passant,
            annotations,
        });
    }

    trace!(count = legal.len(), fen = %position.fen(), "generated legal moves");
    Ok(legal)
}

/// King origin, transit and destination must all be unattacked.
fn castling_path_is_safe(position: &Position, mv: &Move) -> bool {
    if !mv.is_castling() {
        return true;
    }
    let enemy = position.side_to_move().opposite();
    let transit = Square::from_file_rank((mv.from.file() + mv.to.file()) / 2, mv.from.rank());

    [Some(mv.from), transit, Some(mv.to)]
        .into_iter()
        .flatten()
        .all(|square| !is_square_attacked(position.board(), square, enemy))
}
