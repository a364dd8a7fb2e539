//! Terminal-state detection and draw-claim eligibility.
//!
//! Automatic endings are checked in a fixed order: checkmate or stalemate,
//! fivefold repetition, the seventy-five-move rule, then insufficient
//! material. Claimable draws are reported in the order threefold
//! repetition, fifty-move rule, accepted offer.

use crate::move_generation::move_generator::GeneratedMove;
use crate::outcome::game_outcome::{DrawReason, Outcome, WinReason};
use crate::outcome::repetition::RepetitionTable;
use crate::position::board::Board;
use crate::position::chess_rules::{
    FIFTY_MOVE_RULE_PLIES, FIVEFOLD_REPETITION_COUNT, SEVENTY_FIVE_MOVE_RULE_PLIES,
    THREEFOLD_REPETITION_COUNT,
};
use crate::position::chess_types::*;
use crate::position::position::Position;

/// Decide whether `position` ends the game on its own.
///
/// `legal_moves` must be the legal moves of `position`, and `repetitions`
/// must already include `position` itself.
pub fn evaluate_outcome(position: &Position, legal_moves: &[GeneratedMove], repetitions: &RepetitionTable) -> Outcome {
    if legal_moves.is_empty() {
        return if position.in_check() {
            Outcome::won(position.side_to_move().opposite(), WinReason::Checkmate)
        } else {
            Outcome::drawn(DrawReason::Stalemate)
        };
    }

    if repetitions.count(position) >= FIVEFOLD_REPETITION_COUNT {
        return Outcome::drawn(DrawReason::FivefoldRepetition);
    }

    if position.halfmove_clock() >= SEVENTY_FIVE_MOVE_RULE_PLIES {
        return Outcome::drawn(DrawReason::SeventyFiveMoveRule);
    }

    if has_insufficient_material(position.board()) {
        return Outcome::drawn(DrawReason::InsufficientMaterial);
    }

    Outcome::PLAYING
}

/// The draw the side to move could claim right now, if any.
///
/// `draw_offered` is true when the opponent offered a draw with the move
/// that produced `position`.
pub fn claimable_draw(
    position: &Position,
    legal_moves: &[GeneratedMove],
    repetitions: &RepetitionTable,
    draw_offered: bool,
) -> Option<DrawReason> {
    if threefold_claimable(position, legal_moves, repetitions) {
        Some(DrawReason::ThreefoldRepetition)
    } else if fifty_move_claimable(position, legal_moves) {
        Some(DrawReason::FiftyMoveRule)
    } else if draw_offered {
        Some(DrawReason::OfferedAndAccepted)
    } else {
        None
    }
}

/// The current position has occurred three times, or the side to move has a
/// move whose resulting position would.
fn threefold_claimable(position: &Position, legal_moves: &[GeneratedMove], repetitions: &RepetitionTable) -> bool {
    repetitions.count(position) >= THREEFOLD_REPETITION_COUNT
        || legal_moves
            .iter()
            .any(|mv| repetitions.count(&mv.position_after) + 1 >= THREEFOLD_REPETITION_COUNT)
}

/// Fifty moves have passed, or the side to move can complete the fiftieth
/// with a quiet non-pawn move.
fn fifty_move_claimable(position: &Position, legal_moves: &[GeneratedMove]) -> bool {
    let clock = position.halfmove_clock();
    clock >= FIFTY_MOVE_RULE_PLIES
        || (clock + 1 == FIFTY_MOVE_RULE_PLIES
            && legal_moves
                .iter()
                .any(|mv| mv.mv.piece.kind != PieceKind::Pawn && mv.captured.is_none()))
}

/// Neither side can ever deliver mate: bare kings, a single minor piece, or
/// bishops all on one square color.
pub fn has_insufficient_material(board: &Board) -> bool {
    let mating_material = Color::ALL.into_iter().any(|color| {
        let heavy_or_pawns = board.pieces(color, PieceKind::Pawn)
            | board.pieces(color, PieceKind::Rook)
            | board.pieces(color, PieceKind::Queen);
        heavy_or_pawns != 0
    });
    if mating_material {
        return false;
    }

    if board.occupancy_all().count_ones() < 4 {
        return true;
    }

    let knights = board.pieces(Color::White, PieceKind::Knight) | board.pieces(Color::Black, PieceKind::Knight);
    if knights != 0 {
        return false;
    }

    let bishops = board.pieces(Color::White, PieceKind::Bishop) | board.pieces(Color::Black, PieceKind::Bishop);
    let mut shades = squares_of(bishops).map(Square::color);
    match shades.next() {
        Some(first) => shades.all(|shade| shade == first),
        None => true,
    }
}
