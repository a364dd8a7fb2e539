//! A chess game: its history, status and the transitions between them.
//!
//! `Game` values are immutable. Every transition (`make_move`, `claim_draw`,
//! `resign`) returns a new game and leaves the receiver untouched, so older
//! games can be kept for undo or analysis.

use tracing::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::chess_move::{CheckType, Move, PlayedMove};
use crate::outcome::game_outcome::{DrawReason, GameState, Outcome, WinReason};
use crate::outcome::outcome_evaluator::{claimable_draw, evaluate_outcome};
use crate::outcome::repetition::RepetitionTable;
use crate::position::chess_types::{Color, Square};
use crate::position::position::Position;
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::standard_algebraic::notation_for;

/// One ply of history: the position a move was played from and the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub position_before: Position,
    pub played: PlayedMove,
}

#[derive(Debug, Clone)]
pub struct Game {
    initial_position: Position,
    history: Vec<HistoryEntry>,
    current: Position,
    legal_moves: Vec<GeneratedMove>,
    repetitions: RepetitionTable,
    outcome: Outcome,
    draw_claim_reason: Option<DrawReason>,
}

impl Game {
    /// Game from the standard starting position.
    pub fn new_game() -> ChessResult<Game> {
        Game::from_position(Position::starting())
    }

    /// Game starting from an arbitrary FEN. The position may already be
    /// terminal, e.g. checkmate or stalemate.
    pub fn from_fen(fen: &str) -> ChessResult<Game> {
        Game::from_position(Position::from_fen(fen)?)
    }

    pub fn from_position(position: Position) -> ChessResult<Game> {
        let legal_moves = FastLegalMoveGenerator.generate_legal_moves(&position)?;
        let mut repetitions = RepetitionTable::new();
        repetitions.record(&position);

        let outcome = evaluate_outcome(&position, &legal_moves, &repetitions);
        let draw_claim_reason = if outcome.state.is_over() {
            None
        } else {
            claimable_draw(&position, &legal_moves, &repetitions, false)
        };

        if outcome.state.is_over() {
            info!(fen = %position.fen(), state = ?outcome.state, "game created in a terminal position");
        }

        Ok(Game {
            initial_position: position.clone(),
            history: Vec::new(),
            current: position,
            legal_moves,
            repetitions,
            outcome,
            draw_claim_reason,
        })
    }

    /// Play `mv` for the side to move, optionally offering a draw with it.
    ///
    /// The offer stays claimable by the opponent until they reply with a move.
    pub fn make_move(&self, mv: &Move, offer_draw: bool) -> ChessResult<Game> {
        self.ensure_playing()?;

        let generated = self
            .legal_moves
            .iter()
            .find(|generated| generated.mv == *mv)
            .ok_or_else(|| ChessError::IllegalMove(format!("{mv} is not legal in {}", self.current)))?;

        let next = generated.position_after.clone();
        let next_legal_moves = FastLegalMoveGenerator.generate_legal_moves(&next)?;
        let mut repetitions = self.repetitions.clone();
        repetitions.record(&next);

        let check = match (next.in_check(), next_legal_moves.is_empty()) {
            (true, true) => CheckType::Checkmate,
            (true, false) => CheckType::Check,
            (false, _) => CheckType::None,
        };
        let notation = notation_for(&self.legal_moves, generated, check, offer_draw);
        let played = PlayedMove::new(*mv, generated.captured, check, offer_draw, notation);

        let outcome = evaluate_outcome(&next, &next_legal_moves, &repetitions);
        let draw_claim_reason = if outcome.state.is_over() {
            None
        } else {
            claimable_draw(&next, &next_legal_moves, &repetitions, offer_draw)
        };

        debug!(san = played.notation(), fen = %next.fen(), "move applied");
        if outcome.state.is_over() {
            info!(state = ?outcome.state, draw_reason = ?outcome.draw_reason, "game concluded");
        }

        let mut history = self.history.clone();
        history.push(HistoryEntry {
            position_before: self.current.clone(),
            played,
        });

        Ok(Game {
            initial_position: self.initial_position.clone(),
            history,
            current: next,
            legal_moves: next_legal_moves,
            repetitions,
            outcome,
            draw_claim_reason,
        })
    }

    /// Parse coordinate notation such as `e2e4` or `b7b8q` and play it.
    pub fn make_move_from_long_algebraic(&self, long_algebraic: &str, offer_draw: bool) -> ChessResult<Game> {
        self.ensure_playing()?;
        let mv = long_algebraic_to_move(long_algebraic, &self.current).map_err(ChessError::IllegalMove)?;
        self.make_move(&mv, offer_draw)
    }

    /// Draw the game for the currently claimable reason.
    pub fn claim_draw(&self) -> ChessResult<Game> {
        self.ensure_playing()?;
        let reason = self.draw_claim_reason.ok_or(ChessError::DrawNotClaimable)?;

        debug!(%reason, "draw claimed");
        Ok(self.concluded(Outcome::drawn(reason)))
    }

    /// `color` resigns; the other side wins. Allowed on either side's turn.
    pub fn resign(&self, color: Color) -> ChessResult<Game> {
        self.ensure_playing()?;

        debug!(%color, "resigned");
        Ok(self.concluded(Outcome::won(color.opposite(), WinReason::Resignation)))
    }

    fn concluded(&self, outcome: Outcome) -> Game {
        info!(state = ?outcome.state, "game concluded");
        Game {
            outcome,
            draw_claim_reason: None,
            ..self.clone()
        }
    }

    fn ensure_playing(&self) -> ChessResult<()> {
        if self.outcome.state.is_over() {
            return Err(ChessError::GameAlreadyConcluded(self.outcome.state));
        }
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.outcome.state
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn draw_reason(&self) -> Option<DrawReason> {
        self.outcome.draw_reason
    }

    #[inline]
    pub fn win_reason(&self) -> Option<WinReason> {
        self.outcome.win_reason
    }

    #[inline]
    pub fn draw_claim_reason(&self) -> Option<DrawReason> {
        self.draw_claim_reason
    }

    #[inline]
    pub fn can_claim_draw(&self) -> bool {
        self.draw_claim_reason.is_some()
    }

    pub fn initial_position(&self) -> &Position {
        &self.initial_position
    }

    pub fn current_position(&self) -> &Position {
        &self.current
    }

    pub fn fen(&self) -> String {
        self.current.fen()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn active_color(&self) -> Color {
        self.current.side_to_move()
    }

    /// Check status of the side to move.
    pub fn check_status(&self) -> CheckType {
        match (self.current.in_check(), self.legal_moves.is_empty()) {
            (true, true) => CheckType::Checkmate,
            (true, false) => CheckType::Check,
            (false, _) => CheckType::None,
        }
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn available_moves(&self) -> Vec<Move> {
        if self.outcome.state.is_over() {
            return Vec::new();
        }
        self.legal_moves.iter().map(|generated| generated.mv).collect()
    }

    /// Legal moves of the piece standing on `square`.
    pub fn available_moves_for_piece(&self, square: Square) -> Vec<Move> {
        self.available_moves()
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }
}
