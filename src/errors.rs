//! Error type returned by the public rules API.
//!
//! The first four variants are caller mistakes and are always recoverable.
//! `Internal` signals a broken invariant inside move generation and indicates
//! a bug rather than bad input.

use thiserror::Error;

use crate::move_generation::move_generator::MoveGenerationError;
use crate::outcome::game_outcome::GameState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Malformed FEN text or a position that cannot occur in a game.
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    /// The move is not in the current legal set, or is malformed.
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    /// A mutating operation was attempted on a finished game.
    #[error("Game already concluded ({0:?})")]
    GameAlreadyConcluded(GameState),

    #[error("No draw can be claimed in the current position")]
    DrawNotClaimable,

    #[error("Internal rules error: {0}")]
    Internal(#[from] MoveGenerationError),
}

pub type ChessResult<T> = Result<T, ChessError>;
