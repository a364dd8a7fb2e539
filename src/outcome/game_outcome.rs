//! Game status and the reasons behind a finished game.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Playing,
    Drawn,
    WhiteWon,
    BlackWon,
}

impl GameState {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }

    pub const fn won_by(color: Color) -> GameState {
        match color {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
            GameState::Playing | GameState::Drawn => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    OfferedAndAccepted,
    ThreefoldRepetition,
    FivefoldRepetition,
    FiftyMoveRule,
    SeventyFiveMoveRule,
}

impl DrawReason {
    /// Reasons that end the game without anyone asking.
    pub const fn is_automatic(self) -> bool {
        matches!(
            self,
            DrawReason::Stalemate
                | DrawReason::InsufficientMaterial
                | DrawReason::FivefoldRepetition
                | DrawReason::SeventyFiveMoveRule
        )
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::OfferedAndAccepted => "draw offered and accepted",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::FivefoldRepetition => "fivefold repetition",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::SeventyFiveMoveRule => "seventy-five-move rule",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WinReason {
    Checkmate,
    Resignation,
}

/// Status of a game together with why it ended, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub state: GameState,
    pub draw_reason: Option<DrawReason>,
    pub win_reason: Option<WinReason>,
}

impl Outcome {
    pub const PLAYING: Outcome = Outcome {
        state: GameState::Playing,
        draw_reason: None,
        win_reason: None,
    };

    pub const fn drawn(reason: DrawReason) -> Outcome {
        Outcome {
            state: GameState::Drawn,
            draw_reason: Some(reason),
            win_reason: None,
        }
    }

    pub const fn won(winner: Color, reason: WinReason) -> Outcome {
        Outcome {
            state: GameState::won_by(winner),
            draw_reason: None,
            win_reason: Some(reason),
        }
    }
}
