//! Canonical chess-rule constants.
//!
//! Rule thresholds used by the outcome evaluator live here next to the
//! standard starting position so they can be tuned or inspected in one place.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-moves without a capture or pawn move after which a draw may be claimed.
pub const FIFTY_MOVE_RULE_PLIES: u32 = 100;

/// Half-moves without a capture or pawn move after which the game is drawn.
pub const SEVENTY_FIVE_MOVE_RULE_PLIES: u32 = 150;

/// Occurrences of a position after which a draw may be claimed.
pub const THREEFOLD_REPETITION_COUNT: u32 = 3;

/// Occurrences of a position after which the game is drawn.
pub const FIVEFOLD_REPETITION_COUNT: u32 = 5;
