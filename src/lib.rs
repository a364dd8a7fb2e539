//! Crate root module declarations for the plum_rules chess rules engine.
//!
//! The crate validates and applies moves, detects check, checkmate and every
//! kind of draw, formats moves in standard algebraic notation and reads and
//! writes FEN. It does not search or evaluate positions.

pub mod position {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod fingerprint;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod outcome {
    pub mod game_outcome;
    pub mod outcome_evaluator;
    pub mod repetition;
}

pub mod game {
    pub mod game;
}

pub mod errors;

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod standard_algebraic;
}

pub use errors::{ChessError, ChessResult};
pub use game::game::{Game, HistoryEntry};
pub use moves::chess_move::{CheckType, Move, PlayedMove};
pub use outcome::game_outcome::{DrawReason, GameState, Outcome, WinReason};
pub use position::chess_types::{CastlingSide, Color, Piece, PieceKind, Square};
pub use position::position::Position;
