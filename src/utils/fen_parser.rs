//! FEN-to-Position parser.
//!
//! Field-level helpers report plain `String` messages; `parse_fen` wraps the
//! first failure into `ChessError::InvalidFen`.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::position::board::Board;
use crate::position::chess_types::*;
use crate::position::position::Position;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    parse_fen_fields(fen).map_err(|reason| {
        debug!(fen, %reason, "rejected FEN");
        ChessError::InvalidFen(reason)
    })
}

fn parse_fen_fields(fen: &str) -> Result<Position, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_square = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = parse_counter(halfmove_part).ok_or_else(|| format!("Invalid halfmove clock: {halfmove_part}"))?;
    let fullmove_number =
        parse_counter(fullmove_part).ok_or_else(|| format!("Invalid fullmove number: {fullmove_part}"))?;

    Position::new(
        board,
        side_to_move,
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
    )
}

/// Plain decimal digits only; `str::parse` would also take a leading `+`.
fn parse_counter(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(format!("Rank {} has too many files", rank + 1));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;
            let square = Square::from_file_rank(file, rank).ok_or_else(|| format!("Rank {} has too many files", rank + 1))?;
            board.put(square, piece);
            file += 1;
        }

        if file != 8 {
            return Err(format!("Rank {} does not sum to 8 files", rank + 1));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        let right = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        };
        if rights & right != 0 {
            return Err(format!("Repeated castling rights character: {ch}"));
        }
        rights |= right;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}
