// src/board/fen.rs
// Piece-placement field only; side to move, castling and clocks are not
// part of this board.

use super::fen_tables::glyph_to_piece;
use super::SquareValue;
use crate::error::FormatError;

/// Decode a placement string into a fresh square array.
///
/// Anything after the first whitespace-separated field is ignored, so a full
/// six-field FEN is accepted as well. Short ranks are padded with empty
/// squares, but every rank needs at least one character.
pub(super) fn parse_placement(fen: &str) -> Result<[SquareValue; 64], FormatError> {
    let placement = fen.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = if placement.is_empty() {
        Vec::new()
    } else {
        placement.split('/').collect()
    };

    if ranks.len() < 8 {
        return Err(FormatError::TooFewRanks { found: ranks.len() });
    }
    if ranks.len() > 8 {
        return Err(FormatError::TooManyRanks { found: ranks.len() });
    }

    let mut squares = [SquareValue::EMPTY; 64];
    for (rank, row) in ranks.iter().enumerate() {
        if row.is_empty() {
            return Err(FormatError::EmptyRank { rank });
        }
        let mut file = 0usize;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FormatError::InvalidDigit { rank, digit: c });
                }
                file += run as usize;
                if file > 8 {
                    return Err(FormatError::RankOverflow {
                        rank,
                        squares: file,
                    });
                }
                continue;
            }

            let (kind, color) =
                glyph_to_piece(c).ok_or(FormatError::UnknownPiece { rank, glyph: c })?;
            if file >= 8 {
                return Err(FormatError::RankOverflow {
                    rank,
                    squares: file + 1,
                });
            }
            squares[rank * 8 + file] = SquareValue::piece(color, kind);
            file += 1;
        }
    }

    Ok(squares)
}

/// Encode squares back into a placement string.
pub(super) fn format_placement(squares: &[SquareValue; 64]) -> String {
    let mut out = String::with_capacity(71);
    for (rank, row) in squares.chunks(8).enumerate() {
        if rank > 0 {
            out.push('/');
        }
        let mut empty_run = 0u8;
        for value in row {
            match value.glyph() {
                Some(g) => {
                    if empty_run > 0 {
                        out.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    out.push(g);
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push((b'0' + empty_run) as char);
        }
    }
    out
}
