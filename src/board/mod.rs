mod fen;

use crate::error::{FormatError, RangeError};
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

mod fen_tables;
pub mod square_bits;
pub use square_bits::*;

/// Piece placement of the standard starting position.
pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

/// Piece kinds, numbered in sprite-sheet column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Decode a 0–5 value into a kind.
    #[inline(always)]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(PieceKind::King),
            1 => Some(PieceKind::Queen),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square table for [`START_POSITION`]; black on rows 0-1, white on rows 6-7.
const STARTING_SQUARES: [SquareValue; 64] = {
    let mut squares = [SquareValue::EMPTY; 64];
    let mut file = 0;
    while file < 8 {
        squares[file] = SquareValue::piece(Color::Black, BACK_RANK[file]);
        squares[8 + file] = SquareValue::piece(Color::Black, PieceKind::Pawn);
        squares[48 + file] = SquareValue::piece(Color::White, PieceKind::Pawn);
        squares[56 + file] = SquareValue::piece(Color::White, BACK_RANK[file]);
        file += 1;
    }
    squares
};

/// Packed occupant of one square: existence flag, color flag, kind.
///
/// Callers go through the accessors; the bit layout lives in
/// [`square_bits`] and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareValue(SquareBits);

impl SquareValue {
    pub const EMPTY: SquareValue = SquareValue(0);

    #[inline(always)]
    pub const fn piece(color: Color, kind: PieceKind) -> Self {
        let color_bit = match color {
            Color::White => WHITE_BIT,
            Color::Black => 0,
        };
        SquareValue(EXISTS_BIT | color_bit | kind as u8)
    }

    /// Accepts only encodings produced by [`SquareValue::piece`] or `EMPTY`.
    pub fn from_bits(bits: SquareBits) -> Option<Self> {
        if bits == 0 {
            return Some(Self::EMPTY);
        }
        if bits & EXISTS_BIT == 0 || bits & !VALID_MASK != 0 {
            return None;
        }
        PieceKind::from_u8(bits & KIND_MASK).map(|_| SquareValue(bits))
    }

    #[inline(always)]
    pub fn bits(self) -> SquareBits {
        self.0
    }

    #[inline(always)]
    pub fn exists(self) -> bool {
        self.0 & EXISTS_BIT != 0
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        !self.exists()
    }

    #[inline]
    pub fn color(self) -> Option<Color> {
        if !self.exists() {
            None
        } else if self.0 & WHITE_BIT != 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    #[inline]
    pub fn kind(self) -> Option<PieceKind> {
        if self.exists() {
            PieceKind::from_u8(self.0 & KIND_MASK)
        } else {
            None
        }
    }

    /// Both fields at once, `None` for an empty square.
    #[inline]
    pub fn occupant(self) -> Option<(Color, PieceKind)> {
        Some((self.color()?, self.kind()?))
    }

    /// FEN letter for an occupied square.
    pub fn glyph(self) -> Option<char> {
        self.occupant()
            .map(|(color, kind)| fen_tables::PC_TO_CHAR[fen_tables::pc_index(kind, color)])
    }
}

/// The 64-cell board. No rules are enforced here; any value may be written
/// to any square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [SquareValue; 64],
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [SquareValue::EMPTY; 64],
        }
    }

    /// The standard starting position.
    pub fn starting() -> Self {
        Board {
            squares: STARTING_SQUARES,
        }
    }

    /// Replace the whole board with a FEN piece placement.
    ///
    /// Nothing is written unless the full string decodes, so on error the
    /// previous position is still in place.
    pub fn load_position(&mut self, fen: &str) -> Result<(), FormatError> {
        self.squares = fen::parse_placement(fen)?;
        Ok(())
    }

    pub fn get(&self, index: i32) -> Result<SquareValue, RangeError> {
        Square::try_from(index).map(|sq| self.at(sq))
    }

    pub fn set(&mut self, index: i32, value: SquareValue) -> Result<(), RangeError> {
        let sq = Square::try_from(index)?;
        self.put(sq, value);
        Ok(())
    }

    pub fn clear(&mut self, index: i32) -> Result<(), RangeError> {
        self.set(index, SquareValue::EMPTY)
    }

    #[inline(always)]
    pub fn at(&self, sq: Square) -> SquareValue {
        self.squares[sq.index() as usize]
    }

    #[inline(always)]
    pub fn put(&mut self, sq: Square, value: SquareValue) {
        self.squares[sq.index() as usize] = value;
    }

    /// Read a square and leave it empty.
    #[inline]
    pub fn take(&mut self, sq: Square) -> SquareValue {
        std::mem::take(&mut self.squares[sq.index() as usize])
    }

    /// Occupied squares in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, SquareValue)> + '_ {
        Square::all()
            .map(|sq| (sq, self.at(sq)))
            .filter(|(_, v)| v.exists())
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        let wanted = SquareValue::piece(color, kind);
        self.squares.iter().filter(|&&v| v == wanted).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|v| v.exists()).count()
    }

    /// Raw encodings for all 64 squares, index order.
    pub fn as_bytes(&self) -> [u8; 64] {
        self.squares.map(SquareValue::bits)
    }

    /// Placement-only FEN of the current board.
    pub fn to_fen(&self) -> String {
        fen::format_placement(&self.squares)
    }
}

/// An empty board.
impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl FromStr for Board {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        board.load_position(s)?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::all() {
            if sq.file() == 0 {
                write!(f, "{} ", 8 - sq.rank())?;
            }
            write!(f, " {}", self.at(sq).glyph().unwrap_or('.'))?;
            if sq.file() == 7 {
                writeln!(f)?;
            }
        }
        write!(f, "   a b c d e f g h")
    }
}
