// src/board/square_bits.rs

/// Underlying bit type for one board cell.
pub type SquareBits = u8;

// Layout shared with the page's sprite lookup: the kind in the low bits is
// the sprite column, the color bit picks the sprite row.
pub const EXISTS_BIT: SquareBits = 0b0100_0000;
pub const WHITE_BIT: SquareBits = 0b0010_0000;
pub const KIND_MASK: SquareBits = 0b0000_0111;

/// Every bit that may be set on an occupied square.
pub const VALID_MASK: SquareBits = EXISTS_BIT | WHITE_BIT | KIND_MASK;
