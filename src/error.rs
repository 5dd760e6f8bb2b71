use thiserror::Error;

/// Malformed piece-placement input.
///
/// Ranks are numbered the way they appear in the string: rank 0 is the first
/// (topmost) section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 8 ranks, found {found}")]
    TooFewRanks { found: usize },
    #[error("expected 8 ranks, found {found}")]
    TooManyRanks { found: usize },
    #[error("rank {rank} is empty")]
    EmptyRank { rank: usize },
    #[error("rank {rank} describes {squares} squares, more than 8")]
    RankOverflow { rank: usize, squares: usize },
    #[error("rank {rank}: unknown piece glyph {glyph:?}")]
    UnknownPiece { rank: usize, glyph: char },
    #[error("rank {rank}: empty-run digit {digit} is outside 1-8")]
    InvalidDigit { rank: usize, digit: char },
}

/// A board index outside `0..64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("square index {index} is outside 0..64")]
pub struct RangeError {
    pub index: i64,
}

/// Failure to build or reload a [`crate::session::GameSession`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("viewport_fill must be in (0, 1], got {0}")]
    ViewportFill(f64),
}
