use crate::error::RangeError;
use std::fmt;
use std::str::FromStr;

/// One of the 64 board cells, `0..64`.
///
/// Index 0 is the top-left square as drawn (a8) and 63 the bottom-right (h1):
/// `index = rank * 8 + file` with rank 0 being the first FEN row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// `None` for an index outside `0..64`.
    #[inline(always)]
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 64).then_some(Square(index))
    }

    /// Build from grid coordinates, `None` when either lies outside `0..8`.
    #[inline]
    pub fn from_coords(file: i32, rank: i32) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// Row counted from the top of the drawn board.
    #[inline(always)]
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl TryFrom<i32> for Square {
    type Error = RangeError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        if (0..64).contains(&index) {
            Ok(Square(index as u8))
        } else {
            Err(RangeError {
                index: index as i64,
            })
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'8' - self.rank()) as char;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(format!("Invalid square: {}", s));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank_from_bottom = bytes[1].wrapping_sub(b'1');
        if file > 7 || rank_from_bottom > 7 {
            return Err(format!("Invalid square: {}", s));
        }
        Ok(Square((7 - rank_from_bottom) * 8 + file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_use_drawn_orientation() {
        assert_eq!(Square::from_index(0).unwrap().to_string(), "a8");
        assert_eq!(Square::from_index(7).unwrap().to_string(), "h8");
        assert_eq!(Square::from_index(56).unwrap().to_string(), "a1");
        assert_eq!(Square::from_index(63).unwrap().to_string(), "h1");
    }

    #[test]
    fn parses_algebraic_names() {
        assert_eq!(Square::from_str("e2").unwrap().index(), 52);
        assert_eq!(Square::from_str("d8").unwrap().index(), 3);
        assert!(Square::from_str("i1").is_err());
        assert!(Square::from_str("a9").is_err());
        assert!(Square::from_str("a").is_err());
    }

    #[test]
    fn coords_reject_off_grid() {
        assert_eq!(Square::from_coords(7, 1).map(Square::index), Some(15));
        // file -1 on rank 2 must not alias to index 15
        assert_eq!(Square::from_coords(-1, 2), None);
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::from_coords(0, 8), None);
    }

    #[test]
    fn try_from_reports_bad_index() {
        assert_eq!(Square::try_from(64i32), Err(RangeError { index: 64 }));
        assert_eq!(Square::try_from(-1i32), Err(RangeError { index: -1 }));
        assert_eq!(Square::try_from(63i32).map(Square::index), Ok(63));
        assert_eq!(Square::from_index(64), None);
    }
}
