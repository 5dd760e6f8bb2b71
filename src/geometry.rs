use crate::interaction::PointerPosition;
use crate::square::Square;
use serde::{Deserialize, Serialize};

/// Where the grid sits on the canvas, in pixels.
///
/// The renderer owns this: it is recomputed whenever the viewport changes and
/// passed in fresh with every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    /// Left edge of file 0.
    pub origin_x: f64,
    /// Top edge of rank 0.
    pub origin_y: f64,
    /// Edge length of one square.
    pub square_size: f64,
}

impl BoardGeometry {
    pub fn new(origin_x: f64, origin_y: f64, square_size: f64) -> Self {
        BoardGeometry {
            origin_x,
            origin_y,
            square_size,
        }
    }

    /// Center a square grid in a `width` x `height` viewport, taking `fill`
    /// of the shorter side. All three values are rounded to whole pixels.
    pub fn fit_viewport(width: f64, height: f64, fill: f64) -> Self {
        let raw_size = width.min(height) * fill / 8.0;
        let origin_x = (width - raw_size * 8.0) / 2.0;
        let origin_y = (height - raw_size * 8.0) / 2.0;
        BoardGeometry {
            origin_x: origin_x.round(),
            origin_y: origin_y.round(),
            square_size: raw_size.round(),
        }
    }

    /// Grid coordinates under a pixel, unclamped. Either value may fall
    /// outside `0..8`.
    pub fn map_pointer(&self, x: f64, y: f64) -> (i32, i32) {
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return (-1, -1);
        }
        let file = ((x - self.origin_x) / self.square_size).floor();
        let rank = ((y - self.origin_y) / self.square_size).floor();
        (saturate(file), saturate(rank))
    }

    /// The square under a pixel, `None` off the grid.
    pub fn square_at(&self, x: f64, y: f64) -> Option<Square> {
        let (file, rank) = self.map_pointer(x, y);
        Square::from_coords(file, rank)
    }

    /// Full side length of the grid.
    pub fn board_extent(&self) -> f64 {
        self.square_size * 8.0
    }

    /// Top-left pixel of a square.
    pub fn square_origin(&self, sq: Square) -> (f64, f64) {
        (
            self.origin_x + f64::from(sq.file()) * self.square_size,
            self.origin_y + f64::from(sq.rank()) * self.square_size,
        )
    }

    /// Top-left pixel for a piece drawn centered under the pointer.
    pub fn held_piece_origin(&self, pointer: PointerPosition) -> (f64, f64) {
        let half = self.square_size / 2.0;
        (pointer.x - half, pointer.y - half)
    }
}

/// Raw `rank * 8 + file`; no range check, may be negative or above 63.
#[inline]
pub fn index_of(file: i32, rank: i32) -> i32 {
    rank.saturating_mul(8).saturating_add(file)
}

// NaN maps off the grid; huge values clamp instead of wrapping.
fn saturate(v: f64) -> i32 {
    if v.is_nan() { -1 } else { v as i32 }
}
