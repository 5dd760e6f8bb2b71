use crate::board::{Board, SquareValue};
use crate::geometry::BoardGeometry;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Last pointer location in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// A piece lifted off the board, waiting for pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldPiece {
    pub value: SquareValue,
    pub origin: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Holding(HeldPiece),
}

/// Result of a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Empty square, off the grid, or a piece is already held.
    Ignored,
    Picked { from: Square, value: SquareValue },
}

/// Result of a pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was held.
    Idle,
    /// Dropped off the grid or back on the origin; the piece went home.
    Reverted { origin: Square, value: SquareValue },
    /// The piece now sits on `to`. `captured` is whatever it replaced.
    Committed {
        from: Square,
        to: Square,
        value: SquareValue,
        captured: Option<SquareValue>,
    },
}

/// Drag-and-drop over a [`Board`].
///
/// At most one piece is in the air. While it is, its origin square reads
/// as empty on the board.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: DragState,
    pointer: PointerPosition,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn held(&self) -> Option<HeldPiece> {
        match self.state {
            DragState::Holding(held) => Some(held),
            DragState::Idle => None,
        }
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, DragState::Holding(_))
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Lift the piece under the pointer, if any.
    pub fn on_pointer_down(
        &mut self,
        board: &mut Board,
        geometry: &BoardGeometry,
        x: f64,
        y: f64,
    ) -> PickOutcome {
        self.pointer = PointerPosition { x, y };

        if self.is_holding() {
            trace!(x, y, "pointer down while holding; ignored");
            return PickOutcome::Ignored;
        }
        let Some(from) = geometry.square_at(x, y) else {
            trace!(x, y, "pointer down off the board");
            return PickOutcome::Ignored;
        };
        if board.at(from).is_empty() {
            trace!(%from, "pointer down on empty square");
            return PickOutcome::Ignored;
        }

        let value = board.take(from);
        self.state = DragState::Holding(HeldPiece {
            value,
            origin: from,
        });
        debug!(%from, piece = ?value.glyph(), "picked up");
        PickOutcome::Picked { from, value }
    }

    /// Only tracks the pointer; the board is untouched.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition { x, y };
    }

    /// Resolve the held piece: commit to the square under the pointer, or
    /// put it back when that square is off the grid or is the origin.
    pub fn on_pointer_up(
        &mut self,
        board: &mut Board,
        geometry: &BoardGeometry,
        x: f64,
        y: f64,
    ) -> DropOutcome {
        self.pointer = PointerPosition { x, y };

        let DragState::Holding(held) = std::mem::take(&mut self.state) else {
            return DropOutcome::Idle;
        };

        match geometry.square_at(x, y) {
            Some(to) if to != held.origin => {
                let previous = board.at(to);
                board.put(to, held.value);
                let captured = previous.exists().then_some(previous);
                debug!(
                    from = %held.origin,
                    %to,
                    piece = ?held.value.glyph(),
                    captured = ?captured.and_then(SquareValue::glyph),
                    "dropped"
                );
                DropOutcome::Committed {
                    from: held.origin,
                    to,
                    value: held.value,
                    captured,
                }
            }
            _ => {
                board.put(held.origin, held.value);
                debug!(origin = %held.origin, "drop reverted");
                DropOutcome::Reverted {
                    origin: held.origin,
                    value: held.value,
                }
            }
        }
    }

    /// Forget the held piece without touching the board.
    pub fn abandon(&mut self) -> Option<HeldPiece> {
        match std::mem::take(&mut self.state) {
            DragState::Holding(held) => Some(held),
            DragState::Idle => None,
        }
    }
}
