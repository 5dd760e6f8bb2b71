use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::{FormatError, SessionError};
use crate::geometry::BoardGeometry;
use crate::interaction::{Controller, DropOutcome, HeldPiece, PickOutcome, PointerPosition};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Everything a renderer needs for one paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Raw square encodings, index order.
    pub squares: Vec<u8>,
    pub geometry: BoardGeometry,
    pub pointer: PointerPosition,
    pub held: Option<HeldFrame>,
}

/// The floating piece, with the top-left pixel to draw it at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeldFrame {
    pub value: u8,
    pub origin: u8,
    pub x: f64,
    pub y: f64,
}

/// One board on one canvas.
///
/// Input handlers call the `pointer_*` methods; the renderer only reads.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    controller: Controller,
    geometry: BoardGeometry,
    config: SessionConfig,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let board = config.start_position.parse::<Board>()?;
        debug!(fen = %config.start_position, "session created");
        Ok(GameSession {
            board,
            controller: Controller::new(),
            geometry: BoardGeometry::new(0.0, 0.0, 0.0),
            config,
        })
    }

    /// Replace the position. A piece in the air is discarded along with the
    /// old board. On error nothing changes.
    #[instrument(skip(self))]
    pub fn load_position(&mut self, fen: &str) -> Result<(), FormatError> {
        if let Err(e) = self.board.load_position(fen) {
            warn!(error = %e, "rejected position");
            return Err(e);
        }
        if let Some(held) = self.controller.abandon() {
            debug!(origin = %held.origin, "held piece dropped by position load");
        }
        Ok(())
    }

    /// Refit the grid to a new viewport.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.geometry = BoardGeometry::fit_viewport(width, height, self.config.viewport_fill);
        debug!(width, height, geometry = ?self.geometry, "resized");
    }

    /// Use geometry computed elsewhere instead of [`Self::resize`].
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = geometry;
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> PickOutcome {
        let geometry = self.geometry;
        self.controller.on_pointer_down(&mut self.board, &geometry, x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.controller.on_pointer_move(x, y);
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> DropOutcome {
        let geometry = self.geometry;
        self.controller.on_pointer_up(&mut self.board, &geometry, x, y)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn held(&self) -> Option<HeldPiece> {
        self.controller.held()
    }

    pub fn pointer(&self) -> PointerPosition {
        self.controller.pointer()
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn frame(&self) -> Frame {
        let pointer = self.pointer();
        let held = self.held().map(|h| {
            let (x, y) = self.geometry.held_piece_origin(pointer);
            HeldFrame {
                value: h.value.bits(),
                origin: h.origin.index(),
                x,
                y,
            }
        });
        Frame {
            squares: self.board.as_bytes().to_vec(),
            geometry: self.geometry,
            pointer,
            held,
        }
    }
}

impl Default for GameSession {
    /// Standard start position, default fill, zero-sized geometry.
    fn default() -> Self {
        GameSession {
            board: Board::starting(),
            controller: Controller::new(),
            geometry: BoardGeometry::new(0.0, 0.0, 0.0),
            config: SessionConfig::default(),
        }
    }
}
