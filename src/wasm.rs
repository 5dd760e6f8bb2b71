use wasm_bindgen::prelude::*;

use crate::board::SquareValue;
use crate::config::SessionConfig;
use crate::interaction::{DropOutcome, PickOutcome};
use crate::output::print_session;
use crate::session::GameSession;

#[wasm_bindgen]
pub struct ChessCanvas {
    session: GameSession,
}

#[wasm_bindgen]
impl ChessCanvas {
    /// Create a board. `config` is an optional JS object with
    /// `start_position` and `viewport_fill`; missing fields take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ChessCanvas, JsError> {
        console_error_panic_hook::set_once();

        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let session = GameSession::new(config)?;
        Ok(ChessCanvas { session })
    }

    /// Load a FEN piece placement. Throws on malformed input and keeps the
    /// current position.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), JsError> {
        self.session.load_position(fen)?;
        Ok(())
    }

    /// Current placement as FEN.
    pub fn fen(&self) -> String {
        self.session.board().to_fen()
    }

    /// Call from the window resize handler with the new canvas size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.resize(width, height);
    }

    /// Returns true if a piece was picked up.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        matches!(
            self.session.pointer_down(x, y),
            PickOutcome::Picked { .. }
        )
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.session.pointer_move(x, y);
    }

    /// Returns "idle", "reverted", "moved" or "captured".
    pub fn pointer_up(&mut self, x: f64, y: f64) -> String {
        match self.session.pointer_up(x, y) {
            DropOutcome::Idle => "idle",
            DropOutcome::Reverted { .. } => "reverted",
            DropOutcome::Committed { captured: None, .. } => "moved",
            DropOutcome::Committed { .. } => "captured",
        }
        .to_string()
    }

    /// Raw encoding of one square. Throws for an index outside 0..64.
    pub fn square(&self, index: i32) -> Result<u8, JsError> {
        Ok(self.session.board().get(index)?.bits())
    }

    /// All 64 encodings in index order.
    pub fn squares(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.session.board().as_bytes()[..])
    }

    /// Encoding of the piece being dragged, if any.
    pub fn held_piece(&self) -> Option<u8> {
        self.session.held().map(|h| h.value.bits())
    }

    pub fn pointer_x(&self) -> f64 {
        self.session.pointer().x
    }

    pub fn pointer_y(&self) -> f64 {
        self.session.pointer().y
    }

    pub fn board_x(&self) -> f64 {
        self.session.geometry().origin_x
    }

    pub fn board_y(&self) -> f64 {
        self.session.geometry().origin_y
    }

    pub fn square_size(&self) -> f64 {
        self.session.geometry().square_size
    }

    /// Whole paint state as a JS object; see [`crate::session::Frame`].
    pub fn frame(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.frame())?)
    }

    /// Bits of an occupied square encoding for the sprite lookup:
    /// `[kind, is_white]`, or an empty array for an empty/invalid value.
    pub fn decode(bits: u8) -> Vec<u8> {
        match SquareValue::from_bits(bits).and_then(SquareValue::occupant) {
            Some((color, kind)) => vec![kind as u8, u8::from(color == crate::board::Color::White)],
            None => Vec::new(),
        }
    }

    /// Print the board to the browser console.
    pub fn debug_print(&self) {
        print_session(&self.session);
    }
}
