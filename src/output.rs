/// Line output for board dumps: stdout in the CLI, the browser console
/// under wasm32.
#[cfg(not(target_arch = "wasm32"))]
macro_rules! board_println {
    ($($arg:tt)*) => { println!($($arg)*) }
}

#[cfg(target_arch = "wasm32")]
macro_rules! board_println {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!($($arg)*).into())
    }
}

pub(crate) use board_println;

/// Dump the board and any held piece to stdout / the browser console.
pub fn print_session(session: &crate::session::GameSession) {
    board_println!("{}", session.board());
    board_println!("fen: {}", session.board().to_fen());
    match session.held() {
        Some(held) => board_println!(
            "holding {} from {}",
            held.value.glyph().unwrap_or('?'),
            held.origin
        ),
        None => board_println!("holding nothing"),
    }
}
