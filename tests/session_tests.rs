//! tests/session_tests.rs
//! GameSession as the page drives it: config, resize, pointer events, frames.
use chesscanvas::board::{Color, PieceKind, SquareValue, START_POSITION};
use chesscanvas::config::SessionConfig;
use chesscanvas::error::{FormatError, SessionError};
use chesscanvas::interaction::{DropOutcome, PickOutcome, PointerPosition};
use chesscanvas::session::GameSession;

// 800x600 viewport at 0.9 fill: 68px squares (67.5 rounded), grid at (130, 30).
fn session() -> GameSession {
    let mut s = GameSession::new(SessionConfig::default()).expect("default config");
    s.resize(800.0, 600.0);
    s
}

/// Pixel at the middle of (file, rank) in the current geometry.
fn center(s: &GameSession, file: u8, rank: u8) -> (f64, f64) {
    let g = s.geometry();
    (
        g.origin_x + (f64::from(file) + 0.5) * g.square_size,
        g.origin_y + (f64::from(rank) + 0.5) * g.square_size,
    )
}

#[test]
fn resize_centers_the_grid() {
    let s = session();
    let g = s.geometry();
    assert_eq!(g.square_size, 68.0);
    assert_eq!(g.origin_x, 130.0);
    assert_eq!(g.origin_y, 30.0);
}

#[test]
fn new_session_loads_configured_position() {
    let s = GameSession::new(SessionConfig::with_position("4k3/8/8/8/8/8/8/4K3")).unwrap();
    assert_eq!(s.board().occupied_count(), 2);
    assert!(s.held().is_none());
}

#[test]
fn bad_config_is_rejected() {
    let err = GameSession::new(SessionConfig::with_position("8/8/8")).unwrap_err();
    assert_eq!(err, SessionError::Format(FormatError::TooFewRanks { found: 3 }));

    let cfg = SessionConfig {
        viewport_fill: 0.0,
        ..SessionConfig::default()
    };
    assert!(matches!(
        GameSession::new(cfg),
        Err(SessionError::ViewportFill(_))
    ));
}

#[test]
fn full_drag_through_session() {
    let mut s = session();
    let (x, y) = center(&s, 4, 6); // e2
    assert!(matches!(s.pointer_down(x, y), PickOutcome::Picked { .. }));

    s.pointer_move(x + 10.0, y - 70.0);
    assert_eq!(s.pointer(), PointerPosition { x: x + 10.0, y: y - 70.0 });

    let (x, y) = center(&s, 4, 4); // e4
    assert!(matches!(s.pointer_up(x, y), DropOutcome::Committed { .. }));
    assert_eq!(
        s.board().to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
    );
}

#[test]
fn frame_reports_floating_piece() {
    let mut s = session();
    let (x, y) = center(&s, 3, 0); // d8
    s.pointer_down(x, y);
    s.pointer_move(400.0, 300.0);

    let frame = s.frame();
    assert_eq!(frame.squares.len(), 64);
    assert_eq!(frame.squares[3], 0, "origin is empty while held");
    let held = frame.held.expect("piece in flight");
    assert_eq!(
        held.value,
        SquareValue::piece(Color::Black, PieceKind::Queen).bits()
    );
    assert_eq!(held.origin, 3);
    assert_eq!((held.x, held.y), (366.0, 266.0));
    assert_eq!(frame.pointer, PointerPosition { x: 400.0, y: 300.0 });
}

#[test]
fn frame_without_drag_has_no_held_piece() {
    let s = session();
    let frame = s.frame();
    assert!(frame.held.is_none());
    assert_eq!(frame.squares[0], s.board().get(0).unwrap().bits());
}

#[test]
fn failed_load_keeps_board_and_drag() {
    let mut s = session();
    let (x, y) = center(&s, 0, 7); // a1
    s.pointer_down(x, y);
    let before = s.board().clone();

    assert!(s.load_position("rnbqkbnx/8/8/8/8/8/8/8").is_err());
    assert_eq!(s.board(), &before);
    assert!(s.held().is_some(), "rejected load must not cancel the drag");
}

#[test]
fn load_discards_piece_in_flight() {
    let mut s = session();
    let (x, y) = center(&s, 0, 7); // a1
    s.pointer_down(x, y);
    s.load_position(START_POSITION).unwrap();
    assert!(s.held().is_none());

    let (x, y) = center(&s, 4, 4);
    assert_eq!(s.pointer_up(x, y), DropOutcome::Idle);
    assert_eq!(s.board().to_fen(), START_POSITION);
}

#[test]
fn pointer_events_before_resize_hit_nothing() {
    let mut s = GameSession::default();
    assert_eq!(s.pointer_down(10.0, 10.0), PickOutcome::Ignored);
    assert_eq!(s.board().to_fen(), START_POSITION);
}

#[test]
fn explicit_geometry_replaces_fitted_one() {
    use chesscanvas::geometry::BoardGeometry;

    let mut s = session();
    s.set_geometry(BoardGeometry::new(0.0, 0.0, 10.0));
    // g8 knight at (6, 0) under 10px squares.
    assert!(matches!(s.pointer_down(65.0, 5.0), PickOutcome::Picked { .. }));
    assert!(matches!(
        s.pointer_up(55.0, 25.0),
        DropOutcome::Committed { captured: None, .. }
    ));
    assert_eq!(
        s.board().to_fen(),
        "rnbqkb1r/pppppppp/5n2/8/8/8/PPPPPPPP/RNBQKBNR"
    );
    assert_eq!(s.config().viewport_fill, 0.9);
}
