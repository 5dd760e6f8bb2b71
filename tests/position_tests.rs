//! tests/position_tests.rs
//! FEN placement loading through the public Board API.
use std::str::FromStr;

use chesscanvas::board::{Board, Color, PieceKind, START_POSITION, SquareValue};
use chesscanvas::error::{FormatError, RangeError};

const KIWI: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

/// Expand a placement into one char per square, '.' for empty.
fn expand(fen: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(64);
    for row in fen.split('/') {
        for c in row.chars() {
            match c.to_digit(10) {
                Some(n) => out.extend(std::iter::repeat_n('.', n as usize)),
                None => out.push(c),
            }
        }
    }
    out
}

#[test]
fn every_square_matches_placement() {
    for fen in [START_POSITION, KIWI, "8/8/8/8/8/8/8/8", "K6k/8/8/8/8/8/8/q6Q"] {
        let board = Board::from_str(fen).unwrap();
        let expected = expand(fen);
        for (index, want) in expected.iter().enumerate() {
            let got = board.get(index as i32).unwrap().glyph().unwrap_or('.');
            assert_eq!(got, *want, "{}: index {}", fen, index);
        }
    }
}

#[test]
fn start_position_has_sixteen_per_side() {
    let board = Board::from_str(START_POSITION).unwrap();
    let white = board.iter().filter(|(_, v)| v.color() == Some(Color::White)).count();
    let black = board.iter().filter(|(_, v)| v.color() == Some(Color::Black)).count();
    assert_eq!((white, black), (16, 16));

    let expected = [
        (PieceKind::Pawn, 8),
        (PieceKind::Rook, 2),
        (PieceKind::Knight, 2),
        (PieceKind::Bishop, 2),
        (PieceKind::Queen, 1),
        (PieceKind::King, 1),
    ];
    for color in [Color::White, Color::Black] {
        for (kind, n) in expected {
            assert_eq!(board.count(color, kind), n, "{:?} {:?}", color, kind);
        }
    }
}

#[test]
fn case_picks_color() {
    let board = Board::from_str("Pp6/8/8/8/8/8/8/8").unwrap();
    assert_eq!(board.get(0), Ok(SquareValue::piece(Color::White, PieceKind::Pawn)));
    assert_eq!(board.get(1), Ok(SquareValue::piece(Color::Black, PieceKind::Pawn)));
}

#[test]
fn rejected_inputs_leave_board_untouched() {
    let mut board = Board::from_str(KIWI).unwrap();
    let cases = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP",
        "rnbqkbnx/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/8",
        "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "8/8/8/8/8/8/8/7-",
    ];
    for fen in cases {
        assert!(board.load_position(fen).is_err(), "{} should be rejected", fen);
        assert_eq!(board.to_fen(), KIWI, "{} modified the board", fen);
    }
}

#[test]
fn errors_describe_the_problem() {
    let err = Board::from_str("rnbqkbnx/8/8/8/8/8/8/8").unwrap_err();
    assert_eq!(err.to_string(), "rank 0: unknown piece glyph 'x'");
    let err = Board::from_str("8/8").unwrap_err();
    assert_eq!(err.to_string(), "expected 8 ranks, found 2");
    assert!(matches!(
        Board::from_str("8/8/8/8/8/8/8/8/8"),
        Err(FormatError::TooManyRanks { found: 9 })
    ));
}

#[test]
fn index_bounds() {
    let board = Board::starting();
    assert!(board.get(0).is_ok());
    assert!(board.get(63).is_ok());
    assert_eq!(board.get(64), Err(RangeError { index: 64 }));
    assert_eq!(board.get(-1), Err(RangeError { index: -1 }));
    assert_eq!(
        board.get(i32::MIN).unwrap_err().to_string(),
        format!("square index {} is outside 0..64", i32::MIN)
    );
}
