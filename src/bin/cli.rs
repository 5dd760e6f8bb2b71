use chesscanvas::board::START_POSITION;
use chesscanvas::interaction::{DropOutcome, PickOutcome};
use chesscanvas::logger::{DEFAULT_FILTER, init_logging};
use chesscanvas::output::print_session;
use chesscanvas::session::GameSession;
use std::io::{self, BufRead};

const DEFAULT_LOG: &str = "logs/chesscanvas.log";
// Viewport used until the first `resize`.
const DEFAULT_VIEWPORT: (f64, f64) = (800.0, 800.0);

fn main() {
    let (log_path, filter) = parse_args();
    if let Err(e) = init_logging(&log_path, &filter) {
        eprintln!("logging disabled: {}", e);
    }

    let mut session = GameSession::default();
    session.resize(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        match command {
            "fen" => {
                let fen = parts[1..].join(" ");
                if let Err(e) = session.load_position(&fen) {
                    eprintln!("Invalid position: {}", e);
                }
            }
            "startpos" => {
                if let Err(e) = session.load_position(START_POSITION) {
                    eprintln!("Invalid position: {}", e);
                }
            }
            "resize" => match parse_pair(&parts) {
                Some((w, h)) => {
                    session.resize(w, h);
                    let g = session.geometry();
                    println!(
                        "board at ({}, {}), square {}",
                        g.origin_x, g.origin_y, g.square_size
                    );
                }
                None => eprintln!("usage: resize <width> <height>"),
            },
            "down" => match parse_pair(&parts) {
                Some((x, y)) => match session.pointer_down(x, y) {
                    PickOutcome::Picked { from, value } => {
                        println!("picked {} from {}", value.glyph().unwrap_or('?'), from)
                    }
                    PickOutcome::Ignored => println!("nothing picked"),
                },
                None => eprintln!("usage: down <x> <y>"),
            },
            "move" => match parse_pair(&parts) {
                Some((x, y)) => session.pointer_move(x, y),
                None => eprintln!("usage: move <x> <y>"),
            },
            "up" => match parse_pair(&parts) {
                Some((x, y)) => report_drop(session.pointer_up(x, y)),
                None => eprintln!("usage: up <x> <y>"),
            },
            "get" => match parts.get(1).and_then(|s| s.parse::<i32>().ok()) {
                Some(index) => match session.board().get(index) {
                    Ok(v) => println!("{}: {:#04x} {:?}", index, v.bits(), v.occupant()),
                    Err(e) => eprintln!("{}", e),
                },
                None => eprintln!("usage: get <index>"),
            },
            "print" => {
                println!("{}", session.board().to_fen());
            }
            "d" | "display" => print_session(&session),
            "quit" => break,
            _ => eprintln!("Unknown command: {}", command),
        }
    }
}

fn parse_args() -> (String, String) {
    let mut log_path = DEFAULT_LOG.to_string();
    let mut filter = DEFAULT_FILTER.to_string();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--log" => {
                if let Some(v) = args.next() {
                    log_path = v;
                }
            }
            "--filter" => {
                if let Some(v) = args.next() {
                    filter = v;
                }
            }
            other => eprintln!("ignoring argument: {}", other),
        }
    }
    (log_path, filter)
}

fn parse_pair(parts: &[&str]) -> Option<(f64, f64)> {
    let a = parts.get(1)?.parse().ok()?;
    let b = parts.get(2)?.parse().ok()?;
    Some((a, b))
}

fn report_drop(outcome: DropOutcome) {
    match outcome {
        DropOutcome::Idle => println!("nothing held"),
        DropOutcome::Reverted { origin, .. } => println!("returned to {}", origin),
        DropOutcome::Committed {
            from,
            to,
            value,
            captured,
        } => match captured.and_then(|c| c.glyph()) {
            Some(c) => println!(
                "{} {}-{} (replaced {})",
                value.glyph().unwrap_or('?'),
                from,
                to,
                c
            ),
            None => println!("{} {}-{}", value.glyph().unwrap_or('?'), from, to),
        },
    }
}
