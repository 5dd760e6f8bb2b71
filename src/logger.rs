// src/logger.rs
use std::{io, path::Path, sync::OnceLock};
use tracing_subscriber::{EnvFilter, fmt};

static GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

/// Default directives when neither `RUST_LOG` nor a filter is given.
pub const DEFAULT_FILTER: &str = "chesscanvas=debug";

/// Initialize logging once for the whole process.
/// - `path`: e.g., "logs/chesscanvas.log"
/// - `filter`: e.g., "chesscanvas::interaction=trace"
///
/// Later calls are no-ops and return `Ok`.
pub fn init_logging<P: AsRef<Path>>(path: P, filter: &str) -> io::Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }
    let path = path.as_ref();

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    // Dropping the guard would stop the writer thread and lose queued session events.
    let _ = GUARD.set(guard);

    // RUST_LOG wins over the argument.
    let env_filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking)
        .finish();

    // An embedding host may have installed its own subscriber; theirs stays.
    let _ = tracing::subscriber::set_global_default(subscriber);
    let _ = INIT.set(());
    Ok(())
}
