pub mod board;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
#[cfg(feature = "cli")]
pub mod logger;
pub mod output;
pub mod session;
pub mod square;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
