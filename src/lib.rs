// src/lib.rs
pub mod args;
pub mod error;
pub mod updater;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
