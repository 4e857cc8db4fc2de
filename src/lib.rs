//! CCG Atlas - position-driven card characteristics
//!
//! Core library for defining cards with characteristic ranges, placing
//! them on an 8x8 atlas, and computing the values each position yields.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
