//! Terminal front-end: card collection and atlas board.

pub mod app;
pub mod theme;
pub mod views;

pub use app::{run, AppState, Focus};
