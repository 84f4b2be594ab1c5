//! GUI module for the Reversi game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
pub mod layout;
mod theme;

pub use app::ReversiApp;
pub use game_state::GameSession;
