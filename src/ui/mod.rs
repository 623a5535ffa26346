//! GUI module for the Connect-N game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::ConnectApp;
