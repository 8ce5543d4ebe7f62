//! Grid-based snake for the terminal.
//!
//! The `game` module owns the tick-driven state machine; `board`, `snake`,
//! and `food` are its pure building blocks and `score` persists the high
//! score across runs. Presentation (`renderer`, `ui`) and input mapping
//! read the state through immutable snapshots only.

pub mod board;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
