//! # Connect Four
//!
//! A Connect Four rules engine with a terminal front-end. Two players drop
//! pieces into the columns of a grid; four in a row horizontally, vertically
//! or diagonally wins, and a full grid without a winner is a tie.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, state machine
//! - [`ui`] — Terminal UI: board rendering and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`cli`] — Command-line settings shared by the binaries
//! - [`replay`] — Headless replay of a move list
//! - [`error`] — Structured error types

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod replay;
pub mod ui;
