//! # Connect Four
//!
//! Connect Four for any number of players, played in the terminal. The game
//! engine is independent of the front end and can be driven directly through
//! [`game::Game`].
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, players, state machine
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
