//! Deterministic snake game engine.
//!
//! The engine modules (`position`, `direction`, `snake`, `food`,
//! `collision`, `game`) are pure value types: every transition returns a
//! new snapshot and randomness is injected. `session` is the contract a
//! driving loop talks to; `input`, `renderer` and `terminal_runtime` are the
//! terminal front-end.

pub mod collision;
pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod position;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
