#![cfg_attr(not(feature = "std"), no_std)]
//! Connect-N: gravity-drop board game engine with variable board size,
//! win-length and an optional random obstacle.
//!
//! The engine (`board`, `rules`, `variant`, `game`) only needs `alloc`.
//! The `std` feature adds the score file, the logger and the text front end.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
mod rules;
#[cfg(feature = "std")]
mod score;
mod variant;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
pub use rules::*;
#[cfg(feature = "std")]
pub use score::*;
pub use variant::*;
