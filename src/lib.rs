//! Reels - Terminal Slot Machine Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod machine;
pub mod save_manager;
pub mod session;
pub mod stats;
pub mod utils;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use constants::STARTING_BALANCE;
pub use machine::{
    classify, draw_reels, resolve, settle, MatchKind, RejectReason, RoundKind, RoundResult,
    SpinOutcome, Symbol,
};
pub use session::SessionState;
pub use stats::LifetimeStats;
