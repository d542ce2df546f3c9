//! The slot machine: symbols, the reel draw, and payout settlement.

pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::{classify, draw_reels, resolve, settle};
#[allow(unused_imports)]
pub use types::{
    MatchKind, RejectReason, RoundKind, RoundResult, SpinOutcome, Symbol, UNKNOWN_GLYPH,
};
