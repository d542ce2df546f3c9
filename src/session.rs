//! Persistent session state: coin balance, high-water mark, game-over flag.

use crate::constants::STARTING_BALANCE;
use crate::machine::{self, RoundResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The record that survives across program runs.
///
/// A session is terminal once the player stops or the balance hits zero;
/// terminal sessions accept no further rounds until an explicit reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub balance: u64,
    pub high_water_mark: u64,
    pub game_over: bool,
    pub last_save_time: i64,
}

impl SessionState {
    /// Creates a fresh session with the starting balance.
    pub fn new(current_time: i64) -> Self {
        Self {
            balance: STARTING_BALANCE,
            high_water_mark: STARTING_BALANCE,
            game_over: false,
            last_save_time: current_time,
        }
    }

    /// Play one round with the given bet.
    ///
    /// Returns `None` without touching the state or the RNG when the session
    /// is terminal. Otherwise the resolver's new balance is folded in, the
    /// high-water mark raised if exceeded, and the round result returned for
    /// display. Rejected bets come back as `Some` with the balance unchanged.
    pub fn apply_round<R: Rng>(&mut self, bet: u64, rng: &mut R) -> Option<RoundResult> {
        if self.is_terminal() {
            return None;
        }

        let result = machine::resolve(bet, self.balance, rng);
        self.balance = result.new_balance;
        self.high_water_mark = self.high_water_mark.max(self.balance);
        Some(result)
    }

    /// Explicit stop: the session becomes terminal, balance untouched.
    pub fn stop(&mut self) {
        self.game_over = true;
    }

    /// True once the player stopped or went bust.
    pub fn is_terminal(&self) -> bool {
        self.game_over || self.balance == 0
    }

    /// Discard all progress and return to the initial values.
    pub fn reset(&mut self, current_time: i64) {
        *self = Self::new(current_time);
    }
}
