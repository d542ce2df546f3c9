//! Lifetime play statistics, persisted separately from the session so they
//! survive resets.

use crate::machine::RoundKind;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::io;

const STATS_FILE: &str = "stats.json";

/// Counters across every session ever played on this machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub rounds_played: u64,
    pub coins_wagered: u64,
    pub jackpots: u64,
    pub partial_matches: u64,
    pub losses: u64,
    pub biggest_win: u64,
    pub busts: u64,
}

impl LifetimeStats {
    /// Fold one settled round into the counters. Rejected bets don't count
    /// as played rounds.
    pub fn record_round(&mut self, bet: u64, kind: &RoundKind) {
        match kind {
            RoundKind::Jackpot { winnings } => {
                self.rounds_played += 1;
                self.coins_wagered += bet;
                self.jackpots += 1;
                self.biggest_win = self.biggest_win.max(*winnings);
            }
            RoundKind::TwoOfAKind { winnings } => {
                self.rounds_played += 1;
                self.coins_wagered += bet;
                self.partial_matches += 1;
                self.biggest_win = self.biggest_win.max(*winnings);
            }
            RoundKind::NoMatch => {
                self.rounds_played += 1;
                self.coins_wagered += bet;
                self.losses += 1;
            }
            RoundKind::Rejected(_) => {}
        }
    }

    /// Record a session ending with an empty balance.
    pub fn record_bust(&mut self) {
        self.busts += 1;
    }

    /// Load from ~/.reels/stats.json, or start from zero.
    pub fn load() -> Self {
        persistence::load_json_or_default(STATS_FILE)
    }

    /// Save to ~/.reels/stats.json.
    pub fn save(&self) -> io::Result<()> {
        persistence::save_json(STATS_FILE, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::RejectReason;

    #[test]
    fn test_default_is_zeroed() {
        let stats = LifetimeStats::default();
        assert_eq!(stats.rounds_played, 0);
        assert_eq!(stats.coins_wagered, 0);
        assert_eq!(stats.jackpots, 0);
        assert_eq!(stats.biggest_win, 0);
        assert_eq!(stats.busts, 0);
    }

    #[test]
    fn test_record_jackpot() {
        let mut stats = LifetimeStats::default();
        stats.record_round(10, &RoundKind::Jackpot { winnings: 100 });

        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.coins_wagered, 10);
        assert_eq!(stats.jackpots, 1);
        assert_eq!(stats.biggest_win, 100);
    }

    #[test]
    fn test_record_partial_match() {
        let mut stats = LifetimeStats::default();
        stats.record_round(10, &RoundKind::TwoOfAKind { winnings: 20 });

        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.partial_matches, 1);
        assert_eq!(stats.biggest_win, 20);
    }

    #[test]
    fn test_record_loss() {
        let mut stats = LifetimeStats::default();
        stats.record_round(10, &RoundKind::NoMatch);

        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.biggest_win, 0);
    }

    #[test]
    fn test_rejected_rounds_not_counted() {
        let mut stats = LifetimeStats::default();
        stats.record_round(10, &RoundKind::Rejected(RejectReason::ZeroBet));
        stats.record_round(10, &RoundKind::Rejected(RejectReason::InsufficientCoins));

        assert_eq!(stats.rounds_played, 0);
        assert_eq!(stats.coins_wagered, 0);
    }

    #[test]
    fn test_biggest_win_keeps_maximum() {
        let mut stats = LifetimeStats::default();
        stats.record_round(10, &RoundKind::TwoOfAKind { winnings: 20 });
        stats.record_round(10, &RoundKind::Jackpot { winnings: 100 });
        stats.record_round(5, &RoundKind::TwoOfAKind { winnings: 10 });

        assert_eq!(stats.biggest_win, 100);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut stats = LifetimeStats::default();
        stats.record_round(25, &RoundKind::Jackpot { winnings: 250 });
        stats.record_bust();

        let json = serde_json::to_string_pretty(&stats).unwrap();
        let loaded: LifetimeStats = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.rounds_played, 1);
        assert_eq!(loaded.jackpots, 1);
        assert_eq!(loaded.biggest_win, 250);
        assert_eq!(loaded.busts, 1);
    }
}
