//! Round resolution: bet validation, the reel draw, and payout settlement.
//!
//! `resolve` is the only entry point the session layer uses. The draw is the
//! sole source of non-determinism and comes from the injected RNG, so every
//! payout branch can be exercised with fixed reels via `settle`.

use super::{MatchKind, RejectReason, RoundKind, RoundResult, SpinOutcome, Symbol};
use rand::Rng;

/// Run one round of the machine against `balance`.
///
/// Invalid bets are refused as ordinary results (unchanged balance, sentinel
/// outcome, explanatory message) without touching the RNG. Valid bets are
/// debited up front, then the draw decides what gets credited back.
pub fn resolve<R: Rng>(bet: u64, balance: u64, rng: &mut R) -> RoundResult {
    if bet == 0 {
        return RoundResult {
            bet,
            new_balance: balance,
            outcome: SpinOutcome::unknown(),
            message: "Bet must be greater than 0.".to_string(),
            kind: RoundKind::Rejected(RejectReason::ZeroBet),
        };
    }
    if bet > balance {
        return RoundResult {
            bet,
            new_balance: balance,
            outcome: SpinOutcome::unknown(),
            message: "You don't have enough coins.".to_string(),
            kind: RoundKind::Rejected(RejectReason::InsufficientCoins),
        };
    }

    let reels = draw_reels(rng);
    settle(bet, balance, reels)
}

/// Draw three symbols independently and uniformly, with replacement.
pub fn draw_reels<R: Rng>(rng: &mut R) -> [Symbol; 3] {
    let mut draw = || Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())];
    [draw(), draw(), draw()]
}

/// Classify a drawn spin by symbol matches.
pub fn classify(reels: &[Symbol; 3]) -> MatchKind {
    let [a, b, c] = reels;
    if a == b && b == c {
        MatchKind::Triple
    } else if a == b || a == c || b == c {
        MatchKind::Pair
    } else {
        MatchKind::Miss
    }
}

/// Settle an already-validated, already-drawn round.
///
/// The bet is debited unconditionally, then winnings (bet times the match
/// multiplier) are credited on top. Callers must ensure `bet <= balance`.
pub fn settle(bet: u64, balance: u64, reels: [Symbol; 3]) -> RoundResult {
    let after_bet = balance - bet;
    let match_kind = classify(&reels);
    let winnings = bet * match_kind.multiplier();

    let (message, kind) = match match_kind {
        MatchKind::Triple => (
            format!(
                "\u{1F389} JACKPOT! You won {} coins! \u{1F389}",
                winnings
            ),
            RoundKind::Jackpot { winnings },
        ),
        MatchKind::Pair => (
            format!(
                "\u{2728} Two symbols match! You won {} coins! \u{2728}",
                winnings
            ),
            RoundKind::TwoOfAKind { winnings },
        ),
        MatchKind::Miss => (
            "\u{1F641} No match. Better luck next time!".to_string(),
            RoundKind::NoMatch,
        ),
    };

    RoundResult {
        bet,
        new_balance: after_bet + winnings,
        outcome: SpinOutcome::drawn(reels),
        message,
        kind,
    }
}
