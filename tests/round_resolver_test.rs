//! Integration test: round resolution
//!
//! Covers bet validation, payout arithmetic for every match tier, and the
//! determinism guarantees of the resolver's injected RNG.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reels::{classify, draw_reels, resolve, settle, MatchKind, RejectReason, RoundKind, Symbol};

fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

// =============================================================================
// Bet Validation Tests
// =============================================================================

#[test]
fn test_zero_bet_is_rejected_unchanged() {
    let mut rng = seeded_rng();
    for balance in [0, 1, 100, 1_000_000] {
        let result = resolve(0, balance, &mut rng);
        assert_eq!(result.new_balance, balance);
        assert!(result.outcome.is_unknown());
        assert_eq!(result.kind, RoundKind::Rejected(RejectReason::ZeroBet));
    }
}

#[test]
fn test_over_balance_bet_is_rejected_unchanged() {
    let mut rng = seeded_rng();
    for (bet, balance) in [(1, 0), (10, 5), (101, 100), (u64::MAX, 100)] {
        let result = resolve(bet, balance, &mut rng);
        assert_eq!(result.new_balance, balance);
        assert!(result.outcome.is_unknown());
        assert_eq!(
            result.kind,
            RoundKind::Rejected(RejectReason::InsufficientCoins)
        );
    }
}

#[test]
fn test_insufficient_coins_message() {
    // Scenario: balance=5, bet=10 -> balance 5 unchanged, rejection message
    let mut rng = seeded_rng();
    let result = resolve(10, 5, &mut rng);
    assert_eq!(result.new_balance, 5);
    assert!(result.message.contains("enough coins"));
}

#[test]
fn test_zero_bet_checked_before_balance() {
    // bet == 0 with balance == 0: the zero-bet rule wins (first match)
    let mut rng = seeded_rng();
    let result = resolve(0, 0, &mut rng);
    assert_eq!(result.kind, RoundKind::Rejected(RejectReason::ZeroBet));
}

#[test]
fn test_rejection_consumes_no_randomness() {
    let mut rng_a = seeded_rng();
    let mut rng_b = seeded_rng();

    resolve(0, 100, &mut rng_a);
    resolve(500, 100, &mut rng_a);
    resolve(1, 0, &mut rng_a);

    // After any number of rejections both RNGs are still in lockstep
    for _ in 0..10 {
        assert_eq!(draw_reels(&mut rng_a), draw_reels(&mut rng_b));
    }
}

// =============================================================================
// Payout Arithmetic Tests
// =============================================================================

#[test]
fn test_jackpot_scenario() {
    // balance=100, bet=10, three cherries -> 190, message names the 100 won
    let result = settle(10, 100, [Symbol::Cherry, Symbol::Cherry, Symbol::Cherry]);
    assert_eq!(result.new_balance, 190);
    assert_eq!(result.kind, RoundKind::Jackpot { winnings: 100 });
    assert!(result.message.contains("JACKPOT"));
    assert!(result.message.contains("100"));
}

#[test]
fn test_partial_match_scenario() {
    // balance=100, bet=10, two cherries -> 110, message names the 20 won
    let result = settle(10, 100, [Symbol::Cherry, Symbol::Cherry, Symbol::Lemon]);
    assert_eq!(result.new_balance, 110);
    assert_eq!(result.kind, RoundKind::TwoOfAKind { winnings: 20 });
    assert!(result.message.contains("20"));
}

#[test]
fn test_no_match_scenario() {
    // balance=100, bet=10, all distinct -> 90
    let result = settle(10, 100, [Symbol::Cherry, Symbol::Lemon, Symbol::Bell]);
    assert_eq!(result.new_balance, 90);
    assert_eq!(result.kind, RoundKind::NoMatch);
    assert!(result.message.contains("No match"));
}

#[test]
fn test_jackpot_arithmetic_for_every_symbol() {
    for symbol in Symbol::ALL {
        let result = settle(7, 50, [symbol, symbol, symbol]);
        assert_eq!(result.new_balance, 50 - 7 + 7 * 10);
    }
}

#[test]
fn test_pair_arithmetic_for_every_pairing() {
    let pairings = [
        [Symbol::Seven, Symbol::Seven, Symbol::Clover],
        [Symbol::Seven, Symbol::Clover, Symbol::Seven],
        [Symbol::Clover, Symbol::Seven, Symbol::Seven],
    ];
    for reels in pairings {
        let result = settle(7, 50, reels);
        assert_eq!(result.new_balance, 50 - 7 + 7 * 2);
    }
}

#[test]
fn test_loss_is_exactly_the_bet() {
    let result = settle(33, 100, [Symbol::Diamond, Symbol::Seven, Symbol::Clover]);
    assert_eq!(result.new_balance, 67);
    assert_eq!(result.kind.winnings(), 0);
}

#[test]
fn test_classification_tiers() {
    assert_eq!(
        classify(&[Symbol::Bell, Symbol::Bell, Symbol::Bell]),
        MatchKind::Triple
    );
    assert_eq!(
        classify(&[Symbol::Bell, Symbol::Lemon, Symbol::Bell]),
        MatchKind::Pair
    );
    assert_eq!(
        classify(&[Symbol::Bell, Symbol::Lemon, Symbol::Diamond]),
        MatchKind::Miss
    );
}

// =============================================================================
// Resolver Draw Tests
// =============================================================================

#[test]
fn test_resolved_round_balance_matches_tier() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let result = resolve(10, 100, &mut rng);
        let reels = result.outcome.symbols().expect("valid bet always draws");
        let expected = match classify(&reels) {
            MatchKind::Triple => 190,
            MatchKind::Pair => 110,
            MatchKind::Miss => 90,
        };
        assert_eq!(result.new_balance, expected);
    }
}

#[test]
fn test_identical_seeds_give_identical_rounds() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(123);
    let mut rng_b = ChaCha8Rng::seed_from_u64(123);

    for _ in 0..50 {
        let a = resolve(5, 1000, &mut rng_a);
        let b = resolve(5, 1000, &mut rng_b);
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.new_balance, b.new_balance);
        assert_eq!(a.message, b.message);
    }
}

#[test]
fn test_result_reports_bet_and_winnings_consistently() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let result = resolve(10, 100, &mut rng);
        assert_eq!(result.bet, 10);
        assert_eq!(result.new_balance, 100 - result.bet + result.kind.winnings());
    }
}
