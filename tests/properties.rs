//! Property-based tests for scoring, dealer play and the shoe.

use std::collections::HashSet;

use proptest::prelude::*;

use bjbot::{
    Card, DECK_SIZE, Game, GameOptions, GameStatus, MemoryStore, Shoe, Suit, evaluate,
    is_natural_blackjack,
};

/// Strategy: any single card.
fn card_strategy() -> impl Strategy<Value = Card> {
    (0..4usize, 1..=13u8).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], rank))
}

/// Strategy: any non-ace card.
fn non_ace_strategy() -> impl Strategy<Value = Card> {
    (0..4usize, 2..=13u8).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], rank))
}

/// Strategy: a hand of up to 21 cards.
fn hand_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 0..=21)
}

proptest! {
    // 1. Scoring ignores card order, aces included
    #[test]
    fn value_ignores_order(shuffled in hand_strategy().prop_flat_map(|hand| {
        (Just(hand.clone()), Just(hand).prop_shuffle())
    })) {
        let (hand, permuted) = shuffled;
        prop_assert_eq!(evaluate(&hand), evaluate(&permuted));
    }

    // 2. A lone ace over ten or less counts as 11
    #[test]
    fn single_ace_is_soft_when_it_fits(
        others in prop::collection::vec(non_ace_strategy(), 0..=4),
        suit in 0..4usize,
    ) {
        let base: u32 = others.iter().map(|card| u32::from(card.base_value())).sum();
        prop_assume!(base <= 10);

        let mut hand = others;
        hand.push(Card::new(Suit::ALL[suit], 1));
        let score = evaluate(&hand);
        prop_assert_eq!(score.soft_aces, 1);
        prop_assert_eq!(u32::from(score.total), base + 11);
    }

    // 3. The best total never exceeds 21 while any ace could still drop to 1
    #[test]
    fn soft_hands_never_bust(hand in hand_strategy()) {
        let score = evaluate(&hand);
        if score.is_soft() {
            prop_assert!(score.total <= 21);
        }
    }

    // 4. Naturals are exactly two cards worth 21
    #[test]
    fn natural_requires_two_cards(hand in hand_strategy()) {
        let natural = is_natural_blackjack(&hand);
        prop_assert_eq!(natural, hand.len() == 2 && evaluate(&hand).total == 21);
        if natural {
            prop_assert!(hand.iter().any(Card::is_ace));
        }
    }

    // 5. The dealer finishes on 17 or more and never stops short
    #[test]
    fn dealer_stops_at_17_or_more(
        dealer in prop::collection::vec(card_strategy(), 2..=2),
        draws in prop::collection::vec(card_strategy(), 21),
        seed in any::<u64>(),
    ) {
        let store = MemoryStore::new();
        let game = Game::new(GameOptions::default(), seed, &store);

        let mut stacked = vec![Card::new(Suit::Hearts, 10), Card::new(Suit::Spades, 9)];
        stacked.extend(dealer);
        stacked.extend(draws);
        stacked.reverse();
        game.shoe.lock().set_cards(stacked);

        let session = game.start(1).unwrap();
        prop_assume!(session.status == GameStatus::Playing);

        let session = game.stand(1).unwrap();
        let cards = session.dealer_hand.cards();
        prop_assert!(evaluate(cards).total >= 17);
        if cards.len() > 2 {
            prop_assert!(evaluate(&cards[..cards.len() - 1]).total < 17);
        }
        prop_assert!(session.is_over());
    }

    // 6. Draws never duplicate a card within one shuffle
    #[test]
    fn shoe_draws_are_unique_per_shuffle(seed in any::<u64>(), draws in 0..200usize) {
        let mut shoe = Shoe::new(1, seed);
        let mut seen = HashSet::new();
        let mut generation = shoe.reshuffles();
        let mut drawn = 0;

        for _ in 0..draws {
            let card = shoe.draw();
            if shoe.reshuffles() != generation {
                generation = shoe.reshuffles();
                prop_assert_eq!(seen.len(), DECK_SIZE);
                seen.clear();
            }
            prop_assert!(seen.insert(card));
            drawn += 1;
        }

        prop_assert_eq!(drawn, draws);
        prop_assert_eq!(generation, draws.saturating_sub(1) / DECK_SIZE);
    }
}
