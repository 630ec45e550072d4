use std::collections::HashSet;

use ringgame_engine::cards::Card;
use ringgame_engine::deck::Deck;
use ringgame_engine::errors::GameError;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle();
    assert_eq!(deck.cards_left(), 52);
    let mut seen: HashSet<Card> = HashSet::new();
    while deck.cards_left() > 0 {
        assert!(seen.insert(deck.draw().unwrap()));
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new_with_seed(42);
    let mut b = Deck::new_with_seed(42);
    a.shuffle();
    b.shuffle();
    for _ in 0..52 {
        assert_eq!(a.draw().unwrap(), b.draw().unwrap());
    }
}

#[test]
fn different_seeds_differ() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    a.shuffle();
    b.shuffle();
    let first_a: Vec<Card> = (0..5).map(|_| a.draw().unwrap()).collect();
    let first_b: Vec<Card> = (0..5).map(|_| b.draw().unwrap()).collect();
    assert_ne!(first_a, first_b);
}

#[test]
fn draw_and_burn_shrink_the_deck() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    deck.draw().unwrap();
    assert_eq!(deck.cards_left(), 51);
    deck.burn();
    assert_eq!(deck.cards_left(), 50);
}

#[test]
fn exhausted_deck_refuses_to_deal() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    for _ in 0..52 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
}

#[test]
fn reshuffling_restores_the_full_deck() {
    let mut deck = Deck::new_with_seed(11);
    deck.shuffle();
    for _ in 0..20 {
        deck.draw().unwrap();
    }
    deck.shuffle();
    assert_eq!(deck.cards_left(), 52);
}
