//! # Deal Command
//!
//! Deals one complete hand face up: hole cards for every seat, the full
//! board with burns, and each seat's evaluated strength. Useful for
//! inspecting the dealing procedure and the evaluator without playing.

use std::io::Write;

use ringgame_engine::cards::Card;
use ringgame_engine::deck::Deck;
use ringgame_engine::hand::{evaluate_hand, HandStrength};

use crate::error::CliError;
use crate::formatters::{format_cards, format_category};
use crate::ui;

pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=10).contains(&players) {
        ui::write_error(err, "players must be between 2 and 10")?;
        return Err(CliError::InvalidInput(
            "players must be between 2 and 10".to_string(),
        ));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    writeln!(out, "deal: players={} seed={}", players, seed)?;

    // two cards each, one at a time around the table, twice
    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(2); players];
    for _ in 0..2 {
        for hand in hands.iter_mut() {
            hand.push(deck.draw()?);
        }
    }

    let mut board: Vec<Card> = Vec::with_capacity(5);
    for reveal in [3usize, 1, 1] {
        deck.burn();
        for _ in 0..reveal {
            board.push(deck.draw()?);
        }
    }
    writeln!(out, "Board: {}", format_cards(&board))?;

    let mut results: Vec<(usize, HandStrength)> = hands
        .iter()
        .enumerate()
        .map(|(seat, hand)| {
            let mut cards = hand.clone();
            cards.extend_from_slice(&board);
            (seat, evaluate_hand(&cards))
        })
        .collect();
    results.sort_by(|a, b| b.1.cmp(&a.1));

    for (seat, strength) in &results {
        writeln!(
            out,
            "Seat {}: {} -> {}",
            seat + 1,
            format_cards(&hands[*seat]),
            format_category(strength.category)
        )?;
    }
    writeln!(out, "Cards left in the deck: {}", deck.cards_left())?;
    Ok(())
}
