use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A shuffled 52-card deck. Cards are removed as they are drawn or burned
/// and the deck is never replenished within a round.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.position >= self.cards.len() {
            Err(GameError::DeckExhausted)
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Ok(c)
        }
    }

    /// Removes the top card without revealing it, mirroring the standard
    /// dealing procedure before each board stage.
    pub fn burn(&mut self) {
        let _ = self.draw();
    }

    pub fn cards_left(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
