use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{Account, Player};
use crate::round::{DecisionProvider, Round, RoundListener};

/// How many rounds pass between blind doublings.
pub const ROUNDS_PER_BLIND_LEVEL: u32 = 5;

/// A game of many rounds: seats players with their decision providers,
/// escalates the blinds, rotates the dealer and starts each [`Round`].
///
/// Bankrupt seats are kicked between rounds (or topped up for AI seats when
/// the game is continuous). Once fewer than two seats remain the game is
/// over and [`play_round`](Self::play_round) fails with
/// [`GameError::NotEnoughPlayers`].
pub struct Game<'p> {
    initial_blind: u32,
    buy_in: u32,
    continuous: bool,
    blind: u32,
    players: Vec<Player>,
    providers: Vec<Box<dyn DecisionProvider + 'p>>,
    dealer: usize,
    rounds_started: u32,
    rng: ChaCha20Rng,
}

impl<'p> Game<'p> {
    /// Creates an empty game. `seed` fixes the deck shuffles for
    /// reproducible sessions; pass `None` for a random seed.
    pub fn new(blind: u32, buy_in: u32, continuous: bool, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            initial_blind: blind,
            buy_in,
            continuous,
            blind: 0,
            players: Vec::new(),
            providers: Vec::new(),
            dealer: 0,
            rounds_started: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The blind size of the current round (zero before the first round).
    pub fn blind(&self) -> u32 {
        self.blind
    }

    pub fn buy_in(&self) -> u32 {
        self.buy_in
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Seats a player together with the provider that will answer its
    /// turns. Seat names are unique within a game.
    pub fn add_player(
        &mut self,
        player: Player,
        provider: Box<dyn DecisionProvider + 'p>,
    ) -> Result<(), GameError> {
        if self.players.iter().any(|p| p.name() == player.name()) {
            return Err(GameError::AlreadyInGame(player.name().to_string()));
        }
        self.players.push(player);
        self.providers.push(provider);
        Ok(())
    }

    /// Seats a human player funded from an account, paying the game's
    /// buy-in out of the account's chips.
    pub fn add_account_player(
        &mut self,
        account: &mut Account,
        provider: Box<dyn DecisionProvider + 'p>,
    ) -> Result<(), GameError> {
        if self.players.iter().any(|p| p.name() == account.name()) {
            return Err(GameError::AlreadyInGame(account.name().to_string()));
        }
        let player = account.join(self.buy_in)?;
        self.players.push(player);
        self.providers.push(provider);
        Ok(())
    }

    /// Removes a seat by name, returning the player so a caller can settle
    /// its stack back into an account.
    pub fn remove_player(&mut self, name: &str) -> Result<Player, GameError> {
        match self.players.iter().position(|p| p.name() == name) {
            Some(index) => {
                self.providers.remove(index);
                if index < self.dealer {
                    self.dealer -= 1;
                }
                Ok(self.players.remove(index))
            }
            None => Err(GameError::GameNotFound(name.to_string())),
        }
    }

    /// Plays one complete round: kicks or refills bankrupt seats, raises
    /// the blinds on schedule, deals from a freshly shuffled deck and
    /// advances the dealer afterwards.
    pub fn play_round(&mut self, listener: &mut dyn RoundListener) -> Result<(), GameError> {
        self.kick_bankrupt();
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        if self.rounds_started == 0 {
            // the seat added first acts first in round one
            self.dealer = self.players.len() - 1;
        } else {
            self.dealer %= self.players.len();
        }
        self.raise_blind();

        let mut deck = Deck::new_with_seed(self.rng.next_u64());
        deck.shuffle();

        let mut round = Round::new(&mut self.players, self.dealer, self.blind, deck);
        round.run(&mut self.providers, listener)?;

        self.dealer = (self.dealer + 1) % self.players.len();
        self.rounds_started += 1;
        Ok(())
    }

    /// Doubles the blind once per configured number of rounds.
    fn raise_blind(&mut self) {
        let doublings = self.rounds_started / ROUNDS_PER_BLIND_LEVEL;
        self.blind = self
            .initial_blind
            .saturating_mul(2u32.saturating_pow(doublings));
    }

    /// Drops seats that lost their whole stack; in a continuous game AI
    /// seats rebuy instead.
    fn kick_bankrupt(&mut self) {
        let mut index = 0;
        while index < self.players.len() {
            if self.players[index].stack() > 0 {
                index += 1;
                continue;
            }
            if self.continuous && self.players[index].is_ai() {
                let buy_in = self.buy_in;
                self.players[index].add_chips(buy_in);
                index += 1;
            } else {
                self.players.remove(index);
                self.providers.remove(index);
                if index < self.dealer {
                    self.dealer -= 1;
                }
            }
        }
    }
}
