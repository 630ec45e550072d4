use thiserror::Error;

use crate::player::Action;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Decision {action:?} is not available")]
    UnavailableDecision { action: Action },
    #[error("Bet of {offered} is below the required bet of {required}")]
    TooSmallBet { offered: u32, required: u32 },
    #[error("Bet amount must not be negative")]
    NegativeBet,
    #[error("The hand is full")]
    TooManyCards,
    #[error("The deck is exhausted")]
    DeckExhausted,
    #[error("At least 2 players are required to continue the game")]
    NotEnoughPlayers,
    #[error("Not enough chips to buy in")]
    NotEnoughMoney,
    #[error("Player {0} is already in the game")]
    AlreadyInGame(String),
    #[error("Player {0} is not in the game")]
    GameNotFound(String),
}
