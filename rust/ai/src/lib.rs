//! # ringgame-ai: Heuristic Opponents for Ring-Game Poker
//!
//! Provides computer-controlled opponents for the ringgame engine. Every
//! opponent implements the engine's
//! [`DecisionProvider`](ringgame_engine::round::DecisionProvider) seam, so
//! the round engine never knows whether a seat is a human or a machine.
//!
//! ## Core Components
//!
//! - [`heuristic`] - The default two-phase opponent: hand-weight formulas
//!   before the flop, combination-chance estimation after it
//! - [`chances`] - Combination probability estimation over unseen cards
//! - [`create_ai`] - Factory function for creating opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use ringgame_ai::create_ai;
//!
//! // Deterministic opponent for reproducible sessions
//! let ai = create_ai("heuristic", 42);
//! ```
//!
//! The opponent only ever returns actions from the legal set it was offered;
//! an illegal move from an AI seat is treated as a programming error by the
//! engine, not a recoverable game event.

use ringgame_engine::round::DecisionProvider;

pub mod chances;
pub mod heuristic;

pub use heuristic::HeuristicAi;

/// Factory function to create opponents by type string.
///
/// `seed` fixes the opponent's internal randomness (bet sizing jitter and
/// bluffing) for reproducible games.
///
/// # Supported types
///
/// - `"heuristic"` - the default combination-chance opponent
///
/// # Panics
///
/// Panics if an unknown opponent type is requested.
pub fn create_ai(ai_type: &str, seed: u64) -> Box<dyn DecisionProvider> {
    match ai_type {
        "heuristic" => Box::new(HeuristicAi::new(seed)),
        _ => panic!("Unknown AI type: {}", ai_type),
    }
}
