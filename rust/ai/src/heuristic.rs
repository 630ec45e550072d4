//! The default computer opponent.
//!
//! Two-phase strategy: before the flop a closed-form weight over the two
//! hole cards (pairness, highness, gap, suitedness) picks an action tier;
//! from the flop on, combination chances for the seat and for an unseen
//! rival are collapsed into weights whose ratio drives the decision, with
//! an occasional bluff when the table looks weak.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ringgame_engine::cards::{Card, Rank};
use ringgame_engine::player::{Action, Move};
use ringgame_engine::round::{DecisionProvider, Stage, TurnView};

use crate::chances::{weigh, ChanceEstimator};

/// Weight ratio below which the opponent considers itself beaten.
const BEATEN_RATIO: f64 = 0.79;
/// Table weight under which a beaten hand may still bluff.
const BLUFFABLE_WEIGHT: f64 = 5.0;

/// A heuristic opponent. One instance drives one seat; its RNG only feeds
/// bet-size jitter and bluffing, so equal seeds replay identically.
pub struct HeuristicAi {
    rng: StdRng,
    estimator: ChanceEstimator,
}

impl HeuristicAi {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            estimator: ChanceEstimator::new(),
        }
    }

    /// Closed-form strength of two hole cards on a 0..=1 scale.
    ///
    /// Pairs weigh in by highness alone; unpaired hands are discounted by
    /// the gap between the cards and rewarded slightly for being suited.
    pub fn preflop_weight(hole: [Card; 2]) -> f64 {
        let high = hole[0].rank.max(hole[1].rank) as u8;
        let highness = f64::from(high) / f64::from(Rank::Ace as u8);
        if hole[0].rank == hole[1].rank {
            return highness;
        }
        let gap = (hole[0].rank as i8 - hole[1].rank as i8).unsigned_abs();
        let gap_quotient = 1.0 - f64::from(gap.min(4)) / 20.0;
        let suit_quotient = if hole[0].suit == hole[1].suit { 1.0 } else { 0.8 };
        0.8 * highness * gap_quotient * suit_quotient
    }

    fn preflop_move(&mut self, hole: [Card; 2], view: &TurnView<'_>) -> Move {
        let weight = Self::preflop_weight(hole);
        let preferences: &[Action] = if weight > 0.7 {
            &[Action::Raise, Action::Call, Action::AllIn]
        } else if weight >= 0.4 {
            &[Action::Raise, Action::Check, Action::Call, Action::Fold]
        } else {
            &[Action::Check, Action::Fold]
        };

        let bet = if weight > 0.8 {
            3 * view.blind
        } else if weight > 0.6 {
            2 * view.blind
        } else {
            view.blind
        };
        let ceiling = view.player.stack() + view.player.wager();
        let amount = bet.max(view.required_bet).min(ceiling);
        pick(preferences, view, amount)
    }

    fn postflop_move(&mut self, hole: [Card; 2], view: &TurnView<'_>) -> Move {
        let own = self.estimator.own_chances(&hole, view.board);
        let rival = self.estimator.rival_chances(&hole, view.board);
        let own_weight = weigh(&own);
        let rival_weight = weigh(&rival).max(f64::MIN_POSITIVE);
        let ratio = own_weight / rival_weight;

        let bluffing = ratio < BEATEN_RATIO
            && rival_weight < BLUFFABLE_WEIGHT
            && self.rng.random_range(0..100) > 60;

        let comfort = if bluffing {
            self.rng.random_range(1..=3) * view.blind
        } else {
            (ratio * ratio).round() as u32 * view.blind
        };

        let preferences: &[Action] = if comfort.saturating_mul(3) < view.required_bet {
            &[Action::Fold]
        } else if ratio > 1.0 || bluffing {
            &[Action::Raise, Action::Call, Action::AllIn]
        } else if ratio < BEATEN_RATIO {
            &[Action::Check, Action::Fold]
        } else {
            &[Action::Check, Action::Call, Action::Fold]
        };

        let jitter = self.rng.random_range(0..=3u32);
        let ceiling = view.player.stack() + view.player.wager();
        let amount = comfort
            .saturating_mul(jitter)
            .max(view.required_bet)
            .min(ceiling);
        pick(preferences, view, amount)
    }
}

/// The first preferred action the table currently allows, with safe
/// fallbacks so the returned move is always drawn from the legal set.
fn pick(preferences: &[Action], view: &TurnView<'_>, raise_amount: u32) -> Move {
    let legal = view.legal;
    let chosen = preferences
        .iter()
        .copied()
        .find(|a| legal.contains(a))
        .or_else(|| {
            [Action::Check, Action::Call, Action::Fold]
                .into_iter()
                .find(|a| legal.contains(a))
        })
        .unwrap_or(Action::AllIn);
    if chosen == Action::Raise {
        Move::new(Action::Raise, raise_amount)
    } else {
        Move::of(chosen)
    }
}

impl DecisionProvider for HeuristicAi {
    fn decide(&mut self, view: &TurnView<'_>) -> Move {
        let hole = view.player.hole_cards();
        let hole = match (hole[0], hole[1]) {
            (Some(a), Some(b)) => [a, b],
            // no cards, no opinion
            _ => return pick(&[Action::Check, Action::Fold], view, 0),
        };
        if view.stage == Stage::PreFlop || view.board.len() < 3 {
            self.preflop_move(hole, view)
        } else {
            self.postflop_move(hole, view)
        }
    }
}
