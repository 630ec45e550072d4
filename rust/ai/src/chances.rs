//! Combination probability estimation.
//!
//! Answers "how likely is each combination to be the best hand here" by
//! enumerating the unseen cards that could still complete a hand: the
//! remaining board cards for the seat's own outlook, or a rival's two hole
//! cards for the table outlook. Results are cached per known-card set since
//! the same situation is scored repeatedly within a betting round.
//!
//! Only post-flop streets are estimated this way (at most two unseen cards
//! per question); pre-flop play uses the closed-form hand weigher instead.

use std::collections::HashMap;

use ringgame_engine::cards::{full_deck, Card};
use ringgame_engine::hand::evaluate_hand;

/// Geometric base for turning a chance distribution into a single weight:
/// each combination counts `WEIGHT_QUOTIENT ^ priority`.
pub const WEIGHT_QUOTIENT: f64 = 2.0;

const CACHE_LIMIT: usize = 128;

/// Per-category probabilities indexed by combination priority (0 = high
/// card, 9 = royal flush).
pub type Chances = [f64; 10];

/// Collapses a chance distribution into one comparable weight.
pub fn weigh(chances: &Chances) -> f64 {
    chances
        .iter()
        .enumerate()
        .map(|(priority, chance)| chance * WEIGHT_QUOTIENT.powi(priority as i32))
        .sum()
}

#[derive(Debug, Clone, Hash, Eq, PartialEq)]
enum Outlook {
    /// Complete the board for the seat holding these cards.
    Own,
    /// Deal two hidden hole cards to an unseen rival.
    Rival,
}

/// Estimates combination chances by brute enumeration of unseen cards,
/// memoized over the known-card set.
#[derive(Debug, Default)]
pub struct ChanceEstimator {
    cache: HashMap<(Vec<Card>, Outlook), Chances>,
}

impl ChanceEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chances of each combination for a seat holding `hand` against the
    /// visible `board`, over every way the board can still be completed.
    /// With a full board the best hand is certain.
    pub fn own_chances(&mut self, hand: &[Card], board: &[Card]) -> Chances {
        let known = sorted(hand, board);
        if let Some(&hit) = self.cache.get(&(known.clone(), Outlook::Own)) {
            return hit;
        }
        let missing = 5usize.saturating_sub(board.len());
        let chances = if missing == 0 {
            let mut certain = [0.0; 10];
            certain[evaluate_hand(&known).category as usize] = 1.0;
            certain
        } else {
            enumerate(&known, &known, missing)
        };
        self.insert((known, Outlook::Own), chances);
        chances
    }

    /// Chances of each combination for an unseen rival: its two hole cards
    /// range over everything not visible to this seat, on the board as it
    /// stands now.
    pub fn rival_chances(&mut self, hand: &[Card], board: &[Card]) -> Chances {
        let hidden = sorted(hand, board);
        if let Some(&hit) = self.cache.get(&(hidden.clone(), Outlook::Rival)) {
            return hit;
        }
        let chances = enumerate(board, &hidden, 2);
        self.insert((hidden, Outlook::Rival), chances);
        chances
    }

    fn insert(&mut self, key: (Vec<Card>, Outlook), chances: Chances) {
        if self.cache.len() >= CACHE_LIMIT {
            self.cache.clear();
        }
        self.cache.insert(key, chances);
    }
}

fn sorted(hand: &[Card], board: &[Card]) -> Vec<Card> {
    let mut cards: Vec<Card> = hand.iter().chain(board).copied().collect();
    cards.sort_unstable();
    cards
}

/// Enumerates every way to extend `base` with `missing` cards drawn from
/// outside `excluded`, tallying the best hand of each completion.
fn enumerate(base: &[Card], excluded: &[Card], missing: usize) -> Chances {
    debug_assert!((1..=2).contains(&missing));
    let unseen: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !excluded.contains(c))
        .collect();
    let mut counts = [0u32; 10];
    let mut total = 0u32;

    let mut completion: Vec<Card> = base.to_vec();
    if missing == 1 {
        for &a in &unseen {
            completion.push(a);
            counts[evaluate_hand(&completion).category as usize] += 1;
            completion.pop();
            total += 1;
        }
    } else {
        for i in 0..unseen.len() {
            for j in (i + 1)..unseen.len() {
                completion.push(unseen[i]);
                completion.push(unseen[j]);
                counts[evaluate_hand(&completion).category as usize] += 1;
                completion.pop();
                completion.pop();
                total += 1;
            }
        }
    }

    let mut chances = [0.0; 10];
    if total > 0 {
        for (priority, &count) in counts.iter().enumerate() {
            chances[priority] = f64::from(count) / f64::from(total);
        }
    }
    settle_floor(&mut chances);
    chances
}

/// The weakest combination that can still occur is in fact guaranteed (a
/// made hand cannot get worse), so its chance snaps to certainty.
fn settle_floor(chances: &mut Chances) {
    for priority in (1..chances.len()).rev() {
        let below_empty = chances[..priority].iter().all(|&c| c == 0.0);
        if below_empty && chances[priority] > 0.0 {
            chances[priority] = 1.0;
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringgame_engine::cards::{Rank as R, Suit as S};
    use ringgame_engine::hand::Category;

    fn c(s: S, r: R) -> Card {
        Card { suit: s, rank: r }
    }

    #[test]
    fn full_board_is_certain() {
        let hand = [c(S::Hearts, R::Ace), c(S::Hearts, R::King)];
        let board = [
            c(S::Hearts, R::Queen),
            c(S::Hearts, R::Jack),
            c(S::Hearts, R::Ten),
            c(S::Clubs, R::Two),
            c(S::Diamonds, R::Three),
        ];
        let mut est = ChanceEstimator::new();
        let chances = est.own_chances(&hand, &board);
        assert_eq!(chances[Category::RoyalFlush as usize], 1.0);
        assert!(chances[..9].iter().all(|&p| p == 0.0));
    }

    #[test]
    fn made_pair_floor_is_certain() {
        let hand = [c(S::Hearts, R::Nine), c(S::Clubs, R::Nine)];
        let board = [
            c(S::Diamonds, R::Two),
            c(S::Spades, R::Seven),
            c(S::Hearts, R::King),
            c(S::Clubs, R::Four),
        ];
        let mut est = ChanceEstimator::new();
        let chances = est.own_chances(&hand, &board);
        // a made pair cannot degrade to high card
        assert_eq!(chances[Category::HighCard as usize], 0.0);
        assert_eq!(chances[Category::OnePair as usize], 1.0);
    }

    #[test]
    fn drawing_board_spreads_probability() {
        let hand = [c(S::Hearts, R::Ace), c(S::Spades, R::King)];
        let board = [
            c(S::Diamonds, R::Two),
            c(S::Clubs, R::Seven),
            c(S::Hearts, R::Jack),
        ];
        let mut est = ChanceEstimator::new();
        let chances = est.own_chances(&hand, &board);
        assert!(chances[Category::OnePair as usize] > 0.0);
        assert!(chances[Category::HighCard as usize] > 0.0);
        // two cards to come cannot conjure a straight flush from this hand
        assert_eq!(chances[Category::StraightFlush as usize], 0.0);
    }

    #[test]
    fn rival_outlook_differs_from_own() {
        let hand = [c(S::Hearts, R::Ace), c(S::Spades, R::Ace)];
        let board = [
            c(S::Diamonds, R::Ace),
            c(S::Clubs, R::Seven),
            c(S::Hearts, R::Jack),
            c(S::Spades, R::Two),
            c(S::Clubs, R::Three),
        ];
        let mut est = ChanceEstimator::new();
        let own = est.own_chances(&hand, &board);
        let rival = est.rival_chances(&hand, &board);
        assert_eq!(own[Category::ThreeOfAKind as usize], 1.0);
        // the rival cannot hold the remaining aces' trips for certain
        assert!(rival[Category::ThreeOfAKind as usize] < 1.0);
    }

    #[test]
    fn weight_grows_with_strength() {
        let mut weak = [0.0; 10];
        weak[Category::HighCard as usize] = 1.0;
        let mut strong = [0.0; 10];
        strong[Category::Flush as usize] = 1.0;
        assert!(weigh(&strong) > weigh(&weak));
    }
}
