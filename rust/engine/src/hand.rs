use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// The ten standard poker combinations, ordered by priority.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// A concrete evaluated hand: the combination kind plus the tie-break ranks
/// needed to compare two hands of the same kind.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks, zero-padded
    pub kickers: [u8; 5],
}

/// Finds the best combination that can be made from the given cards.
///
/// Accepts 2 to 7 cards and is pure: the same set of cards yields the same
/// result regardless of slice order. Combinations are checked from royal
/// flush down to high card and the first match wins. The Ace doubles as a
/// virtual rank 1 so A-2-3-4-5 counts as a 5-high ("wheel") straight.
///
/// # Panics
///
/// Panics if `cards` is empty; the engine never evaluates an empty hand.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    assert!(!cards.is_empty(), "cannot evaluate an empty hand");

    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    for &c in cards.iter() {
        let r = c.rank as u8;
        rank_counts[r as usize] += 1;
        let s = suit_index(c.suit);
        suit_counts[s] += 1;
        by_suit[s].push(r);
    }

    let mut flush_suit: Option<usize> = None;
    for (s, &count) in suit_counts.iter().enumerate() {
        if count >= 5 {
            flush_suit = Some(s);
            break;
        }
    }

    // Straight flush / royal flush
    if let Some(s) = flush_suit {
        by_suit[s].sort_unstable();
        by_suit[s].dedup();
        if let Some(high) = detect_straight_high(&by_suit[s]) {
            let category = if high == 14 {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            };
            return HandStrength {
                category,
                kickers: [high, 0, 0, 0, 0],
            };
        }
    }

    // Four of a kind
    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return HandStrength {
            category: Category::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        };
    }

    // Full house
    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return HandStrength {
            category: Category::FullHouse,
            kickers: [trip, pair, 0, 0, 0],
        };
    }

    // Flush
    if let Some(s) = flush_suit {
        let mut ranks = by_suit[s].clone();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let mut k = [0u8; 5];
        k.copy_from_slice(&ranks[..5]);
        return HandStrength {
            category: Category::Flush,
            kickers: k,
        };
    }

    // Straight
    let mut uniq: Vec<u8> = Vec::new();
    for r in 2..=14u8 {
        if rank_counts[r as usize] > 0 {
            uniq.push(r);
        }
    }
    if let Some(high) = detect_straight_high(&uniq) {
        return HandStrength {
            category: Category::Straight,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    // Three / Two pair / One pair / High card
    let (trip_ranks, pair_ranks, singles) = classify_multiples(&rank_counts);
    if let Some(t) = trip_ranks.first().copied() {
        // trips + two highest kickers
        let mut k = [t, 0, 0, 0, 0];
        let mut remain = vec![];
        remain.extend(pair_ranks.iter().copied());
        remain.extend(singles.iter().copied());
        remain.sort_unstable_by(|a, b| b.cmp(a));
        k[1] = *remain.first().unwrap_or(&0);
        k[2] = *remain.get(1).unwrap_or(&0);
        return HandStrength {
            category: Category::ThreeOfAKind,
            kickers: k,
        };
    }
    if pair_ranks.len() >= 2 {
        let high = pair_ranks[0];
        let low = pair_ranks[1];
        let mut k = [high, low, 0, 0, 0];
        // a third pair's rank competes with the singles for the kicker slot
        k[2] = pair_ranks
            .get(2)
            .copied()
            .max(singles.first().copied())
            .unwrap_or(0);
        return HandStrength {
            category: Category::TwoPair,
            kickers: k,
        };
    }
    if let Some(p) = pair_ranks.first().copied() {
        let mut k = [p, 0, 0, 0, 0];
        for i in 0..3 {
            k[i + 1] = *singles.get(i).unwrap_or(&0);
        }
        return HandStrength {
            category: Category::OnePair,
            kickers: k,
        };
    }

    // High card: top 5 ranks
    let mut k = [0u8; 5];
    for (i, item) in k.iter_mut().enumerate() {
        *item = *singles.get(i).unwrap_or(&0);
    }
    HandStrength {
        category: Category::HighCard,
        kickers: k,
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Scans 5-length rank windows over ascending unique ranks, returning the
/// highest straight's top rank. An Ace also counts as rank 1, and the wheel
/// reports 5 as its high card.
fn detect_straight_high(sorted_unique_ranks: &[u8]) -> Option<u8> {
    if sorted_unique_ranks.is_empty() {
        return None;
    }
    let mut w = sorted_unique_ranks.to_vec();
    if w.binary_search(&14).is_ok() {
        w.insert(0, 1);
    }

    let mut run = 1;
    let mut best_high = 0u8;
    for i in 1..w.len() {
        if w[i] == w[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best_high = w[i];
            }
        } else {
            run = 1;
        }
    }
    if best_high == 0 {
        None
    } else {
        Some(best_high)
    }
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let mut quad = 0u8;
    let mut kicker = 0u8;
    for r in (2..=14u8).rev() {
        if rank_counts[r as usize] == 4 {
            quad = r;
            break;
        }
    }
    if quad == 0 {
        return None;
    }
    for r in (2..=14u8).rev() {
        if r != quad && rank_counts[r as usize] > 0 {
            kicker = r;
            break;
        }
    }
    Some((quad, kicker))
}

/// A trip plus a pair; two trips resolve by demoting the lower to the pair.
fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let mut trips: Vec<u8> = vec![];
    let mut pairs: Vec<u8> = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            _ => {}
        }
    }
    if trips.is_empty() {
        return None;
    }
    if trips.len() >= 2 {
        return Some((trips[0], trips[1]));
    }
    if !pairs.is_empty() {
        return Some((trips[0], pairs[0]));
    }
    None
}

/// Ranks holding exactly three, two and one cards, each descending.
fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}
