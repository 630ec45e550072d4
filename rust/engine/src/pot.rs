use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::hand::HandStrength;
use crate::player::Player;

/// A sub-pot formed when seats wager unequal totals due to differing all-in
/// thresholds. `seats` is the eligible seats in turn order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SidePot {
    pub seats: Vec<usize>,
    pub size: u32,
}

/// A group of seats holding hands of identical strength, used to rank the
/// showdown. Groups are ordered best first; `strength` is `None` only for
/// the walkover case where a single seat remains and no hands are shown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RatingGroup {
    pub strength: Option<HandStrength>,
    pub seats: Vec<usize>,
}

/// Tracks every seat's cumulative contribution across the whole round,
/// partitions the total into side pots by contribution tier, and distributes
/// each side pot to the winners determined by the showdown rating.
#[derive(Debug)]
pub struct Pot {
    /// Contributing seats in turn order. Contributions are kept after a
    /// fold so that pot recalculation stays simple.
    seats: Vec<usize>,
    contributions: HashMap<usize, u32>,
    eligible: HashSet<usize>,
    pot_size: u32,
    pots: Vec<SidePot>,
    payouts: BTreeMap<usize, u32>,
    paid: bool,
}

impl Pot {
    pub fn new(seats: Vec<usize>) -> Self {
        let contributions = seats.iter().map(|&s| (s, 0)).collect();
        let eligible = seats.iter().copied().collect();
        Self {
            seats,
            contributions,
            eligible,
            pot_size: 0,
            pots: Vec::new(),
            payouts: BTreeMap::new(),
            paid: false,
        }
    }

    pub fn pot_size(&self) -> u32 {
        self.pot_size
    }

    pub fn side_pots(&self) -> &[SidePot] {
        &self.pots
    }

    /// Computed winner shares by seat, filled in by [`distribute`](Self::distribute).
    pub fn payouts(&self) -> &BTreeMap<usize, u32> {
        &self.payouts
    }

    /// Records a seat's contribution and grows the pot.
    pub fn add_chips(&mut self, seat: usize, amount: u32) {
        *self.contributions.entry(seat).or_insert(0) += amount;
        self.pot_size += amount;
    }

    /// Drops a folded seat from pot eligibility. Its contribution stays in
    /// the pot; the eligible set only ever shrinks.
    pub fn remove_seat(&mut self, seat: usize) {
        self.eligible.remove(&seat);
    }

    /// Partitions the pot into side pots by ascending contribution tier.
    ///
    /// Each tier's pot holds every seat that contributed at least that much,
    /// sized at seats x (tier - previous tier). Folded seats are then
    /// stripped and pots left with identical eligible sets merge, ordered by
    /// descending seat count. The sum of all side pots always equals the
    /// total pot.
    pub fn recalculate_pots(&mut self) {
        self.pots.clear();
        let mut tiers: Vec<u32> = self
            .contributions
            .values()
            .copied()
            .filter(|&c| c > 0)
            .collect();
        tiers.sort_unstable();
        tiers.dedup();

        if tiers.len() == 1 {
            let seats = self.eligible_in_order();
            self.pots.push(SidePot {
                seats,
                size: self.pot_size,
            });
            return;
        }

        let mut prev = 0u32;
        for &tier in &tiers {
            let seats: Vec<usize> = self
                .seats
                .iter()
                .copied()
                .filter(|s| self.contributions.get(s).copied().unwrap_or(0) >= tier)
                .collect();
            let size = seats.len() as u32 * (tier - prev);
            self.pots.push(SidePot { seats, size });
            prev = tier;
        }
        self.unite_pots();
    }

    /// Strips folded seats from every side pot, then merges pots whose
    /// eligible seat sets became identical. A pot whose eligible set emptied
    /// entirely keeps its contributors: that money was never called and goes
    /// back where it came from at distribution time.
    fn unite_pots(&mut self) {
        for pot in &mut self.pots {
            let stripped: Vec<usize> = pot
                .seats
                .iter()
                .copied()
                .filter(|s| self.eligible.contains(s))
                .collect();
            if !stripped.is_empty() {
                pot.seats = stripped;
            }
        }

        let mut united: Vec<SidePot> = Vec::new();
        for pot in self.pots.drain(..) {
            match united.iter_mut().find(|u| u.seats == pot.seats) {
                Some(u) => u.size += pot.size,
                None => united.push(pot),
            }
        }
        united.sort_by(|a, b| b.seats.len().cmp(&a.seats.len()));
        self.pots = united;
    }

    /// Defines the winners of each side pot from the rank-descending rating.
    ///
    /// A pot with a single eligible seat goes to it whole. Otherwise the
    /// first rating group containing any of the pot's seats wins it, split
    /// evenly; odd chips go one each to the earliest winners in turn order.
    pub fn distribute(&mut self, rating: &[RatingGroup]) {
        self.payouts.clear();
        for pot in &self.pots {
            let winners: Vec<usize> = if pot.seats.len() == 1 {
                pot.seats.clone()
            } else {
                let mut found = Vec::new();
                for group in rating {
                    found = pot
                        .seats
                        .iter()
                        .copied()
                        .filter(|s| group.seats.contains(s))
                        .collect();
                    if !found.is_empty() {
                        break;
                    }
                }
                if found.is_empty() {
                    // uncalled money with no ranked claimant: refund the tier
                    found = pot.seats.clone();
                }
                found
            };
            if winners.is_empty() {
                continue;
            }
            let share = pot.size / winners.len() as u32;
            let remainder = (pot.size % winners.len() as u32) as usize;
            for (i, &seat) in winners.iter().enumerate() {
                let prize = share + u32::from(i < remainder);
                *self.payouts.entry(seat).or_insert(0) += prize;
            }
        }
    }

    /// Credits each winner's stack with its computed share. Paying is a
    /// one-shot operation; calling again is a no-op.
    pub fn pay_wins(&mut self, players: &mut [Player]) {
        if self.paid {
            return;
        }
        for (&seat, &prize) in &self.payouts {
            players[seat].add_chips(prize);
        }
        self.paid = true;
    }

    fn eligible_in_order(&self) -> Vec<usize> {
        self.seats
            .iter()
            .copied()
            .filter(|s| self.eligible.contains(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contributions_accumulate() {
        let mut pot = Pot::new(vec![0, 1, 2]);
        pot.add_chips(0, 20);
        pot.add_chips(1, 30);
        pot.add_chips(0, 30);
        assert_eq!(pot.pot_size(), 80);
    }

    #[test]
    fn single_tier_single_pot() {
        let mut pot = Pot::new(vec![0, 1, 2]);
        for seat in 0..3 {
            pot.add_chips(seat, 50);
        }
        pot.recalculate_pots();
        assert_eq!(pot.side_pots().len(), 1);
        assert_eq!(pot.side_pots()[0].size, 150);
        assert_eq!(pot.side_pots()[0].seats, vec![0, 1, 2]);
    }

    #[test]
    fn three_tiers_partition() {
        let mut pot = Pot::new(vec![0, 1, 2]);
        pot.add_chips(0, 20);
        pot.add_chips(1, 30);
        pot.add_chips(2, 10);
        pot.recalculate_pots();
        let pots = pot.side_pots();
        assert_eq!(pots.len(), 3);
        assert_eq!((pots[0].seats.clone(), pots[0].size), (vec![0, 1, 2], 30));
        assert_eq!((pots[1].seats.clone(), pots[1].size), (vec![0, 1], 20));
        assert_eq!((pots[2].seats.clone(), pots[2].size), (vec![1], 10));
        let covered: u32 = pots.iter().map(|p| p.size).sum();
        assert_eq!(covered, pot.pot_size());
    }

    #[test]
    fn fold_merges_pots_with_identical_seats() {
        let mut pot = Pot::new(vec![0, 1, 2]);
        pot.add_chips(0, 20);
        pot.add_chips(1, 30);
        pot.add_chips(2, 10);
        pot.remove_seat(0);
        pot.recalculate_pots();
        let pots = pot.side_pots();
        assert_eq!(pots.len(), 2);
        assert_eq!((pots[0].seats.clone(), pots[0].size), (vec![1, 2], 30));
        assert_eq!((pots[1].seats.clone(), pots[1].size), (vec![1], 30));
        let covered: u32 = pots.iter().map(|p| p.size).sum();
        assert_eq!(covered, pot.pot_size());
    }
}
