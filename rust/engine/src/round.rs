use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::evaluate_hand;
use crate::player::{Action, Move, Player, PlayerStatus};
use crate::pot::{Pot, RatingGroup, SidePot};

/// One phase of a hand, from dealing hole cards through showdown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Stage {
    Dealing,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Dealing => "deal",
            Stage::PreFlop => "pre-flop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
            Stage::Showdown => "showdown",
        }
    }

    fn next(&self) -> Stage {
        match self {
            Stage::Dealing => Stage::PreFlop,
            Stage::PreFlop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Showdown => Stage::Showdown,
        }
    }

    /// Community cards revealed when the stage opens.
    fn cards_to_deal(&self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            _ => 0,
        }
    }
}

/// Everything a decision provider gets to see when its seat is due to act.
#[derive(Debug)]
pub struct TurnView<'a> {
    pub seat: usize,
    pub player: &'a Player,
    pub board: &'a [Card],
    pub pot_size: u32,
    pub required_bet: u32,
    pub legal: &'a [Action],
    pub blind: u32,
    pub stage: Stage,
    pub players_left: usize,
}

/// The engine's only outward boundary: something that picks one move per
/// turn for a seat, be it a heuristic opponent or a terminal prompt.
///
/// The returned move must come from `view.legal`. Interactive providers are
/// re-prompted after a validation error; for non-interactive providers an
/// illegal move is a programming error and aborts the round.
pub trait DecisionProvider {
    fn decide(&mut self, view: &TurnView<'_>) -> Move;

    /// Whether validation errors should re-prompt instead of aborting.
    fn interactive(&self) -> bool {
        false
    }

    /// Called before a re-prompt with the error the last move caused.
    fn rejected(&mut self, _err: &GameError) {}
}

/// Injected observer for everything a presentation layer wants to render.
/// All hooks default to no-ops, so a unit struct is a valid null listener.
pub trait RoundListener {
    fn stage_dealt(&mut self, _stage: Stage, _board: &[Card], _pot_size: u32) {}
    fn blind_posted(&mut self, _status: &PlayerStatus) {}
    fn player_acted(&mut self, _status: &PlayerStatus) {}
    fn showdown(&mut self, _rating: &[RatingGroup], _players: &[Player]) {}
    fn pots_paid(
        &mut self,
        _pots: &[SidePot],
        _payouts: &BTreeMap<usize, u32>,
        _players: &[Player],
    ) {
    }
}

/// A listener that ignores every notification.
pub struct NullListener;

impl RoundListener for NullListener {}

/// Read-only snapshot of the whole round for presentation layers.
#[derive(Debug, Clone, Serialize)]
pub struct RoundStatus {
    pub stage: &'static str,
    pub board: Vec<Card>,
    pub pot: u32,
    pub players: Vec<PlayerStatus>,
}

/// One hand of poker: deals cards, advances through stages, runs betting
/// rounds with turn order and re-raise propagation, and settles the pots at
/// showdown. Borrows the seated players for the hand; stacks persist, all
/// per-round state is reset when the round ends.
pub struct Round<'a> {
    players: &'a mut [Player],
    /// Seats rotated so the one after the dealer acts first.
    order: Vec<usize>,
    blind: u32,
    deck: Deck,
    board: Vec<Card>,
    stage: Stage,
    pot: Pot,
    rating: Vec<RatingGroup>,
}

impl<'a> Round<'a> {
    /// Creates a round over the seated players with the dealer at
    /// `dealer_index`. The deck is expected to be freshly shuffled.
    pub fn new(players: &'a mut [Player], dealer_index: usize, blind: u32, deck: Deck) -> Self {
        let n = players.len();
        let order: Vec<usize> = (1..=n).map(|i| (dealer_index + i) % n).collect();
        let pot = Pot::new(order.clone());
        Self {
            players,
            order,
            blind,
            deck,
            board: Vec::with_capacity(5),
            stage: Stage::Dealing,
            pot,
            rating: Vec::new(),
        }
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.cards_left()
    }

    /// The showdown rating: rank-descending groups of seats with equal
    /// hands. Empty until the round settles.
    pub fn rating(&self) -> &[RatingGroup] {
        &self.rating
    }

    pub fn status(&self) -> RoundStatus {
        RoundStatus {
            stage: self.stage.name(),
            board: self.board.clone(),
            pot: self.pot.pot_size(),
            players: self.order.iter().map(|&s| self.players[s].status()).collect(),
        }
    }

    /// Plays the hand to completion: hole cards, every board stage with its
    /// betting round, then settlement and the end-of-round player reset.
    pub fn run(
        &mut self,
        providers: &mut [Box<dyn DecisionProvider + '_>],
        listener: &mut dyn RoundListener,
    ) -> Result<(), GameError> {
        self.deal_hole_cards()?;
        loop {
            self.next_stage(providers, listener)?;
            if self.active_count() == 1 || self.stage == Stage::River {
                self.settle(listener);
                break;
            }
        }
        for &seat in &self.order {
            self.players[seat].reset_for_round();
        }
        Ok(())
    }

    /// Deals two cards to every seat, one at a time around the table, twice.
    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        for &seat in &self.order {
            self.players[seat].reset_for_round();
        }
        for _ in 0..2 {
            for &seat in &self.order {
                if self.players[seat].is_active() {
                    let card = self.deck.draw()?;
                    self.players[seat].give_card(card)?;
                }
            }
        }
        Ok(())
    }

    /// Opens the next stage: burn, reveal, then run the betting round.
    /// Pre-flop additionally posts the blinds and starts the action after
    /// the big blind.
    fn next_stage(
        &mut self,
        providers: &mut [Box<dyn DecisionProvider + '_>],
        listener: &mut dyn RoundListener,
    ) -> Result<(), GameError> {
        self.stage = self.stage.next();
        if self.stage != Stage::PreFlop {
            self.deck.burn();
        }
        for _ in 0..self.stage.cards_to_deal() {
            let card = self.deck.draw()?;
            self.board.push(card);
        }
        listener.stage_dealt(self.stage, &self.board, self.pot.pot_size());

        for &seat in &self.active_seats() {
            self.players[seat].reset_for_stage();
        }

        if self.stage == Stage::PreFlop {
            let active = self.active_seats();
            for (i, &seat) in active.iter().take(2).enumerate() {
                let amount = if i == 0 { self.blind / 2 } else { self.blind };
                self.players[seat].post_blind(amount);
                listener.blind_posted(&self.players[seat].status());
            }
            // action opens after the big blind
            self.betting_round(Some(self.order[1]), providers, listener)
        } else {
            self.betting_round(None, providers, listener)
        }
    }

    /// Runs one betting round as a bounded work loop.
    ///
    /// Seats still due to act are visited in rotated order after the last
    /// raiser. A wager exceeding the bet that was required when the seat was
    /// prompted makes it the new last raiser and re-opens the action for
    /// everyone else. When nobody is left to act, the stage wagers are
    /// banked into the pot.
    fn betting_round(
        &mut self,
        mut last_raiser: Option<usize>,
        providers: &mut [Box<dyn DecisionProvider + '_>],
        listener: &mut dyn RoundListener,
    ) -> Result<(), GameError> {
        self.reopen_action(last_raiser);

        while let Some(seat) = self.next_to_act(last_raiser) {
            let required = self.max_bet();
            let players_left = self.active_count();
            loop {
                self.players[seat].legal_actions(required);
                let mv = {
                    let player = &self.players[seat];
                    let view = TurnView {
                        seat,
                        player,
                        board: &self.board,
                        pot_size: self.pot.pot_size(),
                        required_bet: required,
                        legal: player.offered(),
                        blind: self.blind,
                        stage: self.stage,
                        players_left,
                    };
                    providers[seat].decide(&view)
                };
                match self.players[seat].apply(mv) {
                    Ok(()) => break,
                    Err(err) if providers[seat].interactive() => providers[seat].rejected(&err),
                    Err(err) => return Err(err),
                }
            }
            if !self.players[seat].is_active() {
                self.pot.remove_seat(seat);
            }
            listener.player_acted(&self.players[seat].status());
            if self.players[seat].wager() > required {
                last_raiser = Some(seat);
                self.reopen_action(last_raiser);
            }
        }
        self.collect_bets();
        Ok(())
    }

    /// Marks every active seat except the raiser (and all-in seats) as due
    /// to act again.
    fn reopen_action(&mut self, last_raiser: Option<usize>) {
        for &seat in &self.order {
            if Some(seat) == last_raiser {
                continue;
            }
            let player = &mut self.players[seat];
            if player.is_active() && !player.is_all_in() {
                player.reset_acted();
            }
        }
    }

    /// The next seat due to act, in rotated order after the last raiser.
    ///
    /// Returns `None` once everyone has answered, or immediately when at
    /// most one non-all-in active seat remains with no bet outstanding: no
    /// further wagering is possible then.
    fn next_to_act(&self, last_raiser: Option<usize>) -> Option<usize> {
        let live: Vec<usize> = self
            .order
            .iter()
            .copied()
            .filter(|&s| self.players[s].is_active())
            .collect();
        let can_still_bet = live
            .iter()
            .filter(|&&s| !self.players[s].is_all_in())
            .count();
        if can_still_bet <= 1 && self.max_bet() == 0 {
            return None;
        }
        let start = last_raiser
            .and_then(|r| live.iter().position(|&s| s == r))
            .map(|i| i + 1)
            .unwrap_or(0);
        live.iter()
            .cycle()
            .skip(start)
            .take(live.len())
            .copied()
            .find(|&s| !self.players[s].has_acted() && !self.players[s].is_all_in())
    }

    /// The table-high wager of the current stage.
    fn max_bet(&self) -> u32 {
        self.order
            .iter()
            .map(|&s| self.players[s].wager())
            .max()
            .unwrap_or(0)
    }

    /// Banks every seat's stage wager into the pot and soft-resets the
    /// per-stage state.
    fn collect_bets(&mut self) {
        for &seat in &self.order {
            let amount = self.players[seat].wager();
            self.pot.add_chips(seat, amount);
            self.players[seat].reset_for_stage();
        }
    }

    fn active_seats(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&s| self.players[s].is_active())
            .collect()
    }

    fn active_count(&self) -> usize {
        self.active_seats().len()
    }

    /// Groups the remaining seats by identical hand strength, best first.
    /// With a single seat left nobody shows and the rating is a walkover.
    fn find_winners(&mut self) {
        let active = self.active_seats();
        if active.len() == 1 {
            self.rating = vec![RatingGroup {
                strength: None,
                seats: active,
            }];
            return;
        }

        self.stage = Stage::Showdown;
        let mut groups: Vec<RatingGroup> = Vec::new();
        for &seat in &active {
            let mut cards: Vec<Card> = self.players[seat]
                .hole_cards()
                .iter()
                .flatten()
                .copied()
                .collect();
            cards.extend_from_slice(&self.board);
            let strength = evaluate_hand(&cards);
            match groups
                .iter_mut()
                .find(|g| g.strength.as_ref() == Some(&strength))
            {
                Some(g) => g.seats.push(seat),
                None => groups.push(RatingGroup {
                    strength: Some(strength),
                    seats: vec![seat],
                }),
            }
        }
        groups.sort_by(|a, b| b.strength.cmp(&a.strength));
        self.rating = groups;
    }

    /// Settles the round: rate the hands, carve the side pots, distribute
    /// and pay.
    fn settle(&mut self, listener: &mut dyn RoundListener) {
        self.find_winners();
        self.pot.recalculate_pots();
        self.pot.distribute(&self.rating);
        listener.showdown(&self.rating, self.players);
        self.pot.pay_wins(self.players);
        listener.pots_paid(self.pot.side_pots(), self.pot.payouts(), self.players);
    }
}
