//! A round listener that narrates the table onto the output stream.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Write;
use std::rc::Rc;

use ringgame_engine::cards::Card;
use ringgame_engine::player::{Player, PlayerStatus};
use ringgame_engine::pot::{RatingGroup, SidePot};
use ringgame_engine::round::{RoundListener, Stage};

use crate::formatters::{format_action, format_cards, format_category};

pub struct ConsoleListener<'io> {
    output: Rc<RefCell<&'io mut dyn Write>>,
}

impl<'io> ConsoleListener<'io> {
    pub fn new(output: Rc<RefCell<&'io mut dyn Write>>) -> Self {
        Self { output }
    }
}

impl RoundListener for ConsoleListener<'_> {
    fn stage_dealt(&mut self, stage: Stage, board: &[Card], pot_size: u32) {
        let mut out = self.output.borrow_mut();
        let _ = writeln!(
            out,
            "\n--- {} --- the board: {}, the pot: {}",
            stage.name(),
            format_cards(board),
            pot_size
        );
    }

    fn blind_posted(&mut self, status: &PlayerStatus) {
        let _ = writeln!(
            self.output.borrow_mut(),
            "{} posts a blind of {} (stack {})",
            status.name,
            status.wager,
            status.stack
        );
    }

    fn player_acted(&mut self, status: &PlayerStatus) {
        let _ = writeln!(
            self.output.borrow_mut(),
            "{}: {} (stack {})",
            status.name,
            format_action(ringgame_engine::player::Move::new(
                status.last_action,
                status.wager
            )),
            status.stack
        );
    }

    fn showdown(&mut self, rating: &[RatingGroup], players: &[Player]) {
        let mut out = self.output.borrow_mut();
        if rating.len() == 1 && rating[0].strength.is_none() {
            let seat = rating[0].seats[0];
            let _ = writeln!(out, "\n{} takes the pot uncontested", players[seat].name());
            return;
        }
        let _ = writeln!(out, "\nShowdown:");
        for group in rating {
            let names: Vec<&str> = group.seats.iter().map(|&s| players[s].name()).collect();
            let label = group
                .strength
                .as_ref()
                .map(|s| format_category(s.category))
                .unwrap_or("-");
            for &seat in &group.seats {
                let hand: Vec<Card> = players[seat].hole_cards().iter().flatten().copied().collect();
                if !hand.is_empty() {
                    let _ = writeln!(out, "  {} shows {}", players[seat].name(), format_cards(&hand));
                }
            }
            let _ = writeln!(out, "  {} -> {}", names.join(", "), label);
        }
    }

    fn pots_paid(
        &mut self,
        _pots: &[SidePot],
        payouts: &BTreeMap<usize, u32>,
        players: &[Player],
    ) {
        let mut out = self.output.borrow_mut();
        for (&seat, &prize) in payouts {
            let _ = writeln!(out, "{} wins {}", players[seat].name(), prize);
        }
    }
}

/// Fans one stream of round events out to several listeners, so rendering
/// and history logging can observe the same round.
pub struct FanoutListener<'a> {
    listeners: Vec<&'a mut dyn RoundListener>,
}

impl<'a> FanoutListener<'a> {
    pub fn new(listeners: Vec<&'a mut dyn RoundListener>) -> Self {
        Self { listeners }
    }
}

impl RoundListener for FanoutListener<'_> {
    fn stage_dealt(&mut self, stage: Stage, board: &[Card], pot_size: u32) {
        for listener in &mut self.listeners {
            listener.stage_dealt(stage, board, pot_size);
        }
    }

    fn blind_posted(&mut self, status: &PlayerStatus) {
        for listener in &mut self.listeners {
            listener.blind_posted(status);
        }
    }

    fn player_acted(&mut self, status: &PlayerStatus) {
        for listener in &mut self.listeners {
            listener.player_acted(status);
        }
    }

    fn showdown(&mut self, rating: &[RatingGroup], players: &[Player]) {
        for listener in &mut self.listeners {
            listener.showdown(rating, players);
        }
    }

    fn pots_paid(
        &mut self,
        pots: &[SidePot],
        payouts: &BTreeMap<usize, u32>,
        players: &[Player],
    ) {
        for listener in &mut self.listeners {
            listener.pots_paid(pots, payouts, players);
        }
    }
}
