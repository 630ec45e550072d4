use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// A betting action kind. `NotDecided` and `Blind` only ever appear as a
/// recorded last move, never as a chosen decision.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    NotDecided,
    Blind,
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

/// A player's move: the action kind plus the cumulative amount wagered in
/// the current betting stage. The amount only matters for `Raise`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub amount: u32,
}

impl Move {
    pub fn new(action: Action, amount: u32) -> Self {
        Self { action, amount }
    }

    /// A move with no amount attached.
    pub fn of(action: Action) -> Self {
        Self { action, amount: 0 }
    }
}

/// Read-only snapshot of a seat for presentation layers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct PlayerStatus {
    pub name: String,
    pub stack: u32,
    pub last_action: Action,
    pub wager: u32,
    pub active: bool,
    pub all_in: bool,
}

/// One seat's account state for the lifetime of a round: the chip stack,
/// the current-stage wager, fold/all-in flags and the legality rules for
/// what actions are permitted given the required bet.
///
/// The stack can never go below zero and the recorded wager can never
/// exceed what the seat owned at the start of the stage; wagering past the
/// stack forces all-in instead.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    ai: bool,
    stack: u32,
    hole: [Option<Card>; 2],
    in_hand: bool,
    all_in: bool,
    acted: bool,
    last_move: Move,
    offered: Vec<Action>,
    required_bet: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32, ai: bool) -> Self {
        Self {
            name: name.into(),
            ai,
            stack,
            hole: [None, None],
            in_hand: stack > 0,
            all_in: false,
            acted: false,
            last_move: Move::of(Action::NotDecided),
            offered: Vec::new(),
            required_bet: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ai(&self) -> bool {
        self.ai
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    /// Whether the seat has not folded this round.
    pub fn is_active(&self) -> bool {
        self.in_hand
    }

    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// Whether the seat has already answered the current betting round.
    /// Posting a blind does not count unless the blind put the seat all-in.
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    pub fn reset_acted(&mut self) {
        self.acted = false;
    }

    pub fn last_move(&self) -> Move {
        self.last_move
    }

    /// The cumulative amount wagered in the current betting stage.
    pub fn wager(&self) -> u32 {
        self.last_move.amount
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(GameError::TooManyCards)
        }
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Computes and stores the set of actions this seat may legally answer
    /// with, given the current table-high wager.
    pub fn legal_actions(&mut self, required_bet: u32) -> &[Action] {
        let committed = self.last_move.amount;
        self.offered = if required_bet == 0 || required_bet == committed {
            vec![Action::Check, Action::Fold, Action::Raise, Action::AllIn]
        } else if required_bet < self.stack + committed {
            vec![Action::Fold, Action::Call, Action::Raise, Action::AllIn]
        } else if required_bet == self.stack + committed {
            // calling would use the whole remaining stack
            vec![Action::Fold, Action::Call, Action::AllIn]
        } else {
            // cannot fully call; all-in is a partial call
            vec![Action::Fold, Action::AllIn]
        };
        self.required_bet = required_bet;
        &self.offered
    }

    /// The action set computed by the last [`legal_actions`](Self::legal_actions) call.
    pub fn offered(&self) -> &[Action] {
        &self.offered
    }

    /// Applies a decision drawn from the offered action set.
    ///
    /// A raise that only matches the required bet is demoted to a call (or a
    /// check when nothing was required). Wagering more than the stack covers
    /// caps the amount and marks the seat all-in. On error no state changes
    /// and the same seat can be re-prompted.
    pub fn apply(&mut self, mv: Move) -> Result<(), GameError> {
        if !self.offered.contains(&mv.action) {
            return Err(GameError::UnavailableDecision { action: mv.action });
        }
        match mv.action {
            Action::Check => {
                self.last_move.action = Action::Check;
            }
            Action::Fold => {
                self.last_move.action = Action::Fold;
                self.hole = [None, None];
                self.in_hand = false;
            }
            Action::Call => {
                let required = self.required_bet;
                self.wager_up_to(required);
                self.last_move = Move::new(Action::Call, required);
            }
            Action::Raise => {
                if mv.amount < self.required_bet {
                    return Err(GameError::TooSmallBet {
                        offered: mv.amount,
                        required: self.required_bet,
                    });
                }
                self.wager_up_to(mv.amount);
                if !self.all_in {
                    if mv.amount == self.required_bet {
                        // the stack only covered a call (or a free check)
                        self.last_move = if self.required_bet == 0 {
                            Move::new(Action::Check, mv.amount)
                        } else {
                            Move::new(Action::Call, mv.amount)
                        };
                    } else {
                        self.last_move = mv;
                    }
                }
            }
            Action::AllIn => {
                self.wager_up_to(self.stack + self.last_move.amount);
            }
            Action::NotDecided | Action::Blind => {
                // never offered, caught above
                unreachable!("forced moves cannot be chosen");
            }
        }
        self.acted = true;
        Ok(())
    }

    /// Posts a forced blind wager. The seat is marked as having acted only
    /// when the blind consumed the whole stack; otherwise it must still
    /// answer when the action reaches it.
    pub fn post_blind(&mut self, amount: u32) {
        self.wager_up_to(amount);
        if self.all_in {
            self.acted = true;
        } else {
            self.last_move = Move::new(Action::Blind, amount);
        }
    }

    /// Raises the cumulative stage wager to `amount`, paying the difference
    /// from the stack. Wagers are cumulative and never step down.
    fn wager_up_to(&mut self, amount: u32) {
        let committed = self.last_move.amount;
        if amount <= committed {
            return;
        }
        let step = amount - committed;
        if step >= self.stack {
            self.all_in = true;
            self.last_move = Move::new(Action::AllIn, self.stack + committed);
            self.stack = 0;
        } else {
            self.stack -= step;
            self.last_move.amount = amount;
        }
    }

    /// Soft reset between betting stages: the banked wager clears while the
    /// fold/all-in status survives. An all-in seat keeps its acted flag so it
    /// is never solicited again this round.
    pub fn reset_for_stage(&mut self) {
        if self.all_in {
            self.last_move.amount = 0;
        } else {
            self.acted = false;
            self.last_move = Move::of(Action::NotDecided);
        }
        self.offered.clear();
        self.required_bet = 0;
    }

    /// Full reset at a round boundary: hand, wager and flags clear while the
    /// stack persists. Seats with chips left rejoin the next round.
    pub fn reset_for_round(&mut self) {
        self.acted = false;
        self.last_move = Move::of(Action::NotDecided);
        self.offered.clear();
        self.required_bet = 0;
        self.hole = [None, None];
        self.all_in = false;
        self.in_hand = self.stack > 0;
    }

    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            name: self.name.clone(),
            stack: self.stack,
            last_action: self.last_move.action,
            wager: self.last_move.amount,
            active: self.in_hand,
            all_in: self.all_in,
        }
    }
}

/// A chip account outside any single game: the bankroll a player buys table
/// stacks from and cashes back out to.
#[derive(Debug, Clone)]
pub struct Account {
    name: String,
    chips: u32,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chips: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn buy_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Creates a seated player funded from this account.
    pub fn join(&mut self, buy_in: u32) -> Result<Player, GameError> {
        if buy_in > self.chips {
            return Err(GameError::NotEnoughMoney);
        }
        self.chips -= buy_in;
        Ok(Player::new(self.name.clone(), buy_in, false))
    }

    /// Returns a departing player's remaining stack to the account.
    pub fn leave(&mut self, player: Player) {
        self.chips = self.chips.saturating_add(player.stack());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blind_leaves_seat_due_to_act() {
        let mut p = Player::new("sb", 100, true);
        p.post_blind(5);
        assert_eq!(p.stack(), 95);
        assert_eq!(p.last_move(), Move::new(Action::Blind, 5));
        assert!(!p.has_acted());
    }

    #[test]
    fn all_in_blind_counts_as_acted() {
        let mut p = Player::new("sb", 5, true);
        p.post_blind(10);
        assert_eq!(p.stack(), 0);
        assert!(p.is_all_in());
        assert!(p.has_acted());
        assert_eq!(p.last_move(), Move::new(Action::AllIn, 5));
    }

    #[test]
    fn account_buy_in_and_cash_out() {
        let mut acc = Account::new("Dana");
        acc.buy_chips(500);
        assert!(matches!(acc.join(600), Err(GameError::NotEnoughMoney)));
        let player = acc.join(300).unwrap();
        assert_eq!(acc.chips(), 200);
        assert_eq!(player.stack(), 300);
        assert!(!player.is_ai());
        acc.leave(player);
        assert_eq!(acc.chips(), 500);
    }
}
