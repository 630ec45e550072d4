//! The human seat: a decision provider over the terminal streams.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use ringgame_engine::errors::GameError;
use ringgame_engine::player::{Action, Move};
use ringgame_engine::round::{DecisionProvider, TurnView};

use crate::formatters::format_cards;
use crate::ui::format_options;
use crate::validation::parse_move;

/// Prompts on the output stream and reads typed decisions from the input
/// stream. Parse mistakes re-prompt locally; rule violations come back from
/// the engine through [`rejected`](DecisionProvider::rejected) and
/// re-prompt as well. A closed input stream folds.
pub struct HumanProvider<'io> {
    input: Rc<RefCell<&'io mut dyn BufRead>>,
    output: Rc<RefCell<&'io mut dyn Write>>,
}

impl<'io> HumanProvider<'io> {
    pub fn new(
        input: Rc<RefCell<&'io mut dyn BufRead>>,
        output: Rc<RefCell<&'io mut dyn Write>>,
    ) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, view: &TurnView<'_>) {
        let hand: Vec<_> = view.player.hole_cards().iter().flatten().copied().collect();
        let mut out = self.output.borrow_mut();
        let _ = writeln!(
            out,
            "Your cards: {}, the board: {}",
            format_cards(&hand),
            format_cards(view.board)
        );
        let _ = writeln!(
            out,
            "Your stack is {}, your current bet is {}, the pot is {}",
            view.player.stack(),
            view.player.wager(),
            view.pot_size
        );
        let _ = writeln!(
            out,
            "The bet to match is {}. Your options: {}",
            view.required_bet,
            format_options(view.legal)
        );
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl DecisionProvider for HumanProvider<'_> {
    fn decide(&mut self, view: &TurnView<'_>) -> Move {
        self.prompt(view);
        loop {
            let Some(line) = self.read_line() else {
                // input is gone; fold rather than hang the table
                return Move::of(Action::Fold);
            };
            match parse_move(&line) {
                Ok(mv) => return mv,
                Err(msg) => {
                    let _ = writeln!(self.output.borrow_mut(), "{}", msg);
                }
            }
        }
    }

    fn interactive(&self) -> bool {
        true
    }

    fn rejected(&mut self, err: &GameError) {
        let msg = match err {
            GameError::UnavailableDecision { .. } => "You can't choose this decision",
            GameError::NegativeBet => "You must enter positive bet",
            GameError::TooSmallBet { .. } => "The bet must not be lower than the current bet",
            _ => "That move is not possible right now",
        };
        let _ = writeln!(self.output.borrow_mut(), "{}", msg);
    }
}
