//! # Play Command
//!
//! Interactive session: one human seat against heuristic AI opponents.
//! Rounds repeat until the human quits, runs out of chips, the configured
//! round cap is reached, or too few players remain.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use ringgame_ai::create_ai;
use ringgame_engine::errors::GameError;
use ringgame_engine::game::Game;
use ringgame_engine::history::HistoryLogger;
use ringgame_engine::player::Player;
use ringgame_engine::round::RoundListener;

use crate::cli::PlayOpts;
use crate::config;
use crate::error::CliError;
use crate::human::HumanProvider;
use crate::render::{ConsoleListener, FanoutListener};

/// Names handed out to AI seats, in table order.
const AI_NAMES: [&str; 9] = [
    "Avery", "Blair", "Casey", "Drew", "Emery", "Finley", "Harper", "Jordan", "Morgan",
];

pub fn handle_play_command<'a>(
    opts: PlayOpts,
    out: &'a mut dyn Write,
    err: &mut dyn Write,
    stdin: &'a mut dyn BufRead,
) -> Result<(), CliError> {
    let mut cfg = config::resolve(opts.config.as_deref())?;
    if let Some(opponents) = opts.opponents {
        cfg.opponents = opponents;
    }
    if let Some(blind) = opts.blind {
        cfg.blind = blind;
    }
    if let Some(buy_in) = opts.buy_in {
        cfg.buy_in = buy_in;
    }
    if let Some(seed) = opts.seed {
        cfg.seed = Some(seed);
    }
    if !(1..=9).contains(&cfg.opponents) {
        return Err(CliError::InvalidInput(
            "opponents must be between 1 and 9".to_string(),
        ));
    }
    if cfg.blind > cfg.buy_in {
        let _ = crate::ui::write_error(err, "blind larger than the buy-in");
        return Err(CliError::InvalidInput(
            "blind larger than the buy-in".to_string(),
        ));
    }

    let human_name = opts.name.unwrap_or_else(|| "You".to_string());
    let seed = cfg.seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "play: opponents={} blind={} buy-in={} seed={}",
        cfg.opponents, cfg.blind, cfg.buy_in, seed
    )?;

    let out = Rc::new(RefCell::new(out));
    let stdin = Rc::new(RefCell::new(stdin));

    let mut game = Game::new(cfg.blind, cfg.buy_in, false, Some(seed));
    for i in 0..cfg.opponents {
        let name = AI_NAMES[i % AI_NAMES.len()];
        game.add_player(
            Player::new(name, cfg.buy_in, true),
            create_ai("heuristic", seed.wrapping_add(i as u64 + 1)),
        )?;
    }
    game.add_player(
        Player::new(human_name.clone(), cfg.buy_in, false),
        Box::new(HumanProvider::new(stdin.clone(), out.clone())),
    )?;

    let mut console = ConsoleListener::new(out.clone());
    let mut history = match &opts.log {
        Some(path) => HistoryLogger::create(path)?,
        None => HistoryLogger::disabled(),
    };

    let mut played = 0u32;
    loop {
        let mut listener = FanoutListener::new(vec![
            &mut console as &mut dyn RoundListener,
            &mut history as &mut dyn RoundListener,
        ]);
        match game.play_round(&mut listener) {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers) => {
                let _ = writeln!(out.borrow_mut(), "\nNot enough players to continue.");
                break;
            }
            Err(e) => return Err(e.into()),
        }
        played += 1;

        print_standings(&game, &mut *out.borrow_mut())?;

        let human_stack = game
            .players()
            .iter()
            .find(|p| p.name() == human_name)
            .map(|p| p.stack());
        match human_stack {
            Some(0) | None => {
                let _ = writeln!(out.borrow_mut(), "\nYou are out of chips. Game over.");
                break;
            }
            Some(_) => {}
        }

        if let Some(cap) = opts.rounds {
            if played >= cap {
                break;
            }
            continue;
        }
        if !ask_to_continue(&stdin, &out) {
            break;
        }
    }

    let _ = writeln!(out.borrow_mut(), "\nThanks for playing.");
    Ok(())
}

fn print_standings(game: &Game<'_>, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "\nStacks after round {}:", game.rounds_started())?;
    for player in game.players() {
        writeln!(out, "  {}: {}", player.name(), player.stack())?;
    }
    Ok(())
}

fn ask_to_continue(
    stdin: &Rc<RefCell<&mut dyn BufRead>>,
    out: &Rc<RefCell<&mut dyn Write>>,
) -> bool {
    let _ = writeln!(out.borrow_mut(), "\nDeal again? [y/n]");
    let mut line = String::new();
    match stdin.borrow_mut().read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
    }
}
