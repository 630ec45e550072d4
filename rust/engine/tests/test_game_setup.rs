use ringgame_engine::errors::GameError;
use ringgame_engine::game::Game;
use ringgame_engine::player::{Account, Action, Move, Player};
use ringgame_engine::round::{DecisionProvider, NullListener, TurnView};

/// Checks when it can, calls when it must, shoves when short.
struct Caller;

impl DecisionProvider for Caller {
    fn decide(&mut self, view: &TurnView<'_>) -> Move {
        for action in [Action::Check, Action::Call, Action::AllIn] {
            if view.legal.contains(&action) {
                return Move::of(action);
            }
        }
        Move::of(Action::Fold)
    }
}

fn seated(game: &mut Game<'_>, names: &[&str], stack: u32) {
    for name in names {
        game.add_player(Player::new(*name, stack, true), Box::new(Caller))
            .unwrap();
    }
}

#[test]
fn duplicate_names_cannot_be_seated() {
    let mut game = Game::new(10, 1_000, false, Some(1));
    game.add_player(Player::new("Alice", 1_000, true), Box::new(Caller))
        .unwrap();
    let err = game
        .add_player(Player::new("Alice", 1_000, true), Box::new(Caller))
        .unwrap_err();
    assert_eq!(err, GameError::AlreadyInGame("Alice".to_string()));
}

#[test]
fn removing_an_unknown_player_fails() {
    let mut game = Game::new(10, 1_000, false, Some(1));
    seated(&mut game, &["Alice", "Bob"], 1_000);
    let err = game.remove_player("Carol").unwrap_err();
    assert_eq!(err, GameError::GameNotFound("Carol".to_string()));
    let alice = game.remove_player("Alice").unwrap();
    assert_eq!(alice.name(), "Alice");
}

#[test]
fn a_game_needs_two_players() {
    let mut game = Game::new(10, 1_000, false, Some(1));
    seated(&mut game, &["Alice"], 1_000);
    let err = game.play_round(&mut NullListener).unwrap_err();
    assert_eq!(err, GameError::NotEnoughPlayers);
}

#[test]
fn account_players_pay_the_buy_in() {
    let mut game = Game::new(10, 500, false, Some(1));
    let mut rich = Account::new("Dana");
    rich.buy_chips(800);
    game.add_account_player(&mut rich, Box::new(Caller)).unwrap();
    assert_eq!(rich.chips(), 300);
    assert_eq!(game.players()[0].stack(), 500);

    let mut poor = Account::new("Eve");
    poor.buy_chips(100);
    let err = game.add_account_player(&mut poor, Box::new(Caller)).unwrap_err();
    assert_eq!(err, GameError::NotEnoughMoney);
}

#[test]
fn blinds_double_on_schedule() {
    let mut game = Game::new(10, 10_000, false, Some(5));
    seated(&mut game, &["a", "b", "c"], 10_000);
    let mut blinds = Vec::new();
    for _ in 0..6 {
        game.play_round(&mut NullListener).unwrap();
        blinds.push(game.blind());
    }
    assert_eq!(blinds, vec![10, 10, 10, 10, 10, 20]);
}

#[test]
fn chips_are_conserved_across_many_rounds() {
    let mut game = Game::new(10, 1_000, false, Some(77));
    seated(&mut game, &["a", "b", "c", "d"], 1_000);
    for _ in 0..10 {
        game.play_round(&mut NullListener).unwrap();
        let total: u32 = game.players().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 4_000);
    }
    assert_eq!(game.rounds_started(), 10);
}

#[test]
fn continuous_games_refill_bankrupt_ai_seats() {
    let mut game = Game::new(50, 100, true, Some(3));
    seated(&mut game, &["a", "b"], 100);
    // with a 50 blind and call-down seats, somebody goes broke quickly
    for _ in 0..20 {
        game.play_round(&mut NullListener).unwrap();
    }
    assert_eq!(game.players().len(), 2);
    assert_eq!(game.rounds_started(), 20);
}
