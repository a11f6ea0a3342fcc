//! Turn controller: turn order, extra rolls, skips and game over.

use ludo_engine::core::{Color, ColorMap, DieRoll, GameState, Position, ScriptedDie, TokenId};
use ludo_engine::rules::{Game, RollOutcome, TurnPhase};
use ludo_engine::RulesError;

fn roll(value: u8) -> DieRoll {
    DieRoll::new(value).unwrap()
}

/// Colors take turns in fixed cyclic order when nothing can move.
#[test]
fn test_cyclic_turn_order() {
    let mut game = Game::new();
    let mut seen = Vec::new();

    for _ in 0..8 {
        seen.push(game.active_color());
        let outcome = game.roll(roll(1)).unwrap();
        assert!(matches!(outcome, RollOutcome::Skipped { extra_turn: false, .. }));
    }

    assert_eq!(
        seen,
        vec![
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Blue,
        ]
    );
    assert_eq!(game.state().turn_number(), 8);
}

/// A six always grants another roll, with or without a move.
#[test]
fn test_six_always_grants_extra_roll() {
    // With a move
    let mut game = Game::new();
    game.roll(roll(6)).unwrap();
    let turn = game.choose(TokenId::new(2)).unwrap();
    assert!(turn.extra_turn);
    assert_eq!(game.active_color(), Color::Red);

    // Without one: every Red token is stuck on the home stretch
    let mut positions = ColorMap::with_value([Position::Yard; 4]);
    positions[Color::Red] = [Position::HomeStretch(1); 4];
    let mut game = Game::from_state(GameState::from_positions(Color::Red, positions).unwrap());

    let outcome = game.roll(roll(6)).unwrap();
    assert_eq!(
        outcome,
        RollOutcome::Skipped {
            color: Color::Red,
            roll: roll(6),
            extra_turn: true,
        }
    );
    assert_eq!(game.phase(), &TurnPhase::AwaitingRoll(Color::Red));
}

/// A non-six move passes the turn on.
#[test]
fn test_non_six_move_passes_turn() {
    let mut game = Game::new();
    let mut die = ScriptedDie::new([6, 4]).unwrap();

    game.roll_with(&mut die).unwrap();
    game.choose(TokenId::new(1)).unwrap();

    let outcome = game.roll_with(&mut die).unwrap();
    assert!(matches!(outcome, RollOutcome::MustChoose { color: Color::Red, .. }));

    let turn = game.choose(TokenId::new(1)).unwrap();
    assert!(!turn.extra_turn);
    assert_eq!(turn.outcome.to, Position::Ring(5));
    assert_eq!(game.active_color(), Color::Green);
}

/// The movable set reported by a roll is what `choose` accepts.
#[test]
fn test_choose_only_from_reported_set() {
    let mut positions = ColorMap::with_value([Position::Yard; 4]);
    positions[Color::Green][1] = Position::Ring(20);
    positions[Color::Green][2] = Position::HomeStretch(5);
    let mut game = Game::from_state(GameState::from_positions(Color::Green, positions).unwrap());

    let movable = match game.roll(roll(3)).unwrap() {
        RollOutcome::MustChoose { movable, .. } => movable,
        other => panic!("expected a choice, got {:?}", other),
    };
    assert_eq!(movable.as_slice(), &[TokenId::new(2)]);

    for token in [TokenId::new(1), TokenId::new(3), TokenId::new(4)] {
        let err = game.choose(token).unwrap_err();
        assert_eq!(
            err,
            RulesError::IllegalMove {
                color: Color::Green,
                token,
                roll: 3,
            }
        );
    }

    let turn = game.choose(TokenId::new(2)).unwrap();
    assert_eq!(turn.outcome.to, Position::Ring(23));
}

/// Captures made through the controller are reported with the move.
#[test]
fn test_capture_through_controller() {
    let mut positions = ColorMap::with_value([Position::Yard; 4]);
    positions[Color::Yellow][0] = Position::Ring(30);
    positions[Color::Red][3] = Position::Ring(32);
    let mut game = Game::from_state(GameState::from_positions(Color::Yellow, positions).unwrap());

    game.roll(roll(2)).unwrap();
    let turn = game.choose(TokenId::new(1)).unwrap();

    assert_eq!(turn.outcome.captures.len(), 1);
    assert_eq!(turn.outcome.captures[0].victim, Color::Red);
    assert_eq!(game.state().position(Color::Red, TokenId::new(4)), Position::Yard);
    assert_eq!(game.state().history().back().unwrap().captures, turn.outcome.captures);
}

/// Once a color wins, nothing else is accepted and the state is frozen.
#[test]
fn test_game_over_freezes_state() {
    let mut positions = ColorMap::with_value([Position::Yard; 4]);
    positions[Color::Green] = [
        Position::Finished,
        Position::Finished,
        Position::Finished,
        Position::HomeStretch(5),
    ];
    positions[Color::Blue][0] = Position::Ring(45);
    let mut game = Game::from_state(GameState::from_positions(Color::Green, positions).unwrap());

    game.roll(roll(1)).unwrap();
    let turn = game.choose(TokenId::new(4)).unwrap();
    assert_eq!(turn.winner, Some(Color::Green));

    let frozen = game.state().clone();
    for value in 1..=6 {
        assert_eq!(
            game.roll(roll(value)).unwrap_err(),
            RulesError::GameAlreadyOver { winner: Color::Green }
        );
    }
    assert_eq!(game.state(), &frozen);
    assert_eq!(game.winner(), Some(Color::Green));
}
