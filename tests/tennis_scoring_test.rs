//! Tests for the tennis scoring state machine.

use strictly_tennis::{Match, MatchError, POINTS_TO_WIN_GAME};

const PLAYERS: [&str; 2] = ["player 1", "player 2"];

/// Points needed to win a set to love.
const POINTS_TO_WIN_SET: u32 = 6 * POINTS_TO_WIN_GAME;

fn new_match() -> Match {
    Match::new(PLAYERS[0], PLAYERS[1]).expect("distinct players")
}

fn points(game: &mut Match, player: &str, count: u32) {
    for _ in 0..count {
        game.point_won_by(player).expect("registered player");
    }
}

fn set_deuce(game: &mut Match) {
    game.reset();
    for _ in 0..3 {
        game.point_won_by(PLAYERS[0]).unwrap();
        game.point_won_by(PLAYERS[1]).unwrap();
    }
}

#[test]
fn test_fresh_match() {
    assert_eq!(new_match().score(), "0-0, 0-0");
}

#[test]
fn test_point_scored() {
    let mut game = new_match();
    game.point_won_by(PLAYERS[0]).unwrap();
    assert_eq!(game.score(), "0-0, 15-0");
}

#[test]
fn test_winning_game() {
    let expected = [
        [
            "0-0, 0-0",
            "0-0, 15-0",
            "0-0, 30-0",
            "0-0, 40-0",
            "1-0, 0-0",
        ],
        [
            "0-0, 0-0",
            "0-0, 0-15",
            "0-0, 0-30",
            "0-0, 0-40",
            "0-1, 0-0",
        ],
    ];

    let mut game = new_match();
    for (player, scores) in PLAYERS.iter().zip(expected) {
        for (i, score) in scores.iter().enumerate() {
            assert_eq!(game.score(), *score);
            if i < scores.len() - 1 {
                game.point_won_by(player).unwrap();
            }
        }
        game.reset();
    }
}

#[test]
fn test_deuce() {
    let mut game = new_match();
    set_deuce(&mut game);
    assert_eq!(game.score(), "0-0, Deuce");
}

#[test]
fn test_advantage() {
    let mut game = new_match();

    set_deuce(&mut game);
    game.point_won_by(PLAYERS[0]).unwrap();
    assert_eq!(game.score(), "0-0, Advantage player 1");

    set_deuce(&mut game);
    game.point_won_by(PLAYERS[1]).unwrap();
    assert_eq!(game.score(), "0-0, Advantage player 2");
}

#[test]
fn test_advantage_back_to_deuce() {
    let mut game = new_match();
    set_deuce(&mut game);
    game.point_won_by(PLAYERS[1]).unwrap();
    game.point_won_by(PLAYERS[0]).unwrap();
    assert_eq!(game.score(), "0-0, Deuce");
}

#[test]
fn test_set_win() {
    let mut game = new_match();

    points(&mut game, PLAYERS[0], POINTS_TO_WIN_SET - 1);
    assert_eq!(game.score(), "5-0, 40-0");
    game.point_won_by(PLAYERS[0]).unwrap();
    assert_eq!(game.score(), "0-0, 0-0");

    points(&mut game, PLAYERS[1], POINTS_TO_WIN_SET - 1);
    assert_eq!(game.score(), "0-5, 0-40");
    game.point_won_by(PLAYERS[1]).unwrap();
    assert_eq!(game.score(), "0-0, 0-0");
}

#[test]
fn test_close_set_win() {
    let mut game = new_match();
    points(&mut game, PLAYERS[0], 5 * POINTS_TO_WIN_GAME);
    points(&mut game, PLAYERS[1], 5 * POINTS_TO_WIN_GAME + 3);
    assert_eq!(game.score(), "5-5, 0-40");

    game.point_won_by(PLAYERS[1]).unwrap();
    assert_eq!(game.score(), "5-6, 0-0");

    // 5-7 wins the set outright; the whole match resets.
    points(&mut game, PLAYERS[1], POINTS_TO_WIN_GAME);
    assert_eq!(game.score(), "0-0, 0-0");
    assert!(!game.is_tiebreak());
}

#[test]
fn test_six_all_starts_tiebreak_instead_of_reset() {
    let mut game = new_match();
    points(&mut game, PLAYERS[0], 5 * POINTS_TO_WIN_GAME);
    points(&mut game, PLAYERS[1], 6 * POINTS_TO_WIN_GAME);
    assert_eq!(game.score(), "5-6, 0-0");

    points(&mut game, PLAYERS[0], POINTS_TO_WIN_GAME);
    assert!(game.is_tiebreak());
    assert_eq!(game.score(), "6-6, Tiebreaker 0-0");
}

#[test]
fn test_tiebreaker() {
    let mut game = new_match();
    points(&mut game, PLAYERS[0], 5 * POINTS_TO_WIN_GAME);
    points(&mut game, PLAYERS[1], 6 * POINTS_TO_WIN_GAME);
    points(&mut game, PLAYERS[0], POINTS_TO_WIN_GAME);
    assert_eq!(game.score(), "6-6, Tiebreaker 0-0");

    for _ in 0..5 {
        game.point_won_by(PLAYERS[0]).unwrap();
        game.point_won_by(PLAYERS[1]).unwrap();
    }
    assert_eq!(game.score(), "6-6, Tiebreaker 5-5");

    game.point_won_by(PLAYERS[0]).unwrap();
    assert_eq!(game.score(), "6-6, Tiebreaker 6-5");

    game.point_won_by(PLAYERS[0]).unwrap();
    assert_eq!(game.score(), "0-0, 0-0");
}

#[test]
fn test_tiebreak_to_love() {
    let mut game = new_match();
    points(&mut game, PLAYERS[0], 5 * POINTS_TO_WIN_GAME);
    points(&mut game, PLAYERS[1], 6 * POINTS_TO_WIN_GAME);
    points(&mut game, PLAYERS[0], POINTS_TO_WIN_GAME);

    points(&mut game, PLAYERS[1], 6);
    assert_eq!(game.score(), "6-6, Tiebreaker 0-6");
    game.point_won_by(PLAYERS[1]).unwrap();
    assert_eq!(game.score(), "0-0, 0-0");
}

#[test]
fn test_score_is_idempotent() {
    let mut game = new_match();
    points(&mut game, PLAYERS[1], 2);
    let first = game.score();
    assert_eq!(game.score(), first);
    assert_eq!(game.to_string(), first);
}

#[test]
fn test_invalid_player_leaves_state_unchanged() {
    let mut game = new_match();
    points(&mut game, PLAYERS[0], 2);
    let before = game.clone();

    let result = game.point_won_by("player 3");
    assert_eq!(
        result,
        Err(MatchError::InvalidPlayer("player 3".to_string()))
    );
    assert_eq!(game, before);
    assert_eq!(game.score(), "0-0, 30-0");
}

#[test]
fn test_players_render_in_registration_order() {
    let mut game = Match::new("zverev", "alcaraz").unwrap();
    points(&mut game, "alcaraz", 3);
    points(&mut game, "zverev", 1);
    assert_eq!(game.score(), "0-0, 15-40");
}

#[test]
fn test_replay_builds_same_state() {
    let winners = ["player 1", "player 2", "player 1", "player 1"];
    let replayed = Match::replay(PLAYERS[0], PLAYERS[1], winners).unwrap();

    let mut game = new_match();
    for winner in winners {
        game.point_won_by(winner).unwrap();
    }
    assert_eq!(replayed, game);
    assert_eq!(replayed.score(), "0-0, 40-15");
}

#[test]
fn test_construction_rejects_invalid_players() {
    assert!(Match::new("", "player 2").is_err());
    assert!(Match::new("player 1", "player 1").is_err());
}
