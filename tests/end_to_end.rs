//! Whole games driven through the turn controller.

use std::io::Cursor;
use tictactoe_ai::core::{CellSet, PlayerId};
use tictactoe_ai::game::Game;
use tictactoe_ai::logic::GameStatus;
use tictactoe_ai::player::{HeuristicAI, MinimaxAI, MoveStrategy, Player, PlayerKind};

fn humans() -> Game {
    Game::new(
        Player::new(PlayerKind::User, None),
        Player::new(PlayerKind::User, None),
    )
}

#[test]
fn test_win_on_anti_diagonal_is_reported_at_completing_move() {
    let mut game = humans();
    // X: 4, 2, 6 → {2, 4, 6}
    for cell in [4, 0, 2, 8] {
        assert_eq!(game.apply(cell).unwrap(), GameStatus::InProgress);
    }
    assert_eq!(game.apply(6).unwrap(), GameStatus::Won(PlayerId::Player1));
    assert_eq!(game.history, vec![4, 0, 2, 8, 6]);
}

#[test]
fn test_scripted_human_game_output() {
    let mut game = humans();
    // X 2,2 / O 1,1 / X 3,3 (occupied retry: 1,1) / ...
    let mut input = Cursor::new("2 2\n1 1\n3 3\n1 3\n1 1\n3 1\n1 2\n");
    let mut out = Vec::new();
    let status = game.play(&mut input, &mut out).unwrap();

    // X: 4, 8, 6   O: 0, 2, 1 → O completes the top row
    assert_eq!(status, GameStatus::Won(PlayerId::Player2));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("| O O O |"));
    assert!(text.ends_with("O wins\n"));
    // 1 initial render + 6 applied moves
    assert_eq!(text.matches("| ").count() / 3, 7);
}

#[test]
fn test_optimal_self_play_draws() {
    let mut game = Game::new(
        Player::new(PlayerKind::Hard, None),
        Player::new(PlayerKind::Hard, None),
    );
    let mut input = Cursor::new("");
    let mut out = Vec::new();
    assert_eq!(game.play(&mut input, &mut out).unwrap(), GameStatus::Draw);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Making move level \"hard\"").count(), 9);
    assert!(text.ends_with("Draw\n"));
}

#[test]
fn test_hard_beats_or_draws_medium_from_both_sides() {
    for seed in 0..5 {
        let mut game = Game::new(
            Player::new(PlayerKind::Hard, None),
            Player::new(PlayerKind::Medium, Some(seed)),
        );
        assert_ne!(game.play_silent().unwrap(), GameStatus::Won(PlayerId::Player2));

        let mut game = Game::new(
            Player::new(PlayerKind::Medium, Some(seed)),
            Player::new(PlayerKind::Hard, None),
        );
        assert_ne!(game.play_silent().unwrap(), GameStatus::Won(PlayerId::Player1));
    }
}

#[test]
fn test_minimax_takes_first_winning_cell_not_fastest() {
    let own = CellSet::from_cells([0, 4]);
    let opponent = CellSet::from_cells([1, 2]);
    // 8 wins at once, but 3 (triple threat) also wins and comes first
    assert_eq!(HeuristicAI::with_seed(1).select_move(own, opponent), Some(8));
    let result = MinimaxAI::new().search(own, opponent);
    assert_eq!(result.score, 10);
    assert_eq!(result.best_move, Some(3));
}
