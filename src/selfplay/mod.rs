use crate::core::PlayerId;
use crate::game::Game;
use crate::logic::GameStatus;
use crate::player::{Player, PlayerKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub player1: PlayerKind,
    pub player2: PlayerKind,
    /// 各対局のシードは seed + 2 * 対局番号 (+1 は後手)
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<PlayerId>,
    pub moves: Vec<usize>,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub player1: String,
    pub player2: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(PlayerId::Player1) => self.p1_wins += 1,
            Some(PlayerId::Player2) => self.p2_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves.len()).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn percentage(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        count as f64 / self.total_games as f64 * 100.0
    }
}

pub fn run_selfplay(config: SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    if config.player1.is_human() || config.player2.is_human() {
        anyhow::bail!("self-play needs two AI players");
    }

    info!(
        games = config.num_games,
        player1 = %config.player1,
        player2 = %config.player2,
        "starting self-play"
    );

    // 対局ごとに独立した盤面を持つので並列に回せる
    let results = (0..config.num_games)
        .into_par_iter()
        .map(|game_num| run_single_game(&config, game_num))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stats = SelfPlayStats::new();
    stats.player1 = config.player1.to_string();
    stats.player2 = config.player2.to_string();
    for result in results {
        stats.add_result(result);
    }

    info!(
        p1_wins = stats.p1_wins,
        p2_wins = stats.p2_wins,
        draws = stats.draws,
        "self-play finished"
    );
    Ok(stats)
}

fn run_single_game(config: &SelfPlayConfig, game_num: usize) -> anyhow::Result<GameResult> {
    let start_time = Instant::now();
    let base = config
        .seed
        .map(|seed| seed.wrapping_add(2 * game_num as u64));

    let mut game = Game::new(
        Player::new(config.player1, base),
        Player::new(config.player2, base.map(|seed| seed.wrapping_add(1))),
    );
    let status = game.play_silent()?;

    let winner = match status {
        GameStatus::Won(player) => Some(player),
        _ => None,
    };
    debug!(game_num, ?winner, moves = ?game.history, "self-play game done");

    Ok(GameResult {
        winner,
        moves: game.history,
        time_ms: start_time.elapsed().as_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(player1: PlayerKind, player2: PlayerKind, num_games: usize) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games,
            player1,
            player2,
            seed: Some(2024),
        }
    }

    #[test]
    fn test_counts_add_up() {
        let stats = run_selfplay(config(PlayerKind::Easy, PlayerKind::Medium, 40)).unwrap();
        assert_eq!(stats.total_games, 40);
        assert_eq!(stats.p1_wins + stats.p2_wins + stats.draws, 40);
        assert_eq!(stats.games.len(), 40);
        assert!(stats.avg_moves >= 5.0 && stats.avg_moves <= 9.0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = run_selfplay(config(PlayerKind::Easy, PlayerKind::Easy, 10)).unwrap();
        let b = run_selfplay(config(PlayerKind::Easy, PlayerKind::Easy, 10)).unwrap();
        let moves_a: Vec<_> = a.games.iter().map(|g| g.moves.clone()).collect();
        let moves_b: Vec<_> = b.games.iter().map(|g| g.moves.clone()).collect();
        assert_eq!(moves_a, moves_b);
    }

    #[test]
    fn test_hard_never_loses_to_easy() {
        let stats = run_selfplay(config(PlayerKind::Easy, PlayerKind::Hard, 8)).unwrap();
        assert_eq!(stats.p1_wins, 0);
    }

    #[test]
    fn test_rejects_human_players() {
        assert!(run_selfplay(config(PlayerKind::User, PlayerKind::Hard, 1)).is_err());
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = SelfPlayStats::new();
        stats.add_result(GameResult {
            winner: Some(PlayerId::Player2),
            moves: vec![0, 4, 1, 2, 3, 6],
            time_ms: 4,
        });
        stats.add_result(GameResult {
            winner: None,
            moves: vec![0; 9],
            time_ms: 2,
        });
        assert_eq!(stats.avg_moves, 7.5);
        assert_eq!(stats.avg_time_ms, 3.0);
        assert_eq!(stats.percentage(stats.draws), 50.0);

        let json = serde_json::to_string(&stats).unwrap();
        let back: SelfPlayStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.p2_wins, 1);
        assert_eq!(back.games.len(), 2);
    }
}
