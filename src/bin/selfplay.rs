//! AI同士の自己対局を並列に回して勝率を集計する
//!
//! Usage: selfplay <player1> <player2> [games]

use anyhow::Context;
use std::env;
use tictactoe_ai::config::AppConfig;
use tictactoe_ai::player::PlayerKind;
use tictactoe_ai::selfplay::{run_selfplay, SelfPlayConfig};

fn main() -> anyhow::Result<()> {
    tictactoe_ai::logging::init();
    let config = AppConfig::load_or_default();
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: selfplay <easy|medium|hard> <easy|medium|hard> [games]");
        std::process::exit(1);
    }

    let num_games = match args.get(3) {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!("invalid game count: {}", n))?,
        None => config.selfplay.num_games,
    };

    let stats = run_selfplay(SelfPlayConfig {
        num_games,
        player1: PlayerKind::parse(&args[1]),
        player2: PlayerKind::parse(&args[2]),
        seed: config.ai.seed,
    })?;

    println!("=== Self-Play Results ===");
    println!("{} (X) vs {} (O), {} games", stats.player1, stats.player2, stats.total_games);
    println!("X Wins: {} ({:.1}%)", stats.p1_wins, stats.percentage(stats.p1_wins));
    println!("O Wins: {} ({:.1}%)", stats.p2_wins, stats.percentage(stats.p2_wins));
    println!("Draws: {} ({:.1}%)", stats.draws, stats.percentage(stats.draws));
    println!("Avg Moves: {:.1}", stats.avg_moves);
    println!("Avg Time: {:.2}ms", stats.avg_time_ms);
    println!();
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
