pub mod ai;
pub mod controller;
pub mod human;

pub use ai::{HeuristicAI, MinimaxAI, RandomAI};
pub use controller::MoveStrategy;

use crate::core::{Board, PlayerId};
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::info;

/// プレイヤー種別 (開始コマンドのトークン)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    User,
    Easy,
    Medium,
    Hard,
}

impl PlayerKind {
    /// 未知のトークンは easy 扱い
    pub fn parse(token: &str) -> Self {
        match token {
            "user" => PlayerKind::User,
            "medium" => PlayerKind::Medium,
            "hard" => PlayerKind::Hard,
            _ => PlayerKind::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::User => "user",
            PlayerKind::Easy => "easy",
            PlayerKind::Medium => "medium",
            PlayerKind::Hard => "hard",
        }
    }

    pub fn is_human(self) -> bool {
        self == PlayerKind::User
    }
}

impl FromStr for PlayerKind {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PlayerKind::parse(s))
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 対局中に固定される指し手の供給元
pub enum Player {
    Human,
    Random(RandomAI),
    Heuristic(HeuristicAI),
    Optimal(MinimaxAI),
}

impl Player {
    /// `seed` makes the random and heuristic players reproducible.
    pub fn new(kind: PlayerKind, seed: Option<u64>) -> Self {
        match kind {
            PlayerKind::User => Player::Human,
            PlayerKind::Easy => Player::Random(match seed {
                Some(seed) => RandomAI::with_seed(seed),
                None => RandomAI::new(),
            }),
            PlayerKind::Medium => Player::Heuristic(match seed {
                Some(seed) => HeuristicAI::with_seed(seed),
                None => HeuristicAI::new(),
            }),
            PlayerKind::Hard => Player::Optimal(MinimaxAI::new()),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Human => PlayerKind::User,
            Player::Random(_) => PlayerKind::Easy,
            Player::Heuristic(_) => PlayerKind::Medium,
            Player::Optimal(_) => PlayerKind::Hard,
        }
    }

    /// AIなら指し手選択の実装を返す
    pub fn strategy(&self) -> Option<&dyn MoveStrategy> {
        match self {
            Player::Human => None,
            Player::Random(ai) => Some(ai as &dyn MoveStrategy),
            Player::Heuristic(ai) => Some(ai as &dyn MoveStrategy),
            Player::Optimal(ai) => Some(ai as &dyn MoveStrategy),
        }
    }

    /// 手番 `me` の次の一手。人間は `input` から読み、AIは難易度を `out` に表示してから選ぶ
    pub fn choose_move<R: BufRead, W: Write>(
        &self,
        board: &Board,
        me: PlayerId,
        input: &mut R,
        out: &mut W,
    ) -> Result<usize> {
        let strategy = match self.strategy() {
            Some(strategy) => strategy,
            None => return human::read_move(board, input, out),
        };

        writeln!(out, "Making move level \"{}\"", strategy.level())?;
        let cell = strategy
            .select_move(board.moves(me), board.moves(me.opponent()))
            .ok_or(GameError::NoEmptyCells)?;
        info!(player = %me, level = strategy.level(), cell, "AI move");
        Ok(cell)
    }
}
