use crate::core::CellSet;
use crate::logic::{empty_cells, is_won_by};
use crate::player::MoveStrategy;
use std::cell::Cell;
use tracing::debug;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// 探索結果 (スコアは探索開始時の手番側から見た値)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<usize>,
    pub score: i32,
    pub nodes: usize,
}

/// 全探索ミニマックス (枝刈りなし)
///
/// Each recursion level receives its own copy of both move sets, so a
/// speculative placement never outlives the branch that made it.
pub struct MinimaxAI {
    nodes_evaluated: Cell<usize>,
}

impl MinimaxAI {
    pub fn new() -> Self {
        Self {
            nodes_evaluated: Cell::new(0),
        }
    }

    /// Full search from the position where the owner of `own` is to move.
    pub fn search(&self, own: CellSet, opponent: CellSet) -> SearchResult {
        self.nodes_evaluated.set(0);
        let (score, best_move) = self.minimax(own, opponent, true);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes_evaluated.get(),
        }
    }

    /// 各空きマスに打った場合の評価値 (昇順)
    pub fn score_moves(&self, own: CellSet, opponent: CellSet) -> Vec<(usize, i32)> {
        empty_cells(own, opponent)
            .iter()
            .map(|cell| {
                let (score, _) = self.minimax(own.with(cell), opponent, false);
                (cell, score)
            })
            .collect()
    }

    fn minimax(&self, hero: CellSet, villain: CellSet, hero_to_move: bool) -> (i32, Option<usize>) {
        self.nodes_evaluated.set(self.nodes_evaluated.get() + 1);

        if is_won_by(villain) {
            return (LOSS_SCORE, None);
        }
        if is_won_by(hero) {
            return (WIN_SCORE, None);
        }
        let available = empty_cells(hero, villain);
        if available.is_empty() {
            return (DRAW_SCORE, None);
        }

        let mut best: Option<(usize, i32)> = None;
        for cell in available {
            let (score, _) = if hero_to_move {
                self.minimax(hero.with(cell), villain, false)
            } else {
                self.minimax(hero, villain.with(cell), true)
            };

            // 同点は先に見つけた手を優先
            let improves = match best {
                None => true,
                Some((_, best_score)) if hero_to_move => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((cell, score));
            }
        }

        match best {
            Some((cell, score)) => (score, Some(cell)),
            None => (DRAW_SCORE, None),
        }
    }
}

impl Default for MinimaxAI {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for MinimaxAI {
    fn select_move(&self, own: CellSet, opponent: CellSet) -> Option<usize> {
        let result = self.search(own, opponent);
        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "minimax search finished"
        );
        result
            .best_move
            .or_else(|| empty_cells(own, opponent).first())
    }

    fn level(&self) -> &str {
        "hard"
    }
}
