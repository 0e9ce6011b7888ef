use super::random::RandomAI;
use crate::core::lines::missing_cell;
use crate::core::{CellSet, WINNING_LINES};
use crate::player::MoveStrategy;
use tracing::debug;

/// あと一手で揃うラインを完成(攻め)または阻止(守り)し、無ければランダム
pub struct HeuristicAI {
    fallback: RandomAI,
}

impl HeuristicAI {
    pub fn new() -> Self {
        Self {
            fallback: RandomAI::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            fallback: RandomAI::with_seed(seed),
        }
    }

    /// Scans own moves first, then the opponent's, lines in definition order.
    /// Returns the first empty cell that completes a line for the scanned set.
    pub fn completing_move(own: CellSet, opponent: CellSet) -> Option<usize> {
        let occupied = own.union(opponent);
        for moves in [own, opponent] {
            if moves.len() <= 1 {
                continue;
            }
            for line in WINNING_LINES {
                if let Some(cell) = missing_cell(line, moves) {
                    if !occupied.contains(cell) {
                        return Some(cell);
                    }
                }
            }
        }
        None
    }
}

impl Default for HeuristicAI {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for HeuristicAI {
    fn select_move(&self, own: CellSet, opponent: CellSet) -> Option<usize> {
        if let Some(cell) = Self::completing_move(own, opponent) {
            debug!(cell, "heuristic found a completing cell");
            return Some(cell);
        }
        self.fallback.select_move(own, opponent)
    }

    fn level(&self) -> &str {
        "medium"
    }
}
