use super::cell_set::CellSet;
use super::types::PlayerId;
use serde::{Deserialize, Serialize};

/// 盤面
///
/// 各プレイヤーが占有しているマスの集合を持つ。二つの集合は常に素。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// 先手 (X) の占有マス
    pub x_moves: CellSet,
    /// 後手 (O) の占有マス
    pub o_moves: CellSet,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self, player: PlayerId) -> CellSet {
        match player {
            PlayerId::Player1 => self.x_moves,
            PlayerId::Player2 => self.o_moves,
        }
    }

    fn moves_mut(&mut self, player: PlayerId) -> &mut CellSet {
        match player {
            PlayerId::Player1 => &mut self.x_moves,
            PlayerId::Player2 => &mut self.o_moves,
        }
    }

    /// 着手。呼び出し側が空きマスであることを保証する
    pub fn apply_move(&mut self, player: PlayerId, cell: usize) {
        debug_assert!(!self.is_occupied(cell), "cell {} already occupied", cell);
        self.moves_mut(player).insert(cell);
    }

    /// 探索用の巻き戻し。実際の対局では使わない
    pub fn undo_move(&mut self, player: PlayerId, cell: usize) {
        self.moves_mut(player).remove(cell);
    }

    pub fn occupied(&self) -> CellSet {
        self.x_moves.union(self.o_moves)
    }

    pub fn is_occupied(&self, cell: usize) -> bool {
        self.occupied().contains(cell)
    }

    pub fn owner(&self, cell: usize) -> Option<PlayerId> {
        if self.x_moves.contains(cell) {
            Some(PlayerId::Player1)
        } else if self.o_moves.contains(cell) {
            Some(PlayerId::Player2)
        } else {
            None
        }
    }

    pub fn empty_cells(&self) -> CellSet {
        crate::logic::empty_cells(self.x_moves, self.o_moves)
    }

    pub fn move_count(&self) -> usize {
        self.x_moves.len() + self.o_moves.len()
    }
}
