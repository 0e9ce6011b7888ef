use serde::{Deserialize, Serialize};
use std::fmt;

/// プレイヤーID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Player1, // 先手 (X)
    Player2, // 後手 (O)
}

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId::Player1
    }
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// 盤面表示用の記号
    pub fn symbol(self) -> char {
        match self {
            PlayerId::Player1 => 'X',
            PlayerId::Player2 => 'O',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 盤面座標 (1-indexed, 行・列)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub fn new(row: i64, col: i64) -> Self {
        Position { row, col }
    }

    /// Row-major cell index, or `None` when either coordinate is outside 1..=3.
    pub fn to_cell(self) -> Option<usize> {
        if !(1..=3).contains(&self.row) || !(1..=3).contains(&self.col) {
            return None;
        }
        Some(((self.row - 1) * 3 + (self.col - 1)) as usize)
    }

    pub fn from_cell(cell: usize) -> Option<Self> {
        if cell >= super::CELL_COUNT {
            return None;
        }
        Some(Position {
            row: (cell / 3) as i64 + 1,
            col: (cell % 3) as i64 + 1,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
