use crate::core::{Board, CellSet, PlayerId, Position, WINNING_LINES};
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// 対局状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Draw,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// いずれかの勝利ラインを含んでいれば true
pub fn is_won_by(moves: CellSet) -> bool {
    WINNING_LINES.iter().any(|&line| moves.is_superset(line))
}

/// どちらの集合にも含まれないマス
pub fn empty_cells(a: CellSet, b: CellSet) -> CellSet {
    a.union(b).complement()
}

/// 直前に指した `mover` の勝ちを先に、次に引き分けを判定する
pub fn evaluate_status(board: &Board, mover: PlayerId) -> GameStatus {
    if is_won_by(board.moves(mover)) {
        GameStatus::Won(mover)
    } else if board.empty_cells().is_empty() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// "row col" 形式の入力を二つの整数に変換
///
/// An integer too large for `i64` is still a number, just off the board, so it
/// reports `InvalidCoordinates` once both tokens are known to be integers.
pub fn parse_coordinates(line: &str) -> Result<(i64, i64)> {
    let values: Vec<_> = line.split_whitespace().map(str::parse::<i64>).collect();

    let mut out_of_range = false;
    for value in &values {
        if let Err(err) = value {
            match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range = true,
                _ => return Err(GameError::ValueParse),
            }
        }
    }

    match values.as_slice() {
        [_, _] if out_of_range => Err(GameError::InvalidCoordinates),
        [Ok(row), Ok(col)] => Ok((*row, *col)),
        _ => Err(GameError::ValueParse),
    }
}

/// 座標の範囲と空きマスを検証してマス番号を返す。盤面は変更しない
pub fn validate_move(board: &Board, row: i64, col: i64) -> Result<usize> {
    let cell = Position::new(row, col)
        .to_cell()
        .ok_or(GameError::InvalidCoordinates)?;
    if board.is_occupied(cell) {
        return Err(GameError::OccupiedCell);
    }
    Ok(cell)
}
