use crate::core::Board;
use crate::error::{GameError, Result};
use crate::logic::{parse_coordinates, validate_move};
use std::io::{BufRead, Write};

/// 標準入力などから座標を読み取り、検証済みのマス番号を返す
///
/// Parse and legality failures are returned without touching the board.
pub fn read_move<R: BufRead, W: Write>(board: &Board, input: &mut R, out: &mut W) -> Result<usize> {
    write!(out, "Enter the coordinates:")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GameError::InputClosed);
    }

    let (row, col) = parse_coordinates(&line)?;
    validate_move(board, row, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use std::io::Cursor;

    #[test]
    fn test_reads_valid_coordinates() {
        let board = Board::new();
        let mut input = Cursor::new("3 1\n");
        let mut out = Vec::new();
        assert_eq!(read_move(&board, &mut input, &mut out).unwrap(), 6);
        assert_eq!(String::from_utf8(out).unwrap(), "Enter the coordinates:");
    }

    #[test]
    fn test_reports_each_failure_kind() {
        let mut board = Board::new();
        board.apply_move(PlayerId::Player1, 4);
        let mut out = Vec::new();

        let mut input = Cursor::new("one two\n");
        assert!(matches!(
            read_move(&board, &mut input, &mut out),
            Err(GameError::ValueParse)
        ));

        let mut input = Cursor::new("4 1\n");
        assert!(matches!(
            read_move(&board, &mut input, &mut out),
            Err(GameError::InvalidCoordinates)
        ));

        let mut input = Cursor::new("99999999999999999999 1\n");
        let err = read_move(&board, &mut input, &mut out).unwrap_err();
        assert!(matches!(err, GameError::InvalidCoordinates));
        assert_eq!(err.to_string(), "Coordinates should be from 1 to 3!");

        let mut input = Cursor::new("2 2\n");
        assert!(matches!(
            read_move(&board, &mut input, &mut out),
            Err(GameError::OccupiedCell)
        ));
    }

    #[test]
    fn test_end_of_input() {
        let board = Board::new();
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let err = read_move(&board, &mut input, &mut out).unwrap_err();
        assert!(matches!(err, GameError::InputClosed));
        assert!(!err.is_retryable());
    }
}
