use super::cell_set::CellSet;

/// 勝利ライン (行 → 列 → 対角線 の定義順)
pub const WINNING_LINES: [CellSet; 8] = [
    CellSet::from_cells([0, 1, 2]),
    CellSet::from_cells([3, 4, 5]),
    CellSet::from_cells([6, 7, 8]),
    CellSet::from_cells([0, 3, 6]),
    CellSet::from_cells([1, 4, 7]),
    CellSet::from_cells([2, 5, 8]),
    CellSet::from_cells([0, 4, 8]),
    CellSet::from_cells([2, 4, 6]),
];

/// The single cell `moves` still needs to complete `line`, if exactly one is missing.
pub fn missing_cell(line: CellSet, moves: CellSet) -> Option<usize> {
    let missing = line.difference(moves);
    if missing.len() == 1 {
        missing.first()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_has_three_cells() {
        for line in WINNING_LINES {
            assert_eq!(line.len(), 3);
        }
    }

    #[test]
    fn test_lines_are_distinct() {
        for (i, a) in WINNING_LINES.iter().enumerate() {
            for b in &WINNING_LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_missing_cell() {
        let row = WINNING_LINES[0];
        assert_eq!(missing_cell(row, CellSet::from_cells([0, 1])), Some(2));
        assert_eq!(missing_cell(row, CellSet::from_cells([0, 2, 5])), Some(1));
        assert_eq!(missing_cell(row, CellSet::from_cells([0])), None);
        assert_eq!(missing_cell(row, CellSet::from_cells([0, 1, 2])), None);
    }
}
