use crate::core::{Board, PlayerId, CELL_COUNT};
use crossterm::style::Stylize;
use std::io::Write;

/// 盤面を文字列で描画 (空きマスは空白)
pub fn render_board(board: &Board) -> String {
    render_with(board, |player| player.symbol().to_string())
}

/// `color` が true なら X をシアン、O をマゼンタで描画
pub fn render_board_styled(board: &Board, color: bool) -> String {
    if !color {
        return render_board(board);
    }
    render_with(board, |player| {
        let symbol = player.symbol().to_string();
        match player {
            PlayerId::Player1 => symbol.cyan().to_string(),
            PlayerId::Player2 => symbol.magenta().to_string(),
        }
    })
}

fn render_with<F>(board: &Board, mark: F) -> String
where
    F: Fn(PlayerId) -> String,
{
    let cells: Vec<String> = (0..CELL_COUNT)
        .map(|cell| board.owner(cell).map(&mark).unwrap_or_else(|| " ".to_string()))
        .collect();

    let mut out = String::from("---------\n");
    for row in cells.chunks(3) {
        out.push_str(&format!("| {} {} {} |\n", row[0], row[1], row[2]));
    }
    out.push_str("---------\n");
    out
}

pub fn print_board<W: Write>(out: &mut W, board: &Board, color: bool) -> std::io::Result<()> {
    write!(out, "{}", render_board_styled(board, color))?;
    out.flush()
}
