use crate::config::AppConfig;
use crate::error::{GameError, Result};
use crate::game::Game;
use crate::player::PlayerKind;
use std::io::{BufRead, Write};
use tracing::info;

/// 開始プロンプトで受け付けるコマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Start {
        player1: PlayerKind,
        player2: PlayerKind,
    },
}

/// `exit`, or a command word followed by exactly two player tokens.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    if line == "exit" {
        return Ok(Command::Exit);
    }

    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [_command, player1, player2] => Ok(Command::Start {
            player1: PlayerKind::parse(player1),
            player2: PlayerKind::parse(player2),
        }),
        _ => Err(GameError::BadParameters),
    }
}

/// `Input command:` のプロンプトを `exit` か入力終了まで繰り返す
pub fn run_command_loop<R: BufRead, W: Write>(
    config: &AppConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        write!(out, "Input command:")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("input closed at command prompt");
            return Ok(());
        }

        match parse_command(&line) {
            Ok(Command::Exit) => return Ok(()),
            Ok(Command::Start { player1, player2 }) => {
                let mut game = Game::from_config(player1, player2, config);
                match game.play(input, out) {
                    Ok(_) => {}
                    Err(GameError::InputClosed) => {
                        info!("input closed during game");
                        return Ok(());
                    }
                    Err(err) => return Err(err),
                }
            }
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_exit() {
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
        assert_eq!(parse_command("  exit\n").unwrap(), Command::Exit);
    }

    #[test]
    fn test_start() {
        assert_eq!(
            parse_command("start user hard").unwrap(),
            Command::Start {
                player1: PlayerKind::User,
                player2: PlayerKind::Hard,
            }
        );
        // 未知の種別は easy
        assert_eq!(
            parse_command("start medium whatever").unwrap(),
            Command::Start {
                player1: PlayerKind::Medium,
                player2: PlayerKind::Easy,
            }
        );
    }

    #[test]
    fn test_bad_parameters() {
        for line in ["", "start", "start user", "start user easy hard", "exit now"] {
            let err = parse_command(line).unwrap_err();
            assert!(matches!(err, GameError::BadParameters), "{:?}", line);
            assert_eq!(err.to_string(), "Bad parameters!");
        }
    }

    #[test]
    fn test_command_loop_plays_until_exit() {
        let config = AppConfig::default();
        let script = "start\nstart user user\n1 1\n2 1\n1 2\n2 2\n1 3\nexit\n";
        let mut input = Cursor::new(script);
        let mut out = Vec::new();
        run_command_loop(&config, &mut input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Input command:Bad parameters!\n"));
        assert!(text.contains("X wins\n"));
        assert!(text.ends_with("Input command:"));
    }

    #[test]
    fn test_command_loop_ends_on_closed_input() {
        let config = AppConfig::default();
        let mut input = Cursor::new("go hard hard\n");
        let mut out = Vec::new();
        run_command_loop(&config, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Making move level \"hard\""));
        assert!(text.contains("Draw\n"));
    }
}
