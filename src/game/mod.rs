use crate::config::AppConfig;
use crate::core::{Board, PlayerId, CELL_COUNT};
use crate::display::print_board;
use crate::error::{GameError, Result};
use crate::logic::{evaluate_status, GameStatus};
use crate::player::{Player, PlayerKind};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};

pub struct Game {
    pub board: Board,
    pub current_player: PlayerId,
    pub status: GameStatus,
    /// 着手されたマスの順序
    pub history: Vec<usize>,
    pub color: bool,
    pub think_delay: Duration,
    players: [Player; 2],
}

impl Game {
    pub fn new(player1: Player, player2: Player) -> Self {
        Game {
            board: Board::new(),
            current_player: PlayerId::Player1,
            status: GameStatus::InProgress,
            history: Vec::new(),
            color: false,
            think_delay: Duration::ZERO,
            players: [player1, player2],
        }
    }

    pub fn from_config(player1: PlayerKind, player2: PlayerKind, config: &AppConfig) -> Self {
        let mut game = Game::new(
            Player::new(player1, config.seed_for(0)),
            Player::new(player2, config.seed_for(1)),
        );
        game.color = config.display.color;
        game.think_delay = Duration::from_millis(config.ai.think_delay_ms);
        game
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::Player1 => &self.players[0],
            PlayerId::Player2 => &self.players[1],
        }
    }

    /// 手番側の一手を適用し、勝敗判定をして手番を進める
    ///
    /// The turn only passes when the game is still in progress afterwards.
    pub fn apply(&mut self, cell: usize) -> Result<GameStatus> {
        if self.status.is_finished() {
            return Err(GameError::GameOver);
        }
        if cell >= CELL_COUNT {
            return Err(GameError::InvalidCell { cell });
        }
        if self.board.is_occupied(cell) {
            return Err(GameError::OccupiedCell);
        }

        let mover = self.current_player;
        self.board.apply_move(mover, cell);
        self.history.push(cell);
        self.status = evaluate_status(&self.board, mover);
        debug!(player = %mover, cell, status = ?self.status, "move applied");

        if !self.status.is_finished() {
            self.current_player = mover.opponent();
        }
        Ok(self.status)
    }

    /// 対話的に一局を進める。人間の入力ミスはその場で報告して同じ手番でやり直す
    pub fn play<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<GameStatus> {
        info!(
            x = %self.players[0].kind(),
            o = %self.players[1].kind(),
            "game started"
        );
        print_board(out, &self.board, self.color)?;

        while !self.status.is_finished() {
            let mover = self.current_player;
            let player = self.player(mover);

            if player.strategy().is_some() && !self.think_delay.is_zero() {
                std::thread::sleep(self.think_delay);
            }

            let cell = match player.choose_move(&self.board, mover, input, out) {
                Ok(cell) => cell,
                Err(err) if err.is_retryable() => {
                    debug!(player = %mover, "rejected input: {}", err);
                    writeln!(out, "{}", err)?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            self.apply(cell)?;
            print_board(out, &self.board, self.color)?;
        }

        self.report(out)?;
        Ok(self.status)
    }

    /// AI同士の対局を表示なしで最後まで進める
    pub fn play_silent(&mut self) -> Result<GameStatus> {
        while !self.status.is_finished() {
            let mover = self.current_player;
            let strategy = self
                .player(mover)
                .strategy()
                .ok_or(GameError::NeedsHuman { player: mover })?;
            let cell = strategy
                .select_move(self.board.moves(mover), self.board.moves(mover.opponent()))
                .ok_or(GameError::NoEmptyCells)?;
            self.apply(cell)?;
        }
        Ok(self.status)
    }

    fn report<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.status {
            GameStatus::Won(player) => writeln!(out, "{} wins", player)?,
            GameStatus::Draw => writeln!(out, "Draw")?,
            GameStatus::InProgress => return Ok(()),
        }
        info!(status = ?self.status, moves = self.history.len(), "game finished");
        Ok(())
    }
}
