use super::board::{Board, empty_board, is_board_full};
use super::types::{GameStatus, Mark, RoundOutcome};
use super::win_detector::check_win;

/// State of a single round. X always opens; the session layer owns the
/// tally and the opponent mode.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Round is already over".to_string());
        }

        if index >= self.board.len() {
            return Err(format!("Cell index {} is out of range", index));
        }

        if self.board[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board[index] = self.current_mark;

        self.check_round_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.status {
            GameStatus::XWon => Some(RoundOutcome::Win(Mark::X)),
            GameStatus::OWon => Some(RoundOutcome::Win(Mark::O)),
            GameStatus::Draw => Some(RoundOutcome::Draw),
            GameStatus::InProgress => None,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_round_over(&mut self) {
        if let Some(winner) = check_win(&self.board) {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}
