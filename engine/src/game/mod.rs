mod board;
mod bot_controller;
mod broadcaster;
mod game_state;
mod session;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board, WINNING_LINES, empty_board, get_available_moves};
pub use bot_controller::{BotInput, calculate_move};
pub use broadcaster::GameBroadcaster;
pub use game_state::GameState;
pub use session::{MatchSession, SessionCommand};
pub use session_rng::SessionRng;
pub use settings::{DEFAULT_BOT_DELAY_MS, OpponentMode, SessionSettings};
pub use types::{GameStatus, Mark, RoundOutcome, Scores, WinningLine};
pub use win_detector::{check_win, check_win_with_line, is_winning_for};
