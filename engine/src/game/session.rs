use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::log;
use super::bot_controller::{BotInput, calculate_move};
use super::broadcaster::GameBroadcaster;
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::settings::{OpponentMode, SessionSettings};
use super::types::{Mark, Scores};
use super::win_detector::check_win_with_line;

/// The bot always plays O. The human (or, in two-player mode, whoever
/// holds the keyboard) opens as X.
const BOT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    SelectMode { mode: OpponentMode },
    Restart,
    PlaceMark { index: usize },
}

struct SessionState {
    game: GameState,
    scores: Scores,
    settings: SessionSettings,
    rng: SessionRng,
    round: u64,
}

pub struct MatchSession;

impl MatchSession {
    /// Drives the match until the command channel closes, then returns the
    /// final tally. Bot moves land through a delayed wake on an internal
    /// channel; a wake scheduled before a restart targets a dead round and
    /// is dropped.
    pub async fn run(
        settings: SessionSettings,
        rng: SessionRng,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> Scores {
        let (wake_tx, mut wake_rx) = mpsc::unbounded_channel::<u64>();

        let mut state = SessionState {
            game: GameState::new(),
            scores: Scores::default(),
            settings,
            rng,
            round: 0,
        };

        loop {
            tokio::select! {
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    handle_command(&mut state, command, &wake_tx, &broadcaster).await;
                }
                Some(round) = wake_rx.recv() => {
                    if round == state.round {
                        play_bot_turn(&mut state, &broadcaster).await;
                    }
                }
            }
        }

        state.scores
    }
}

async fn handle_command(
    state: &mut SessionState,
    command: SessionCommand,
    wake_tx: &mpsc::UnboundedSender<u64>,
    broadcaster: &impl GameBroadcaster,
) {
    match command {
        SessionCommand::SelectMode { mode } => {
            if state.settings.opponent != mode && state.settings.reset_scores_on_mode_change {
                state.scores = Scores::default();
                broadcaster.score_changed(state.scores).await;
            }
            state.settings.opponent = mode;
            start_new_round(state);
        }
        SessionCommand::Restart => {
            start_new_round(state);
        }
        SessionCommand::PlaceMark { index } => {
            handle_player_move(state, index, wake_tx, broadcaster).await;
        }
    }
}

fn start_new_round(state: &mut SessionState) {
    state.game = GameState::new();
    state.round += 1;
}

async fn handle_player_move(
    state: &mut SessionState,
    index: usize,
    wake_tx: &mpsc::UnboundedSender<u64>,
    broadcaster: &impl GameBroadcaster,
) {
    if state.settings.opponent.is_vs_bot() && state.game.current_mark == BOT_MARK {
        // Turn gate: clicks during the bot's turn, including its thinking
        // delay, are dropped without notification.
        log!("Ignored move to cell {} during the bot's turn", index);
        return;
    }

    if let Err(e) = apply_move(state, index, broadcaster).await {
        log!("Rejected move to cell {}: {}", index, e);
        return;
    }

    if state.game.is_over() || !state.settings.opponent.is_vs_bot() {
        return;
    }

    if state.settings.bot_delay_ms == 0 {
        play_bot_turn(state, broadcaster).await;
        return;
    }

    let delay = Duration::from_millis(state.settings.bot_delay_ms);
    let round = state.round;
    let wake_tx = wake_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = wake_tx.send(round);
    });
}

async fn play_bot_turn(state: &mut SessionState, broadcaster: &impl GameBroadcaster) {
    if state.game.is_over() || state.game.current_mark != BOT_MARK {
        return;
    }

    let input = BotInput::from_game_state(&state.game);
    let Some(index) = calculate_move(&input, &mut state.rng) else {
        return;
    };

    if let Err(e) = apply_move(state, index, broadcaster).await {
        log!("Bot failed to place mark at cell {}: {}", index, e);
    }
}

/// Applies one accepted move and emits the resulting notifications: the
/// filled cell, then on a terminal round the score change (wins only) and
/// the game-over report.
async fn apply_move(
    state: &mut SessionState,
    index: usize,
    broadcaster: &impl GameBroadcaster,
) -> Result<(), String> {
    let mark = state.game.current_mark;
    state.game.place_mark(index)?;
    broadcaster.cell_filled(index, mark).await;

    if let Some(outcome) = state.game.outcome() {
        if state.scores.record(outcome) {
            broadcaster.score_changed(state.scores).await;
        }
        let winning_line = check_win_with_line(&state.game.board);
        broadcaster.game_over(outcome, winning_line).await;
    }

    Ok(())
}
