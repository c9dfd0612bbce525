use super::types::{Mark, RoundOutcome, Scores, WinningLine};

/// Notification surface toward the presentation collaborator. The session
/// calls these after every accepted state change; rejected moves are never
/// reported. The collaborator owns all rendering.
#[allow(async_fn_in_trait)]
pub trait GameBroadcaster: Send + Sync + 'static {
    async fn cell_filled(&self, index: usize, mark: Mark);

    async fn score_changed(&self, scores: Scores);

    async fn game_over(&self, outcome: RoundOutcome, winning_line: Option<WinningLine>);
}
