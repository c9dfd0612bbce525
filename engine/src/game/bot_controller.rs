use super::board::{Board, CENTER_CELL, CORNER_CELLS, get_available_moves};
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::Mark;
use super::win_detector::is_winning_for;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

/// Greedy one-ply move selection. Priority order is part of the behavioral
/// contract: win now, block the opponent, take the center, take the first
/// free corner of {0, 2, 6, 8}, then a random free cell. Candidate cells
/// are probed in index order with the hypothetical mark undone after each
/// probe. A fork-capable opponent can still beat this.
pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    let human_mark = input.bot_mark.opponent()?;
    let mut board = input.board;

    if let Some(index) = find_winning_move(&mut board, input.bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut board, human_mark, &available_moves) {
        return Some(index);
    }

    if board[CENTER_CELL] == Mark::Empty {
        return Some(CENTER_CELL);
    }

    if let Some(&index) = CORNER_CELLS.iter().find(|&&corner| board[corner] == Mark::Empty) {
        return Some(index);
    }

    let pick = rng.random_range(0..available_moves.len());
    Some(available_moves[pick])
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board[index] = mark;
        let wins = is_winning_for(board, mark);
        board[index] = Mark::Empty;

        if wins {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::empty_board;

    fn board_from(cells: [char; 9]) -> Board {
        cells.map(|c| match c {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        })
    }

    fn select(board: Board, bot_mark: Mark) -> Option<usize> {
        let input = BotInput { board, bot_mark };
        let mut rng = SessionRng::new(42);
        calculate_move(&input, &mut rng)
    }

    #[test]
    fn test_takes_winning_cell() {
        let board = board_from(['O', 'O', '.', 'X', 'X', '.', '.', '.', '.']);
        assert_eq!(select(board, Mark::O), Some(2));
    }

    #[test]
    fn test_win_beats_block() {
        // O can win at 2; X threatens at 5. Winning comes first.
        let board = board_from(['O', 'O', '.', 'X', 'X', '.', '.', '.', '.']);
        assert_eq!(select(board, Mark::O), Some(2));
        let board = board_from(['X', 'X', '.', 'O', 'O', '.', '.', '.', '.']);
        assert_eq!(select(board, Mark::O), Some(5));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        let board = board_from(['X', 'X', '.', '.', '.', '.', '.', '.', '.']);
        assert_eq!(select(board, Mark::O), Some(2));
    }

    #[test]
    fn test_probes_cells_in_index_order() {
        // Several blockable threats at once (0, 2, 4 and 7); the probe
        // walks cells 0-8, so the lowest blocking index wins.
        let board = board_from(['.', '.', '.', 'X', '.', 'X', 'X', '.', 'X']);
        assert_eq!(select(board, Mark::O), Some(0));
    }

    #[test]
    fn test_prefers_center_when_no_threats() {
        let mut board = empty_board();
        board[0] = Mark::X;
        assert_eq!(select(board, Mark::O), Some(CENTER_CELL));
    }

    #[test]
    fn test_takes_first_ever_move_in_center() {
        assert_eq!(select(empty_board(), Mark::O), Some(CENTER_CELL));
    }

    #[test]
    fn test_corners_in_fixed_order() {
        // Center taken, no win or block anywhere.
        let board = board_from(['.', '.', '.', '.', 'X', '.', '.', '.', '.']);
        assert_eq!(select(board, Mark::O), Some(0));

        let board = board_from(['X', '.', '.', '.', 'O', '.', '.', '.', '.']);
        assert_eq!(select(board, Mark::X), Some(2));

        let board = board_from(['X', 'O', 'X', '.', 'O', '.', '.', 'X', '.']);
        assert_eq!(select(board, Mark::O), Some(6));
    }

    #[test]
    fn test_fallback_picks_an_empty_edge() {
        // Center and all corners taken and every line already holds both
        // marks, so the random fallback must pick one of the free edges.
        let board = board_from(['X', 'O', 'X', '.', 'X', '.', 'O', 'X', 'O']);
        let index = select(board, Mark::O).unwrap();
        assert!([3, 5].contains(&index));
    }

    #[test]
    fn test_fallback_is_reproducible_with_fixed_seed() {
        let board = board_from(['X', 'O', 'X', '.', 'X', '.', 'O', 'X', 'O']);
        let first = select(board, Mark::O);
        let second = select(board, Mark::O);
        assert_eq!(first, second);
    }

    #[test]
    fn test_never_selects_occupied_cell() {
        // Drive full games where the bot plays both sides; every selection
        // must land on an empty cell.
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let mut board = empty_board();
            let mut mark = Mark::X;
            loop {
                let input = BotInput {
                    board,
                    bot_mark: mark,
                };
                let Some(index) = calculate_move(&input, &mut rng) else {
                    break;
                };
                assert_eq!(board[index], Mark::Empty);
                board[index] = mark;
                if is_winning_for(&board, mark) {
                    break;
                }
                mark = mark.opponent().unwrap();
            }
        }
    }

    #[test]
    fn test_empty_board_none_only_when_full() {
        let board = [Mark::X; 9];
        let input = BotInput {
            board,
            bot_mark: Mark::O,
        };
        let mut rng = SessionRng::new(42);
        assert_eq!(calculate_move(&input, &mut rng), None);
    }
}
