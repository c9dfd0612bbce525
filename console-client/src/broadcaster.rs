use std::sync::{Arc, Mutex};

use engine::game::{Board, GameBroadcaster, Mark, RoundOutcome, Scores, WinningLine, empty_board};

/// The client's own mirror of the grid, fed purely by notifications.
#[derive(Clone)]
pub struct BoardView {
    cells: Arc<Mutex<Board>>,
}

impl BoardView {
    pub fn clear(&self) {
        *self.cells.lock().unwrap() = empty_board();
    }

    pub fn render(&self) {
        let cells = *self.cells.lock().unwrap();
        println!();
        for row in 0..3 {
            let base = row * 3;
            println!(
                " {} | {} | {}",
                cells[base].as_char(),
                cells[base + 1].as_char(),
                cells[base + 2].as_char()
            );
            if row < 2 {
                println!("---+---+---");
            }
        }
        println!();
    }
}

pub struct ConsoleBroadcaster {
    view: BoardView,
}

impl ConsoleBroadcaster {
    pub fn new() -> Self {
        Self {
            view: BoardView {
                cells: Arc::new(Mutex::new(empty_board())),
            },
        }
    }

    pub fn view(&self) -> BoardView {
        self.view.clone()
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn cell_filled(&self, index: usize, mark: Mark) {
        {
            let mut cells = self.view.cells.lock().unwrap();
            cells[index] = mark;
        }
        self.view.render();
    }

    async fn score_changed(&self, scores: Scores) {
        println!("Score - X: {} O: {}", scores.x, scores.o);
    }

    async fn game_over(&self, outcome: RoundOutcome, winning_line: Option<WinningLine>) {
        match outcome {
            RoundOutcome::Win(mark) => match winning_line {
                Some(line) => println!(
                    "{} wins on cells {}-{}-{}!",
                    mark.as_char(),
                    line.cells[0],
                    line.cells[1],
                    line.cells[2]
                ),
                None => println!("{} wins!", mark.as_char()),
            },
            RoundOutcome::Draw => println!("It's a draw!"),
        }
        println!("Type 'restart' for another round.");
    }
}
