use engine::game::{OpponentMode, SessionCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientCommand {
    Session(SessionCommand),
    Quit,
}

pub fn parse_line(line: &str) -> Option<ClientCommand> {
    let trimmed = line.trim();

    match trimmed {
        "quit" | "exit" | "q" => return Some(ClientCommand::Quit),
        "restart" | "r" => return Some(ClientCommand::Session(SessionCommand::Restart)),
        "mode pvp" => {
            return Some(ClientCommand::Session(SessionCommand::SelectMode {
                mode: OpponentMode::TwoPlayers,
            }));
        }
        "mode bot" => {
            return Some(ClientCommand::Session(SessionCommand::SelectMode {
                mode: OpponentMode::VsBot,
            }));
        }
        _ => {}
    }

    let index: usize = trimmed.parse().ok()?;
    if index > 8 {
        return None;
    }
    Some(ClientCommand::Session(SessionCommand::PlaceMark { index }))
}
