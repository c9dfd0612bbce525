mod broadcaster;
mod commands;
mod config;

use clap::Parser;
use engine::game::{MatchSession, OpponentMode, SessionCommand, SessionRng};
use engine::log;
use engine::logger::init_logger;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use broadcaster::ConsoleBroadcaster;
use commands::{ClientCommand, parse_line};
use config::get_config_manager;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_console", about = "Terminal tic-tac-toe client")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Start in two-player mode regardless of the configured opponent
    #[arg(long)]
    two_players: bool,

    /// Override the bot thinking delay in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Fixed RNG seed, for reproducing a bot's fallback moves
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    init_logger(None);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = config_manager.get_config()?;

    let mut settings = config.game;
    if args.two_players {
        settings.opponent = OpponentMode::TwoPlayers;
    }
    if let Some(delay) = args.bot_delay_ms {
        settings.bot_delay_ms = delay;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session RNG seed: {}", rng.seed());

    let broadcaster = ConsoleBroadcaster::new();
    let view = broadcaster.view();

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let session = tokio::spawn(MatchSession::run(settings, rng, command_rx, broadcaster));

    println!("Cells are numbered 0-8, row by row. You play X and open every round.");
    println!("Commands: 0-8 place a mark, restart, mode pvp, mode bot, quit.");
    view.render();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match parse_line(&line) {
            Some(ClientCommand::Quit) => break,
            Some(ClientCommand::Session(command)) => {
                if matches!(
                    command,
                    SessionCommand::Restart | SessionCommand::SelectMode { .. }
                ) {
                    view.clear();
                }
                if command_tx.send(command).is_err() {
                    break;
                }
            }
            None => println!("Unrecognized command: {}", line.trim()),
        }
    }

    drop(command_tx);
    let scores = session
        .await
        .map_err(|e| format!("Session task failed: {}", e))?;
    println!("Final score - X: {} O: {}", scores.x, scores.o);

    Ok(())
}
