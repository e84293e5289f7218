// Terminal Sokoban.
// Controls: arrow keys or WASD move, x / q / Esc / Ctrl-C quit.
// Tiles: '#' wall, '@' player, 'o' crate, '.' storage, '*' crate on storage, '+' player on storage, ' ' floor.

mod cli;
mod console_interface;
mod core;
mod level;
mod models;
#[cfg(test)]
mod test;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::console_interface::{ConsoleInput, handle_input, read_intent, render_game, setup_terminal};
use crate::core::{Game, GameEvent};
use crate::level::{load_level, load_level_file};
use crate::models::{GameRenderState, describe_event};

const BUNDLED_LEVEL: &str = r#"
########
#.  o @#
#  o  .#
########
"#;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let board = match &cli.level {
        Some(path) => load_level_file(path)
            .with_context(|| format!("failed to load level {}", path.display()))?,
        None => load_level(BUNDLED_LEVEL).context("bundled level is invalid")?,
    };
    info!(crates = board.crate_count(), "Game file parsed");

    let mut game = Game::new(board);
    if cli.plain {
        run_plain(&mut game)?;
    } else {
        run_interactive(&mut game)?;
    }

    info!(complete = game.is_complete(), quit = game.is_quit(), "session ended");
    println!("Game ending");
    Ok(())
}

fn init_logging(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {}", err))
}

fn run_interactive(game: &mut Game) -> Result<()> {
    let mut session = setup_terminal()?;
    let mut message = None;

    loop {
        render_game(&mut session.terminal, &GameRenderState { game: &*game, message: message.clone() })?;
        if game.is_over() {
            break;
        }

        match handle_input()? {
            ConsoleInput::Timeout => {}
            ConsoleInput::Intent(intent) => {
                message = describe_event(&game.process(intent));
            }
        }
    }

    if game.is_complete() {
        // keep the finished board up until a key is pressed
        while let ConsoleInput::Timeout = handle_input()? {}
    }
    Ok(())
}

fn run_plain(game: &mut Game) -> Result<()> {
    print_state(game);
    while !game.is_over() {
        println!("Move (x to quit):");
        let intent = read_intent()?;
        let event = game.process(intent);
        if let GameEvent::Unknown(raw) = &event {
            println!("Unknown input: {}", raw);
        }
        if event == GameEvent::Quit {
            break;
        }
        print_state(game);

        if game.is_complete() {
            println!("Complete!");
        }
    }
    Ok(())
}

fn print_state(game: &Game) {
    println!();
    println!("{}", game.board());
    println!();
}
