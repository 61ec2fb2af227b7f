use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    process,
    sync::Mutex,
};

use clap::{Parser, Subcommand};
use shared::{
    game_state::{Game, GameConfig, Mode, Quit},
    screen::Screen,
    session::run,
};
use terminal::{CrosstermEvents, CrosstermScreen};
use tracing::{error, info};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

mod config;
mod terminal;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Option<Start>,
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Start {
    /// Two players on one keyboard (default)
    Versus,
    /// A single paddle on the arrow keys
    Solo,
}

impl From<Start> for Mode {
    fn from(value: Start) -> Self {
        match value {
            Start::Versus => Mode::Versus,
            Start::Solo => Mode::Solo,
        }
    }
}

fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let writer = match log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(io::stderr),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .with_thread_names(true);
    if config::json_logs() {
        builder.json().init();
    } else {
        builder.compact().init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
    }));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.log_file.as_deref()) {
        eprintln!("failed to open log file: {err}");
        process::exit(1);
    }
    let config = GameConfig {
        mode: cli.command.unwrap_or(Start::Versus).into(),
        frame_interval: config::frame_interval(),
        ..GameConfig::default()
    };

    let screen = match CrosstermScreen::new() {
        Ok(screen) => screen,
        Err(err) => {
            error!(error = %err, "failed to start terminal");
            process::exit(1);
        }
    };
    let game = Game::new(config, screen.extent());
    info!(mode = ?config.mode, extent = ?screen.extent(), "game started");

    let outcome = match run(game, screen, CrosstermEvents) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(error = %err, "failed to start game threads");
            process::exit(1);
        }
    };

    match outcome.quit {
        Quit::Interrupt => println!("^C"),
        Quit::QuitKey => {}
        Quit::InputFailed | Quit::RenderFailed => println!("error occurred"),
    }
    match outcome.finished {
        Some((game, _)) => {
            for player in game.players() {
                println!("{}: {}", player.name(), player.score());
            }
        }
        // the screen was dropped, and so restored, while the frame loop unwound.
        None => println!("error occurred"),
    }
}
