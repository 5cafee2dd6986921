// Terminal block pusher with pursuing enemies.
// Controls: W/A/S/D or arrow keys to move, U undo, R reset, Q quit.
// Level files: "<height> <width>" then height*width tiles from '#', '.', 'a', 'A', '1', '@', 'G'.

use block_pusher::config::GameConfig;
use block_pusher::console_interface::ConsoleInput;
use block_pusher::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use block_pusher::core::{GameSession, UserAction};
use block_pusher::models::{GameRenderState, RenderFrame};
use clap::{Parser, ValueEnum};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "block-pusher", about = "Push every box onto a goal before the enemies catch you")]
struct Cli {
    /// Level file to play.
    level: PathBuf,
    /// Optional JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Mode::Play)]
    mode: Mode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play in the terminal.
    Play,
    /// Print the initial render frame as JSON and exit.
    Frame,
}

fn init_logging(config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&config.log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("block_pusher=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log_out))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = GameConfig::resolve(cli.config.as_deref())?;
    init_logging(&config)?;

    let mut session = GameSession::load(&cli.level)?;
    info!(player = ?session.level().player, "player location");

    match cli.mode {
        Mode::Frame => {
            let frame = RenderFrame::project(session.level(), &config);
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Mode::Play => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(&mut session, &config, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
    }

    Ok(())
}

fn render(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &GameSession,
    error: &Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let to_render = GameRenderState {
        game: session.level(),
        won: session.is_won(),
        game_over: session.is_game_over(),
        moves: session.history().len(),
        error: error.clone(),
        last_change: session.last_change(),
    };
    render_game(terminal, &to_render)
}

fn run_interactive(
    session: &mut GameSession,
    config: &GameConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut error: Option<String> = None;
    let mut last_tick = Instant::now();
    render(terminal, session, &error)?;

    loop {
        let until_tick = config.tick_interval().saturating_sub(last_tick.elapsed());
        let mut dirty = false;

        match handle_input(until_tick.min(config.input_poll()))? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(action) => {
                dirty = true;
                error = None;
                match action {
                    UserAction::Reset => match session.reset() {
                        Ok(()) => last_tick = Instant::now(),
                        Err(err) => {
                            warn!(%err, "reset failed");
                            error = Some(err.to_string());
                        }
                    },
                    UserAction::Undo => {
                        session.undo();
                    }
                    UserAction::Move(direction) => {
                        // The board freezes once the round is decided, until reset.
                        if !session.is_won() && !session.is_game_over() {
                            session.attempt_move(direction);
                        }
                    }
                }
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }

        if last_tick.elapsed() >= config.tick_interval() {
            last_tick = Instant::now();
            if !session.is_won() && !session.is_game_over() {
                session.advance_enemies();
                dirty = true;
            }
        }

        if dirty {
            render(terminal, session, &error)?;
        }
    }

    Ok(())
}
