use crate::core::{Direction, LevelState, UserAction, Vec2};
use crate::level_loader::{ENEMY_MARKER, PLAYER_MARKER};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

/// Shown where an enemy stands on the player.
pub const CAUGHT_MARKER: char = 'X';

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_text = render_game_to_string(state.game);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Block Pusher"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let (instructions, color) = if state.game_over {
            ("Caught! Press R to retry, Q to quit.", Color::Red)
        } else if state.won {
            ("You win! Press R to replay, Q to quit.", Color::Green)
        } else {
            ("WASD or arrows to move, U undo, R reset, Q quit", Color::Cyan)
        };

        let mut instructions = format!("{} | Moves: {}", instructions, state.moves);
        if let Some(change_type) = &state.last_change {
            instructions = format!("{} | Last: {:?}", instructions, change_type);
        }
        if let Some(err) = &state.error {
            instructions = format!("{} | Error: {}", instructions, err);
        }

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Rows of space separated symbols, with actors drawn over the floor.
pub fn render_game_to_string(game: &LevelState) -> String {
    let mut result = String::new();
    for y in 0..game.height() {
        for x in 0..game.width() {
            let pos = Vec2 { x, y };
            let has_player = pos == game.player;
            let has_enemy = game.has_enemy_at(&pos);
            let ch = match (has_player, has_enemy) {
                (true, true) => CAUGHT_MARKER,
                (true, false) => PLAYER_MARKER,
                (false, true) => ENEMY_MARKER,
                (false, false) => game.grid.tile_at(&pos).symbol(),
            };
            if x > 0 {
                result.push(' ');
            }
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn map_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => {
            ConsoleInput::UserAction(UserAction::Undo)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Reset),
        _ => ConsoleInput::Unknown,
    }
}

/// Waits up to `timeout` for a key press.
pub fn handle_input(timeout: Duration) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(timeout)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(map_key(code));
        }
        return Ok(ConsoleInput::Unknown);
    }
    Ok(ConsoleInput::Timeout)
}
