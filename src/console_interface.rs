use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::error;

use crate::core::{Direction, Intent};
use crate::models::{GameRenderState, instructions_line};

/// Raw (no echo, unbuffered) terminal mode, held for as long as the guard
/// lives. Dropping the guard restores the previous mode on every exit path,
/// including early `?` returns and unwinding panics.
pub struct RawModeGuard {
    alternate_screen: bool,
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<RawModeGuard> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(RawModeGuard {
            alternate_screen: false,
        })
    }

    pub fn with_alternate_screen() -> io::Result<RawModeGuard> {
        let mut guard = RawModeGuard::acquire()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
        guard.alternate_screen = true;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.alternate_screen {
            if let Err(err) = crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen) {
                error!(%err, "failed to leave alternate screen");
            }
        }
        if let Err(err) = crossterm::terminal::disable_raw_mode() {
            error!(%err, "failed to restore terminal mode");
        }
    }
}

/// A ratatui terminal on the alternate screen. Field order matters: the
/// terminal is dropped before the guard restores the screen.
pub struct TerminalSession {
    pub terminal: Terminal<CrosstermBackend<io::Stdout>>,
    _guard: RawModeGuard,
}

pub fn setup_terminal() -> io::Result<TerminalSession> {
    let guard = RawModeGuard::with_alternate_screen()?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(TerminalSession {
        terminal,
        _guard: guard,
    })
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let board_paragraph = Paragraph::new(state.game.board().to_string())
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        let instruction_paragraph = Paragraph::new(instructions_line(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    Intent(Intent),
    Timeout,
}

/// Polls briefly for a key press; used by the full-screen loop.
pub fn handle_input() -> io::Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(ConsoleInput::Intent(key_to_intent(key)));
            }
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Blocks for one key press with raw mode held only for the read.
pub fn read_intent() -> io::Result<Intent> {
    let _raw = RawModeGuard::acquire()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key_to_intent(key));
            }
        }
    }
}

pub fn key_to_intent(key: KeyEvent) -> Intent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Intent::Quit;
    }
    match key.code {
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Intent::Quit
        }
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Intent::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Intent::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Intent::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Intent::Move(Direction::Right),
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            Intent::Unknown(format!("{:?}", c))
        }
        code if key.modifiers.is_empty() => Intent::Unknown(format!("{:?}", code)),
        code => Intent::Unknown(format!("{:?} {:?}", key.modifiers, code)),
    }
}
