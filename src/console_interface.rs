use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use crate::core::{Direction, GameState, Tile, TileType};
use crate::level::LevelError;
use crate::models::GameRenderState;

/// Loads a level written as an indented raw string, ignoring the surrounding blank lines.
pub fn parse_level(s: &str) -> Result<GameState, LevelError> {
    GameState::initialize(s.trim_matches('\n'))
}

/// Renders the live board back into level codes. The player is drawn as the start tile, a
/// block resting on an exit uses its exit-covered code and a filled hole reads as floor.
pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for (pos, cell) in game.board.iter() {
        if pos.x == 0 && pos.y > 0 {
            result.push('\n');
        }
        let ch = if pos == game.player_position {
            TileType::Start.to_char()
        } else if let Some(block) = cell.block {
            let tile = if cell.tile_type == TileType::End {
                Tile::on_exit(block.tile_type).unwrap_or(Tile::new(block.tile_type))
            } else {
                Tile::new(block.tile_type)
            };
            tile.to_char()
        } else {
            cell.tile_type.to_char()
        };
        result.push(ch);
    }
    result
}

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
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

        let title = format!("Level - {} moves", state.game.move_count());
        let game_paragraph = Paragraph::new(render_game_to_string(&state.game))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.game.is_complete() {
            "Exit reached! U to undo, R to restart, Q to quit"
        } else {
            "WASD or arrows to move, U to undo, R to restart, Q to quit"
        };

        let mut instructions = instructions.to_string();
        if state.allow_free_undo {
            instructions.push_str(" | free undo");
        }
        if let Some(err) = &state.error {
            instructions = format!("{} | {}", instructions, err);
        } else if let Some(change) = &state.last_change {
            instructions = format!("{} | Last: {:?}", instructions, change);
        }

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    Move(Direction),
    Undo,
    Restart,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> io::Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => ConsoleInput::Undo,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
