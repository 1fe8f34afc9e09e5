// Terminal plumbing, the frame renderer and the ascii grid codec.
// Codec tiles: '#' wall, '.' open, 'o' visited, '*' path, 'S' start, 'E' end.

use crate::animator::Animator;
use crate::core::{
    BfsSearch, Cell, Grid, PATH_ALPHA, Puzzle, SearchState, VISITED_ALPHA, Vec2, WALL_ALPHA,
};
use crate::theme::{Theme, blend, fade_factor};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use std::collections::HashSet;
use std::io;
use std::time::Duration;

/// Terminal columns covered by one grid cell, keeps cells roughly square.
pub const CELL_COLS: u16 = 2;

const BLOCK: &str = "██";
const OPEN: &str = "  ";
const ENDPOINT: &str = "● ";

/// Grid dimensions for a terminal of the given size.
pub fn grid_dims(width: u16, height: u16) -> (usize, usize) {
    ((width / CELL_COLS) as usize, height as usize)
}

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

pub enum ConsoleInput {
    Quit,
    CycleTheme,
    Restart,
    Resize(u16, u16),
    Timeout,
    Unknown,
}

pub fn handle_input(timeout: Duration) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('t') | KeyCode::Char('T') => ConsoleInput::CycleTheme,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                _ => ConsoleInput::Unknown,
            },
            Event::Resize(width, height) => ConsoleInput::Resize(width, height),
            _ => ConsoleInput::Unknown,
        });
    }
    Ok(ConsoleInput::Timeout)
}

pub fn render_frame(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    animator: &Animator,
    theme: &Theme,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let area = f.area();
        let canvas = Paragraph::new(Text::from(render_lines(animator, theme)))
            .style(Style::default().bg(theme.background.into()));
        f.render_widget(canvas, area);

        // The header row lives in the fully transparent part of the fade zone.
        if area.height > 0 {
            let header = Paragraph::new(header_line(theme))
                .style(Style::default().bg(theme.background.into()));
            f.render_widget(header, Rect::new(area.x, area.y, area.width, 1));
        }
    })?;
    Ok(())
}

fn header_line(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(" wavefront", Style::default().fg(theme.accent.into())),
        Span::styled(
            "   q quit · t theme · r restart",
            Style::default().fg(theme.secondary.into()),
        ),
    ])
}

/// Builds the styled frame for the current animation state. Pure: equal
/// states produce equal lines. A parked animator (failed generation) yields
/// an empty frame, which the background style clears.
pub fn render_lines(animator: &Animator, theme: &Theme) -> Vec<Line<'static>> {
    let Some(puzzle) = &animator.puzzle else {
        return Vec::new();
    };
    let grid = &puzzle.grid;
    let search = animator.search.as_ref();
    let path_cells = path_cell_set(grid, search);
    let base = Style::default().bg(theme.background.into());

    let mut lines = Vec::with_capacity(grid.rows);
    for y in 0..grid.rows {
        let fade = fade_factor(y);
        let mut spans = Vec::with_capacity(grid.cols);
        for x in 0..grid.cols {
            let pos = Vec2 {
                x: x as i32,
                y: y as i32,
            };
            let span = if pos == puzzle.start || pos == puzzle.end {
                // Endpoints ignore the fade and sit on top of everything.
                Span::styled(ENDPOINT, base.fg(theme.accent.into()))
            } else if grid.is_wall(pos) {
                let color = blend(theme.background, theme.secondary, WALL_ALPHA * fade);
                Span::styled(BLOCK, base.fg(color.into()))
            } else if path_cells.contains(&grid.idx(pos)) {
                let color = blend(theme.background, theme.accent, PATH_ALPHA * fade);
                Span::styled(BLOCK, base.fg(color.into()))
            } else if search.is_some_and(|s| s.is_visited(grid, pos)) {
                let color = blend(theme.background, theme.accent, VISITED_ALPHA * fade);
                Span::styled(BLOCK, base.fg(color.into()))
            } else {
                Span::styled(OPEN, base)
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn path_cell_set(grid: &Grid, search: Option<&BfsSearch>) -> HashSet<usize> {
    match search {
        Some(search) if search.state == SearchState::PathFound => {
            search.path.iter().map(|&pos| grid.idx(pos)).collect()
        }
        _ => HashSet::new(),
    }
}

/// Parses an ascii grid. Rows shorter than the widest row are padded with
/// open cells; missing endpoints default to the opposite corners.
pub fn parse_grid(s: &str) -> Puzzle {
    let lines: Vec<&str> = s.lines().filter(|line| !line.is_empty()).collect();
    let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let rows = lines.len();

    let mut grid = Grid::new(cols, rows);
    let mut start = Vec2 { x: 0, y: 0 };
    let mut end = Vec2 {
        x: cols as i32 - 1,
        y: rows as i32 - 1,
    };
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let pos = Vec2 {
                x: x as i32,
                y: y as i32,
            };
            match ch {
                '#' => grid.set(pos, Cell::Wall),
                'S' => start = pos,
                'E' => end = pos,
                _ => {}
            }
        }
    }
    Puzzle { grid, start, end }
}

/// Ascii rendition of a search over its puzzle, used by tests and trace mode.
pub fn render_search_to_string(puzzle: &Puzzle, search: Option<&BfsSearch>) -> String {
    let grid = &puzzle.grid;
    let path_cells = path_cell_set(grid, search);
    let mut result = String::new();
    for y in 0..grid.rows {
        for x in 0..grid.cols {
            let pos = Vec2 {
                x: x as i32,
                y: y as i32,
            };
            let ch = if pos == puzzle.start {
                'S'
            } else if pos == puzzle.end {
                'E'
            } else if grid.is_wall(pos) {
                '#'
            } else if path_cells.contains(&grid.idx(pos)) {
                '*'
            } else if search.is_some_and(|s| s.is_visited(grid, pos)) {
                'o'
            } else {
                '.'
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}
