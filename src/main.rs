// Ambient breadth-first search animation for the terminal.
// Keys: Q or Esc quits, T cycles the palette, R restarts the puzzle.
// `wavefront trace [themes.json]` prints one headless run instead of animating.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use wavefront::animator::Animator;
use wavefront::console_interface::{
    ConsoleInput, cleanup_terminal, grid_dims, handle_input, render_frame,
    render_search_to_string, setup_terminal,
};
use wavefront::core::{BfsSearch, FRAME_INTERVAL, SearchState, StepOutcome, generate};
use wavefront::theme::{Theme, builtin_themes, load_themes};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("ambient".to_string());

    let themes = match std::env::args().nth(2) {
        Some(path) => match load_themes(&path) {
            Ok(themes) => themes,
            Err(err) => {
                eprintln!(
                    "Could not load themes from {}: {}. Using built-in palettes.",
                    path, err
                );
                builtin_themes()
            }
        },
        None => builtin_themes(),
    };

    match switch.as_str() {
        "ambient" => run_ambient(themes)?,
        "trace" => run_trace(),
        _ => {
            println!(
                "Unknown mode: {}. Use 'ambient' or 'trace'. defaulting to ambient",
                switch
            );
            run_ambient(themes)?;
        }
    }

    Ok(())
}

fn run_ambient(themes: Vec<Theme>) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    let size = terminal.size()?;
    let (cols, rows) = grid_dims(size.width, size.height);
    let mut animator = Animator::new(cols, rows, StdRng::from_os_rng(), Instant::now());
    let mut theme_ix = 0;

    loop {
        match handle_input(FRAME_INTERVAL)? {
            ConsoleInput::Quit => break,
            // Palette change only restyles the frame; the search keeps going.
            ConsoleInput::CycleTheme => theme_ix = (theme_ix + 1) % themes.len(),
            ConsoleInput::Restart => animator.regenerate(Instant::now()),
            ConsoleInput::Resize(width, height) => {
                let (cols, rows) = grid_dims(width, height);
                animator.resize(cols, rows, Instant::now());
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }

        animator.tick(Instant::now());
        render_frame(&mut terminal, &animator, &themes[theme_ix])?;
    }

    cleanup_terminal()?;

    Ok(())
}

const TRACE_COLS: usize = 36;
const TRACE_ROWS: usize = 14;

fn run_trace() {
    let mut rng = StdRng::from_os_rng();
    let Some(puzzle) = generate(TRACE_COLS, TRACE_ROWS, &mut rng) else {
        println!("Grid too dense, no search this round.");
        return;
    };
    let mut search = BfsSearch::new(&puzzle.grid, puzzle.start, puzzle.end);
    loop {
        match search.step(&puzzle.grid) {
            StepOutcome::Expanded(_) => {}
            StepOutcome::PathFound | StepOutcome::Exhausted => break,
        }
    }

    print!("{}", render_search_to_string(&puzzle, Some(&search)));
    match search.state {
        SearchState::PathFound => println!(
            "Path found: {} steps after {} expansions",
            search.path.len() - 1,
            search.steps
        ),
        _ => println!("No path: frontier exhausted after {} expansions", search.steps),
    }
}
