use crate::core::consts::{ENDPOINT_RETRY_CAP, FADE_ZONE_ROWS, WALL_DENSITY};
use crate::core::models::{Cell, Grid, Puzzle, Vec2};
use log::{info, warn};
use rand::Rng;
use rand::rngs::StdRng;

/// Builds a fresh puzzle for the given viewport: sprinkles walls over the
/// grid, then picks two free endpoints. Returns [None] when no free endpoint
/// cell turns up within the retry cap, which the caller treats as "too dense,
/// sit this cycle out".
pub fn generate(cols: usize, rows: usize, rng: &mut StdRng) -> Option<Puzzle> {
    if cols == 0 || rows == 0 {
        warn!("degenerate {}x{} viewport, skipping generation", cols, rows);
        return None;
    }
    let mut grid = Grid::new(cols, rows);

    // Uniform picks with replacement; landing on an existing wall is a no-op.
    let wall_budget = ((cols * rows) as f32 * WALL_DENSITY) as usize;
    for _ in 0..wall_budget {
        let pos = random_cell(cols, rows, rng);
        if !in_fade_zone(pos) {
            grid.set(pos, Cell::Wall);
        }
    }

    let start = pick_endpoint(&grid, rng)?;
    let end = pick_endpoint(&grid, rng)?;
    // Endpoints must stay traversable whatever the wall pass did.
    grid.set(start, Cell::Open);
    grid.set(end, Cell::Open);

    info!(
        "generated {}x{} grid, start ({},{}), end ({},{})",
        cols, rows, start.x, start.y, end.x, end.y
    );
    Some(Puzzle { grid, start, end })
}

/// Rejection sampling for a free cell below the fade zone.
fn pick_endpoint(grid: &Grid, rng: &mut StdRng) -> Option<Vec2> {
    for _ in 0..ENDPOINT_RETRY_CAP {
        let pos = random_cell(grid.cols, grid.rows, rng);
        if !in_fade_zone(pos) && !grid.is_wall(pos) {
            return Some(pos);
        }
    }
    warn!(
        "no free endpoint cell in {} attempts, grid too dense",
        ENDPOINT_RETRY_CAP
    );
    None
}

fn random_cell(cols: usize, rows: usize, rng: &mut StdRng) -> Vec2 {
    Vec2 {
        x: rng.random_range(0..cols) as i32,
        y: rng.random_range(0..rows) as i32,
    }
}

pub fn in_fade_zone(pos: Vec2) -> bool {
    pos.y < FADE_ZONE_ROWS as i32
}
