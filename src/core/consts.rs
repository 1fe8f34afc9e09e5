use std::time::Duration;

/// Rows under the page header where walls and endpoints are never placed
/// and cell opacity ramps up from zero.
pub const FADE_ZONE_ROWS: usize = 5;
/// Fraction of cells the wall pass tries to block.
pub const WALL_DENSITY: f32 = 0.2;
/// Uniform picks per endpoint before the grid counts as too dense.
pub const ENDPOINT_RETRY_CAP: usize = 100;

/// Minimum wall-clock time between two search expansions.
pub const STEP_INTERVAL: Duration = Duration::from_millis(15);
/// How long a finished search lingers on screen before regenerating.
pub const RESET_DELAY: Duration = Duration::from_millis(4000);
/// Input poll timeout, which doubles as the display frame length.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub const WALL_ALPHA: f32 = 0.35;
pub const VISITED_ALPHA: f32 = 0.25;
pub const PATH_ALPHA: f32 = 0.85;
