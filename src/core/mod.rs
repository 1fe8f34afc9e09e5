mod consts;
mod generate;
mod models;
mod search;

pub use consts::*;
pub use generate::{generate, in_fade_zone};
pub use models::{Cell, Grid, Puzzle, SearchState, StepOutcome, Vec2};
pub use search::BfsSearch;
