use crate::core::{
    BfsSearch, Puzzle, RESET_DELAY, STEP_INTERVAL, SearchState, StepOutcome, generate,
};
use log::info;
use rand::rngs::StdRng;
use std::time::Instant;

/// Owns one animation lifecycle: the current puzzle, its search, the step
/// throttle and the delayed-reset deadline. Time is always passed in, never
/// sampled.
pub struct Animator {
    pub puzzle: Option<Puzzle>,
    pub search: Option<BfsSearch>,
    pub cols: usize,
    pub rows: usize,
    rng: StdRng,
    last_step: Instant,
    reset_at: Option<Instant>,
}

impl Animator {
    pub fn new(cols: usize, rows: usize, rng: StdRng, now: Instant) -> Self {
        let mut animator = Animator {
            puzzle: None,
            search: None,
            cols,
            rows,
            rng,
            last_step: now,
            reset_at: None,
        };
        animator.regenerate(now);
        animator
    }

    /// Current search state, or [None] while parked on a failed generation.
    pub fn state(&self) -> Option<SearchState> {
        self.search.as_ref().map(|search| search.state)
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_at.is_some()
    }

    /// Throws away the current puzzle and starts over at the current
    /// viewport size. Any pending delayed reset is cancelled first; a stale
    /// deadline must never fire into a fresh generation.
    pub fn regenerate(&mut self, now: Instant) {
        self.reset_at = None;
        self.last_step = now;
        self.puzzle = generate(self.cols, self.rows, &mut self.rng);
        self.search = self
            .puzzle
            .as_ref()
            .map(|puzzle| BfsSearch::new(&puzzle.grid, puzzle.start, puzzle.end));
    }

    pub fn resize(&mut self, cols: usize, rows: usize, now: Instant) {
        info!("viewport resized to {}x{} cells", cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.regenerate(now);
    }

    /// Advances the animation by one frame: fires a due reset, otherwise
    /// performs at most one search step once the step interval has elapsed.
    /// Rendering is the caller's business and happens every frame no matter
    /// what this does.
    pub fn tick(&mut self, now: Instant) {
        if let Some(reset_at) = self.reset_at {
            if now >= reset_at {
                self.regenerate(now);
                return;
            }
        }
        let Some(puzzle) = &self.puzzle else { return };
        let Some(search) = &mut self.search else { return };
        if search.state != SearchState::Searching {
            return;
        }
        if now.duration_since(self.last_step) < STEP_INTERVAL {
            return;
        }
        self.last_step = now;
        match search.step(&puzzle.grid) {
            StepOutcome::Expanded(_) => {}
            StepOutcome::PathFound | StepOutcome::Exhausted => {
                self.reset_at = Some(now + RESET_DELAY);
            }
        }
    }
}
