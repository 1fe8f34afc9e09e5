use crate::core::models::{Cell, Grid, SearchState, StepOutcome, Vec2};
use log::debug;
use std::collections::{HashMap, VecDeque};

// Expansion order is fixed; it shapes how the frontier spreads on screen but
// not whether a shortest path is found.
const NEIGHBOR_OFFSETS: [Vec2; 4] = [
    Vec2 { x: 1, y: 0 },
    Vec2 { x: -1, y: 0 },
    Vec2 { x: 0, y: 1 },
    Vec2 { x: 0, y: -1 },
];

/// Breadth-first search advanced one dequeue-and-expand at a time, so the
/// caller can interleave stepping with rendering. Cells are marked visited
/// the moment they are discovered, which keeps every cell out of the
/// frontier after its first appearance.
pub struct BfsSearch {
    pub state: SearchState,
    /// Start-to-end cell run, empty until the end is dequeued.
    pub path: Vec<Vec2>,
    /// Dequeues performed so far.
    pub steps: usize,
    end: Vec2,
    frontier: VecDeque<Vec2>,
    visited: Vec<bool>,
    parents: HashMap<usize, Vec2>,
}

impl BfsSearch {
    pub fn new(grid: &Grid, start: Vec2, end: Vec2) -> Self {
        let mut visited = vec![false; grid.cols * grid.rows];
        visited[grid.idx(start)] = true;
        BfsSearch {
            state: SearchState::Searching,
            path: Vec::new(),
            steps: 0,
            end,
            frontier: VecDeque::from([start]),
            visited,
            parents: HashMap::new(),
        }
    }

    pub fn is_visited(&self, grid: &Grid, pos: Vec2) -> bool {
        grid.contains(pos) && self.visited[grid.idx(pos)]
    }

    /// Performs exactly one dequeue-and-expand. Stepping a finished search
    /// just reports the terminal outcome again.
    pub fn step(&mut self, grid: &Grid) -> StepOutcome {
        match self.state {
            SearchState::PathFound => return StepOutcome::PathFound,
            SearchState::Exhausted => return StepOutcome::Exhausted,
            SearchState::Searching => {}
        }

        let Some(current) = self.frontier.pop_front() else {
            self.state = SearchState::Exhausted;
            debug!("frontier exhausted after {} expansions", self.steps);
            return StepOutcome::Exhausted;
        };
        self.steps += 1;

        if current == self.end {
            self.state = SearchState::PathFound;
            self.path = self.reconstruct(grid, current);
            debug!(
                "path of {} cells found after {} expansions",
                self.path.len(),
                self.steps
            );
            return StepOutcome::PathFound;
        }

        for offset in NEIGHBOR_OFFSETS {
            let next = current + offset;
            if grid.get(next) != Some(Cell::Open) {
                continue;
            }
            let ix = grid.idx(next);
            if self.visited[ix] {
                continue;
            }
            self.visited[ix] = true;
            self.parents.insert(ix, current);
            self.frontier.push_back(next);
        }
        StepOutcome::Expanded(current)
    }

    /// Walks the parent map back from the found cell; the start has no
    /// parent entry, so the walk stops there.
    fn reconstruct(&self, grid: &Grid, found: Vec2) -> Vec<Vec2> {
        let mut path = vec![found];
        let mut current = found;
        while let Some(&parent) = self.parents.get(&grid.idx(current)) {
            current = parent;
            path.push(current);
        }
        path.reverse();
        path
    }
}
