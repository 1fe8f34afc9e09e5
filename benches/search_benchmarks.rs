use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavefront::console_interface::parse_grid;
use wavefront::core::{BfsSearch, StepOutcome};

const PUZZLES: &[(&str, &str)] = &[
    (
        "open_12x8",
        r#"
S...........
............
............
............
............
............
............
...........E
"#,
    ),
    (
        "maze_12x8",
        r#"
S..#....#...
.#.#.##.#.#.
.#...#..#.#.
.####.#.#.#.
....#.#.#.#.
.##.#.#.#.#.
.#..#.#...#.
.#.##.####.E
"#,
    ),
    (
        "sealed_12x8",
        r#"
S..#........
...#........
...#........
####........
.......###..
.......#E#..
.......###..
............
"#,
    ),
];

pub fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_search");

    for &(puzzle_name, level) in PUZZLES {
        group.bench_with_input(
            BenchmarkId::new("run_to_completion", puzzle_name),
            &level,
            |b, &level| {
                b.iter_with_setup(
                    || {
                        let puzzle = parse_grid(level);
                        let search = BfsSearch::new(&puzzle.grid, puzzle.start, puzzle.end);
                        (puzzle, search)
                    },
                    |(puzzle, mut search)| {
                        loop {
                            match search.step(black_box(&puzzle.grid)) {
                                StepOutcome::Expanded(_) => {}
                                StepOutcome::PathFound | StepOutcome::Exhausted => break,
                            }
                        }
                    },
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_full_search);
criterion_main!(benches);
