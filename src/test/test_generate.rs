mod test {
    use crate::core::{Cell, FADE_ZONE_ROWS, Vec2, WALL_DENSITY, generate, in_fade_zone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn when_generating_endpoints_avoid_walls_and_fade_zone() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate(40, 20, &mut rng).expect("40x20 leaves plenty of free cells");
            for pos in [puzzle.start, puzzle.end] {
                assert!(
                    !in_fade_zone(pos),
                    "endpoint {:?} inside fade zone (seed {})",
                    pos,
                    seed
                );
                assert!(
                    !puzzle.grid.is_wall(pos),
                    "endpoint {:?} on a wall (seed {})",
                    pos,
                    seed
                );
            }
        }
    }

    #[test]
    fn when_generating_fade_zone_rows_stay_clear() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate(40, 20, &mut rng).unwrap();
            for y in 0..FADE_ZONE_ROWS as i32 {
                for x in 0..puzzle.grid.cols as i32 {
                    assert_eq!(
                        puzzle.grid.get(Vec2 { x, y }),
                        Some(Cell::Open),
                        "wall at ({},{}) inside fade zone (seed {})",
                        x,
                        y,
                        seed
                    );
                }
            }
        }
    }

    #[test]
    fn when_generating_wall_budget_is_respected() {
        let mut rng = StdRng::seed_from_u64(0);
        let puzzle = generate(40, 20, &mut rng).unwrap();

        let walls = (0..20)
            .flat_map(|y| (0..40).map(move |x| Vec2 { x, y }))
            .filter(|&pos| puzzle.grid.is_wall(pos))
            .count();
        let budget = (40.0 * 20.0 * WALL_DENSITY) as usize;
        assert!(walls <= budget, "{} walls exceed the budget {}", walls, budget);
        assert!(walls > 0, "a 40x20 grid should get some walls");
    }

    #[test]
    fn when_viewport_fits_inside_fade_zone_generation_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate(12, FADE_ZONE_ROWS, &mut rng).is_none());
    }

    #[test]
    fn when_viewport_is_empty_generation_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate(0, 0, &mut rng).is_none());
    }
}
