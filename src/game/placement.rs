//! Choosing where food and poison go
use super::grid::{Cell, Grid};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Pick a cell not in `occupied`, uniformly at random.  Returns `None` if the
/// grid is full.
pub(crate) fn place_food<R: Rng>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    grid.cells().filter(|c| !occupied.contains(c)).choose(rng)
}

/// Pick a cell that is neither in `occupied` nor equal to `food`, uniformly at
/// random.  Returns `None` if there is no such cell.
pub(crate) fn place_poison<R: Rng>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Cell>,
    food: Option<Cell>,
) -> Option<Cell> {
    grid.cells()
        .filter(|&c| Some(c) != food && !occupied.contains(&c))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::GridSize;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn grid(size: u16) -> Grid {
        Grid::new(GridSize::new(size).expect("size should be valid"))
    }

    fn all_but(g: Grid, free: &[Cell]) -> HashSet<Cell> {
        g.cells().filter(|c| !free.contains(c)).collect()
    }

    #[test]
    fn food_never_on_snake() {
        let g = grid(10);
        let occupied = HashSet::from([
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(1, 1),
        ]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..500 {
            let food = place_food(&mut rng, g, &occupied).expect("grid has room");
            assert!(!occupied.contains(&food), "food placed on snake at {food}");
        }
    }

    #[test]
    fn poison_avoids_snake_and_food() {
        let g = grid(3);
        let occupied = all_but(g, &[Cell::new(1, 1), Cell::new(2, 2)]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..100 {
            let poison = place_poison(&mut rng, g, &occupied, Some(Cell::new(1, 1)));
            assert_eq!(poison, Some(Cell::new(2, 2)));
        }
    }

    #[test]
    fn single_free_cell() {
        let g = grid(3);
        let occupied = all_but(g, &[Cell::new(2, 2)]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(place_food(&mut rng, g, &occupied), Some(Cell::new(2, 2)));
    }

    #[test]
    fn full_grid() {
        let g = grid(3);
        let occupied = g.cells().collect::<HashSet<_>>();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(place_food(&mut rng, g, &occupied), None);
        assert_eq!(place_poison(&mut rng, g, &occupied, None), None);
    }

    #[test]
    fn poison_with_only_food_cell_free() {
        let g = grid(3);
        let occupied = all_but(g, &[Cell::new(0, 2)]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let food = place_food(&mut rng, g, &occupied);
        assert_eq!(food, Some(Cell::new(0, 2)));
        assert_eq!(place_poison(&mut rng, g, &occupied, food), None);
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let g = grid(10);
        let occupied = HashSet::from([Cell::new(4, 4)]);
        let mut rng1 = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut rng2 = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..20 {
            assert_eq!(
                place_food(&mut rng1, g, &occupied),
                place_food(&mut rng2, g, &occupied)
            );
        }
    }

    #[test]
    fn every_free_cell_is_reachable() {
        let g = grid(3);
        let occupied = HashSet::from([Cell::new(0, 0), Cell::new(1, 1)]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let seen = (0..1000)
            .filter_map(|_| place_food(&mut rng, g, &occupied))
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), g.area() - occupied.len());
    }
}
