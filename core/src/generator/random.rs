use ndarray::Array2;

use super::*;

/// Purely random placement: every cell is equally likely to hold a bomb and no cell is picked twice.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBombGenerator {
    seed: u64,
}

impl RandomBombGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BombLayoutGenerator for RandomBombGenerator {
    fn generate(self, config: GameConfig) -> BombSet {
        use rand::prelude::*;

        let fields = config.fields();
        let mut bomb_mask: Array2<bool> = Array2::default((fields, fields).to_nd_index());
        let mut free_cells = usize::from(config.total_cells());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        if config.bombs() >= config.total_cells() {
            log::warn!(
                "Board already full, requested {} bombs but only {} cells",
                config.bombs(),
                config.total_cells()
            );
            return BombSet::from_bomb_mask(Array2::from_elem(bomb_mask.dim(), true));
        }

        for _ in 0..config.bombs() {
            if free_cells == 0 {
                break;
            }
            // rank among the cells still free, so each draw lands on a new cell
            let rank = rng.random_range(0..free_cells);
            if let Some(cell) = bomb_mask.iter_mut().filter(|is_bomb| !**is_bomb).nth(rank) {
                *cell = true;
            }
            free_cells -= 1;
        }

        let bomb_set = BombSet::from_bomb_mask(bomb_mask);
        if bomb_set.bomb_count() != config.bombs() {
            log::warn!(
                "Generated bomb count mismatch, actual: {}, requested: {}",
                bomb_set.bomb_count(),
                config.bombs()
            );
        }
        log::trace!(
            "placed {} bombs on a {}x{} board with seed {}",
            bomb_set.bomb_count(),
            fields,
            fields,
            self.seed
        );
        bomb_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(fields: Coord, bombs: CellCount, seed: u64) -> BombSet {
        place_bombs(fields, bombs, seed).unwrap()
    }

    #[test]
    fn places_exact_count_for_every_density() {
        for fields in 1..=6 {
            for bombs in 0..square(fields) {
                for seed in 0..4 {
                    let bomb_set = generate(fields, bombs, seed);
                    assert_eq!(bomb_set.bomb_count(), bombs);
                    assert_eq!(bomb_set.iter().count(), usize::from(bombs));
                    assert!(bomb_set.iter().all(|(row, col)| row < fields && col < fields));
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        assert_eq!(generate(16, 40, 7), generate(16, 40, 7));
    }

    #[test]
    fn different_seeds_spread_bombs() {
        let first = generate(16, 40, 1);
        let differs = (2..10).any(|seed| generate(16, 40, seed) != first);

        assert!(differs);
    }

    #[test]
    fn full_config_never_samples_an_empty_range() {
        let bomb_set = RandomBombGenerator::new(0).generate(GameConfig::new_unchecked(2, 5));

        assert_eq!(bomb_set.bomb_count(), 4);
    }

    #[test]
    fn invalid_requests_fail_fast() {
        assert_eq!(
            place_bombs(2, 4, 0),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyBombs {
                bombs: 4,
                cells: 4
            }))
        );
        assert_eq!(
            place_bombs(0, 0, 0),
            Err(GameError::InvalidConfiguration(ConfigError::NoFields))
        );
    }
}
