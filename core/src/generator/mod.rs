use crate::*;
pub use random::*;

mod random;

pub trait BombLayoutGenerator {
    fn generate(self, config: GameConfig) -> BombSet;
}

/// Places `bombs` bombs on a `fields`×`fields` board using a seeded generator.
pub fn place_bombs(fields: Coord, bombs: CellCount, seed: u64) -> Result<BombSet> {
    let config = GameConfig::new(fields, bombs)?;
    Ok(RandomBombGenerator::new(seed).generate(config))
}
