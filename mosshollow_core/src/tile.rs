// The tile alphabet.
//
// One variant per distinct map symbol. Tiles are defined once at startup by
// descriptor parsing and are immutable thereafter; the same enum keys the
// sprite-variant table in `mosshollow_sprites`.

use serde::{Deserialize, Serialize};

/// The material of a single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tile {
    /// Void outside the playable area. Never drawn.
    Blank,
    StoneWall,
    DirtFloor,
    Door,
}

impl Tile {
    /// Parse a map/atlas descriptor symbol. Returns `None` for characters
    /// outside the alphabet.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Tile::Blank),
            '#' => Some(Tile::StoneWall),
            '.' => Some(Tile::DirtFloor),
            '|' => Some(Tile::Door),
            _ => None,
        }
    }

    /// The descriptor symbol for this tile.
    pub fn symbol(self) -> char {
        match self {
            Tile::Blank => ' ',
            Tile::StoneWall => '#',
            Tile::DirtFloor => '.',
            Tile::Door => '|',
        }
    }

    /// Whether the player may stand on this tile. Only walls block; a move
    /// into a wall is silently rejected by the level, not an error.
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::StoneWall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_roundtrip() {
        for tile in [Tile::Blank, Tile::StoneWall, Tile::DirtFloor, Tile::Door] {
            assert_eq!(Tile::from_symbol(tile.symbol()), Some(tile));
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(Tile::from_symbol('x'), None);
        assert_eq!(Tile::from_symbol('@'), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(!Tile::StoneWall.is_passable());
        assert!(Tile::DirtFloor.is_passable());
        assert!(Tile::Door.is_passable());
        assert!(Tile::Blank.is_passable());
    }
}
