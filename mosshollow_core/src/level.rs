// The level grid and its state transitions.
//
// `Level` is the canonical game state: a rectangular tile grid, the player
// position, and the set of debug-highlighted cells. Exactly one thread (the
// game master in `mosshollow_viewport`) holds a mutable `Level`; everyone
// else receives cloned snapshots behind `Arc` and must treat them as
// frozen.
//
// Parsing follows the map descriptor format: one row per line, one symbol
// per column, rows padded with `Blank` to the longest row so the grid is
// never jagged. Out-of-bounds reads return `Blank`, so movement and
// rendering never need bounds special cases.
//
// **Critical constraint: determinism.** `move_player` and `search` are
// pure functions of the current state and the input. Replaying the same
// event sequence against equal levels must produce equal levels.

use crate::tile::Tile;
use crate::types::{Direction, Position};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum breadth-first depth explored by `search`.
const SEARCH_DEPTH: u32 = 10;

/// The full game state at one instant: grid, player, highlighted cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    map: Vec<Vec<Tile>>,
    pub player: Position,
    pub debug: FxHashSet<Position>,
}

impl Level {
    /// Parse a map descriptor: one row per line, one symbol per column.
    /// Rows shorter than the longest row are padded with `Blank`. The
    /// player starts on the first floor tile in row-major order.
    ///
    /// Errors are fatal startup conditions: an empty descriptor, a symbol
    /// outside the tile alphabet, or a map with no floor tile to place the
    /// player on.
    pub fn parse(descriptor: &str) -> Result<Self, String> {
        let lines: Vec<&str> = descriptor.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err("map descriptor is empty".into());
        }

        let mut map = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for (x, c) in line.chars().enumerate() {
                let tile = Tile::from_symbol(c).ok_or_else(|| {
                    format!("unknown map symbol {c:?} at row {y}, column {x}")
                })?;
                row.push(tile);
            }
            row.resize(width, Tile::Blank);
            map.push(row);
        }

        let player = map
            .iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.iter()
                    .position(|&t| t == Tile::DirtFloor)
                    .map(|x| Position::new(x as i32, y as i32))
            })
            .ok_or("map has no floor tile for the player start")?;

        Ok(Self {
            map,
            player,
            debug: FxHashSet::default(),
        })
    }

    /// Read a map descriptor from a file. The path is prepended to any
    /// error so startup failures name the offending asset.
    pub fn load(path: &str) -> Result<Self, String> {
        let text =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read map {path}: {e}"))?;
        Self::parse(&text).map_err(|e| format!("{path}: {e}"))
    }

    /// Grid width in tiles.
    pub fn width(&self) -> i32 {
        self.map.first().map_or(0, |row| row.len() as i32)
    }

    /// Grid height in tiles.
    pub fn height(&self) -> i32 {
        self.map.len() as i32
    }

    /// Read a cell. Returns `Blank` for out-of-bounds coordinates.
    pub fn tile(&self, pos: Position) -> Tile {
        if pos.x < 0 || pos.y < 0 {
            return Tile::Blank;
        }
        self.map
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
            .unwrap_or(Tile::Blank)
    }

    /// Iterate rows top to bottom. Rendering scans this in order so RNG
    /// consumption per frame is stable.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.map.iter().map(|row| row.as_slice())
    }

    /// Try to move the player one cell. A move into a wall is a silent
    /// no-op. Returns whether the state changed.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        let target = self.player.step(dir);
        if self.tile(target).is_passable() {
            self.player = target;
            true
        } else {
            false
        }
    }

    /// Toggle the debug-highlight set: clear it if populated, otherwise
    /// fill it with the passable cells reachable from the player within
    /// `SEARCH_DEPTH` four-neighbor steps. Always a state change.
    pub fn search(&mut self) {
        if !self.debug.is_empty() {
            self.debug.clear();
            return;
        }

        let mut frontier = VecDeque::new();
        frontier.push_back((self.player, 0u32));
        self.debug.insert(self.player);

        while let Some((pos, depth)) = frontier.pop_front() {
            if depth == SEARCH_DEPTH {
                continue;
            }
            for dir in [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ] {
                let next = pos.step(dir);
                if self.tile(next).is_passable() && self.debug.insert(next) {
                    frontier.push_back((next, depth + 1));
                }
            }
        }
    }
}
