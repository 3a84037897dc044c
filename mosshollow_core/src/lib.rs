// mosshollow_core — tile-map state library.
//
// This crate contains the canonical game state for Mosshollow: the tile
// alphabet, the level grid, the player, the debug-highlight set, and the
// state transitions (movement, search) that mutate them. It has zero
// rendering or threading dependencies and can be tested headless.
//
// Module overview:
// - `tile.rs`:  The tile alphabet and its map-descriptor symbols.
// - `types.rs`: `Position` and `Direction` — the spatial vocabulary.
// - `level.rs`: The `Level` grid, descriptor parsing, movement and search.
//
// The companion crate `mosshollow_viewport` owns all concurrency: exactly
// one thread (the game master) holds a mutable `Level`; everything else
// sees immutable snapshots. That boundary is enforced here by construction
// — nothing in this crate spawns threads or shares state.
//
// **Critical constraint: determinism.** State transitions are pure
// functions of (level, input). No randomness, no system time, no iteration
// over unordered collections when producing state.

pub mod level;
pub mod tile;
pub mod types;

pub use level::Level;
pub use tile::Tile;
pub use types::{Direction, Position};
