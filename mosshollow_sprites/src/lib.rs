// mosshollow_sprites — sprite-atlas indexing.
//
// Maps each tile to the ordered list of source rectangles holding its
// visual variants in the sprite atlas, built once at startup from a small
// text descriptor. The table is read-only after construction and is shared
// across all viewport threads behind `Arc` — concurrent reads need no
// locking because nothing ever mutates it.
//
// Variant *selection* is the caller's business: viewports pick with their
// own private `FrameRng`, reseeded each frame, so a fixed map renders
// identically frame after frame while adjacent tiles still differ.

pub mod atlas;

pub use atlas::{ATLAS_COLUMNS, AtlasIndex, AtlasRect, PLAYER_SPRITE, TILE_PIXELS};
