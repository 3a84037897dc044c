// Frame composition.
//
// Turns one level snapshot into draw calls on a surface. The screen offset
// centers the camera; every non-blank tile is blitted with a variant
// picked by the viewport's private RNG.
//
// The RNG is reseeded to `FRAME_SEED` once per frame, before the scan —
// not once per tile — and tiles are visited in row-major order. Those two
// facts together make variant choice a pure function of tile position for
// a fixed map: the same frame re-renders identically any number of times,
// while adjacent tiles still land on different points of the stream.
//
// Cells in the snapshot's debug set are tinted; the player sprite is
// drawn last, untinted and never variant-selected.

use crate::surface::{ScreenRect, Surface, Tint};
use mosshollow_core::{Level, Position, Tile};
use mosshollow_prng::FrameRng;
use mosshollow_sprites::{AtlasIndex, PLAYER_SPRITE, TILE_PIXELS};

/// The fixed seed every frame's variant stream restarts from.
pub const FRAME_SEED: u64 = 1;

/// Compose one frame of `level` onto `surface`, centered on `center`.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    level: &Level,
    atlas: &AtlasIndex,
    center: Position,
    rng: &mut FrameRng,
) {
    let (w, h) = surface.size();
    let offset_x = w / 2 - center.x * TILE_PIXELS;
    let offset_y = h / 2 - center.y * TILE_PIXELS;

    surface.clear();
    rng.reseed(FRAME_SEED);

    for (y, row) in level.rows().enumerate() {
        for (x, &tile) in row.iter().enumerate() {
            if tile == Tile::Blank {
                continue;
            }
            let Some(src) = atlas.pick(tile, rng) else {
                continue;
            };
            let pos = Position::new(x as i32, y as i32);
            let tint = if level.debug.contains(&pos) {
                Tint::HIGHLIGHT
            } else {
                Tint::WHITE
            };
            surface.blit(src, cell_rect(pos, offset_x, offset_y), tint);
        }
    }

    surface.blit(
        PLAYER_SPRITE,
        cell_rect(level.player, offset_x, offset_y),
        Tint::WHITE,
    );
    surface.present();
}

/// The on-screen rectangle of a grid cell under the given offset.
fn cell_rect(pos: Position, offset_x: i32, offset_y: i32) -> ScreenRect {
    ScreenRect {
        x: pos.x * TILE_PIXELS + offset_x,
        y: pos.y * TILE_PIXELS + offset_y,
        w: TILE_PIXELS,
        h: TILE_PIXELS,
    }
}
