// Benchmark: full-frame variant selection.
//
// Measures one frame's worth of atlas picks — a reseed followed by a
// row-major scan over roughly one 1280x720 screen of 32-pixel tiles —
// which is the per-frame cost every viewport pays.

use criterion::{Criterion, criterion_group, criterion_main};
use mosshollow_core::Tile;
use mosshollow_prng::FrameRng;
use mosshollow_sprites::AtlasIndex;
use std::hint::black_box;

const SCREEN_TILES: usize = 40 * 23;

fn variant_scan(c: &mut Criterion) {
    let index = AtlasIndex::parse("#22,0,10\n.3,1,21\n|3,2,2").unwrap();
    let grid: Vec<Tile> = (0..SCREEN_TILES)
        .map(|i| match i % 3 {
            0 => Tile::StoneWall,
            1 => Tile::DirtFloor,
            _ => Tile::Door,
        })
        .collect();
    let mut rng = FrameRng::new(1);

    c.bench_function("variant_scan_full_screen", |b| {
        b.iter(|| {
            rng.reseed(1);
            for &tile in &grid {
                black_box(index.pick(tile, &mut rng));
            }
        })
    });
}

criterion_group!(benches, variant_scan);
criterion_main!(benches);
