// The atlas variant table and its descriptor parser.
//
// Descriptor format: one line per tile type,
//
//   <tile-symbol><column>,<row>,<variant-count>
//
// with whitespace tolerated around the comma-separated integer fields.
// Starting at (column, row), `variant-count` rectangles of one tile each
// are emitted left to right; when the running column reaches the atlas
// width the run wraps to column 0 of the next row, so a tile's variants
// may span a row boundary in the source image without manual bookkeeping.
//
// Descriptor problems are unrecoverable startup preconditions, reported as
// descriptive `Err(String)` for the host to abort on — never a runtime
// fault.

use mosshollow_core::Tile;
use mosshollow_prng::FrameRng;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Edge length of one atlas tile in pixels.
pub const TILE_PIXELS: i32 = 32;

/// Number of tile columns in the atlas image.
pub const ATLAS_COLUMNS: i64 = 62;

/// The fixed player sprite cell. Drawn last, never variant-selected.
pub const PLAYER_SPRITE: AtlasRect = AtlasRect::at_cell(21, 59);

/// A source rectangle in the atlas image, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl AtlasRect {
    /// The rectangle covering the atlas cell at (column, row).
    pub const fn at_cell(col: i64, row: i64) -> Self {
        Self {
            x: (col as i32) * TILE_PIXELS,
            y: (row as i32) * TILE_PIXELS,
            w: TILE_PIXELS,
            h: TILE_PIXELS,
        }
    }
}

/// Tile → ordered variant rectangles. Built once, read-only thereafter.
#[derive(Clone, Debug, Default)]
pub struct AtlasIndex {
    variants: FxHashMap<Tile, SmallVec<[AtlasRect; 4]>>,
}

impl AtlasIndex {
    /// Parse an atlas descriptor. Every listed tile receives a non-empty
    /// variant list; any malformed line is a fatal error naming the line.
    pub fn parse(descriptor: &str) -> Result<Self, String> {
        let mut variants: FxHashMap<Tile, SmallVec<[AtlasRect; 4]>> = FxHashMap::default();

        for (line_no, raw) in descriptor.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let mut chars = line.chars();
            let Some(symbol) = chars.next() else { continue };
            let tile = Tile::from_symbol(symbol)
                .ok_or_else(|| format!("line {}: unknown tile symbol {symbol:?}", line_no + 1))?;

            let fields: Vec<&str> = chars.as_str().split(',').collect();
            if fields.len() != 3 {
                return Err(format!(
                    "line {}: expected <column>,<row>,<count>, got {:?}",
                    line_no + 1,
                    chars.as_str()
                ));
            }
            let mut parsed = [0i64; 3];
            for (i, field) in fields.iter().enumerate() {
                parsed[i] = field.trim().parse::<i64>().map_err(|e| {
                    format!("line {}: bad integer {:?}: {e}", line_no + 1, field.trim())
                })?;
            }
            let [mut col, mut row, count] = parsed;
            if count < 1 {
                return Err(format!(
                    "line {}: variant count must be at least 1, got {count}",
                    line_no + 1
                ));
            }

            let mut rects = SmallVec::new();
            for _ in 0..count {
                rects.push(AtlasRect::at_cell(col, row));
                col += 1;
                if col >= ATLAS_COLUMNS {
                    col = 0;
                    row += 1;
                }
            }
            variants.insert(tile, rects);
        }

        Ok(Self { variants })
    }

    /// Read an atlas descriptor from a file. The path is prepended to any
    /// error so startup failures name the offending asset.
    pub fn load(path: &str) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read atlas descriptor {path}: {e}"))?;
        Self::parse(&text).map_err(|e| format!("{path}: {e}"))
    }

    /// The ordered variant rectangles for a tile. Empty only for tiles the
    /// descriptor never listed.
    pub fn variants(&self, tile: Tile) -> &[AtlasRect] {
        self.variants.get(&tile).map_or(&[], |v| v.as_slice())
    }

    /// Pick one variant with the caller's generator. Returns `None` for
    /// tiles without an atlas entry; such tiles are simply not drawn.
    pub fn pick(&self, tile: Tile, rng: &mut FrameRng) -> Option<AtlasRect> {
        let rects = self.variants.get(&tile)?;
        Some(rects[rng.next_below(rects.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_count_rects_from_start_cell() {
        let index = AtlasIndex::parse("#0,0,3").unwrap();
        assert_eq!(
            index.variants(Tile::StoneWall),
            &[
                AtlasRect::at_cell(0, 0),
                AtlasRect::at_cell(1, 0),
                AtlasRect::at_cell(2, 0),
            ]
        );
    }

    #[test]
    fn wraps_at_atlas_width() {
        let index = AtlasIndex::parse("#61,0,3").unwrap();
        assert_eq!(
            index.variants(Tile::StoneWall),
            &[
                AtlasRect::at_cell(61, 0),
                AtlasRect::at_cell(0, 1),
                AtlasRect::at_cell(1, 1),
            ]
        );
    }

    #[test]
    fn tolerates_whitespace_in_fields() {
        let index = AtlasIndex::parse("  .12 , 3 ,2  \n").unwrap();
        assert_eq!(
            index.variants(Tile::DirtFloor),
            &[AtlasRect::at_cell(12, 3), AtlasRect::at_cell(13, 3)]
        );
    }

    #[test]
    fn every_listed_tile_has_variants() {
        let index = AtlasIndex::parse("#22,0,10\n.3,1,21\n|3,2,2").unwrap();
        for tile in [Tile::StoneWall, Tile::DirtFloor, Tile::Door] {
            assert!(
                !index.variants(tile).is_empty(),
                "{tile:?} should have variants"
            );
        }
        assert_eq!(index.variants(Tile::DirtFloor).len(), 21);
    }

    #[test]
    fn unlisted_tile_has_no_variants() {
        let index = AtlasIndex::parse("#0,0,1").unwrap();
        assert!(index.variants(Tile::Door).is_empty());
        let mut rng = FrameRng::new(1);
        assert_eq!(index.pick(Tile::Door, &mut rng), None);
    }

    #[test]
    fn load_error_names_the_missing_file() {
        let err = AtlasIndex::load("/nonexistent/atlas-index.txt").unwrap_err();
        assert!(err.contains("/nonexistent/atlas-index.txt"), "got: {err}");
    }

    #[test]
    fn rejects_unknown_tile_symbol() {
        let err = AtlasIndex::parse("x0,0,1").unwrap_err();
        assert!(err.contains("line 1"), "error should name the line: {err}");
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(AtlasIndex::parse("#0,0").is_err());
        assert!(AtlasIndex::parse("#0,0,1,9").is_err());
    }

    #[test]
    fn rejects_garbled_integer() {
        let err = AtlasIndex::parse("#0,zero,1").unwrap_err();
        assert!(err.contains("zero"), "error should quote the field: {err}");
    }

    #[test]
    fn rejects_zero_variant_count() {
        assert!(AtlasIndex::parse("#5,5,0").is_err());
    }

    #[test]
    fn pick_is_deterministic_for_equal_generators() {
        let index = AtlasIndex::parse("#0,0,10").unwrap();
        let mut a = FrameRng::new(1);
        let mut b = FrameRng::new(1);
        for _ in 0..50 {
            assert_eq!(
                index.pick(Tile::StoneWall, &mut a),
                index.pick(Tile::StoneWall, &mut b)
            );
        }
    }

    #[test]
    fn pick_varies_across_successive_draws() {
        let index = AtlasIndex::parse("#0,0,10").unwrap();
        let mut rng = FrameRng::new(1);
        let picks: Vec<AtlasRect> = (0..20)
            .map(|_| index.pick(Tile::StoneWall, &mut rng).unwrap())
            .collect();
        assert!(
            picks.windows(2).any(|w| w[0] != w[1]),
            "20 draws over 10 variants should not all repeat"
        );
    }
}
