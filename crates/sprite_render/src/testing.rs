//! In-memory glyph source for unit tests.

use std::collections::HashMap;

use crate::font::{GlyphId, GlyphSource};
use crate::sheet::{
    bounds::{Bounds, Point},
    outline::{Outline, Segment},
};

/// Font stand-in mapping characters to box-shaped outlines. Geometry is given
/// at 1 ppem and scales linearly with the requested ppem.
pub struct FakeFont {
    glyphs: HashMap<char, (GlyphId, Bounds)>,
}

impl FakeFont {
    /// `中`, `文` and `A` with distinct extents, plus an empty space glyph.
    pub fn cjk() -> Self {
        let mut glyphs = HashMap::new();
        glyphs.insert(' ', (GlyphId(3), Bounds::EMPTY));
        glyphs.insert('A', (GlyphId(36), rect(1, -46, 40, 0)));
        glyphs.insert('中', (GlyphId(1200), rect(5, -56, 58, 5)));
        glyphs.insert('文', (GlyphId(1201), rect(2, -54, 62, 6)));
        Self { glyphs }
    }

    pub fn bounds_for(&self, ch: char) -> Bounds {
        self.glyphs.get(&ch).map_or(Bounds::EMPTY, |(id, _)| self.bounds(*id, 4))
    }

    pub fn outline_for(&self, ch: char) -> Outline {
        self.glyphs.get(&ch).map_or_else(Outline::default, |(id, _)| self.outline(*id, 4))
    }

    fn entry(&self, glyph: GlyphId) -> Option<Bounds> {
        self.glyphs.values().find(|(id, _)| *id == glyph).map(|(_, bounds)| *bounds)
    }
}

impl GlyphSource for FakeFont {
    fn glyph_index(&self, ch: char) -> Option<GlyphId> {
        self.glyphs.get(&ch).map(|(id, _)| *id)
    }

    fn outline(&self, glyph: GlyphId, ppem: u32) -> Outline {
        let Some(bounds) = self.entry(glyph).filter(|b| !b.is_empty()) else {
            return Outline::default();
        };
        let bounds = scaled(bounds, ppem);
        let (min, max) = (bounds.min, bounds.max);
        let mid = Point::new((min.x + max.x) / 2, (min.y + max.y) / 2);
        Outline::new(vec![
            Segment::move_to(min),
            Segment::line_to(Point::new(max.x, min.y)),
            Segment::quad_to(Point::new(max.x, mid.y), max),
            Segment::cube_to(mid, Point::new(min.x, max.y), Point::new(min.x, mid.y)),
        ])
    }

    fn bounds(&self, glyph: GlyphId, ppem: u32) -> Bounds {
        self.entry(glyph).map_or(Bounds::EMPTY, |bounds| scaled(bounds, ppem))
    }
}

fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Bounds {
    Bounds::new(Point::new(x0, y0), Point::new(x1, y1))
}

fn scaled(bounds: Bounds, ppem: u32) -> Bounds {
    let k = ppem as i32;
    rect(bounds.min.x * k, bounds.min.y * k, bounds.max.x * k, bounds.max.y * k)
}
