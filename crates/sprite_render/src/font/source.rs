use crate::sheet::{bounds::Bounds, outline::Outline};

/// Largest pixels-per-em accepted for outline extraction. Font coordinates
/// stay within ±2^15 units and units-per-em is at least 16, so 26.6 values
/// at this size stay below 2^29.
pub const MAX_PPEM: u32 = 4096;

/// Glyph identifier within one font. Index 0 is the font's `.notdef` glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphId(pub u16);

/// Glyph lookup and outline extraction.
///
/// Outlines and bounds are reported in 26.6 fixed-point units for the given
/// pixels-per-em, with the y axis pointing down so ascenders are negative.
pub trait GlyphSource {
    /// Glyph for `ch`, or `None` when the font does not cover it.
    fn glyph_index(&self, ch: char) -> Option<GlyphId>;

    /// Outline of `glyph`. Glyphs without contours yield an empty outline.
    fn outline(&self, glyph: GlyphId, ppem: u32) -> Outline;

    /// Tight bounding box of `glyph`, or [`Bounds::EMPTY`] when it has none.
    fn bounds(&self, glyph: GlyphId, ppem: u32) -> Bounds;
}
