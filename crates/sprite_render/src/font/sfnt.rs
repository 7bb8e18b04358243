use std::fmt;

use ttf_parser::{name_id, Face, OutlineBuilder, Rect};

use super::source::{GlyphId, GlyphSource};
use crate::sheet::{
    bounds::{Bounds, Point},
    outline::{Outline, Segment},
};
use crate::SpriteError;

/// OpenType/TrueType font backed by `ttf-parser`.
pub struct SfntFont<'a> {
    face: Face<'a>,
}

impl<'a> SfntFont<'a> {
    pub fn from_bytes(data: &'a [u8]) -> Result<Self, SpriteError> {
        let face = Face::parse(data, 0)?;
        Ok(Self { face })
    }

    pub fn info(&self, ppem: u32) -> FontInfo {
        let scale = FixedScale::new(ppem, self.face.units_per_em());
        let postscript_name = self
            .face
            .names()
            .into_iter()
            .filter(|name| name.name_id == name_id::POST_SCRIPT_NAME)
            .find_map(|name| name.to_string());

        FontInfo {
            postscript_name,
            units_per_em: self.face.units_per_em(),
            ppem,
            height: scale.apply(self.face.height().into()),
            ascent: scale.apply(self.face.ascender().into()),
            // Reported as a positive distance below the baseline.
            descent: scale.apply(-f64::from(self.face.descender())),
            x_height: self.face.x_height().map(|v| scale.apply(v.into())),
            cap_height: self.face.capital_height().map(|v| scale.apply(v.into())),
            glyph_count: self.face.number_of_glyphs(),
        }
    }
}

impl GlyphSource for SfntFont<'_> {
    fn glyph_index(&self, ch: char) -> Option<GlyphId> {
        // A cmap entry pointing at .notdef is as good as no entry.
        self.face.glyph_index(ch).filter(|id| id.0 != 0).map(|id| GlyphId(id.0))
    }

    fn outline(&self, glyph: GlyphId, ppem: u32) -> Outline {
        let scale = FixedScale::new(ppem, self.face.units_per_em());
        let mut collector = OutlineCollector { scale, outline: Outline::default() };
        if self.face.outline_glyph(ttf_parser::GlyphId(glyph.0), &mut collector).is_none() {
            return Outline::default();
        }
        collector.outline
    }

    fn bounds(&self, glyph: GlyphId, ppem: u32) -> Bounds {
        let scale = FixedScale::new(ppem, self.face.units_per_em());
        match self.face.glyph_bounding_box(ttf_parser::GlyphId(glyph.0)) {
            Some(rect) => scale.rect(rect),
            None => Bounds::EMPTY,
        }
    }
}

/// Font units to 26.6 fixed point at a given pixels-per-em.
#[derive(Clone, Copy, Debug)]
struct FixedScale {
    factor: f64,
}

impl FixedScale {
    fn new(ppem: u32, units_per_em: u16) -> Self {
        Self { factor: f64::from(ppem) * 64.0 / f64::from(units_per_em.max(1)) }
    }

    /// Rounds half away from zero.
    fn apply(self, value: f64) -> i32 {
        (value * self.factor).round() as i32
    }

    /// Flip to y-down. The sign changes before rounding so a saturated
    /// value never reaches integer negation.
    fn point(self, x: f32, y: f32) -> Point {
        Point::new(self.apply(x.into()), self.apply(-f64::from(y)))
    }

    fn rect(self, rect: Rect) -> Bounds {
        Bounds::new(
            Point::new(self.apply(rect.x_min.into()), self.apply(-f64::from(rect.y_max))),
            Point::new(self.apply(rect.x_max.into()), self.apply(-f64::from(rect.y_min))),
        )
    }
}

struct OutlineCollector {
    scale: FixedScale,
    outline: Outline,
}

impl OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.outline.push(Segment::move_to(self.scale.point(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.outline.push(Segment::line_to(self.scale.point(x, y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.outline.push(Segment::quad_to(self.scale.point(x1, y1), self.scale.point(x, y)));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.outline.push(Segment::cube_to(
            self.scale.point(x1, y1),
            self.scale.point(x2, y2),
            self.scale.point(x, y),
        ));
    }

    // Filled SVG subpaths close implicitly.
    fn close(&mut self) {}
}

/// Font metadata, with metrics in 26.6 fixed point at `ppem`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontInfo {
    pub postscript_name: Option<String>,
    pub units_per_em: u16,
    pub ppem: u32,
    pub height: i32,
    pub ascent: i32,
    pub descent: i32,
    pub x_height: Option<i32>,
    pub cap_height: Option<i32>,
    pub glyph_count: u16,
}

impl fmt::Display for FontInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name(6): {}", self.postscript_name.as_deref().unwrap_or("<none>"))?;
        write!(
            f,
            "Metrics(ppem:{}): {{Height: {}, Ascent: {}, Descent: {}, XHeight: {}, CapHeight: {}}}",
            self.ppem,
            Fixed(self.height),
            Fixed(self.ascent),
            Fixed(self.descent),
            OptionalFixed(self.x_height),
            OptionalFixed(self.cap_height),
        )?;
        writeln!(f)?;
        write!(f, "NumGlyphs: {} (units per em: {})", self.glyph_count, self.units_per_em)
    }
}

/// 26.6 value printed as `integer:fraction64`.
struct Fixed(i32);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}:{:02}", abs / 64, abs % 64)
    }
}

struct OptionalFixed(Option<i32>);

impl fmt::Display for OptionalFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => Fixed(value).fmt(f),
            None => f.write_str("n/a"),
        }
    }
}
