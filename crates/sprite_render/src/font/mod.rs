pub mod sfnt;
pub mod source;

pub use sfnt::{FontInfo, SfntFont};
pub use source::{GlyphId, GlyphSource, MAX_PPEM};
