pub mod charset;
mod font;
mod sheet;
pub mod unihan;

#[cfg(test)]
mod testing;

use std::fs;
use std::path::PathBuf;

use log::info;

pub use charset::{decode_cluster, load_charset, parse_charset, Cluster};
pub use font::{FontInfo, GlyphId, GlyphSource, SfntFont, MAX_PPEM};
pub use sheet::{
    bounds::{Bounds, Point},
    document::SvgDocument,
    grid::GridGeometry,
    layout::{GlyphLayout, LayoutEngine},
    outline::{Outline, Segment, SegmentOp},
    path::render_path,
};

#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font: {0}")]
    FontParse(#[from] ttf_parser::FaceParsingError),
    #[error("glyph not found for {cluster:?} (U+{:04X})", scalar(.codepoint))]
    GlyphNotFound { cluster: String, codepoint: char },
    #[error("malformed cluster on line {line}: {text:?}")]
    MalformedCluster { line: usize, text: String },
    #[error("charset contains no clusters")]
    EmptyCharset,
    #[error("unsupported layout dimensions")]
    InvalidLayout,
    #[error("glyph bounds have zero size")]
    DegenerateBounds,
}

fn scalar(ch: &char) -> u32 {
    u32::from(*ch)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteOptions {
    pub font_path: PathBuf,
    pub charset_path: PathBuf,
    pub output_path: PathBuf,
    /// Pixels per em used when extracting outlines.
    pub font_ppem: u32,
    /// Logical pixel size of each glyph cell's content.
    pub glyph_size: u32,
    /// Glyphs per grid row.
    pub columns: u32,
}

impl Default for SpriteOptions {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("Noto_Sans_SC/NotoSansSC-Regular.otf"),
            charset_path: PathBuf::from("hanzi_core2020_g_index.txt"),
            output_path: PathBuf::from("hanzi.svg"),
            font_ppem: 4,
            glyph_size: 32,
            columns: 20,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SpriteOutput {
    pub document: SvgDocument,
    pub geometry: GridGeometry,
    /// Union of all glyph bounds, in 26.6 units.
    pub bounds: Bounds,
    /// Number of clusters laid out, including those without a visible outline.
    pub glyph_count: usize,
}

#[derive(Default)]
pub struct SpriteRenderer;

impl SpriteRenderer {
    /// Read the font and charset named by `options` and build the sprite sheet.
    pub fn render_files(&self, options: &SpriteOptions) -> Result<SpriteOutput, SpriteError> {
        let data = read_font(options)?;
        let font = SfntFont::from_bytes(&data)?;
        info!("{}", font.info(options.font_ppem));

        let clusters = load_charset(&options.charset_path)?;
        self.render_source(&font, &clusters, options)
    }

    pub fn render_source<S: GlyphSource + ?Sized>(
        &self,
        source: &S,
        clusters: &[Cluster],
        options: &SpriteOptions,
    ) -> Result<SpriteOutput, SpriteError> {
        let layout = LayoutEngine::new(source, options.font_ppem).layout(clusters)?;
        self.compose(&layout, options)
    }

    /// Place every outline in its grid cell. Cell `i` always belongs to
    /// `layout.outlines[i]`, whether or not that outline is drawn.
    pub fn compose(
        &self,
        layout: &GlyphLayout,
        options: &SpriteOptions,
    ) -> Result<SpriteOutput, SpriteError> {
        let geometry = GridGeometry::derive(
            &layout.bounds,
            options.glyph_size,
            options.columns,
            layout.len(),
        )?;

        let mut document = SvgDocument::new(&geometry);
        for (index, outline) in layout.outlines.iter().enumerate() {
            if outline.is_empty() {
                continue;
            }
            let corner = geometry.cell_corner(index);
            document.push_path(render_path(outline, &layout.bounds, corner));
        }

        Ok(SpriteOutput { document, geometry, bounds: layout.bounds, glyph_count: layout.len() })
    }
}

/// Load the raw bytes of the configured font.
pub fn read_font(options: &SpriteOptions) -> Result<Vec<u8>, SpriteError> {
    let path = &options.font_path;
    info!("loading font: {}", path.display());
    fs::read(path).map_err(|source| SpriteError::Io { path: path.clone(), source })
}
