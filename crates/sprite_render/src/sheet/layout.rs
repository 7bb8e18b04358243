use log::{debug, info};

use super::{bounds::Bounds, outline::Outline};
use crate::{
    charset::Cluster,
    font::{GlyphSource, MAX_PPEM},
    SpriteError,
};

/// Outlines for a charset, in charset order, plus the union of their boxes.
#[derive(Clone, Debug, Default)]
pub struct GlyphLayout {
    pub outlines: Vec<Outline>,
    pub bounds: Bounds,
}

impl GlyphLayout {
    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

pub struct LayoutEngine<'a, S: GlyphSource + ?Sized> {
    source: &'a S,
    ppem: u32,
}

impl<'a, S: GlyphSource + ?Sized> LayoutEngine<'a, S> {
    pub fn new(source: &'a S, ppem: u32) -> Self {
        Self { source, ppem }
    }

    /// Resolve every cluster to a glyph and collect its outline and bounds.
    ///
    /// Only the first codepoint of a cluster is looked up. That is right for
    /// single-codepoint CJK characters and wrong for multi-codepoint emoji
    /// sequences. Empty outlines are kept so indices stay aligned with the
    /// charset.
    pub fn layout(&self, clusters: &[Cluster]) -> Result<GlyphLayout, SpriteError> {
        if self.ppem == 0 || self.ppem > MAX_PPEM {
            return Err(SpriteError::InvalidLayout);
        }

        let mut outlines = Vec::with_capacity(clusters.len());
        let mut bounds = Bounds::EMPTY;

        for cluster in clusters {
            let codepoint = cluster.first_codepoint();
            let glyph = self.source.glyph_index(codepoint).ok_or_else(|| {
                SpriteError::GlyphNotFound { cluster: cluster.source().to_owned(), codepoint }
            })?;
            debug!("glyph index {} -> {}", cluster, glyph.0);

            outlines.push(self.source.outline(glyph, self.ppem));
            bounds = bounds.union(&self.source.bounds(glyph, self.ppem));
        }

        info!(
            "bounds: x:{} y:{} w:{} h:{}",
            bounds.min.x,
            bounds.min.y,
            bounds.width(),
            bounds.height()
        );

        Ok(GlyphLayout { outlines, bounds })
    }
}
