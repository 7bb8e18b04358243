use super::bounds::{Bounds, Point};
use crate::SpriteError;

/// Cell layout of a sprite sheet, in the same fixed-point space as the glyph
/// outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    /// Fixed-point units per output pixel.
    pub unit: f64,
    /// Side length of one square cell.
    pub cell_size: f64,
    pub border: f64,
    pub columns: u32,
    pub rows: u32,
    /// Logical pixel size of one glyph.
    pub glyph_size: u32,
}

impl GridGeometry {
    /// Derive the geometry for `count` glyphs sharing `bounds`.
    ///
    /// Cells are square and sized from the larger side of the shared box, so
    /// the widest or tallest glyph fits and every other glyph keeps its
    /// proportions relative to it.
    pub fn derive(
        bounds: &Bounds,
        glyph_size: u32,
        columns: u32,
        count: usize,
    ) -> Result<Self, SpriteError> {
        if glyph_size == 0 || columns == 0 {
            return Err(SpriteError::InvalidLayout);
        }
        if count == 0 {
            return Err(SpriteError::EmptyCharset);
        }

        let extent = bounds.width().max(bounds.height());
        if extent <= 0 {
            return Err(SpriteError::DegenerateBounds);
        }

        let cell_pixels = glyph_size.checked_add(2).ok_or(SpriteError::InvalidLayout)?;
        let rows = u32::try_from(count.div_ceil(columns as usize))
            .map_err(|_| SpriteError::InvalidLayout)?;

        let unit = extent as f64 / f64::from(glyph_size);
        let geometry = Self {
            unit,
            cell_size: unit * f64::from(cell_pixels),
            border: 2.0 * unit,
            columns,
            rows,
            glyph_size,
        };

        // Cell corners and the viewbox are written as i32 coordinates.
        let (width, height) = geometry.view_box();
        if width > i64::from(i32::MAX) || height > i64::from(i32::MAX) {
            return Err(SpriteError::InvalidLayout);
        }
        Ok(geometry)
    }

    /// Row and column of the glyph at `index` in row-major order.
    pub fn position(&self, index: usize) -> (usize, usize) {
        let columns = self.columns as usize;
        (index / columns, index % columns)
    }

    /// Top-left corner of the cell for the glyph at `index`, truncated to
    /// whole fixed-point units.
    pub fn cell_corner(&self, index: usize) -> Point {
        let (row, col) = self.position(index);
        Point::new(
            (self.border + col as f64 * self.cell_size) as i32,
            (self.border + row as f64 * self.cell_size) as i32,
        )
    }

    /// Viewbox width and height in fixed-point units.
    pub fn view_box(&self) -> (i64, i64) {
        (
            (self.border + self.cell_size * f64::from(self.columns)) as i64,
            (self.border + self.cell_size * f64::from(self.rows)) as i64,
        )
    }

    /// Rendered width and height in pixels.
    pub fn pixel_size(&self) -> (u64, u64) {
        let cell = u64::from(self.glyph_size) + 2;
        (2 + cell * u64::from(self.columns), 2 + cell * u64::from(self.rows))
    }
}
