use std::fmt::Write;

use super::{
    bounds::{Bounds, Point},
    outline::Outline,
};

/// Render an outline as SVG path data, translated so the shared bounding box's
/// top-left corner lands on `corner`.
///
/// Every glyph in a sheet goes through the same translation against the same
/// `bounds`, so relative glyph proportions and baselines are preserved.
/// Coordinates are widened to i64 so extreme inputs cannot wrap.
pub fn render_path(outline: &Outline, bounds: &Bounds, corner: Point) -> String {
    let dx = i64::from(corner.x) - i64::from(bounds.min.x);
    let dy = i64::from(corner.y) - i64::from(bounds.min.y);

    let mut data = String::new();
    for segment in outline.segments() {
        if !data.is_empty() {
            data.push(' ');
        }
        data.push(segment.op.command());
        for (index, point) in segment.points().iter().enumerate() {
            if index > 0 {
                data.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(data, "{} {}", i64::from(point.x) + dx, i64::from(point.y) + dy);
        }
    }
    data
}
