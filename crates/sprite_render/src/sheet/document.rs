use std::fmt;

use super::grid::GridGeometry;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const PATH_STYLE: &str = "path{stroke:none;fill:black;fill-opacity:1;}";

/// SVG sprite sheet: a root element sized from the grid and one filled path
/// per visible glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument {
    view_box: (i64, i64),
    size: (u64, u64),
    paths: Vec<String>,
}

impl SvgDocument {
    pub fn new(geometry: &GridGeometry) -> Self {
        Self { view_box: geometry.view_box(), size: geometry.pixel_size(), paths: Vec::new() }
    }

    /// Append a path element. Empty path data is dropped, since `d=""` is
    /// not a valid path.
    pub fn push_path(&mut self, data: String) {
        if !data.is_empty() {
            self.paths.push(data);
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn width(&self) -> u64 {
        self.size.0
    }

    pub fn height(&self) -> u64 {
        self.size.1
    }

    pub fn view_box(&self) -> (i64, i64) {
        self.view_box
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (vb_width, vb_height) = self.view_box;
        let (width, height) = self.size;

        writeln!(f, "<svg version=\"1.1\" baseProfile=\"full\"")?;
        writeln!(f, "viewBox=\"0 0 {vb_width} {vb_height}\"")?;
        writeln!(f, "width=\"{width}\" height=\"{height}\" xmlns=\"{SVG_NAMESPACE}\">")?;
        writeln!(f, "<style>{PATH_STYLE}</style>")?;
        for data in &self.paths {
            writeln!(f, "<path d=\"{}\"/>", Escaped(data))?;
        }
        writeln!(f, "</svg>")
    }
}

/// Attribute value with markup-significant characters replaced by entities.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}
