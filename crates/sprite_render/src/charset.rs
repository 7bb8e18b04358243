//! Charset files: one grapheme cluster per line, written as hyphen-separated
//! hex codepoints (`4e2d`, `1f4aa-1f3fc`). `#` starts a comment and blank
//! lines are skipped. Line order is the row-major order of the sprite grid.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;

use crate::SpriteError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    text: String,
    first: char,
    source: String,
    line: usize,
}

impl Cluster {
    /// Decoded cluster text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Codepoint used for glyph lookup.
    pub fn first_codepoint(&self) -> char {
        self.first
    }

    /// Hex notation the cluster was read from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 1-based line number in the charset text.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn load_charset<P: AsRef<Path>>(path: P) -> Result<Vec<Cluster>, SpriteError> {
    let path = path.as_ref();
    info!("loading charset: {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|source| SpriteError::Io { path: path.to_path_buf(), source })?;
    let clusters = parse_charset(&text)?;
    info!("charset: [len={}]", clusters.len());
    Ok(clusters)
}

pub fn parse_charset(text: &str) -> Result<Vec<Cluster>, SpriteError> {
    let mut clusters = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let entry = line.split('#').next().unwrap_or_default().trim();
        if entry.is_empty() {
            continue;
        }

        let malformed =
            || SpriteError::MalformedCluster { line: index + 1, text: entry.to_owned() };
        let decoded = decode_cluster(entry).ok_or_else(malformed)?;
        let first = decoded.chars().next().ok_or_else(malformed)?;
        clusters.push(Cluster { text: decoded, first, source: entry.to_owned(), line: index + 1 });
    }
    Ok(clusters)
}

/// Decode hyphen-separated hex codepoints into one string, e.g.
/// `"1f3c4-200d-2640-fe0f"` into `"\u{1f3c4}\u{200d}\u{2640}\u{fe0f}"`.
///
/// Returns `None` on an empty segment, a non-hex segment, or a value that is
/// not a Unicode scalar value.
pub fn decode_cluster(hex: &str) -> Option<String> {
    hex.split('-')
        .map(|segment| {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            u32::from_str_radix(segment, 16).ok().and_then(char::from_u32)
        })
        .collect()
}
