//! Charset generation from the Unihan database.
//!
//! Simplified Chinese coverage is taken from the G source of the
//! `kUnihanCore2020` and `kIICore` fields. The resulting codepoint lists feed
//! the charset index, and the Table of General Standard Chinese Characters
//! (TGH) list is only used to cross-check them.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use log::info;
use regex::Regex;

use crate::charset::decode_cluster;

/// Unihan field whose G source marks a character as core Simplified Chinese.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnihanField {
    /// `kUnihanCore2020`, found in `Unihan_DictionaryLikeData.txt`.
    UnihanCore2020,
    /// `kIICore`, found in `Unihan_IRGSources.txt`.
    IiCore,
}

impl UnihanField {
    pub fn name(self) -> &'static str {
        match self {
            UnihanField::UnihanCore2020 => "kUnihanCore2020",
            UnihanField::IiCore => "kIICore",
        }
    }

    fn pattern(self) -> &'static Regex {
        static CORE2020_RE: OnceLock<Regex> = OnceLock::new();
        static IICORE_RE: OnceLock<Regex> = OnceLock::new();
        match self {
            UnihanField::UnihanCore2020 => CORE2020_RE
                .get_or_init(|| Regex::new(r"U\+(.*)\tkUnihanCore2020.*G").expect("valid regex")),
            UnihanField::IiCore => IICORE_RE
                .get_or_init(|| Regex::new(r"U\+(.*)\tkIICore.*G").expect("valid regex")),
        }
    }
}

/// Hex codepoints of every line tagging `field` with a G source, in file
/// order.
pub fn g_source_codepoints(text: &str, field: UnihanField) -> Vec<String> {
    let codepoints = capture_all(text, field.pattern());
    info!("{}: {} characters with G source", field.name(), codepoints.len());
    codepoints
}

/// Hex codepoints listed in a TGH table (`U+XXXX<TAB>serial`).
pub fn tgh_codepoints(text: &str) -> Vec<String> {
    static TGH_RE: OnceLock<Regex> = OnceLock::new();
    let pattern = TGH_RE.get_or_init(|| Regex::new(r"U\+(.*)\t[0-9]+").expect("valid regex"));
    capture_all(text, pattern)
}

fn capture_all(text: &str, pattern: &Regex) -> Vec<String> {
    text.lines()
        .filter_map(|line| pattern.captures(line))
        .filter_map(|captures| captures.get(1))
        .map(|hex| hex.as_str().to_owned())
        .collect()
}

/// Entries of `list` absent from `other`, keeping `list` order.
pub fn difference<'a>(list: &'a [String], other: &[String]) -> Vec<&'a str> {
    let other: HashSet<&str> = other.iter().map(String::as_str).collect();
    list.iter().map(String::as_str).filter(|code| !other.contains(code)).collect()
}

/// Number of distinct entries of `list` absent from `other`.
pub fn distinct_difference(list: &[String], other: &[String]) -> usize {
    difference(list, other).into_iter().collect::<HashSet<_>>().len()
}

/// Codepoint list file contents: one hex value per line.
pub fn codepoint_list(codepoints: &[String]) -> String {
    let mut text = codepoints.join("\n");
    text.push('\n');
    text
}

/// Charset index: the core list followed by the punctuation charset.
pub fn index_text(core: &str, punctuation: &str) -> String {
    format!("{}\n{}\n", core.trim(), punctuation.trim())
}

/// Render hex codepoints as the characters they name. Entries that do not
/// decode are skipped.
pub fn characters<'a, I>(codepoints: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    codepoints.into_iter().filter_map(decode_cluster).collect()
}

/// Overlap between the two core lists and, when given, the TGH table.
pub struct OverlapReport<'a> {
    pub core2020: &'a [String],
    pub iicore: &'a [String],
    pub tgh: Option<&'a [String]>,
}

impl fmt::Display for OverlapReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (c20, iic) = (self.core2020, self.iicore);
        writeln!(f, "(iic - c20).size = {}", distinct_difference(iic, c20))?;
        writeln!(f, "(c20 - iic).size = {}", distinct_difference(c20, iic))?;

        if let Some(tgh) = self.tgh {
            writeln!(f, "TGH list has {} characters", tgh.len())?;
            writeln!(f, "(tgh - iic).size = {}", distinct_difference(tgh, iic))?;
            writeln!(f, "(iic - tgh).size = {}", distinct_difference(iic, tgh))?;
            writeln!(f, "(c20 - tgh).size = {}", distinct_difference(c20, tgh))?;
            writeln!(f, "(tgh - c20).size = {}", distinct_difference(tgh, c20))?;
        }

        writeln!(f, "iic - c20:")?;
        write!(f, "{}", characters(difference(iic, c20)))?;
        if let Some(tgh) = self.tgh {
            writeln!(f)?;
            writeln!(f, "iic - tgh:")?;
            write!(f, "{}", characters(difference(iic, tgh)))?;
            writeln!(f)?;
            writeln!(f, "c20 - tgh:")?;
            write!(f, "{}", characters(difference(c20, tgh)))?;
        }
        Ok(())
    }
}
