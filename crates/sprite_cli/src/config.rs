use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sprite_render::SpriteOptions;

/// On-disk configuration. Keys that are left out keep their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SpriteConfig {
    pub font_path: PathBuf,
    pub charset_path: PathBuf,
    pub output_path: PathBuf,
    pub font_ppem: u32,
    pub glyph_size: u32,
    pub columns: u32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        SpriteOptions::default().into()
    }
}

impl From<SpriteOptions> for SpriteConfig {
    fn from(options: SpriteOptions) -> Self {
        Self {
            font_path: options.font_path,
            charset_path: options.charset_path,
            output_path: options.output_path,
            font_ppem: options.font_ppem,
            glyph_size: options.glyph_size,
            columns: options.columns,
        }
    }
}

impl From<SpriteConfig> for SpriteOptions {
    fn from(config: SpriteConfig) -> Self {
        Self {
            font_path: config.font_path,
            charset_path: config.charset_path,
            output_path: config.output_path,
            font_ppem: config.font_ppem,
            glyph_size: config.glyph_size,
            columns: config.columns,
        }
    }
}

impl SpriteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config {:?}", path))
    }
}
