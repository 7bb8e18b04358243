mod config;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use sprite_render::unihan::{self, OverlapReport, UnihanField};
use sprite_render::{
    load_charset, read_font, GlyphSource, SfntFont, SpriteOptions, SpriteRenderer,
};

use crate::config::SpriteConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out font glyphs as an SVG sprite sheet")]
struct Cli {
    /// TOML file with default settings; flags take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the sprite sheet and write it to disk (the default)
    Build(SpriteSettings),
    /// Print font metadata and glyph lookups without writing anything
    Inspect(SpriteSettings),
    /// Generate the Simplified Chinese charset index from Unihan data
    Charset(CharsetArgs),
}

#[derive(Args, Debug, Clone)]
struct CharsetArgs {
    /// Unihan file carrying kUnihanCore2020
    #[arg(long, default_value = "Unihan/Unihan_DictionaryLikeData.txt")]
    dictionary_like: PathBuf,
    /// Unihan file carrying kIICore
    #[arg(long, default_value = "Unihan/Unihan_IRGSources.txt")]
    irg_sources: PathBuf,
    /// Punctuation charset appended to the index
    #[arg(long, default_value = "cjk_punctuation.txt")]
    punctuation: PathBuf,
    /// TGH table to cross-check the core lists against
    #[arg(long)]
    tgh: Option<PathBuf>,
    /// Output for the kUnihanCore2020 G source list
    #[arg(long, default_value = "core2020_g.txt")]
    core2020_out: PathBuf,
    /// Output for the kIICore G source list
    #[arg(long, default_value = "iicore_g.txt")]
    iicore_out: PathBuf,
    /// Output charset index
    #[arg(short, long, default_value = "hanzi_core2020_g_index.txt")]
    output: PathBuf,
}

#[derive(Args, Debug, Clone, Default)]
struct SpriteSettings {
    /// Font file (OpenType or TrueType)
    #[arg(long)]
    font: Option<PathBuf>,
    /// Charset file of hex codepoints, one cluster per line
    #[arg(long)]
    charset: Option<PathBuf>,
    /// Output SVG path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Pixels per em used to extract outlines
    #[arg(long)]
    ppem: Option<u32>,
    /// Logical pixel size of each glyph
    #[arg(long)]
    size: Option<u32>,
    /// Glyphs per grid row
    #[arg(long)]
    columns: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => SpriteConfig::load(path)?,
        None => SpriteConfig::default(),
    };

    match cli.command {
        Some(Commands::Build(settings)) => build(settings.apply(base)),
        Some(Commands::Inspect(settings)) => inspect(settings.apply(base)),
        Some(Commands::Charset(args)) => charset(&args),
        None => build(SpriteSettings::default().apply(base)),
    }
}

fn build(options: SpriteOptions) -> Result<()> {
    let output = SpriteRenderer
        .render_files(&options)
        .with_context(|| format!("failed to build sprite sheet from {:?}", options.font_path))?;

    // The document is complete before anything touches the output path.
    fs::write(&options.output_path, output.document.to_string())
        .with_context(|| format!("failed to write {:?}", options.output_path))?;

    info!(
        "wrote {} paths for {} glyphs ({}x{} grid) to {}",
        output.document.paths().len(),
        output.glyph_count,
        output.geometry.columns,
        output.geometry.rows,
        options.output_path.display()
    );
    Ok(())
}

fn inspect(options: SpriteOptions) -> Result<()> {
    let data = read_font(&options)?;
    let font = SfntFont::from_bytes(&data)
        .with_context(|| format!("failed to parse font {:?}", options.font_path))?;
    println!("{}", font.info(options.font_ppem));

    let clusters = load_charset(&options.charset_path)
        .with_context(|| format!("failed to load charset {:?}", options.charset_path))?;
    println!("Charset: {} clusters", clusters.len());

    for cluster in &clusters {
        let glyph = font.glyph_index(cluster.first_codepoint()).with_context(|| {
            format!("glyph not found for {:?} on line {}", cluster.source(), cluster.line())
        })?;
        println!("  GlyphIndex({cluster}): {}", glyph.0);
    }

    let output = SpriteRenderer.render_source(&font, &clusters, &options)?;
    let bounds = output.bounds;
    let (vb_width, vb_height) = output.geometry.view_box();
    println!(
        "Bounds: x:{} y:{} w:{} h:{}",
        bounds.min.x,
        bounds.min.y,
        bounds.width(),
        bounds.height()
    );
    println!(
        "Grid: {}x{} cells, viewBox 0 0 {vb_width} {vb_height}, {}x{} px, {} paths",
        output.geometry.columns,
        output.geometry.rows,
        output.document.width(),
        output.document.height(),
        output.document.paths().len()
    );
    Ok(())
}

fn charset(args: &CharsetArgs) -> Result<()> {
    let read = |path: &PathBuf| {
        fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))
    };
    let write = |path: &PathBuf, contents: &str| {
        fs::write(path, contents).with_context(|| format!("failed to write {path:?}"))
    };

    let core2020 =
        unihan::g_source_codepoints(&read(&args.dictionary_like)?, UnihanField::UnihanCore2020);
    println!("Writing {} characters to {}", core2020.len(), args.core2020_out.display());
    let core_list = unihan::codepoint_list(&core2020);
    write(&args.core2020_out, &core_list)?;

    let iicore = unihan::g_source_codepoints(&read(&args.irg_sources)?, UnihanField::IiCore);
    println!("Writing {} characters to {}", iicore.len(), args.iicore_out.display());
    write(&args.iicore_out, &unihan::codepoint_list(&iicore))?;

    let tgh = args.tgh.as_ref().map(|path| read(path)).transpose()?;
    let tgh = tgh.as_deref().map(unihan::tgh_codepoints);
    let report = OverlapReport { core2020: &core2020, iicore: &iicore, tgh: tgh.as_deref() };
    println!("{report}");

    let punctuation = read(&args.punctuation)?;
    write(&args.output, &unihan::index_text(&core_list, &punctuation))?;
    info!("wrote charset index to {}", args.output.display());
    Ok(())
}

impl SpriteSettings {
    fn apply(self, config: SpriteConfig) -> SpriteOptions {
        let mut options = SpriteOptions::from(config);
        if let Some(font) = self.font {
            options.font_path = font;
        }
        if let Some(charset) = self.charset {
            options.charset_path = charset;
        }
        if let Some(output) = self.output {
            options.output_path = output;
        }
        if let Some(ppem) = self.ppem {
            options.font_ppem = ppem;
        }
        if let Some(size) = self.size {
            options.glyph_size = size;
        }
        if let Some(columns) = self.columns {
            options.columns = columns;
        }
        options
    }
}
