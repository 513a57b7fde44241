use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, ValueEnum};

use glyphgrid::{Alphabet, GlyphSize, RenderConfig, ResizeFilter, Rgba8};

/// Convert a FASTA alignment into an image using one glyph image per symbol.
#[derive(Parser, Debug)]
#[command(name = "glyphgrid", version)]
struct Cli {
    /// Input FASTA alignment.
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Directory holding one `<symbol>.<ext>` glyph per alphabet symbol.
    #[arg(short = 'a', long = "glyph-dir")]
    glyph_dir: PathBuf,

    /// Output image path; the format follows the extension (PNG if unknown).
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Horizontal spacing between glyphs in pixels [default: 10].
    #[arg(short = 'x', long)]
    hspacing: Option<u32>,

    /// Vertical spacing between rows in pixels [default: 10].
    #[arg(short = 'y', long)]
    vspacing: Option<u32>,

    /// Resize every glyph to WxH pixels.
    #[arg(short = 's', long)]
    size: Option<GlyphSize>,

    /// Resampling filter used with --size.
    #[arg(long, value_enum)]
    filter: Option<FilterChoice>,

    /// Glyph file extension [default: png].
    #[arg(long)]
    ext: Option<String>,

    /// Alphabet symbols, in order.
    #[arg(long)]
    alphabet: Option<String>,

    /// Background colour as RRGGBB or RRGGBBAA [default: ffffffff].
    #[arg(long)]
    background: Option<Rgba8>,

    /// Colour mode of the written image.
    #[arg(long, value_enum, default_value_t = ColorMode::Rgba)]
    color_mode: ColorMode,

    /// JSON render config; command-line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render even if the alignment fails the format check.
    #[arg(long)]
    skip_validation: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterChoice> for ResizeFilter {
    fn from(v: FilterChoice) -> Self {
        match v {
            FilterChoice::Nearest => Self::Nearest,
            FilterChoice::Triangle => Self::Triangle,
            FilterChoice::CatmullRom => Self::CatmullRom,
            FilterChoice::Gaussian => Self::Gaussian,
            FilterChoice::Lanczos3 => Self::Lanczos3,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorMode {
    Rgba,
    LumaAlpha,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let alphabet = match &cli.alphabet {
        Some(symbols) => Alphabet::new(symbols)?,
        None => Alphabet::protein(),
    };

    let records = glyphgrid::read_records_file(&cli.input)?;
    if !cli.skip_validation {
        glyphgrid::check_records(&records, &alphabet)
            .with_context(|| format!("validate '{}'", cli.input.display()))?;
    }

    let glyphs = glyphgrid::prepare_glyphs(&cli.glyph_dir, &alphabet, &config)?;
    let canvas = glyphgrid::render_alignment(&records, &glyphs, &config)?;

    if let Some(parent) = cli.output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let img = image::DynamicImage::ImageRgba8(canvas);
    let img = match cli.color_mode {
        ColorMode::Rgba => img,
        ColorMode::LumaAlpha => image::DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
    };
    let format = image::ImageFormat::from_path(&cli.output).unwrap_or(image::ImageFormat::Png);
    img.save_with_format(&cli.output, format)
        .with_context(|| format!("write image '{}'", cli.output.display()))?;

    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_path(path)?,
        None => RenderConfig::default(),
    };
    if let Some(v) = cli.hspacing {
        config.hspacing = v;
    }
    if let Some(v) = cli.vspacing {
        config.vspacing = v;
    }
    if let Some(size) = cli.size {
        config.resize = Some(size);
    }
    if let Some(filter) = cli.filter {
        config.filter = filter.into();
    }
    if let Some(ext) = &cli.ext {
        config.glyph_extension = ext.clone();
    }
    if let Some(bg) = cli.background {
        config.background = bg;
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
