use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use social_card::raster::{CardFonts, PixmapRenderer};
use social_card::{
    render_card, resolve_font_path, CardConfig, CardLayout, Font, DEFAULT_SYSTEM_FONTS,
};
use std::path::PathBuf;

/// Generate a social preview image for an article
#[derive(Parser, Debug)]
#[command(name = "social-card", version, about)]
struct Args {
    /// Article title
    #[arg(long)]
    title: String,

    /// Article URL
    #[arg(long)]
    url: String,

    /// Output file path
    #[arg(long, default_value = "social-image.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Background colour (hex)
    #[arg(long = "bg")]
    background: Option<String>,

    /// Title font file path (TTF)
    #[arg(long)]
    title_font: Option<PathBuf>,

    /// URL font file path (TTF)
    #[arg(long)]
    url_font: Option<PathBuf>,

    /// Card configuration file (TOML); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw the top margin and baseline grid
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.url.trim().is_empty() {
            bail!("title and url are required");
        }
        Ok(())
    }

    fn card_config(&self) -> Result<CardConfig> {
        let mut config = match &self.config {
            Some(path) => CardConfig::load(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => CardConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(background) = &self.background {
            config.background = background.clone();
        }
        config.debug |= self.debug;
        Ok(config)
    }
}

fn load_font(custom: Option<&PathBuf>) -> Result<Font> {
    let path = resolve_font_path(custom.map(PathBuf::as_path), DEFAULT_SYSTEM_FONTS)?;
    let font = Font::load_file(&path).context("load font")?;
    info!(
        "using font {:?} from {}",
        font.family().unwrap_or_default(),
        path.display()
    );
    Ok(font)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    args.validate()?;

    let config = args.card_config()?;
    let title_font = load_font(args.title_font.as_ref())?;
    let url_font = load_font(args.url_font.as_ref())?;

    let layout = CardLayout::compute(&config, &args.title, &args.url, &title_font, &url_font);
    info!(
        "title set in {} lines, url at {}pt on baseline {}",
        layout.title.len(),
        layout.caption.size,
        layout.caption.y
    );

    let fonts = CardFonts {
        title: &title_font,
        caption: &url_font,
    };
    let mut canvas = PixmapRenderer::new(config.width, config.height, fonts)?;
    render_card(&layout, &config, &mut canvas);
    canvas
        .save_png(&args.output)
        .with_context(|| format!("save png {}", args.output.display()))?;

    println!("Social image generated: {}", args.output.display());
    Ok(())
}
