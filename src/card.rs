//! Laying out and drawing a complete social card: a wrapped title at the top and a
//! single line caption (usually the page's URL) snapped to the lowest baseline of the
//! title's grid.

use crate::colour::{colours, Colour};
use crate::layout::{balance, fit_font_size, wrap, BaselineGrid, Line, Margins, SizeRange};
use crate::measure::TextMeasurer;
use crate::rect::Rect;
use crate::render::{FontRole, Renderer, TextStyle};
use crate::units::Px;
use crate::CardError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything about a card's appearance that isn't its text. Every field has a default,
/// so a TOML file only needs to name what it changes:
///
/// ```
/// use social_card::{CardConfig, Px};
///
/// let config: CardConfig = toml::from_str("height = 630\ntop_margin = 100").unwrap();
/// assert_eq!(config.height, 630);
/// assert_eq!(config.margins().bottom, Px(100.0));
/// assert_eq!(config.width, 1200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Background colour as `#rrggbb`
    pub background: String,
    /// Title font size
    pub title_size: f32,
    /// Sizes tried for the caption, largest first
    pub caption_sizes: SizeRange,
    /// Distance from the top of the canvas to the top of the title's first line
    pub top_margin: Px,
    /// Left and right margins, bounding the width of the text
    pub side_margin: Px,
    /// Space kept free below the caption's baseline; the top margin when unset
    pub bottom_margin: Option<Px>,
    /// Baseline spacing as a multiple of the title's line height
    pub line_spacing: f32,
    /// How far the title's drop shadow is offset, right and down
    pub shadow_offset: Px,
    /// Inset of the darkened panel behind the text
    pub panel_margin: Px,
    pub panel_radius: Px,
    pub panel_opacity: f32,
    /// Draw the top margin and every baseline of the grid
    pub debug: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            width: 1200,
            height: 628,
            background: "#1a1a2e".to_string(),
            title_size: 72.0,
            caption_sizes: SizeRange::new(40.0, 16.0, 2.0),
            top_margin: Px(135.0),
            side_margin: Px(60.0),
            bottom_margin: None,
            line_spacing: 1.5,
            shadow_offset: Px(2.0),
            panel_margin: Px(20.0),
            panel_radius: Px(20.0),
            panel_opacity: 100.0 / 255.0,
            debug: false,
        }
    }
}

impl CardConfig {
    /// Read a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CardConfig, CardError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// The card's margins. The bottom margin mirrors the top one unless it was set.
    pub fn margins(&self) -> Margins {
        Margins::trbl(
            self.top_margin,
            self.side_margin,
            self.bottom_margin.unwrap_or(self.top_margin),
            self.side_margin,
        )
    }

    pub fn background_colour(&self) -> Colour {
        Colour::from_hex(&self.background)
    }

    pub fn canvas(&self) -> Rect {
        Rect::canvas(Px::from(self.width), Px::from(self.height))
    }
}

/// A line of text and the y coordinate of its baseline
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub line: Line,
    pub y: Px,
}

/// Wrap and balance `text` within `max_width` and put each line on successive baselines
/// of `grid`
pub fn layout_title<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: Px,
    size: f32,
    grid: &BaselineGrid,
    measure: &M,
) -> Vec<PlacedLine> {
    balance(wrap(text, max_width, size, measure))
        .into_iter()
        .enumerate()
        .map(|(index, line)| PlacedLine {
            line,
            y: grid.baseline(index),
        })
        .collect()
}

/// A single line of text that was sized to fit its width
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLayout {
    pub line: Line,
    pub y: Px,
    pub size: f32,
    /// `false` when the caption overflows even at the smallest size
    pub fits: bool,
}

/// Size `text` to fit `max_width` and place it on the lowest baseline of `grid` that
/// leaves `bottom_margin` free at the bottom of the canvas.
///
/// The grid should be the title's, not one derived from the caption's own font, so that
/// the caption shares the title's rhythm whatever size either is set at.
pub fn layout_caption<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: Px,
    sizes: &SizeRange,
    grid: &BaselineGrid,
    bottom_margin: Px,
    canvas_height: Px,
    measure: &M,
) -> CaptionLayout {
    let fit = fit_font_size(text, max_width, sizes, measure);
    let y = grid.last_baseline_within(canvas_height - bottom_margin);
    CaptionLayout {
        line: Line::from_text(text),
        y,
        size: fit.size,
        fits: fit.fits,
    }
}

/// The complete layout of a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    /// The baseline grid, derived from the title font
    pub grid: BaselineGrid,
    pub margins: Margins,
    pub title: Vec<PlacedLine>,
    pub caption: CaptionLayout,
    /// Rounded baselines for debugging, from the first one to the bottom of the canvas
    pub guides: Vec<Px>,
}

impl CardLayout {
    /// Lay out a card's `title` and `caption`, measuring each with its own font
    pub fn compute<T, C>(
        config: &CardConfig,
        title: &str,
        caption: &str,
        title_font: &T,
        caption_font: &C,
    ) -> CardLayout
    where
        T: TextMeasurer + ?Sized,
        C: TextMeasurer + ?Sized,
    {
        let margins = config.margins();
        let width = Px::from(config.width);
        let height = Px::from(config.height);
        let max_width = margins.content_width(width);

        let grid = BaselineGrid::for_font(
            title_font,
            config.title_size,
            margins.top,
            config.line_spacing,
        );
        debug!("baseline grid starts at {} every {}", grid.baseline(0), grid.step());

        let title = layout_title(title, max_width, config.title_size, &grid, title_font);
        let caption = layout_caption(
            caption,
            max_width,
            &config.caption_sizes,
            &grid,
            margins.bottom,
            height,
            caption_font,
        );
        let guides = grid.baselines_until(height);

        CardLayout {
            grid,
            margins,
            title,
            caption,
            guides,
        }
    }
}

/// Draw a laid out card: background, panel, the title with its drop shadow, the
/// optional debug guides and finally the caption. A caption that didn't fit is drawn
/// anyway, at its smallest size, and logged.
pub fn render_card<R: Renderer + ?Sized>(
    layout: &CardLayout,
    config: &CardConfig,
    renderer: &mut R,
) {
    renderer.fill_background(config.background_colour());
    renderer.fill_panel(
        config.canvas().inset(config.panel_margin),
        config.panel_radius,
        colours::BLACK,
        config.panel_opacity,
    );

    let shadow = TextStyle {
        font: FontRole::Title,
        size: config.title_size,
        colour: colours::BLACK,
        opacity: 1.0,
    };
    let text = TextStyle {
        colour: colours::WHITE,
        ..shadow
    };
    let x = layout.margins.left;
    for placed in layout.title.iter() {
        let line = placed.line.text();
        renderer.set_style(&shadow);
        renderer.draw_line(&line, x + config.shadow_offset, placed.y + config.shadow_offset);
        renderer.set_style(&text);
        renderer.draw_line(&line, x, placed.y);
    }

    if config.debug {
        renderer.draw_guide(layout.margins.top, colours::RED);
        for &y in layout.guides.iter() {
            renderer.draw_guide(y, colours::RED);
        }
    }

    let caption = &layout.caption;
    if !caption.fits {
        warn!(
            "{:?} is wider than the card even at {}pt and will overflow",
            caption.line.text(),
            caption.size
        );
    }
    renderer.set_style(&TextStyle {
        font: FontRole::Caption,
        size: caption.size,
        colour: colours::MUTED,
        opacity: 220.0 / 255.0,
    });
    renderer.draw_line(&caption.line.text(), x, caption.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::testing::FixedAdvance;
    use crate::render::{DrawCommand, DrawList};

    /// 0.5 * size per character and a line height of 1.25 * size
    fn measure() -> FixedAdvance {
        FixedAdvance {
            advance: 0.5,
            height: 1.25,
        }
    }

    #[test]
    fn title_lines_sit_on_the_grid() {
        let grid = BaselineGrid::new(Px(135.0), Px(90.0), 1.5);
        // 36px per character at 72pt, so 29 characters fit in 1044px
        let placed = layout_title(
            "Advanced Patterns for Building High-Performance Web Services",
            Px(1044.0),
            72.0,
            &grid,
            &measure(),
        );
        let lines: Vec<(String, Px)> = placed.iter().map(|p| (p.line.text(), p.y)).collect();
        assert_eq!(
            lines,
            vec![
                ("Advanced Patterns for".to_string(), Px(225.0)),
                ("Building High-Performance".to_string(), Px(360.0)),
                ("Web Services".to_string(), Px(495.0)),
            ]
        );
    }

    #[test]
    fn empty_title_has_no_lines() {
        let grid = BaselineGrid::new(Px(135.0), Px(90.0), 1.5);
        assert!(layout_title("   ", Px(1080.0), 72.0, &grid, &measure()).is_empty());
    }

    #[test]
    fn caption_uses_the_title_grid() {
        let grid = BaselineGrid::new(Px(135.0), Px(90.0), 1.5);
        let caption = layout_caption(
            "https://example.com/posts/grids",
            Px(1080.0),
            &SizeRange::new(40.0, 16.0, 2.0),
            &grid,
            Px(135.0),
            Px(628.0),
            &measure(),
        );
        // 225, 360 and 495 are baselines; only the first two are within 628 - 135 = 493
        assert_eq!(caption.y, Px(360.0));
        assert_eq!(caption.size, 40.0);
        assert!(caption.fits);
        assert_eq!(caption.line.text(), "https://example.com/posts/grids");
    }

    #[test]
    fn overflowing_caption_is_flagged() {
        let grid = BaselineGrid::new(Px(135.0), Px(90.0), 1.5);
        let url = format!("https://example.com/{}", "a".repeat(200));
        let caption = layout_caption(
            &url,
            Px(1080.0),
            &SizeRange::new(40.0, 16.0, 2.0),
            &grid,
            Px(135.0),
            Px(628.0),
            &measure(),
        );
        assert_eq!(caption.size, 16.0);
        assert!(!caption.fits);
    }

    #[test]
    fn bottom_margin_defaults_to_top_margin() {
        let config = CardConfig::default();
        assert_eq!(config.margins().bottom, Px(135.0));

        let config = CardConfig {
            bottom_margin: Some(Px(67.5)),
            ..CardConfig::default()
        };
        assert_eq!(config.margins().bottom, Px(67.5));
        assert_eq!(config.margins().left, Px(60.0));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: CardConfig = toml::from_str(
            r##"
            background = "#16a085"
            line_spacing = 1.25
            bottom_margin = 60.0

            [caption_sizes]
            max = 32.0
            min = 12.0
            step = 4.0
            "##,
        )
        .expect("valid config");
        assert_eq!(config.background_colour().to_rgb_bytes(), [0x16, 0xa0, 0x85]);
        assert_eq!(config.line_spacing, 1.25);
        assert_eq!(config.bottom_margin, Some(Px(60.0)));
        assert_eq!(config.caption_sizes, SizeRange::new(32.0, 12.0, 4.0));
        assert_eq!(config.title_size, 72.0);
        assert!(!config.debug);
    }

    #[test]
    fn card_layout() {
        let config = CardConfig::default();
        let title_font = measure();
        // the caption font is twice as wide, but that must not move the grid
        let caption_font = FixedAdvance {
            advance: 1.0,
            height: 3.0,
        };
        let layout = CardLayout::compute(
            &config,
            "Grids Keep Different Fonts In Step",
            "example.com",
            &title_font,
            &caption_font,
        );

        assert_eq!(layout.grid.line_height, Px(90.0));
        assert_eq!(layout.title[0].y, Px(225.0));
        assert!(layout.title.iter().all(|p| p.line.word_count() >= 1));
        assert_eq!(layout.caption.y, Px(360.0));
        assert_eq!(layout.caption.size, 40.0);
        assert_eq!(layout.guides, vec![Px(225.0), Px(360.0), Px(495.0)]);
    }

    #[test]
    fn rendering_order() {
        let config = CardConfig {
            debug: true,
            ..CardConfig::default()
        };
        let font = measure();
        let layout = CardLayout::compute(&config, "Hello World", "example.com", &font, &font);
        let mut list = DrawList::new();
        render_card(&layout, &config, &mut list);

        assert_eq!(
            list.commands[0],
            DrawCommand::Background(colours::DEFAULT_BACKGROUND)
        );
        assert!(matches!(list.commands[1], DrawCommand::Panel { .. }));

        let texts: Vec<(&str, Px, Px, Colour)> = list
            .texts()
            .map(|(text, x, y, style)| (text, x, y, style.colour))
            .collect();
        assert_eq!(
            texts,
            vec![
                ("Hello World", Px(62.0), Px(227.0), colours::BLACK),
                ("Hello World", Px(60.0), Px(225.0), colours::WHITE),
                ("example.com", Px(60.0), Px(360.0), colours::MUTED),
            ]
        );

        let guides: Vec<Px> = list
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Guide { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(guides, vec![Px(135.0), Px(225.0), Px(360.0), Px(495.0)]);

        let (_, _, _, caption_style) = list.texts().last().expect("caption was drawn");
        assert_eq!(caption_style.font, FontRole::Caption);
        assert_eq!(caption_style.size, 40.0);
    }

    #[test]
    fn overflowing_caption_is_still_drawn() {
        let config = CardConfig::default();
        let font = measure();
        let url = format!("https://example.com/{}", "a".repeat(200));
        let layout = CardLayout::compute(&config, "Hello World", &url, &font, &font);
        assert!(!layout.caption.fits);

        let mut list = DrawList::new();
        render_card(&layout, &config, &mut list);
        let (text, x, y, style) = list.texts().last().expect("caption was drawn");
        assert_eq!(text, url);
        assert_eq!((x, y), (Px(60.0), Px(360.0)));
        assert_eq!(style.size, 16.0);
        assert_eq!(style.font, FontRole::Caption);
    }

    #[test]
    fn draws_pixels() {
        use crate::raster::{CardFonts, PixmapRenderer};

        let config = CardConfig {
            width: 300,
            height: 200,
            top_margin: Px(20.0),
            side_margin: Px(30.0),
            title_size: 20.0,
            ..CardConfig::default()
        };
        let font = FixedAdvance {
            advance: 0.5,
            height: 1.0,
        };
        let layout = CardLayout::compute(&config, "Hi", "x.io", &font, &font);
        // 20px line height, so the title stands on y = 40
        assert_eq!(layout.title[0].y, Px(40.0));

        let fonts = CardFonts {
            title: &font,
            caption: &font,
        };
        let mut canvas = PixmapRenderer::new(300, 200, fonts).expect("valid canvas");
        render_card(&layout, &config, &mut canvas);
        let image = canvas.to_image();

        // untouched background outside the panel, white title text inside it
        assert_eq!(image.get_pixel(5, 5).0, [0x1a, 0x1a, 0x2e, 255]);
        assert_eq!(image.get_pixel(33, 30).0, [255, 255, 255, 255]);
        assert_ne!(image.get_pixel(60, 30).0, [255, 255, 255, 255]);
    }

    #[test]
    fn guides_only_when_debugging() {
        let config = CardConfig::default();
        let font = measure();
        let layout = CardLayout::compute(&config, "Hello World", "example.com", &font, &font);
        let mut list = DrawList::new();
        render_card(&layout, &config, &mut list);
        assert!(!list
            .commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Guide { .. })));
    }
}
