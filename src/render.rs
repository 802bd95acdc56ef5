use crate::colour::Colour;
use crate::rect::Rect;
use crate::units::Px;

/// Which of the card's fonts a line is set in
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FontRole {
    Title,
    Caption,
}

/// How the next lines are drawn
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub font: FontRole,
    pub size: f32,
    pub colour: Colour,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font: FontRole::Title,
            size: 16.0,
            colour: crate::colours::BLACK,
            opacity: 1.0,
        }
    }
}

/// A drawing surface for laid out cards.
///
/// Only [Renderer::draw_line] is needed to draw text; the other operations draw the
/// card's decoration and default to doing nothing.
pub trait Renderer {
    /// Set the style used by subsequent calls to [Renderer::draw_line]
    fn set_style(&mut self, style: &TextStyle);

    /// Paint a single line of text with its left edge at `x` and its baseline at `y`
    fn draw_line(&mut self, text: &str, x: Px, y: Px);

    /// Fill the whole canvas
    fn fill_background(&mut self, _colour: Colour) {}

    /// Fill a rectangle whose top corners are rounded by `radius`
    fn fill_panel(&mut self, _rect: Rect, _radius: Px, _colour: Colour, _opacity: f32) {}

    /// Draw a horizontal hairline across the canvas at `y`
    fn draw_guide(&mut self, _y: Px, _colour: Colour) {}
}

/// A single recorded drawing operation
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    Background(Colour),
    Panel {
        rect: Rect,
        radius: Px,
        colour: Colour,
        opacity: f32,
    },
    Guide {
        y: Px,
        colour: Colour,
    },
    Text {
        text: String,
        x: Px,
        y: Px,
        style: TextStyle,
    },
}

/// A [Renderer] that just records what it was asked to draw
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    style: TextStyle,
}

impl DrawList {
    pub fn new() -> DrawList {
        DrawList::default()
    }

    /// Every text command, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Px, Px, &TextStyle)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, x, y, style } => Some((text.as_str(), *x, *y, style)),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn set_style(&mut self, style: &TextStyle) {
        self.style = *style;
    }

    fn draw_line(&mut self, text: &str, x: Px, y: Px) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: self.style,
        });
    }

    fn fill_background(&mut self, colour: Colour) {
        self.commands.push(DrawCommand::Background(colour));
    }

    fn fill_panel(&mut self, rect: Rect, radius: Px, colour: Colour, opacity: f32) {
        self.commands.push(DrawCommand::Panel {
            rect,
            radius,
            colour,
            opacity,
        });
    }

    fn draw_guide(&mut self, y: Px, colour: Colour) {
        self.commands.push(DrawCommand::Guide { y, colour });
    }
}
