//! Bitmap-font text rendering with word wrapping.
//!
//! Text is drawn with the fixed-width 5x7 font from the `font` module, scaled
//! by an integer factor. Because every character has the same advance, text
//! measurement is a character count and wrapping is exact.
//!
//! # Quick Start
//!
//! ```
//! # use interactions_core::{color::Color, draw::{Canvas, Text, TextDefinition}};
//! let style = TextDefinition::new(Color::rgb(20, 20, 20));
//! let text = Text::new(&style, "A → B (mutualism)");
//!
//! let mut canvas = Canvas::new(200, 40);
//! let used = text.draw_wrapped(&mut canvas, 10, 20, 60);
//! assert_eq!(used, 2 * style.line_height());
//! ```

use crate::{
    color::Color,
    draw::{
        Canvas, Drawable,
        font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH},
    },
    geometry::{Point, Size},
};

/// Distance between consecutive baselines of wrapped text, before scaling.
pub const LINE_HEIGHT: i32 = 11;

/// Defines the visual style for text: color and integer pixel scale.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    color: Color,
    scale: i32,
}

impl TextDefinition {
    /// Creates a text style with the given color at scale 1.
    pub fn new(color: Color) -> Self {
        Self { color, scale: 1 }
    }

    /// Returns this style with a different scale. Scales below 1 are clamped to 1.
    pub fn with_scale(mut self, scale: i32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Returns the text color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the pixel scale factor.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Returns the scaled horizontal advance of one character.
    pub fn advance(&self) -> i32 {
        ADVANCE * self.scale
    }

    /// Returns the scaled distance between baselines.
    pub fn line_height(&self) -> i32 {
        LINE_HEIGHT * self.scale
    }

    /// Returns the width `content` occupies on one line.
    pub fn measure(&self, content: &str) -> i32 {
        char_count(content) * self.advance()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

/// A piece of text paired with the style it is drawn in.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: String,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: impl Into<String>) -> Self {
        Self {
            definition,
            content: content.into(),
        }
    }

    /// Draws the text on a single line starting at `x`, with its baseline at
    /// `baseline`. Glyphs occupy the rows directly above the baseline.
    pub fn draw_at(&self, canvas: &mut Canvas, x: i32, baseline: i32) {
        draw_line_of_text(canvas, &self.content, x, baseline, self.definition);
    }

    /// Draws the text horizontally centered on `center_x`.
    pub fn draw_centered(&self, canvas: &mut Canvas, center_x: i32, baseline: i32) {
        let width = self.definition.measure(&self.content);
        self.draw_at(canvas, center_x - width / 2, baseline);
    }

    /// Draws the text wrapped at word boundaries to fit `max_width`, the first
    /// baseline at `baseline`.
    ///
    /// Returns the total height used (`lines × line height`), or 0 when the
    /// text is blank, so callers can shift what follows.
    pub fn draw_wrapped(&self, canvas: &mut Canvas, x: i32, baseline: i32, max_width: i32) -> i32 {
        let lines = wrap_lines(&self.content, max_width, self.definition);
        let line_height = self.definition.line_height();
        for (line, y) in lines.iter().zip((baseline..).step_by(line_height as usize)) {
            draw_line_of_text(canvas, line, x, y, self.definition);
        }
        lines.len() as i32 * line_height
    }
}

impl Drawable for Text<'_> {
    /// Draws the text centered on `position`, both horizontally and vertically.
    fn draw(&self, canvas: &mut Canvas, position: Point) {
        let (x, y) = position.to_pixel();
        let half_height = GLYPH_HEIGHT * self.definition.scale() / 2;
        self.draw_centered(canvas, x, y + half_height + 1);
    }

    fn size(&self) -> Size {
        Size::new(
            self.definition.measure(&self.content) as f32,
            (GLYPH_HEIGHT * self.definition.scale()) as f32,
        )
    }
}

/// Splits `text` into lines no wider than `max_width`, breaking at whitespace.
///
/// Words are never split: a word wider than `max_width` gets a line of its
/// own. Blank text produces no lines.
///
/// # Examples
///
/// ```
/// # use interactions_core::draw::{TextDefinition, wrap_lines};
/// let style = TextDefinition::default();
/// // 6px per character: "C influences" is 12 characters, 72px
/// let lines = wrap_lines("C influences A only", 72, &style);
/// assert_eq!(lines, vec!["C influences", "A only"]);
/// ```
pub fn wrap_lines(text: &str, max_width: i32, definition: &TextDefinition) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    let advance = definition.advance();
    let mut lines = Vec::new();
    let mut line = first.to_string();
    for word in words {
        if (char_count(&line) + 1 + char_count(word)) * advance <= max_width {
            line.push(' ');
            line.push_str(word);
            continue;
        }
        lines.push(std::mem::replace(&mut line, word.to_string()));
    }
    lines.push(line);
    lines
}

fn char_count(text: &str) -> i32 {
    text.chars().count() as i32
}

fn draw_line_of_text(
    canvas: &mut Canvas,
    content: &str,
    x: i32,
    baseline: i32,
    definition: &TextDefinition,
) {
    let scale = definition.scale();
    let top = baseline - GLYPH_HEIGHT * scale;
    for (index, ch) in content.chars().enumerate() {
        let glyph = font::glyph(ch);
        let left = x + index as i32 * definition.advance();
        for column in 0..GLYPH_WIDTH {
            for row in 0..GLYPH_HEIGHT {
                if !font::is_set(&glyph, column, row) {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        canvas.set_pixel(
                            left + column * scale + dx,
                            top + row * scale + dy,
                            definition.color(),
                        );
                    }
                }
            }
        }
    }
}
