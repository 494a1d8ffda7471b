//! Arrow drawable types.
//!
//! This module provides types for defining and drawing arrows: a straight
//! Bresenham line with filled triangular heads. An [`ArrowDirection`] decides
//! whether a head is drawn only at the destination or at both ends.

use std::{fmt, rc::Rc};

use crate::{
    color::Color,
    draw::{Canvas, Shape},
    geometry::Point,
};

/// Defines the direction of arrow heads.
///
/// - `Forward`: Creates `->` arrows pointing from source to destination
/// - `Bidirectional`: Creates `<->` arrows with heads at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Forward,       // ->
    Bidirectional, // <->
}

impl fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "->",
            Self::Bidirectional => "<->",
        })
    }
}

/// Defines the visual properties of an arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowDefinition {
    color: Color,
    head_length: f32,
}

impl ArrowDefinition {
    /// Creates a new ArrowDefinition with the given color and the default
    /// head length of 10 pixels.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            head_length: 10.0,
        }
    }

    /// Gets the arrow color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Gets the length of an arrow head. Heads are as wide as they are long.
    pub fn head_length(&self) -> f32 {
        self.head_length
    }
}

impl Default for ArrowDefinition {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

/// A drawable arrow with styling and direction.
#[derive(Debug, Clone)]
pub struct Arrow {
    definition: Rc<ArrowDefinition>,
    direction: ArrowDirection,
}

impl Arrow {
    /// Creates a new Arrow
    pub fn new(definition: Rc<ArrowDefinition>, direction: ArrowDirection) -> Self {
        Self {
            definition,
            direction,
        }
    }

    /// Draws the arrow from `source` to `destination` as given, the head
    /// tip resting on `destination` (and on `source` when bidirectional).
    ///
    /// Zero-length arrows draw nothing.
    pub fn draw(&self, canvas: &mut Canvas, source: Point, destination: Point) {
        let Some(direction) = destination.sub_point(source).normalize() else {
            return;
        };
        let color = self.definition.color();

        canvas.draw_line(source.to_pixel(), destination.to_pixel(), color);
        self.draw_head(canvas, destination, direction);
        if self.direction == ArrowDirection::Bidirectional {
            self.draw_head(canvas, source, direction.scale(-1.0));
        }
    }

    /// Draws the arrow between two shapes, clipping both ends to the shape
    /// boundaries so heads touch the outline instead of the center.
    pub fn draw_between(
        &self,
        canvas: &mut Canvas,
        (source_center, source_shape): (Point, &Shape),
        (destination_center, destination_shape): (Point, &Shape),
    ) {
        let source = source_shape.find_intersection(source_center, destination_center);
        let destination = destination_shape.find_intersection(destination_center, source_center);
        self.draw(canvas, source, destination);
    }

    /// Fills a triangular head whose tip is `tip`, pointing along `direction`
    /// (a unit vector).
    fn draw_head(&self, canvas: &mut Canvas, tip: Point, direction: Point) {
        let length = self.definition.head_length();
        let base = tip.sub_point(direction.scale(length));
        let wing = direction.perpendicular().scale(length / 2.0);

        canvas.fill_triangle(
            tip.to_pixel(),
            base.add_point(wing).to_pixel(),
            base.sub_point(wing).to_pixel(),
            self.definition.color(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::CircleDefinition;

    const INK: Color = Color::rgb(0, 0, 0);

    fn blank(width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        canvas.fill(Color::rgb(255, 255, 255));
        canvas
    }

    fn arrow(direction: ArrowDirection) -> Arrow {
        Arrow::new(Rc::new(ArrowDefinition::new(INK)), direction)
    }

    fn column_ink(canvas: &Canvas, x: i32) -> usize {
        (0..canvas.height() as i32)
            .filter(|&y| canvas.pixel(x, y) == Some(INK))
            .count()
    }

    #[test]
    fn test_forward_head_at_destination_only() {
        let mut canvas = blank(100, 21);
        arrow(ArrowDirection::Forward).draw(
            &mut canvas,
            Point::new(10.0, 10.0),
            Point::new(70.0, 10.0),
        );

        // The head widens towards its base, 10px behind the tip
        assert!(column_ink(&canvas, 61) > 1);
        assert_eq!(column_ink(&canvas, 12), 1);
        assert_eq!(canvas.pixel(70, 10), Some(INK));
        assert_eq!(canvas.pixel(71, 10), Some(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn test_bidirectional_heads_at_both_ends() {
        let mut canvas = blank(100, 21);
        arrow(ArrowDirection::Bidirectional).draw(
            &mut canvas,
            Point::new(10.0, 10.0),
            Point::new(70.0, 10.0),
        );

        assert!(column_ink(&canvas, 61) > 1);
        assert!(column_ink(&canvas, 19) > 1);
        assert_eq!(column_ink(&canvas, 40), 1);
    }

    #[test]
    fn test_zero_length_draws_nothing() {
        let mut canvas = blank(20, 20);
        let before = canvas.image().clone();
        arrow(ArrowDirection::Bidirectional).draw(
            &mut canvas,
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
        );
        assert_eq!(canvas.image(), &before);
    }

    #[test]
    fn test_draw_between_clips_to_shapes() {
        let circle = Shape::new(Rc::new(CircleDefinition::new(
            20.0,
            Color::rgb(220, 235, 250),
            Color::rgb(20, 40, 120),
        )));
        let mut canvas = blank(200, 40);
        arrow(ArrowDirection::Forward).draw_between(
            &mut canvas,
            (Point::new(30.0, 20.0), &circle),
            (Point::new(170.0, 20.0), &circle),
        );

        assert_eq!(canvas.pixel(49, 20), Some(Color::rgb(255, 255, 255)));
        assert_eq!(canvas.pixel(50, 20), Some(INK));
        assert_eq!(canvas.pixel(150, 20), Some(INK));
        assert_eq!(canvas.pixel(151, 20), Some(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(ArrowDirection::Forward.to_string(), "->");
        assert_eq!(ArrowDirection::Bidirectional.to_string(), "<->");
    }
}
