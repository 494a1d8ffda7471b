//! A node shape with a label centered on it.

use crate::{
    draw::{Canvas, Drawable, Shape, Text},
    geometry::{Point, Size},
};

/// Combines a [`Shape`] with a [`Text`] label drawn on top of its center.
#[derive(Debug, Clone)]
pub struct ShapeWithText<'a> {
    shape: Shape,
    text: Text<'a>,
}

impl<'a> ShapeWithText<'a> {
    pub fn new(shape: Shape, text: Text<'a>) -> Self {
        Self { shape, text }
    }

    /// Returns the shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Drawable for ShapeWithText<'_> {
    fn draw(&self, canvas: &mut Canvas, position: Point) {
        self.shape.draw(canvas, position);
        self.text.draw(canvas, position);
    }

    fn size(&self) -> Size {
        self.shape.size()
    }
}
