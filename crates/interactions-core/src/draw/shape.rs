//! Shape definitions for scenario nodes.
//!
//! This module provides the [`ShapeDefinition`] trait and the [`Shape`]
//! wrapper for drawing node shapes (circles and rectangles) and for clipping
//! edges to their boundary.

use std::rc::Rc;

use crate::{
    draw::{Canvas, Drawable},
    geometry::{Point, Size},
};

mod circle;
mod rectangle;

pub use circle::CircleDefinition;
pub use rectangle::RectangleDefinition;

/// A trait for shape definitions that provide stateless calculations.
pub trait ShapeDefinition: std::fmt::Debug {
    /// Find the point where a ray from the shape centered at `a` towards `b`
    /// leaves the shape's boundary.
    fn find_intersection(&self, a: Point, b: Point) -> Point;

    /// Returns the outer size of the shape.
    fn size(&self) -> Size;

    /// Draws the filled shape with its border, centered at `center`.
    fn render(&self, canvas: &mut Canvas, center: Point);
}

/// A shareable handle to a shape definition.
#[derive(Debug, Clone)]
pub struct Shape {
    definition: Rc<dyn ShapeDefinition>,
}

impl Shape {
    pub fn new(definition: Rc<dyn ShapeDefinition>) -> Self {
        Self { definition }
    }

    /// Find the point where a ray from this shape centered at `a` towards `b`
    /// leaves the shape's boundary.
    pub fn find_intersection(&self, a: Point, b: Point) -> Point {
        self.definition.find_intersection(a, b)
    }
}

impl Drawable for Shape {
    fn draw(&self, canvas: &mut Canvas, position: Point) {
        self.definition.render(canvas, position);
    }

    fn size(&self) -> Size {
        self.definition.size()
    }
}
