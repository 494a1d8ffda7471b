//! Drawing primitives for raster output.
//!
//! Everything in this module writes pixels into a [`Canvas`]. Nothing is
//! anti-aliased: lines use Bresenham's algorithm, triangles a barycentric
//! inclusion test, circles an integer distance test, and text a fixed-width
//! bitmap font.
//!
//! # Overview
//!
//! - [`Canvas`] - The RGBA pixel buffer and its low-level primitives
//! - [`Arrow`] - Directed and bidirectional arrows with filled heads
//! - [`ShapeDefinition`] / [`Shape`] - Node shapes that can clip edges to their boundary
//! - [`ShapeWithText`] - A node shape with a centered label
//! - [`Text`] / [`TextDefinition`] - Bitmap-font text with word wrapping

mod arrow;
mod canvas;
mod font;
mod shape;
mod shape_with_text;
mod text;

pub use arrow::{Arrow, ArrowDefinition, ArrowDirection};
pub use canvas::{Canvas, point_in_triangle};
pub use shape::{CircleDefinition, RectangleDefinition, Shape, ShapeDefinition};
pub use shape_with_text::ShapeWithText;
pub use text::{LINE_HEIGHT, Text, TextDefinition, wrap_lines};

use crate::geometry::{Point, Size};

/// Something that can draw itself onto a [`Canvas`] around a position.
pub trait Drawable {
    /// Draws the element centered at `position`.
    fn draw(&self, canvas: &mut Canvas, position: Point);

    /// Returns the size of the element once drawn.
    fn size(&self) -> Size;
}
