use super::ShapeDefinition;
use crate::{
    color::Color,
    draw::Canvas,
    geometry::{Point, Size},
};

/// A filled circle with a border, used for event nodes.
#[derive(Debug, Clone)]
pub struct CircleDefinition {
    radius: f32,
    fill_color: Color,
    line_color: Color,
}

impl CircleDefinition {
    /// Create a new circle definition
    pub fn new(radius: f32, fill_color: Color, line_color: Color) -> Self {
        Self {
            radius,
            fill_color,
            line_color,
        }
    }
}

impl ShapeDefinition for CircleDefinition {
    fn find_intersection(&self, a: Point, b: Point) -> Point {
        match b.sub_point(a).normalize() {
            Some(direction) => a.add_point(direction.scale(self.radius)),
            None => b,
        }
    }

    fn size(&self) -> Size {
        Size::new(self.radius * 2.0, self.radius * 2.0)
    }

    fn render(&self, canvas: &mut Canvas, center: Point) {
        let center = center.to_pixel();
        let radius = self.radius as i32;
        canvas.fill_circle(center, radius, self.fill_color);
        canvas.draw_circle_outline(center, radius, self.line_color);
    }
}
