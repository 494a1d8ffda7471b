use super::ShapeDefinition;
use crate::{
    color::Color,
    draw::Canvas,
    geometry::{Point, Size},
};

/// A filled rectangle with a border, used for process nodes.
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    size: Size,
    fill_color: Color,
    line_color: Color,
}

impl RectangleDefinition {
    /// Create a new rectangle definition
    pub fn new(size: Size, fill_color: Color, line_color: Color) -> Self {
        Self {
            size,
            fill_color,
            line_color,
        }
    }
}

impl ShapeDefinition for RectangleDefinition {
    fn find_intersection(&self, a: Point, b: Point) -> Point {
        find_rectangle_intersection(a, b, self.size)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn render(&self, canvas: &mut Canvas, center: Point) {
        let bounds = center.to_bounds(self.size);
        canvas.fill_rect(bounds, self.fill_color);
        canvas.draw_rect_border(bounds, self.line_color);
    }
}

// Slack for rays that leave exactly through a corner
const EDGE_TOLERANCE: f32 = 0.001;

pub(super) fn find_rectangle_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let half_width = a_size.width() / 2.0;
    let half_height = a_size.height() / 2.0;

    let Some(direction) = b.sub_point(a).normalize() else {
        return b;
    };
    let (dx_norm, dy_norm) = (direction.x(), direction.y());

    // Distance along the ray to each edge line
    let t_top = -half_height / dy_norm;
    let t_bottom = half_height / dy_norm;
    let t_left = -half_width / dx_norm;
    let t_right = half_width / dx_norm;

    // The first positive hit whose other coordinate lies on the edge
    let mut t = f32::MAX;

    for t_edge in [t_top, t_bottom] {
        if t_edge.is_finite() && t_edge > 0.0 && t_edge < t {
            let x = dx_norm * t_edge;
            if x.abs() <= half_width + EDGE_TOLERANCE {
                t = t_edge;
            }
        }
    }

    for t_edge in [t_left, t_right] {
        if t_edge.is_finite() && t_edge > 0.0 && t_edge < t {
            let y = dy_norm * t_edge;
            if y.abs() <= half_height + EDGE_TOLERANCE {
                t = t_edge;
            }
        }
    }

    if t == f32::MAX {
        return b;
    }

    Point::new(dx_norm.mul_add(t, a.x()), dy_norm.mul_add(t, a.y()))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x(), epsilon = 0.0001);
        assert_approx_eq!(f32, actual.y(), expected.y(), epsilon = 0.0001);
    }

    #[test]
    fn test_intersection_from_right() {
        let result = find_rectangle_intersection(
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Size::new(40.0, 40.0),
        );
        assert_point_eq(result, Point::new(120.0, 100.0));
    }

    #[test]
    fn test_intersection_from_top() {
        let result = find_rectangle_intersection(
            Point::new(100.0, 100.0),
            Point::new(100.0, 0.0),
            Size::new(40.0, 40.0),
        );
        assert_point_eq(result, Point::new(100.0, 80.0));
    }

    #[test]
    fn test_intersection_diagonal() {
        // For a square, a 45-degree ray leaves through the corner
        let result = find_rectangle_intersection(
            Point::new(100.0, 100.0),
            Point::new(200.0, 200.0),
            Size::new(40.0, 40.0),
        );
        assert_point_eq(result, Point::new(120.0, 120.0));
    }

    #[test]
    fn test_intersection_wide_rectangle() {
        // Shallow ray hits the short side, steep ray hits the long side
        let size = Size::new(60.0, 36.0);
        let a = Point::new(0.0, 0.0);

        let shallow = find_rectangle_intersection(a, Point::new(100.0, 10.0), size);
        assert_approx_eq!(f32, shallow.x(), 30.0, epsilon = 0.0001);

        let steep = find_rectangle_intersection(a, Point::new(10.0, 100.0), size);
        assert_approx_eq!(f32, steep.y(), 18.0, epsilon = 0.0001);
    }

    #[test]
    fn test_intersection_same_point() {
        let a = Point::new(100.0, 100.0);
        assert_eq!(find_rectangle_intersection(a, a, Size::new(40.0, 40.0)), a);
    }

    #[test]
    fn test_render_fills_and_borders() {
        const FILL: Color = Color::rgb(220, 235, 250);
        const BORDER: Color = Color::rgb(20, 40, 120);

        let definition = RectangleDefinition::new(Size::new(20.0, 10.0), FILL, BORDER);
        let mut canvas = Canvas::new(40, 40);
        definition.render(&mut canvas, Point::new(20.0, 20.0));

        // Bounds span x 10..30, y 15..25
        assert_eq!(canvas.pixel(20, 20), Some(FILL));
        assert_eq!(canvas.pixel(10, 20), Some(BORDER));
        assert_eq!(canvas.pixel(29, 24), Some(BORDER));
        assert_eq!(canvas.pixel(30, 20), Some(Color::rgb(0, 0, 0).with_alpha(0)));
    }
}
