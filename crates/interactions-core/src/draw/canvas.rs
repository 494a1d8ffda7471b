//! The pixel canvas and its low-level drawing primitives.
//!
//! [`Canvas`] wraps an [`image::RgbaImage`]. Every write goes through
//! [`Canvas::set_pixel`], which silently ignores coordinates outside the
//! image, so callers never need to clip.

use image::RgbaImage;
use log::trace;

use crate::{color::Color, geometry::Bounds};

/// An RGBA pixel buffer that shapes, arrows and text are drawn onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a canvas of the given size, initially fully transparent.
    pub fn new(width: u32, height: u32) -> Self {
        trace!(width, height; "Allocating canvas");
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Returns the canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns the canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns the color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = self.index(x, y)?;
        Some(Color::from(*self.image.get_pixel(x, y)))
    }

    /// Writes one pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((x, y)) = self.index(x, y) {
            self.image.put_pixel(x, y, color.to_rgba());
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.image.width() && y < self.image.height()).then_some((x, y))
    }

    /// Fills the whole canvas with one color.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Fills a rectangle. The maximum edges are exclusive.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let (min_x, min_y, max_x, max_y) = bounds.to_pixel_rect();
        for y in min_y..max_y {
            for x in min_x..max_x {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Draws a one pixel border along the inside edge of a rectangle.
    pub fn draw_rect_border(&mut self, bounds: Bounds, color: Color) {
        let (min_x, min_y, max_x, max_y) = bounds.to_pixel_rect();
        for x in min_x..max_x {
            self.set_pixel(x, min_y, color);
            self.set_pixel(x, max_y - 1, color);
        }
        for y in min_y..max_y {
            self.set_pixel(min_x, y, color);
            self.set_pixel(max_x - 1, y, color);
        }
    }

    /// Draws a line with Bresenham's algorithm. Both endpoints are included.
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Color) {
        let (mut x0, mut y0) = from;
        let (x1, y1) = to;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Fills a triangle by testing every pixel of its bounding box.
    ///
    /// Degenerate (zero-area) triangles draw nothing.
    pub fn fill_triangle(&mut self, a: (i32, i32), b: (i32, i32), c: (i32, i32), color: Color) {
        let min_x = a.0.min(b.0).min(c.0);
        let max_x = a.0.max(b.0).max(c.0);
        let min_y = a.1.min(b.1).min(c.1);
        let max_y = a.1.max(b.1).max(c.1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if point_in_triangle((x, y), a, b, c) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Fills a disc of radius `radius` centered at `center`.
    pub fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        let r2 = radius * radius;
        for y in -radius..=radius {
            for x in -radius..=radius {
                if x * x + y * y <= r2 {
                    self.set_pixel(center.0 + x, center.1 + y, color);
                }
            }
        }
    }

    /// Draws the outline of a circle as the pixels whose squared distance
    /// from the center is within 2 of `radius²`.
    pub fn draw_circle_outline(&mut self, center: (i32, i32), radius: i32, color: Color) {
        let r2 = radius * radius;
        for y in -radius..=radius {
            for x in -radius..=radius {
                let d = x * x + y * y;
                if d >= r2 - 2 && d <= r2 + 2 {
                    self.set_pixel(center.0 + x, center.1 + y, color);
                }
            }
        }
    }
}

/// Returns `true` if `p` lies inside (or on the edge of) triangle `abc`,
/// using barycentric coordinates.
///
/// # Examples
///
/// ```
/// # use interactions_core::draw::point_in_triangle;
/// assert!(point_in_triangle((1, 1), (0, 0), (4, 0), (0, 4)));
/// assert!(!point_in_triangle((4, 4), (0, 0), (4, 0), (0, 4)));
/// ```
pub fn point_in_triangle(p: (i32, i32), a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> bool {
    let (px, py) = (f64::from(p.0), f64::from(p.1));
    let (ax, ay) = (f64::from(a.0), f64::from(a.1));
    let (bx, by) = (f64::from(b.0), f64::from(b.1));
    let (cx, cy) = (f64::from(c.0), f64::from(c.1));

    let v0 = (cx - ax, cy - ay);
    let v1 = (bx - ax, by - ay);
    let v2 = (px - ax, py - ay);

    let dot00 = v0.0 * v0.0 + v0.1 * v0.1;
    let dot01 = v0.0 * v1.0 + v0.1 * v1.1;
    let dot02 = v0.0 * v2.0 + v0.1 * v2.1;
    let dot11 = v1.0 * v1.0 + v1.1 * v1.1;
    let dot12 = v1.0 * v2.0 + v1.1 * v2.1;

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0.0 {
        return false;
    }
    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    u >= 0.0 && v >= 0.0 && u + v <= 1.0
}
