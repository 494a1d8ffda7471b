//! Geometric primitives for grid layout and drawing.
//!
//! - [`Point`] - a position, or a direction vector, in canvas space
//! - [`Size`] - width and height of a shape or panel
//! - [`Bounds`] - an axis-aligned rectangle
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Geometry is computed in `f32`. Pixels are addressed with `i32` pairs
//! obtained through [`Point::to_pixel`], which truncates toward zero.

/// A 2D point in canvas space. Also used as a direction vector by the arrow
/// and shape code.
///
/// # Examples
///
/// ```
/// # use interactions_core::geometry::Point;
/// let tip = Point::new(10.0, 20.0);
/// let back = tip.sub_point(Point::new(0.0, 8.0));
/// assert_eq!(back, Point::new(10.0, 12.0));
/// assert_eq!(back.to_pixel(), (10, 12));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Length of the vector from the origin to this point.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Returns the unit vector pointing in the same direction, or `None`
    /// for a (near) zero-length vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use interactions_core::geometry::Point;
    /// let unit = Point::new(3.0, 4.0).normalize().unwrap();
    /// assert_eq!(unit, Point::new(0.6, 0.8));
    ///
    /// assert!(Point::new(0.0, 0.0).normalize().is_none());
    /// ```
    pub fn normalize(self) -> Option<Self> {
        let length = self.hypot();
        if length < 0.001 {
            return None;
        }
        Some(Self::new(self.x / length, self.y / length))
    }

    /// Returns this vector rotated by 90 degrees: `(-y, x)`.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Integer pixel coordinates, truncated toward zero.
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    /// Bounds of the given size centered on this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half = Self::new(size.width / 2.0, size.height / 2.0);
        Bounds::new_from_top_left(self.sub_point(half), size)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle. The maximum edges are exclusive when the
/// bounds are rasterized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner.
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Truncates the corners to pixels as `(min_x, min_y, max_x, max_y)`.
    pub fn to_pixel_rect(self) -> (i32, i32, i32, i32) {
        let (min_x, min_y) = self.min_point().to_pixel();
        let (max_x, max_y) = Point::new(self.max_x, self.max_y).to_pixel();
        (min_x, min_y, max_x, max_y)
    }
}
