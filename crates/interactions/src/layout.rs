//! Grid layout: image dimensions and where each panel goes.
//!
//! The grid is a heading band, a legend box and then the scenario panels in
//! row-major order, all separated by the same margin:
//!
//! ```text
//! width  = columns·panel_width + (columns + 1)·margin
//! height = title_height + legend_height + rows·panel_height + (rows + 2)·margin
//! ```
//!
//! Placement inside a single panel lives in the [`panel`] submodule.

pub mod panel;

pub use panel::{PanelLayout, PlacedNode};

use log::debug;

use interactions_core::geometry::{Bounds, Point, Size};

use crate::{config::LayoutConfig, error::InteractionsError};

/// Largest image, in pixels, a grid may allocate.
const MAX_PIXELS: u64 = 1 << 28;

/// Dimensions of a grid of panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
    rows: u32,
    panel_width: u32,
    panel_height: u32,
    margin: u32,
    title_height: u32,
    legend_height: u32,
    width: u32,
    height: u32,
}

impl GridLayout {
    /// Computes the layout for `count` panels in `columns` columns.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionsError::InvalidColumns`] when `columns < 1`, and
    /// [`InteractionsError::Layout`] when the resulting image would be too
    /// large to allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use interactions::{config::LayoutConfig, layout::GridLayout};
    /// let layout = GridLayout::new(&LayoutConfig::default(), 64, 8).unwrap();
    /// assert_eq!((layout.width(), layout.height()), (3060, 2130));
    ///
    /// assert!(GridLayout::new(&LayoutConfig::default(), 64, 0).is_err());
    /// ```
    pub fn new(
        config: &LayoutConfig,
        count: usize,
        columns: i64,
    ) -> Result<Self, InteractionsError> {
        let columns = u32::try_from(columns)
            .ok()
            .filter(|&columns| columns >= 1)
            .ok_or(InteractionsError::InvalidColumns(columns))?;

        let too_large = || {
            InteractionsError::Layout(format!(
                "a grid of {count} panels in {columns} columns is too large to render"
            ))
        };

        let count = u64::try_from(count).map_err(|_| too_large())?;
        let cols = u64::from(columns);
        let rows = count.div_ceil(cols);
        let margin = u64::from(config.margin());

        let width = cols * u64::from(config.panel_width()) + (cols + 1) * margin;
        let height = u64::from(config.title_height())
            + u64::from(config.legend_height())
            + rows * u64::from(config.panel_height())
            + (rows + 2) * margin;

        if width.saturating_mul(height) > MAX_PIXELS {
            return Err(too_large());
        }

        let layout = Self {
            columns,
            rows: u32::try_from(rows).map_err(|_| too_large())?,
            panel_width: config.panel_width(),
            panel_height: config.panel_height(),
            margin: config.margin(),
            title_height: config.title_height(),
            legend_height: config.legend_height(),
            width: u32::try_from(width).map_err(|_| too_large())?,
            height: u32::try_from(height).map_err(|_| too_large())?,
        };

        debug!(
            columns = layout.columns,
            rows = layout.rows,
            width = layout.width,
            height = layout.height;
            "Grid layout computed"
        );

        Ok(layout)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Returns the baseline of the heading line.
    pub fn heading_baseline(&self) -> i32 {
        self.margin as i32 + 18
    }

    /// Returns the baseline of the attribution line under the heading.
    pub fn attribution_baseline(&self) -> i32 {
        self.margin as i32 + 36
    }

    /// Returns the legend box, spanning the width between the outer margins.
    pub fn legend_bounds(&self) -> Bounds {
        let top = (self.margin + self.title_height) as f32;
        Bounds::new_from_top_left(
            Point::new(self.margin as f32, top),
            Size::new(
                (self.width - 2 * self.margin) as f32,
                self.legend_height as f32,
            ),
        )
    }

    /// Returns the bounds of panel `index`, counting row by row.
    pub fn panel_bounds(&self, index: usize) -> Bounds {
        let column = (index % self.columns as usize) as u32;
        let row = (index / self.columns as usize) as u32;

        let x = self.margin + column * (self.panel_width + self.margin);
        let y = self.margin
            + self.title_height
            + self.legend_height
            + self.margin
            + row * (self.panel_height + self.margin);

        Bounds::new_from_top_left(
            Point::new(x as f32, y as f32),
            Size::new(self.panel_width as f32, self.panel_height as f32),
        )
    }
}
