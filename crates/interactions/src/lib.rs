//! Interactions - every interaction pattern between four entities, in one grid.
//!
//! Enumerates each combination of a direct A–B relation and the influence of
//! two external entities, C and D, on A and B. The enumeration can be listed
//! as numbered text lines or drawn as a labeled grid of panels and written
//! to a PNG file.

pub mod config;
pub mod layout;
pub mod listing;
pub mod scenario;

mod error;
mod export;

pub use interactions_core::{color, draw, geometry};

pub use error::InteractionsError;
pub use scenario::{Model, Scenario};

use std::path::Path;

use log::{debug, info};

use interactions_core::draw::Canvas;

use config::AppConfig;
use export::GridRenderer;
use layout::GridLayout;

/// Builder for listing and rendering interaction grids.
///
/// # Examples
///
/// ```rust,no_run
/// use interactions::{GridBuilder, Model, config::AppConfig};
///
/// let builder = GridBuilder::new(AppConfig::default());
///
/// // Numbered titles, one per scenario
/// for line in builder.list(Model::Basic, false) {
///     println!("{line}");
/// }
///
/// // The full grid in eight columns
/// builder
///     .render_png(Model::Basic, 8, "interactions.png")
///     .expect("Failed to render");
/// ```
#[derive(Debug, Default)]
pub struct GridBuilder {
    config: AppConfig,
}

impl GridBuilder {
    /// Create a new grid builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Enumerates the scenarios of `model` in their fixed order.
    pub fn scenarios(&self, model: Model) -> Vec<Scenario> {
        scenario::generate(model)
    }

    /// Formats the numbered listing of `model`, with subtitles when `long`.
    pub fn list(&self, model: Model, long: bool) -> Vec<String> {
        listing::list_lines(&self.scenarios(model), long)
    }

    /// Draws every scenario of `model` into a grid with `columns` columns.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionsError::InvalidColumns`] if `columns < 1`,
    /// [`InteractionsError::Config`] if a configured color is invalid, and
    /// [`InteractionsError::Layout`] if the grid would be too large.
    ///
    /// # Examples
    ///
    /// ```
    /// # use interactions::{GridBuilder, Model};
    /// let canvas = GridBuilder::default().render(Model::Basic, 8).unwrap();
    /// assert_eq!((canvas.width(), canvas.height()), (3060, 2130));
    ///
    /// assert!(GridBuilder::default().render(Model::Basic, 0).is_err());
    /// ```
    pub fn render(&self, model: Model, columns: i64) -> Result<Canvas, InteractionsError> {
        let scenarios = self.scenarios(model);
        info!(model = model.name(), scenarios = scenarios.len(), columns; "Rendering grid");

        let layout = GridLayout::new(self.config.layout(), scenarios.len(), columns)?;
        let palette = self
            .config
            .style()
            .palette()
            .map_err(InteractionsError::Config)?;
        debug!(width = layout.width(), height = layout.height(); "Allocating grid");

        Ok(GridRenderer::new(layout, palette, model).render(&scenarios))
    }

    /// Renders the grid and writes it to `path` as PNG.
    ///
    /// Nothing is written when rendering fails, so an invalid column count
    /// never leaves a file behind.
    ///
    /// # Errors
    ///
    /// Everything [`GridBuilder::render`] returns, plus
    /// [`InteractionsError::Export`] if the file cannot be created or encoded.
    pub fn render_png(
        &self,
        model: Model,
        columns: i64,
        path: impl AsRef<Path>,
    ) -> Result<(), InteractionsError> {
        let path = path.as_ref();
        let canvas = self.render(model, columns)?;
        export::write_png(&canvas, path)?;

        info!(output_file = path.display().to_string(); "PNG exported successfully");
        Ok(())
    }
}
