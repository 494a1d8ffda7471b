//! Configuration types for interaction grid rendering.
//!
//! This module provides configuration structures that control how the grid
//! is laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from external sources, and every field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Panel dimensions and the spacing between panels.
//! - [`StyleConfig`] - Background, panel, node and edge colors.
//!
//! # Example
//!
//! ```
//! # use interactions::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().panel_width(), 360);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use interactions_core::color::Color;

/// Narrowest panel that still leaves room between the node rows' side margins.
const MIN_PANEL_WIDTH: u32 = 120;

/// Shortest panel that still fits the text block and both node rows.
const MIN_PANEL_HEIGHT: u32 = 200;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks that the layout is large enough to draw into and that every
    /// configured color parses.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.style.palette()?;
        Ok(())
    }
}

/// Grid layout dimensions, in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    panel_width: u32,
    panel_height: u32,
    margin: u32,
    title_height: u32,
    legend_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_width: 360,
            panel_height: 220,
            margin: 20,
            title_height: 50,
            legend_height: 120,
        }
    }
}

impl LayoutConfig {
    /// Returns the width of one scenario panel.
    pub fn panel_width(&self) -> u32 {
        self.panel_width
    }

    /// Returns the height of one scenario panel.
    pub fn panel_height(&self) -> u32 {
        self.panel_height
    }

    /// Returns the gap around and between panels.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Returns the height reserved for the heading and attribution.
    pub fn title_height(&self) -> u32 {
        self.title_height
    }

    /// Returns the height of the legend box.
    pub fn legend_height(&self) -> u32 {
        self.legend_height
    }

    /// Sets the panel size.
    pub fn with_panel_size(mut self, width: u32, height: u32) -> Self {
        self.panel_width = width;
        self.panel_height = height;
        self
    }

    /// Sets the margin.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    fn validate(&self) -> Result<(), String> {
        if self.panel_width < MIN_PANEL_WIDTH {
            return Err(format!(
                "panel_width must be at least {MIN_PANEL_WIDTH}, got {}",
                self.panel_width
            ));
        }
        if self.panel_height < MIN_PANEL_HEIGHT {
            return Err(format!(
                "panel_height must be at least {MIN_PANEL_HEIGHT}, got {}",
                self.panel_height
            ));
        }
        Ok(())
    }
}

/// Visual styling configuration, as CSS color strings.
///
/// Fields that are not set fall back to the colors of the [`Palette`] default.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    background_color: Option<String>,
    panel_color: Option<String>,
    node_fill_color: Option<String>,
    node_border_color: Option<String>,
    edge_color: Option<String>,
}

impl StyleConfig {
    /// Sets the background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the edge color string.
    pub fn with_edge_color(mut self, color: impl Into<String>) -> Self {
        self.edge_color = Some(color.into());
        self
    }

    /// Resolves the configured colors over the default [`Palette`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the field if a configured color string cannot
    /// be parsed into a valid [`Color`].
    pub fn palette(&self) -> Result<Palette, String> {
        let defaults = Palette::default();
        Ok(Palette {
            background: parse_color(
                "background_color",
                &self.background_color,
                defaults.background,
            )?,
            panel: parse_color("panel_color", &self.panel_color, defaults.panel)?,
            node_fill: parse_color("node_fill_color", &self.node_fill_color, defaults.node_fill)?,
            node_border: parse_color(
                "node_border_color",
                &self.node_border_color,
                defaults.node_border,
            )?,
            edge: parse_color("edge_color", &self.edge_color, defaults.edge)?,
            ..defaults
        })
    }
}

fn parse_color(field: &str, value: &Option<String>, default: Color) -> Result<Color, String> {
    value
        .as_deref()
        .map_or(Ok(default), Color::new)
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}

/// The resolved colors used to draw a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub heading: Color,
    pub attribution: Color,
    pub legend: Color,
    pub legend_border: Color,
    pub legend_heading: Color,
    pub section_heading: Color,
    pub panel: Color,
    pub panel_border: Color,
    pub title: Color,
    pub subtitle: Color,
    pub node_fill: Color,
    pub node_border: Color,
    pub node_label: Color,
    pub edge: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(240, 240, 240),
            heading: Color::rgb(10, 10, 10),
            attribution: Color::rgb(60, 60, 60),
            legend: Color::rgb(255, 255, 255),
            legend_border: Color::rgb(120, 120, 120),
            legend_heading: Color::rgb(20, 20, 20),
            section_heading: Color::rgb(40, 40, 40),
            panel: Color::rgb(255, 255, 255),
            panel_border: Color::rgb(180, 180, 180),
            title: Color::rgb(20, 20, 20),
            subtitle: Color::rgb(80, 80, 80),
            node_fill: Color::rgb(220, 235, 250),
            node_border: Color::rgb(20, 40, 120),
            node_label: Color::rgb(0, 0, 0),
            edge: Color::rgb(0, 0, 0),
        }
    }
}
