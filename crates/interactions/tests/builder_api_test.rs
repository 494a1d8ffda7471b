//! Integration tests for the GridBuilder API
//!
//! These tests verify that the public API works and is usable.

use tempfile::tempdir;

use interactions::{
    GridBuilder, InteractionsError, Model,
    config::{AppConfig, LayoutConfig, StyleConfig},
};

#[test]
fn test_default_builder_short_listing() {
    let lines = GridBuilder::default().list(Model::Basic, false);

    assert_eq!(lines.first().map(String::as_str), Some("01. A & B: no direct link"));
    assert_eq!(lines.last().map(String::as_str), Some("64. A ↔ B (mutualism)"));
    assert!(lines.iter().all(|line| !line.contains(" — ")));
}

#[test]
fn test_scenarios_per_model() {
    let builder = GridBuilder::default();
    assert_eq!(builder.scenarios(Model::Basic).len(), 64);
    assert_eq!(builder.scenarios(Model::Timeline).len(), 768);
}

#[test]
fn test_list_long_lines() {
    let lines = GridBuilder::default().list(Model::Basic, true);
    assert_eq!(lines.len(), 64);
    for (index, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{:02}. ", index + 1)), "{line}");
        assert!(line.contains(" — C "), "{line}");
    }
}

#[test]
fn test_render_png_writes_expected_dimensions() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("grid.png");

    GridBuilder::default()
        .render_png(Model::Basic, 3, &output)
        .expect("Failed to render");

    let image = image::open(&output).expect("Failed to decode PNG").to_rgba8();
    assert_eq!(image.dimensions(), (3 * 360 + 4 * 20, 50 + 120 + 22 * 220 + 24 * 20));
}

#[test]
fn test_invalid_columns_write_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for columns in [0, -3] {
        let output = temp_dir.path().join(format!("grid{columns}.png"));
        let result = GridBuilder::default().render_png(Model::Basic, columns, &output);

        assert!(
            matches!(result, Err(InteractionsError::InvalidColumns(c)) if c == columns),
            "columns {columns}"
        );
        assert!(!output.exists(), "no file for columns {columns}");
    }
}

#[test]
fn test_builder_with_config() {
    let layout = LayoutConfig::default()
        .with_panel_size(300, 200)
        .with_margin(10);
    let style = StyleConfig::default().with_background_color("#202020");
    let builder = GridBuilder::new(AppConfig::new(layout, style));

    let canvas = builder.render(Model::Basic, 8).expect("Failed to render");
    assert_eq!(canvas.width(), 8 * 300 + 9 * 10);
    assert_eq!(canvas.height(), 50 + 120 + 8 * 200 + 10 * 10);
    assert_eq!(canvas.image().get_pixel(0, 0).0, [0x20, 0x20, 0x20, 255]);
}

#[test]
fn test_invalid_color_is_config_error() {
    let style = StyleConfig::default().with_edge_color("definitely not a color");
    let builder = GridBuilder::new(AppConfig::new(LayoutConfig::default(), style));

    let result = builder.render(Model::Basic, 8);
    assert!(matches!(result, Err(InteractionsError::Config(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = GridBuilder::default();

    let first = builder.render(Model::Basic, 8).expect("Failed to render basic");
    let second = builder.render(Model::Basic, 8).expect("Failed to render basic again");
    assert_eq!(first.image(), second.image(), "Rendering should be deterministic");

    let timeline = builder
        .render(Model::Timeline, 24)
        .expect("Failed to render timeline");
    assert_eq!(timeline.width(), 24 * 360 + 25 * 20);
}
