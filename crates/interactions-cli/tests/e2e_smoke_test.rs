use std::{fs, path::Path};

use tempfile::tempdir;

use interactions::{InteractionsError, Model};
use interactions_cli::{Args, Command, ListArgs, RenderArgs, run};

/// Writes an empty configuration file so the tests never pick up a user config
fn empty_config(dir: &Path) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, "").expect("Failed to write config");
    path.to_string_lossy().to_string()
}

fn render_args(config: &str, output: &Path, model: Model, columns: i64) -> Args {
    Args {
        command: Some(Command::Render(RenderArgs {
            output: output.to_string_lossy().to_string(),
            columns,
            model,
        })),
        config: Some(config.to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_render_models() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(temp_dir.path());

    let cases = [
        (Model::Basic, 8, (3060, 2130)),
        (Model::Timeline, 24, (24 * 360 + 25 * 20, 170 + 32 * 220 + 34 * 20)),
    ];

    for (model, columns, dimensions) in cases {
        let output = temp_dir.path().join(format!("{model}.png"));
        run(&render_args(&config, &output, model, columns))
            .unwrap_or_else(|e| panic!("Failed to render {model}: {e}"));

        let bytes = fs::read(&output).expect("Failed to read output");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "{model} is not a PNG");

        let image = image::load_from_memory(&bytes)
            .expect("Failed to decode PNG")
            .to_rgba8();
        assert_eq!(image.dimensions(), dimensions, "{model}");
    }
}

#[test]
fn e2e_smoke_test_invalid_columns() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(temp_dir.path());

    for columns in [0, -3] {
        let output = temp_dir.path().join(format!("grid{columns}.png"));
        let result = run(&render_args(&config, &output, Model::Basic, columns));

        assert!(
            matches!(result, Err(InteractionsError::InvalidColumns(c)) if c == columns),
            "columns {columns}"
        );
        assert!(!output.exists(), "no file for columns {columns}");
    }
}

#[test]
fn e2e_smoke_test_missing_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.toml");
    let output = temp_dir.path().join("grid.png");

    let args = render_args(&missing.to_string_lossy(), &output, Model::Basic, 8);
    let result = run(&args);

    assert!(matches!(result, Err(InteractionsError::Config(_))));
    assert!(!output.exists());
}

#[test]
fn e2e_smoke_test_configured_background() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[style]\nbackground_color = \"#102030\"\n")
        .expect("Failed to write config");
    let output = temp_dir.path().join("grid.png");

    run(&render_args(&config.to_string_lossy(), &output, Model::Basic, 8))
        .expect("Failed to render");

    let image = image::open(&output).expect("Failed to decode PNG").to_rgba8();
    assert_eq!(image.get_pixel(0, 0).0, [0x10, 0x20, 0x30, 255]);
}

#[test]
fn e2e_smoke_test_list() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(temp_dir.path());

    for model in Model::ALL {
        let args = Args {
            command: Some(Command::List(ListArgs { long: true, model })),
            config: Some(config.clone()),
            log_level: "off".to_string(),
        };
        run(&args).unwrap_or_else(|e| panic!("Failed to list {model}: {e}"));
    }
}

#[test]
fn e2e_smoke_test_list_ignores_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[layout\npanel_width = ").expect("Failed to write config");
    let config = config.to_string_lossy().to_string();

    let list = Args {
        command: Some(Command::List(ListArgs {
            long: false,
            model: Model::Basic,
        })),
        config: Some(config.clone()),
        log_level: "off".to_string(),
    };
    run(&list).expect("Listing should not read the configuration");

    let output = temp_dir.path().join("grid.png");
    let result = run(&render_args(&config, &output, Model::Basic, 8));
    assert!(matches!(result, Err(InteractionsError::Config(_))));
}
