use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

fn empty_config(dir: &Path) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, "").expect("write config");
    path.to_string_lossy().to_string()
}

#[test]
fn cli_lists_basic_scenarios() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = empty_config(tmp.path());

    let exe = assert_cmd::cargo_bin!("interactions");
    let assert = Command::new(exe)
        .current_dir(tmp.path())
        .args(["list", "--long", "--config", config.as_str()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 64);
    for (index, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{:02}. ", index + 1)), "{line}");
        assert!(line.contains(" — "), "{line}");
    }
}

#[test]
fn cli_without_subcommand_prints_usage() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("interactions");
    let assert = Command::new(exe)
        .current_dir(tmp.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
    assert!(stdout.contains("Usage"), "{stdout}");
    assert!(stdout.contains("render"), "{stdout}");
    assert!(stdout.contains("list"), "{stdout}");
}

#[test]
fn cli_help_forms_print_usage() {
    for args in [["help"], ["--help"], ["-h"]] {
        let exe = assert_cmd::cargo_bin!("interactions");
        let assert = Command::new(exe).args(args).assert().success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
        assert!(stdout.contains("Usage"), "{args:?}: {stdout}");
    }
}

#[test]
fn cli_renders_png() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = empty_config(tmp.path());
    let out = tmp.path().join("grid.png");

    let exe = assert_cmd::cargo_bin!("interactions");
    Command::new(exe)
        .current_dir(tmp.path())
        .args([
            "render",
            "--columns",
            "3",
            "-o",
            out.to_string_lossy().as_ref(),
            "--config",
            config.as_str(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
    let image = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((image.width(), image.height()), (1160, 5490));
}

#[test]
fn cli_rejects_negative_columns() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = empty_config(tmp.path());
    let out = tmp.path().join("grid.png");

    let exe = assert_cmd::cargo_bin!("interactions");
    Command::new(exe)
        .current_dir(tmp.path())
        .args([
            "render",
            "--columns",
            "-3",
            "-o",
            out.to_string_lossy().as_ref(),
            "--config",
            config.as_str(),
        ])
        .assert()
        .failure();

    assert!(!out.exists(), "no PNG should be written");
}

#[test]
fn cli_reports_errors_with_logging_off() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = empty_config(tmp.path());
    let out = tmp.path().join("grid.png");

    let exe = assert_cmd::cargo_bin!("interactions");
    let assert = Command::new(exe)
        .current_dir(tmp.path())
        .args([
            "render",
            "--columns",
            "0",
            "-o",
            out.to_string_lossy().as_ref(),
            "--log-level",
            "off",
            "--config",
            config.as_str(),
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8 stderr");
    assert!(stderr.contains("columns must be at least 1"), "{stderr}");
    assert!(!out.exists(), "no PNG should be written");
}

#[test]
fn cli_rejects_unknown_model() {
    let exe = assert_cmd::cargo_bin!("interactions");
    Command::new(exe)
        .args(["list", "--model", "venn"])
        .assert()
        .failure();
}
