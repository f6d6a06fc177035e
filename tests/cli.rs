use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn smoothdraw_cmd() -> Command {
    Command::cargo_bin("smoothdraw").expect("binary exists")
}

const GESTURE_SCRIPT: &str = r##"
[[step]]
action = "set-color"
value = "#cc0000"

[[step]]
action = "pointer-down"
x = 10.0
y = 10.0

[[step]]
action = "pointer-move"
x = 50.0
y = 50.0

[[step]]
action = "pointer-up"
"##;

#[test]
fn help_prints_about() {
    smoothdraw_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing surface with smoothed strokes",
        ));
}

#[test]
fn no_script_prints_usage() {
    smoothdraw_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn replay_writes_png_output() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.toml");
    let output = temp.path().join("drawing.png");
    std::fs::write(&script, GESTURE_SCRIPT).unwrap();

    smoothdraw_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("drawing.png"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn config_override_sets_export_directory() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.toml");
    let config = temp.path().join("config.toml");
    let exports = temp.path().join("exports");
    std::fs::write(&script, GESTURE_SCRIPT).unwrap();
    std::fs::write(
        &config,
        format!(
            "[canvas]\nwidth = 64\nheight = 64\n\n[export]\ndirectory = {:?}\nfilename_template = \"final\"\n",
            exports.to_string_lossy()
        ),
    )
    .unwrap();

    smoothdraw_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(exports.join("final.png").exists());
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();
    smoothdraw_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(temp.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.toml");
    let config = temp.path().join("config.toml");
    std::fs::write(&script, GESTURE_SCRIPT).unwrap();
    std::fs::write(&config, "[canvas\n").unwrap();

    smoothdraw_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
