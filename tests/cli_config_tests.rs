//! End-to-end tests for `aacboard config` commands.

use std::path::Path;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the aacboard binary
fn aacboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_aacboard")
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to share config between commands in one test.
fn isolated_config_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(aacboard_bin());
    cmd.env("AACBOARD_CONFIG_DIR", config_dir);
    cmd.env_remove("AACBOARD_LOG");
    cmd.args(args);
    cmd
}

fn show_json(config_dir: &Path) -> serde_json::Value {
    let output = isolated_config_command(&["config", "show", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = create_temp_config_dir();

    let output = isolated_config_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AAC Board Configuration"));
    assert!(stdout.contains("Default Board: (not configured)"));
    assert!(stdout.contains("Level: warn"));
}

#[test]
fn test_config_show_json_schema() {
    let config_dir = create_temp_config_dir();
    let result = show_json(config_dir.path());

    assert!(result["config_file"].is_string());
    assert!(result["paths"].is_object(), "Should have paths object");
    assert!(result["paths"]["default_board"].is_null());
    assert_eq!(result["logging"]["level"], "warn");
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_log_level() {
    let config_dir = create_temp_config_dir();

    let output = isolated_config_command(
        &["config", "set", "--log-level", "DEBUG"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert!(config_dir.path().join("config.toml").exists());

    let result = show_json(config_dir.path());
    assert_eq!(result["logging"]["level"], "debug");
}

#[test]
fn test_config_set_invalid_log_level() {
    let config_dir = create_temp_config_dir();

    let output = isolated_config_command(
        &["config", "set", "--log-level", "loud"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid log level"));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_requires_option() {
    let config_dir = create_temp_config_dir();

    let output = isolated_config_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_default_board_used_when_flag_omitted() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);
    let config_dir = create_temp_config_dir();

    let output = isolated_config_command(
        &[
            "config",
            "set",
            "--default-board",
            board_path.to_str().unwrap(),
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let result = show_json(config_dir.path());
    assert!(result["paths"]["default_board"]
        .as_str()
        .unwrap()
        .ends_with("board.txt"));

    let output = isolated_config_command(
        &["select", "img/clothing/hanger.png", "img/clothing/shoes.png"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "select should use the default board. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "shoes\n");
}

#[test]
fn test_config_set_directory_as_board() {
    let config_dir = create_temp_config_dir();

    let output = isolated_config_command(
        &[
            "config",
            "set",
            "--default-board",
            config_dir.path().to_str().unwrap(),
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
