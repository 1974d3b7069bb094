//! Tests for the `turbo-config` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_turbo-config"))
        .arg("--config-dir")
        .arg(config_dir)
        .args(args)
        .env_remove("TURBO_API")
        .env_remove("TURBO_LOGIN")
        .env_remove("TURBO_TEAM")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_path_points_into_namespace() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["path"]);

    assert!(output.status.success());
    let expected = temp_dir.path().join("turborepo").join("config.json");
    assert_eq!(stdout(&output).trim(), expected.display().to_string());
}

#[test]
fn test_show_without_file_prints_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["show", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["apiUrl"], "https://api.vercel.com");
    assert_eq!(value["loginUrl"], "https://vercel.com");
    assert_eq!(value["token"], "<none>");
}

#[test]
fn test_login_link_logout() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("turborepo").join("config.json");

    let output = run(temp_dir.path(), &["login", "--token", "secret-token"]);
    assert!(output.status.success());

    let output = run(temp_dir.path(), &["link", "--team-id", "team_1", "--team-slug", "acme"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("acme"));

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(stored["token"], "secret-token");
    assert_eq!(stored["teamId"], "team_1");
    assert_eq!(stored["teamSlug"], "acme");

    let output = run(temp_dir.path(), &["show"]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("secret-token"));

    let output = run(temp_dir.path(), &["logout"]);
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "{}");
}

#[test]
fn test_show_applies_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_turbo-config"))
        .arg("--config-dir")
        .arg(temp_dir.path())
        .args(["show", "--json"])
        .env("TURBO_API", "http://localhost:3000")
        .env_remove("TURBO_LOGIN")
        .env_remove("TURBO_TEAM")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["apiUrl"], "http://localhost:3000");

    // Overrides are never persisted.
    assert!(!temp_dir.path().join("turborepo").join("config.json").exists());
}

#[test]
fn test_login_does_not_clobber_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("turborepo").join("config.json");
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, "not json").unwrap();

    let output = run(temp_dir.path(), &["login", "--token", "abc"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: failed to save login"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "not json");
}

#[test]
#[cfg(target_os = "linux")]
fn test_platform_dir_honours_xdg_config_home() {
    let temp_dir = TempDir::new().unwrap();
    let platform_cmd = |args: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_turbo-config"))
            .args(args)
            .env("XDG_CONFIG_HOME", temp_dir.path())
            .env_remove("TURBO_API")
            .env_remove("TURBO_LOGIN")
            .env_remove("TURBO_TEAM")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute command")
    };
    let expected = temp_dir.path().join("turborepo").join("config.json");

    let output = platform_cmd(&["path"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), expected.display().to_string());

    let output = platform_cmd(&["login", "--token", "xdg-token"]);
    assert!(output.status.success());
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&expected).unwrap()).unwrap();
    assert_eq!(stored["token"], "xdg-token");
}
