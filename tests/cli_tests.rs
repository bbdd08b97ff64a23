//! Integration tests for the CLI interface
//!
//! Tests the main entry point and command parsing logic

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn linkpage(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linkpage").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("LINKPAGE_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("linkpage").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("build"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("linkpage").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_show_builtin_profile() {
    let temp_dir = TempDir::new().unwrap();

    linkpage(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Victoria Cheng"))
        .stdout(predicate::str::contains(
            "Headline: 🌊 Software Developer | React | TypeScript",
        ))
        .stdout(predicate::str::contains("Socials: 5"))
        .stdout(predicate::str::contains("Links: 2"))
        .stdout(predicate::str::contains(
            "  - React Hooks Series <https://victoriacheng15.vercel.app/tags/react-hooks>",
        ));
}

#[test]
fn test_show_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = linkpage(&temp_dir)
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let profile: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(profile["name"], "Victoria Cheng");
    assert_eq!(profile["socials"].as_array().unwrap().len(), 5);
    assert_eq!(profile["socials"][0]["title"], "GitHub");
    assert_eq!(profile["socials"][4]["title"], "Buy me a coffee");
    assert_eq!(profile["links"][0]["title"], "👋 🐧 Portfolio site 🐧 👋");
    assert!(profile["links"][0].get("category").is_none());
}

#[test]
fn test_show_custom_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("profile.yml"),
        "params:\n  name: Test User\n  links:\n    - title: Blog\n      href: https://blog.example.com\n      category: \"\"\n",
    )
    .unwrap();

    linkpage(&temp_dir)
        .args(["show", "-c", "profile.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Test User"))
        .stdout(predicate::str::contains("Socials: 0"))
        .stdout(predicate::str::contains("Links: 1"));
}

#[test]
fn test_build_without_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    linkpage(&temp_dir)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: error building site"))
        .stderr(predicate::str::contains("config.yml"));
}

#[test]
fn test_init_then_build() {
    let temp_dir = TempDir::new().unwrap();

    linkpage(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    fs::write(temp_dir.path().join("template/static/avatar.jpg"), "jpg").unwrap();

    linkpage(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Build complete"))
        .stdout(predicate::str::contains("5 social, 2 links, 1 static file(s)"));

    let html = fs::read_to_string(temp_dir.path().join("dist/index.html")).unwrap();
    assert!(html.contains("<title>Victoria Cheng</title>"));
    assert!(temp_dir.path().join("dist/static/avatar.jpg").exists());
    assert!(!temp_dir.path().join("dist/static/.gitkeep").exists());
}

#[test]
fn test_init_twice_skips_existing() {
    let temp_dir = TempDir::new().unwrap();

    linkpage(&temp_dir).arg("init").assert().success();
    linkpage(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 file(s) skipped"));
}

#[test]
fn test_build_with_explicit_paths() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("site.yml"),
        "params:\n  name: Test User\n  headline: Hi\n  links:\n    - title: GitHub\n      href: https://github.com/test\n      category: social\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("page.html"), "{{ name }}:{{ socials | length }}").unwrap();
    fs::create_dir_all(temp_dir.path().join("assets")).unwrap();
    fs::write(temp_dir.path().join("assets/site.css"), "body {}").unwrap();

    linkpage(&temp_dir)
        .args([
            "build", "-c", "site.yml", "-t", "page.html", "-o", "public", "-s", "assets",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("public/index.html")).unwrap(),
        "Test User:1"
    );
    assert!(temp_dir.path().join("public/static/site.css").exists());
}

#[test]
fn test_build_rejects_invalid_theme() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.yml"),
        "params:\n  name: Test\n  theme:\n    button: blue\n",
    )
    .unwrap();

    linkpage(&temp_dir)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme colour"));
}

#[test]
fn test_default_log_level_hides_debug() {
    let temp_dir = TempDir::new().unwrap();

    linkpage(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("linkpage started").not());
}

#[test]
fn test_verbose_flag_enables_debug_logging() {
    let temp_dir = TempDir::new().unwrap();

    linkpage(&temp_dir)
        .args(["-v", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("linkpage started with verbosity level"));
}

#[test]
fn test_rust_log_enables_debug_logging() {
    let temp_dir = TempDir::new().unwrap();

    linkpage(&temp_dir)
        .env("RUST_LOG", "debug")
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("linkpage started with verbosity level"));
}

#[test]
fn test_linkpage_log_level_overrides_rust_log() {
    let temp_dir = TempDir::new().unwrap();

    linkpage(&temp_dir)
        .env("RUST_LOG", "debug")
        .env("LINKPAGE_LOG_LEVEL", "warn")
        .args(["-v", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("linkpage started").not());

    linkpage(&temp_dir)
        .env("LINKPAGE_LOG_LEVEL", "debug")
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("linkpage started with verbosity level"));
}

#[test]
fn test_build_rejects_output_inside_static_dir() {
    let temp_dir = TempDir::new().unwrap();
    linkpage(&temp_dir).arg("init").assert().success();
    fs::write(temp_dir.path().join("template/static/avatar.jpg"), "jpg").unwrap();

    linkpage(&temp_dir)
        .args(["build", "-o", "template/static/dist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inside static source"));

    assert!(!temp_dir
        .path()
        .join("template/static/dist/static/avatar.jpg")
        .exists());
}

#[test]
fn test_show_pascal_case_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.yml"),
        "Params:\n  Name: Test User\n  Headline: Hi\n  Socials:\n    - Platform: GitHub\n      Icon: static/icons/github.svg\n      URL: https://github.com/test\n  Links:\n    - Name: Blog\n      URL: https://blog.example.com\n",
    )
    .unwrap();

    linkpage(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Test User"))
        .stdout(predicate::str::contains("Socials: 1"))
        .stdout(predicate::str::contains("Links: 1"));
}
