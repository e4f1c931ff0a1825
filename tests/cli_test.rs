use clap::{error::ErrorKind, Parser};
use modulegen::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("modulegen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["--name", "redis", "--image", "redis:latest"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "redis");
    assert_eq!(parsed.image, "redis:latest");
    assert_eq!(parsed.title, None);
    assert_eq!(parsed.root_dir, PathBuf::from(".."));
    assert_eq!(parsed.template_dir, None);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--name",
        "mongodb",
        "--title",
        "MongoDB",
        "--image",
        "mongo:6",
        "--root-dir",
        "/project",
        "--template-dir",
        "/templates",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.title.as_deref(), Some("MongoDB"));
    assert_eq!(parsed.root_dir, PathBuf::from("/project"));
    assert_eq!(parsed.template_dir, Some(PathBuf::from("/templates")));
    assert!(parsed.verbose);
}

#[test]
fn test_missing_image() {
    let args = make_args(&["--name", "redis"]);
    let err = Args::try_parse_from(args).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_missing_name() {
    let args = make_args(&["--image", "redis:latest"]);
    let err = Args::try_parse_from(args).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_generator_config_defaults_to_bundled_templates() {
    let args = make_args(&["--name", "redis", "--image", "redis:latest", "--root-dir", "/project"]);
    let config = Args::try_parse_from(args).unwrap().generator_config();

    assert_eq!(config.root_dir, PathBuf::from("/project"));
    assert_eq!(config.template_dir, PathBuf::from("/project/examples/_template"));
    assert_eq!(config.templates.len(), 8);
}

#[test]
fn test_generator_config_with_template_dir() {
    let args = make_args(&[
        "--name",
        "redis",
        "--image",
        "redis:latest",
        "--template-dir",
        "/templates",
    ]);
    let config = Args::try_parse_from(args).unwrap().generator_config();

    assert_eq!(config.template_dir, PathBuf::from("/templates"));
}

#[test]
fn test_missing_flag_exits_with_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_modulegen"))
        .args(["--name", "redis"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--image"), "{stderr}");
    assert_eq!(stderr.matches("Usage:").count(), 1, "{stderr}");
}

#[test]
fn test_invalid_name_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_modulegen"))
        .args(["--name", "redis7", "--image", "redis:latest", "--root-dir"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with(">> error generating the example: invalid name: 'redis7'"),
        "{stdout}"
    );
}

#[test]
fn test_invalid_title_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_modulegen"))
        .args(["--name", "mongodb", "--title", "Mongo DB", "--image", "mongo:6", "--root-dir"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid title: 'Mongo DB'"), "{stdout}");
}
