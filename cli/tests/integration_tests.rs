use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("clc_cli_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Two-command catalog used by most tests.
fn write_catalog(dir: &TempDir) -> PathBuf {
    let json = serde_json::json!([
        { "command": "help", "description": "Show this information" },
        {
            "command": "check",
            "description": "Check a file",
            "options": [{ "shortName": "v", "longName": "verbose" }],
            "parameters": ["file"],
            "parameterCount": 1
        }
    ]);
    let path = dir.join("commands.json");
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap())
        .expect("failed to write catalog");
    path
}

fn clc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run clc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_prints_aligned_table() {
    let dir = TempDir::new("help_table");
    let catalog = write_catalog(&dir);

    let output = clc(&["help", "--catalog", catalog.to_str().unwrap(), "--title", "Tool"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("Tool\n\nUsage:\n"));
    assert!(text.contains("Command Description           Options       Parameters\n"));
    assert!(text.contains("help    Show this information\n"));
    assert!(text.contains("check   Check a file          -v, --verbose <file>\n"));
}

#[test]
fn help_uses_config_for_title_and_catalog() {
    let dir = TempDir::new("help_config");
    write_catalog(&dir);
    let config = dir.join("help.yml");
    fs::write(
        &config,
        "title: From Config\nusage_statement: \"tool <command>\"\ncatalog: commands.json\n",
    )
    .unwrap();

    let output = clc(&["help", "--config", config.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("From Config\n\nUsage:\ntool <command>\n\n"));
}

#[test]
fn help_log_output_goes_to_stderr() {
    let dir = TempDir::new("help_log");
    let catalog = write_catalog(&dir);

    let output = clc(&["help", "--catalog", catalog.to_str().unwrap(), "--log"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Show this information"));
}

#[test]
fn help_without_catalog_fails() {
    let output = clc(&["help"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: Specify --catalog"));
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_prints_matched_command_as_json() {
    let dir = TempDir::new("parse_json");
    let catalog = write_catalog(&dir);

    let output = clc(&[
        "parse",
        "--catalog",
        catalog.to_str().unwrap(),
        "--",
        "check",
        "notes.txt",
        "--verbose",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["command"], "check");
    assert_eq!(value["parameters"], serde_json::json!(["notes.txt"]));
    assert_eq!(value["options"][0]["longName"], "verbose");
    assert_eq!(value["parameterCount"], 1);
}

#[test]
fn parse_prints_yaml_when_asked() {
    let dir = TempDir::new("parse_yaml");
    let catalog = write_catalog(&dir);

    let output = clc(&[
        "parse",
        "--catalog",
        catalog.to_str().unwrap(),
        "--format",
        "yaml",
        "--",
        "check",
        "notes.txt",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("command: check\n"));
}

#[test]
fn parse_help_request_prints_help() {
    let dir = TempDir::new("parse_help");
    let catalog = write_catalog(&dir);

    let output = clc(&["parse", "--catalog", catalog.to_str().unwrap(), "--", "check", "-?"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:\n"));
}

#[test]
fn parse_unknown_option_exits_with_two() {
    let dir = TempDir::new("parse_unknown_option");
    let catalog = write_catalog(&dir);

    let output = clc(&[
        "parse",
        "--catalog",
        catalog.to_str().unwrap(),
        "--",
        "check",
        "notes.txt",
        "-z",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("error: Unknown option: -z."));
    assert!(stdout(&output).contains("Usage:\n"));
}

#[test]
fn parse_without_arguments_exits_with_two() {
    let dir = TempDir::new("parse_empty");
    let catalog = write_catalog(&dir);

    let output = clc(&["parse", "--catalog", catalog.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("error: There are no arguments given."));
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_reports_counts() {
    let dir = TempDir::new("validate_ok");
    let catalog = write_catalog(&dir);

    let output = clc(&["validate", catalog.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        "Validated 1 catalog file(s) with 2 command(s)."
    );
}

#[test]
fn validate_rejects_duplicate_commands() {
    let dir = TempDir::new("validate_dupes");
    let path = dir.join("dupes.yaml");
    fs::write(&path, "- command: check\n- command: check\n").unwrap();

    let output = clc(&["validate", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("duplicate command in catalog: check"));
}
