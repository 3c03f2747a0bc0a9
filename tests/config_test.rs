use std::fs;
use tempfile::tempdir;

fn run_with_config(file_name: &str, contents: &str) -> std::process::Output {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join(file_name);
    fs::write(&config_path, contents).unwrap();

    // Nothing listens on port 1, so the run ends in a failed report quickly
    std::process::Command::new(env!("CARGO_BIN_EXE_pagelens"))
        .arg("http://127.0.0.1:1/")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .output()
        .expect("Failed to execute command")
}

fn assert_json_output(output: &std::process::Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be a JSON report");

    assert_eq!(report["url"], "http://127.0.0.1:1/");
    assert!(report["result"]["error_message"].is_string());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_with_json_config() {
    let output = run_with_config(
        "config.json",
        r#"{
        "output": "json",
        "concurrency": 8,
        "timeout": 2
    }"#,
    );

    assert_json_output(&output);
}

#[test]
fn test_cli_with_toml_config() {
    let output = run_with_config(
        "config.toml",
        r#"
output = "json"
concurrency = 8
timeout = 2
"#,
    );

    assert_json_output(&output);
}

#[test]
fn test_cli_with_yaml_config() {
    let output = run_with_config(
        "config.yaml",
        r#"
output: json
concurrency: 8
timeout: 2
"#,
    );

    assert_json_output(&output);
}

#[test]
fn test_cli_with_unknown_config_field() {
    let output = run_with_config("config.json", r#"{ "depth": 3 }"#);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse JSON config"));
}

#[test]
fn test_cli_with_unsupported_config_extension() {
    let output = run_with_config("config.ini", "output=json");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported config file format"));
}

#[test]
fn test_cli_with_missing_config_file() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_pagelens"))
        .arg("http://127.0.0.1:1/")
        .arg("--config")
        .arg("/nonexistent/pagelens.json")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}
