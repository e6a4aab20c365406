use serde_json::{Value, json};
use std::ffi::OsStr;
use std::process::{Command, Output};

fn run_xke<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_xke");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("xke command should execute")
}

fn describe(output: &Output) -> String {
    format!(
        "xke exited with {:?}\nstdout:\n{}\nstderr:\n{}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    )
}

fn assert_success(output: &Output) {
    assert!(output.status.success(), "{}", describe(output));
}

/// Failures must be reported on stderr with exit code 1, never a panic.
fn assert_reported_error(output: &Output, message: &str) {
    assert_eq!(output.status.code(), Some(1), "{}", describe(output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("error: {message}")), "{}", describe(output));
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e})\n{}", describe(output)))
}

#[test]
fn list_json_names_every_exercise() {
    let output = run_xke(["list", "--json"]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    let names: Vec<&str> = payload["exercises"]
        .as_array()
        .expect("exercises should be an array")
        .iter()
        .map(|entry| entry["name"].as_str().expect("name should be a string"))
        .collect();
    assert_eq!(names.len(), 13);
    assert!(names.contains(&"compute_total_price"));
    assert!(names.contains(&"convert_url_param"));
}

#[test]
fn run_prints_plain_output() {
    let output = run_xke(["run", "factorial", "--input", "5"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "120");
}

#[test]
fn run_json_wraps_input_and_output() {
    let output = run_xke([
        "run",
        "compute_total_price",
        "--json",
        "--input",
        r#"[{"kind":"standard","value":10},{"kind":"promotional","value":20,"discount":5},{"kind":"promotional","value":30,"discount":10}]"#,
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["exercise"], json!("compute_total_price"));
    assert_eq!(payload["output"], json!(40));
}

#[test]
fn run_absent_value_prints_null() {
    let output = run_xke(["run", "convert_url_param", "--input", r#""http://x""#]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "null");
}

#[test]
fn run_defaults_input_to_null() {
    let output = run_xke(["run", "url"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), r#""https://blog.xebia.fr:443""#);
}

#[test]
fn run_unknown_exercise_fails() {
    let output = run_xke(["run", "divide", "--input", "[1, 0]"]);
    assert_reported_error(&output, "unknown exercise: divide");
}

#[test]
fn run_rejects_malformed_json() {
    let output = run_xke(["run", "factorial", "--input", "{not json"]);
    assert_reported_error(&output, "input is not valid JSON");
}

#[test]
fn run_rejects_mistyped_input() {
    let output = run_xke(["run", "product", "--input", "3"]);
    assert_reported_error(&output, "invalid input for product");
}

#[test]
fn run_overflowing_sum_wraps() {
    let output = run_xke(["run", "sum_sequence_numbers", "--input", "200000"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "-1923301259");
}

#[test]
fn run_rejects_oversized_list() {
    let output = run_xke(["run", "generate_integer_list", "--input", "2147483647"]);
    assert_reported_error(&output, "invalid input for generate_integer_list");
}

#[test]
fn constants_json() {
    let output = run_xke(["constants", "--json"]);
    assert_success(&output);
    assert_eq!(
        parse_json_stdout(&output),
        json!({ "host": "xebia.fr", "port": 443, "url": "https://blog.xebia.fr:443" })
    );
}

#[test]
fn verbose_logs_go_to_stderr() {
    let output = run_xke(["--verbose", "run", "pair", "--input", "4"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "true");
    assert!(String::from_utf8_lossy(&output.stderr).contains("evaluating exercise"));
}
