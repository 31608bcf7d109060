//! Shared integration-test harness for running the `critnlp` binary.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Runs `critnlp` with `args` and collects its output.
///
/// Logging is forced quiet through the environment so stderr only carries
/// errors, and the content/color variables are cleared so the caller's
/// shell cannot leak into the test.
#[allow(clippy::missing_panics_doc)]
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_critnlp"))
        .args(args)
        .env_remove("CRITNLP_CONTENT")
        .env_remove("CRITNLP_OUTPUT")
        .env_remove("CRITNLP_LOG_FORMAT")
        .env("CRITNLP_LOG_LEVEL", "error")
        .env("CRITNLP_COLOR", "never")
        .output()
        .expect("failed to run critnlp")
}

/// Runs `critnlp` against a content file.
pub fn run_with_content(content: &Path, args: &[&str]) -> Output {
    let path = content.to_str().expect("non-UTF-8 content path");
    let mut full = vec!["--content", path];
    full.extend_from_slice(args);
    run(&full)
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parses stdout as JSON.
#[allow(clippy::missing_panics_doc)]
pub fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!("stdout is not JSON ({e}): {}", stdout(output));
    })
}

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
