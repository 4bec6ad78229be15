//! Helpers for driving the compiled binary

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run projects-directory with `args`, feeding `stdin` and working in `dir`
pub fn run_with_input(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_projects-directory"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("PROJECTS_DIRECTORY_CATALOG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn projects-directory");

    // The binary may exit before reading everything; a broken pipe is fine
    let mut child_stdin = child.stdin.take().expect("stdin is piped");
    let _ = child_stdin.write_all(stdin.as_bytes());
    drop(child_stdin);

    child.wait_with_output().expect("Failed to wait for projects-directory")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
