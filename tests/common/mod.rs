//! Common test utilities for Ansel CLI tests.
//!
//! Provides `TestEnv` - an isolated project directory plus helpers to
//! run the ansel binary with stubbed external tools on PATH.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an ansel CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// Provides:
/// - Isolated project directory (the working directory of each run)
/// - A stub-tool directory prepended to PATH
/// - CLI command execution helpers
///
/// `SCP_TARGET` is always scrubbed from the child environment so an
/// ambient value on the host never leaks into a test.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory holding stub executables
    pub stub_dir: TempDir,
    /// Path to the ansel binary
    ansel_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            stub_dir: TempDir::new().expect("create stub dir"),
            ansel_bin: PathBuf::from(env!("CARGO_BIN_EXE_ansel")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root, creating parent dirs
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
    }

    /// Run ansel from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run ansel from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = match std::env::var_os("PATH") {
            Some(original) => {
                let mut entries = vec![self.stub_dir.path().to_path_buf()];
                entries.extend(std::env::split_paths(&original));
                std::env::join_paths(entries).expect("join PATH")
            }
            None => self.stub_dir.path().as_os_str().to_os_string(),
        };

        let mut cmd = Command::new(&self.ansel_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("PATH", path)
            .env_remove("SCP_TARGET");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute ansel");
        self.output_to_result(output)
    }

    /// Install a stub executable on the test PATH.
    ///
    /// The stub appends its argument line to `<name>.args` next to
    /// itself, then runs `body`. Returns the record file path.
    #[cfg(unix)]
    pub fn write_stub(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let record = self.stub_dir.path().join(format!("{}.args", name));
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> \"{}\"\n{}\n",
            record.display(),
            body
        );

        let stub_path = self.stub_dir.path().join(name);
        std::fs::write(&stub_path, script).expect("write stub");
        std::fs::set_permissions(&stub_path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod stub");
        record
    }

    /// Convert Command output to TestResult
    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Read the recorded argument lines of a stub, one per invocation
#[allow(dead_code)]
pub fn stub_calls(record: &Path) -> Vec<String> {
    match std::fs::read_to_string(record) {
        Ok(content) => content.lines().map(|l| l.to_string()).collect(),
        Err(_) => Vec::new(),
    }
}
