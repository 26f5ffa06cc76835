//! Common test utilities for formpack CLI tests.
//!
//! `TestEnv` gives each test its own project directory and HOME so user
//! config and `FORMPACK_*` variables from the host never leak in.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Child, Command, Output, Stdio};
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Result of running a formpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Isolated project with a `form_templates/` directory
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
        };
        fs::create_dir_all(env.templates_dir()).unwrap();
        env
    }

    /// Project without a template directory
    pub fn empty() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.project_path("form_templates")
    }

    pub fn bundle_path(&self) -> PathBuf {
        self.project_path("static/js/templates.js")
    }

    pub fn write_template(&self, file_name: &str, content: &str) {
        fs::write(self.templates_dir().join(file_name), content).unwrap();
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read_bundle(&self) -> Option<String> {
        fs::read_to_string(self.bundle_path()).ok()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_formpack"));
        cmd.current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("FORMPACK_LOG")
            .env_remove("FORMPACK_SOURCE")
            .env_remove("FORMPACK_EXTENSION")
            .env_remove("FORMPACK_OUTPUT")
            .env_remove("FORMPACK_SEPARATOR")
            .env_remove("FORMPACK_SUPPRESS")
            .env_remove("FORMPACK_PRUNE_MISSING");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command().args(args).output().unwrap().into()
    }

    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command()
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to start formpack")
    }
}

/// Poll `check` until it holds or `timeout` passes.
pub fn wait_until(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if check() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    check()
}
