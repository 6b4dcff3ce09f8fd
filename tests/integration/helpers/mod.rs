//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Isolated config location for one test.
pub struct TestEnv {
    _dir: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = dir.path().join("config.toml");
        Self {
            _dir: dir,
            config_path,
        }
    }

    /// Create an env whose config file already contains `content`.
    pub fn with_config(content: &str) -> Self {
        let env = Self::new();
        std::fs::write(&env.config_path, content).expect("Failed to write config");
        env
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `qss` command with color and logging disabled and config isolated.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_qss"));
        cmd.env("QSS_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("QSS_LOG");
        cmd
    }

    /// Run qss and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to execute qss");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}

/// Every permutation of `values`, for exhaustive small-input checks.
pub fn permutations(values: &[i64]) -> Vec<Vec<i64>> {
    if values.len() <= 1 {
        return vec![values.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..values.len() {
        let mut rest = values.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}
