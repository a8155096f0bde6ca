//! Shared testing utilities for nextdeploy CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SYSTEM_ENV: &str =
    "SERVER_HOST=203.0.113.10\nSERVER_USER=deploy\nSSH_PRIVATE_KEY=\"-----BEGIN KEY-----\"\n";

/// Isolated home and project directories for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Emulated `$HOME`, holding the saved configuration file.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Project directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Command for the compiled binary with an isolated environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nextdeploy").expect("Failed to locate nextdeploy binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("NEXTDEPLOY_GITHUB_TOKEN")
            .env_remove("NEXTDEPLOY_SECRETS_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Command pointed at a secrets service and carrying a token.
    pub fn cli_with_service(&self, secrets_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("NEXTDEPLOY_SECRETS_URL", secrets_url).env("NEXTDEPLOY_GITHUB_TOKEN", "ghp_test");
        cmd
    }

    pub fn write_env(&self, contents: &str) {
        fs::write(self.work_dir.join(".env"), contents).expect("Failed to write .env");
    }

    /// Write `~/.nextdeploy.toml` verbatim.
    pub fn write_config_file(&self, contents: &str) {
        fs::write(self.home().join(".nextdeploy.toml"), contents)
            .expect("Failed to write config file");
    }

    /// Save a named configuration for `acme/shop`.
    pub fn save_config(&self, name: &str, variant: &str, production: Option<(&str, u16)>) {
        let mut toml = format!(
            "[saved.{name}]\nvariant = \"{variant}\"\nrepository = \"acme/shop\"\n\
             domain = \"shop.example.com\"\nenv_file = \".env\"\n"
        );
        if let Some((domain, port)) = production {
            toml.push_str(&format!(
                "production_branch = true\n\n[saved.{name}.production]\ndomain = \"{domain}\"\nport = {port}\n"
            ));
        }
        self.write_config_file(&toml);
    }

    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn output_exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    pub fn config_file(&self) -> String {
        fs::read_to_string(self.home().join(".nextdeploy.toml")).unwrap_or_default()
    }
}
