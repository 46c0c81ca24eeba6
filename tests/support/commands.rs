//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envseal command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME pointing at the temporary home
    /// - ENVSEAL_KEY removed so the ambient environment can't leak in
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("envseal").expect("failed to find envseal binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env_remove("ENVSEAL_KEY");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `envseal encrypt --key KEY INPUT [OUTPUT]`.
    pub fn encrypt(&self, key: &str, input: &str, output: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["encrypt", "--key", key, input]);
        if let Some(out) = output {
            cmd.arg(out);
        }
        cmd.output().expect("failed to run envseal encrypt")
    }

    /// Shortcut for `envseal encrypt INPUT` (no explicit key).
    pub fn encrypt_no_key(&self, input: &str) -> Output {
        self.cmd()
            .args(["encrypt", input])
            .output()
            .expect("failed to run envseal encrypt")
    }

    /// Shortcut for `envseal decrypt --key KEY FILE`.
    pub fn decrypt(&self, key: &str, file: &str) -> Output {
        self.cmd()
            .args(["decrypt", "--key", key, file])
            .output()
            .expect("failed to run envseal decrypt")
    }

    /// Shortcut for `envseal decrypt FILE` (no explicit key).
    pub fn decrypt_no_key(&self, file: &str) -> Output {
        self.cmd()
            .args(["decrypt", file])
            .output()
            .expect("failed to run envseal decrypt")
    }

    /// Shortcut for `envseal run --key KEY FILE -- CMD...`.
    pub fn run(&self, key: &str, file: &str, command: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["run", "--key", key, file, "--"]);
        cmd.args(command);
        cmd.output().expect("failed to run envseal run")
    }
}
