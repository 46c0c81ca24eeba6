//! Run command.
//!
//! Executes a command with decrypted variables injected into its
//! environment. The parent process environment is never mutated.

use std::path::Path;

use zeroize::Zeroizing;

use crate::core::crypto;
use crate::core::env;
use crate::core::keys::KeyResolver;
use crate::error::{Error, Result};

/// Run a command with variables from an encrypted .env file.
pub fn execute(file: &str, command: &[String], key: Option<&str>) -> Result<()> {
    let exit_code = run_with_env(file, command, key)?;
    std::process::exit(exit_code);
}

fn run_with_env(file: &str, command: &[String], key: Option<&str>) -> Result<i32> {
    if command.is_empty() {
        return Err(Error::Other("no command specified".to_string()));
    }

    let path = Path::new(file);
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let key = KeyResolver::new().fetch_key(key)?;

    let blob = crate::cli::read_blob(path)?;
    let plaintext = crypto::decrypt(&blob, key.as_bytes())?;
    let vars = env::parse(&String::from_utf8_lossy(&plaintext));

    let mut cmd = std::process::Command::new(&command[0]);
    cmd.args(&command[1..]);

    // Use Zeroizing so decrypted values are wiped once handed over.
    for (name, value) in vars.iter() {
        let value = Zeroizing::new(value.to_string());
        cmd.env(name, value.as_str());
    }

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
