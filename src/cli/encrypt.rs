//! Encrypt command.
//!
//! Encrypts a plaintext .env file into the base64 container format.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::crypto;
use crate::core::keys::KeyResolver;
use crate::error::{Error, Result};

/// Encrypt `input` into `output` (defaults to `<input>.enc`).
pub fn execute(input: &str, output: Option<&str>, key: Option<&str>) -> Result<()> {
    let input_path = Path::new(input);
    if !input_path.exists() {
        return Err(Error::NotFound(input_path.to_path_buf()));
    }

    let output = match output {
        Some(path) => path.to_string(),
        None => format!("{input}.enc"),
    };
    info!("encrypting {} into {}", input, output);

    let key = KeyResolver::new().fetch_key(key)?;

    let plaintext = fs::read(input_path)?;
    let blob = crypto::encrypt(&plaintext, key.as_bytes())?;

    // Full blob is in memory before anything touches the filesystem.
    fs::write(&output, blob)?;

    output::success(&format!(
        "encrypted {} → {}",
        output::path(input),
        output::path(&output)
    ));
    Ok(())
}
