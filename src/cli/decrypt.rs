//! Decrypt command.
//!
//! Decrypts an encrypted .env file and writes the plaintext to stdout.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::core::crypto;
use crate::core::keys::KeyResolver;
use crate::error::{Error, Result};

/// Decrypt `file` to stdout, byte-faithfully.
pub fn execute(file: &str, key: Option<&str>) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    info!("decrypting {}", file);

    let key = KeyResolver::new().fetch_key(key)?;

    let blob = crate::cli::read_blob(path)?;
    let plaintext = crypto::decrypt(&blob, key.as_bytes())?;

    io::stdout().write_all(&plaintext)?;
    Ok(())
}
