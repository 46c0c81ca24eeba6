//! Edit command.
//!
//! Decrypts a file into a private tempfile, opens $EDITOR on it, and
//! re-encrypts the result if the content changed.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::cli::output;
use crate::core::crypto;
use crate::core::keys::KeyResolver;
use crate::error::{Error, Result};

/// Edit `file` through the user's editor.
pub fn execute(file: &str, key: Option<&str>) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let key = KeyResolver::new().fetch_key(key)?;

    let blob = crate::cli::read_blob(path)?;
    let original = crypto::decrypt(&blob, key.as_bytes())?;

    // NamedTempFile is created 0600 on Unix, so the decrypted content
    // is not readable by other users while the editor runs.
    let temp = tempfile::Builder::new()
        .prefix("envseal-")
        .suffix(".env")
        .tempfile()?;
    fs::write(temp.path(), &original)?;

    output::hint("waiting for the editor to exit, abort with Ctrl-C");
    run_editor(temp.path())?;

    let updated = fs::read(temp.path())?;
    if updated == original {
        output::hint("no changes, file left untouched");
        return Ok(());
    }

    let blob = crypto::encrypt(&updated, key.as_bytes())?;
    fs::write(path, blob)?;
    info!("re-encrypted {}", file);

    output::success(&format!("encrypted and saved {}", output::path(file)));
    Ok(())
}

/// Launch $EDITOR (fallback: vim) on the given path.
///
/// $EDITOR may carry arguments ("code --wait"), so it is split on
/// whitespace rather than treated as a bare program name.
fn run_editor(path: &Path) -> Result<()> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| Error::Other("EDITOR is set but empty".to_string()))?;

    let status = Command::new(program).args(parts).arg(path).status()?;
    if !status.success() {
        return Err(Error::Other(format!(
            "editor {} exited with an error, changes discarded",
            editor
        )));
    }
    Ok(())
}
