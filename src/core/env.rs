//! Parsing and loading of decrypted .env content.
//!
//! The plaintext format is one `NAME=VALUE` per line. Blank lines and
//! `#` comments are skipped; lines that don't look like an assignment
//! to a valid variable name are silently ignored, matching the lenient
//! behavior expected of dotenv loaders.

use std::fs;
use std::path::Path;

use crate::core::crypto;
use crate::error::{Error, Result};

/// Parsed environment variables, insertion order preserved.
///
/// Names are unique: a later duplicate overwrites the earlier value in
/// place, keeping the original position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvMap {
    pairs: Vec<(String, String)>,
}

impl EnvMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, overwriting an existing name in place.
    pub fn insert(&mut self, name: String, value: String) {
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl IntoIterator for EnvMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Destination for parsed variables.
///
/// `load_env` installs pairs through this trait so tests can capture
/// them in a fake namespace instead of mutating the real process
/// environment.
pub trait EnvSink {
    fn set_var(&mut self, name: &str, value: &str);
}

/// The real process environment.
///
/// Mutating it is a process-wide side effect; concurrent callers must
/// synchronize externally.
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set_var(&mut self, name: &str, value: &str) {
        std::env::set_var(name, value);
    }
}

/// Parse .env text into an [`EnvMap`].
///
/// Rules, applied per trimmed line:
/// - empty lines and lines starting with `#` are skipped;
/// - the line must be `NAME=VALUE` with NAME matching
///   `[A-Za-z_][A-Za-z0-9_]*`; anything else is silently ignored;
/// - VALUE is everything after the first `=`, with whitespace around
///   the `=` stripped;
/// - one matching pair of surrounding `"` or `'` is stripped from
///   VALUE (a single layer, never recursively);
/// - a later duplicate NAME overwrites the earlier value.
pub fn parse(text: &str) -> EnvMap {
    let mut map = EnvMap::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            continue;
        };

        let name = name.trim_end();
        if !is_valid_name(name) {
            continue;
        }

        let value = unquote(value.trim_start());
        map.insert(name.to_string(), value.to_string());
    }

    map
}

/// Valid variable name: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strip one matching pair of surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Decrypt an encrypted .env file and install its variables into the
/// process environment.
///
/// Returns the parsed map. The environment mutation is a deliberate
/// process-wide side effect; use [`load_env_with`] and a fake
/// [`EnvSink`] to avoid it.
///
/// # Errors
///
/// Returns `Error::NotFound` if the file is missing (checked before
/// any cryptography), or a `CryptoError` if decryption fails.
pub fn load_env(path: impl AsRef<Path>, key: &[u8]) -> Result<EnvMap> {
    load_env_with(path, key, &mut ProcessEnv)
}

/// [`load_env`] with an injected destination namespace.
pub fn load_env_with(
    path: impl AsRef<Path>,
    key: &[u8],
    sink: &mut impl EnvSink,
) -> Result<EnvMap> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    // Raw read: a non-UTF-8 file fails base64 decoding, not file reading.
    let raw = fs::read(path)?;
    let plaintext = crypto::decrypt(String::from_utf8_lossy(&raw).trim(), key)?;

    let map = parse(&String::from_utf8_lossy(&plaintext));
    for (name, value) in map.iter() {
        sink.set_var(name, value);
    }

    Ok(map)
}
