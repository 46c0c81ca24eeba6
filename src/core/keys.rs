//! Encryption-key resolution.
//!
//! Locates the secret key before any cryptographic operation, checking
//! sources in strict priority order:
//!
//! 1. an explicit key passed by the caller (`--key` on the CLI);
//! 2. the `ENVSEAL_KEY` environment variable;
//! 3. the first existing key file: `./.envseal.key`, then
//!    `$XDG_CONFIG_HOME/envseal/secret.key` (falling back to
//!    `~/.config/envseal/secret.key`), then the legacy `~/.envseal.key`;
//! 4. an interactive prompt with echo disabled.
//!
//! Keys are resolved fresh on every call, never cached and never
//! written anywhere. Candidate paths are evaluated at call time, so a
//! key file created between calls is picked up.

use std::env;
use std::fs;
use std::path::PathBuf;

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{KeyError, Result};

/// Environment variable consulted for the encryption key.
pub const KEY_ENV_VAR: &str = "ENVSEAL_KEY";

/// Project-local key file, looked up in the current directory.
pub const PROJECT_KEY_FILE: &str = ".envseal.key";

/// Key file under the per-user config directory.
const CONFIG_KEY_FILE: &str = "secret.key";

/// Legacy per-user dotfile, kept for backward compatibility.
const LEGACY_KEY_FILE: &str = ".envseal.key";

/// Interactive key prompt capability.
///
/// Injected into [`KeyResolver`] so tests can substitute a fake and
/// embedders can supply their own input mechanism.
pub trait KeyPrompt {
    /// Read a key from the user without echoing input.
    fn read_key(&self) -> Result<String>;
}

/// Masked terminal prompt, the production [`KeyPrompt`].
pub struct TerminalPrompt;

impl KeyPrompt for TerminalPrompt {
    fn read_key(&self) -> Result<String> {
        let key = Password::new()
            .with_prompt("Enter encryption key")
            .allow_empty_password(true)
            .interact()
            .map_err(KeyError::Prompt)?;
        Ok(key)
    }
}

/// Ordered key-resolution strategy.
///
/// The environment variable name and the candidate file list are
/// injectable for tests; production callers use [`KeyResolver::new`].
pub struct KeyResolver<P = TerminalPrompt> {
    env_var: String,
    candidates: Option<Vec<PathBuf>>,
    prompt: P,
}

impl KeyResolver<TerminalPrompt> {
    /// Resolver with the default sources and a terminal prompt.
    pub fn new() -> Self {
        Self::with_prompt(TerminalPrompt)
    }
}

impl Default for KeyResolver<TerminalPrompt> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: KeyPrompt> KeyResolver<P> {
    /// Resolver with a custom prompt implementation.
    pub fn with_prompt(prompt: P) -> Self {
        Self {
            env_var: KEY_ENV_VAR.to_string(),
            candidates: None,
            prompt,
        }
    }

    /// Override the environment variable consulted at priority 2.
    pub fn env_var(mut self, var: impl Into<String>) -> Self {
        self.env_var = var.into();
        self
    }

    /// Override the candidate key-file list consulted at priority 3.
    pub fn candidates(mut self, paths: Vec<PathBuf>) -> Self {
        self.candidates = Some(paths);
        self
    }

    /// Resolve the encryption key, first match wins.
    ///
    /// The returned key is zeroized on drop. File content is trimmed of
    /// surrounding whitespace; the explicit argument and environment
    /// variable are used verbatim, and empty values are skipped.
    ///
    /// # Errors
    ///
    /// An existing-but-unreadable candidate file fails loudly with
    /// `KeyError::Unreadable` rather than falling through: silently
    /// skipping it could resolve a different key and produce an
    /// undecryptable file later.
    pub fn fetch_key(&self, explicit: Option<&str>) -> Result<Zeroizing<String>> {
        if let Some(key) = explicit {
            if !key.is_empty() {
                debug!("using explicit key");
                return Ok(Zeroizing::new(key.to_string()));
            }
        }

        if let Ok(key) = env::var(&self.env_var) {
            if !key.is_empty() {
                debug!("using key from {}", self.env_var);
                return Ok(Zeroizing::new(key));
            }
        }

        for path in self.candidate_paths() {
            if path.exists() {
                debug!("using key file {}", path.display());
                let content =
                    fs::read_to_string(&path).map_err(|source| KeyError::Unreadable {
                        path: path.display().to_string(),
                        source,
                    })?;
                return Ok(Zeroizing::new(content.trim().to_string()));
            }
        }

        debug!("no key source found, prompting");
        Ok(Zeroizing::new(self.prompt.read_key()?))
    }

    fn candidate_paths(&self) -> Vec<PathBuf> {
        match &self.candidates {
            Some(paths) => paths.clone(),
            None => default_candidates(),
        }
    }
}

/// Default candidate key files, in priority order.
///
/// The project-local path is relative so it resolves against the
/// current working directory at the time of the call.
pub fn default_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(PROJECT_KEY_FILE)];

    if let Some(dir) = config_dir() {
        paths.push(dir.join("envseal").join(CONFIG_KEY_FILE));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(LEGACY_KEY_FILE));
    }

    paths
}

/// Per-user config directory following the XDG convention:
/// `$XDG_CONFIG_HOME` when set, otherwise `~/.config`.
fn config_dir() -> Option<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|home| home.join(".config")),
    }
}
