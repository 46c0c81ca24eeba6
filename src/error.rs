//! Error types for envseal operations.
//!
//! Errors are tiered: each core module has its own enum, and the
//! top-level [`Error`] wraps them for callers that don't care which
//! layer failed. The core never prints; formatting user-facing
//! messages is the binary's job.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors from the encryption container.
///
/// `Decryption` deliberately carries no detail: a wrong key, a flipped
/// byte, and a truncated container must be indistinguishable to the
/// caller so the error channel can't be used as an oracle.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("decryption failed: file is not in valid base64 format")]
    Format(#[from] base64::DecodeError),

    #[error("decryption failed: invalid key, corrupted file, or tampering detected")]
    Decryption,

    #[error("encryption failed")]
    Encryption,
}

/// Errors from key resolution.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("failed to read key file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("key prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Convenience result type for envseal operations.
pub type Result<T> = std::result::Result<T, Error>;
