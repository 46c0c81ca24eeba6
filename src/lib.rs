//! Envseal - authenticated encryption for .env files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Encrypt a plaintext .env file
//! │   ├── decrypt       # Decrypt to stdout
//! │   ├── edit          # Edit through $EDITOR and re-encrypt
//! │   ├── run           # Run a command with variables injected
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── crypto        # AES-256-GCM container (base64 text)
//!     ├── keys          # Ordered encryption-key resolution
//!     └── env           # .env parsing and environment loading
//! ```
//!
//! # Features
//!
//! - AES-256-GCM authenticated encryption with per-call random nonces
//! - Keys derived from arbitrary-length secrets via SHA-256
//! - Diff-friendly base64 container safe for text-oriented storage
//! - Key resolution from argument, environment, key files, or prompt
//! - Dotenv parsing with injectable environment namespace

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::crypto::{decrypt, encrypt};
pub use crate::core::env::{load_env, parse, EnvMap};
pub use crate::core::keys::KeyResolver;
pub use crate::error::{Error, Result};
