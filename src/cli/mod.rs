//! Command-line interface.

pub mod completions;
pub mod decrypt;
pub mod edit;
pub mod encrypt;
pub mod output;
pub mod run;

use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::Result;

/// Read an encrypted container file as trimmed text.
///
/// Reads raw bytes and converts lossily: a non-UTF-8 file is not a
/// valid container and should fail base64 decoding, not file reading.
/// Trimming tolerates editor-added surrounding whitespace.
pub(crate) fn read_blob(path: &Path) -> Result<String> {
    let raw = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&raw).trim().to_string())
}

/// Envseal - authenticated encryption for .env files.
#[derive(Parser)]
#[command(
    name = "envseal",
    about = "Authenticated encryption for .env files",
    version,
    after_help = "Seal tight. Ship safe. 🦭"
)]
pub struct Cli {
    /// Encryption key (overrides ENVSEAL_KEY and key files)
    #[arg(short, long, global = true)]
    pub key: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a plaintext .env file
    Encrypt {
        /// Plaintext .env file to encrypt
        input: String,
        /// Output file (defaults to <INPUT>.enc)
        output: Option<String>,
    },

    /// Decrypt an encrypted .env file and print it to stdout
    Decrypt {
        /// Encrypted file
        file: String,
    },

    /// Edit an encrypted .env file in $EDITOR, re-encrypting on save
    Edit {
        /// Encrypted file
        file: String,
    },

    /// Run a command with decrypted variables in its environment
    Run {
        /// Encrypted file
        file: String,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Supported completion shells.
#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Dispatch a parsed command.
pub fn execute(command: Command, key: Option<String>) -> Result<()> {
    let key = key.as_deref();
    match command {
        Command::Encrypt { input, output } => encrypt::execute(&input, output.as_deref(), key),
        Command::Decrypt { file } => decrypt::execute(&file, key),
        Command::Edit { file } => edit::execute(&file, key),
        Command::Run { file, command } => run::execute(&file, &command, key),
        Command::Completions { shell } => completions::execute(shell),
    }
}
